//! # Localization Error Types
//!
//! Errors raised by the translation table and the preference store. None of
//! these ever reach the page: the controller absorbs them by falling back.

use thiserror::Error;

/// Result type alias for localization operations
pub type LocalizationResult<T> = Result<T, LocalizationError>;

/// Errors describing a broken catalog or translation bundle
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LocalizationError {
    /// A supported language has no entry for a key
    #[error("Missing translation for key '{key}' in language '{language}'")]
    MissingTranslation { language: String, key: String },

    /// A supported language maps a key to blank text
    #[error("Empty translation for key '{key}' in language '{language}'")]
    EmptyTranslation { language: String, key: String },

    /// A supported language has no bundle at all
    #[error("No translation bundle for language '{language}'")]
    MissingBundle { language: String },

    /// A bundled translation file could not be parsed
    #[error("Malformed translation bundle for '{language}': {details}")]
    MalformedBundle { language: String, details: String },
}

impl LocalizationError {
    /// Create a new missing translation error
    pub fn missing<L: Into<String>, K: Into<String>>(language: L, key: K) -> Self {
        Self::MissingTranslation {
            language: language.into(),
            key: key.into(),
        }
    }

    /// Create a new empty translation error
    pub fn empty<L: Into<String>, K: Into<String>>(language: L, key: K) -> Self {
        Self::EmptyTranslation {
            language: language.into(),
            key: key.into(),
        }
    }
}

/// Failures of the persisted language preference
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// The backing store does not exist in this environment
    #[error("Preference storage is unavailable")]
    Unavailable,

    /// Reading the stored value failed
    #[error("Failed to read preference '{key}': {message}")]
    Read { key: String, message: String },

    /// Writing the stored value failed (quota, private mode, ...)
    #[error("Failed to write preference '{key}': {message}")]
    Write { key: String, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_translation_display() {
        let error = LocalizationError::missing("ar", "email-error");
        assert_eq!(
            error.to_string(),
            "Missing translation for key 'email-error' in language 'ar'"
        );
    }

    #[test]
    fn test_storage_error_display() {
        let error = StorageError::Write {
            key: "language".to_string(),
            message: "QuotaExceededError".to_string(),
        };
        assert!(error.to_string().contains("QuotaExceededError"));
        assert_eq!(
            StorageError::Unavailable.to_string(),
            "Preference storage is unavailable"
        );
    }
}
