//! Validation rules for the newsletter subscription form.
//!
//! Kept free of DOM access so the rules can be tested natively; the browser
//! crate reads the field values and renders the outcome.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::i18n::TranslationKey;

static EMAIL_PATTERN: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());

/// Values entered in the subscription form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionRequest {
    pub email: String,
    pub name: String,
    pub agreed: bool,
}

/// Form controls that can fail validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Email,
    Name,
    Agreement,
}

impl Field {
    /// Element id of the control.
    #[must_use]
    pub const fn input_id(self) -> &'static str {
        match self {
            Self::Email => "emailInput",
            Self::Name => "nameInput",
            Self::Agreement => "agreeCheck",
        }
    }
}

/// Validation errors that can occur during form validation.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ValidationError {
    /// Email is empty or not shaped like `local@domain.tld`
    InvalidEmail,
    /// Name is empty or whitespace
    NameRequired,
    /// Agreement checkbox is not ticked
    AgreementRequired,
}

impl ValidationError {
    /// The control this error belongs to.
    #[must_use]
    pub const fn field(self) -> Field {
        match self {
            Self::InvalidEmail => Field::Email,
            Self::NameRequired => Field::Name,
            Self::AgreementRequired => Field::Agreement,
        }
    }

    /// Translation key of the message shown under the control.
    #[must_use]
    pub const fn message_key(self) -> TranslationKey {
        match self {
            Self::InvalidEmail => TranslationKey::EmailError,
            Self::NameRequired => TranslationKey::NameError,
            Self::AgreementRequired => TranslationKey::AgreeError,
        }
    }
}

/// Validates an email address.
///
/// # Errors
/// [`ValidationError::InvalidEmail`] unless the trimmed value has exactly
/// one `@`, no whitespace, and a dot in the domain part.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    let trimmed = email.trim();
    let matches = EMAIL_PATTERN
        .as_ref()
        .is_some_and(|pattern| pattern.is_match(trimmed));
    if matches {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail)
    }
}

/// Validates the subscriber name.
///
/// # Errors
/// [`ValidationError::NameRequired`] when the name is blank.
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::NameRequired);
    }
    Ok(())
}

/// Validates the agreement checkbox.
///
/// # Errors
/// [`ValidationError::AgreementRequired`] when unchecked.
pub const fn validate_agreement(agreed: bool) -> Result<(), ValidationError> {
    if agreed {
        Ok(())
    } else {
        Err(ValidationError::AgreementRequired)
    }
}

/// Validates every field, reporting all failures in form order.
///
/// # Errors
/// The non-empty list of failing fields.
pub fn validate(request: &SubscriptionRequest) -> Result<(), Vec<ValidationError>> {
    let errors: Vec<ValidationError> = [
        validate_email(&request.email),
        validate_name(&request.name),
        validate_agreement(request.agreed),
    ]
    .into_iter()
    .filter_map(Result::err)
    .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("user@example.com")]
    #[test_case("test.user@domain.org")]
    #[test_case("user.name+tag@example.com")]
    #[test_case("  padded@example.com  " ; "surrounding whitespace is trimmed")]
    #[test_case("a@b.c")]
    fn test_validate_email_valid(email: &str) {
        assert!(validate_email(email).is_ok());
    }

    #[test_case("" ; "empty")]
    #[test_case("   " ; "whitespace only")]
    #[test_case("userexample.com" ; "missing at")]
    #[test_case("user@example" ; "missing dot in domain")]
    #[test_case("user@@example.com" ; "double at")]
    #[test_case("user @example.com" ; "inner space")]
    #[test_case("@example.com" ; "missing local part")]
    #[test_case("user@.com" ; "missing domain label")]
    fn test_validate_email_invalid(email: &str) {
        assert_eq!(validate_email(email), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn test_validate_name() {
        assert!(validate_name("Layla").is_ok());
        assert!(validate_name("ليلى").is_ok());
        assert_eq!(validate_name(""), Err(ValidationError::NameRequired));
        assert_eq!(validate_name(" \t "), Err(ValidationError::NameRequired));
    }

    #[test]
    fn test_validate_agreement() {
        assert!(validate_agreement(true).is_ok());
        assert_eq!(
            validate_agreement(false),
            Err(ValidationError::AgreementRequired)
        );
    }

    #[test]
    fn test_validate_reports_every_failure_in_order() {
        let request = SubscriptionRequest::default();
        assert_eq!(
            validate(&request),
            Err(vec![
                ValidationError::InvalidEmail,
                ValidationError::NameRequired,
                ValidationError::AgreementRequired,
            ])
        );
    }

    #[test]
    fn test_validate_complete_form() {
        let request = SubscriptionRequest {
            email: "user@example.com".to_string(),
            name: "Layla".to_string(),
            agreed: true,
        };
        assert_eq!(validate(&request), Ok(()));
    }

    #[test]
    fn test_errors_map_to_fields_and_messages() {
        assert_eq!(ValidationError::InvalidEmail.field(), Field::Email);
        assert_eq!(
            ValidationError::NameRequired.message_key(),
            TranslationKey::NameError
        );
        assert_eq!(
            ValidationError::AgreementRequired.field().input_id(),
            "agreeCheck"
        );
    }
}
