//! Site configuration module
//!
//! Defaults are baked in at build time and can be overridden with
//! `ECOSITE_*` environment variables when compiling.

use shared::i18n::DEFAULT_PREFERENCE_KEY;

const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_SUCCESS_MESSAGE_MS: u32 = 3_000;

/// Client configuration for storage, logging and form feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Local storage key holding the language preference
    pub storage_key: String,
    /// `tracing` filter directive for console logging
    pub log_level: String,
    /// How long the subscription success message stays visible
    pub success_message_ms: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            storage_key: option_env!("ECOSITE_LANGUAGE_STORAGE_KEY")
                .unwrap_or(DEFAULT_PREFERENCE_KEY)
                .to_string(),
            log_level: option_env!("ECOSITE_LOG_LEVEL")
                .unwrap_or(DEFAULT_LOG_LEVEL)
                .to_string(),
            success_message_ms: parse_millis(option_env!("ECOSITE_SUCCESS_MESSAGE_MS")),
        }
    }
}

impl SiteConfig {
    /// Create a new site configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the language storage key
    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }
}

fn parse_millis(raw: Option<&str>) -> u32 {
    raw.and_then(|value| value.trim().parse().ok())
        .unwrap_or(DEFAULT_SUCCESS_MESSAGE_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_millis_falls_back_on_garbage() {
        assert_eq!(parse_millis(None), DEFAULT_SUCCESS_MESSAGE_MS);
        assert_eq!(parse_millis(Some("soon")), DEFAULT_SUCCESS_MESSAGE_MS);
        assert_eq!(parse_millis(Some(" 1500 ")), 1_500);
    }

    #[test]
    fn test_site_config_default() {
        let config = SiteConfig::new();
        assert!(!config.storage_key().is_empty());
        assert!(!config.log_level.is_empty());
        assert!(config.success_message_ms > 0);
    }

    #[test]
    fn test_site_config_clone() {
        let config1 = SiteConfig::new();
        let config2 = config1.clone();
        assert_eq!(config1, config2);
    }
}
