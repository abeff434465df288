//! Translation table: language code → (key → text).
//!
//! Bundles are flat JSON objects embedded at compile time. The builtin table
//! is parsed once on first use.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

use super::errors::{LocalizationError, LocalizationResult};
use super::language::{LanguageInfo, resolve_language};

/// Stable identifiers of every localized string on the page.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString, IntoStaticStr,
)]
#[strum(serialize_all = "kebab-case")]
pub enum TranslationKey {
    BrandName,
    TimelineTitle,
    PillarsTitle,
    SubscribeTitle,
    SubscribeDesc,
    EmailLabel,
    EmailHelp,
    EmailError,
    NameLabel,
    NamePlaceholder,
    NameError,
    AgreeLabel,
    AgreeError,
    SubmitBtn,
    SuccessMessage,
}

const BUNDLED: &[(&str, &str)] = &[
    ("en", include_str!("../../translations/en.json")),
    ("ar", include_str!("../../translations/ar.json")),
];

static BUILTIN: Lazy<TranslationTable> = Lazy::new(|| {
    TranslationTable::from_json_sources(BUNDLED.iter().copied()).unwrap_or_else(|error| {
        tracing::error!(%error, "bundled translations could not be parsed");
        TranslationTable::default()
    })
});

/// Localized text for every supported language
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationTable {
    bundles: HashMap<String, HashMap<String, String>>,
}

impl TranslationTable {
    /// The table bundled with the site.
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// Parse `(language, json)` pairs into a table.
    ///
    /// # Errors
    /// Returns [`LocalizationError::MalformedBundle`] when a source is not a
    /// flat JSON object of strings.
    pub fn from_json_sources<'a, I>(sources: I) -> LocalizationResult<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut table = Self::default();
        for (language, raw) in sources {
            let bundle: HashMap<String, String> =
                serde_json::from_str(raw).map_err(|err| LocalizationError::MalformedBundle {
                    language: language.to_string(),
                    details: err.to_string(),
                })?;
            table.insert(language, bundle);
        }
        Ok(table)
    }

    /// Add or replace the bundle for `language`.
    pub fn insert(&mut self, language: impl Into<String>, bundle: HashMap<String, String>) {
        self.bundles.insert(language.into(), bundle);
    }

    /// Text for `key` in `language`, if the table has one.
    #[must_use]
    pub fn get(&self, language: &str, key: TranslationKey) -> Option<&str> {
        self.bundles
            .get(language)
            .and_then(|bundle| bundle.get(key.as_ref()))
            .map(String::as_str)
    }

    /// Languages that have a bundle.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.bundles.keys().map(String::as_str)
    }

    /// Check that every language in `catalog` has non-blank text for every
    /// [`TranslationKey`].
    ///
    /// # Errors
    /// Returns the first gap found.
    pub fn verify_complete(&self, catalog: &[LanguageInfo]) -> LocalizationResult<()> {
        for info in catalog {
            let bundle =
                self.bundles
                    .get(info.code)
                    .ok_or_else(|| LocalizationError::MissingBundle {
                        language: info.code.to_string(),
                    })?;
            for key in TranslationKey::iter() {
                match bundle.get(key.as_ref()) {
                    None => return Err(LocalizationError::missing(info.code, key.as_ref())),
                    Some(text) if text.trim().is_empty() => {
                        return Err(LocalizationError::empty(info.code, key.as_ref()));
                    }
                    Some(_) => {}
                }
            }
        }
        Ok(())
    }
}

/// Text for `key` in `language` from the builtin table. Unknown languages
/// resolve to the fallback language.
#[must_use]
pub fn translate(language: &str, key: TranslationKey) -> Option<&'static str> {
    TranslationTable::builtin().get(resolve_language(language).code, key)
}
