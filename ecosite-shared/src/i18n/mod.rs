//! # Localization
//!
//! Language catalog, translation table and the [`LocalizationController`]
//! that applies a language to the page.
//!
//! ## Supported languages
//!
//! | Code | Native name | Direction |
//! |------|-------------|-----------|
//! | en   | English     | ltr       |
//! | ar   | العربية     | rtl       |
//!
//! `en` is the fallback for unknown codes and unrecognised locales.
//!
//! ## Design
//!
//! The controller talks to its host only through [`PreferenceStore`],
//! [`LocaleProvider`] and [`Surface`], so the same logic runs against the
//! browser DOM and against the in-memory doubles in [`memory`].

mod controller;
mod errors;
mod language;
mod location;
pub mod memory;
mod ports;
mod translations;

pub use controller::{LanguageChanged, LanguageState, LocalizationController, ObserverId};
pub use errors::{LocalizationError, LocalizationResult, StorageError};
pub use language::{
    ARABIC_LANGUAGE, Direction, FALLBACK_LANGUAGE, LanguageInfo, fallback_language,
    from_locale_tag, get_language_info, resolve_language, supported_languages,
};
pub use location::{Location, Slot};
pub use ports::{DEFAULT_PREFERENCE_KEY, LocaleProvider, PreferenceStore, Surface};
pub use translations::{TranslationKey, TranslationTable, translate};
