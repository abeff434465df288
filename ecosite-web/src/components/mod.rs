pub(crate) mod language_selector;
pub(crate) mod language_selector_button;

pub use language_selector::{LanguageSelector, LanguageSelectorProps};
