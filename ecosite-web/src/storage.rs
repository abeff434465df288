//! Browser-backed preference store and locale signal.

use shared::i18n::{LocaleProvider, PreferenceStore, StorageError};
use wasm_bindgen::JsValue;
use web_sys::Storage;

/// Language preference kept in `window.localStorage` as a raw code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalStoragePreferences {
    key: String,
}

impl LocalStoragePreferences {
    /// Store the preference under `key`.
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    /// Storage key in use.
    pub fn key(&self) -> &str {
        &self.key
    }

    // Private browsing and sandboxed frames throw or return null here.
    fn storage() -> Result<Storage, StorageError> {
        web_sys::window()
            .ok_or(StorageError::Unavailable)?
            .local_storage()
            .map_err(|_| StorageError::Unavailable)?
            .ok_or(StorageError::Unavailable)
    }
}

impl PreferenceStore for LocalStoragePreferences {
    fn load(&self) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(&self.key)
            .map_err(|err| StorageError::Read {
                key: self.key.clone(),
                message: describe(&err),
            })
    }

    fn store(&mut self, code: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(&self.key, code)
            .map_err(|err| StorageError::Write {
                key: self.key.clone(),
                message: describe(&err),
            })
    }
}

/// Locale reported by `navigator.language`
#[derive(Debug, Clone, Copy, Default)]
pub struct NavigatorLocale;

impl LocaleProvider for NavigatorLocale {
    fn locale(&self) -> Option<String> {
        web_sys::window().and_then(|window| window.navigator().language())
    }
}

pub(crate) fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    const TEST_KEY: &str = "ecosite-test-language";

    #[wasm_bindgen_test]
    fn test_local_storage_round_trip() {
        let mut store = LocalStoragePreferences::new(TEST_KEY);
        store.store("ar").unwrap();
        assert_eq!(store.load(), Ok(Some("ar".to_string())));

        store.store("en").unwrap();
        assert_eq!(store.load(), Ok(Some("en".to_string())));

        LocalStoragePreferences::storage()
            .unwrap()
            .remove_item(TEST_KEY)
            .unwrap();
        assert_eq!(store.load(), Ok(None));
    }

    #[wasm_bindgen_test]
    fn test_value_is_stored_unquoted() {
        let mut store = LocalStoragePreferences::new(TEST_KEY);
        store.store("ar").unwrap();
        let raw = LocalStoragePreferences::storage()
            .unwrap()
            .get_item(TEST_KEY)
            .unwrap();
        assert_eq!(raw.as_deref(), Some("ar"));
    }

    #[wasm_bindgen_test]
    fn test_navigator_locale_is_reported() {
        let locale = NavigatorLocale.locale();
        assert!(locale.is_some_and(|tag| !tag.is_empty()));
    }
}
