//! Capabilities the controller needs from its host environment.
//!
//! The browser crate implements these over `web_sys`; [`super::memory`]
//! implements them in memory for tests and non-browser hosts.

use super::errors::StorageError;
use super::language::Direction;
use super::location::Location;

/// Key under which the language preference is stored by default.
pub const DEFAULT_PREFERENCE_KEY: &str = "language";

/// Persisted language preference (one key, one code)
pub trait PreferenceStore {
    /// Read the stored code, `Ok(None)` when nothing was stored yet.
    ///
    /// # Errors
    /// Returns a [`StorageError`] when the store cannot be read.
    fn load(&self) -> Result<Option<String>, StorageError>;

    /// Overwrite the stored code.
    ///
    /// # Errors
    /// Returns a [`StorageError`] when the store cannot be written.
    fn store(&mut self, code: &str) -> Result<(), StorageError>;
}

/// Ambient locale signal of the host, e.g. `ar-EG`
pub trait LocaleProvider {
    /// The preferred locale tag, if the host exposes one.
    fn locale(&self) -> Option<String>;
}

/// The visible page the controller writes into
pub trait Surface {
    /// Set the document language and writing direction.
    fn set_document_language(&mut self, code: &str, direction: Direction);

    /// Write `text` into `location`. Returns `false` when the page has no
    /// element for it.
    fn write(&mut self, location: Location, text: &str) -> bool;

    /// Show `code` as the selected value of any language selector.
    fn sync_selector(&mut self, code: &str);
}
