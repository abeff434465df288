//! In-memory implementations of the controller's capabilities.

use std::collections::{HashMap, HashSet};

use super::errors::StorageError;
use super::language::Direction;
use super::location::Location;
use super::ports::{DEFAULT_PREFERENCE_KEY, LocaleProvider, PreferenceStore, Surface};

/// Preference store backed by a plain `Option<String>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryPreferenceStore {
    value: Option<String>,
    available: bool,
}

impl MemoryPreferenceStore {
    /// An empty, working store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            value: None,
            available: true,
        }
    }

    /// A working store that already holds `code`.
    #[must_use]
    pub fn with_value(code: impl Into<String>) -> Self {
        Self {
            value: Some(code.into()),
            available: true,
        }
    }

    /// A store whose reads and writes always fail.
    #[must_use]
    pub fn unavailable() -> Self {
        Self {
            value: None,
            available: false,
        }
    }

    /// The stored code, bypassing availability.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

impl Default for MemoryPreferenceStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn load(&self) -> Result<Option<String>, StorageError> {
        if !self.available {
            return Err(StorageError::Unavailable);
        }
        Ok(self.value.clone())
    }

    fn store(&mut self, code: &str) -> Result<(), StorageError> {
        if !self.available {
            return Err(StorageError::Write {
                key: DEFAULT_PREFERENCE_KEY.to_string(),
                message: "storage disabled".to_string(),
            });
        }
        self.value = Some(code.to_string());
        Ok(())
    }
}

/// Locale provider returning a fixed tag
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticLocale(pub Option<String>);

impl StaticLocale {
    /// Provider reporting `tag`.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self(Some(tag.into()))
    }

    /// Provider for a host that exposes no locale.
    #[must_use]
    pub fn none() -> Self {
        Self(None)
    }
}

impl LocaleProvider for StaticLocale {
    fn locale(&self) -> Option<String> {
        self.0.clone()
    }
}

/// Surface that records what was written, for tests and headless hosts
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingSurface {
    /// Last document language
    pub lang: Option<String>,
    /// Last document direction
    pub dir: Option<Direction>,
    /// Text currently shown per location
    pub texts: HashMap<Location, String>,
    /// Last value written to the selector
    pub selector: Option<String>,
    absent: HashSet<Location>,
    /// Location writes in call order, including skipped ones.
    pub log: Vec<Location>,
}

impl RecordingSurface {
    /// A page where every location exists.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A page missing the given locations.
    #[must_use]
    pub fn without(absent: impl IntoIterator<Item = Location>) -> Self {
        Self {
            absent: absent.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Text currently shown at `location`.
    #[must_use]
    pub fn text(&self, location: Location) -> Option<&str> {
        self.texts.get(&location).map(String::as_str)
    }
}

impl Surface for RecordingSurface {
    fn set_document_language(&mut self, code: &str, direction: Direction) {
        self.lang = Some(code.to_string());
        self.dir = Some(direction);
    }

    fn write(&mut self, location: Location, text: &str) -> bool {
        self.log.push(location);
        if self.absent.contains(&location) {
            return false;
        }
        self.texts.insert(location, text.to_string());
        true
    }

    fn sync_selector(&mut self, code: &str) {
        self.selector = Some(code.to_string());
    }
}
