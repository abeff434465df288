//! # Localization Controller
//!
//! Owns the active language and keeps the page consistent with it: document
//! `lang`/`dir`, every translatable location, the stored preference, the
//! language selector, and the `language changed` observers.
//!
//! The controller never fails. Unknown codes fall back to
//! [`FALLBACK_LANGUAGE`], missing page elements are skipped, and storage
//! failures are logged and ignored.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info, warn};

use super::language::{
    Direction, FALLBACK_LANGUAGE, LanguageInfo, fallback_language, from_locale_tag,
    get_language_info, resolve_language, supported_languages,
};
use super::location::Location;
use super::ports::{LocaleProvider, PreferenceStore, Surface};
use super::translations::{TranslationKey, TranslationTable};

/// Payload of the `language changed` notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageChanged {
    /// Code that is now active
    pub new_language: &'static str,
    /// Writing direction of the new language
    pub direction: Direction,
    /// When the change was applied
    pub changed_at: DateTime<Utc>,
}

/// Handle returned by [`LocalizationController::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

/// Lifecycle of the active language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageState {
    /// Nothing applied yet
    Uninitialized,
    /// A language has been applied to the page
    Active(&'static LanguageInfo),
}

type Observer = Box<dyn FnMut(&LanguageChanged)>;

/// Language selection and propagation for one page session
pub struct LocalizationController {
    store: Box<dyn PreferenceStore>,
    locale: Box<dyn LocaleProvider>,
    table: &'static TranslationTable,
    state: LanguageState,
    observers: Vec<(ObserverId, Observer)>,
    next_observer: u64,
}

impl fmt::Debug for LocalizationController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocalizationController")
            .field("state", &self.state)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}

impl LocalizationController {
    /// Create a controller over the builtin translation table.
    pub fn new(
        store: impl PreferenceStore + 'static,
        locale: impl LocaleProvider + 'static,
    ) -> Self {
        Self::with_table(store, locale, TranslationTable::builtin())
    }

    /// Create a controller over a specific translation table.
    pub fn with_table(
        store: impl PreferenceStore + 'static,
        locale: impl LocaleProvider + 'static,
        table: &'static TranslationTable,
    ) -> Self {
        debug_assert!(
            table.verify_complete(supported_languages()).is_ok(),
            "translation table does not cover every supported language"
        );
        Self {
            store: Box::new(store),
            locale: Box::new(locale),
            table,
            state: LanguageState::Uninitialized,
            observers: Vec::new(),
            next_observer: 0,
        }
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> LanguageState {
        self.state
    }

    /// The active language, `None` before [`Self::start`].
    #[must_use]
    pub const fn current(&self) -> Option<&'static LanguageInfo> {
        match self.state {
            LanguageState::Active(info) => Some(info),
            LanguageState::Uninitialized => None,
        }
    }

    /// Code of the active language, or the fallback before startup.
    #[must_use]
    pub fn current_code(&self) -> &'static str {
        self.current().map_or(FALLBACK_LANGUAGE, |info| info.code)
    }

    /// Pick the language to start with.
    ///
    /// A stored preference wins when it names a supported language. Otherwise
    /// the host locale decides, and anything unrecognised yields the fallback.
    #[must_use]
    pub fn detect_initial_language(&self) -> &'static LanguageInfo {
        match self.store.load() {
            Ok(Some(stored)) => {
                if let Some(info) = get_language_info(&stored) {
                    debug!(language = info.code, "using stored language preference");
                    return info;
                }
                warn!(stored = %stored, "ignoring unsupported stored language");
            }
            Ok(None) => {}
            Err(error) => warn!(%error, "language preference could not be read"),
        }

        let detected = self
            .locale
            .locale()
            .map_or_else(fallback_language, |tag| from_locale_tag(&tag));
        debug!(language = detected.code, "detected language from locale");
        detected
    }

    /// Detect and apply the initial language. Runs once; later calls leave
    /// the page untouched and return the active language.
    pub fn start(&mut self, surface: &mut dyn Surface) -> &'static LanguageInfo {
        if let LanguageState::Active(info) = self.state {
            debug!(language = info.code, "localization already started");
            return info;
        }
        let initial = self.detect_initial_language();
        self.apply_language(initial.code, surface)
    }

    /// Make `code` the active language and propagate it to the page.
    ///
    /// Unsupported codes are replaced by the fallback language. Re-applying
    /// the active language rewrites the same text and notifies again.
    pub fn apply_language(
        &mut self,
        code: &str,
        surface: &mut dyn Surface,
    ) -> &'static LanguageInfo {
        let info = match get_language_info(code) {
            Some(info) => info,
            None => {
                debug!(
                    requested = code,
                    fallback = FALLBACK_LANGUAGE,
                    "unsupported language requested"
                );
                resolve_language(FALLBACK_LANGUAGE)
            }
        };

        // Direction first so text never renders mirrored the wrong way.
        surface.set_document_language(info.code, info.direction);
        self.write_translations(info, surface);

        if let Err(error) = self.store.store(info.code) {
            warn!(%error, language = info.code, "language preference not persisted");
        }
        surface.sync_selector(info.code);

        self.state = LanguageState::Active(info);
        info!(language = info.code, direction = info.direction.as_attr(), "language applied");

        self.notify(&LanguageChanged {
            new_language: info.code,
            direction: info.direction,
            changed_at: Utc::now(),
        });
        info
    }

    /// Text for `key` in the active language.
    #[must_use]
    pub fn translate(&self, key: TranslationKey) -> &'static str {
        self.table
            .get(self.current_code(), key)
            .or_else(|| self.table.get(FALLBACK_LANGUAGE, key))
            .unwrap_or_else(|| key.into())
    }

    /// Register an observer for `language changed` notifications.
    ///
    /// Observers run synchronously inside [`Self::apply_language`] and must
    /// not call back into the controller.
    pub fn subscribe<F>(&mut self, observer: F) -> ObserverId
    where
        F: FnMut(&LanguageChanged) + 'static,
    {
        let id = ObserverId(self.next_observer);
        self.next_observer += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove an observer. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(observer_id, _)| *observer_id != id);
        self.observers.len() != before
    }

    fn write_translations(&self, info: &LanguageInfo, surface: &mut dyn Surface) {
        for location in Location::all() {
            let Some(text) = self.table.get(info.code, location.key()) else {
                warn!(language = info.code, key = %location.key(), "translation missing");
                continue;
            };
            if !surface.write(location, text) {
                debug!(location = location.as_ref(), "location not on page");
            }
        }
    }

    fn notify(&mut self, event: &LanguageChanged) {
        for (_, observer) in &mut self.observers {
            observer(event);
        }
    }
}
