//! Shared handle to the page's localization controller.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use shared::i18n::memory::RecordingSurface;
use shared::i18n::{
    FALLBACK_LANGUAGE, LanguageChanged, LanguageInfo, LocalizationController, ObserverId,
    TranslationKey, translate,
};
use tracing::warn;

use crate::surface::DomSurface;

/// The page's single controller, shared by every event handler.
///
/// Handlers run one at a time on the UI thread; a borrow can only clash
/// when an observer calls back in, which is logged and skipped.
#[derive(Clone)]
pub struct SharedController(Rc<RefCell<LocalizationController>>);

impl PartialEq for SharedController {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for SharedController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SharedController")
            .field(&self.current_code())
            .finish()
    }
}

impl SharedController {
    /// Share `controller` between handlers.
    pub fn new(controller: LocalizationController) -> Self {
        Self(Rc::new(RefCell::new(controller)))
    }

    /// Detect and apply the initial language to the document.
    pub fn start(&self) -> Option<&'static LanguageInfo> {
        let mut controller = self.0.try_borrow_mut().ok()?;
        Some(match DomSurface::from_window() {
            Some(mut surface) => controller.start(&mut surface),
            None => controller.start(&mut RecordingSurface::new()),
        })
    }

    /// Switch the page to `code`.
    pub fn apply(&self, code: &str) -> Option<&'static LanguageInfo> {
        let Ok(mut controller) = self.0.try_borrow_mut() else {
            warn!(requested = code, "language change ignored while another is in progress");
            return None;
        };
        Some(match DomSurface::from_window() {
            Some(mut surface) => controller.apply_language(code, &mut surface),
            None => controller.apply_language(code, &mut RecordingSurface::new()),
        })
    }

    /// Active language code, or the fallback while a change is running.
    pub fn current_code(&self) -> &'static str {
        self.0
            .try_borrow()
            .map_or(FALLBACK_LANGUAGE, |controller| controller.current_code())
    }

    /// Text for `key` in the active language.
    pub fn translate(&self, key: TranslationKey) -> &'static str {
        match self.0.try_borrow() {
            Ok(controller) => controller.translate(key),
            Err(_) => translate(FALLBACK_LANGUAGE, key).unwrap_or_else(|| key.into()),
        }
    }

    /// Register a `language changed` observer. `None` while a change is running.
    pub fn subscribe<F>(&self, observer: F) -> Option<ObserverId>
    where
        F: FnMut(&LanguageChanged) + 'static,
    {
        self.0
            .try_borrow_mut()
            .ok()
            .map(|mut controller| controller.subscribe(observer))
    }

    /// Remove an observer registered with [`Self::subscribe`].
    pub fn unsubscribe(&self, id: ObserverId) -> bool {
        self.0
            .try_borrow_mut()
            .is_ok_and(|mut controller| controller.unsubscribe(id))
    }
}
