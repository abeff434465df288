//! Re-broadcast of `language changed` notifications as DOM events.
//!
//! Scripts outside the wasm module listen with
//! `window.addEventListener("languageChanged", e => e.detail.newLanguage)`.

use shared::i18n::LanguageChanged;
use tracing::info;
use wasm_bindgen::JsValue;
use web_sys::{CustomEvent, CustomEventInit};

/// Name of the window event carrying a [`LanguageChanged`] detail.
pub const LANGUAGE_CHANGED_EVENT: &str = "languageChanged";

/// Build the `languageChanged` DOM event for `change`.
///
/// # Errors
/// Fails when the payload cannot be converted or the event constructed.
pub fn language_changed_event(change: &LanguageChanged) -> Result<CustomEvent, JsValue> {
    let payload =
        serde_json::to_string(change).map_err(|err| JsValue::from_str(&err.to_string()))?;
    let detail = js_sys::JSON::parse(&payload)?;
    let init = CustomEventInit::new();
    init.set_detail(&detail);
    CustomEvent::new_with_event_init_dict(LANGUAGE_CHANGED_EVENT, &init)
}

/// Dispatch `change` on `window`.
///
/// # Errors
/// Fails outside a browser window or when the event cannot be built.
pub fn dispatch_language_changed(change: &LanguageChanged) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let event = language_changed_event(change)?;
    window.dispatch_event(&event)?;
    Ok(())
}

/// Log a language change as a tracked interaction.
pub fn track_language_changed(change: &LanguageChanged) {
    info!(
        event = "language_changed",
        new_language = change.new_language,
        timestamp = %change.changed_at.to_rfc3339(),
        "tracked interaction"
    );
}
