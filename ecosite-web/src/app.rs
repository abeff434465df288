//! Page startup: builds the controller, applies the initial language and
//! attaches every handler the page needs.

use shared::i18n::{LanguageChanged, LocalizationController};
use tracing::{debug, info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Event, HtmlSelectElement};

use crate::components::{LanguageSelector, LanguageSelectorProps};
use crate::config::SiteConfig;
use crate::containers::subscription_form;
use crate::events::{dispatch_language_changed, track_language_changed};
use crate::models::controller::SharedController;
use crate::storage::{LocalStoragePreferences, NavigatorLocale, describe};
use crate::surface::LANGUAGE_SELECT_ID;

/// Element the language menu island mounts into.
pub const LANGUAGE_MENU_ID: &str = "languageMenu";

/// Run [`start`] once the document is parsed.
pub fn run(config: SiteConfig) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;

    if document.ready_state() != "loading" {
        start(&document, &config);
        return Ok(());
    }

    let on_ready = {
        let document = document.clone();
        Closure::once_into_js(move |_event: Event| {
            start(&document, &config);
        })
    };
    document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())
}

/// Build the controller and wire the page. Returns the shared controller.
pub fn start(document: &Document, config: &SiteConfig) -> SharedController {
    let controller = SharedController::new(LocalizationController::new(
        LocalStoragePreferences::new(config.storage_key()),
        NavigatorLocale,
    ));

    controller.subscribe(|change: &LanguageChanged| {
        if let Err(err) = dispatch_language_changed(change) {
            warn!(error = %describe(&err), "languageChanged event not dispatched");
        }
    });
    controller.subscribe(track_language_changed);

    let initial = controller.start();

    if let Err(err) = attach_language_select(document, &controller) {
        warn!(error = %describe(&err), "language select not wired");
    }
    mount_language_menu(document, &controller);
    if let Err(err) = subscription_form::attach(document, &controller, config) {
        warn!(error = %describe(&err), "subscription form not wired");
    }

    info!(
        language = initial.map_or("unknown", |info| info.code),
        "Ecosite client initialised"
    );
    controller
}

fn attach_language_select(
    document: &Document,
    controller: &SharedController,
) -> Result<(), JsValue> {
    let Some(select) = document
        .get_element_by_id(LANGUAGE_SELECT_ID)
        .and_then(|element| element.dyn_into::<HtmlSelectElement>().ok())
    else {
        debug!("no language select on this page");
        return Ok(());
    };

    let on_change = {
        let controller = controller.clone();
        let select = select.clone();
        Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
            controller.apply(&select.value());
        })
    };
    select.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())?;
    on_change.forget();
    Ok(())
}

fn mount_language_menu(document: &Document, controller: &SharedController) {
    let Some(root) = document.get_element_by_id(LANGUAGE_MENU_ID) else {
        debug!("no language menu mount point on this page");
        return;
    };
    yew::Renderer::<LanguageSelector>::with_root_and_props(
        root,
        LanguageSelectorProps {
            controller: controller.clone(),
        },
    )
    .render();
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn document() -> Document {
        web_sys::window().unwrap().document().unwrap()
    }

    #[wasm_bindgen_test]
    fn test_start_applies_and_persists_language() {
        let config = SiteConfig {
            storage_key: "ecosite-app-test-language".to_string(),
            ..SiteConfig::default()
        };
        let storage = web_sys::window().unwrap().local_storage().unwrap().unwrap();
        storage.set_item(&config.storage_key, "ar").unwrap();

        let controller = start(&document(), &config);

        assert_eq!(controller.current_code(), "ar");
        let root = document().document_element().unwrap();
        assert_eq!(root.get_attribute("dir").as_deref(), Some("rtl"));
        storage.remove_item(&config.storage_key).unwrap();
    }

    #[wasm_bindgen_test]
    fn test_language_select_change_applies_language() {
        let document = document();
        let container = document.create_element("div").unwrap();
        container.set_inner_html(
            r#"<select id="languageSelect">
                <option value="en">English</option>
                <option value="ar">العربية</option>
            </select>"#,
        );
        document.body().unwrap().append_child(&container).unwrap();
        let config = SiteConfig {
            storage_key: "ecosite-select-test-language".to_string(),
            ..SiteConfig::default()
        };
        let controller = start(&document, &config);

        let select: HtmlSelectElement = document
            .get_element_by_id(LANGUAGE_SELECT_ID)
            .unwrap()
            .dyn_into()
            .unwrap();
        select.set_value("ar");
        select.dispatch_event(&Event::new("change").unwrap()).unwrap();

        assert_eq!(controller.current_code(), "ar");
        container.remove();
    }
}
