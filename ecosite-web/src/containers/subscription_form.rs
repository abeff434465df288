//! Subscription form container.
//!
//! Wires the static `#subscriptionForm` markup to the validation rules in
//! [`shared::forms`]. Failing fields get the localized error as their custom
//! validity so the browser and Bootstrap's `was-validated` styling show it.
//! A valid form is "submitted" by logging it; the localized success message
//! is shown and hidden again after the configured delay.

use gloo_timers::callback::Timeout;
use shared::forms::{Field, SubscriptionRequest, ValidationError, submit, validate};
use shared::i18n::TranslationKey;
use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Event, HtmlElement, HtmlFormElement, HtmlInputElement};

use crate::config::SiteConfig;
use crate::models::controller::SharedController;
use crate::storage::describe;

/// Id of the subscription form.
pub const FORM_ID: &str = "subscriptionForm";
/// Id of the success message region.
pub const SUCCESS_MESSAGE_ID: &str = "successMessage";
/// Class Bootstrap uses to reveal validation feedback.
pub const VALIDATED_CLASS: &str = "was-validated";

const CONTROL_SELECTOR: &str = ".form-control, .form-select, .form-check-input";
const ALL_FIELDS: [Field; 3] = [Field::Email, Field::Name, Field::Agreement];

/// Attach submit and change handlers. Pages without the form are left alone.
///
/// # Errors
/// Fails when a listener cannot be registered.
pub fn attach(
    document: &Document,
    controller: &SharedController,
    config: &SiteConfig,
) -> Result<(), JsValue> {
    let Some(form) = document
        .get_element_by_id(FORM_ID)
        .and_then(|element| element.dyn_into::<HtmlFormElement>().ok())
    else {
        debug!("no subscription form on this page");
        return Ok(());
    };

    let on_submit = {
        let form = form.clone();
        let document = document.clone();
        let controller = controller.clone();
        let hide_after_ms = config.success_message_ms;
        Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            event.prevent_default();
            handle_submit(&event, &document, &form, &controller, hide_after_ms);
        })
    };
    form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())?;
    on_submit.forget();

    let on_change = {
        let form = form.clone();
        let document = document.clone();
        Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
            clear_validation(&document, &form);
        })
    };
    let controls = form.query_selector_all(CONTROL_SELECTOR)?;
    for index in 0..controls.length() {
        if let Some(control) = controls.item(index) {
            control.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())?;
        }
    }
    on_change.forget();

    Ok(())
}

fn handle_submit(
    event: &Event,
    document: &Document,
    form: &HtmlFormElement,
    controller: &SharedController,
    hide_after_ms: u32,
) {
    clear_custom_validity(document);

    let request = read_request(document);
    let errors = validate(&request).err().unwrap_or_default();
    if !errors.is_empty() || !form.check_validity() {
        reject(event, document, form, controller, &errors);
        return;
    }

    match submit(&request, controller.current_code()) {
        Ok(_receipt) => {
            show_success(
                document,
                controller.translate(TranslationKey::SuccessMessage),
                hide_after_ms,
            );
            form.reset();
            set_validated(form, false);
        }
        Err(errors) => reject(event, document, form, controller, &errors),
    }
}

fn reject(
    event: &Event,
    document: &Document,
    form: &HtmlFormElement,
    controller: &SharedController,
    errors: &[ValidationError],
) {
    event.stop_propagation();
    mark_invalid(document, controller, errors);
    set_validated(form, true);
}

fn read_request(document: &Document) -> SubscriptionRequest {
    let email = input(document, Field::Email).map(|el| el.value()).unwrap_or_default();
    let name = input(document, Field::Name).map(|el| el.value()).unwrap_or_default();
    let agreed = input(document, Field::Agreement).is_some_and(|el| el.checked());
    SubscriptionRequest {
        email,
        name,
        agreed,
    }
}

fn input(document: &Document, field: Field) -> Option<HtmlInputElement> {
    document
        .get_element_by_id(field.input_id())
        .and_then(|element| element.dyn_into::<HtmlInputElement>().ok())
}

fn mark_invalid(document: &Document, controller: &SharedController, errors: &[ValidationError]) {
    for error in errors {
        debug!(field = error.field().input_id(), "subscription field invalid");
        if let Some(control) = input(document, error.field()) {
            control.set_custom_validity(controller.translate(error.message_key()));
        }
    }
}

fn clear_custom_validity(document: &Document) {
    for field in ALL_FIELDS {
        if let Some(control) = input(document, field) {
            control.set_custom_validity("");
        }
    }
}

fn clear_validation(document: &Document, form: &HtmlFormElement) {
    clear_custom_validity(document);
    set_validated(form, false);
}

fn set_validated(form: &HtmlFormElement, validated: bool) {
    let classes = form.class_list();
    let result = if validated {
        classes.add_1(VALIDATED_CLASS)
    } else {
        classes.remove_1(VALIDATED_CLASS)
    };
    log_dom_error(result, "toggle validation class");
}

fn log_dom_error(result: Result<(), JsValue>, action: &str) {
    if let Err(err) = result {
        warn!(action, error = %describe(&err), "subscription form update failed");
    }
}

fn show_success(document: &Document, message: &str, hide_after_ms: u32) {
    let Some(region) = document
        .get_element_by_id(SUCCESS_MESSAGE_ID)
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };
    region.set_text_content(Some(message));
    log_dom_error(region.set_attribute("role", "status"), "set success role");
    log_dom_error(region.set_attribute("aria-live", "polite"), "set success aria-live");
    log_dom_error(region.style().set_property("display", "block"), "show success message");

    Timeout::new(hide_after_ms, move || {
        log_dom_error(region.style().set_property("display", "none"), "hide success message");
    })
    .forget();
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use shared::i18n::LocalizationController;
    use shared::i18n::memory::{MemoryPreferenceStore, StaticLocale};
    use shared::i18n::translate;
    use wasm_bindgen_test::*;
    use web_sys::Element;

    wasm_bindgen_test_configure!(run_in_browser);

    const FIXTURE: &str = r#"
        <form id="subscriptionForm" novalidate>
            <input id="emailInput" class="form-control" type="email">
            <input id="nameInput" class="form-control" type="text">
            <input id="agreeCheck" class="form-check-input" type="checkbox">
            <button type="submit">Subscribe Now</button>
        </form>
        <div id="successMessage" style="display: none"></div>
    "#;

    fn mount_fixture() -> (Document, Element) {
        let document = web_sys::window().unwrap().document().unwrap();
        let container = document.create_element("div").unwrap();
        container.set_inner_html(FIXTURE);
        document.body().unwrap().append_child(&container).unwrap();
        (document, container)
    }

    fn controller(language: &str) -> SharedController {
        let controller = SharedController::new(LocalizationController::new(
            MemoryPreferenceStore::new(),
            StaticLocale::none(),
        ));
        controller.apply(language);
        controller
    }

    fn form(document: &Document) -> HtmlFormElement {
        document.get_element_by_id(FORM_ID).unwrap().dyn_into().unwrap()
    }

    fn submit_event() -> Event {
        Event::new("submit").unwrap()
    }

    #[wasm_bindgen_test]
    fn test_invalid_submit_marks_form_and_localizes_errors() {
        let (document, container) = mount_fixture();
        let controller = controller("ar");
        let form = form(&document);

        handle_submit(&submit_event(), &document, &form, &controller, 3_000);

        assert!(form.class_list().contains(VALIDATED_CLASS));
        let email = input(&document, Field::Email).unwrap();
        assert_eq!(
            Some(email.validation_message().unwrap()),
            translate("ar", TranslationKey::EmailError).map(str::to_string)
        );

        container.remove();
    }

    #[wasm_bindgen_test]
    fn test_valid_submit_shows_success_and_resets() {
        let (document, container) = mount_fixture();
        let controller = controller("en");
        let form = form(&document);
        input(&document, Field::Email).unwrap().set_value("user@example.com");
        input(&document, Field::Name).unwrap().set_value("Layla");
        input(&document, Field::Agreement).unwrap().set_checked(true);

        handle_submit(&submit_event(), &document, &form, &controller, 3_000);

        let region = document.get_element_by_id(SUCCESS_MESSAGE_ID).unwrap();
        assert_eq!(
            region.text_content(),
            translate("en", TranslationKey::SuccessMessage).map(str::to_string)
        );
        assert_eq!(region.get_attribute("role").as_deref(), Some("status"));
        assert_eq!(region.get_attribute("aria-live").as_deref(), Some("polite"));
        assert_eq!(input(&document, Field::Email).unwrap().value(), "");
        assert!(!form.class_list().contains(VALIDATED_CLASS));

        container.remove();
    }

    #[wasm_bindgen_test]
    fn test_set_validated_toggles_class() {
        let (document, container) = mount_fixture();
        let form = form(&document);

        set_validated(&form, true);
        assert!(form.class_list().contains(VALIDATED_CLASS));
        set_validated(&form, false);
        assert!(!form.class_list().contains(VALIDATED_CLASS));

        container.remove();
    }

    #[wasm_bindgen_test]
    fn test_change_clears_validation_state() {
        let (document, container) = mount_fixture();
        let controller = controller("en");
        let form = form(&document);
        handle_submit(&submit_event(), &document, &form, &controller, 3_000);

        clear_validation(&document, &form);

        assert!(!form.class_list().contains(VALIDATED_CLASS));
        assert!(input(&document, Field::Email).unwrap().check_validity());

        container.remove();
    }
}
