//! DOM implementation of the localization [`Surface`].

use shared::i18n::{Direction, Location, Slot, Surface};
use tracing::warn;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlSelectElement};

use crate::storage::describe;

/// Id of the plain `<select>` language control.
pub const LANGUAGE_SELECT_ID: &str = "languageSelect";

/// Writes localized text into the live document
#[derive(Debug, Clone)]
pub struct DomSurface {
    document: Document,
}

impl DomSurface {
    /// Surface over `document`.
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// Surface over the current window's document, if there is one.
    pub fn from_window() -> Option<Self> {
        web_sys::window()?.document().map(Self::new)
    }

    fn find(&self, selector: &str) -> Option<Element> {
        self.document.query_selector(selector).ok().flatten()
    }

    fn write_icon_label(element: &Element, icon_class: &str, text: &str) {
        element.set_text_content(None);
        match element.owner_document().map(|doc| doc.create_element("i")) {
            Some(Ok(icon)) => {
                icon.set_class_name(icon_class);
                if let Err(err) = icon.set_attribute("aria-hidden", "true") {
                    warn!(error = %describe(&err), "could not hide button icon");
                }
                if let Err(err) = element.append_with_node_1(&icon) {
                    warn!(error = %describe(&err), "could not insert button icon");
                }
            }
            Some(Err(err)) => warn!(error = %describe(&err), "could not create button icon"),
            None => {}
        }
        if let Err(err) = element.append_with_str_1(&format!(" {text}")) {
            warn!(error = %describe(&err), "could not write button label");
        }
    }
}

impl Surface for DomSurface {
    fn set_document_language(&mut self, code: &str, direction: Direction) {
        let Some(root) = self.document.document_element() else {
            return;
        };
        for (name, value) in [("lang", code), ("dir", direction.as_attr())] {
            if let Err(err) = root.set_attribute(name, value) {
                warn!(
                    attribute = name,
                    error = %describe(&err),
                    "could not set document attribute"
                );
            }
        }
    }

    fn write(&mut self, location: Location, text: &str) -> bool {
        let Some(element) = self.find(location.selector()) else {
            return false;
        };
        match location.slot() {
            Slot::Text => element.set_text_content(Some(text)),
            Slot::Placeholder => {
                if let Err(err) = element.set_attribute("placeholder", text) {
                    warn!(
                        location = location.as_ref(),
                        error = %describe(&err),
                        "could not set placeholder"
                    );
                }
            }
            Slot::IconLabel { icon_class } => Self::write_icon_label(&element, icon_class, text),
        }
        true
    }

    fn sync_selector(&mut self, code: &str) {
        if let Some(select) = self
            .document
            .get_element_by_id(LANGUAGE_SELECT_ID)
            .and_then(|element| element.dyn_into::<HtmlSelectElement>().ok())
        {
            select.set_value(code);
        }
    }
}
