use shared::i18n::{LanguageChanged, resolve_language, supported_languages};
use yew::{Callback, Html, Properties, function_component, html, use_effect_with, use_state_eq};

use crate::components::language_selector_button::LanguageSelectorButton;
use crate::models::controller::SharedController;

/// Props for [`LanguageSelector`]
#[derive(Properties, PartialEq)]
pub struct LanguageSelectorProps {
    /// Controller the menu reads from and applies to
    pub controller: SharedController,
}

/// Dropdown of supported languages that follows the page controller.
#[function_component(LanguageSelector)]
pub fn language_selector(props: &LanguageSelectorProps) -> Html {
    let language_state = use_state_eq(|| props.controller.current_code().to_string());

    // Track changes made anywhere on the page, not only through this menu.
    {
        let language_state = language_state.clone();
        use_effect_with(props.controller.clone(), move |controller| {
            let controller = controller.clone();
            let subscription = controller.subscribe(move |event: &LanguageChanged| {
                language_state.set(event.new_language.to_string());
            });
            move || {
                if let Some(id) = subscription {
                    controller.unsubscribe(id);
                }
            }
        });
    }

    let on_click = {
        let controller = props.controller.clone();
        Callback::from(move |code: String| {
            controller.apply(&code);
        })
    };

    let lang_code = (*language_state).clone();
    let active = resolve_language(&lang_code);

    html! {
        <div class="dropdown">
            <button
                class="btn btn-outline-secondary dropdown-toggle"
                type="button"
                data-bs-toggle="dropdown"
                aria-expanded="false"
            >
                <span aria-hidden="true">{active.flag}</span>
                {" "}
                <span>{active.native_name}</span>
            </button>
            <ul class="dropdown-menu dropdown-menu-end">
            {
                for supported_languages().iter().map(|info| {
                    html! {
                        <LanguageSelectorButton
                            is_active={info.code == active.code}
                            info={*info}
                            on_click={on_click.clone()}
                        />
                    }
                })
            }
            </ul>
        </div>
    }
}
