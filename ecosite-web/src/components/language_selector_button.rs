use shared::i18n::LanguageInfo;
use yew::{Callback, Html, Properties, function_component, html};

#[derive(Properties, PartialEq)]
pub struct LanguageSelectorButtonProps {
    pub is_active: bool,
    pub info: LanguageInfo,
    pub on_click: Callback<String>,
}

#[function_component(LanguageSelectorButton)]
pub fn language_selector_button(props: &LanguageSelectorButtonProps) -> Html {
    let info = &props.info;
    let code = info.code.to_string();
    let on_click = props.on_click.clone();
    html! {
        <li>
            <a
                href="#"
                class={if props.is_active { "dropdown-item active" } else { "dropdown-item" }}
                lang={info.code}
                dir={info.direction.as_attr()}
                aria-current={if props.is_active { "true" } else { "false" }}
                onclick={move |event: yew::MouseEvent| {
                    event.prevent_default();
                    on_click.emit(code.clone());
                }}>
                <span aria-hidden="true">{info.flag}</span>
                {" "}
                <span>{info.native_name}</span>
            </a>
        </li>
    }
}
