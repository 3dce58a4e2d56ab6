/// Reusable UI components

use patternfly_yew::prelude::*;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SettingFieldProps {
    pub label: AttrValue,
    pub value: AttrValue,
    pub oninput: Callback<String>,
    pub onsave: Callback<MouseEvent>,
    #[prop_or_default]
    pub placeholder: AttrValue,
    #[prop_or(false)]
    pub secret: bool,
    #[prop_or(false)]
    pub disabled: bool,
}

/// Labelled text input with its own save button
#[function_component(SettingField)]
pub fn setting_field(props: &SettingFieldProps) -> Html {
    let oninput = {
        let oninput = props.oninput.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                oninput.emit(input.value());
            }
        })
    };

    html! {
        <div class="setting-field">
            <label class="setting-label">{&props.label}</label>
            <div class="setting-row">
                <input
                    class="pf-v5-c-form-control"
                    type={if props.secret { "password" } else { "text" }}
                    value={props.value.clone()}
                    placeholder={props.placeholder.clone()}
                    {oninput}
                />
                <Button onclick={props.onsave.clone()} disabled={props.disabled} variant={ButtonVariant::Secondary}>
                    {"Save"}
                </Button>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct EntryMessageProps {
    pub message: Option<String>,
}

/// Description of the running or just started time entry
#[function_component(EntryMessage)]
pub fn entry_message(props: &EntryMessageProps) -> Html {
    match &props.message {
        Some(message) if !message.is_empty() => html! {
            <p class="entry-message">{message}</p>
        },
        Some(_) => html! {
            <p class="entry-message entry-message-empty">{"(no description)"}</p>
        },
        None => html! {
            <p class="entry-message entry-message-empty">{"No timer running"}</p>
        },
    }
}
