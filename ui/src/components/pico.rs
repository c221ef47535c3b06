//! Lifetime-free layout and form primitives.
//! Styling lives in `assets/css/login.css`.

#![allow(non_snake_case)] // Allow PascalCase for component function names

use dioxus::prelude::*;

//=============================================================================
// Layout Components
//=============================================================================

/// A centered, phone-width column.
/// Wraps content in a `<main class="container">` element.
#[component]
pub fn Container(children: Element) -> Element {
    rsx! { main { class: "container", {children} } }
}

/// A horizontal rule between sections.
#[component]
pub fn Divider() -> Element {
    rsx! { hr { class: "divider" } }
}

//=============================================================================
// Interactive Components
//=============================================================================

#[derive(Props, PartialEq, Clone)]
pub struct ButtonProps {
    children: Element,
    #[props(optional)]
    on_click: Option<EventHandler<MouseEvent>>,
    #[props(default = false)]
    disabled: bool,
}

/// A full-width brand-red button. Clicks are not delivered while disabled.
pub fn Button(props: ButtonProps) -> Element {
    rsx! {
        button {
            r#type: "button",
            class: "button-primary",
            disabled: props.disabled,
            onclick: move |evt| {
                if let Some(handler) = &props.on_click {
                    handler.call(evt);
                }
            },
            {props.children}
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct TextFieldProps {
    id: String,
    label: String,
    value: String,
    on_input: EventHandler<String>,
    #[props(default = "text".to_string())]
    input_type: String,
    #[props(optional)]
    autocomplete: Option<String>,
    /// Rendered after the input, inside the field's outline.
    #[props(optional)]
    trailing: Option<Element>,
}

/// An outlined, labeled text input.
pub fn TextField(props: TextFieldProps) -> Element {
    let on_input = props.on_input;
    rsx! {
        div {
            class: "text-field",
            label {
                r#for: "{props.id}",
                "{props.label}"
            }
            div {
                class: "text-field-outline",
                input {
                    id: "{props.id}",
                    r#type: "{props.input_type}",
                    value: "{props.value}",
                    autocomplete: props.autocomplete.as_deref().unwrap_or("off"),
                    oninput: move |evt: FormEvent| on_input.call(evt.value()),
                }
                {props.trailing}
            }
        }
    }
}
