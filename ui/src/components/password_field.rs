use dioxus::prelude::*;

use super::pico::TextField;

const VISIBILITY_ICON: Asset = asset!("/assets/icons/visibility.svg");
const VISIBILITY_OFF_ICON: Asset = asset!("/assets/icons/visibility_off.svg");

/// Password input with a trailing eye icon.
///
/// Hidden text is masked by the host's password input, one bullet per
/// character. `toggle_label` is the eye icon's accessible label.
#[component]
pub fn PasswordField(
    label: String,
    value: String,
    visible: bool,
    toggle_label: String,
    on_input: EventHandler<String>,
    on_toggle: EventHandler<()>,
) -> Element {
    let (input_type, icon) = if visible {
        ("text", VISIBILITY_ICON)
    } else {
        ("password", VISIBILITY_OFF_ICON)
    };

    rsx! {
        TextField {
            id: "password".to_string(),
            label,
            value,
            input_type: input_type.to_string(),
            autocomplete: "current-password".to_string(),
            on_input,
            trailing: rsx! {
                button {
                    r#type: "button",
                    class: "visibility-toggle",
                    "aria-label": "{toggle_label}",
                    title: "{toggle_label}",
                    onclick: move |_| on_toggle.call(()),
                    img { src: icon, alt: "" }
                }
            },
        }
    }
}
