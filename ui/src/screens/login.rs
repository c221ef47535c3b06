//=============================================================================
// File: src/screens/login.rs
//=============================================================================
use dioxus::prelude::*;
use model::login::LoginScreen as LoginController;

use crate::components::clickable_text::ClickableText;
use crate::components::password_field::PasswordField;
use crate::components::pico::Button;
use crate::components::pico::Divider;
use crate::components::pico::TextField;
use crate::components::promo_tile::PromoTile;
use crate::dialer::SystemDialer;
use crate::hooks::use_locale::use_locale;

const LOGO: Asset = asset!("/assets/icons/bm_logo.svg");

#[component]
pub fn LoginScreen() -> Element {
    let locale = use_locale();
    let mut screen = use_signal(|| LoginController::new(locale, SystemDialer));

    // Reads the locale signal, so a language toggle re-renders this screen.
    let view = screen.read().view();

    rsx! {
        section {
            class: "login-screen",
            header {
                class: "login-header",
                img {
                    class: "login-logo",
                    src: LOGO,
                    alt: "{view.logo_description}",
                }
                a {
                    class: "language-toggle",
                    href: "#",
                    lang: "{view.locale.toggled().code()}",
                    onclick: move |evt: MouseEvent| {
                        evt.prevent_default();
                        screen.write().on_toggle_language();
                    },
                    "{view.language_label}"
                }
            }

            TextField {
                id: "username".to_string(),
                label: view.username_label.to_string(),
                value: view.username.clone(),
                autocomplete: "username".to_string(),
                on_input: move |text: String| screen.write().on_username_changed(text),
            }

            PasswordField {
                label: view.password_label.to_string(),
                value: view.password.clone(),
                visible: view.password_visible,
                toggle_label: view.visibility_toggle_label.to_string(),
                on_input: move |text: String| screen.write().on_password_changed(text),
                on_toggle: move |_| screen.write().on_toggle_visibility(),
            }

            p {
                class: "forgot-password",
                "{view.forgot_password_label}"
            }

            Button {
                disabled: !view.login_enabled,
                on_click: move |_| screen.write().on_login_pressed(),
                strong { "{view.login_label}" }
            }

            ClickableText {
                text: view.contact.clone(),
                on_tap: move |offset: usize| screen.write().on_contact_link_pressed(offset),
            }

            Divider {}

            div {
                class: "promo-row",
                for tile in view.tiles.iter() {
                    PromoTile {
                        key: "{tile.label}",
                        icon: tile.icon,
                        label: tile.label.to_string(),
                    }
                }
            }
        }
    }
}
