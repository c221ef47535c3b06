// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod app_state_mut;
pub mod compat;
mod components;
mod dialer;
pub mod hooks;
mod screens;

use app_state_mut::AppStateMut;
use components::pico::Container;
use model::prefs::user_prefs::UserPrefs;
use screens::login::LoginScreen;

//=============================================================================
// MAIN APPLICATION COMPONENT
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0, viewport-fit=cover",
        }
        document::Stylesheet {
            href: asset!("/assets/css/login.css"),
        }
        AppBody {}
    }
}

/// Owns the process-wide locale and lays the screen out in its direction.
#[component]
fn AppBody() -> Element {
    let prefs = use_hook(UserPrefs::from_env);
    let locale = use_signal(|| prefs.locale_preference().initial());

    use_context_provider(|| AppStateMut { locale });

    let current = locale();
    dioxus_logger::tracing::debug!("rendering in {}", current.code());

    rsx! {
        div {
            class: "app-main-container",
            dir: "{current.direction().as_attr()}",
            lang: "{current.code()}",
            Container {
                LoginScreen {}
            }
        }
    }
}
