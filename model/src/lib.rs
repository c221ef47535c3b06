//! Platform-free logic for the login screen.
//!
//! Nothing in here knows about Dioxus. The `ui` crate renders a
//! [`login::LoginView`] and forwards input events to [`login::LoginScreen`].

pub mod catalog;
pub mod credentials;
pub mod dial;
pub mod locale;
pub mod login;
pub mod masking;
pub mod prefs;
pub mod rich_text;
pub mod strings;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    #[error("unknown locale code: {0:?}")]
    UnknownLocale(String),
}
