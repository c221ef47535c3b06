//! Defines the mutable, reactive state shared by every screen.

use dioxus::prelude::*;
use model::locale::Locale;

/// A reactive state provided as a Dioxus context at the app root.
///
/// The locale is process-wide rather than per screen: any component that
/// reads it re-renders when the language toggle writes it.
#[derive(Clone, Copy)]
pub struct AppStateMut {
    /// The current display language.
    pub locale: Signal<Locale>,
}
