//=============================================================================
// File: src/hooks/use_locale.rs
//=============================================================================

use dioxus::prelude::*;
use dioxus_logger::tracing::info;
use model::locale::Locale;
use model::locale::LocaleService;

use crate::app_state_mut::AppStateMut;

/// [`LocaleService`] backed by the app-wide locale signal.
///
/// Reading `current()` during render subscribes the component, so a `set`
/// re-renders every screen that shows localized text.
#[derive(Clone, Copy)]
pub struct ReactiveLocale(Signal<Locale>);

impl LocaleService for ReactiveLocale {
    fn current(&self) -> Locale {
        *self.0.read()
    }

    fn set(&mut self, locale: Locale) {
        if *self.0.peek() == locale {
            return;
        }
        info!("locale changed: {} -> {}", self.0.peek().code(), locale.code());
        self.0.set(locale);
    }
}

pub fn use_locale() -> ReactiveLocale {
    ReactiveLocale(use_context::<AppStateMut>().locale)
}
