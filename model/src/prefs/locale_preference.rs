use std::env;

use dioxus_logger::tracing::warn;
use serde::Deserialize;
use serde::Serialize;

use crate::locale::Locale;

/// The language the app starts in.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct LocalePreference {
    initial: Locale,
}

impl LocalePreference {
    /// Name of the environment variable holding the startup language code.
    pub const ENV_VAR: &'static str = "APP_LOCALE";

    pub fn initial(&self) -> Locale {
        self.initial
    }

    /// Reads `APP_LOCALE` ("en" or "ar", case-insensitive).
    ///
    /// Unset means English. An unrecognized code is logged and also means
    /// English.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let initial = match lookup(Self::ENV_VAR) {
            Some(code) => Locale::parse(&code).unwrap_or_else(|e| {
                warn!("{}: {e}; falling back to {}", Self::ENV_VAR, Locale::default().code());
                Locale::default()
            }),
            None => Locale::default(),
        };
        Self { initial }
    }
}

impl Default for LocalePreference {
    fn default() -> Self {
        Self::from_env()
    }
}
