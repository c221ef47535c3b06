//! The process-wide display language and the service that owns it.

use std::str::FromStr;

use dioxus_logger::tracing::info;
use serde::Deserialize;
use serde::Serialize;

use crate::ModelError;

/// A display language supported by the app.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::EnumIs,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ar,
}

/// Horizontal layout direction implied by a locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumIs)]
pub enum TextDirection {
    Ltr,
    Rtl,
}

impl TextDirection {
    /// Value for the html `dir` attribute.
    pub fn as_attr(&self) -> &'static str {
        match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
        }
    }
}

impl Locale {
    /// ISO 639-1 language code, e.g. `"ar"`.
    pub fn code(&self) -> &'static str {
        self.into()
    }

    /// Parses a language code, ignoring ASCII case.
    pub fn parse(code: &str) -> Result<Self, ModelError> {
        Self::from_str(code.trim()).map_err(|_| ModelError::UnknownLocale(code.to_string()))
    }

    pub fn direction(&self) -> TextDirection {
        match self {
            Self::Ar => TextDirection::Rtl,
            Self::En => TextDirection::Ltr,
        }
    }

    /// The language the toggle switches to: Arabic goes to English,
    /// anything else goes to Arabic.
    pub fn toggled(&self) -> Self {
        match self {
            Self::Ar => Self::En,
            Self::En => Self::Ar,
        }
    }
}

/// Owner of the current locale.
///
/// Screens read the locale through this trait and write it when the user
/// picks another language. Implementations are responsible for getting every
/// dependent screen re-rendered after a `set`.
pub trait LocaleService {
    fn current(&self) -> Locale;
    fn set(&mut self, locale: Locale);
}

/// Handle returned by [`LocaleStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(Locale)>;

/// In-memory [`LocaleService`] with explicit change notification.
///
/// This is the renderer-free implementation: screens driven outside Dioxus
/// (and the tests of both crates) use it. The Dioxus app uses a signal-backed
/// service instead, where reading the locale is the subscription.
///
/// Listeners run synchronously inside `set`, in subscription order. Setting
/// the locale that is already current notifies nobody.
#[derive(Default)]
pub struct LocaleStore {
    locale: Locale,
    next_id: u64,
    listeners: Vec<(SubscriptionId, Listener)>,
}

impl LocaleStore {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            ..Default::default()
        }
    }

    pub fn subscribe(&mut self, listener: impl FnMut(Locale) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != id);
        self.listeners.len() != before
    }
}

impl LocaleService for LocaleStore {
    fn current(&self) -> Locale {
        self.locale
    }

    fn set(&mut self, locale: Locale) {
        if self.locale == locale {
            return;
        }
        info!("locale changed: {} -> {}", self.locale.code(), locale.code());
        self.locale = locale;
        for (_, listener) in self.listeners.iter_mut() {
            listener(locale);
        }
    }
}

impl std::fmt::Debug for LocaleStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocaleStore")
            .field("locale", &self.locale)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
