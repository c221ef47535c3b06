use super::locale_preference::LocalePreference;
use serde::Deserialize;
use serde::Serialize;

/// All user prefs. Read once at startup.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize, Default)]
pub struct UserPrefs {
    locale_preference: LocalePreference,
}

impl UserPrefs {
    pub fn from_env() -> Self {
        Self::default()
    }

    pub fn locale_preference(&self) -> &LocalePreference {
        &self.locale_preference
    }
}
