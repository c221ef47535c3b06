pub mod locale_preference;
pub mod user_prefs;
