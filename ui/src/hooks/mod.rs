pub mod use_locale;
