//! Shared building blocks for the screens.
pub mod clickable_text;
pub mod password_field;
pub mod pico;
pub mod promo_tile;
