/// Glyph substituted for every character of a hidden secret.
pub const MASK_GLYPH: char = '\u{2022}';

/// Replaces each character of `secret` with [`MASK_GLYPH`].
///
/// Length is preserved in characters, not bytes, so `"كلمة"` masks to four
/// glyphs.
pub fn mask(secret: &str) -> String {
    secret.chars().map(|_| MASK_GLYPH).collect()
}
