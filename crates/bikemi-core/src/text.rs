// crates/bikemi-core/src/text.rs

/// Reduce a string to the key used for name matching.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Piàve` -> `Piave`)
/// 2\) Drop every character that is not an ASCII letter or digit
///
/// Case is preserved; comparisons fold case at match time
/// (see [`contains_folded`]).
///
/// # Examples
///
/// ```rust
/// use bikemi_core::text::fold_key;
///
/// assert_eq!(fold_key("Viale Piàve "), "VialePiave");
/// assert_eq!(fold_key("P.za Duomo - 5 Giornate"), "PzaDuomo5Giornate");
/// assert_eq!(fold_key("  -- "), "");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s)
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .collect()
}

/// ASCII case-insensitive substring test.
///
/// Both inputs are expected to be outputs of [`fold_key`]; an empty
/// `needle` never matches.
///
/// ```rust
/// use bikemi_core::text::contains_folded;
///
/// assert!(contains_folded("VialePiave", "piave"));
/// assert!(!contains_folded("VialePiave", ""));
/// ```
pub fn contains_folded(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return false;
    }
    haystack
        .to_ascii_lowercase()
        .contains(&needle.to_ascii_lowercase())
}
