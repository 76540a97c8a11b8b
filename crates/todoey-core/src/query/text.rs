//! Case- and diacritic-insensitive text folding
//!
//! `fold_text` is the single normalization used for substring matching and
//! title sorting. The SQLite store registers it as a SQL function so that
//! in-database filtering agrees with in-memory filtering.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Fold text for comparison: lowercase, NFD, strip combining marks
///
/// ```
/// use todoey_core::query::fold_text;
///
/// assert_eq!(fold_text("Café"), "cafe");
/// assert_eq!(fold_text("BOBA tea"), "boba tea");
/// ```
pub fn fold_text(s: &str) -> String {
    // lowercasing first: some capitals lowercase to a base letter plus a mark
    s.chars()
        .flat_map(char::to_lowercase)
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}

/// True if `needle` occurs in `haystack` after folding both
pub fn contains_folded(haystack: &str, needle: &str) -> bool {
    fold_text(haystack).contains(&fold_text(needle))
}
