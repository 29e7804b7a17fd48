//! Utility functions for string processing.

use std::borrow::Cow;

use unicode_script::{Script, UnicodeScript};
#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// Lower-case unless the caller asked for case-sensitive matching.
#[inline]
pub fn fold_case(value: &str, case_sensitive: bool) -> Cow<'_, str> {
    if case_sensitive {
        Cow::Borrowed(value)
    } else {
        Cow::Owned(value.to_lowercase())
    }
}

/// First occurrence of `needle` in `haystack` at or after `from`, in characters.
///
/// An empty needle never matches (callers loop on the result).
pub fn index_of(haystack: &[char], needle: &[char], from: usize) -> Option<usize> {
    if needle.is_empty() || from >= haystack.len() || needle.len() > haystack.len() - from {
        return None;
    }
    haystack[from..]
        .windows(needle.len())
        .position(|window| window == needle)
        .map(|offset| from + offset)
}

/// Fold diacritics and case: "Café Naïve" → "cafe naive".
///
/// 1. NFD normalize (decompose characters into base + combining marks)
/// 2. Filter out combining marks
/// 3. Lowercase
///
/// Whitespace is left alone: token counts feed the field-length norm.
#[cfg(feature = "unicode-normalization")]
pub fn fold_diacritics(value: &str) -> String {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// Without unicode-normalization this only lower-cases.
#[cfg(not(feature = "unicode-normalization"))]
pub fn fold_diacritics(value: &str) -> String {
    value.to_lowercase()
}

/// Combining marks (Unicode category Mn) in the common diacritic blocks.
#[cfg(feature = "unicode-normalization")]
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{1AB0}'..='\u{1AFF}' |  // Combining Diacritical Marks Extended
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}

/// Does the text contain any Han (Chinese) character?
pub fn contains_han(value: &str) -> bool {
    value.chars().any(|c| c.script() == Script::Han)
}
