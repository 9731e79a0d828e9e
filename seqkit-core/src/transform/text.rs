//! String sequence filters and predicates

use crate::constants::{PRIMARY_COLORS, SHORT_WORD_LIMIT};

#[cfg(feature = "alloc")]
use crate::constants::{EXCLAMATION_MARK, QUESTION_MARK};
#[cfg(feature = "alloc")]
use alloc::{string::String, vec::Vec};

/// Last character of a string, `None` when empty
pub fn last_char(text: &str) -> Option<char> {
    text.chars().next_back()
}

/// Drop questions and upper-case exclamations
///
/// Strings ending in `?` are removed. Strings ending in `!` are
/// upper-cased. Everything else, including empty strings, is copied
/// unchanged and order is preserved.
#[cfg(feature = "alloc")]
pub fn shout_filter_exclaim<S: AsRef<str>>(messages: &[S]) -> Vec<String> {
    messages
        .iter()
        .map(|message| message.as_ref())
        .filter(|message| last_char(message) != Some(QUESTION_MARK))
        .map(|message| {
            if last_char(message) == Some(EXCLAMATION_MARK) {
                message.to_uppercase()
            } else {
                String::from(message)
            }
        })
        .collect()
}

/// Count words shorter than four UTF-16 code units
///
/// An astral-plane character such as an emoji counts as two.
pub fn count_short_words<S: AsRef<str>>(words: &[S]) -> usize {
    words
        .iter()
        .filter(|word| word.as_ref().encode_utf16().count() < SHORT_WORD_LIMIT)
        .count()
}

/// Whether every color is exactly `red`, `blue` or `green`
///
/// Vacuously true for an empty slice.
pub fn all_primary_colors<S: AsRef<str>>(colors: &[S]) -> bool {
    colors
        .iter()
        .all(|color| PRIMARY_COLORS.contains(&color.as_ref()))
}
