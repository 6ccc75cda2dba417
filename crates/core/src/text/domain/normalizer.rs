use crate::shared::constants::{FILLER_WORDS, STRIPPED_PUNCTUATION};

/// Splits text into comparison tokens.
///
/// Lowercases, treats the stripped punctuation set as word separators,
/// collapses whitespace, and drops filler words. Both the scorer's string
/// view and the segmenter's word view are derived from this one routine.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| c.is_whitespace() || STRIPPED_PUNCTUATION.contains(&c))
        .filter(|token| !token.is_empty() && !is_filler(token))
        .map(str::to_string)
        .collect()
}

/// Normalized single-string form of `text`: tokens joined by single spaces.
pub fn normalize(text: &str) -> String {
    tokenize(text).join(" ")
}

/// Whether `token` is one of the filler words, ignoring case.
pub fn is_filler(token: &str) -> bool {
    FILLER_WORDS
        .iter()
        .any(|filler| filler.eq_ignore_ascii_case(token))
}
