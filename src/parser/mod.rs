//! Text normalization.
//!
//! Two splitters live here: `tokenize` normalizes training text into
//! lowercase alphabetic words, while `split_words` only splits on whitespace
//! and is used for text that is augmented with bridge words.

use tracing::debug;

/// Normalize raw text into lowercase ASCII-alphabetic tokens.
///
/// Every character that is neither an ASCII letter nor whitespace becomes a
/// space, so `"dog's"` yields `["dog", "s"]` and line breaks separate words.
/// Empty or all-punctuation input yields an empty vector.
pub fn tokenize(text: &str) -> Vec<String> {
    let cleaned: String = text
        .chars()
        .map(|c| {
            if c.is_ascii_alphabetic() {
                c.to_ascii_lowercase()
            } else {
                ' '
            }
        })
        .collect();

    let tokens: Vec<String> = cleaned.split_whitespace().map(str::to_owned).collect();
    debug!(chars = text.len(), tokens = tokens.len(), "tokenized text");
    tokens
}

/// Split text on whitespace only. Case and punctuation are kept as-is.
pub fn split_words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}
