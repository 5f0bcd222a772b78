//! Comment aggregation and token extraction
//!
//! The aggregator flattens a batch of [`Comment`] records into one
//! normalized lowercase blob; the tokenizer extracts maximal runs of ASCII
//! lowercase letters from it. Both are pure functions and treat empty input
//! as a valid case, not an error.

use crate::types::Comment;

/// Placeholder answer some students type instead of leaving a field blank.
/// Fields equal to it (after trimming, case-insensitive) carry no signal
/// and are skipped during aggregation.
const NO_RESPONSE: &str = "none";

/// Concatenate the recognized text fields of a comment batch into one
/// normalized blob.
///
/// Fields that are missing, empty after trimming, or equal to `"none"`
/// (case-insensitive) are skipped. Surviving fields are joined with single
/// spaces and the whole blob is lowercased.
///
/// An empty batch (or a batch with no usable fields) yields an empty
/// string.
pub fn aggregate_comments(comments: &[Comment]) -> String {
    let mut parts: Vec<&str> = Vec::new();

    for comment in comments {
        for field in comment.text_fields().into_iter().flatten() {
            let trimmed = field.trim();
            if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(NO_RESPONSE) {
                continue;
            }
            parts.push(trimmed);
        }
    }

    parts.join(" ").to_lowercase()
}

/// Extract all maximal runs of ASCII lowercase letters from a normalized
/// blob.
///
/// Digits, punctuation, whitespace, and non-ASCII characters are implicit
/// separators and are discarded, so no numeric or hyphenated-compound
/// tokens survive. Returned slices borrow from `blob` and appear in input
/// order.
pub fn tokenize(blob: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start: Option<usize> = None;

    for (i, b) in blob.bytes().enumerate() {
        if b.is_ascii_lowercase() {
            if start.is_none() {
                start = Some(i);
            }
        } else if let Some(s) = start.take() {
            tokens.push(&blob[s..i]);
        }
    }
    if let Some(s) = start {
        tokens.push(&blob[s..]);
    }

    tokens
}
