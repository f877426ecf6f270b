//! Text segmentation utilities.
//!
//! Tokenization is deliberately minimal: sentences split on the period
//! delimiter, tokens split on whitespace, exact case-sensitive matching.

use std::collections::HashSet;

/// Splits a document into sentences on `'.'`, retaining the original sentence
/// text (including any leading whitespace) for summary reconstruction.
///
/// A trailing empty segment after the final period is dropped, so
/// `"A cat sat."` yields one sentence, not two.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences: Vec<&str> = text.split('.').collect();
    if sentences.last().is_some_and(|s| s.is_empty()) {
        sentences.pop();
    }
    sentences
}

/// Whitespace tokenization. Duplicates are preserved: query terms keep their
/// multiplicity, which the intersection count depends on.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// The unique whitespace-token vocabulary of a document, case-sensitive.
pub fn vocabulary(text: &str) -> HashSet<&str> {
    text.split_whitespace().collect()
}
