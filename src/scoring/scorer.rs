//! Similarity scoring and summary extraction.

use super::tokenizer::{split_sentences, vocabulary};
use super::types::{DocumentScore, Query};

/// Scores one document against the query and extracts its summary.
///
/// Pure function over its inputs:
/// 1. Sentences containing any query term (first match per sentence wins)
///    become the summary, in document order, each included once.
/// 2. `intersection` counts query-term occurrences found in the document's
///    unique vocabulary. Repeated query terms each count: this is a
///    nested-loop count, not a set intersection, and is kept intentionally
///    for output compatibility.
/// 3. `union = |query terms| + |vocabulary| - intersection`, and the score is
///    `intersection / union`. An empty query against an empty document gives
///    `union == 0`; the score is defined as `0.0` in that case.
pub fn score_document(query: &Query, text: &str) -> DocumentScore {
    let mut summary = Vec::new();
    for sentence in split_sentences(text) {
        let matched = sentence
            .split_whitespace()
            .any(|token| query.terms().iter().any(|term| token == term));
        if matched {
            summary.push(sentence.to_string());
        }
    }

    let vocab = vocabulary(text);
    let intersection = query
        .terms()
        .iter()
        .filter(|term| vocab.contains(term.as_str()))
        .count();
    let union = query.terms().len() + vocab.len() - intersection;

    let score = if union == 0 {
        0.0
    } else {
        intersection as f64 / union as f64
    };

    DocumentScore { score, summary }
}
