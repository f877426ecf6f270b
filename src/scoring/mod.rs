//! Scoring Module
//!
//! The core information retrieval logic: pure functions, no shared state.
//!
//! ## Overview
//! Each document is scored against the query with a Jaccard-style coefficient
//! over whitespace tokens, and every sentence containing a query term is
//! extracted into the document's summary. Ranking picks the top-K documents
//! deterministically.
//!
//! ## Submodules
//! - **`tokenizer`**: Sentence splitting and whitespace tokenization.
//! - **`scorer`**: Similarity score + extractive summary for one document.
//! - **`ranking`**: Deterministic top-K selection with leftmost tie-break.
//! - **`types`**: Query and score value objects.

pub mod ranking;
pub mod scorer;
pub mod tokenizer;
pub mod types;

#[cfg(test)]
mod tests;
