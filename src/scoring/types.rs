use serde::{Deserialize, Serialize};

/// The query, tokenized once at startup and shared read-only by all workers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Query {
    raw: String,
    terms: Vec<String>,
}

impl Query {
    /// Whitespace-tokenizes the raw query line. Repeated terms are kept:
    /// each repetition participates in the intersection count.
    pub fn new(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
            terms: raw.split_whitespace().map(str::to_string).collect(),
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// Output of scoring one document: the similarity coefficient and the
/// extracted summary sentences in document order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentScore {
    /// Jaccard-style coefficient in `[0, 1]`.
    pub score: f64,
    /// Original text of every sentence containing a query term, in order of
    /// first appearance, each included once.
    pub summary: Vec<String>,
}
