//! Job Configuration Module
//!
//! Parses and validates the job file that describes a single scoring run.
//!
//! ## Job File Format
//! ```text
//! <worker count>
//! <document count>
//! <result count K>
//! <query line>
//! <document file name>   (one per line, document-count times)
//! ```
//!
//! The query line is taken verbatim (it may contain spaces); document names
//! are listed one per line below it. All validation happens here, before any
//! worker is spawned: a malformed job file is fatal at startup.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[cfg(test)]
mod tests;

/// Immutable description of one scoring run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobSpec {
    /// Number of pool workers to spawn. May exceed the number of documents.
    pub workers: usize,
    /// Number of top-ranked results to report. Clamped to the document count
    /// at ranking time.
    pub top_k: usize,
    /// Raw query line from the job file.
    pub query: String,
    /// Ordered document names. This order defines the deterministic
    /// tie-break order of the final ranking.
    pub documents: Vec<String>,
}

impl JobSpec {
    /// Reads and parses a job file from disk.
    pub async fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = tokio::fs::read_to_string(path).await?;
        Self::parse(&raw)
    }

    /// Parses the job file contents.
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let mut lines = raw.lines();

        let workers = parse_count(lines.next(), 1, "worker count")?;
        let document_count = parse_count(lines.next(), 2, "document count")?;
        let top_k = parse_count(lines.next(), 3, "result count")?;

        let query = match lines.next() {
            Some(line) => line.trim_end_matches('\r').to_string(),
            None => {
                return Err(ConfigError::Malformed {
                    line: 4,
                    expected: "query line",
                    got: String::new(),
                });
            }
        };

        let documents: Vec<String> = lines
            .map(|line| line.trim().to_string())
            .filter(|line| !line.is_empty())
            .collect();

        if workers == 0 {
            return Err(ConfigError::NoWorkers);
        }
        if top_k == 0 {
            return Err(ConfigError::NoResults);
        }
        if documents.len() != document_count {
            return Err(ConfigError::DocumentCountMismatch {
                declared: document_count,
                found: documents.len(),
            });
        }

        Ok(Self {
            workers,
            top_k,
            query,
            documents,
        })
    }
}

fn parse_count(
    line: Option<&str>,
    line_number: usize,
    expected: &'static str,
) -> Result<usize, ConfigError> {
    let raw = line.unwrap_or_default().trim();
    raw.parse().map_err(|_| ConfigError::Malformed {
        line: line_number,
        expected,
        got: raw.to_string(),
    })
}
