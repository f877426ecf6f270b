//! Report Module
//!
//! Assembles the ranked report from the accumulated results and renders it
//! to the output text format.
//!
//! ## Output Format
//! Records are separated by `###` lines. Each record carries the document
//! name, the score at fixed 4-decimal precision, and the summary as
//! period-terminated clauses with newlines stripped and a normalized single
//! leading space:
//!
//! ```text
//! ###
//! Result 1:
//! File: abstract_2.txt
//! Score: 0.1042
//! Summary: A cat sat. A cat and dog played.
//! ###
//! ```
//!
//! A unit whose document failed to load surfaces as an `Error:` line instead
//! of a summary, so failures are visible in the report rather than silently
//! ranked as real scores.

use crate::error::EngineError;
use crate::pool::types::{ScoreOutcome, ScoreResult};
use crate::scoring::ranking::select_top;
use serde::{Deserialize, Serialize};
use std::path::Path;


/// One ranked record of the final report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedEntry {
    /// 1-based rank.
    pub rank: usize,
    pub name: String,
    pub score: f64,
    pub summary: Vec<String>,
    /// Load error for failed units; `None` for scored ones.
    pub error: Option<String>,
}

/// The final deterministic ranking: top-K results by descending score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedReport {
    pub query: String,
    pub entries: Vec<RankedEntry>,
}

impl RankedReport {
    /// Ranks the full result set and keeps the top `k` entries.
    ///
    /// `results` must be the complete post-join result set in canonical
    /// order; ties then resolve to the document listed first in the job
    /// file. `k` larger than the result count is clamped.
    pub fn assemble(query: &str, results: &[ScoreResult], k: usize) -> Self {
        let scores: Vec<f64> = results.iter().map(ScoreResult::ranking_score).collect();

        let entries = select_top(&scores, k)
            .into_iter()
            .enumerate()
            .map(|(position, index)| {
                let result = &results[index];
                match &result.outcome {
                    ScoreOutcome::Scored { score, summary } => RankedEntry {
                        rank: position + 1,
                        name: result.unit.name().to_string(),
                        score: *score,
                        summary: summary.clone(),
                        error: None,
                    },
                    ScoreOutcome::Failed { error } => RankedEntry {
                        rank: position + 1,
                        name: result.unit.name().to_string(),
                        score: result.ranking_score(),
                        summary: Vec::new(),
                        error: Some(error.clone()),
                    },
                }
            })
            .collect();

        Self {
            query: query.to_string(),
            entries,
        }
    }

    /// Renders the report in the output text format.
    pub fn render(&self) -> String {
        let mut out = String::from("###\n");

        for entry in &self.entries {
            out.push_str(&format!(
                "Result {}:\nFile: {}\nScore: {:.4}\n",
                entry.rank, entry.name, entry.score
            ));

            match &entry.error {
                Some(error) => {
                    out.push_str(&format!("Error: {error}\n"));
                }
                None => {
                    out.push_str("Summary:");
                    for sentence in &entry.summary {
                        out.push_str(&format_summary_sentence(sentence));
                    }
                    out.push_str(" \n");
                }
            }

            out.push_str("###\n");
        }

        out
    }

    /// Renders and writes the report to `path`.
    pub async fn write_to(&self, path: &Path) -> Result<(), EngineError> {
        tokio::fs::write(path, self.render()).await?;
        Ok(())
    }
}

/// Normalizes one summary sentence for the report: newlines stripped, a
/// leading space added when the sentence does not already start with one,
/// terminated by a period.
fn format_summary_sentence(sentence: &str) -> String {
    let cleaned: String = sentence.chars().filter(|&c| c != '\n').collect();
    if cleaned.starts_with(' ') {
        format!("{cleaned}.")
    } else {
        format!(" {cleaned}.")
    }
}
