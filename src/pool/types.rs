use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A single unit of work: one named document to score against the query.
///
/// Defined once at load time, never mutated, claimed by exactly one worker.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct WorkUnit(pub String);

impl WorkUnit {
    pub fn name(&self) -> &str {
        &self.0
    }
}

/// What processing one unit produced.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum ScoreOutcome {
    /// The document was loaded and scored.
    Scored { score: f64, summary: Vec<String> },
    /// The document could not be loaded. Recording the failure keeps the
    /// one-result-per-unit invariant intact.
    Failed { error: String },
}

/// One entry in the result sink: created once by the worker that claimed the
/// unit, immutable afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoreResult {
    pub unit: WorkUnit,
    pub outcome: ScoreOutcome,
}

impl ScoreResult {
    /// Score used for ranking. Failed units carry a `-1.0` sentinel so they
    /// sort below every real score (real scores are in `[0, 1]`).
    pub fn ranking_score(&self) -> f64 {
        match &self.outcome {
            ScoreOutcome::Scored { score, .. } => *score,
            ScoreOutcome::Failed { .. } => -1.0,
        }
    }
}

/// Cooperative cancellation flag shared by the coordinator and its workers.
///
/// Once triggered, workers stop claiming new units and unwind at the nearest
/// claim point; a unit that was already claimed still produces its result.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}
