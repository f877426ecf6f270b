//! Result Sink
//!
//! Append-only shared collection of per-unit results. Workers append under
//! exclusive access; the full set is read only after the join barrier, so
//! readers always observe a stable snapshot.

use super::types::ScoreResult;
use tokio::sync::Mutex;

#[derive(Debug, Default)]
pub struct ResultSink {
    entries: Mutex<Vec<ScoreResult>>,
}

impl ResultSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one result. O(1) amortized; entries are never lost or
    /// overwritten because each worker appends exactly one result per unit
    /// it claimed.
    pub async fn append(&self, result: ScoreResult) {
        self.entries.lock().await.push(result);
    }

    /// The full result set. Only meaningful once all workers have joined;
    /// before that the snapshot may be partial.
    pub async fn snapshot(&self) -> Vec<ScoreResult> {
        self.entries.lock().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }
}
