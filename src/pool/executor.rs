//! Worker Pool Implementation
//!
//! Manages the lifecycle of the scoring run. The coordinator spawns a fixed
//! number of workers, waits for all of them at the join barrier, and hands
//! back the full result set in canonical (job-file) order.
//!
//! ## Responsibilities
//! - **Spawning**: One tokio task per worker, each handed shared references
//!   to the queue, sink, store, query, and cancellation token plus an
//!   explicit worker index for labeling.
//! - **Worker loop**: claim -> load -> score -> append, until the queue is
//!   drained, cancellation triggers, or the overflow policy applies.
//! - **Join barrier**: No result is read before every worker has finished.

use super::queue::WorkQueue;
use super::sink::ResultSink;
use super::types::{CancellationToken, ScoreOutcome, ScoreResult, WorkUnit};
use crate::error::EngineError;
use crate::scoring::scorer::score_document;
use crate::scoring::types::Query;
use crate::store::DocumentStore;
use std::collections::HashMap;
use std::sync::Arc;

/// Spawns the worker pool and collects its results.
pub struct PoolCoordinator {
    queue: Arc<WorkQueue>,
    sink: Arc<ResultSink>,
    store: Arc<dyn DocumentStore>,
    query: Arc<Query>,
    worker_count: usize,
    cancel: CancellationToken,
}

impl PoolCoordinator {
    pub fn new(
        store: Arc<dyn DocumentStore>,
        query: Query,
        units: Vec<WorkUnit>,
        worker_count: usize,
    ) -> Self {
        Self {
            queue: Arc::new(WorkQueue::new(units, worker_count)),
            sink: Arc::new(ResultSink::new()),
            store,
            query: Arc::new(query),
            worker_count,
            cancel: CancellationToken::new(),
        }
    }

    /// Token that makes workers stop claiming new units when triggered.
    /// Units already claimed still produce their result.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Runs the pool to completion: spawns every worker, waits for all of
    /// them (join barrier), then returns one result per processed unit.
    ///
    /// Results come back in job-file order regardless of which worker
    /// finished when, so the index-based tie-break downstream is
    /// deterministic across runs and worker counts.
    pub async fn run(&self) -> Result<Vec<ScoreResult>, EngineError> {
        tracing::info!(
            "Starting {} workers for {} work units",
            self.worker_count,
            self.queue.len()
        );

        let mut handles = Vec::with_capacity(self.worker_count);
        for worker_id in 0..self.worker_count {
            let queue = self.queue.clone();
            let sink = self.sink.clone();
            let store = self.store.clone();
            let query = self.query.clone();
            let cancel = self.cancel.clone();

            handles.push(tokio::spawn(async move {
                worker_loop(worker_id, queue, sink, store, query, cancel).await;
            }));
        }

        for handle in handles {
            handle.await?;
        }

        let mut results = self.sink.snapshot().await;
        tracing::info!("All workers joined, {} results collected", results.len());

        // Completion order varies run to run; restore job-file order so the
        // ranking tie-break never observes scheduling noise.
        let position: HashMap<&str, usize> = self
            .queue
            .units()
            .iter()
            .enumerate()
            .map(|(index, unit)| (unit.name(), index))
            .collect();
        results.sort_by_key(|result| {
            position
                .get(result.unit.name())
                .copied()
                .unwrap_or(usize::MAX)
        });

        Ok(results)
    }
}

/// The main loop for a single worker.
///
/// 1. Observe cancellation, then claim the next unit; terminate when the
///    queue is drained.
/// 2. Load the document text and score it against the query. A load failure
///    becomes a `Failed` outcome for that unit.
/// 3. Append the result to the sink.
/// 4. Overflow check: with more workers than units, finish after a single
///    unit while any worker has yet to claim.
async fn worker_loop(
    worker_id: usize,
    queue: Arc<WorkQueue>,
    sink: Arc<ResultSink>,
    store: Arc<dyn DocumentStore>,
    query: Arc<Query>,
    cancel: CancellationToken,
) {
    tracing::debug!("Worker {} started", worker_id);
    let mut claimed_any = false;

    loop {
        if cancel.is_cancelled() {
            tracing::debug!("Worker {} observed cancellation, stopping", worker_id);
            break;
        }

        let Some(unit) = queue.claim() else {
            tracing::debug!("Worker {} found the queue drained", worker_id);
            break;
        };
        if !claimed_any {
            claimed_any = true;
            queue.mark_active();
        }

        tracing::info!("Worker {} is processing {}", worker_id, unit.name());

        let outcome = match store.load(unit.name()).await {
            Ok(text) => {
                let scored = score_document(&query, &text);
                ScoreOutcome::Scored {
                    score: scored.score,
                    summary: scored.summary,
                }
            }
            Err(e) => {
                tracing::warn!("Worker {} failed to load {}: {}", worker_id, unit.name(), e);
                ScoreOutcome::Failed {
                    error: e.to_string(),
                }
            }
        };

        sink.append(ScoreResult {
            unit: unit.clone(),
            outcome,
        })
        .await;

        if queue.should_yield() {
            tracing::debug!("Worker {} yielding to idle workers", worker_id);
            break;
        }
    }

    tracing::debug!("Worker {} done", worker_id);
}
