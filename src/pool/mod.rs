//! Worker Pool Module
//!
//! The concurrent work-distribution engine. A fixed pool of workers claims
//! documents from a shared queue, scores each one against the query, and
//! accumulates the results into a shared sink.
//!
//! ## Architecture Overview
//! The pool follows a **Pull-based** model over a bounded unit list:
//! 1. **Claiming**: Workers atomically claim the next unclaimed unit from the
//!    `WorkQueue`. Each unit is claimed exactly once; when the cursor passes
//!    the last unit, claiming returns `None` and the worker terminates.
//! 2. **Processing**: The claimed document's text is loaded through the
//!    `DocumentStore` and scored. A load failure is recorded as a failed
//!    result for that unit, never silently skipped.
//! 3. **Accumulation**: Results are appended to the `ResultSink` under
//!    exclusive access. Insertion order is scheduling-dependent; the set of
//!    entries is not.
//! 4. **Join barrier**: The `PoolCoordinator` waits for every worker before
//!    the sink is read. No concurrency exists after the join.
//!
//! When workers outnumber units, the overflow policy makes each worker cede
//! the queue after a single unit while any worker has yet to claim, spreading
//! the first pass one unit per worker.
//!
//! ## Submodules
//! - **`queue`**: Shared unit list with the atomic claim cursor.
//! - **`sink`**: Append-only shared result collection.
//! - **`executor`**: The worker loop and the coordinator that spawns/joins workers.
//! - **`types`**: Work units, score results, and the cancellation token.

pub mod executor;
pub mod queue;
pub mod sink;
pub mod types;


pub use executor::PoolCoordinator;
