//! Work Queue
//!
//! The shared, ordered list of work units plus the claim cursor.
//!
//! ## Claim Protocol
//! The cursor is an `AtomicUsize` advanced with `fetch_add`, which linearizes
//! concurrent claims: no two calls observe the same index, the cursor is
//! monotonically non-decreasing, and the union of all claimed units is the
//! full list exactly once each. There is no lock and no retry loop.
//!
//! The queue also tracks how many workers are still *idle* (have never
//! claimed a unit). The overflow policy reads this counter to decide whether
//! a worker should cede the queue after a single unit.

use super::types::WorkUnit;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug)]
pub struct WorkQueue {
    units: Vec<WorkUnit>,
    /// Next unclaimed index. Only ever advanced, never reset.
    cursor: AtomicUsize,
    /// Workers that have not yet claimed any unit.
    idle_workers: AtomicUsize,
    worker_count: usize,
}

impl WorkQueue {
    pub fn new(units: Vec<WorkUnit>, worker_count: usize) -> Self {
        Self {
            units,
            cursor: AtomicUsize::new(0),
            idle_workers: AtomicUsize::new(worker_count),
            worker_count,
        }
    }

    /// Claims the next unclaimed unit, or `None` once the list is exhausted.
    ///
    /// Safe to call from any number of workers concurrently; each unit is
    /// returned to exactly one caller.
    pub fn claim(&self) -> Option<&WorkUnit> {
        let index = self.cursor.fetch_add(1, Ordering::SeqCst);
        self.units.get(index)
    }

    /// Called by a worker on its first successful claim.
    pub fn mark_active(&self) {
        self.idle_workers.fetch_sub(1, Ordering::SeqCst);
    }

    /// Overflow policy: true while workers outnumber units and at least one
    /// worker has never claimed. A worker seeing `true` after finishing its
    /// unit terminates, ceding the remaining units to workers that have not
    /// run yet.
    pub fn should_yield(&self) -> bool {
        self.worker_count > self.units.len() && self.idle_workers.load(Ordering::SeqCst) > 0
    }

    pub fn units(&self) -> &[WorkUnit] {
        &self.units
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn idle_workers(&self) -> usize {
        self.idle_workers.load(Ordering::SeqCst)
    }

    /// Units not yet claimed by any worker.
    pub fn remaining(&self) -> usize {
        self.units
            .len()
            .saturating_sub(self.cursor.load(Ordering::SeqCst))
    }
}
