//! Document Storage Module
//!
//! Supplies raw document text to the worker pool.
//!
//! ## Overview
//! Workers never touch the filesystem directly; they go through the
//! [`DocumentStore`] trait. This keeps the pool testable (an in-memory store
//! backs the concurrency tests) and keeps I/O concerns out of the scoring
//! logic.
//!
//! ## Submodules
//! - **`fs`**: Filesystem-backed store reading documents from a root directory.
//! - **`memory`**: In-memory store for tests and embedded use.

pub mod fs;
pub mod memory;


use crate::error::StoreError;
use async_trait::async_trait;

/// Loads the raw text of a document by name.
///
/// A missing or unreadable document is an error, never an empty string: the
/// pool records the failure for that unit instead of silently producing a
/// zero score.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn load(&self, name: &str) -> Result<String, StoreError>;
}
