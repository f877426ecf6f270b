//! Error types for the scoring engine.

use thiserror::Error;

/// Top-level error type for engine operations.
#[derive(Error, Debug)]
pub enum EngineError {
    /// Job file was malformed; fatal at startup, before any worker spawns
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// Document could not be loaded
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// I/O error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A worker task panicked or was aborted before the join barrier
    #[error("worker failed to join: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Job-file parsing and validation errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("job file line {line}: expected {expected}, got {got:?}")]
    Malformed {
        line: usize,
        expected: &'static str,
        got: String,
    },

    #[error("worker count must be at least 1")]
    NoWorkers,

    #[error("result count must be at least 1")]
    NoResults,

    #[error("job file declares {declared} documents but lists {found}")]
    DocumentCountMismatch { declared: usize, found: usize },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Document loading errors.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("document not found: {0}")]
    NotFound(String),

    #[error("failed to read {name}: {source}")]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },
}
