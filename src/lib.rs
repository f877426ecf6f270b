//! Concurrent Text-Relevance Scoring Engine
//!
//! This library crate defines the core modules of the scoring engine.
//! It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! The system is composed of five loosely coupled subsystems:
//!
//! - **`config`**: Job-file parsing and validation. Produces the immutable run
//!   configuration (worker count, document list, query, result count).
//! - **`store`**: The document loading layer. Abstracts where document text
//!   comes from behind the `DocumentStore` trait (filesystem, in-memory).
//! - **`scoring`**: The core information retrieval logic. Contains tokenizers,
//!   the Jaccard-style scoring algorithm, and deterministic top-K ranking.
//! - **`pool`**: The concurrent work-distribution engine. A fixed pool of
//!   workers claims documents from a shared queue, scores them, and
//!   accumulates results into a shared sink.
//! - **`report`**: Assembles the ranked report from the accumulated results
//!   and renders it to the output format.

pub mod config;
pub mod error;
pub mod pool;
pub mod report;
pub mod scoring;
pub mod store;
