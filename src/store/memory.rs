//! In-memory document store.

use super::DocumentStore;
use crate::error::StoreError;
use async_trait::async_trait;
use std::collections::HashMap;

/// Holds documents in a plain map. Backs the pool and pipeline tests, where
/// filesystem fixtures would only add noise.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocumentStore {
    documents: HashMap<String, String>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, text: impl Into<String>) {
        self.documents.insert(name.into(), text.into());
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn load(&self, name: &str) -> Result<String, StoreError> {
        self.documents
            .get(name)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(name.to_string()))
    }
}
