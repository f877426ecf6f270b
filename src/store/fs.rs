//! Filesystem-backed document store.

use super::DocumentStore;
use crate::error::StoreError;
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Reads documents from a root directory; the document name is the file name.
#[derive(Debug, Clone)]
pub struct FsDocumentStore {
    root: PathBuf,
}

impl FsDocumentStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl DocumentStore for FsDocumentStore {
    async fn load(&self, name: &str) -> Result<String, StoreError> {
        let path = self.root.join(name);

        match tokio::fs::read_to_string(&path).await {
            Ok(text) => Ok(text),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(StoreError::NotFound(name.to_string()))
            }
            Err(e) => Err(StoreError::Io {
                name: name.to_string(),
                source: e,
            }),
        }
    }
}
