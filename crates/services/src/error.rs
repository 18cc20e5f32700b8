//! Shared error types for the services crate.

use thiserror::Error;

use storage::repository::StorageError;

/// Errors emitted by `ProgressStore` writes.
///
/// Reads never fail; see `ProgressStore::load`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProgressStoreError {
    #[error("failed to encode progress: {0}")]
    Encode(#[from] serde_json::Error),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `LessonPlayerService` and `LessonPlayer`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LessonPlayerError {
    /// Some segment of the address did not resolve.
    #[error("not found: {0}")]
    NotFound(String),
    #[error(transparent)]
    Progress(#[from] ProgressStoreError),
}
