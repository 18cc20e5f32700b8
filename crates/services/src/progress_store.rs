use std::sync::Arc;

use heka_core::ProgressState;
use heka_core::progress::DEFAULT_PROGRESS_KEY;
use storage::repository::{InMemoryRepository, KeyValueRepository};

use crate::error::ProgressStoreError;

/// Reads and writes the completion set under one fixed key.
///
/// The persisted value is always the complete set, never a delta.
#[derive(Clone)]
pub struct ProgressStore {
    repo: Arc<dyn KeyValueRepository>,
    key: String,
}

impl ProgressStore {
    #[must_use]
    pub fn new(repo: Arc<dyn KeyValueRepository>, key: impl Into<String>) -> Self {
        Self {
            repo,
            key: key.into(),
        }
    }

    #[must_use]
    pub fn with_default_key(repo: Arc<dyn KeyValueRepository>) -> Self {
        Self::new(repo, DEFAULT_PROGRESS_KEY)
    }

    #[must_use]
    pub fn in_memory() -> Self {
        Self::with_default_key(Arc::new(InMemoryRepository::new()))
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Load the persisted set.
    ///
    /// A missing, empty, unreadable or wrongly shaped entry yields an empty
    /// set. The failure is logged and the store is not retried.
    pub async fn load(&self) -> ProgressState {
        let raw = match self.repo.get(&self.key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return ProgressState::new(),
            Err(err) => {
                tracing::warn!(key = %self.key, %err, "progress store unreadable, starting empty");
                return ProgressState::new();
            }
        };

        if raw.trim().is_empty() {
            return ProgressState::new();
        }

        match ProgressState::from_json(&raw) {
            Ok(state) => {
                tracing::debug!(key = %self.key, completed = state.len(), "progress loaded");
                state
            }
            Err(err) => {
                tracing::warn!(key = %self.key, %err, "discarding malformed progress");
                ProgressState::new()
            }
        }
    }

    /// Persist the full set, replacing whatever was stored.
    ///
    /// Entries `load` skipped as unparsable are not carried over, so the
    /// first save after such a load drops them from the store.
    ///
    /// # Errors
    ///
    /// Returns `ProgressStoreError` if encoding or the write fails.
    pub async fn save(&self, state: &ProgressState) -> Result<(), ProgressStoreError> {
        let raw = state.to_json()?;
        self.repo.put(&self.key, &raw).await?;
        tracing::debug!(key = %self.key, completed = state.len(), "progress saved");
        Ok(())
    }

    /// Remove the persisted entry.
    ///
    /// # Errors
    ///
    /// Returns `ProgressStoreError::Storage` if the delete fails.
    pub async fn clear(&self) -> Result<(), ProgressStoreError> {
        self.repo.remove(&self.key).await?;
        tracing::info!(key = %self.key, "progress cleared");
        Ok(())
    }
}
