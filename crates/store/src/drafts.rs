//! Typed access to the course draft keys.
//!
//! Reads are tolerant: a missing value is `None`, and a value that fails to
//! parse is logged and also treated as `None` so the caller falls back to
//! its default draft. Store I/O failures are still returned as errors.

use std::sync::Arc;

use academy_core::course::{CourseMetadataDraft, CourseModulesDraft};
use academy_core::types::Timestamp;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::keys::{ALL_KEYS, KEY_COURSE_DRAFT_ID, KEY_COURSE_METADATA, KEY_COURSE_MODULES};
use crate::{DraftStore, StoreError};

/// Build the draft id for a Phase 1 finalized at `now`.
pub fn draft_id_for(now: Timestamp) -> String {
    format!("draft_{}", now.timestamp_millis())
}

#[derive(Clone)]
pub struct DraftRepo {
    store: Arc<dyn DraftStore>,
}

impl std::fmt::Debug for DraftRepo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DraftRepo").finish_non_exhaustive()
    }
}

impl DraftRepo {
    pub fn new(store: Arc<dyn DraftStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<dyn DraftStore> {
        &self.store
    }

    // -- metadata --

    pub async fn load_metadata(&self) -> Result<Option<CourseMetadataDraft>, StoreError> {
        self.load_json(KEY_COURSE_METADATA).await
    }

    pub async fn save_metadata(&self, draft: &CourseMetadataDraft) -> Result<(), StoreError> {
        self.save_json(KEY_COURSE_METADATA, draft).await
    }

    // -- draft id --

    /// The Phase 1 draft id. A blank value counts as absent.
    pub async fn draft_id(&self) -> Result<Option<String>, StoreError> {
        Ok(self
            .store
            .get(KEY_COURSE_DRAFT_ID)
            .await?
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty()))
    }

    /// Write a fresh draft id derived from `now` and return it.
    pub async fn start_draft(&self, now: Timestamp) -> Result<String, StoreError> {
        let id = draft_id_for(now);
        self.store.set(KEY_COURSE_DRAFT_ID, &id).await?;
        tracing::info!(draft_id = %id, "Course draft started");
        Ok(id)
    }

    // -- modules --

    pub async fn load_modules(&self) -> Result<Option<CourseModulesDraft>, StoreError> {
        self.load_json(KEY_COURSE_MODULES).await
    }

    pub async fn save_modules(&self, draft: &CourseModulesDraft) -> Result<(), StoreError> {
        self.save_json(KEY_COURSE_MODULES, draft).await
    }

    /// Remove every draft key, e.g. after the course was published.
    pub async fn discard_draft(&self) -> Result<(), StoreError> {
        for key in ALL_KEYS {
            self.store.remove(key).await?;
        }
        tracing::info!("Course draft discarded");
        Ok(())
    }

    // -- helpers --

    async fn load_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        let Some(raw) = self.store.get(key).await? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                tracing::warn!(key, error = %e, "Stored draft is corrupt, ignoring it");
                Ok(None)
            }
        }
    }

    async fn save_json<T: Serialize + Sync>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let raw = serde_json::to_string(value).map_err(|source| StoreError::Serialization {
            key: key.to_string(),
            source,
        })?;
        self.store.set(key, &raw).await?;
        tracing::debug!(key, bytes = raw.len(), "Draft persisted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;
    use academy_core::course::CourseLevel;
    use chrono::TimeZone;

    fn repo() -> (Arc<MemoryStore>, DraftRepo) {
        let store = Arc::new(MemoryStore::new());
        (store.clone(), DraftRepo::new(store))
    }

    #[tokio::test]
    async fn metadata_round_trip() {
        let (_, repo) = repo();
        let mut draft = CourseMetadataDraft::default();
        draft.basic_info.title = "Rust for Analysts".into();
        draft.basic_info.level = Some(CourseLevel::Beginner);
        draft.pricing.price = Some(19.99);

        repo.save_metadata(&draft).await.unwrap();
        assert_eq!(repo.load_metadata().await.unwrap(), Some(draft));
    }

    #[tokio::test]
    async fn missing_values_load_as_none() {
        let (_, repo) = repo();
        assert_eq!(repo.load_metadata().await.unwrap(), None);
        assert_eq!(repo.load_modules().await.unwrap(), None);
        assert_eq!(repo.draft_id().await.unwrap(), None);
    }

    #[tokio::test]
    async fn corrupt_values_load_as_none() {
        let (store, repo) = repo();
        store.set(KEY_COURSE_METADATA, "{not json").await.unwrap();
        store.set(KEY_COURSE_MODULES, "\"oops\"").await.unwrap();

        assert_eq!(repo.load_metadata().await.unwrap(), None);
        assert_eq!(repo.load_modules().await.unwrap(), None);
    }

    #[tokio::test]
    async fn modules_are_stored_verbatim() {
        let (_, repo) = repo();
        let mut draft = CourseModulesDraft::starter();
        draft.add_module("Advanced");

        repo.save_modules(&draft).await.unwrap();
        assert_eq!(repo.load_modules().await.unwrap(), Some(draft));
    }

    #[tokio::test]
    async fn start_draft_uses_unix_millis() {
        let (_, repo) = repo();
        let now = chrono::Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();

        let id = repo.start_draft(now).await.unwrap();
        assert_eq!(id, "draft_1700000000123");
        assert_eq!(repo.draft_id().await.unwrap().as_deref(), Some(id.as_str()));
    }

    #[tokio::test]
    async fn blank_draft_id_counts_as_absent() {
        let (store, repo) = repo();
        store.set(KEY_COURSE_DRAFT_ID, "  ").await.unwrap();
        assert_eq!(repo.draft_id().await.unwrap(), None);
    }

    #[tokio::test]
    async fn discard_removes_every_key() {
        let (store, repo) = repo();
        repo.save_metadata(&CourseMetadataDraft::default()).await.unwrap();
        repo.start_draft(chrono::Utc::now()).await.unwrap();
        repo.save_modules(&CourseModulesDraft::starter()).await.unwrap();

        repo.discard_draft().await.unwrap();
        assert!(store.is_empty().await);
    }
}
