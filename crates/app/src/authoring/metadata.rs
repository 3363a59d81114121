//! Phase 1 service: resume, save and finalize the metadata draft.

use std::sync::Arc;

use academy_core::course::CourseMetadataDraft;
use academy_core::navigation::ROUTE_COURSE_MODULES;
use academy_core::types::Timestamp;
use academy_core::wizard::MetadataWizard;
use academy_store::keys::{KEY_COURSE_DRAFT_ID, KEY_COURSE_METADATA};
use chrono::Utc;
use serde::Serialize;

use crate::context::AppContext;
use crate::error::AppError;
use crate::retry::spawn_persist;

/// Returned when Phase 1 is finalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhaseTransition {
    pub draft_id: String,
    pub route: &'static str,
}

#[derive(Debug)]
pub struct MetadataAuthoring {
    ctx: Arc<AppContext>,
    wizard: MetadataWizard,
}

impl MetadataAuthoring {
    /// Enter Phase 1. A previously persisted draft is resumed; a missing or
    /// corrupt one leaves the empty default in place.
    pub async fn open(ctx: Arc<AppContext>) -> Result<Self, AppError> {
        let author = ctx.require_author().await?;
        let wizard = match ctx.drafts.load_metadata().await {
            Ok(Some(draft)) => {
                tracing::info!(user_id = %author.id, "Resuming metadata draft");
                MetadataWizard::resume(draft)
            }
            Ok(None) => MetadataWizard::new(),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read metadata draft, starting empty");
                MetadataWizard::new()
            }
        };
        Ok(Self { ctx, wizard })
    }

    pub fn wizard(&self) -> &MetadataWizard {
        &self.wizard
    }

    pub fn wizard_mut(&mut self) -> &mut MetadataWizard {
        &mut self.wizard
    }

    /// Shorthand for `wizard_mut().edit(..)`.
    pub fn edit(&mut self, f: impl FnOnce(&mut CourseMetadataDraft)) {
        self.wizard.edit(f);
    }

    /// Persist the current draft without validation.
    ///
    /// Returns `Ok(None)` when there is nothing to save or a save is already
    /// in flight. On failure the form and its dirty flag are kept.
    pub async fn save_draft(&mut self) -> Result<Option<Timestamp>, AppError> {
        let Some(snapshot) = self.wizard.begin_save() else {
            return Ok(None);
        };

        let drafts = self.ctx.drafts.clone();
        let result = spawn_persist(
            self.ctx.config.simulated_latency,
            self.ctx.config.save_retry,
            KEY_COURSE_METADATA,
            move || {
                let drafts = drafts.clone();
                let snapshot = snapshot.clone();
                async move { drafts.save_metadata(&snapshot).await }
            },
        )
        .await;

        match result {
            Ok(()) => {
                let saved_at = Utc::now();
                self.wizard.complete_save(saved_at);
                tracing::info!(%saved_at, "Metadata draft saved");
                Ok(Some(saved_at))
            }
            Err(e) => {
                self.wizard.abort_save();
                Err(e)
            }
        }
    }

    /// Validate the current step and then the whole form. On success the
    /// metadata and a fresh draft id are persisted and the transition to
    /// Phase 2 is returned. On validation failure nothing is persisted.
    ///
    /// The metadata is written before the draft id. If the draft id write
    /// exhausts its retries the metadata stays stored, so reopening Phase 1
    /// resumes it and a second finalize only has to write the id.
    pub async fn finalize_and_continue(&mut self) -> Result<PhaseTransition, AppError> {
        let snapshot = self.wizard.begin_finalize()?;
        let config = &self.ctx.config;

        let drafts = self.ctx.drafts.clone();
        let saved = spawn_persist(
            config.simulated_latency,
            config.save_retry,
            KEY_COURSE_METADATA,
            move || {
                let drafts = drafts.clone();
                let snapshot = snapshot.clone();
                async move { drafts.save_metadata(&snapshot).await }
            },
        )
        .await;
        if let Err(e) = saved {
            self.wizard.abort_finalize();
            return Err(e);
        }

        let now = Utc::now();
        let drafts = self.ctx.drafts.clone();
        let draft_id = spawn_persist(
            std::time::Duration::ZERO,
            config.save_retry,
            KEY_COURSE_DRAFT_ID,
            move || {
                let drafts = drafts.clone();
                async move { drafts.start_draft(now).await }
            },
        )
        .await;

        match draft_id {
            Ok(draft_id) => {
                self.wizard.complete_finalize(now);
                Ok(PhaseTransition {
                    draft_id,
                    route: ROUTE_COURSE_MODULES,
                })
            }
            Err(e) => {
                self.wizard.abort_finalize();
                Err(e)
            }
        }
    }
}
