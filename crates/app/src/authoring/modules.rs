//! Phase 2 service: gated entry, curriculum save and continue to review.

use std::sync::Arc;

use academy_core::course::CourseModulesDraft;
use academy_core::navigation::{ROUTE_COURSE_REVIEW, ROUTE_CREATE_COURSE};
use academy_core::types::Timestamp;
use academy_core::wizard::ModulesEditor;
use academy_store::keys::KEY_COURSE_MODULES;
use chrono::Utc;
use serde::Serialize;

use crate::context::AppContext;
use crate::error::AppError;
use crate::retry::spawn_persist;

/// Outcome of entering Phase 2.
#[derive(Debug)]
pub enum ModulesEntry {
    Ready(ModulesAuthoring),
    /// No Phase 1 draft exists; go back to it.
    Redirect { to: &'static str },
}

/// Returned when the curriculum passes validation and is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewTransition {
    pub draft_id: String,
    pub route: &'static str,
}

#[derive(Debug)]
pub struct ModulesAuthoring {
    ctx: Arc<AppContext>,
    draft_id: String,
    editor: ModulesEditor,
}

impl ModulesAuthoring {
    /// Enter Phase 2.
    ///
    /// Without a readable draft id the caller is redirected to Phase 1 and no editor
    /// is built. A persisted curriculum replaces the starter tree wholesale
    /// and becomes the dirty-tracking baseline.
    pub async fn enter(ctx: Arc<AppContext>) -> Result<ModulesEntry, AppError> {
        ctx.require_author().await?;

        let draft_id = match ctx.drafts.draft_id().await {
            Ok(Some(draft_id)) => draft_id,
            Ok(None) => {
                tracing::info!(to = ROUTE_CREATE_COURSE, "No course draft, redirecting to Phase 1");
                return Ok(ModulesEntry::Redirect {
                    to: ROUTE_CREATE_COURSE,
                });
            }
            Err(e) => {
                tracing::warn!(error = %e, to = ROUTE_CREATE_COURSE, "Failed to read draft id, redirecting to Phase 1");
                return Ok(ModulesEntry::Redirect {
                    to: ROUTE_CREATE_COURSE,
                });
            }
        };

        let editor = match ctx.drafts.load_modules().await {
            Ok(Some(snapshot)) => ModulesEditor::from_snapshot(snapshot),
            Ok(None) => ModulesEditor::new(),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read curriculum draft, starting fresh");
                ModulesEditor::new()
            }
        };
        tracing::info!(%draft_id, modules = editor.draft().modules.len(), "Curriculum editor ready");

        Ok(ModulesEntry::Ready(Self {
            ctx,
            draft_id,
            editor,
        }))
    }

    pub fn draft_id(&self) -> &str {
        &self.draft_id
    }

    pub fn editor(&self) -> &ModulesEditor {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut ModulesEditor {
        &mut self.editor
    }

    pub fn edit<R>(&mut self, f: impl FnOnce(&mut CourseModulesDraft) -> R) -> R {
        self.editor.edit(f)
    }

    /// Persist the tree verbatim. Only actionable while dirty; returns
    /// `Ok(None)` otherwise.
    pub async fn save_modules(&mut self) -> Result<Option<Timestamp>, AppError> {
        let Some(snapshot) = self.editor.begin_save() else {
            return Ok(None);
        };

        match self.persist(snapshot).await {
            Ok(()) => {
                let saved_at = Utc::now();
                let indicator =
                    chrono::Duration::milliseconds(self.ctx.config.saved_indicator.as_millis() as i64);
                self.editor.complete_save(saved_at, indicator);
                tracing::info!(draft_id = %self.draft_id, %saved_at, "Curriculum saved");
                Ok(Some(saved_at))
            }
            Err(e) => {
                self.editor.abort_save();
                Err(e)
            }
        }
    }

    /// Validate the whole tree, persist it and hand over to review. On
    /// validation failure nothing is persisted and the edits stay.
    pub async fn continue_to_review(&mut self) -> Result<ReviewTransition, AppError> {
        let snapshot = self.editor.begin_review()?;

        match self.persist(snapshot).await {
            Ok(()) => {
                self.editor.complete_review(Utc::now());
                Ok(ReviewTransition {
                    draft_id: self.draft_id.clone(),
                    route: ROUTE_COURSE_REVIEW,
                })
            }
            Err(e) => {
                self.editor.abort_review();
                Err(e)
            }
        }
    }

    async fn persist(&self, snapshot: CourseModulesDraft) -> Result<(), AppError> {
        let drafts = self.ctx.drafts.clone();
        spawn_persist(
            self.ctx.config.simulated_latency,
            self.ctx.config.save_retry,
            KEY_COURSE_MODULES,
            move || {
                let drafts = drafts.clone();
                let snapshot = snapshot.clone();
                async move { drafts.save_modules(&snapshot).await }
            },
        )
        .await
    }
}
