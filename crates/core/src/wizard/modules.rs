//! Phase 2 state machine: the curriculum editor with baseline dirty tracking.

use chrono::Duration;

use super::steps::Phase;
use super::WizardProgress;
use crate::course::CourseModulesDraft;
use crate::types::Timestamp;
use crate::validation::curriculum::validate_modules;
use crate::validation::FieldErrors;

#[derive(Debug, Clone)]
pub struct ModulesEditor {
    draft: CourseModulesDraft,
    /// Last persisted tree; the draft is dirty whenever it differs.
    baseline: CourseModulesDraft,
    /// Snapshot handed out by `begin_*`, becomes the baseline on success.
    pending: Option<CourseModulesDraft>,
    errors: FieldErrors,
    is_submitting: bool,
    last_saved_at: Option<Timestamp>,
    saved_indicator_until: Option<Timestamp>,
}

impl ModulesEditor {
    /// Start from the default tree. Nothing has been saved yet, so the
    /// baseline equals the starter tree.
    pub fn new() -> Self {
        Self::from_snapshot(CourseModulesDraft::starter())
    }

    /// Reset to a persisted snapshot, which also becomes the baseline.
    pub fn from_snapshot(snapshot: CourseModulesDraft) -> Self {
        Self {
            baseline: snapshot.clone(),
            draft: snapshot,
            pending: None,
            errors: FieldErrors::new(),
            is_submitting: false,
            last_saved_at: None,
            saved_indicator_until: None,
        }
    }

    pub fn draft(&self) -> &CourseModulesDraft {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    pub fn last_saved_at(&self) -> Option<Timestamp> {
        self.last_saved_at
    }

    pub fn is_dirty(&self) -> bool {
        self.draft != self.baseline
    }

    pub fn progress(&self) -> WizardProgress {
        WizardProgress {
            phase: Phase::Curriculum,
            step: None,
            is_dirty: self.is_dirty(),
            is_submitting: self.is_submitting,
            last_saved_at: self.last_saved_at,
        }
    }

    /// Apply an edit to the tree.
    pub fn edit<R>(&mut self, f: impl FnOnce(&mut CourseModulesDraft) -> R) -> R {
        f(&mut self.draft)
    }

    /// Whether the transient "saved" indicator is visible at `now`.
    pub fn is_saved_indicator_visible(&self, now: Timestamp) -> bool {
        self.saved_indicator_until.is_some_and(|until| now < until)
    }

    // -----------------------------------------------------------------------
    // Save
    // -----------------------------------------------------------------------

    /// "Save Modules" is only actionable while the tree differs from the
    /// last-saved baseline.
    pub fn can_save(&self) -> bool {
        self.is_dirty() && !self.is_submitting
    }

    pub fn begin_save(&mut self) -> Option<CourseModulesDraft> {
        if !self.can_save() {
            return None;
        }
        Some(self.start_submit())
    }

    /// Record a successful save: re-baseline and show the saved indicator
    /// for `indicator` from `saved_at`.
    pub fn complete_save(&mut self, saved_at: Timestamp, indicator: Duration) {
        self.finish_submit(saved_at);
        self.saved_indicator_until = Some(saved_at + indicator);
    }

    pub fn abort_save(&mut self) {
        self.pending = None;
        self.is_submitting = false;
    }

    // -----------------------------------------------------------------------
    // Continue to review
    // -----------------------------------------------------------------------

    /// Validate the whole tree; on success enter the submitting state and
    /// return the snapshot to persist. On failure the edits are untouched.
    pub fn begin_review(&mut self) -> Result<CourseModulesDraft, FieldErrors> {
        if self.is_submitting {
            return Err(FieldErrors::single(
                "modules",
                "in_flight",
                "A save is already in progress",
            ));
        }
        match validate_modules(&self.draft) {
            Ok(()) => {
                self.errors = FieldErrors::new();
                Ok(self.start_submit())
            }
            Err(errors) => {
                self.errors = errors.clone();
                Err(errors)
            }
        }
    }

    pub fn complete_review(&mut self, saved_at: Timestamp) {
        self.finish_submit(saved_at);
    }

    pub fn abort_review(&mut self) {
        self.abort_save();
    }

    fn start_submit(&mut self) -> CourseModulesDraft {
        let snapshot = self.draft.clone();
        self.pending = Some(snapshot.clone());
        self.is_submitting = true;
        snapshot
    }

    fn finish_submit(&mut self, saved_at: Timestamp) {
        if let Some(saved) = self.pending.take() {
            self.baseline = saved;
        }
        self.is_submitting = false;
        self.last_saved_at = Some(saved_at);
    }
}

impl Default for ModulesEditor {
    fn default() -> Self {
        Self::new()
    }
}
