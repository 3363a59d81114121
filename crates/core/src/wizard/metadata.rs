//! Phase 1 state machine: four metadata steps gated by validation.
//!
//! The wizard is synchronous and does no I/O. Saving is split into
//! `begin_*` / `complete_*` / `abort_*` so the async layer can hold the
//! snapshot while the write is in flight.

use serde::{Deserialize, Serialize};

use super::steps::{MetadataStep, Phase};
use super::WizardProgress;
use crate::course::CourseMetadataDraft;
use crate::error::CoreError;
use crate::types::Timestamp;
use crate::validation::metadata::{validate_metadata, validate_metadata_step};
use crate::validation::FieldErrors;

/// Result of a navigation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum StepNavigation {
    /// The current step changed.
    Moved {
        from: MetadataStep,
        to: MetadataStep,
        scroll_to_top: bool,
    },
    /// Validation of the current step failed; errors are now displayed.
    Blocked,
    /// The target is more than one step ahead.
    Rejected { target: MetadataStep },
    /// Nothing to do (already on the target, or at a boundary).
    Unchanged,
}

#[derive(Debug, Clone)]
pub struct MetadataWizard {
    draft: CourseMetadataDraft,
    current_step: MetadataStep,
    errors: FieldErrors,
    is_dirty: bool,
    is_submitting: bool,
    last_saved_at: Option<Timestamp>,
}

impl Default for MetadataWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl MetadataWizard {
    /// A fresh wizard on step 1 with an empty draft.
    pub fn new() -> Self {
        Self {
            draft: CourseMetadataDraft::default(),
            current_step: MetadataStep::BasicInfo,
            errors: FieldErrors::new(),
            is_dirty: false,
            is_submitting: false,
            last_saved_at: None,
        }
    }

    /// Resume editing a previously persisted draft.
    pub fn resume(draft: CourseMetadataDraft) -> Self {
        Self {
            draft,
            ..Self::new()
        }
    }

    pub fn draft(&self) -> &CourseMetadataDraft {
        &self.draft
    }

    pub fn current_step(&self) -> MetadataStep {
        self.current_step
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn is_dirty(&self) -> bool {
        self.is_dirty
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    pub fn last_saved_at(&self) -> Option<Timestamp> {
        self.last_saved_at
    }

    pub fn progress(&self) -> WizardProgress {
        WizardProgress {
            phase: Phase::Details,
            step: Some(self.current_step),
            is_dirty: self.is_dirty,
            is_submitting: self.is_submitting,
            last_saved_at: self.last_saved_at,
        }
    }

    /// Apply a field change and mark the draft as having unsaved changes.
    pub fn edit(&mut self, f: impl FnOnce(&mut CourseMetadataDraft)) {
        f(&mut self.draft);
        self.is_dirty = true;
    }

    // -----------------------------------------------------------------------
    // Validation and navigation
    // -----------------------------------------------------------------------

    /// Validate only the fields owned by `step`, replacing their displayed
    /// errors with the result.
    pub fn validate_step(&mut self, step: MetadataStep) -> bool {
        let owned = step.fields();
        self.errors
            .remove_where(|field| owned.iter().any(|owned| *owned == field));
        match validate_metadata_step(step, &self.draft) {
            Ok(()) => true,
            Err(errors) => {
                self.errors.extend(errors);
                false
            }
        }
    }

    /// Advance one step if the current step validates.
    pub fn go_next(&mut self) -> StepNavigation {
        if !self.validate_step(self.current_step) {
            return StepNavigation::Blocked;
        }
        match self.current_step.next() {
            Some(to) => self.move_to(to, true),
            None => StepNavigation::Unchanged,
        }
    }

    /// Go back one step. Never validates.
    pub fn go_previous(&mut self) -> StepNavigation {
        match self.current_step.previous() {
            Some(to) => self.move_to(to, false),
            None => StepNavigation::Unchanged,
        }
    }

    /// Jump to a 1-based step number from the step indicator.
    ///
    /// Earlier steps are always reachable. The immediate next step is
    /// reachable when the current step validates. Anything further ahead is
    /// rejected.
    pub fn jump_to_step(&mut self, target: u8) -> Result<StepNavigation, CoreError> {
        let target = MetadataStep::from_number(target)?;
        let current = self.current_step;

        let outcome = if target < current {
            self.move_to(target, false)
        } else if target == current {
            StepNavigation::Unchanged
        } else if Some(target) == current.next() {
            if self.validate_step(current) {
                self.move_to(target, false)
            } else {
                StepNavigation::Blocked
            }
        } else {
            StepNavigation::Rejected { target }
        };
        Ok(outcome)
    }

    fn move_to(&mut self, to: MetadataStep, scroll_to_top: bool) -> StepNavigation {
        let from = self.current_step;
        self.current_step = to;
        StepNavigation::Moved {
            from,
            to,
            scroll_to_top,
        }
    }

    // -----------------------------------------------------------------------
    // Draft save
    // -----------------------------------------------------------------------

    /// Saving is only actionable with unsaved changes and no save in flight.
    pub fn can_save(&self) -> bool {
        self.is_dirty && !self.is_submitting
    }

    /// Start a draft save, returning the snapshot to persist.
    pub fn begin_save(&mut self) -> Option<CourseMetadataDraft> {
        if !self.can_save() {
            return None;
        }
        self.is_submitting = true;
        Some(self.draft.clone())
    }

    pub fn complete_save(&mut self, saved_at: Timestamp) {
        self.is_submitting = false;
        self.is_dirty = false;
        self.last_saved_at = Some(saved_at);
    }

    /// The write failed; form contents and the dirty flag are kept.
    pub fn abort_save(&mut self) {
        self.is_submitting = false;
    }

    // -----------------------------------------------------------------------
    // Finalize
    // -----------------------------------------------------------------------

    /// Validate the current step, then the whole form.
    ///
    /// On success the wizard enters the submitting state and returns the
    /// snapshot to persist. On failure all violations are displayed and
    /// nothing changes otherwise.
    pub fn begin_finalize(&mut self) -> Result<CourseMetadataDraft, FieldErrors> {
        if self.is_submitting {
            return Err(FieldErrors::single(
                "form",
                "in_flight",
                "A save is already in progress",
            ));
        }
        if !self.validate_step(self.current_step) {
            return Err(self.errors.clone());
        }
        if let Err(errors) = validate_metadata(&self.draft) {
            self.errors = errors.clone();
            return Err(errors);
        }
        self.errors = FieldErrors::new();
        self.is_submitting = true;
        Ok(self.draft.clone())
    }

    pub fn complete_finalize(&mut self, saved_at: Timestamp) {
        self.complete_save(saved_at);
    }

    pub fn abort_finalize(&mut self) {
        self.abort_save();
    }
}
