//! Course authoring wizard: phase 1 metadata steps, phase 2 curriculum
//! editor, and the indicators that present their state.

use serde::{Deserialize, Serialize};

use crate::types::Timestamp;

pub mod metadata;
pub mod modules;
pub mod progress;
pub mod steps;

pub use metadata::{MetadataWizard, StepNavigation};
pub use modules::ModulesEditor;
pub use steps::{MetadataStep, Phase};

/// Ephemeral wizard state. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardProgress {
    pub phase: Phase,
    /// Only set in phase 1.
    pub step: Option<MetadataStep>,
    pub is_dirty: bool,
    pub is_submitting: bool,
    pub last_saved_at: Option<Timestamp>,
}
