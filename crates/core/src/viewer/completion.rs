//! Completion policy: which control completes which material type, and what
//! activating a control produces in live and preview mode.
//!
//! | item_type | trigger                              |
//! |-----------|--------------------------------------|
//! | coding    | "Submit Code" (result-bearing)       |
//! | quiz      | passing quiz evaluation              |
//! | video     | "Mark as Done"                       |
//! | reading   | "Mark as Done"                       |
//! | file      | none, download only                  |
//!
//! Viewers never mutate the syllabus. Activation yields a
//! [`CompletionRequest`] which the workspace forwards to the syllabus
//! provider. Preview mode never yields one.

use serde::{Deserialize, Serialize};

use super::dispatch::{dispatch, ViewerState};
use super::quiz::{evaluate_quiz, QuizResult, QuizSubmission};
use crate::course::ItemType;
use crate::syllabus::Material;
use crate::types::ItemId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    Live,
    /// Instructor reviewing unpublished content; completion is inert.
    Preview,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletionTrigger {
    SubmitCode,
    QuizPassed,
    MarkAsDone,
    None,
}

pub fn completion_trigger(item_type: ItemType) -> CompletionTrigger {
    match item_type {
        ItemType::Coding => CompletionTrigger::SubmitCode,
        ItemType::Quiz => CompletionTrigger::QuizPassed,
        ItemType::Video | ItemType::Reading => CompletionTrigger::MarkAsDone,
        ItemType::File => CompletionTrigger::None,
    }
}

/// Reading, file and video materials that are not yet completed.
pub fn needs_manual_completion(material: &Material) -> bool {
    matches!(
        material.kind(),
        Some(ItemType::Reading | ItemType::File | ItemType::Video)
    ) && !material.is_completed
}

// ---------------------------------------------------------------------------
// Controls
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewerControl {
    MarkAsDone,
    SubmitCode,
    SubmitQuiz,
    /// Substituted for quiz completion in preview mode.
    BackToEditor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlState {
    Enabled,
    Disabled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RenderedControl {
    pub control: ViewerControl,
    pub state: ControlState,
}

/// Controls rendered for a material. Terminal viewer states get none.
pub fn controls(material: &Material, mode: ViewMode) -> Vec<RenderedControl> {
    let state = match mode {
        ViewMode::Live => ControlState::Enabled,
        ViewMode::Preview => ControlState::Disabled,
    };
    let control = |control| RenderedControl { control, state };

    match dispatch(material) {
        ViewerState::Video(_) | ViewerState::Reading(_) => {
            if needs_manual_completion(material) {
                vec![control(ViewerControl::MarkAsDone)]
            } else {
                Vec::new()
            }
        }
        ViewerState::Coding(_) => vec![control(ViewerControl::SubmitCode)],
        ViewerState::Quiz(_) => match mode {
            ViewMode::Live => vec![control(ViewerControl::SubmitQuiz)],
            ViewMode::Preview => vec![
                control(ViewerControl::SubmitQuiz),
                RenderedControl {
                    control: ViewerControl::BackToEditor,
                    state: ControlState::Enabled,
                },
            ],
        },
        ViewerState::File(_) | ViewerState::DataMissing { .. } | ViewerState::Unsupported { .. } => {
            Vec::new()
        }
    }
}

// ---------------------------------------------------------------------------
// Activation
// ---------------------------------------------------------------------------

/// Input supplied when a control is activated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Submission {
    MarkAsDone,
    Code { source: String },
    Quiz(QuizSubmission),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CompletionEvidence {
    Manual,
    Code { language: String, source: String },
    Quiz(QuizResult),
}

/// Request to mark a material completed, handled by the syllabus provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub material_id: ItemId,
    pub evidence: CompletionEvidence,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlOutcome {
    Complete(CompletionRequest),
    /// Quiz evaluated but not passed; no completion.
    QuizFailed(QuizResult),
    /// Nothing happens: preview mode, no matching control, or already done.
    Inert,
}

/// Activate the control matching `submission` on `material`.
pub fn activate(material: &Material, mode: ViewMode, submission: Submission) -> ControlOutcome {
    if mode == ViewMode::Preview {
        tracing::debug!(material_id = %material.id, "Preview mode, completion suppressed");
        return ControlOutcome::Inert;
    }

    let request = |evidence| {
        ControlOutcome::Complete(CompletionRequest {
            material_id: material.id.clone(),
            evidence,
        })
    };

    match (dispatch(material), submission) {
        (ViewerState::Video(_) | ViewerState::Reading(_), Submission::MarkAsDone)
            if needs_manual_completion(material) =>
        {
            request(CompletionEvidence::Manual)
        }
        (ViewerState::Coding(coding), Submission::Code { source }) => {
            request(CompletionEvidence::Code {
                language: coding.language.clone(),
                source,
            })
        }
        (ViewerState::Quiz(quiz), Submission::Quiz(answers)) => {
            let result = evaluate_quiz(quiz, &answers);
            if result.passed {
                request(CompletionEvidence::Quiz(result))
            } else {
                ControlOutcome::QuizFailed(result)
            }
        }
        _ => ControlOutcome::Inert,
    }
}
