//! Content viewer: dispatch by item type, playback resolution, quiz scoring
//! and the completion policy.

pub mod completion;
pub mod dispatch;
pub mod embed;
pub mod layout;
pub mod quiz;

pub use completion::{
    activate, completion_trigger, controls, needs_manual_completion, CompletionEvidence,
    CompletionRequest, CompletionTrigger, ControlOutcome, ControlState, RenderedControl,
    Submission, ViewMode, ViewerControl,
};
pub use dispatch::{dispatch, VideoView, ViewerKind, ViewerState};
pub use embed::{resolve_video_url, VideoPlayback};
pub use layout::{viewer_width, ViewerWidth};
pub use quiz::{evaluate_quiz, QuizResult, QuizSubmission};
