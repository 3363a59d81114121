//! Select the viewer for a material.
//!
//! Dispatch is total: every material maps to exactly one [`ViewerState`].
//! The payload guard runs before any payload field is read.

use super::embed::{resolve_video_url, VideoPlayback};
use crate::course::content::{
    CodingContent, FileContent, ItemType, QuizContent, ReadingContent, VideoContent,
};
use crate::syllabus::Material;

#[derive(Debug, Clone, PartialEq)]
pub struct VideoView<'a> {
    pub content: &'a VideoContent,
    pub playback: VideoPlayback,
}

/// What to render for a material.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewerState<'a> {
    Video(VideoView<'a>),
    Reading(&'a ReadingContent),
    Coding(&'a CodingContent),
    Quiz(&'a QuizContent),
    File(&'a FileContent),
    /// Known type without its matching payload.
    DataMissing { item_type: ItemType },
    /// Unrecognized `item_type`.
    Unsupported { item_type: &'a str },
}

/// Discriminant of [`ViewerState`], convenient for comparisons and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerKind {
    Video,
    Reading,
    Coding,
    Quiz,
    File,
    DataMissing,
    Unsupported,
}

impl ViewerState<'_> {
    pub fn kind(&self) -> ViewerKind {
        match self {
            Self::Video(_) => ViewerKind::Video,
            Self::Reading(_) => ViewerKind::Reading,
            Self::Coding(_) => ViewerKind::Coding,
            Self::Quiz(_) => ViewerKind::Quiz,
            Self::File(_) => ViewerKind::File,
            Self::DataMissing { .. } => ViewerKind::DataMissing,
            Self::Unsupported { .. } => ViewerKind::Unsupported,
        }
    }

    /// Terminal states render a message and expose no controls.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::DataMissing { .. } | Self::Unsupported { .. }
        )
    }
}

pub fn dispatch(material: &Material) -> ViewerState<'_> {
    let Some(item_type) = material.kind() else {
        return ViewerState::Unsupported {
            item_type: &material.item_type,
        };
    };

    let missing = ViewerState::DataMissing { item_type };
    match item_type {
        ItemType::Video => material.video_data.as_ref().map_or(missing, |content| {
            ViewerState::Video(VideoView {
                content,
                playback: resolve_video_url(&content.video_url),
            })
        }),
        ItemType::Reading => material
            .reading_data
            .as_ref()
            .map_or(missing, ViewerState::Reading),
        ItemType::Coding => material
            .coding_data
            .as_ref()
            .map_or(missing, ViewerState::Coding),
        ItemType::Quiz => material
            .quiz_data
            .as_ref()
            .map_or(missing, ViewerState::Quiz),
        ItemType::File => material
            .file_data
            .as_ref()
            .map_or(missing, ViewerState::File),
    }
}
