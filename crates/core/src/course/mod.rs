//! Course draft data model.
//!
//! Phase 1 of the authoring wizard produces a [`CourseMetadataDraft`], phase 2
//! a [`CourseModulesDraft`]. The typed content payloads in [`content`] are
//! shared between the curriculum editor and the learner-facing syllabus.

pub mod content;
pub mod curriculum;
pub mod metadata;

pub use content::ItemType;
pub use curriculum::{CourseModulesDraft, ItemContent, LessonDraft, LessonItem, ModuleDraft};
pub use metadata::{BasicInfo, CourseLevel, CourseMetadataDraft, Goals, Media, Pricing};
