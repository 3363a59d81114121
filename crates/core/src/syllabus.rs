//! Learner syllabus: Course -> Module[] -> Lesson[] -> Material[] plus
//! aggregate progress and the resume pointer.
//!
//! The tree is read-only for viewers. Completion is applied here only by a
//! syllabus provider after it accepted a completion request.

use serde::{Deserialize, Serialize};

use crate::course::content::{
    CodingContent, FileContent, ItemType, QuizContent, ReadingContent, VideoContent,
};
use crate::error::CoreError;
use crate::types::ItemId;

// ---------------------------------------------------------------------------
// Material
// ---------------------------------------------------------------------------

/// A single piece of learnable content.
///
/// `item_type` is kept as the raw wire string so unknown future types still
/// deserialize; [`crate::viewer::dispatch`] decides how to render it. Exactly
/// one payload is expected to be populated, matching `item_type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub id: ItemId,
    pub title: String,
    pub item_type: String,
    #[serde(default)]
    pub is_completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_data: Option<VideoContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reading_data: Option<ReadingContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coding_data: Option<CodingContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quiz_data: Option<QuizContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_data: Option<FileContent>,
}

impl Material {
    /// The parsed item type, `None` for unrecognized discriminators.
    pub fn kind(&self) -> Option<ItemType> {
        ItemType::parse(&self.item_type)
    }
}

// ---------------------------------------------------------------------------
// Tree
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyllabusCourse {
    pub id: ItemId,
    pub title: String,
    #[serde(default)]
    pub instructor_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyllabusLesson {
    pub id: ItemId,
    pub title: String,
    #[serde(default)]
    pub materials: Vec<Material>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyllabusModule {
    pub id: ItemId,
    pub title: String,
    #[serde(default)]
    pub lessons: Vec<SyllabusLesson>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyllabusProgress {
    pub percentage: u8,
    pub completed: usize,
    pub total: usize,
}

impl SyllabusProgress {
    pub fn from_counts(completed: usize, total: usize) -> Self {
        let percentage = if total == 0 {
            0
        } else {
            ((completed * 100 + total / 2) / total).min(100) as u8
        };
        Self {
            percentage,
            completed,
            total,
        }
    }
}

/// Position of a material inside the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaterialLocation {
    pub module_index: usize,
    pub lesson_index: usize,
    pub material_index: usize,
}

/// Response shape of the syllabus provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseSyllabus {
    pub course: SyllabusCourse,
    #[serde(default)]
    pub modules: Vec<SyllabusModule>,
    #[serde(default)]
    pub progress: SyllabusProgress,
    #[serde(default)]
    pub active_material_id: Option<ItemId>,
}

impl CourseSyllabus {
    /// All materials in syllabus order.
    pub fn materials(&self) -> impl Iterator<Item = &Material> {
        self.modules
            .iter()
            .flat_map(|m| &m.lessons)
            .flat_map(|l| &l.materials)
    }

    pub fn find_material(&self, id: &str) -> Option<&Material> {
        self.materials().find(|m| m.id == id)
    }

    pub fn locate(&self, id: &str) -> Option<MaterialLocation> {
        for (module_index, module) in self.modules.iter().enumerate() {
            for (lesson_index, lesson) in module.lessons.iter().enumerate() {
                if let Some(material_index) = lesson.materials.iter().position(|m| m.id == id) {
                    return Some(MaterialLocation {
                        module_index,
                        lesson_index,
                        material_index,
                    });
                }
            }
        }
        None
    }

    /// The resume pointer, if it references an existing material.
    ///
    /// A dangling pointer is logged and treated as absent.
    pub fn resume_target(&self) -> Option<&str> {
        let id = self.active_material_id.as_deref()?;
        if self.find_material(id).is_some() {
            Some(id)
        } else {
            tracing::warn!(
                course_id = %self.course.id,
                material_id = id,
                "Syllabus resume pointer references a missing material"
            );
            None
        }
    }

    /// Materials immediately before and after `id` in syllabus order.
    pub fn neighbors(&self, id: &str) -> (Option<&Material>, Option<&Material>) {
        let ordered: Vec<&Material> = self.materials().collect();
        match ordered.iter().position(|m| m.id == id) {
            Some(i) => (
                i.checked_sub(1).and_then(|p| ordered.get(p).copied()),
                ordered.get(i + 1).copied(),
            ),
            None => (None, None),
        }
    }

    /// Progress recomputed from the tree's completion flags.
    pub fn computed_progress(&self) -> SyllabusProgress {
        let total = self.materials().count();
        let completed = self.materials().filter(|m| m.is_completed).count();
        SyllabusProgress::from_counts(completed, total)
    }

    /// Mark a material completed, refresh progress and move the resume
    /// pointer to it. Completing an already completed material is a no-op.
    pub fn mark_completed(&mut self, id: &str) -> Result<(), CoreError> {
        let material = self
            .modules
            .iter_mut()
            .flat_map(|m| &mut m.lessons)
            .flat_map(|l| &mut l.materials)
            .find(|m| m.id == id)
            .ok_or_else(|| CoreError::NotFound {
                entity: "material",
                id: id.to_string(),
            })?;
        material.is_completed = true;
        self.active_material_id = Some(id.to_string());
        self.progress = self.computed_progress();
        Ok(())
    }
}
