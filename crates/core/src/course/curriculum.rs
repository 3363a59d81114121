//! Curriculum tree edited in phase 2: modules, lessons and typed items.
//!
//! Sort order is the position in each `Vec`. Every entry carries a unique id
//! so reordering never depends on titles or indices captured earlier.

use serde::{Deserialize, Serialize};

use super::content::{
    CodingContent, FileContent, ItemType, QuizContent, ReadingContent, VideoContent,
};
use crate::error::CoreError;
use crate::types::{new_item_id, ItemId};

// ---------------------------------------------------------------------------
// Items
// ---------------------------------------------------------------------------

/// Type-specific payload of a lesson item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "item_type", content = "data", rename_all = "lowercase")]
pub enum ItemContent {
    Video(VideoContent),
    Reading(ReadingContent),
    File(FileContent),
    Coding(CodingContent),
    Quiz(QuizContent),
}

impl ItemContent {
    /// An empty payload of the given type.
    pub fn empty(item_type: ItemType) -> Self {
        match item_type {
            ItemType::Video => Self::Video(VideoContent::default()),
            ItemType::Reading => Self::Reading(ReadingContent::default()),
            ItemType::File => Self::File(FileContent::default()),
            ItemType::Coding => Self::Coding(CodingContent::default()),
            ItemType::Quiz => Self::Quiz(QuizContent::default()),
        }
    }

    pub fn item_type(&self) -> ItemType {
        match self {
            Self::Video(_) => ItemType::Video,
            Self::Reading(_) => ItemType::Reading,
            Self::File(_) => ItemType::File,
            Self::Coding(_) => ItemType::Coding,
            Self::Quiz(_) => ItemType::Quiz,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LessonItem {
    pub id: ItemId,
    pub title: String,
    pub content: ItemContent,
}

impl LessonItem {
    pub fn new(title: impl Into<String>, content: ItemContent) -> Self {
        Self {
            id: new_item_id(),
            title: title.into(),
            content,
        }
    }
}

// ---------------------------------------------------------------------------
// Lessons and modules
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LessonDraft {
    pub id: ItemId,
    pub title: String,
    #[serde(default)]
    pub items: Vec<LessonItem>,
}

impl LessonDraft {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: new_item_id(),
            title: title.into(),
            items: Vec::new(),
        }
    }

    /// Append an item and return its id.
    pub fn add_item(&mut self, title: impl Into<String>, content: ItemContent) -> ItemId {
        let item = LessonItem::new(title, content);
        let id = item.id.clone();
        self.items.push(item);
        id
    }

    pub fn remove_item(&mut self, item_id: &str) -> Option<LessonItem> {
        let index = self.items.iter().position(|i| i.id == item_id)?;
        Some(self.items.remove(index))
    }

    pub fn move_item(&mut self, from: usize, to: usize) -> Result<(), CoreError> {
        move_entry(&mut self.items, from, to, "item")
    }

    pub fn item_mut(&mut self, item_id: &str) -> Option<&mut LessonItem> {
        self.items.iter_mut().find(|i| i.id == item_id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleDraft {
    pub id: ItemId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub lessons: Vec<LessonDraft>,
}

impl ModuleDraft {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: new_item_id(),
            title: title.into(),
            description: String::new(),
            lessons: Vec::new(),
        }
    }

    /// Append a lesson and return its id.
    pub fn add_lesson(&mut self, title: impl Into<String>) -> ItemId {
        let lesson = LessonDraft::new(title);
        let id = lesson.id.clone();
        self.lessons.push(lesson);
        id
    }

    pub fn remove_lesson(&mut self, lesson_id: &str) -> Option<LessonDraft> {
        let index = self.lessons.iter().position(|l| l.id == lesson_id)?;
        Some(self.lessons.remove(index))
    }

    pub fn move_lesson(&mut self, from: usize, to: usize) -> Result<(), CoreError> {
        move_entry(&mut self.lessons, from, to, "lesson")
    }

    pub fn lesson_mut(&mut self, lesson_id: &str) -> Option<&mut LessonDraft> {
        self.lessons.iter_mut().find(|l| l.id == lesson_id)
    }
}

// ---------------------------------------------------------------------------
// Draft
// ---------------------------------------------------------------------------

/// The full curriculum of a course draft, persisted under `course_modules`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CourseModulesDraft {
    #[serde(default)]
    pub modules: Vec<ModuleDraft>,
}

impl CourseModulesDraft {
    /// The tree a fresh phase 2 starts from: one module with one lesson.
    pub fn starter() -> Self {
        let mut module = ModuleDraft::new("Module 1");
        module.add_lesson("Lesson 1");
        Self {
            modules: vec![module],
        }
    }

    /// Append a module and return its id.
    pub fn add_module(&mut self, title: impl Into<String>) -> ItemId {
        let module = ModuleDraft::new(title);
        let id = module.id.clone();
        self.modules.push(module);
        id
    }

    pub fn remove_module(&mut self, module_id: &str) -> Option<ModuleDraft> {
        let index = self.modules.iter().position(|m| m.id == module_id)?;
        Some(self.modules.remove(index))
    }

    pub fn move_module(&mut self, from: usize, to: usize) -> Result<(), CoreError> {
        move_entry(&mut self.modules, from, to, "module")
    }

    pub fn module_mut(&mut self, module_id: &str) -> Option<&mut ModuleDraft> {
        self.modules.iter_mut().find(|m| m.id == module_id)
    }

    pub fn lesson_count(&self) -> usize {
        self.modules.iter().map(|m| m.lessons.len()).sum()
    }

    pub fn item_count(&self) -> usize {
        self.modules
            .iter()
            .flat_map(|m| &m.lessons)
            .map(|l| l.items.len())
            .sum()
    }
}

/// Move the entry at `from` so it ends up at index `to`.
fn move_entry<T>(
    entries: &mut Vec<T>,
    from: usize,
    to: usize,
    what: &str,
) -> Result<(), CoreError> {
    let len = entries.len();
    if from >= len || to >= len {
        return Err(CoreError::Validation(format!(
            "Cannot move {what} from position {from} to {to}: only {len} entries"
        )));
    }
    let entry = entries.remove(from);
    entries.insert(to, entry);
    Ok(())
}
