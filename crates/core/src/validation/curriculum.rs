//! Validators for the curriculum tree built in phase 2.
//!
//! Field paths are positional (`modules[0].lessons[1].items[2].quiz...`) so
//! the editor can highlight the exact entry.

use std::collections::HashSet;

use validator::ValidateUrl;

use super::report::{ensure, union, FieldErrors, Validation};
use crate::course::content::{
    is_supported_language, CodingContent, FileContent, QuizContent, ReadingContent, VideoContent,
};
use crate::course::{CourseModulesDraft, ItemContent, LessonDraft, LessonItem, ModuleDraft};

/// Minimum answers per quiz question.
pub const MIN_QUIZ_ANSWERS: usize = 2;

/// An absolute `http(s)` URL that parses.
fn is_http_url(s: &str) -> bool {
    let s = s.trim();
    (s.starts_with("https://") || s.starts_with("http://")) && s.validate_url()
}

pub fn validate_video(video: &VideoContent) -> Validation {
    union([
        ensure(
            is_http_url(&video.video_url),
            "video_url",
            "url",
            "Enter a valid video URL",
        ),
        ensure(
            video.duration_seconds.map_or(true, |d| d > 0),
            "duration_seconds",
            "positive",
            "Duration must be greater than zero",
        ),
    ])
}

pub fn validate_reading(reading: &ReadingContent) -> Validation {
    ensure(
        !reading.content.trim().is_empty(),
        "content",
        "required",
        "Reading content is required",
    )
}

pub fn validate_file(file: &FileContent) -> Validation {
    union([
        ensure(
            is_http_url(&file.file_url),
            "file_url",
            "url",
            "Upload a file or enter a valid file URL",
        ),
        ensure(
            !file.file_name.trim().is_empty(),
            "file_name",
            "required",
            "File name is required",
        ),
    ])
}

pub fn validate_coding(coding: &CodingContent) -> Validation {
    union([
        ensure(
            !coding.instructions.trim().is_empty(),
            "instructions",
            "required",
            "Instructions are required",
        ),
        ensure(
            is_supported_language(&coding.language),
            "language",
            "supported_language",
            "Select a supported language",
        ),
        ensure(
            coding.max_score >= 1,
            "max_score",
            "min_value",
            "Max score must be at least 1",
        ),
    ])
}

pub fn validate_quiz(quiz: &QuizContent) -> Validation {
    let mut errors = FieldErrors::new();
    if quiz.questions.is_empty() {
        errors.push("questions", "min_items", "Add at least one question");
    }
    if quiz.passing_score_percent > 100 {
        errors.push(
            "passing_score_percent",
            "max_value",
            "Passing score cannot exceed 100%",
        );
    }
    for (q, question) in quiz.questions.iter().enumerate() {
        let path = format!("questions[{q}]");
        if question.text.trim().is_empty() {
            errors.push(format!("{path}.text"), "required", "Question text is required");
        }
        if question.answers.len() < MIN_QUIZ_ANSWERS {
            errors.push(
                format!("{path}.answers"),
                "min_items",
                "Each question needs at least 2 answers",
            );
        } else if !question.answers.iter().any(|a| a.is_correct) {
            errors.push(
                format!("{path}.answers"),
                "correct_answer",
                "Mark at least one answer as correct",
            );
        }
        for (a, answer) in question.answers.iter().enumerate() {
            if answer.text.trim().is_empty() {
                errors.push(
                    format!("{path}.answers[{a}].text"),
                    "required",
                    "Answer text is required",
                );
            }
        }
    }
    errors.into_validation()
}

/// Dispatch to the validator for the item's type.
pub fn validate_item(item: &LessonItem) -> Validation {
    let (key, payload) = match &item.content {
        ItemContent::Video(v) => ("video", validate_video(v)),
        ItemContent::Reading(r) => ("reading", validate_reading(r)),
        ItemContent::File(f) => ("file", validate_file(f)),
        ItemContent::Coding(c) => ("coding", validate_coding(c)),
        ItemContent::Quiz(q) => ("quiz", validate_quiz(q)),
    };
    union([
        ensure(
            !item.title.trim().is_empty(),
            "title",
            "required",
            "Item title is required",
        ),
        payload.map_err(|e| e.prefixed(key)),
    ])
}

pub fn validate_lesson(lesson: &LessonDraft) -> Validation {
    let mut outcomes = vec![
        ensure(
            !lesson.title.trim().is_empty(),
            "title",
            "required",
            "Lesson title is required",
        ),
        ensure(
            !lesson.items.is_empty(),
            "items",
            "min_items",
            "Add at least one item to the lesson",
        ),
    ];
    outcomes.extend(
        lesson
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| validate_item(item).map_err(|e| e.prefixed(&format!("items[{i}]")))),
    );
    union(outcomes)
}

pub fn validate_module(module: &ModuleDraft) -> Validation {
    let mut outcomes = vec![
        ensure(
            !module.title.trim().is_empty(),
            "title",
            "required",
            "Module title is required",
        ),
        ensure(
            !module.lessons.is_empty(),
            "lessons",
            "min_items",
            "Add at least one lesson to the module",
        ),
    ];
    outcomes.extend(module.lessons.iter().enumerate().map(|(i, lesson)| {
        validate_lesson(lesson).map_err(|e| e.prefixed(&format!("lessons[{i}]")))
    }));
    union(outcomes)
}

/// Validate the entire module tree.
pub fn validate_modules(draft: &CourseModulesDraft) -> Validation {
    let mut outcomes = vec![ensure(
        !draft.modules.is_empty(),
        "modules",
        "min_items",
        "Add at least one module",
    )];
    outcomes.extend(draft.modules.iter().enumerate().map(|(i, module)| {
        validate_module(module).map_err(|e| e.prefixed(&format!("modules[{i}]")))
    }));
    outcomes.push(validate_unique_ids(draft));
    union(outcomes)
}

/// Module, lesson and item ids share one namespace. Every repeat after the
/// first occurrence is reported at its own position.
pub fn validate_unique_ids(draft: &CourseModulesDraft) -> Validation {
    let mut seen = HashSet::new();
    let mut errors = FieldErrors::new();
    let mut check = |id: &str, path: String| {
        if !seen.insert(id.to_string()) {
            errors.push(path, "duplicate_id", format!("Duplicate id {id}"));
        }
    };
    for (i, module) in draft.modules.iter().enumerate() {
        check(&module.id, format!("modules[{i}].id"));
        for (j, lesson) in module.lessons.iter().enumerate() {
            check(&lesson.id, format!("modules[{i}].lessons[{j}].id"));
            for (k, item) in lesson.items.iter().enumerate() {
                check(&item.id, format!("modules[{i}].lessons[{j}].items[{k}].id"));
            }
        }
    }
    errors.into_validation()
}
