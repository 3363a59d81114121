//! Typed lesson content payloads.

use serde::{Deserialize, Serialize};

use crate::types::ItemId;

// ---------------------------------------------------------------------------
// Item type
// ---------------------------------------------------------------------------

/// The kinds of content a lesson can contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Video,
    Reading,
    Coding,
    Quiz,
    File,
}

impl ItemType {
    /// Every known item type, in display order.
    pub const ALL: [ItemType; 5] = [
        Self::Video,
        Self::Reading,
        Self::Coding,
        Self::Quiz,
        Self::File,
    ];

    /// Parse a wire discriminator. Unknown strings yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "video" => Some(Self::Video),
            "reading" => Some(Self::Reading),
            "coding" => Some(Self::Coding),
            "quiz" => Some(Self::Quiz),
            "file" => Some(Self::File),
            _ => None,
        }
    }

    /// Wire discriminator.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Video => "video",
            Self::Reading => "reading",
            Self::Coding => "coding",
            Self::Quiz => "quiz",
            Self::File => "file",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Video => "Video",
            Self::Reading => "Reading",
            Self::Coding => "Coding Exercise",
            Self::Quiz => "Quiz",
            Self::File => "File",
        }
    }
}

// ---------------------------------------------------------------------------
// Payloads
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoContent {
    pub video_url: String,
    pub duration_seconds: Option<u32>,
}

/// Markdown reading material.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadingContent {
    pub content: String,
    pub estimated_minutes: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileContent {
    pub file_url: String,
    pub file_name: String,
    pub file_size_bytes: Option<u64>,
}

/// Languages the coding runner accepts.
pub const SUPPORTED_LANGUAGES: &[&str] = &[
    "python",
    "javascript",
    "typescript",
    "java",
    "c",
    "cpp",
    "csharp",
    "go",
    "rust",
    "ruby",
    "php",
    "sql",
];

/// Returns `true` if the coding runner accepts `language`.
pub fn is_supported_language(language: &str) -> bool {
    SUPPORTED_LANGUAGES.contains(&language)
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodingContent {
    pub instructions: String,
    pub language: String,
    pub starter_code: String,
    pub max_score: u32,
}

/// Default percentage of points required to pass a quiz.
pub const DEFAULT_PASSING_SCORE_PERCENT: u8 = 70;

fn default_passing_score() -> u8 {
    DEFAULT_PASSING_SCORE_PERCENT
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizContent {
    #[serde(default)]
    pub questions: Vec<QuizQuestion>,
    #[serde(default = "default_passing_score")]
    pub passing_score_percent: u8,
}

impl Default for QuizContent {
    fn default() -> Self {
        Self {
            questions: Vec::new(),
            passing_score_percent: DEFAULT_PASSING_SCORE_PERCENT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub id: ItemId,
    pub text: String,
    #[serde(default)]
    pub answers: Vec<QuizAnswer>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizAnswer {
    pub id: ItemId,
    pub text: String,
    #[serde(default)]
    pub is_correct: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trips_every_type() {
        for item_type in ItemType::ALL {
            assert_eq!(ItemType::parse(item_type.as_str()), Some(item_type));
        }
    }

    #[test]
    fn parse_rejects_unknown() {
        assert_eq!(ItemType::parse("podcast"), None);
        assert_eq!(ItemType::parse("Video"), None);
        assert_eq!(ItemType::parse(""), None);
    }

    #[test]
    fn quiz_defaults_passing_score() {
        let quiz: QuizContent = serde_json::from_str(r#"{"questions":[]}"#).unwrap();
        assert_eq!(quiz.passing_score_percent, DEFAULT_PASSING_SCORE_PERCENT);
    }

    #[test]
    fn supported_languages() {
        assert!(is_supported_language("rust"));
        assert!(is_supported_language("python"));
        assert!(!is_supported_language("cobol"));
    }
}
