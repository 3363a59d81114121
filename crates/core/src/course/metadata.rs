//! Course metadata collected by the four steps of phase 1.
//!
//! Length and URL constraints are declared with `validator` derives on each
//! section; cross-field rules (pricing, objective counts) live in
//! [`crate::validation::metadata`].

use serde::{Deserialize, Serialize};
use validator::Validate;

// ---------------------------------------------------------------------------
// Course level
// ---------------------------------------------------------------------------

/// Target proficiency of a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CourseLevel {
    Beginner,
    Intermediate,
    Advanced,
    AllLevels,
}

impl CourseLevel {
    /// Human-readable label for the level.
    pub fn label(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
            Self::AllLevels => "All Levels",
        }
    }
}

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

/// Step 1: basic information.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct BasicInfo {
    #[validate(length(min = 5, max = 100, message = "Title must be between 5 and 100 characters"))]
    pub title: String,
    #[validate(length(max = 120, message = "Subtitle must be at most 120 characters"))]
    pub subtitle: String,
    #[validate(length(
        min = 20,
        max = 5000,
        message = "Description must be between 20 and 5000 characters"
    ))]
    pub description: String,
    #[validate(length(min = 1, max = 5, message = "Select between 1 and 5 categories"))]
    pub categories: Vec<String>,
    pub level: Option<CourseLevel>,
}

/// Step 2: media.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct Media {
    #[validate(url(message = "Thumbnail must be a valid URL"))]
    pub thumbnail_url: Option<String>,
    #[validate(url(message = "Promo video must be a valid URL"))]
    pub promo_video_url: Option<String>,
}

/// Step 3: pricing.
///
/// `price` and `discount_price` are ignored while `is_free` is set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pricing {
    pub is_free: bool,
    pub price: Option<f64>,
    pub discount_price: Option<f64>,
}

impl Pricing {
    /// The price a learner pays, taking the discount into account.
    pub fn effective_price(&self) -> Option<f64> {
        if self.is_free {
            return Some(0.0);
        }
        self.discount_price.or(self.price)
    }
}

/// Step 4: goals and audience.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct Goals {
    pub prerequisites: Vec<String>,
    pub requirements: Vec<String>,
    pub learning_objectives: Vec<String>,
    #[validate(length(min = 10, message = "Describe the target audience in at least 10 characters"))]
    pub target_audience: String,
}

// ---------------------------------------------------------------------------
// Draft
// ---------------------------------------------------------------------------

/// Everything phase 1 collects about a course.
///
/// Created empty on wizard entry and persisted verbatim under the
/// `course_metadata` key when the author continues to phase 2.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CourseMetadataDraft {
    pub basic_info: BasicInfo,
    pub media: Media,
    pub pricing: Pricing,
    pub goals: Goals,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_draft_deserializes_from_empty_object() {
        let draft: CourseMetadataDraft = serde_json::from_str("{}").unwrap();
        assert_eq!(draft, CourseMetadataDraft::default());
    }

    #[test]
    fn partial_sections_fill_defaults() {
        let draft: CourseMetadataDraft =
            serde_json::from_str(r#"{"basic_info":{"title":"Rust for Rustaceans"}}"#).unwrap();
        assert_eq!(draft.basic_info.title, "Rust for Rustaceans");
        assert!(draft.basic_info.categories.is_empty());
        assert!(!draft.pricing.is_free);
    }

    #[test]
    fn level_serializes_snake_case() {
        let json = serde_json::to_string(&CourseLevel::AllLevels).unwrap();
        assert_eq!(json, "\"all_levels\"");
    }

    #[test]
    fn effective_price_prefers_discount() {
        let pricing = Pricing {
            is_free: false,
            price: Some(49.99),
            discount_price: Some(19.99),
        };
        assert_eq!(pricing.effective_price(), Some(19.99));
    }

    #[test]
    fn effective_price_is_zero_when_free() {
        let pricing = Pricing {
            is_free: true,
            price: Some(49.99),
            discount_price: None,
        };
        assert_eq!(pricing.effective_price(), Some(0.0));
    }
}
