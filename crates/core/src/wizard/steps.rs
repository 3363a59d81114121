//! Wizard phase and step definitions.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Phases
// ---------------------------------------------------------------------------

/// The two top-level stages of course authoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Details,
    Curriculum,
}

impl Phase {
    pub const ALL: [Phase; 2] = [Self::Details, Self::Curriculum];

    /// 1-based phase number.
    pub fn to_number(self) -> u8 {
        match self {
            Self::Details => 1,
            Self::Curriculum => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Details => "Course Details",
            Self::Curriculum => "Curriculum",
        }
    }
}

// ---------------------------------------------------------------------------
// Metadata steps
// ---------------------------------------------------------------------------

/// The four steps of phase 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetadataStep {
    BasicInfo,
    Media,
    Pricing,
    Goals,
}

/// Total number of steps in phase 1.
pub const TOTAL_STEPS: u8 = 4;

/// Minimum step number (1-based).
pub const MIN_STEP: u8 = 1;

/// Maximum step number (1-based).
pub const MAX_STEP: u8 = 4;

impl MetadataStep {
    pub const ALL: [MetadataStep; 4] = [Self::BasicInfo, Self::Media, Self::Pricing, Self::Goals];

    /// Convert a 1-based step number to a `MetadataStep`.
    pub fn from_number(n: u8) -> Result<Self, CoreError> {
        match n {
            1 => Ok(Self::BasicInfo),
            2 => Ok(Self::Media),
            3 => Ok(Self::Pricing),
            4 => Ok(Self::Goals),
            _ => Err(CoreError::Validation(format!(
                "Invalid step number {n}. Must be between {MIN_STEP} and {MAX_STEP}"
            ))),
        }
    }

    /// Convert to a 1-based step number.
    pub fn to_number(self) -> u8 {
        match self {
            Self::BasicInfo => 1,
            Self::Media => 2,
            Self::Pricing => 3,
            Self::Goals => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::BasicInfo => "Basic Info",
            Self::Media => "Media",
            Self::Pricing => "Pricing",
            Self::Goals => "Goals",
        }
    }

    /// Form fields owned by this step. Errors on these fields are replaced
    /// whenever the step is validated.
    pub fn fields(self) -> &'static [&'static str] {
        match self {
            Self::BasicInfo => &["title", "subtitle", "description", "categories", "level"],
            Self::Media => &["thumbnail_url", "promo_video_url"],
            Self::Pricing => &["is_free", "price", "discount_price"],
            Self::Goals => &[
                "prerequisites",
                "requirements",
                "learning_objectives",
                "target_audience",
            ],
        }
    }

    pub fn next(self) -> Option<Self> {
        Self::from_number(self.to_number() + 1).ok()
    }

    pub fn previous(self) -> Option<Self> {
        Self::from_number(self.to_number().checked_sub(1)?).ok()
    }

    pub fn is_last(self) -> bool {
        self.to_number() == MAX_STEP
    }
}
