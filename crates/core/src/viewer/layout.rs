//! Viewer container sizing by item type.

use serde::Serialize;

use crate::course::ItemType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewerWidth {
    Wide,
    Medium,
    Narrow,
}

impl ViewerWidth {
    pub fn max_width_class(self) -> &'static str {
        match self {
            Self::Wide => "max-w-7xl",
            Self::Medium => "max-w-4xl",
            Self::Narrow => "max-w-2xl",
        }
    }
}

/// Coding is widest, file narrowest, everything else (including unknown
/// types) medium.
pub fn viewer_width(item_type: &str) -> ViewerWidth {
    match ItemType::parse(item_type) {
        Some(ItemType::Coding) => ViewerWidth::Wide,
        Some(ItemType::Video | ItemType::Quiz | ItemType::Reading) => ViewerWidth::Medium,
        Some(ItemType::File) => ViewerWidth::Narrow,
        None => ViewerWidth::Medium,
    }
}
