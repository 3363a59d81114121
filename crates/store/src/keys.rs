//! Well-known storage keys.

/// Phase 1 metadata snapshot.
pub const KEY_COURSE_METADATA: &str = "course_metadata";

/// Draft id written when Phase 1 is finalized; gates Phase 2.
pub const KEY_COURSE_DRAFT_ID: &str = "course_draft_id";

/// Phase 2 curriculum snapshot.
pub const KEY_COURSE_MODULES: &str = "course_modules";

pub const ALL_KEYS: [&str; 3] = [KEY_COURSE_METADATA, KEY_COURSE_DRAFT_ID, KEY_COURSE_MODULES];
