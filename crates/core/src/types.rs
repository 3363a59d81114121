/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Identifier of a module, lesson, item or material.
///
/// Curriculum items get a random v4 UUID on creation; syllabus ids come from
/// the provider and are opaque strings.
pub type ItemId = String;

/// Generate a fresh identifier for a curriculum entry.
pub fn new_item_id() -> ItemId {
    uuid::Uuid::new_v4().to_string()
}
