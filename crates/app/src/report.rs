//! Summary of the drafts currently in storage.

use academy_core::validation::curriculum::validate_modules;
use academy_core::validation::metadata::validate_metadata;
use academy_store::keys::{KEY_COURSE_DRAFT_ID, KEY_COURSE_METADATA, KEY_COURSE_MODULES};
use academy_store::{DraftRepo, StoreError};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DraftReport {
    pub draft_id: Option<String>,
    pub metadata: Option<MetadataSummary>,
    pub curriculum: Option<CurriculumSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetadataSummary {
    pub title: String,
    pub is_valid: bool,
    pub invalid_fields: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurriculumSummary {
    pub modules: usize,
    pub lessons: usize,
    pub items: usize,
    pub is_valid: bool,
    pub invalid_fields: Vec<String>,
}

fn invalid_fields(errors: Option<academy_core::validation::FieldErrors>) -> Vec<String> {
    errors
        .map(|e| e.fields().into_iter().map(str::to_string).collect())
        .unwrap_or_default()
}

/// Log a failed read and treat the key as absent.
fn tolerate<T>(key: &str, result: Result<Option<T>, StoreError>) -> Option<T> {
    result.unwrap_or_else(|e| {
        tracing::warn!(key, error = %e, "Failed to read draft key, reporting it as absent");
        None
    })
}

/// Summarize every draft key. A key that cannot be read is reported as
/// absent rather than failing the whole report.
pub async fn draft_report(drafts: &DraftRepo) -> DraftReport {
    let draft_id = tolerate(KEY_COURSE_DRAFT_ID, drafts.draft_id().await);

    let metadata = tolerate(KEY_COURSE_METADATA, drafts.load_metadata().await).map(|draft| {
        let errors = validate_metadata(&draft).err();
        MetadataSummary {
            title: draft.basic_info.title.clone(),
            is_valid: errors.is_none(),
            invalid_fields: invalid_fields(errors),
        }
    });

    let curriculum = tolerate(KEY_COURSE_MODULES, drafts.load_modules().await).map(|draft| {
        let errors = validate_modules(&draft).err();
        CurriculumSummary {
            modules: draft.modules.len(),
            lessons: draft.lesson_count(),
            items: draft.item_count(),
            is_valid: errors.is_none(),
            invalid_fields: invalid_fields(errors),
        }
    });

    DraftReport {
        draft_id,
        metadata,
        curriculum,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use academy_core::course::{CourseMetadataDraft, CourseModulesDraft};
    use academy_store::{FileStore, MemoryStore};

    #[tokio::test]
    async fn empty_store_reports_nothing() {
        let repo = DraftRepo::new(Arc::new(MemoryStore::new()));
        let report = draft_report(&repo).await;
        assert_eq!(
            report,
            DraftReport {
                draft_id: None,
                metadata: None,
                curriculum: None,
            }
        );
    }

    #[tokio::test]
    async fn incomplete_drafts_list_invalid_fields() {
        let repo = DraftRepo::new(Arc::new(MemoryStore::new()));
        repo.save_metadata(&CourseMetadataDraft::default()).await.unwrap();
        repo.save_modules(&CourseModulesDraft::starter()).await.unwrap();

        let report = draft_report(&repo).await;
        let metadata = report.metadata.unwrap();
        assert!(!metadata.is_valid);
        assert!(metadata.invalid_fields.iter().any(|f| f == "title"));

        let curriculum = report.curriculum.unwrap();
        assert_eq!((curriculum.modules, curriculum.lessons, curriculum.items), (1, 1, 0));
        assert!(!curriculum.is_valid);
    }

    #[tokio::test]
    async fn unreadable_key_is_reported_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let repo = DraftRepo::new(Arc::new(FileStore::new(dir.path())));
        repo.save_metadata(&CourseMetadataDraft::default()).await.unwrap();
        std::fs::create_dir(dir.path().join("course_draft_id.json")).unwrap();

        let report = draft_report(&repo).await;
        assert_eq!(report.draft_id, None);
        assert!(report.metadata.is_some());
    }
}
