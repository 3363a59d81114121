#![allow(dead_code)]

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use academy_app::{AppConfig, AppContext};
use academy_core::course::content::{
    CodingContent, FileContent, QuizAnswer, QuizContent, QuizQuestion, ReadingContent,
    VideoContent,
};
use academy_core::course::{
    BasicInfo, CourseLevel, CourseMetadataDraft, CourseModulesDraft, Goals, ItemContent, Media,
    Pricing,
};
use academy_core::roles::{Role, UserIdentity};
use academy_core::syllabus::{
    CourseSyllabus, Material, SyllabusCourse, SyllabusLesson, SyllabusModule, SyllabusProgress,
};
use academy_store::{DraftStore, MemoryStore, StoreError};
use async_trait::async_trait;

// ---------------------------------------------------------------------------
// Context
// ---------------------------------------------------------------------------

/// Context over `store` with an instructor signed in and no delays.
pub async fn instructor_context(store: Arc<dyn DraftStore>) -> Arc<AppContext> {
    let ctx = AppContext::new(AppConfig::immediate(), store);
    ctx.resolve_session(Some(UserIdentity {
        id: "u-instructor".into(),
        name: "Ines".into(),
        role: Role::Instructor,
    }))
    .await
    .unwrap();
    Arc::new(ctx)
}

pub async fn memory_context() -> (Arc<MemoryStore>, Arc<AppContext>) {
    let store = Arc::new(MemoryStore::new());
    let ctx = instructor_context(store.clone()).await;
    (store, ctx)
}

/// A store whose first `failures` writes fail, optionally only for one key.
pub struct FlakyStore {
    inner: MemoryStore,
    only_key: Option<&'static str>,
    failures: AtomicU32,
    pub writes: AtomicU32,
}

impl FlakyStore {
    pub fn failing(failures: u32) -> Self {
        Self {
            inner: MemoryStore::new(),
            only_key: None,
            failures: AtomicU32::new(failures),
            writes: AtomicU32::new(0),
        }
    }

    pub fn failing_on(key: &'static str, failures: u32) -> Self {
        Self {
            only_key: Some(key),
            ..Self::failing(failures)
        }
    }
}

#[async_trait]
impl DraftStore for FlakyStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        let targeted = self.only_key.map_or(true, |only| only == key);
        let remaining = self.failures.load(Ordering::SeqCst);
        if targeted && remaining > 0 {
            self.failures.store(remaining - 1, Ordering::SeqCst);
            return Err(StoreError::Io {
                key: key.to_string(),
                source: std::io::Error::other("disk full"),
            });
        }
        self.inner.set(key, value).await
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.inner.remove(key).await
    }

    async fn clear(&self) -> Result<(), StoreError> {
        self.inner.clear().await
    }
}

// ---------------------------------------------------------------------------
// Drafts
// ---------------------------------------------------------------------------

pub fn valid_metadata() -> CourseMetadataDraft {
    CourseMetadataDraft {
        basic_info: BasicInfo {
            title: "Async Rust in Practice".into(),
            subtitle: "Tasks, channels and backpressure".into(),
            description: "Build and debug real async services with tokio.".into(),
            categories: vec!["programming".into(), "backend".into()],
            level: Some(CourseLevel::Advanced),
        },
        media: Media {
            thumbnail_url: Some("https://cdn.example.com/async.png".into()),
            promo_video_url: Some("https://youtu.be/dQw4w9WgXcQ".into()),
        },
        pricing: Pricing {
            is_free: false,
            price: Some(49.0),
            discount_price: Some(29.0),
        },
        goals: Goals {
            prerequisites: vec!["Basic Rust".into()],
            requirements: vec![],
            learning_objectives: vec![
                "Spawn and join tasks".into(),
                "Use channels".into(),
                "Apply backpressure".into(),
            ],
            target_audience: "Rust developers moving to services".into(),
        },
    }
}

pub fn quiz() -> QuizContent {
    QuizContent {
        questions: vec![QuizQuestion {
            id: "q1".into(),
            text: "Which macro starts a runtime?".into(),
            answers: vec![
                QuizAnswer {
                    id: "a1".into(),
                    text: "#[tokio::main]".into(),
                    is_correct: true,
                },
                QuizAnswer {
                    id: "a2".into(),
                    text: "#[derive(Debug)]".into(),
                    is_correct: false,
                },
            ],
        }],
        ..QuizContent::default()
    }
}

/// Starter tree with one reading item, which passes validation.
pub fn valid_modules() -> CourseModulesDraft {
    let mut draft = CourseModulesDraft::starter();
    draft.modules[0].lessons[0].add_item(
        "Why async",
        ItemContent::Reading(ReadingContent {
            content: "Futures are lazy.".into(),
            estimated_minutes: Some(4),
        }),
    );
    draft
}

// ---------------------------------------------------------------------------
// Syllabus
// ---------------------------------------------------------------------------

fn material(id: &str, item_type: &str) -> Material {
    Material {
        id: id.into(),
        title: format!("Material {id}"),
        item_type: item_type.into(),
        is_completed: false,
        video_data: None,
        reading_data: None,
        coding_data: None,
        quiz_data: None,
        file_data: None,
    }
}

/// Course `c1`: `m1` video (completed), `m2` reading, `m3` coding, `m4` quiz,
/// `m5` file. No resume pointer.
pub fn syllabus() -> CourseSyllabus {
    let m1 = Material {
        is_completed: true,
        video_data: Some(VideoContent {
            video_url: "https://vimeo.com/76979871".into(),
            duration_seconds: Some(90),
        }),
        ..material("m1", "video")
    };
    let m2 = Material {
        reading_data: Some(ReadingContent {
            content: "# Pinning".into(),
            estimated_minutes: None,
        }),
        ..material("m2", "reading")
    };
    let m3 = Material {
        coding_data: Some(CodingContent {
            instructions: "Implement a bounded channel.".into(),
            language: "rust".into(),
            starter_code: String::new(),
            max_score: 100,
        }),
        ..material("m3", "coding")
    };
    let m4 = Material {
        quiz_data: Some(quiz()),
        ..material("m4", "quiz")
    };
    let m5 = Material {
        file_data: Some(FileContent {
            file_url: "https://cdn.example.com/notes.pdf".into(),
            file_name: "notes.pdf".into(),
            file_size_bytes: Some(2048),
        }),
        ..material("m5", "file")
    };

    CourseSyllabus {
        course: SyllabusCourse {
            id: "c1".into(),
            title: "Async Rust in Practice".into(),
            instructor_name: Some("Ines".into()),
        },
        modules: vec![
            SyllabusModule {
                id: "mod1".into(),
                title: "Basics".into(),
                lessons: vec![
                    SyllabusLesson {
                        id: "l1".into(),
                        title: "Intro".into(),
                        materials: vec![m1, m2],
                    },
                    SyllabusLesson {
                        id: "l2".into(),
                        title: "Lab".into(),
                        materials: vec![m3],
                    },
                ],
            },
            SyllabusModule {
                id: "mod2".into(),
                title: "Wrap-up".into(),
                lessons: vec![SyllabusLesson {
                    id: "l3".into(),
                    title: "Check".into(),
                    materials: vec![m4, m5],
                }],
            },
        ],
        progress: SyllabusProgress::from_counts(1, 5),
        active_material_id: None,
    }
}
