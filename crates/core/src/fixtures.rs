//! Shared test fixtures for unit tests.

use crate::course::content::{
    CodingContent, FileContent, QuizAnswer, QuizContent, QuizQuestion, ReadingContent,
    VideoContent,
};
use crate::course::{
    BasicInfo, CourseLevel, CourseMetadataDraft, CourseModulesDraft, Goals, ItemContent, Media,
    Pricing,
};
use crate::syllabus::{
    CourseSyllabus, Material, SyllabusCourse, SyllabusLesson, SyllabusModule, SyllabusProgress,
};

pub fn valid_metadata() -> CourseMetadataDraft {
    CourseMetadataDraft {
        basic_info: BasicInfo {
            title: "Systems Programming".into(),
            subtitle: "From bytes to services".into(),
            description: "A hands-on course on writing reliable systems software.".into(),
            categories: vec!["programming".into()],
            level: Some(CourseLevel::Intermediate),
        },
        media: Media {
            thumbnail_url: Some("https://cdn.example.com/thumb.png".into()),
            promo_video_url: None,
        },
        pricing: Pricing {
            is_free: false,
            price: Some(29.99),
            discount_price: None,
        },
        goals: Goals {
            prerequisites: vec![],
            requirements: vec!["A laptop".into()],
            learning_objectives: vec![
                "Read a memory layout".into(),
                "Write a parser".into(),
                "Ship a service".into(),
            ],
            target_audience: "Working developers new to systems work".into(),
        },
    }
}

pub fn quiz() -> QuizContent {
    QuizContent {
        questions: vec![QuizQuestion {
            id: "q1".into(),
            text: "Which keyword declares an immutable binding?".into(),
            answers: vec![
                QuizAnswer {
                    id: "a1".into(),
                    text: "let".into(),
                    is_correct: true,
                },
                QuizAnswer {
                    id: "a2".into(),
                    text: "mut".into(),
                    is_correct: false,
                },
            ],
        }],
        ..QuizContent::default()
    }
}

pub fn valid_modules() -> CourseModulesDraft {
    let mut draft = CourseModulesDraft::starter();
    let lesson = &mut draft.modules[0].lessons[0];
    lesson.add_item(
        "Welcome",
        ItemContent::Video(VideoContent {
            video_url: "https://youtu.be/dQw4w9WgXcQ".into(),
            duration_seconds: Some(212),
        }),
    );
    lesson.add_item(
        "Ownership",
        ItemContent::Reading(ReadingContent {
            content: "# Ownership\nEvery value has one owner.".into(),
            estimated_minutes: Some(5),
        }),
    );
    lesson.add_item(
        "FizzBuzz",
        ItemContent::Coding(CodingContent {
            instructions: "Print FizzBuzz up to 100.".into(),
            language: "rust".into(),
            starter_code: "fn main() {}".into(),
            max_score: 10,
        }),
    );
    lesson.add_item("Check-in", ItemContent::Quiz(quiz()));
    lesson.add_item(
        "Slides",
        ItemContent::File(FileContent {
            file_url: "https://cdn.example.com/slides.pdf".into(),
            file_name: "slides.pdf".into(),
            file_size_bytes: Some(1024),
        }),
    );
    draft
}

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

pub fn video_material(id: &str, url: &str) -> Material {
    Material {
        video_data: Some(VideoContent {
            video_url: url.into(),
            duration_seconds: Some(60),
        }),
        ..material(id, "video")
    }
}

pub fn reading_material(id: &str) -> Material {
    Material {
        reading_data: Some(ReadingContent {
            content: "# Borrowing".into(),
            estimated_minutes: Some(3),
        }),
        ..material(id, "reading")
    }
}

pub fn coding_material(id: &str) -> Material {
    Material {
        coding_data: Some(CodingContent {
            instructions: "Reverse a string.".into(),
            language: "rust".into(),
            starter_code: String::new(),
            max_score: 10,
        }),
        ..material(id, "coding")
    }
}

pub fn quiz_material(id: &str) -> Material {
    Material {
        quiz_data: Some(quiz()),
        ..material(id, "quiz")
    }
}

pub fn file_material(id: &str) -> Material {
    Material {
        file_data: Some(FileContent {
            file_url: "https://cdn.example.com/cheatsheet.pdf".into(),
            file_name: "cheatsheet.pdf".into(),
            file_size_bytes: None,
        }),
        ..material(id, "file")
    }
}

/// A material whose payload is absent.
pub fn bare_material(id: &str, item_type: &str) -> Material {
    material(id, item_type)
}

/// Two modules, three lessons, materials `m1`..`m5`; `m1` is completed.
pub fn sample_syllabus() -> CourseSyllabus {
    let mut m1 = video_material("m1", "https://www.youtube.com/watch?v=dQw4w9WgXcQ");
    m1.is_completed = true;
    CourseSyllabus {
        course: SyllabusCourse {
            id: "c1".into(),
            title: "Systems Programming".into(),
            instructor_name: Some("Ada".into()),
        },
        modules: vec![
            SyllabusModule {
                id: "mod1".into(),
                title: "Foundations".into(),
                lessons: vec![
                    SyllabusLesson {
                        id: "l1".into(),
                        title: "Welcome".into(),
                        materials: vec![m1, reading_material("m2")],
                    },
                    SyllabusLesson {
                        id: "l2".into(),
                        title: "Practice".into(),
                        materials: vec![coding_material("m3")],
                    },
                ],
            },
            SyllabusModule {
                id: "mod2".into(),
                title: "Wrap-up".into(),
                lessons: vec![SyllabusLesson {
                    id: "l3".into(),
                    title: "Review".into(),
                    materials: vec![quiz_material("m4"), file_material("m5")],
                }],
            },
        ],
        progress: SyllabusProgress::from_counts(1, 5),
        active_material_id: None,
    }
}
