//! Learner workspace: syllabus, a single `materialId` selector, and the
//! viewer, sidebar and progress bar derived from it.

use std::collections::HashMap;
use std::sync::Arc;

use academy_core::error::CoreError;
use academy_core::navigation::{
    resume_navigation, select_material, selected_material, NavigationState, NavigationUpdate,
};
use academy_core::syllabus::{CourseSyllabus, Material, SyllabusProgress};
use academy_core::viewer::{
    activate, controls, dispatch, viewer_width, CompletionRequest, ControlOutcome,
    QuizSubmission, RenderedControl, Submission, ViewMode, ViewerState, ViewerWidth,
};
use async_trait::async_trait;
use serde::Serialize;
use tokio::sync::RwLock;

use crate::error::AppError;

// ---------------------------------------------------------------------------
// Syllabus provider port
// ---------------------------------------------------------------------------

#[async_trait]
pub trait SyllabusProvider: Send + Sync {
    async fn fetch_syllabus(&self, course_id: &str) -> Result<CourseSyllabus, AppError>;

    /// Apply a completion and return the updated syllabus.
    async fn mark_material_complete(
        &self,
        course_id: &str,
        request: &CompletionRequest,
    ) -> Result<CourseSyllabus, AppError>;
}

/// Provider over syllabi held in memory; backs tests and mock data.
#[derive(Debug, Default)]
pub struct InMemorySyllabusProvider {
    courses: RwLock<HashMap<String, CourseSyllabus>>,
}

impl InMemorySyllabusProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, syllabus: CourseSyllabus) {
        self.courses
            .write()
            .await
            .insert(syllabus.course.id.clone(), syllabus);
    }
}

#[async_trait]
impl SyllabusProvider for InMemorySyllabusProvider {
    async fn fetch_syllabus(&self, course_id: &str) -> Result<CourseSyllabus, AppError> {
        self.courses
            .read()
            .await
            .get(course_id)
            .cloned()
            .ok_or_else(|| not_found("course", course_id))
    }

    async fn mark_material_complete(
        &self,
        course_id: &str,
        request: &CompletionRequest,
    ) -> Result<CourseSyllabus, AppError> {
        let mut courses = self.courses.write().await;
        let syllabus = courses
            .get_mut(course_id)
            .ok_or_else(|| not_found("course", course_id))?;
        syllabus.mark_completed(&request.material_id)?;
        Ok(syllabus.clone())
    }
}

fn not_found(entity: &'static str, id: &str) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity,
        id: id.to_string(),
    })
}

// ---------------------------------------------------------------------------
// Sidebar
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SidebarEntry {
    pub id: String,
    pub title: String,
    pub item_type: String,
    pub is_completed: bool,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SidebarLesson {
    pub id: String,
    pub title: String,
    pub expanded: bool,
    pub entries: Vec<SidebarEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SidebarModule {
    pub id: String,
    pub title: String,
    pub expanded: bool,
    pub lessons: Vec<SidebarLesson>,
}

// ---------------------------------------------------------------------------
// Workspace
// ---------------------------------------------------------------------------

pub struct LearnerWorkspace {
    provider: Arc<dyn SyllabusProvider>,
    course_id: String,
    syllabus: CourseSyllabus,
    nav: NavigationState,
    mode: ViewMode,
}

impl std::fmt::Debug for LearnerWorkspace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LearnerWorkspace")
            .field("course_id", &self.course_id)
            .field("nav", &self.nav)
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}

impl LearnerWorkspace {
    /// Load the syllabus and apply resume.
    ///
    /// When the navigation state carries no selector and the syllabus has a
    /// valid resume pointer, the returned update rewrites the current
    /// history entry (`Replace`). An explicit selector is left alone.
    pub async fn mount(
        provider: Arc<dyn SyllabusProvider>,
        course_id: &str,
        nav: NavigationState,
        mode: ViewMode,
    ) -> Result<(Self, Option<NavigationUpdate>), AppError> {
        let syllabus = provider.fetch_syllabus(course_id).await?;
        let update = resume_navigation(&nav, &syllabus);
        let nav = match &update {
            Some(update) => update.state.clone(),
            None => nav,
        };
        tracing::info!(
            course_id,
            material_id = nav.material_id(),
            progress = syllabus.progress.percentage,
            "Workspace mounted"
        );
        let workspace = Self {
            provider,
            course_id: course_id.to_string(),
            syllabus,
            nav,
            mode,
        };
        Ok((workspace, update))
    }

    pub fn syllabus(&self) -> &CourseSyllabus {
        &self.syllabus
    }

    pub fn navigation(&self) -> &NavigationState {
        &self.nav
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    /// Sidebar click: push a new selector.
    pub fn select_material(&mut self, material_id: &str) -> Result<NavigationUpdate, AppError> {
        if self.syllabus.find_material(material_id).is_none() {
            return Err(not_found("material", material_id));
        }
        let update = select_material(&self.nav, material_id);
        self.nav = update.state.clone();
        Ok(update)
    }

    /// Host-driven navigation (back/forward) replaces the selector source.
    pub fn apply_navigation(&mut self, nav: NavigationState) {
        self.nav = nav;
    }

    pub fn active_material(&self) -> Option<&Material> {
        selected_material(&self.nav, &self.syllabus)
    }

    pub fn active_view(&self) -> Option<ViewerState<'_>> {
        self.active_material().map(dispatch)
    }

    pub fn controls(&self) -> Vec<RenderedControl> {
        self.active_material()
            .map(|m| controls(m, self.mode))
            .unwrap_or_default()
    }

    pub fn viewer_width(&self) -> ViewerWidth {
        self.active_material()
            .map(|m| viewer_width(&m.item_type))
            .unwrap_or(ViewerWidth::Medium)
    }

    pub fn progress(&self) -> SyllabusProgress {
        self.syllabus.progress
    }

    /// Previous and next material ids around the selection.
    pub fn neighbors(&self) -> (Option<&str>, Option<&str>) {
        let Some(id) = self.nav.material_id() else {
            return (None, None);
        };
        let (prev, next) = self.syllabus.neighbors(id);
        (prev.map(|m| m.id.as_str()), next.map(|m| m.id.as_str()))
    }

    pub fn sidebar(&self) -> Vec<SidebarModule> {
        let active = self.nav.material_id();
        let location = active.and_then(|id| self.syllabus.locate(id));

        self.syllabus
            .modules
            .iter()
            .enumerate()
            .map(|(mi, module)| SidebarModule {
                id: module.id.clone(),
                title: module.title.clone(),
                expanded: location.is_some_and(|l| l.module_index == mi),
                lessons: module
                    .lessons
                    .iter()
                    .enumerate()
                    .map(|(li, lesson)| SidebarLesson {
                        id: lesson.id.clone(),
                        title: lesson.title.clone(),
                        expanded: location
                            .is_some_and(|l| l.module_index == mi && l.lesson_index == li),
                        entries: lesson
                            .materials
                            .iter()
                            .map(|m| SidebarEntry {
                                id: m.id.clone(),
                                title: m.title.clone(),
                                item_type: m.item_type.clone(),
                                is_completed: m.is_completed,
                                is_active: active == Some(m.id.as_str()),
                            })
                            .collect(),
                    })
                    .collect(),
            })
            .collect()
    }

    // -- completion --

    /// Activate a control on the selected material. A completion request is
    /// forwarded to the provider and the returned syllabus replaces ours.
    pub async fn submit(&mut self, submission: Submission) -> Result<ControlOutcome, AppError> {
        let material = self
            .active_material()
            .ok_or_else(|| not_found("material", self.nav.material_id().unwrap_or_default()))?;

        let outcome = activate(material, self.mode, submission);
        if let ControlOutcome::Complete(request) = &outcome {
            let updated = self
                .provider
                .mark_material_complete(&self.course_id, request)
                .await?;
            tracing::info!(
                course_id = %self.course_id,
                material_id = %request.material_id,
                progress = updated.progress.percentage,
                "Material completed"
            );
            self.syllabus = updated;
        }
        Ok(outcome)
    }

    pub async fn mark_as_done(&mut self) -> Result<ControlOutcome, AppError> {
        self.submit(Submission::MarkAsDone).await
    }

    pub async fn submit_code(&mut self, source: String) -> Result<ControlOutcome, AppError> {
        self.submit(Submission::Code { source }).await
    }

    pub async fn submit_quiz(&mut self, answers: QuizSubmission) -> Result<ControlOutcome, AppError> {
        self.submit(Submission::Quiz(answers)).await
    }
}
