//! Routes and the `materialId` navigation selector.
//!
//! The learner workspace derives everything it shows from a single selector
//! held in the navigation state. Resume rewrites that selector in place; a
//! sidebar click pushes a new one.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

use crate::syllabus::{CourseSyllabus, Material};

/// Query parameter holding the selected material id.
pub const MATERIAL_PARAM: &str = "materialId";

// ---------------------------------------------------------------------------
// Routes
// ---------------------------------------------------------------------------

/// Phase 1 of the authoring wizard.
pub const ROUTE_CREATE_COURSE: &str = "/instructor/courses/create";
/// Phase 2 of the authoring wizard.
pub const ROUTE_COURSE_MODULES: &str = "/instructor/courses/create/modules";
/// Review screen reached after Phase 2.
pub const ROUTE_COURSE_REVIEW: &str = "/instructor/courses/create/review";

/// Workspace route for a course.
pub fn learn_route(course_id: &str) -> String {
    format!("/learn/{course_id}")
}

// ---------------------------------------------------------------------------
// Navigation state
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HistoryMode {
    /// Adds a history entry.
    Push,
    /// Rewrites the current entry.
    Replace,
}

/// Path plus query parameters of the current location.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationState {
    pub path: String,
    #[serde(default)]
    pub query: BTreeMap<String, String>,
}

impl NavigationState {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: BTreeMap::new(),
        }
    }

    /// Parse `path?key=value&...`, percent-decoding the query. Keys without
    /// `=` map to an empty value.
    pub fn parse(location: &str) -> Self {
        let (path, query) = location.split_once('?').unwrap_or((location, ""));
        let query = form_urlencoded::parse(query.as_bytes())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        Self {
            path: path.to_string(),
            query,
        }
    }

    /// Render back to `path?query`, percent-encoding the query and omitting
    /// `?` when there is no query.
    pub fn to_location(&self) -> String {
        if self.query.is_empty() {
            return self.path.clone();
        }
        let query = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(&self.query)
            .finish();
        format!("{}?{}", self.path, query)
    }

    pub fn param(&self, key: &str) -> Option<&str> {
        self.query.get(key).map(String::as_str)
    }

    /// The selected material, if any. An empty value counts as absent.
    pub fn material_id(&self) -> Option<&str> {
        self.param(MATERIAL_PARAM).filter(|id| !id.is_empty())
    }

    pub fn with_material(mut self, material_id: &str) -> Self {
        self.query
            .insert(MATERIAL_PARAM.to_string(), material_id.to_string());
        self
    }
}

/// A navigation the host should perform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationUpdate {
    pub state: NavigationState,
    pub mode: HistoryMode,
}

// ---------------------------------------------------------------------------
// Selector logic
// ---------------------------------------------------------------------------

/// On mount: when no material is selected and the syllabus has a valid
/// resume pointer, rewrite the current entry to select it. An explicit
/// selector is never overwritten.
pub fn resume_navigation(
    nav: &NavigationState,
    syllabus: &CourseSyllabus,
) -> Option<NavigationUpdate> {
    if nav.material_id().is_some() {
        return None;
    }
    let target = syllabus.resume_target()?;
    tracing::debug!(
        course_id = %syllabus.course.id,
        material_id = target,
        "Resuming at last active material"
    );
    Some(NavigationUpdate {
        state: nav.clone().with_material(target),
        mode: HistoryMode::Replace,
    })
}

/// Sidebar selection pushes a new history entry.
pub fn select_material(nav: &NavigationState, material_id: &str) -> NavigationUpdate {
    NavigationUpdate {
        state: nav.clone().with_material(material_id),
        mode: HistoryMode::Push,
    }
}

/// The material the selector points at, if it exists in the syllabus.
pub fn selected_material<'a>(
    nav: &NavigationState,
    syllabus: &'a CourseSyllabus,
) -> Option<&'a Material> {
    nav.material_id().and_then(|id| syllabus.find_material(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::sample_syllabus;

    // -- parsing --

    #[test]
    fn parse_and_render_location() {
        let nav = NavigationState::parse("/learn/c1?materialId=m2&tab=notes");
        assert_eq!(nav.path, "/learn/c1");
        assert_eq!(nav.material_id(), Some("m2"));
        assert_eq!(nav.param("tab"), Some("notes"));
        assert_eq!(nav.to_location(), "/learn/c1?materialId=m2&tab=notes");
    }

    #[test]
    fn parse_without_query() {
        let nav = NavigationState::parse("/learn/c1");
        assert!(nav.query.is_empty());
        assert_eq!(nav.material_id(), None);
        assert_eq!(nav.to_location(), "/learn/c1");
    }

    #[test]
    fn reserved_characters_survive_a_round_trip() {
        for id in ["intro&setup", "a=b", "part#2", "lesson 1", "ünïcode/100%"] {
            let location = NavigationState::new(learn_route("c1"))
                .with_material(id)
                .to_location();
            assert_eq!(NavigationState::parse(&location).material_id(), Some(id), "{location}");
        }
    }

    #[test]
    fn percent_encoded_selector_is_decoded() {
        let nav = NavigationState::parse("/learn/c1?materialId=lesson%201");
        assert_eq!(nav.material_id(), Some("lesson 1"));
        let nav = NavigationState::parse("/learn/c1?materialId=lesson+1");
        assert_eq!(nav.material_id(), Some("lesson 1"));
    }

    #[test]
    fn empty_selector_counts_as_absent() {
        let nav = NavigationState::parse("/learn/c1?materialId=");
        assert_eq!(nav.material_id(), None);
    }

    // -- resume --

    #[test]
    fn resume_replaces_missing_selector() {
        let mut syllabus = sample_syllabus();
        syllabus.active_material_id = Some("m3".into());
        let nav = NavigationState::new(learn_route("c1"));

        let update = resume_navigation(&nav, &syllabus).unwrap();
        assert_eq!(update.mode, HistoryMode::Replace);
        assert_eq!(update.state.material_id(), Some("m3"));
        assert_eq!(update.state.path, "/learn/c1");
    }

    #[test]
    fn explicit_selector_is_never_overwritten() {
        let mut syllabus = sample_syllabus();
        syllabus.active_material_id = Some("m3".into());
        let nav = NavigationState::new(learn_route("c1")).with_material("m5");
        assert_eq!(resume_navigation(&nav, &syllabus), None);
    }

    #[test]
    fn no_pointer_or_dangling_pointer_does_nothing() {
        let mut syllabus = sample_syllabus();
        let nav = NavigationState::new(learn_route("c1"));
        assert_eq!(resume_navigation(&nav, &syllabus), None);

        syllabus.active_material_id = Some("deleted".into());
        assert_eq!(resume_navigation(&nav, &syllabus), None);
    }

    // -- selection --

    #[test]
    fn sidebar_selection_pushes() {
        let nav = NavigationState::new(learn_route("c1")).with_material("m1");
        let update = select_material(&nav, "m4");
        assert_eq!(update.mode, HistoryMode::Push);
        assert_eq!(update.state.material_id(), Some("m4"));
    }

    #[test]
    fn selected_material_resolves_against_syllabus() {
        let syllabus = sample_syllabus();
        let nav = NavigationState::new(learn_route("c1")).with_material("m2");
        assert_eq!(selected_material(&nav, &syllabus).map(|m| m.id.as_str()), Some("m2"));

        let nav = nav.with_material("nope");
        assert!(selected_material(&nav, &syllabus).is_none());
    }
}
