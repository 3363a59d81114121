//! `academy-core` -- pure domain logic for course authoring and the learner
//! workspace.
//!
//! Nothing in this crate performs I/O. Persistence lives in `academy-store`
//! and async orchestration in `academy-app`.

pub mod course;
pub mod error;
pub mod navigation;
pub mod roles;
pub mod syllabus;
pub mod types;
pub mod validation;
pub mod viewer;
pub mod wizard;

#[cfg(test)]
pub(crate) mod fixtures;
