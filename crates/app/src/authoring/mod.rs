//! Async authoring services wrapping the synchronous wizards with
//! persistence, simulated latency and retry.

pub mod metadata;
pub mod modules;

pub use metadata::{MetadataAuthoring, PhaseTransition};
pub use modules::{ModulesAuthoring, ModulesEntry, ReviewTransition};
