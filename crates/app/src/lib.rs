//! `academy-app` -- async orchestration of course authoring and the learner
//! workspace on top of `academy-core` and `academy-store`.

pub mod authoring;
pub mod config;
pub mod context;
pub mod error;
pub mod report;
pub mod retry;
pub mod workspace;

pub use config::AppConfig;
pub use context::AppContext;
pub use error::AppError;
