use academy_core::error::CoreError;
use academy_core::validation::FieldErrors;
use academy_store::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Store(#[from] StoreError),

    /// Blocks only the attempted transition; the form stays as it was.
    #[error("Validation failed: {0}")]
    Validation(FieldErrors),

    /// Recoverable: form contents and dirty state are kept.
    #[error("Saving {key} failed after {attempts} attempts: {source}")]
    SaveFailed {
        key: &'static str,
        attempts: u32,
        #[source]
        source: StoreError,
    },

    #[error("Syllabus provider error: {0}")]
    Provider(String),

    #[error("Background task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl AppError {
    /// Field errors carried by a validation failure.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

impl From<FieldErrors> for AppError {
    fn from(errors: FieldErrors) -> Self {
        Self::Validation(errors)
    }
}
