//! Shared application state, handed to services as `Arc<AppContext>`.

use std::sync::Arc;

use academy_core::roles::{Role, SessionState, UserIdentity};
use academy_store::{DraftRepo, DraftStore};
use tokio::sync::RwLock;

use crate::config::AppConfig;
use crate::error::AppError;

#[derive(Debug)]
pub struct AppContext {
    pub config: AppConfig,
    pub drafts: DraftRepo,
    session: RwLock<SessionState>,
}

impl AppContext {
    /// A context with the session still being checked.
    pub fn new(config: AppConfig, store: Arc<dyn DraftStore>) -> Self {
        Self {
            config,
            drafts: DraftRepo::new(store),
            session: RwLock::new(SessionState::Checking),
        }
    }

    pub async fn session(&self) -> SessionState {
        self.session.read().await.clone()
    }

    /// Apply the session provider's answer.
    pub async fn resolve_session(&self, user: Option<UserIdentity>) -> Result<(), AppError> {
        let mut session = self.session.write().await;
        session.resolve(user)?;
        tracing::info!(role = ?session.role(), "Session resolved");
        Ok(())
    }

    pub async fn sign_out(&self) {
        self.session.write().await.sign_out();
        tracing::info!("Signed out");
    }

    pub async fn role(&self) -> Option<Role> {
        self.session.read().await.role()
    }

    /// Fails with `Forbidden` unless an instructor or admin is signed in.
    pub async fn require_author(&self) -> Result<UserIdentity, AppError> {
        Ok(self.session.read().await.require_author()?.clone())
    }
}
