//! Role name constants and session state.
//!
//! Authentication itself happens elsewhere; this module only consumes the
//! resolved role.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::ItemId;

pub const ROLE_STUDENT: &str = "student";
pub const ROLE_INSTRUCTOR: &str = "instructor";
pub const ROLE_ADMIN: &str = "admin";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Student,
    Instructor,
    Admin,
}

impl Role {
    pub fn parse(name: &str) -> Result<Self, CoreError> {
        match name {
            ROLE_STUDENT => Ok(Self::Student),
            ROLE_INSTRUCTOR => Ok(Self::Instructor),
            ROLE_ADMIN => Ok(Self::Admin),
            other => Err(CoreError::Validation(format!("Unknown role: {other}"))),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Student => ROLE_STUDENT,
            Self::Instructor => ROLE_INSTRUCTOR,
            Self::Admin => ROLE_ADMIN,
        }
    }

    pub fn dashboard_path(self) -> &'static str {
        match self {
            Self::Student => "/student/dashboard",
            Self::Instructor => "/instructor/dashboard",
            Self::Admin => "/admin/dashboard",
        }
    }

    /// Instructors and admins may enter the authoring wizard.
    pub fn can_author(self) -> bool {
        matches!(self, Self::Instructor | Self::Admin)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    pub id: ItemId,
    pub name: String,
    pub role: Role,
}

/// `Checking` until the session provider answers, then `Authenticated` or
/// `Anonymous`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "user", rename_all = "snake_case")]
pub enum SessionState {
    #[default]
    Checking,
    Authenticated(UserIdentity),
    Anonymous,
}

impl SessionState {
    /// Apply the provider's answer. Only valid while checking.
    pub fn resolve(&mut self, user: Option<UserIdentity>) -> Result<(), CoreError> {
        if *self != Self::Checking {
            return Err(CoreError::InvalidTransition(
                "Session already resolved".to_string(),
            ));
        }
        *self = match user {
            Some(user) => Self::Authenticated(user),
            None => Self::Anonymous,
        };
        Ok(())
    }

    pub fn sign_out(&mut self) {
        *self = Self::Anonymous;
    }

    pub fn user(&self) -> Option<&UserIdentity> {
        match self {
            Self::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn role(&self) -> Option<Role> {
        self.user().map(|u| u.role)
    }

    /// Gate for the authoring wizard.
    pub fn require_author(&self) -> Result<&UserIdentity, CoreError> {
        match self.user() {
            Some(user) if user.role.can_author() => Ok(user),
            Some(user) => Err(CoreError::Forbidden(format!(
                "Role {} cannot author courses",
                user.role.as_str()
            ))),
            None => Err(CoreError::Forbidden("Not signed in".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn user(role: Role) -> UserIdentity {
        UserIdentity {
            id: "u1".into(),
            name: "Grace".into(),
            role,
        }
    }

    #[test]
    fn role_names_round_trip() {
        for role in [Role::Student, Role::Instructor, Role::Admin] {
            assert_eq!(Role::parse(role.as_str()).unwrap(), role);
        }
        assert!(Role::parse("owner").is_err());
    }

    #[test]
    fn dashboards_are_per_role() {
        assert_eq!(Role::Student.dashboard_path(), "/student/dashboard");
        assert_eq!(Role::Instructor.dashboard_path(), "/instructor/dashboard");
        assert_eq!(Role::Admin.dashboard_path(), "/admin/dashboard");
    }

    #[test]
    fn only_instructors_and_admins_author() {
        assert!(!Role::Student.can_author());
        assert!(Role::Instructor.can_author());
        assert!(Role::Admin.can_author());
    }

    // -- session --

    #[test]
    fn session_starts_checking() {
        assert_eq!(SessionState::default(), SessionState::Checking);
    }

    #[test]
    fn resolve_to_authenticated_or_anonymous() {
        let mut session = SessionState::default();
        session.resolve(Some(user(Role::Instructor))).unwrap();
        assert_eq!(session.role(), Some(Role::Instructor));

        let mut session = SessionState::default();
        session.resolve(None).unwrap();
        assert_eq!(session, SessionState::Anonymous);
    }

    #[test]
    fn resolve_twice_is_rejected() {
        let mut session = SessionState::default();
        session.resolve(None).unwrap();
        assert_matches!(
            session.resolve(Some(user(Role::Admin))),
            Err(CoreError::InvalidTransition(_))
        );
    }

    #[test]
    fn sign_out_returns_to_anonymous() {
        let mut session = SessionState::default();
        session.resolve(Some(user(Role::Student))).unwrap();
        session.sign_out();
        assert_eq!(session, SessionState::Anonymous);
        assert!(session.user().is_none());
    }

    #[test]
    fn require_author_gate() {
        let mut session = SessionState::default();
        assert_matches!(session.require_author(), Err(CoreError::Forbidden(_)));

        session.resolve(Some(user(Role::Student))).unwrap();
        assert_matches!(session.require_author(), Err(CoreError::Forbidden(_)));

        session.sign_out();
        let mut session = SessionState::default();
        session.resolve(Some(user(Role::Admin))).unwrap();
        assert!(session.require_author().is_ok());
    }
}
