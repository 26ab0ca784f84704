//! Authentication and authorization types

use super::rbac::PermissionSet;
use crate::core::models::{User, UserSession};
use serde::Serialize;
use uuid::Uuid;

/// An authenticated user together with the permissions resolved for this request
#[derive(Debug, Clone, Serialize)]
pub struct Subject {
    pub user: User,
    pub roles: Vec<String>,
    pub permissions: PermissionSet,
}

impl Subject {
    pub fn new(user: User, roles: Vec<String>, permissions: PermissionSet) -> Self {
        Self {
            user,
            roles,
            permissions,
        }
    }

    pub fn id(&self) -> Uuid {
        self.user.id()
    }

    /// Whether the subject holds `permission`
    pub fn can(&self, permission: &str) -> bool {
        self.permissions.contains(permission)
    }

    /// Stored display language
    pub fn stored_locale(&self) -> Option<&str> {
        self.user.locale.as_deref()
    }
}

/// Session plus subject, placed in request extensions by the auth middleware
#[derive(Debug, Clone)]
pub struct AuthenticatedSession {
    pub session: UserSession,
    pub subject: Subject,
}

/// How a request presented its session token
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthMethod {
    /// Token taken from the session cookie or `x-session-token` header
    Session(String),
    /// No authentication
    None,
}
