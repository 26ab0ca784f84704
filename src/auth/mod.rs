//! Authentication and authorization system
//!
//! Sessions are server-side rows identified by an opaque cookie token. Each
//! authenticated request carries a [`Subject`] whose permission set is loaded
//! once and then consulted by [`UserPolicy`].

pub mod policy;
pub mod rbac;
pub mod types;
pub mod user_management;


pub use policy::{ClassAbilities, InstanceAbilities, UserAction, UserPolicy};
pub use types::{AuthMethod, AuthenticatedSession, Subject};
pub use user_management::{NewUser, ProfileChanges, UserChanges, UserManager};

use crate::config::AuthConfig;
use crate::core::models::{User, UserSession};
use crate::storage::StorageLayer;
use crate::utils::crypto::{generate_session_token, verify_password};
use crate::utils::error::Result;
use crate::utils::truncate_string;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Main authentication system
#[derive(Debug, Clone)]
pub struct AuthSystem {
    /// Authentication configuration
    config: Arc<AuthConfig>,
    /// Storage layer for users and sessions
    storage: Arc<StorageLayer>,
    /// RBAC system
    rbac: Arc<rbac::RbacSystem>,
}

impl AuthSystem {
    /// Create the authentication system and seed default roles
    pub async fn new(config: &AuthConfig, storage: Arc<StorageLayer>) -> Result<Self> {
        info!("Initializing authentication system");

        let config = Arc::new(config.clone());
        let rbac = Arc::new(rbac::RbacSystem::new(&config.rbac, storage.clone()));
        rbac.seed_defaults().await?;

        info!("Authentication system initialized successfully");
        Ok(Self {
            config,
            storage,
            rbac,
        })
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    pub fn rbac(&self) -> &rbac::RbacSystem {
        &self.rbac
    }

    /// Verify credentials and open a session; `None` when they do not match
    pub async fn login(
        &self,
        email: &str,
        password: &str,
        ip_address: Option<String>,
        user_agent: Option<String>,
    ) -> Result<Option<AuthenticatedSession>> {
        debug!("Login attempt for {}", email);

        let Some(user) = self.storage.db().find_user_by_email(email).await? else {
            warn!("Login failed: unknown email");
            return Ok(None);
        };

        if !verify_password(password, &user.password_hash)? {
            warn!("Login failed: wrong password for user {}", user.id());
            return Ok(None);
        }

        let expires_at =
            chrono::Utc::now() + chrono::Duration::seconds(self.config.session_ttl as i64);
        let mut session = UserSession::new(generate_session_token(), user.id(), expires_at);
        session.ip_address = ip_address;
        session.user_agent = user_agent.map(|ua| truncate_string(&ua, 512));
        // A fresh session starts from the stored preference
        session.locale = user.locale.clone();

        self.storage.db().create_session(&session).await?;
        info!("User {} logged in", user.id());

        let subject = self.load_subject(user).await?;
        Ok(Some(AuthenticatedSession { session, subject }))
    }

    /// End a session
    pub async fn logout(&self, session_id: &str) -> Result<bool> {
        let ended = self.storage.db().deactivate_session(session_id).await?;
        if ended {
            info!("Session ended");
        }
        Ok(ended)
    }

    /// Resolve a session token to its session and subject
    ///
    /// Unknown, inactive and expired sessions yield `None`.
    pub async fn authenticate_session(
        &self,
        session_id: &str,
    ) -> Result<Option<AuthenticatedSession>> {
        let db = self.storage.db();

        let Some(session) = db.find_session(session_id).await? else {
            debug!("Unknown session token");
            return Ok(None);
        };

        if !session.is_valid() {
            if session.is_active {
                debug!("Session expired, deactivating");
                db.deactivate_session(session_id).await?;
            }
            return Ok(None);
        }

        let Some(user) = db.find_user_by_id(session.user_id).await? else {
            warn!("Session refers to missing user {}", session.user_id);
            return Ok(None);
        };

        db.touch_session(session_id).await?;

        let subject = self.load_subject(user).await?;
        Ok(Some(AuthenticatedSession { session, subject }))
    }

    /// Attach roles and the effective permission set to a user
    pub async fn load_subject(&self, user: User) -> Result<Subject> {
        let roles = self.rbac.user_roles(user.id()).await?;
        let permissions = self.rbac.effective_permissions(user.id()).await?;
        Ok(Subject::new(user, roles, permissions))
    }
}
