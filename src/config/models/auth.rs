//! Authentication and role configuration

use super::*;
use crate::utils::is_valid_email;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Session and RBAC configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Cookie carrying the session token
    #[serde(default = "default_session_cookie")]
    pub session_cookie: String,
    /// Session lifetime in seconds
    #[serde(default = "default_session_ttl")]
    pub session_ttl: u64,
    /// Mark the session cookie `Secure`
    #[serde(default)]
    pub secure_cookies: bool,
    /// Role settings
    #[serde(default)]
    pub rbac: RbacConfig,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            session_cookie: default_session_cookie(),
            session_ttl: default_session_ttl(),
            secure_cookies: false,
            rbac: RbacConfig::default(),
        }
    }
}

impl AuthConfig {
    /// Validate auth configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.session_cookie.trim().is_empty() {
            return Err("Session cookie name cannot be empty".to_string());
        }

        if self.session_ttl < 60 {
            return Err("Session TTL must be at least 60 seconds".to_string());
        }

        self.rbac.validate()
    }
}

/// Role seeding configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RbacConfig {
    /// Role granted every user permission at seed time
    #[serde(default = "default_admin_role")]
    pub admin_role: String,
    /// Account created at boot and assigned the admin role
    #[serde(default)]
    pub seed_admin: Option<SeedAdminConfig>,
}

impl Default for RbacConfig {
    fn default() -> Self {
        Self {
            admin_role: default_admin_role(),
            seed_admin: None,
        }
    }
}

impl RbacConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.admin_role.trim().is_empty() {
            return Err("Admin role name cannot be empty".to_string());
        }

        if let Some(seed) = &self.seed_admin {
            seed.validate()?;
        }

        Ok(())
    }
}

/// Credentials of the seeded administrator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedAdminConfig {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl SeedAdminConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Seed admin name cannot be empty".to_string());
        }
        if !is_valid_email(&self.email) {
            return Err(format!("Seed admin email is invalid: {}", self.email));
        }
        if self.password.is_empty() {
            return Err("Seed admin password cannot be empty".to_string());
        }
        if self.password.len() < 8 {
            warn!("Seed admin password is shorter than 8 characters");
        }
        Ok(())
    }
}
