//! User session management

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Server-side session identified by the session cookie
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSession {
    /// Opaque session token
    #[serde(skip_serializing)]
    pub id: String,
    /// Owning user
    pub user_id: Uuid,
    /// Locale slot written by language changes
    pub locale: Option<String>,
    /// IP address
    pub ip_address: Option<String>,
    /// User agent
    pub user_agent: Option<String>,
    /// Expires at
    pub expires_at: chrono::DateTime<chrono::Utc>,
    /// Created at
    pub created_at: chrono::DateTime<chrono::Utc>,
    /// Last activity
    pub last_activity: chrono::DateTime<chrono::Utc>,
    /// Cleared on logout
    pub is_active: bool,
}

impl UserSession {
    /// Create a new session
    pub fn new(id: String, user_id: Uuid, expires_at: chrono::DateTime<chrono::Utc>) -> Self {
        let now = chrono::Utc::now();
        Self {
            id,
            user_id,
            locale: None,
            ip_address: None,
            user_agent: None,
            expires_at,
            created_at: now,
            last_activity: now,
            is_active: true,
        }
    }

    /// Check if session is expired
    pub fn is_expired(&self) -> bool {
        chrono::Utc::now() > self.expires_at
    }

    /// Active and not expired
    pub fn is_valid(&self) -> bool {
        self.is_active && !self.is_expired()
    }

    /// Update last activity
    pub fn update_activity(&mut self) {
        self.last_activity = chrono::Utc::now();
    }
}
