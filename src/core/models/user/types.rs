//! Core user type

use crate::core::models::Metadata;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// User metadata
    #[serde(flatten)]
    pub metadata: Metadata,
    /// Display name
    pub name: String,
    /// Email address (unique)
    pub email: String,
    /// Argon2 password hash
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    /// Preferred display language, as stored
    pub locale: Option<String>,
}

impl User {
    /// Create a new user
    pub fn new(name: String, email: String, password_hash: String) -> Self {
        Self {
            metadata: Metadata::new(),
            name,
            email,
            password_hash,
            locale: None,
        }
    }

    pub fn id(&self) -> Uuid {
        self.metadata.id
    }
}
