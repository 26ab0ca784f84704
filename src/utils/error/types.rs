//! Error types for the admin service

use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Result type alias for the admin service
pub type Result<T> = std::result::Result<T, AdminError>;

/// Main error type for the admin service
#[derive(Error, Debug)]
pub enum AdminError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Database errors
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Authentication errors (no or invalid credentials)
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Authorization errors (authenticated, but the policy denied the action)
    #[error("Authorization error: {0}")]
    Authorization(String),

    /// Field validation errors
    #[error("Validation error: {0}")]
    Validation(FieldErrors),

    /// Not found errors
    #[error("Not found: {0}")]
    NotFound(String),

    /// Conflict errors
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Bad request errors
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Crypto errors
    #[error("Crypto error: {0}")]
    Crypto(String),

    /// Session errors
    #[error("Session error: {0}")]
    Session(String),

    /// Internal server errors
    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Validation messages keyed by field name
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message against a field
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Turn the collected messages into an error, or `Ok(())` when there are none
    pub fn into_result(self) -> Result<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(AdminError::Validation(self))
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self
            .0
            .values()
            .flat_map(|messages| messages.iter().map(String::as_str))
            .collect();
        f.write_str(&messages.join(" "))
    }
}
