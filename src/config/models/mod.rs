//! Configuration data models
//!
//! This module defines all configuration structures used throughout the service.

#![allow(missing_docs)]

pub mod app;
pub mod auth;
pub mod server;
pub mod storage;

// Re-export all configuration types
pub use app::*;
pub use auth::*;
pub use server::*;
pub use storage::*;

/// Default values for configuration
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    8000
}

/// Default timeout in seconds
pub fn default_timeout() -> u64 {
    30
}

pub fn default_database_url() -> String {
    "sqlite://admin.db?mode=rwc".to_string()
}

pub fn default_max_connections() -> u32 {
    10
}

pub fn default_connection_timeout() -> u64 {
    5
}

/// Name of the cookie carrying the session token
pub fn default_session_cookie() -> String {
    "session".to_string()
}

/// Session lifetime in seconds
pub fn default_session_ttl() -> u64 {
    2 * 60 * 60 // 2 hours
}

pub fn default_admin_role() -> String {
    "admin".to_string()
}

pub fn default_true() -> bool {
    true
}
