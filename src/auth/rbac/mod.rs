//! Role-Based Access Control (RBAC) system
//!
//! Roles and permissions live in the database. A user's effective permission
//! set is the union of the permissions of every assigned role plus the
//! permissions granted directly.

pub mod permissions;
mod system;
mod types;

// Re-export public types and structs
pub use system::RbacSystem;
pub use types::{Permission, PermissionSet, Role};
