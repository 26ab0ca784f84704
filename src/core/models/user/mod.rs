//! User models
//!
//! This module defines user and session data structures.

pub mod session;
pub mod types;
