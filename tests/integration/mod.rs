//! Integration tests for polyglot-admin
//!
//! These tests verify the interaction between multiple components
//! and test real system behavior without mocking.

pub mod config_tests;
pub mod database_tests;
pub mod http_tests;
pub mod locale_tests;
pub mod policy_tests;
