//! Error handling for the admin service
//!
//! This module defines all error types used throughout the service.

mod helpers;
mod response;
mod types;

pub use response::{ErrorDetail, ErrorResponse};
pub use types::{AdminError, FieldErrors, Result};
