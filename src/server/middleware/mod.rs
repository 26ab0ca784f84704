//! HTTP middleware implementations
//!
//! This module provides the middleware stack wrapped around every request:
//! - Session authentication
//! - Locale resolution
//! - Request ID tracking
//! - Security headers

mod auth;
mod helpers;
mod locale;
mod request_id;
mod security;


// Re-export all middleware
pub use auth::{AuthMiddleware, AuthMiddlewareService};
pub use helpers::{
    SESSION_HEADER, client_ip, current_subject, extract_auth_method,
    is_public_route, locale_context, require_subject, session_id, set_locale_context, user_agent,
};
pub use locale::{LocaleMiddleware, LocaleMiddlewareService};
pub use request_id::{REQUEST_ID_HEADER, RequestIdMiddleware, RequestIdMiddlewareService};
pub use security::{SecurityHeadersMiddleware, SecurityHeadersMiddlewareService};
