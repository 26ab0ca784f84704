//! Helper functions for middleware and handlers

use crate::auth::{AuthMethod, AuthenticatedSession, Subject};
use crate::locale::{LocaleContext, t};
use crate::utils::error::{AdminError, Result};
use actix_web::http::header::HeaderMap;
use actix_web::{HttpMessage, HttpRequest};

/// Header accepted in place of the session cookie
pub const SESSION_HEADER: &str = "x-session-token";

/// Extract the session token from the `x-session-token` header or the session cookie
pub fn extract_auth_method(headers: &HeaderMap, cookie_name: &str) -> AuthMethod {
    if let Some(token) = headers
        .get(SESSION_HEADER)
        .and_then(|h| h.to_str().ok())
        .filter(|t| !t.is_empty())
    {
        return AuthMethod::Session(token.to_string());
    }

    for cookie_header in headers.get_all("cookie") {
        let Ok(cookie_str) = cookie_header.to_str() else {
            continue;
        };
        for cookie in cookie_str.split(';') {
            if let Some((name, value)) = cookie.trim().split_once('=') {
                if name == cookie_name && !value.is_empty() {
                    return AuthMethod::Session(value.to_string());
                }
            }
        }
    }

    AuthMethod::None
}

/// Check if a route is public (doesn't require authentication)
pub fn is_public_route(path: &str) -> bool {
    const PUBLIC_ROUTES: &[&str] = &["/", "/health", "/auth/login"];

    let trimmed = path.trim_end_matches('/');
    let normalized = if trimmed.is_empty() { "/" } else { trimmed };
    PUBLIC_ROUTES.contains(&normalized)
}

pub fn current_subject(req: &HttpRequest) -> Option<Subject> {
    req.extensions()
        .get::<AuthenticatedSession>()
        .map(|auth| auth.subject.clone())
}

/// The current subject, or an authentication error
pub fn require_subject(req: &HttpRequest) -> Result<Subject> {
    current_subject(req)
        .ok_or_else(|| AdminError::auth(t(locale_context(req).locale, "auth.unauthenticated")))
}

pub fn session_id(req: &HttpRequest) -> Option<String> {
    req.extensions()
        .get::<AuthenticatedSession>()
        .map(|auth| auth.session.id.clone())
}

/// Locale in effect for this request
pub fn locale_context(req: &HttpRequest) -> LocaleContext {
    req.extensions()
        .get::<LocaleContext>()
        .copied()
        .unwrap_or_default()
}

/// Replace the locale for the rest of this request
pub fn set_locale_context(req: &HttpRequest, context: LocaleContext) {
    req.extensions_mut().insert(context);
}

pub fn client_ip(req: &HttpRequest) -> Option<String> {
    req.connection_info()
        .realip_remote_addr()
        .map(|addr| addr.to_string())
}

pub fn user_agent(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("user-agent")
        .and_then(|h| h.to_str().ok())
        .map(|ua| ua.to_string())
}
