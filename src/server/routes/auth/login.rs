//! User login endpoint

use super::models::{LoginRequest, LoginResponse};
use super::session::session_cookie;
use crate::locale::{LocaleResolver, t};
use crate::server::middleware::{client_ip, locale_context, user_agent};
use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use crate::utils::error::{AdminError, Result};
use actix_web::{HttpRequest, HttpResponse, web};
use tracing::info;

/// User login endpoint
///
/// Opens a session and sets the session cookie. Unknown emails and wrong
/// passwords get the same answer.
pub async fn login(
    state: web::Data<AppState>,
    req: HttpRequest,
    request: web::Json<LoginRequest>,
) -> Result<HttpResponse> {
    let locale = locale_context(&req).locale;

    let Some(authenticated) = state
        .auth
        .login(
            request.email.trim(),
            &request.password,
            client_ip(&req),
            user_agent(&req),
        )
        .await?
    else {
        return Err(AdminError::auth(t(locale, "auth.failed")));
    };

    info!("User logged in: {}", authenticated.subject.id());

    let auth_config = state.config.auth();
    let cookie = session_cookie(auth_config, &authenticated.session.id);
    let context = LocaleResolver::resolve_for_request(
        authenticated.session.locale.as_deref(),
        authenticated.subject.stored_locale(),
    );

    let response = LoginResponse {
        user: authenticated.subject.user,
        locale: context.locale.code().to_string(),
        expires_at: authenticated.session.expires_at,
    };

    Ok(HttpResponse::Ok()
        .cookie(cookie)
        .json(ApiResponse::success(response)))
}
