//! Session cookie handling and logout

use crate::config::AuthConfig;
use crate::server::middleware::session_id;
use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use crate::utils::error::Result;
use actix_web::cookie::{Cookie, SameSite, time::Duration};
use actix_web::{HttpRequest, HttpResponse, web};
use tracing::info;

/// Cookie carrying a freshly issued session token
pub fn session_cookie(config: &AuthConfig, token: &str) -> Cookie<'static> {
    Cookie::build(config.session_cookie.clone(), token.to_string())
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(config.secure_cookies)
        .max_age(Duration::seconds(config.session_ttl as i64))
        .finish()
}

/// Cookie that tells the browser to drop the session cookie
pub fn removal_cookie(config: &AuthConfig) -> Cookie<'static> {
    let mut cookie = Cookie::build(config.session_cookie.clone(), "")
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(config.secure_cookies)
        .finish();
    cookie.make_removal();
    cookie
}

/// User logout endpoint
pub async fn logout(state: web::Data<AppState>, req: HttpRequest) -> Result<HttpResponse> {
    if let Some(id) = session_id(&req) {
        state.auth.logout(&id).await?;
        info!("User logged out");
    }

    Ok(HttpResponse::Ok()
        .cookie(removal_cookie(state.config.auth()))
        .json(ApiResponse::success(())))
}
