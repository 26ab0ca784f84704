//! Self-service profile endpoints
//!
//! These need authentication only. A subject changing their own account goes
//! through here rather than the `update_user` permission.

use crate::auth::ProfileChanges;
use crate::locale::t;
use crate::server::middleware::{locale_context, require_subject};
use crate::server::page::Page;
use crate::server::routes::ApiResponse;
use crate::server::routes::auth::removal_cookie;
use crate::server::state::AppState;
use crate::utils::error::Result;
use actix_web::{HttpRequest, HttpResponse, web};
use serde::Deserialize;
use serde_json::json;
use tracing::info;

/// Configure profile routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/profile")
            .route(web::get().to(edit))
            .route(web::patch().to(update))
            .route(web::delete().to(destroy)),
    );
}

/// Confirmation for deleting one's own account
#[derive(Debug, Deserialize)]
pub struct DeleteAccountRequest {
    #[serde(default)]
    pub password: String,
}

pub async fn edit(req: HttpRequest) -> Result<HttpResponse> {
    let subject = require_subject(&req)?;
    Ok(Page::new("Profile/Edit")
        .prop("user", json!(subject.user))
        .render(&req))
}

pub async fn update(
    state: web::Data<AppState>,
    req: HttpRequest,
    changes: web::Json<ProfileChanges>,
) -> Result<HttpResponse> {
    let subject = require_subject(&req)?;
    let locale = locale_context(&req).locale;

    let user = state
        .users
        .update_profile(&subject.user, &changes, locale)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success_with_message(
        user,
        t(locale, "profile.updated"),
    )))
}

/// Delete one's own account and end the session
pub async fn destroy(
    state: web::Data<AppState>,
    req: HttpRequest,
    body: web::Json<DeleteAccountRequest>,
) -> Result<HttpResponse> {
    let subject = require_subject(&req)?;
    let locale = locale_context(&req).locale;

    state
        .users
        .delete_own_account(&subject.user, &body.password, locale)
        .await?;
    info!("Account {} closed by its owner", subject.id());

    Ok(HttpResponse::Ok()
        .cookie(removal_cookie(state.config.auth()))
        .json(ApiResponse::message(t(locale, "users.deleted"))))
}
