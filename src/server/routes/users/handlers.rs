//! User resource handlers

use super::models::UserRow;
use crate::auth::{NewUser, UserAction, UserChanges, UserPolicy};
use crate::locale::{Locale, t, t_fmt};
use crate::server::middleware::{locale_context, require_subject};
use crate::server::page::Page;
use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use crate::utils::error::{AdminError, Result};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, web};
use serde_json::json;
use tracing::info;
use uuid::Uuid;

fn parse_user_id(raw: &str, locale: Locale) -> Result<Uuid> {
    Uuid::parse_str(raw).map_err(|_| AdminError::not_found(t(locale, "users.not_found")))
}

/// `GET /users`
pub async fn index(state: web::Data<AppState>, req: HttpRequest) -> Result<HttpResponse> {
    let subject = require_subject(&req)?;
    let locale = locale_context(&req).locale;
    UserPolicy::authorize(Some(&subject), UserAction::ViewAny, locale)?;

    let rows: Vec<UserRow> = state
        .users
        .list()
        .await?
        .into_iter()
        .map(|user| UserRow::new(user, Some(&subject)))
        .collect();

    Ok(Page::new("User/Index")
        .prop("users", serde_json::to_value(rows)?)
        .merge(serde_json::to_value(UserPolicy::class_abilities(Some(
            &subject,
        )))?)
        .render(&req))
}

/// `GET /users/create`
pub async fn create(req: HttpRequest) -> Result<HttpResponse> {
    let subject = require_subject(&req)?;
    let locale = locale_context(&req).locale;
    UserPolicy::authorize(Some(&subject), UserAction::Create, locale)?;

    Ok(Page::new("User/Create")
        .merge(serde_json::to_value(UserPolicy::class_abilities(Some(
            &subject,
        )))?)
        .render(&req))
}

/// `POST /users`
pub async fn store(
    state: web::Data<AppState>,
    req: HttpRequest,
    input: web::Json<NewUser>,
) -> Result<HttpResponse> {
    let subject = require_subject(&req)?;
    let locale = locale_context(&req).locale;
    UserPolicy::authorize(Some(&subject), UserAction::Create, locale)?;

    let user = state.users.create(&input, locale).await?;
    info!("User {} created by {}", user.id(), subject.id());

    let message = t_fmt(locale, "users.created", &[("name", user.name.as_str())]);
    Ok(HttpResponse::build(StatusCode::CREATED)
        .json(ApiResponse::success_with_message(user, message)))
}

/// `GET /users/{id}`
pub async fn show(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let subject = require_subject(&req)?;
    let locale = locale_context(&req).locale;
    UserPolicy::authorize(Some(&subject), UserAction::View, locale)?;

    let id = parse_user_id(&path, locale)?;
    let user = state
        .users
        .find(id)
        .await?
        .ok_or_else(|| AdminError::not_found(t(locale, "users.not_found")))?;

    let abilities = UserPolicy::instance_abilities(Some(&subject), &user);
    Ok(Page::new("User/Show")
        .prop("user", json!(user))
        .merge(serde_json::to_value(abilities)?)
        .render(&req))
}

/// `GET /users/{id}/edit`
pub async fn edit(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let subject = require_subject(&req)?;
    let locale = locale_context(&req).locale;
    UserPolicy::authorize(Some(&subject), UserAction::Update, locale)?;

    let id = parse_user_id(&path, locale)?;
    let user = state
        .users
        .find(id)
        .await?
        .ok_or_else(|| AdminError::not_found(t(locale, "users.not_found")))?;

    Ok(Page::new("User/Edit").prop("user", json!(user)).render(&req))
}

/// `PATCH /users/{id}`
pub async fn update(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
    changes: web::Json<UserChanges>,
) -> Result<HttpResponse> {
    let subject = require_subject(&req)?;
    let locale = locale_context(&req).locale;
    UserPolicy::authorize(Some(&subject), UserAction::Update, locale)?;

    let id = parse_user_id(&path, locale)?;
    let user = state.users.update(id, &changes, locale).await?;
    info!("User {} updated by {}", user.id(), subject.id());

    let message = t_fmt(locale, "users.updated", &[("name", user.name.as_str())]);
    Ok(HttpResponse::Ok().json(ApiResponse::success_with_message(user, message)))
}

/// `DELETE /users/{id}`
pub async fn destroy(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let subject = require_subject(&req)?;
    let locale = locale_context(&req).locale;
    UserPolicy::authorize(Some(&subject), UserAction::Delete, locale)?;

    let id = parse_user_id(&path, locale)?;
    if !state.users.delete(id).await? {
        return Err(AdminError::not_found(t(locale, "users.not_found")));
    }
    info!("User {} deleted by {}", id, subject.id());

    Ok(HttpResponse::Ok().json(ApiResponse::message(t(locale, "users.deleted"))))
}
