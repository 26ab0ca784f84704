//! Display language switching

use crate::locale::ChangeResult;
use crate::server::middleware::{locale_context, require_subject, session_id, set_locale_context};
use crate::server::state::AppState;
use crate::utils::error::Result;
use actix_web::{Either, HttpRequest, HttpResponse, web};
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

/// Configure language routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/change-language", web::post().to(change_language));
}

/// Body of a language change, JSON or form encoded
#[derive(Debug, Deserialize)]
pub struct ChangeLanguageRequest {
    #[serde(default)]
    pub language: Option<String>,
}

/// Switch the display language of the current user
///
/// Unsupported codes are ignored; the answer is `{"status": "ok"}` either way.
pub async fn change_language(
    state: web::Data<AppState>,
    req: HttpRequest,
    body: Either<web::Json<ChangeLanguageRequest>, web::Form<ChangeLanguageRequest>>,
) -> Result<HttpResponse> {
    let subject = require_subject(&req)?;
    let requested = match body {
        Either::Left(json) => json.into_inner().language,
        Either::Right(form) => form.into_inner().language,
    }
    .unwrap_or_default();

    let session = session_id(&req);
    let mut context = locale_context(&req);

    let result = state
        .locale
        .change_locale(&requested, Some(&subject), session.as_deref(), &mut context)
        .await?;

    if let ChangeResult::Applied(locale) = result {
        debug!("Request locale replaced with {}", locale);
        set_locale_context(&req, context);
    }

    Ok(HttpResponse::Ok().json(json!({ "status": "ok" })))
}
