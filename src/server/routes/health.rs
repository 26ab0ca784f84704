//! Health check endpoint

use crate::server::state::AppState;
use actix_web::{HttpResponse, Result as ActixResult, web};
use serde::Serialize;
use std::borrow::Cow;
use tracing::{debug, warn};

/// Configure health check routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check));
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: Cow<'static, str>,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub version: Cow<'static, str>,
    pub database: bool,
}

/// Basic health check endpoint
///
/// Answers 503 when the database cannot be reached.
pub async fn health_check(state: web::Data<AppState>) -> ActixResult<HttpResponse> {
    debug!("Health check requested");

    let database = state.storage.health_check().await;
    if !database {
        warn!("Health check: database unreachable");
    }

    let health_status = HealthStatus {
        status: Cow::Borrowed(if database { "healthy" } else { "degraded" }),
        timestamp: chrono::Utc::now(),
        version: Cow::Borrowed(env!("CARGO_PKG_VERSION")),
        database,
    };

    if database {
        Ok(HttpResponse::Ok().json(health_status))
    } else {
        Ok(HttpResponse::ServiceUnavailable().json(health_status))
    }
}
