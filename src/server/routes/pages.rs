//! Static pages

use crate::server::page::Page;
use actix_web::{HttpRequest, HttpResponse, web};

/// Configure page routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(welcome))
        .route("/dashboard", web::get().to(dashboard))
        .route("/settings", web::get().to(settings));
}

/// Public landing page
pub async fn welcome(req: HttpRequest) -> HttpResponse {
    Page::new("Welcome").render(&req)
}

pub async fn dashboard(req: HttpRequest) -> HttpResponse {
    Page::new("Dashboard").render(&req)
}

pub async fn settings(req: HttpRequest) -> HttpResponse {
    Page::new("Settings/General").render(&req)
}
