//! Authentication endpoints

mod login;
mod models;
mod session;

pub use login::login;
pub use models::{LoginRequest, LoginResponse};
pub use session::{logout, removal_cookie, session_cookie};

use actix_web::web;

/// Configure authentication routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .route("/login", web::post().to(login))
            .route("/logout", web::post().to(logout)),
    );
}
