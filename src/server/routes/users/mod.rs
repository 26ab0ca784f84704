//! User resource endpoints
//!
//! Every handler checks [`UserPolicy`](crate::auth::UserPolicy) before reading
//! or changing anything.

mod handlers;
mod models;

pub use handlers::{create, destroy, edit, index, show, store, update};
pub use models::UserRow;

use actix_web::web;

/// Configure user routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/users")
            .route("", web::get().to(index))
            .route("", web::post().to(store))
            .route("/create", web::get().to(create))
            .route("/{id}", web::get().to(show))
            .route("/{id}", web::patch().to(update))
            .route("/{id}", web::delete().to(destroy))
            .route("/{id}/edit", web::get().to(edit)),
    );
}
