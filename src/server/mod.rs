//! HTTP server implementation
//!
//! This module provides the HTTP server, its middleware stack and the routes
//! of the admin application.

// Submodules
pub mod middleware;
pub mod routes;

pub mod builder;
pub mod page;
pub mod server;
pub mod state;
mod utils;


pub use builder::{ServerBuilder, run_server};
pub use page::Page;
pub use server::HttpServer;
pub use state::AppState;
