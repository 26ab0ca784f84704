//! # polyglot-admin
//!
//! A multi-lingual user administration service. Authenticated users manage
//! user accounts under role/permission based authorization, and every
//! request is served in the user's chosen display language (Arabic or
//! English).
//!
//! ## Features
//!
//! - **Authorization policy**: each user action maps to one permission,
//!   granted directly or through roles
//! - **Locale resolution**: session value, then the stored preference, then English
//! - **Sessions**: server-side session rows behind an HttpOnly cookie
//! - **Page payloads**: JSON `{ component, props, url }` for an SPA front-end
//!
//! ## Usage
//!
//! ```rust,no_run
//! use polyglot_admin::{AdminApp, Config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/admin.yaml").await?;
//!     let app = AdminApp::new(config).await?;
//!     app.run().await?;
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod auth;
pub mod config;
pub mod core;
pub mod locale;
pub mod server;
pub mod storage;
pub mod utils;

// Re-export main types
pub use auth::{Subject, UserAction, UserPolicy};
pub use config::Config;
pub use locale::{ChangeResult, Locale, LocaleContext, LocaleResolver};
pub use utils::error::{AdminError, Result};

use tracing::info;

/// The admin application: storage, auth and the HTTP server
pub struct AdminApp {
    config: Config,
    server: server::HttpServer,
}

impl AdminApp {
    /// Connect storage, seed roles and prepare the server
    pub async fn new(config: Config) -> Result<Self> {
        info!("Creating admin application");

        let server = server::HttpServer::new(&config).await?;

        Ok(Self { config, server })
    }

    /// Run until the server stops
    pub async fn run(self) -> Result<()> {
        info!("Starting admin application on {}", self.config.server().address());
        self.server.start().await
    }
}

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
