//! Server builder and run_server function
//!
//! This module provides the ServerBuilder for easier server configuration
//! and the run_server function for automatic configuration loading.

use crate::config::Config;
use crate::server::server::HttpServer;
use crate::utils::error::{AdminError, Result};
use std::path::Path;
use tracing::{info, warn};

/// Server builder for easier configuration
#[derive(Default)]
pub struct ServerBuilder {
    config: Option<Config>,
    host: Option<String>,
    port: Option<u16>,
}

impl ServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set configuration
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Override the bind host
    pub fn with_host(mut self, host: Option<String>) -> Self {
        self.host = host;
        self
    }

    /// Override the bind port
    pub fn with_port(mut self, port: Option<u16>) -> Self {
        self.port = port;
        self
    }

    /// Build the HTTP server
    pub async fn build(self) -> Result<HttpServer> {
        let mut config = self
            .config
            .ok_or_else(|| AdminError::config("Configuration is required"))?;

        if let Some(host) = self.host {
            config.app.server.host = host;
        }
        if let Some(port) = self.port {
            config.app.server.port = port;
        }
        config.validate()?;

        HttpServer::new(&config).await
    }
}

/// Load `config_path`, falling back to environment configuration when it is missing
pub async fn load_config(config_path: &Path) -> Result<Config> {
    if !config_path.exists() {
        warn!(
            "Configuration file {} not found, using environment configuration",
            config_path.display()
        );
        return Config::from_env();
    }

    info!("Loading configuration file: {}", config_path.display());
    Config::from_file(config_path).await
}

/// Run the server with automatic configuration loading
pub async fn run_server(
    config_path: &Path,
    host: Option<String>,
    port: Option<u16>,
) -> Result<()> {
    info!("Starting polyglot admin server");

    let config = load_config(config_path).await?;

    let server = ServerBuilder::new()
        .with_config(config)
        .with_host(host)
        .with_port(port)
        .build()
        .await?;

    info!("Server starting at: http://{}", server.config().address());
    info!("Routes:");
    info!("   GET    /health");
    info!("   POST   /auth/login, /auth/logout");
    info!("   POST   /change-language");
    info!("   GET    /users, /users/create, /users/{{id}}, /users/{{id}}/edit");
    info!("   POST   /users   PATCH|DELETE /users/{{id}}");
    info!("   GET|PATCH|DELETE /profile");

    server.start().await
}
