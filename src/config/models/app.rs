//! Top-level application configuration

use super::*;
use crate::utils::error::{AdminError, Result};
use serde::{Deserialize, Serialize};

/// Application configuration as laid out in `config/admin.yaml`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Storage settings
    #[serde(default)]
    pub storage: StorageConfig,
    /// Session and role settings
    #[serde(default)]
    pub auth: AuthConfig,
}

impl AppConfig {
    /// Build the defaults and apply `ADMIN_*` overrides read through `lookup`
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = lookup("ADMIN_HOST") {
            config.server.host = host;
        }
        if let Some(port) = lookup("ADMIN_PORT") {
            config.server.port = port
                .parse()
                .map_err(|e| AdminError::Config(format!("Invalid ADMIN_PORT '{}': {}", port, e)))?;
        }
        if let Some(url) = lookup("ADMIN_DATABASE_URL") {
            config.storage.database.url = url;
        }

        Ok(config)
    }
}
