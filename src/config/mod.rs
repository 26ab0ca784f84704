//! Configuration management for the admin service
//!
//! This module handles loading, validation, and serialization of the service configuration.

pub mod models;

pub use models::*;

use crate::utils::error::{AdminError, Result};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct for the admin service
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Application configuration
    pub app: AppConfig,
}

impl Config {
    /// Load configuration from file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| AdminError::Config(format!("Failed to read config file: {}", e)))?;

        Self::from_yaml_str(&content)
    }

    /// Parse and validate configuration from YAML text
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let app: AppConfig = serde_yaml::from_str(content)
            .map_err(|e| AdminError::Config(format!("Failed to parse config: {}", e)))?;

        let config = Self { app };
        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from environment variables (after reading `.env` if present)
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        if let Ok(path) = dotenvy::dotenv() {
            debug!("Loaded environment from {:?}", path);
        }

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from defaults plus overrides supplied by `lookup`
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let app = AppConfig::from_lookup(lookup)?;
        let config = Self { app };

        config.validate()?;
        Ok(config)
    }

    /// Get server configuration
    pub fn server(&self) -> &ServerConfig {
        &self.app.server
    }

    /// Get storage configuration
    pub fn storage(&self) -> &StorageConfig {
        &self.app.storage
    }

    /// Get auth configuration
    pub fn auth(&self) -> &AuthConfig {
        &self.app.auth
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.app
            .server
            .validate()
            .map_err(|e| AdminError::Config(format!("Server config error: {}", e)))?;

        self.app
            .server
            .cors
            .validate()
            .map_err(|e| AdminError::Config(format!("CORS config error: {}", e)))?;

        self.app
            .storage
            .database
            .validate()
            .map_err(|e| AdminError::Config(format!("Storage config error: {}", e)))?;

        self.app
            .auth
            .validate()
            .map_err(|e| AdminError::Config(format!("Auth config error: {}", e)))?;

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.app)
            .map_err(|e| AdminError::Config(format!("Failed to serialize config to JSON: {}", e)))
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(&self.app)
            .map_err(|e| AdminError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}
