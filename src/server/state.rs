//! Application state shared across HTTP handlers

use crate::auth::{AuthSystem, UserManager};
use crate::config::Config;
use crate::locale::LocaleResolver;
use crate::storage::StorageLayer;
use crate::utils::error::Result;
use std::sync::Arc;
use tracing::info;

/// HTTP server state shared across handlers
///
/// Everything here is read-only after startup; per-request data lives in
/// request extensions.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Service configuration (shared read-only)
    pub config: Arc<Config>,
    /// Storage layer
    pub storage: Arc<StorageLayer>,
    /// Authentication system
    pub auth: Arc<AuthSystem>,
    /// User account management
    pub users: Arc<UserManager>,
    /// Locale resolution and persistence
    pub locale: Arc<LocaleResolver>,
}

impl AppState {
    /// Connect storage, run migrations and seed roles
    pub async fn new(config: Config) -> Result<Self> {
        info!("Initializing application state");

        let storage = Arc::new(StorageLayer::new(config.storage()).await?);
        let auth = AuthSystem::new(config.auth(), storage.clone()).await?;

        Ok(Self {
            config: Arc::new(config),
            users: Arc::new(UserManager::new(storage.clone())),
            locale: Arc::new(LocaleResolver::new(storage.clone())),
            auth: Arc::new(auth),
            storage,
        })
    }

    /// Get service configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
