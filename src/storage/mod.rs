//! Storage layer for the admin service
//!
//! This module provides data persistence for users, roles, permissions and sessions.

/// Database storage module
pub mod database;

use crate::config::StorageConfig;
use crate::utils::error::Result;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Main storage layer
#[derive(Debug, Clone)]
pub struct StorageLayer {
    /// Database connection pool
    pub database: Arc<database::Database>,
}

impl StorageLayer {
    /// Connect to the database and bring the schema up to date
    pub async fn new(config: &StorageConfig) -> Result<Self> {
        info!("Initializing storage layer");

        debug!("Connecting to database");
        let database = Arc::new(database::Database::new(&config.database).await?);
        database.migrate().await?;

        info!("Storage layer initialized successfully");
        Ok(Self { database })
    }

    /// Get the database
    pub fn db(&self) -> &database::Database {
        &self.database
    }

    /// Whether the database answers queries
    pub async fn health_check(&self) -> bool {
        match self.database.health_check().await {
            Ok(()) => true,
            Err(e) => {
                warn!("Database health check failed: {}", e);
                false
            }
        }
    }
}
