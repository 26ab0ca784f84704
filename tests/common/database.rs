//! Test database utilities
//!
//! Provides in-memory SQLite storage for testing without external dependencies.
//! Each test gets an isolated, migrated database.

use polyglot_admin::config::{DatabaseConfig, StorageConfig};
use polyglot_admin::storage::StorageLayer;
use polyglot_admin::storage::database::Database;
use std::sync::Arc;

/// Test database wrapper providing isolated in-memory SQLite instances
#[derive(Debug, Clone)]
pub struct TestDatabase {
    storage: Arc<StorageLayer>,
}

impl TestDatabase {
    /// Create a new migrated in-memory test database
    pub async fn new() -> Self {
        let config = StorageConfig {
            database: DatabaseConfig::in_memory(),
        };

        let storage = StorageLayer::new(&config)
            .await
            .expect("Failed to create in-memory test database");

        Self {
            storage: Arc::new(storage),
        }
    }

    /// Get reference to the underlying database
    pub fn db(&self) -> &Database {
        self.storage.db()
    }

    /// Get the storage layer
    pub fn storage(&self) -> Arc<StorageLayer> {
        Arc::clone(&self.storage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_database_creation() {
        let db = TestDatabase::new().await;
        assert!(db.db().health_check().await.is_ok());
        assert!(db.storage().health_check().await);
    }
}
