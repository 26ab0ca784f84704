//! Test fixtures and data factories
//!
//! All factories create real rows, not mocks.

use polyglot_admin::config::{Config, DatabaseConfig, SeedAdminConfig};
use polyglot_admin::core::models::User;
use polyglot_admin::server::AppState;
use polyglot_admin::storage::StorageLayer;
use polyglot_admin::utils::crypto::hash_password;
use uuid::Uuid;

/// Password of every user created by the fixtures
pub const TEST_PASSWORD: &str = "secret-password";

/// Email of the seeded administrator in [`test_state`]
pub const ADMIN_EMAIL: &str = "admin@app.com";

/// Factory for creating test users
pub struct UserFactory;

impl UserFactory {
    /// A user with a unique email and [`TEST_PASSWORD`]
    pub fn build(name: &str) -> User {
        let email = format!("{}-{}@example.com", name.to_lowercase(), &Uuid::new_v4().to_string()[..8]);
        let hash = hash_password(TEST_PASSWORD).expect("Failed to hash test password");
        User::new(name.to_string(), email, hash)
    }

    /// Insert a user without roles or permissions
    pub async fn insert(storage: std::sync::Arc<StorageLayer>, name: &str) -> User {
        storage
            .db()
            .create_user(&Self::build(name))
            .await
            .expect("Failed to insert test user")
    }
}

/// Application state over a fresh in-memory database, with a seeded admin
pub async fn test_state() -> AppState {
    let mut config = Config::default();
    config.app.storage.database = DatabaseConfig::in_memory();
    config.app.auth.rbac.seed_admin = Some(SeedAdminConfig {
        name: "Admin".to_string(),
        email: ADMIN_EMAIL.to_string(),
        password: TEST_PASSWORD.to_string(),
    });

    AppState::new(config)
        .await
        .expect("Failed to build application state")
}

/// Log `email` in and return the session token
pub async fn login_token(state: &AppState, email: &str) -> String {
    state
        .auth
        .login(email, TEST_PASSWORD, None, None)
        .await
        .expect("Login failed")
        .expect("Credentials rejected")
        .session
        .id
}
