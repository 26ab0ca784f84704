//! Request and response models for authentication endpoints

use crate::core::models::User;
use serde::{Deserialize, Serialize};

/// User login request
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// User login response
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub user: User,
    pub locale: String,
    pub expires_at: chrono::DateTime<chrono::Utc>,
}
