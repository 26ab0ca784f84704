//! HTTP response handling for errors

use super::types::{AdminError, FieldErrors};
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

impl ResponseError for AdminError {
    fn status_code(&self) -> StatusCode {
        match self {
            AdminError::Auth(_) => StatusCode::UNAUTHORIZED,
            AdminError::Authorization(_) => StatusCode::FORBIDDEN,
            AdminError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AdminError::NotFound(_) => StatusCode::NOT_FOUND,
            AdminError::Conflict(_) => StatusCode::CONFLICT,
            AdminError::BadRequest(_) | AdminError::Serialization(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let (error_code, message) = match self {
            AdminError::Config(_) => ("CONFIG_ERROR", self.to_string()),
            AdminError::Database(_) => ("DATABASE_ERROR", "Database operation failed".to_string()),
            AdminError::Auth(message) => ("AUTH_ERROR", message.clone()),
            AdminError::Authorization(message) => ("AUTHORIZATION_ERROR", message.clone()),
            AdminError::Validation(errors) => ("VALIDATION_ERROR", errors.to_string()),
            AdminError::NotFound(message) => ("NOT_FOUND", message.clone()),
            AdminError::Conflict(message) => ("CONFLICT", message.clone()),
            AdminError::BadRequest(message) => ("BAD_REQUEST", message.clone()),
            AdminError::Serialization(_) => ("BAD_REQUEST", "Malformed request body".to_string()),
            AdminError::Session(_) => ("SESSION_ERROR", "Session operation failed".to_string()),
            _ => ("INTERNAL_ERROR", "An internal error occurred".to_string()),
        };

        let errors = match self {
            AdminError::Validation(errors) => Some(errors.clone()),
            _ => None,
        };

        let error_response = ErrorResponse {
            error: ErrorDetail {
                code: error_code.to_string(),
                message,
                timestamp: chrono::Utc::now().timestamp(),
                request_id: None,
            },
            errors,
        };

        HttpResponse::build(self.status_code()).json(error_response)
    }
}

/// Standard error response format
#[derive(Debug, serde::Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
    /// Per-field messages for validation failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
}

/// Error detail structure
#[derive(Debug, serde::Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    pub timestamp: i64,
    pub request_id: Option<String>,
}
