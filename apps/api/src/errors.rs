use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::contacts::validation::ContactValidationError;

/// Shown when a contact cannot be recorded, whatever the cause.
pub const CONTACT_RETRY_MESSAGE: &str =
    "Something went wrong. Please try again or contact support if the issue persists.";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Contact submission failed")]
    ContactSubmission,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl From<ContactValidationError> for AppError {
    fn from(e: ContactValidationError) -> Self {
        AppError::Validation(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::ContactSubmission => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "CONTACT_SUBMISSION_FAILED",
                CONTACT_RETRY_MESSAGE.to_string(),
            ),
            AppError::Database(e) => {
                tracing::error!("Database error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DATABASE_ERROR",
                    "A database error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
