use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use validator::ValidationErrors;

use crate::store::StoreError;

// Define a custom error type
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Internal Server Error: {0}")]
    InternalServerError(String),

    #[error("Database error")]
    DatabaseError(sqlx::Error),

    #[error("Stored document is corrupt")]
    CorruptDocument(serde_json::Error),

    #[error("Authentication error")]
    JwtError(jsonwebtoken::errors::Error),

    #[error("Authentication error")]
    PasswordError(bcrypt::BcryptError),

    /// Login and registration rejections; the admin UI reads `message`.
    #[error("{0}")]
    BadCredentials(&'static str),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("{0}")]
    Forbidden(String),

    /// Carries the collection label, e.g. `Project`.
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("Validation error: {0}")]
    ValidationError(ValidationErrors),

    /// Body that is not JSON or does not match the expected shape.
    #[error("Invalid request body: {0}")]
    InvalidBody(JsonRejection),
}

// Implement IntoResponse to convert AppError into an HTTP response
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::InternalServerError(msg) => {
                tracing::error!("Internal server error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Server Error".to_string(),
                )
            }
            AppError::DatabaseError(e) => {
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Database error".to_string(),
                )
            }
            AppError::CorruptDocument(e) => {
                tracing::error!("Corrupt document in store: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Server Error".to_string(),
                )
            }
            AppError::JwtError(e) => {
                tracing::error!("Failed to sign token: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Server Error".to_string(),
                )
            }
            AppError::PasswordError(e) => {
                tracing::error!("Password hashing error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Server Error".to_string(),
                )
            }
            AppError::BadCredentials(message) => {
                return (StatusCode::BAD_REQUEST, Json(json!({ "message": message })))
                    .into_response();
            }
            AppError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "No valid token, authorization denied".to_string(),
            ),
            AppError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            AppError::NotFound(label) => {
                return (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "msg": format!("{label} not found") })),
                )
                    .into_response();
            }
            AppError::ValidationError(errors) => {
                // The `errors` object contains detailed information on which fields failed.
                let message = format!("Input validation failed: {errors}").replace('\n', ", ");
                return (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": message, "details": errors })),
                )
                    .into_response();
            }
            AppError::InvalidBody(rejection) => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(json!({
                        "error": "Invalid request body",
                        "details": rejection.body_text(),
                    })),
                )
                    .into_response();
            }
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

// Add From implementations for easy '?' conversion in handlers
impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::DatabaseError(e)
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::ValidationError(errors)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidBody(rejection)
    }
}

impl From<jsonwebtoken::errors::Error> for AppError {
    fn from(e: jsonwebtoken::errors::Error) -> Self {
        AppError::JwtError(e)
    }
}

impl From<bcrypt::BcryptError> for AppError {
    fn from(e: bcrypt::BcryptError) -> Self {
        AppError::PasswordError(e)
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Database(e) => AppError::DatabaseError(e),
            StoreError::Corrupt(e) => AppError::CorruptDocument(e),
            StoreError::Invalid(errors) => AppError::ValidationError(errors),
        }
    }
}
