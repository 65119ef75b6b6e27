//! Centralized error handling.
//!
//! Every fallible operation returns [`AppResult`]. The three user-directory
//! failures (`UserAlreadyExists`, `UserNotFound`, `InvalidInput`) are surfaced
//! to the caller untouched; the web layer turns each variant into an HTTP
//! response via [`IntoResponse`].

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // User directory
    #[error("User with email or dni already exists: {0}")]
    UserAlreadyExists(String),

    #[error("User not found")]
    UserNotFound,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // Request decoding
    #[error("{0}")]
    Validation(String),

    // External service errors
    #[error("Database error")]
    Database(#[from] sea_orm::DbErr),

    // Internal
    #[error("Internal server error")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    code: String,
    message: String,
}

impl AppError {
    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            AppError::UserAlreadyExists(_) => "USER_ALREADY_EXISTS",
            AppError::UserNotFound => "USER_NOT_FOUND",
            AppError::InvalidInput(_) => "INVALID_INPUT",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Database(_) => "DATABASE_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::UserAlreadyExists(_) => StatusCode::CONFLICT,
            AppError::UserNotFound => StatusCode::NOT_FOUND,
            AppError::InvalidInput(_) | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                "A database error occurred".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }

            // Client errors carry their own message
            _ => self.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.code().to_string(),
                message: self.user_message(),
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self) -> AppResult<T> {
        self.ok_or(AppError::UserNotFound)
    }
}

/// Convenience constructors
impl AppError {
    pub fn already_exists(email: impl Into<String>) -> Self {
        AppError::UserAlreadyExists(email.into())
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        AppError::InvalidInput(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn already_exists_mentions_email() {
        let err = AppError::already_exists("a@x.com");

        assert_eq!(err.status(), StatusCode::CONFLICT);
        assert_eq!(err.code(), "USER_ALREADY_EXISTS");
        assert!(err.user_message().contains("a@x.com"));
    }

    #[test]
    fn status_codes_per_variant() {
        assert_eq!(AppError::UserNotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::invalid_input("nothing to update").status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::validation("bad json").status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::internal("boom").status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn internal_details_are_hidden() {
        let err = AppError::internal("connection pool exhausted at 10.0.0.3");
        assert_eq!(err.user_message(), "An internal error occurred");

        let err = AppError::from(sea_orm::DbErr::Custom("relation missing".into()));
        assert_eq!(err.user_message(), "A database error occurred");
    }

    #[test]
    fn missing_option_becomes_user_not_found() {
        let missing: Option<u8> = None;
        assert!(matches!(missing.ok_or_not_found(), Err(AppError::UserNotFound)));
        assert_eq!(Some(7).ok_or_not_found().ok(), Some(7));
    }

    #[test]
    fn into_response_uses_variant_status() {
        let response = AppError::UserNotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
