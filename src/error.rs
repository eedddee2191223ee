// SPDX-License-Identifier: MIT

//! Application error types with consistent API responses.
//!
//! Every error body is `{"message": ...}`. Client-correctable errors carry
//! a specific message; storage and signing failures are collapsed to one
//! generic internal error so backend details never reach the caller.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::services::password::PasswordError;
use crate::services::token::TokenError;
use crate::services::validation::ValidationError;
use crate::store::StoreError;

/// Application error type that converts to HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("invalid parameter request")]
    BadRequest,

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    NotFound(&'static str),

    #[error("unauthorized")]
    Unauthorized,

    #[error("{0}")]
    Conflict(&'static str),

    /// AuthGate rejection. Deliberately undifferentiated: a missing header,
    /// a bad signature, and an expired token all produce this variant.
    #[error("missing or malformed token")]
    Auth,

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// JSON error response body
#[derive(Serialize)]
struct ErrorResponse {
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::BadRequest => (
                StatusCode::BAD_REQUEST,
                "invalid parameter request".to_string(),
            ),
            AppError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, (*msg).to_string()),
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "unauthorized".to_string()),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, (*msg).to_string()),
            AppError::Auth => (
                StatusCode::FORBIDDEN,
                "missing or malformed token".to_string(),
            ),
            AppError::Internal(err) => {
                tracing::error!(error = %err, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        let body = ErrorResponse { message };

        (status, Json(body)).into_response()
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::Internal(anyhow::Error::new(err))
    }
}

impl From<PasswordError> for AppError {
    fn from(err: PasswordError) -> Self {
        AppError::Internal(anyhow::Error::new(err))
    }
}

impl From<TokenError> for AppError {
    fn from(err: TokenError) -> Self {
        AppError::Internal(anyhow::Error::new(err))
    }
}

/// Result type alias for handlers
pub type Result<T> = std::result::Result<T, AppError>;
