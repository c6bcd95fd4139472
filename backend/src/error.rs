//! Application error handling
//!
//! This module provides unified error handling for the API,
//! converting internal errors to appropriate HTTP responses.
//!
//! Unexpected failures surface as 400 with the failure's message, the
//! same class as validation errors.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use provider_registry_shared::{AuthError, ErrorResponse};
use thiserror::Error;
use tracing::error;
use validator::ValidationErrors;

/// API error type that can be converted to HTTP responses
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    /// Delete blocked by rows that still reference the target
    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Internal(#[from] anyhow::Error),

    #[error("{0}")]
    Database(#[from] sqlx::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::Validation(_)
            | ApiError::Conflict(_)
            | ApiError::BadRequest(_)
            | ApiError::Internal(_)
            | ApiError::Database(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = match &self {
            ApiError::NotFound(msg) | ApiError::Unauthorized(msg) | ApiError::Forbidden(msg) => {
                ErrorResponse {
                    message: Some(msg.clone()),
                    erro: None,
                }
            }
            ApiError::Validation(msg) | ApiError::Conflict(msg) | ApiError::BadRequest(msg) => {
                ErrorResponse {
                    message: None,
                    erro: Some(msg.clone()),
                }
            }
            ApiError::Internal(err) => {
                error!("Internal error: {:?}", err);
                ErrorResponse {
                    message: None,
                    erro: Some(err.to_string()),
                }
            }
            ApiError::Database(err) => {
                error!("Database error: {:?}", err);
                ErrorResponse {
                    message: None,
                    erro: Some(err.to_string()),
                }
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        if err.is_token_error() {
            ApiError::Forbidden(err.to_string())
        } else {
            ApiError::Unauthorized(err.to_string())
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        ApiError::Validation(errors.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
