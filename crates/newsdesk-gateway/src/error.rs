//! Error handling for the gateway.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Pagination parameters violate their preconditions.
    #[error("{message}")]
    InvalidPagination { message: String, status: StatusCode },

    /// Request could not be decoded.
    #[error("{0}")]
    BadRequest(String),

    /// Requested entry does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Document store failure.
    #[error("storage error: {0}")]
    Storage(String),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

/// Error response body.
#[derive(Serialize)]
pub struct ErrorResponse {
    /// Error flag.
    pub error: bool,
    /// Error code.
    pub code: String,
    /// Error message.
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            AppError::InvalidPagination { status, .. } => (*status, "INVALID_ARGUMENT"),
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            AppError::Storage(_) => (StatusCode::INTERNAL_SERVER_ERROR, "STORAGE_ERROR"),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        };

        if status.is_server_error() {
            tracing::error!(%status, error = %self, "Request failed");
        }

        let body = ErrorResponse {
            error: true,
            code: code.to_string(),
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<newsdesk_core::Error> for AppError {
    fn from(err: newsdesk_core::Error) -> Self {
        match err {
            newsdesk_core::Error::InvalidArgument(message) => AppError::InvalidPagination {
                message,
                status: StatusCode::INTERNAL_SERVER_ERROR,
            },
            newsdesk_core::Error::Storage(e) => AppError::Storage(e.to_string()),
            other => AppError::Internal(other.to_string()),
        }
    }
}

impl AppError {
    /// Override the status used for invalid pagination.
    pub fn with_pagination_status(self, status: StatusCode) -> Self {
        match self {
            AppError::InvalidPagination { message, .. } => {
                AppError::InvalidPagination { message, status }
            }
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_defaults_to_server_error() {
        let err: AppError =
            newsdesk_core::Error::InvalidArgument("page must be >= 0".to_string()).into();
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_pagination_status_override() {
        let err: AppError =
            newsdesk_core::Error::InvalidArgument("size must be > 0".to_string()).into();
        let response = err
            .with_pagination_status(StatusCode::BAD_REQUEST)
            .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_bad_request_status() {
        let response = AppError::BadRequest("bad query".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_override_leaves_other_errors() {
        let err = AppError::NotFound("gone".to_string())
            .with_pagination_status(StatusCode::BAD_REQUEST);
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }
}
