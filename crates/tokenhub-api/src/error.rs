//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use tokenhub_core::error::{AppError, ErrorKind};

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable message.
    pub message: String,
}

/// Response-capable wrapper around [`AppError`].
///
/// `IntoResponse` cannot be implemented on the foreign `AppError` from
/// this crate, so handlers return this wrapper; `?` lifts service errors
/// into it via `From`.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        let status = match err.kind {
            ErrorKind::Validation => StatusCode::BAD_REQUEST,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Upstream => StatusCode::BAD_GATEWAY,
            ErrorKind::Database
            | ErrorKind::Storage
            | ErrorKind::Serialization
            | ErrorKind::Configuration
            | ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Underlying sources stay in the logs; clients only see the
        // kind code and message.
        if status.is_server_error() {
            tracing::error!(
                kind = %err.kind,
                message = %err.message,
                source = ?err.source,
                "Request failed"
            );
        }

        let body = ApiErrorResponse {
            error: err.kind.to_string(),
            message: err.message,
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_to_status_mapping() {
        let cases = [
            (AppError::validation("bad"), StatusCode::BAD_REQUEST),
            (AppError::not_found("gone"), StatusCode::NOT_FOUND),
            (AppError::upstream("pin failed"), StatusCode::BAD_GATEWAY),
            (
                AppError::database("query failed"),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                AppError::storage("write failed"),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                AppError::internal("boom"),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(ApiError::from(err).into_response().status(), expected);
        }
    }
}
