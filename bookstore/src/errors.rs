//! Consistent JSON error responses.
//!
//! Every failure body is `{ "message": ... }`. Validation and lookup failures are
//! reported as-is; storage failures are logged and answered with an opaque message so
//! driver details never reach clients.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use bookstore_core::error::StoreError;

pub const NOT_FOUND_MESSAGE: &str = "Book not found";
pub const INVALID_BODY_MESSAGE: &str = "Invalid request body";
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Store(#[from] StoreError),
    /// The body claimed JSON or form encoding but could not be decoded.
    #[error("invalid request body: {0}")]
    InvalidBody(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::InvalidBody(detail) => {
                tracing::debug!(%detail, "rejected request body");
                json_message(StatusCode::BAD_REQUEST, INVALID_BODY_MESSAGE)
            }
            ApiError::Store(StoreError::InvalidDocument(message)) => {
                json_message(StatusCode::BAD_REQUEST, message)
            }
            ApiError::Store(StoreError::BookNotFound(id)) => {
                tracing::debug!(%id, "book not found");
                json_message(StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE)
            }
            ApiError::Store(err) => {
                tracing::error!(error = %err, "storage operation failed");
                json_message(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE)
            }
        }
    }
}

/// Builds a `{ "message": ... }` response with the given status.
pub fn json_message(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(json!({
            "message": message.into(),
        })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: impl Into<ApiError>) -> StatusCode {
        err.into().into_response().status()
    }

    #[test]
    fn store_errors_map_to_statuses() {
        assert_eq!(
            status_of(StoreError::InvalidDocument("Title and author are required".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(status_of(StoreError::BookNotFound("42".into())), StatusCode::NOT_FOUND);
        assert_eq!(
            status_of(StoreError::Backend("connection reset".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            status_of(StoreError::Serialization("missing field `title`".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn undecodable_body_is_a_bad_request() {
        assert_eq!(status_of(ApiError::InvalidBody("EOF".into())), StatusCode::BAD_REQUEST);
    }
}
