//! Application error type mapping to HTTP status codes.
//!
//! This is the only place where error kinds become status codes:
//! validation -> 422, missing chat -> 404, storage failure -> 500.

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use parley_types::error::{ChatError, ValidationError};

use crate::http::response::ErrorResponse;

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Malformed or invalid input, rejected before any use case runs.
    Validation(String),
    /// Outcome of a use case.
    Chat(ChatError),
}

impl From<ValidationError> for AppError {
    fn from(e: ValidationError) -> Self {
        AppError::Validation(e.to_string())
    }
}

impl From<ChatError> for AppError {
    fn from(e: ChatError) -> Self {
        AppError::Chat(e)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl AppError {
    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            AppError::Validation(msg) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "VALIDATION_ERROR", msg.clone())
            }
            AppError::Chat(e @ ChatError::NotFound(_)) => {
                (StatusCode::NOT_FOUND, "CHAT_NOT_FOUND", e.to_string())
            }
            AppError::Chat(e @ ChatError::Internal { .. }) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", e.to_string())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();
        (status, Json(ErrorResponse::single(code, message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parley_types::chat::ChatId;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (AppError::from(ValidationError::EmptyTitle), StatusCode::UNPROCESSABLE_ENTITY),
            (AppError::from(ChatError::NotFound(ChatId(1))), StatusCode::NOT_FOUND),
            (
                AppError::from(ChatError::internal("could not create chat 'x'", "disk full")),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }

    #[test]
    fn test_internal_error_carries_message_only() {
        let err = AppError::from(ChatError::internal("could not delete chat id=4", "database is locked"));
        let (_, code, message) = err.parts();
        assert_eq!(code, "INTERNAL_ERROR");
        assert_eq!(message, "could not delete chat id=4: database is locked");
    }
}
