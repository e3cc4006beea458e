//! Response body shapes shared by the handlers.
//!
//! Successful responses are the resource itself (`Chat`, `Message`,
//! `ChatWithMessages`) serialized as-is. Failures use a small error envelope:
//! ```json
//! {
//!   "errors": [{ "code": "CHAT_NOT_FOUND", "message": "chat with id=9 not found" }],
//!   "meta": { "request_id": "...", "timestamp": "..." }
//! }
//! ```

use serde::Serialize;

/// Error envelope returned for every non-2xx response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub errors: Vec<ApiErrorDetail>,
    pub meta: ApiMeta,
}

/// Metadata included in every error response.
#[derive(Debug, Serialize)]
pub struct ApiMeta {
    /// Unique request identifier for correlating with server logs.
    pub request_id: String,
    /// ISO-8601 timestamp of the response.
    pub timestamp: String,
}

/// Individual error detail.
#[derive(Debug, Serialize)]
pub struct ApiErrorDetail {
    /// Machine-readable error code.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ErrorResponse {
    pub fn single(code: &str, message: impl Into<String>) -> Self {
        Self {
            errors: vec![ApiErrorDetail {
                code: code.to_string(),
                message: message.into(),
            }],
            meta: ApiMeta {
                request_id: uuid::Uuid::now_v7().to_string(),
                timestamp: chrono::Utc::now().to_rfc3339(),
            },
        }
    }
}
