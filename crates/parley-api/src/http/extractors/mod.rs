//! Request extractors.
//!
//! Wrappers around axum's `Json`, `Path` and `Query` whose rejections are
//! converted into [`AppError`](crate::http::error::AppError), so malformed
//! input gets the same 422 error body as failed validation.

pub mod query;
pub mod validated;
