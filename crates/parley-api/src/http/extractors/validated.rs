use axum::extract::{FromRequest, FromRequestParts, Path, Query};

use crate::http::error::AppError;

/// `axum::Json` with rejections reported as `AppError::Validation`.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// `axum::extract::Path` with rejections reported as `AppError::Validation`.
#[derive(FromRequestParts)]
#[from_request(via(Path), rejection(AppError))]
pub struct AppPath<T>(pub T);

/// `axum::extract::Query` with rejections reported as `AppError::Validation`.
#[derive(FromRequestParts)]
#[from_request(via(Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);
