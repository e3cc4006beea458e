//! HTTP/REST API layer for Parley.
//!
//! Axum-based REST API exposing chats and their messages, with a uniform
//! error body and CORS support.

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod response;
pub mod router;
