//! Shared domain types for Parley.
//!
//! This crate contains the domain records used across the workspace (Chat,
//! Message), the validated input types that guard them, configuration, and
//! the error enums.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror.

pub mod chat;
pub mod config;
pub mod error;
