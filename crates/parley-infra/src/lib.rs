//! Infrastructure layer for Parley.
//!
//! Contains the SQLite implementations of the repository traits defined in
//! `parley-core`, the split reader/writer database pool, and configuration
//! file loading.

pub mod config;
pub mod sqlite;
