//! Business logic and repository trait definitions for Parley.
//!
//! This crate defines the "ports" (repository traits) that the infrastructure
//! layer implements, and the use cases built on them. It depends only on
//! `parley-types` -- never on `parley-infra` or any database/IO crate.

pub mod repository;
pub mod usecase;
