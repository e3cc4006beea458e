//! Parley application layer: CLI definitions, HTTP API, and the state that
//! wires use cases to the SQLite repositories.

pub mod cli;
pub mod http;
pub mod state;
