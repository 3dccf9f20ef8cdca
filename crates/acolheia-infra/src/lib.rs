//! Infrastructure layer for AcolheIA.
//!
//! Contains implementations of the ports defined in `acolheia-core`:
//! SQLite and in-memory key-value stores, the HTTP chat dispatcher, and
//! configuration / data directory resolution.

pub mod chat_api;
pub mod config;
pub mod memory;
pub mod sqlite;
