//! Shared domain types for AcolheIA.
//!
//! Accounts, sessions, chat messages, configuration, and the error taxonomy
//! shared by every layer.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror.

pub mod account;
pub mod chat;
pub mod config;
pub mod error;
pub mod storage;
