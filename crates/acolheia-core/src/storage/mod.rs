//! Storage abstractions for AcolheIA.
//!
//! Defines the key-value port every store is layered on.
//! Implementations live in acolheia-infra.

pub mod kv_store;
