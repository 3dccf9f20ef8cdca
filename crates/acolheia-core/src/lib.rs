//! Business logic and port trait definitions for AcolheIA.
//!
//! This crate defines the "ports" (`KeyValueStore`, `ChatDispatcher`) that the
//! infrastructure layer implements, and the services built on them. It depends
//! only on `acolheia-types` -- never on `acolheia-infra` or any IO crate.

pub mod account;
pub mod chat;
pub mod session;
pub mod storage;

#[cfg(test)]
pub(crate) mod test_support;
