//! HTTP adapter for the remote AcolheIA chat endpoint.

pub mod client;
pub mod types;

pub use client::HttpChatDispatcher;
