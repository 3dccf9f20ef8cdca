//! Chat history persistence, the dispatch port, and the send flow.

pub mod dispatcher;
pub mod history;
pub mod service;
