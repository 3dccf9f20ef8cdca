//! Chat dispatcher trait.
//!
//! The dispatcher sends one user message to the remote conversational API
//! and returns the reply text. Implementations live in acolheia-infra.

use std::future::Future;

use acolheia_types::error::DispatchError;

/// Port for the remote chat endpoint.
///
/// One call to [`dispatch`](ChatDispatcher::dispatch) issues exactly one
/// outbound request. No retry, backoff or cancellation.
pub trait ChatDispatcher: Send + Sync {
    /// Fail with [`DispatchError::Configuration`] when required settings are
    /// missing. Checked before a message is recorded or sent.
    fn ensure_configured(&self) -> Result<(), DispatchError>;

    /// Send `message` and return the reply text.
    fn dispatch(&self, message: &str)
    -> impl Future<Output = Result<String, DispatchError>> + Send;
}
