//! Session flag persistence.
//!
//! The flag is the raw (non-JSON) lowercased email of the logged-in account
//! under [`SESSION_KEY`]. Callers get an explicit [`Session`] value back and
//! own its lifecycle.

use acolheia_types::account::Session;
use acolheia_types::error::StorageError;
use acolheia_types::storage::SESSION_KEY;
use tracing::debug;

use crate::storage::kv_store::KeyValueStore;

pub struct SessionStore<K: KeyValueStore> {
    kv: K,
}

impl<K: KeyValueStore> SessionStore<K> {
    pub fn new(kv: K) -> Self {
        Self { kv }
    }

    /// Persist `email` as the active session.
    pub async fn set_session(&self, email: &str) -> Result<Session, StorageError> {
        let session = Session::new(email);
        self.kv.set(SESSION_KEY, &session.email).await?;
        debug!(email = %session.email, "Session flag set");
        Ok(session)
    }

    /// The active session, if any. A blank flag counts as no session.
    pub async fn get_session(&self) -> Result<Option<Session>, StorageError> {
        let flag = self.kv.get(SESSION_KEY).await?;
        Ok(flag
            .filter(|email| !email.trim().is_empty())
            .map(|email| Session::new(&email)))
    }

    /// Remove the session flag. No-op when nobody is logged in.
    pub async fn clear_session(&self) -> Result<(), StorageError> {
        self.kv.delete(SESSION_KEY).await?;
        debug!("Session flag cleared");
        Ok(())
    }
}
