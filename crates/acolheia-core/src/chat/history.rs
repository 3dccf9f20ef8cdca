//! Per-account chat history persistence.
//!
//! Each account's transcript is one JSON array under
//! `@acolheia_chat_history_<lowercased email>`. The whole array is rewritten
//! on every append; last write wins.

use acolheia_types::chat::{ChatMessage, initial_history};
use acolheia_types::error::StorageError;
use acolheia_types::storage::history_key;
use tracing::debug;

use crate::storage::kv_store::{KeyValueStore, read_json, write_json};

pub struct HistoryStore<K: KeyValueStore> {
    kv: K,
}

impl<K: KeyValueStore> HistoryStore<K> {
    pub fn new(kv: K) -> Self {
        Self { kv }
    }

    /// Load the transcript for `email`.
    ///
    /// With nothing stored, returns the one-element greeting transcript
    /// (without writing it). A stored but unreadable transcript is an error.
    pub async fn load_history(&self, email: &str) -> Result<Vec<ChatMessage>, StorageError> {
        let key = history_key(email);
        match read_json::<_, Vec<ChatMessage>>(&self.kv, &key).await? {
            Some(messages) => {
                debug!(%key, count = messages.len(), "Loaded chat history");
                Ok(messages)
            }
            None => {
                debug!(%key, "No stored history, starting from greeting");
                Ok(initial_history())
            }
        }
    }

    /// Persist a full transcript for `email`.
    ///
    /// An empty transcript is never written, so a half-loaded working copy
    /// can not clobber what is stored.
    pub async fn save_history(
        &self,
        email: &str,
        messages: &[ChatMessage],
    ) -> Result<(), StorageError> {
        if messages.is_empty() {
            debug!(email, "Skipping save of empty history");
            return Ok(());
        }
        write_json(&self.kv, &history_key(email), messages).await
    }

    /// Append `message` to the working transcript and persist the result.
    ///
    /// Returns the updated transcript. On a storage failure the caller keeps
    /// its previous copy.
    pub async fn append_and_persist(
        &self,
        email: &str,
        mut history: Vec<ChatMessage>,
        message: ChatMessage,
    ) -> Result<Vec<ChatMessage>, StorageError> {
        history.push(message);
        self.save_history(email, &history).await?;
        Ok(history)
    }
}
