//! In-memory key-value store.
//!
//! Process-local and lost on exit. Used for `--ephemeral` runs and tests.
//! Clones share the same map.

use std::sync::Arc;

use acolheia_core::storage::kv_store::KeyValueStore;
use acolheia_types::error::StorageError;
use dashmap::DashMap;

#[derive(Clone, Default)]
pub struct InMemoryKeyValueStore {
    entries: Arc<DashMap<String, String>>,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for InMemoryKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).map(|v| v.value().clone()))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use acolheia_core::account::service::AuthService;
    use acolheia_types::account::{LoginForm, RegistrationForm};

    #[tokio::test]
    async fn test_clones_share_entries() {
        let store = InMemoryKeyValueStore::new();
        let clone = store.clone();
        store.set("k", "v").await.unwrap();
        assert_eq!(clone.get("k").await.unwrap().as_deref(), Some("v"));
        clone.delete("k").await.unwrap();
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_auth_service_over_memory() {
        let store = InMemoryKeyValueStore::new();
        let auth = AuthService::new(store.clone());

        auth.register(&RegistrationForm {
            email: "a@x.com".to_string(),
            password: "secret1".to_string(),
            confirm_password: "secret1".to_string(),
        })
        .await
        .unwrap();
        let session = auth
            .login(&LoginForm {
                email: "A@X.com".to_string(),
                password: "secret1".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(session.email, "a@x.com");
        assert_eq!(store.len(), 2);
    }
}
