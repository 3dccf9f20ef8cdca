//! Key-value store trait.
//!
//! Defines the interface for the device-wide string key-value storage that
//! accounts, the session flag and chat histories are persisted in.
//! Implementations live in acolheia-infra.

use std::future::Future;
use std::sync::Arc;

use acolheia_types::error::StorageError;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Trait for persistent string key-value storage.
///
/// Values are opaque strings; the stores above it encode JSON into them.
/// Every call may fail with a [`StorageError`]. Per-key `get`/`set` are
/// atomic; nothing else is guaranteed.
/// Uses RPITIT (native async fn in traits, Rust 2024 edition).
pub trait KeyValueStore: Send + Sync {
    /// Get a value by key. Returns None if the key does not exist.
    fn get(
        &self,
        key: &str,
    ) -> impl Future<Output = Result<Option<String>, StorageError>> + Send;

    /// Set a value for a key (upsert).
    fn set(&self, key: &str, value: &str)
    -> impl Future<Output = Result<(), StorageError>> + Send;

    /// Delete a key. No-op if key does not exist.
    fn delete(&self, key: &str) -> impl Future<Output = Result<(), StorageError>> + Send;
}

impl<K: KeyValueStore> KeyValueStore for Arc<K> {
    fn get(
        &self,
        key: &str,
    ) -> impl Future<Output = Result<Option<String>, StorageError>> + Send {
        (**self).get(key)
    }

    fn set(
        &self,
        key: &str,
        value: &str,
    ) -> impl Future<Output = Result<(), StorageError>> + Send {
        (**self).set(key, value)
    }

    fn delete(&self, key: &str) -> impl Future<Output = Result<(), StorageError>> + Send {
        (**self).delete(key)
    }
}

/// Read and decode a JSON value.
///
/// A missing key is `Ok(None)`. A present but undecodable value is
/// [`StorageError::Corrupt`]: callers must not mistake it for an empty value.
pub async fn read_json<K, T>(store: &K, key: &str) -> Result<Option<T>, StorageError>
where
    K: KeyValueStore + ?Sized,
    T: DeserializeOwned,
{
    match store.get(key).await? {
        Some(raw) => serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| StorageError::Corrupt {
                key: key.to_string(),
                reason: e.to_string(),
            }),
        None => Ok(None),
    }
}

/// Encode a value as JSON and store it under `key`.
pub async fn write_json<K, T>(store: &K, key: &str, value: &T) -> Result<(), StorageError>
where
    K: KeyValueStore + ?Sized,
    T: Serialize + ?Sized,
{
    let raw = serde_json::to_string(value)
        .map_err(|e| StorageError::Backend(format!("failed to serialize value: {e}")))?;
    store.set(key, &raw).await
}
