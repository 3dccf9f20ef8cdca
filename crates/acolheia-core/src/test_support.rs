//! In-crate test doubles for the storage and dispatch ports.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use acolheia_types::error::{DispatchError, StorageError};

use crate::chat::dispatcher::ChatDispatcher;
use crate::storage::kv_store::KeyValueStore;

/// HashMap-backed store that counts writes and can be told to fail.
#[derive(Default)]
pub struct MemoryKv {
    values: Mutex<HashMap<String, String>>,
    writes: AtomicUsize,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl MemoryKv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_raw(self, key: &str, value: &str) -> Self {
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        self
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }
}

impl KeyValueStore for MemoryKv {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StorageError::Backend("read failed".to_string()));
        }
        Ok(self.values.lock().unwrap().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::Backend("write failed".to_string()));
        }
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::Backend("write failed".to_string()));
        }
        self.values.lock().unwrap().remove(key);
        Ok(())
    }
}

/// Dispatcher that replays queued results and records what it was sent.
#[derive(Default)]
pub struct ScriptedDispatcher {
    replies: Mutex<VecDeque<Result<String, DispatchError>>>,
    sent: Mutex<Vec<String>>,
    missing: Vec<String>,
}

impl ScriptedDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// A dispatcher whose configuration lacks the given settings.
    pub fn unconfigured(missing: &[&str]) -> Self {
        Self {
            missing: missing.iter().map(|s| s.to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn reply(self, result: Result<&str, DispatchError>) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(result.map(str::to_string));
        self
    }

    pub fn sent(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }
}

impl ChatDispatcher for ScriptedDispatcher {
    fn ensure_configured(&self) -> Result<(), DispatchError> {
        if self.missing.is_empty() {
            Ok(())
        } else {
            Err(DispatchError::Configuration {
                missing: self.missing.clone(),
            })
        }
    }

    async fn dispatch(&self, message: &str) -> Result<String, DispatchError> {
        self.sent.lock().unwrap().push(message.to_string());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(DispatchError::Network("no scripted reply".to_string())))
    }
}
