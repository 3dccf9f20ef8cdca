//! Application state wiring all services together.
//!
//! The services are generic over the key-value store and the dispatcher;
//! AppState pins them to the concrete infra implementations.

use std::path::PathBuf;

use acolheia_core::account::service::AuthService;
use acolheia_core::chat::service::ChatService;
use acolheia_core::storage::kv_store::KeyValueStore;
use acolheia_infra::chat_api::HttpChatDispatcher;
use acolheia_infra::config::{load_global_config, resolve_data_dir};
use acolheia_infra::memory::InMemoryKeyValueStore;
use acolheia_infra::sqlite::kv::SqliteKeyValueStore;
use acolheia_infra::sqlite::pool::DatabasePool;
use acolheia_types::config::GlobalConfig;
use acolheia_types::error::StorageError;

/// Storage backend chosen at startup.
///
/// SQLite under the data directory by default; process-local memory with
/// `--ephemeral`.
#[derive(Clone)]
pub enum AppStore {
    Sqlite(SqliteKeyValueStore),
    Memory(InMemoryKeyValueStore),
}

impl AppStore {
    pub fn backend_name(&self) -> &'static str {
        match self {
            AppStore::Sqlite(_) => "sqlite",
            AppStore::Memory(_) => "memory",
        }
    }
}

impl KeyValueStore for AppStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match self {
            AppStore::Sqlite(store) => store.get(key).await,
            AppStore::Memory(store) => store.get(key).await,
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        match self {
            AppStore::Sqlite(store) => store.set(key, value).await,
            AppStore::Memory(store) => store.set(key, value).await,
        }
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        match self {
            AppStore::Sqlite(store) => store.delete(key).await,
            AppStore::Memory(store) => store.delete(key).await,
        }
    }
}

pub type ConcreteAuthService = AuthService<AppStore>;
pub type ConcreteChatService = ChatService<AppStore, HttpChatDispatcher>;

/// Shared application state holding all services.
pub struct AppState {
    pub auth_service: ConcreteAuthService,
    pub chat_service: ConcreteChatService,
    pub config: GlobalConfig,
    pub data_dir: PathBuf,
    pub store: AppStore,
}

impl AppState {
    /// Initialize the application state: load config, open storage, wire services.
    pub async fn init(ephemeral: bool) -> anyhow::Result<Self> {
        let data_dir = resolve_data_dir();
        let config = load_global_config(&data_dir).await;

        let store = if ephemeral {
            AppStore::Memory(InMemoryKeyValueStore::new())
        } else {
            tokio::fs::create_dir_all(&data_dir).await?;
            let pool = DatabasePool::open_in(&data_dir).await?;
            AppStore::Sqlite(SqliteKeyValueStore::new(pool))
        };

        Self::with_store(store, config, data_dir)
    }

    /// Wire the services over an already opened store.
    pub fn with_store(
        store: AppStore,
        config: GlobalConfig,
        data_dir: PathBuf,
    ) -> anyhow::Result<Self> {
        let dispatcher = HttpChatDispatcher::new(&config.chat_api)?;

        tracing::debug!(
            data_dir = %data_dir.display(),
            backend = store.backend_name(),
            chat_api_configured = config.chat_api.is_complete(),
            "Application state initialized"
        );

        Ok(Self {
            auth_service: AuthService::new(store.clone()),
            chat_service: ChatService::new(store.clone(), dispatcher),
            config,
            data_dir,
            store,
        })
    }
}
