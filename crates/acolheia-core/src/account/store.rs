//! Account store.
//!
//! The whole account set lives under [`ACCOUNTS_KEY`] as one JSON array.
//! Lookups are a linear scan; every mutation rewrites the array.

use acolheia_types::account::{Account, normalize_email};
use acolheia_types::error::{AuthError, StorageError};
use acolheia_types::storage::ACCOUNTS_KEY;
use tracing::{debug, info};

use crate::storage::kv_store::{KeyValueStore, read_json, write_json};

/// Stores `{email, password}` pairs, unique by lowercased email.
pub struct AccountStore<K: KeyValueStore> {
    kv: K,
}

impl<K: KeyValueStore> AccountStore<K> {
    pub fn new(kv: K) -> Self {
        Self { kv }
    }

    /// All accounts in insertion order. An absent key is an empty set.
    pub async fn list(&self) -> Result<Vec<Account>, StorageError> {
        Ok(read_json::<_, Vec<Account>>(&self.kv, ACCOUNTS_KEY)
            .await?
            .unwrap_or_default())
    }

    /// Find the account for `email` (case-insensitive).
    pub async fn find(&self, email: &str) -> Result<Option<Account>, StorageError> {
        let accounts = self.list().await?;
        Ok(accounts.into_iter().find(|a| a.matches_email(email)))
    }

    /// Register a new account.
    ///
    /// Fails with [`AuthError::AlreadyExists`] when the lowercased email is
    /// already taken; the stored set is left untouched in that case.
    pub async fn register(&self, email: &str, password: &str) -> Result<Account, AuthError> {
        let mut accounts = self.list().await?;
        let email = normalize_email(email);

        if accounts.iter().any(|a| a.matches_email(&email)) {
            debug!(%email, "Registration rejected, email already present");
            return Err(AuthError::AlreadyExists(email));
        }

        let account = Account::new(&email, password);
        accounts.push(account.clone());
        write_json(&self.kv, ACCOUNTS_KEY, &accounts).await?;

        info!(%email, total = accounts.len(), "Account registered");
        Ok(account)
    }

    /// Check a credential pair against the stored set.
    ///
    /// Plain string equality on the password. Succeeds only when the account
    /// exists and the password matches; the caller sets the session flag.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<Account, AuthError> {
        match self.find(email).await? {
            Some(account) if account.password == password => Ok(account),
            _ => {
                debug!(email = %normalize_email(email), "Authentication failed");
                Err(AuthError::InvalidCredentials)
            }
        }
    }
}
