//! Account action service.
//!
//! Orchestrates the register, login, logout and password-reset actions:
//! validates the form, then delegates to the account and session stores.

use acolheia_types::account::{Account, LoginForm, RegistrationForm, Session, normalize_email};
use acolheia_types::error::{AuthError, StorageError};
use tracing::info;

use crate::account::store::AccountStore;
use crate::account::validation::{validate_login, validate_registration, validate_reset_email};
use crate::session::SessionStore;
use crate::storage::kv_store::KeyValueStore;

/// Service behind the account actions.
///
/// Generic over the key-value port; both stores share the same backend.
pub struct AuthService<K: KeyValueStore> {
    accounts: AccountStore<K>,
    sessions: SessionStore<K>,
}

impl<K: KeyValueStore + Clone> AuthService<K> {
    pub fn new(kv: K) -> Self {
        Self {
            accounts: AccountStore::new(kv.clone()),
            sessions: SessionStore::new(kv),
        }
    }
}

impl<K: KeyValueStore> AuthService<K> {
    /// Access the account store.
    pub fn accounts(&self) -> &AccountStore<K> {
        &self.accounts
    }

    /// Access the session store.
    pub fn sessions(&self) -> &SessionStore<K> {
        &self.sessions
    }

    /// Validate the form and register the account.
    pub async fn register(&self, form: &RegistrationForm) -> Result<Account, AuthError> {
        validate_registration(form)?;
        self.accounts.register(&form.email, &form.password).await
    }

    /// Validate, authenticate and mark the account as the active session.
    pub async fn login(&self, form: &LoginForm) -> Result<Session, AuthError> {
        validate_login(form)?;
        let account = self
            .accounts
            .authenticate(&form.email, &form.password)
            .await?;
        let session = self.sessions.set_session(&account.email).await?;
        info!(email = %session.email, "Logged in");
        Ok(session)
    }

    /// Clear the active session. Returns who was logged in, if anyone.
    pub async fn logout(&self) -> Result<Option<Session>, StorageError> {
        let previous = self.sessions.get_session().await?;
        self.sessions.clear_session().await?;
        if let Some(session) = &previous {
            info!(email = %session.email, "Logged out");
        }
        Ok(previous)
    }

    pub async fn current_session(&self) -> Result<Option<Session>, StorageError> {
        self.sessions.get_session().await
    }

    /// Record a password reset request.
    ///
    /// There is no reset backend: the request is validated and logged, and
    /// no stored account is touched.
    pub async fn request_password_reset(&self, email: &str) -> Result<(), AuthError> {
        validate_reset_email(email)?;
        let email = normalize_email(email);
        let known = self.accounts.find(&email).await?.is_some();
        info!(%email, known, "Password reset requested");
        Ok(())
    }
}
