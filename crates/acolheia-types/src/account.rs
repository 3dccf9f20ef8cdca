//! Account and session types.
//!
//! Accounts are `{email, password}` pairs keyed by the lowercased email.
//! A `Session` names the account currently active on the device.

use serde::{Deserialize, Serialize};

use std::fmt;

/// Normalize an email for storage and lookup.
///
/// Emails are compared case-insensitively everywhere, so they are always
/// stored lowercased. Nothing else is changed: whitespace typed around the
/// address stays part of the key.
pub fn normalize_email(email: &str) -> String {
    email.to_lowercase()
}

/// A registered credential pair.
///
/// The password is kept in plaintext; the account set is a local
/// convenience store, not an authentication system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Lowercased email, unique across the account set.
    pub email: String,
    pub password: String,
}

impl Account {
    /// Build an account, normalizing the email.
    pub fn new(email: &str, password: impl Into<String>) -> Self {
        Self {
            email: normalize_email(email),
            password: password.into(),
        }
    }

    /// Whether this account belongs to `email` (case-insensitive).
    pub fn matches_email(&self, email: &str) -> bool {
        self.email.to_lowercase() == normalize_email(email)
    }
}

/// The authenticated user on this device.
///
/// Returned by login and by the session store; callers pass it explicitly
/// to the chat layer instead of reading a global flag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Session {
    pub email: String,
}

impl Session {
    pub fn new(email: &str) -> Self {
        Self {
            email: normalize_email(email),
        }
    }
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.email)
    }
}

/// Input of the login action.
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Input of the registration action.
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}
