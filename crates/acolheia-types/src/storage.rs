//! Storage keys shared by every key-value backend.
//!
//! The layout is flat: one key for the account set, one for the session
//! flag, and one history key per account.

use crate::account::normalize_email;

/// Key holding the JSON array of accounts.
pub const ACCOUNTS_KEY: &str = "@acolheia_user_db";

/// Key holding the email of the logged-in account.
pub const SESSION_KEY: &str = "@acolheia_token";

/// Prefix of the per-account chat history keys.
pub const CHAT_HISTORY_PREFIX: &str = "@acolheia_chat_history_";

/// History key for an account: prefix + lowercased email.
pub fn history_key(email: &str) -> String {
    format!("{CHAT_HISTORY_PREFIX}{}", normalize_email(email))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_key_is_case_insensitive() {
        assert_eq!(history_key("A@X.com"), "@acolheia_chat_history_a@x.com");
        assert_eq!(history_key("a@x.com"), history_key("A@X.COM"));
    }
}
