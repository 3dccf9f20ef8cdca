//! Form validation for the account and chat actions.
//!
//! Runs before any storage or network access.

use std::sync::LazyLock;

use acolheia_types::account::{LoginForm, RegistrationForm};
use acolheia_types::error::ValidationError;
use regex::Regex;

/// Minimum password length accepted at registration.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Loose shape check: something, `@`, something, `.`, something.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email regex is valid"));

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

pub fn is_plausible_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

pub fn validate_login(form: &LoginForm) -> Result<(), ValidationError> {
    if is_blank(&form.email) || form.password.is_empty() {
        return Err(ValidationError::MissingLoginFields);
    }
    Ok(())
}

/// Checks run in order: presence, email shape, length, confirmation.
pub fn validate_registration(form: &RegistrationForm) -> Result<(), ValidationError> {
    if is_blank(&form.email) || form.password.is_empty() || form.confirm_password.is_empty() {
        return Err(ValidationError::MissingRegistrationFields);
    }
    if !is_plausible_email(&form.email) {
        return Err(ValidationError::InvalidEmail);
    }
    if form.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort {
            min: MIN_PASSWORD_LEN,
        });
    }
    if form.password != form.confirm_password {
        return Err(ValidationError::PasswordMismatch);
    }
    Ok(())
}

pub fn validate_reset_email(email: &str) -> Result<(), ValidationError> {
    if is_blank(email) {
        return Err(ValidationError::MissingResetEmail);
    }
    Ok(())
}

pub fn validate_message(text: &str) -> Result<(), ValidationError> {
    if is_blank(text) {
        return Err(ValidationError::EmptyMessage);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registration(email: &str, password: &str, confirm: &str) -> RegistrationForm {
        RegistrationForm {
            email: email.to_string(),
            password: password.to_string(),
            confirm_password: confirm.to_string(),
        }
    }

    #[test]
    fn test_login_requires_both_fields() {
        let empty = LoginForm::default();
        assert_eq!(validate_login(&empty), Err(ValidationError::MissingLoginFields));

        let no_password = LoginForm {
            email: "a@x.com".to_string(),
            password: String::new(),
        };
        assert_eq!(
            validate_login(&no_password),
            Err(ValidationError::MissingLoginFields)
        );

        let ok = LoginForm {
            email: "a@x.com".to_string(),
            password: "x".to_string(),
        };
        assert!(validate_login(&ok).is_ok());
    }

    #[test]
    fn test_registration_order_of_checks() {
        assert_eq!(
            validate_registration(&registration("", "secret1", "secret1")),
            Err(ValidationError::MissingRegistrationFields)
        );
        assert_eq!(
            validate_registration(&registration("not-an-email", "abc", "xyz")),
            Err(ValidationError::InvalidEmail)
        );
        assert_eq!(
            validate_registration(&registration("a@x.com", "abc", "xyz")),
            Err(ValidationError::PasswordTooShort { min: 6 })
        );
        assert_eq!(
            validate_registration(&registration("a@x.com", "secret1", "secret2")),
            Err(ValidationError::PasswordMismatch)
        );
        assert!(validate_registration(&registration("a@x.com", "secret1", "secret1")).is_ok());
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_plausible_email("a@x.com"));
        assert!(is_plausible_email("first.last@sub.domain.org"));
        assert!(is_plausible_email(" a@x.com"));
        assert!(!is_plausible_email("a@x"));
        assert!(!is_plausible_email("@x.com"));
        assert!(!is_plausible_email("ax.com"));
    }

    #[test]
    fn test_password_length_counts_characters() {
        // Six characters, more than six bytes.
        assert!(validate_registration(&registration("a@x.com", "çãõéíú", "çãõéíú")).is_ok());
    }

    #[test]
    fn test_reset_and_message() {
        assert_eq!(
            validate_reset_email("   "),
            Err(ValidationError::MissingResetEmail)
        );
        assert!(validate_reset_email("a@x.com").is_ok());
        assert_eq!(validate_message(" \n"), Err(ValidationError::EmptyMessage));
        assert!(validate_message("oi").is_ok());
    }
}
