//! Interactive prompts for values not given on the command line.
//!
//! Empty answers are allowed: the form validation reports missing fields
//! with the same messages as flags left blank.

use anyhow::Result;
use dialoguer::{Input, Password};

/// Use `value` if given, otherwise ask for it.
pub fn text_or_prompt(value: Option<String>, label: &str) -> Result<String> {
    match value {
        Some(v) => Ok(v),
        None => Ok(Input::<String>::new()
            .with_prompt(label)
            .allow_empty(true)
            .interact_text()?),
    }
}

/// Use `value` if given, otherwise ask for it with hidden input.
pub fn secret_or_prompt(value: Option<String>, label: &str) -> Result<String> {
    match value {
        Some(v) => Ok(v),
        None => Ok(Password::new()
            .with_prompt(label)
            .allow_empty_password(true)
            .interact()?),
    }
}
