//! Account registration, login and form validation.

pub mod service;
pub mod store;
pub mod validation;
