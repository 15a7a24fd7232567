//! User validation utilities

use thiserror::Error;

/// Errors that can occur during user validation
///
/// The display strings are returned verbatim to HTTP clients.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum UserValidationError {
    #[error("Missing ID parameter")]
    MissingId,

    #[error("Invalid ID")]
    InvalidId,

    #[error("Name is required")]
    EmptyName,

    #[error("Email is required")]
    EmptyEmail,
}

/// Parse a user ID from its textual (path segment) form
///
/// Rules:
/// - Cannot be empty
/// - Must be a base-10 integer that fits in an `i64`
pub fn parse_user_id(raw: &str) -> Result<i64, UserValidationError> {
    if is_blank(raw) {
        return Err(UserValidationError::MissingId);
    }

    raw.parse::<i64>().map_err(|_| UserValidationError::InvalidId)
}

/// Validate a user name
pub fn validate_name(name: &str) -> Result<(), UserValidationError> {
    if is_blank(name) {
        return Err(UserValidationError::EmptyName);
    }

    Ok(())
}

/// Validate a user email
///
/// Only presence is checked; uniqueness is the store's job.
pub fn validate_email(email: &str) -> Result<(), UserValidationError> {
    if is_blank(email) {
        return Err(UserValidationError::EmptyEmail);
    }

    Ok(())
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
