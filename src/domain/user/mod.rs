//! User domain
//!
//! This module provides domain types and traits for user records,
//! including the entity, input validation, and the repository trait.

mod entity;
mod repository;
mod validation;

pub use entity::{User, UserFields, UserId};
pub use repository::UserRepository;
pub(crate) use repository::user_not_found;
pub use validation::{UserValidationError, parse_user_id, validate_email, validate_name};

#[cfg(test)]
pub use repository::mock::MockUserRepository;
