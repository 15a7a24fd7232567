//! User entity and related types

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::validation::{UserValidationError, parse_user_id, validate_email, validate_name};

/// Store-assigned user identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl FromStr for UserId {
    type Err = UserValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_user_id(s).map(Self)
    }
}

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Caller-controlled fields of a user, validated on construction
///
/// Used both to create a user and as the full replacement set on update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserFields {
    name: String,
    email: String,
}

impl UserFields {
    /// Validate and build the field set. Name is checked before email.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Self, UserValidationError> {
        let name = name.into();
        let email = email.into();

        validate_name(&name)?;
        validate_email(&email)?;

        Ok(Self { name, email })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

/// A stored user record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    /// Identifier assigned by the store
    id: UserId,
    name: String,
    email: String,
    /// Insert timestamp assigned by the store
    #[serde(skip_serializing_if = "Option::is_none")]
    created_at: Option<DateTime<Utc>>,
}

impl User {
    /// Build a record from its stored parts. Only repositories should call this.
    pub fn new(id: UserId, fields: UserFields, created_at: Option<DateTime<Utc>>) -> Self {
        Self {
            id,
            name: fields.name,
            email: fields.email,
            created_at,
        }
    }

    /// Rebuild a record exactly as the store holds it, without field validation
    pub fn from_stored(
        id: UserId,
        name: String,
        email: String,
        created_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            name,
            email,
            created_at,
        }
    }

    // Getters

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    /// Replace name and email. The id and creation timestamp are untouched.
    pub fn apply(&mut self, fields: UserFields) {
        self.name = fields.name;
        self.email = fields.email;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(name: &str, email: &str) -> UserFields {
        UserFields::new(name, email).unwrap()
    }

    #[test]
    fn test_user_id_from_str() {
        let id: UserId = "42".parse().unwrap();
        assert_eq!(id.value(), 42);
        assert_eq!(id.to_string(), "42");

        assert_eq!("x".parse::<UserId>(), Err(UserValidationError::InvalidId));
        assert_eq!("".parse::<UserId>(), Err(UserValidationError::MissingId));
    }

    #[test]
    fn test_fields_validation_order() {
        assert_eq!(
            UserFields::new("", "").unwrap_err(),
            UserValidationError::EmptyName
        );
        assert_eq!(
            UserFields::new("Alice", "").unwrap_err(),
            UserValidationError::EmptyEmail
        );
    }

    #[test]
    fn test_fields_keep_input_verbatim() {
        let f = fields(" Alice ", "alice@x.com");
        assert_eq!(f.name(), " Alice ");
        assert_eq!(f.email(), "alice@x.com");
    }

    #[test]
    fn test_apply_keeps_identity() {
        let created = Utc::now();
        let mut user = User::new(UserId::new(3), fields("Alice", "a@x.com"), Some(created));

        user.apply(fields("Bob", "b@x.com"));

        assert_eq!(user.id(), UserId::new(3));
        assert_eq!(user.name(), "Bob");
        assert_eq!(user.email(), "b@x.com");
        assert_eq!(user.created_at(), Some(created));
    }

    #[test]
    fn test_from_stored_keeps_blank_fields() {
        let user = User::from_stored(UserId::new(2), " ".to_string(), "b@x.com".to_string(), None);

        assert_eq!(user.name(), " ");
        assert_eq!(user.email(), "b@x.com");
    }

    #[test]
    fn test_user_serialization() {
        let user = User::new(UserId::new(1), fields("Alice", "alice@x.com"), None);

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 1, "name": "Alice", "email": "alice@x.com"})
        );
    }

    #[test]
    fn test_user_serialization_with_timestamp() {
        let user = User::new(UserId::new(1), fields("Alice", "alice@x.com"), Some(Utc::now()));

        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains("\"created_at\""));
    }
}
