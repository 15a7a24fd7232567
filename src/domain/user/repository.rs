//! User repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::{User, UserFields, UserId};
use crate::domain::DomainError;

/// Repository trait for user storage
///
/// Implementations own the id → record mapping and hand out copies.
#[async_trait]
pub trait UserRepository: Send + Sync + Debug {
    /// Store a new user. The store assigns the id and creation timestamp.
    async fn create(&self, fields: UserFields) -> Result<User, DomainError>;

    /// Get a user by ID, failing with `NotFound` if absent
    async fn get(&self, id: UserId) -> Result<User, DomainError>;

    /// List all users in store-defined order
    async fn list(&self) -> Result<Vec<User>, DomainError>;

    /// Replace name and email of an existing user
    async fn update(&self, id: UserId, fields: UserFields) -> Result<User, DomainError>;

    /// Delete a user, failing with `NotFound` if absent
    async fn delete(&self, id: UserId) -> Result<(), DomainError>;
}

pub(crate) fn user_not_found(id: UserId) -> DomainError {
    DomainError::not_found(format!("User '{}' not found", id))
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    /// Mock user repository for testing
    #[derive(Debug, Default)]
    pub struct MockUserRepository {
        users: Arc<RwLock<Vec<User>>>,
        should_fail: Arc<RwLock<bool>>,
    }

    impl MockUserRepository {
        /// Create a new mock repository
        pub fn new() -> Self {
            Self::default()
        }

        /// Set whether operations should fail
        pub async fn set_should_fail(&self, fail: bool) {
            *self.should_fail.write().await = fail;
        }

        async fn check_should_fail(&self) -> Result<(), DomainError> {
            if *self.should_fail.read().await {
                return Err(DomainError::storage("Mock repository configured to fail"));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl UserRepository for MockUserRepository {
        async fn create(&self, fields: UserFields) -> Result<User, DomainError> {
            self.check_should_fail().await?;
            let mut users = self.users.write().await;
            let id = UserId::new(users.len() as i64 + 1);
            let user = User::new(id, fields, None);
            users.push(user.clone());
            Ok(user)
        }

        async fn get(&self, id: UserId) -> Result<User, DomainError> {
            self.check_should_fail().await?;
            let users = self.users.read().await;
            users
                .iter()
                .find(|u| u.id() == id)
                .cloned()
                .ok_or_else(|| user_not_found(id))
        }

        async fn list(&self) -> Result<Vec<User>, DomainError> {
            self.check_should_fail().await?;
            Ok(self.users.read().await.clone())
        }

        async fn update(&self, id: UserId, fields: UserFields) -> Result<User, DomainError> {
            self.check_should_fail().await?;
            let mut users = self.users.write().await;
            let user = users
                .iter_mut()
                .find(|u| u.id() == id)
                .ok_or_else(|| user_not_found(id))?;
            user.apply(fields);
            Ok(user.clone())
        }

        async fn delete(&self, id: UserId) -> Result<(), DomainError> {
            self.check_should_fail().await?;
            let mut users = self.users.write().await;
            let before = users.len();
            users.retain(|u| u.id() != id);

            if users.len() == before {
                return Err(user_not_found(id));
            }
            Ok(())
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        fn fields(name: &str, email: &str) -> UserFields {
            UserFields::new(name, email).unwrap()
        }

        #[tokio::test]
        async fn test_create_and_get() {
            let repo = MockUserRepository::new();

            let created = repo.create(fields("Alice", "alice@x.com")).await.unwrap();
            let retrieved = repo.get(created.id()).await.unwrap();

            assert_eq!(retrieved, created);
        }

        #[tokio::test]
        async fn test_should_fail() {
            let repo = MockUserRepository::new();
            repo.set_should_fail(true).await;

            let result = repo.list().await;
            assert!(matches!(result, Err(DomainError::Storage { .. })));
        }

        #[tokio::test]
        async fn test_delete_missing() {
            let repo = MockUserRepository::new();

            let result = repo.delete(UserId::new(1)).await;
            assert!(result.unwrap_err().is_not_found());
        }
    }
}
