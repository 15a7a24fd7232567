//! In-memory user repository implementation

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;

use crate::domain::DomainError;
use crate::domain::user::{User, UserFields, UserId, UserRepository, user_not_found};

#[derive(Debug)]
struct Inner {
    /// Records in insertion order
    users: Vec<User>,
    /// Next id to hand out; ids are never reused
    next_id: i64,
}

/// In-memory implementation of UserRepository
///
/// A single mutex serialises every read and write of the list.
#[derive(Debug)]
pub struct InMemoryUserRepository {
    inner: Mutex<Inner>,
}

impl InMemoryUserRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                users: Vec::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn duplicate_email(email: &str) -> DomainError {
    DomainError::storage(format!("Email '{}' already exists", email))
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, fields: UserFields) -> Result<User, DomainError> {
        let mut inner = self.inner.lock().await;

        if inner.users.iter().any(|u| u.email() == fields.email()) {
            return Err(duplicate_email(fields.email()));
        }

        let id = UserId::new(inner.next_id);
        inner.next_id += 1;

        let user = User::new(id, fields, Some(Utc::now()));
        inner.users.push(user.clone());

        Ok(user)
    }

    async fn get(&self, id: UserId) -> Result<User, DomainError> {
        let inner = self.inner.lock().await;

        inner
            .users
            .iter()
            .find(|u| u.id() == id)
            .cloned()
            .ok_or_else(|| user_not_found(id))
    }

    async fn list(&self) -> Result<Vec<User>, DomainError> {
        let inner = self.inner.lock().await;
        Ok(inner.users.clone())
    }

    async fn update(&self, id: UserId, fields: UserFields) -> Result<User, DomainError> {
        let mut inner = self.inner.lock().await;

        let index = inner
            .users
            .iter()
            .position(|u| u.id() == id)
            .ok_or_else(|| user_not_found(id))?;

        let email_taken = inner
            .users
            .iter()
            .any(|u| u.email() == fields.email() && u.id() != id);

        if email_taken {
            return Err(duplicate_email(fields.email()));
        }

        let user = &mut inner.users[index];
        user.apply(fields);

        Ok(user.clone())
    }

    async fn delete(&self, id: UserId) -> Result<(), DomainError> {
        let mut inner = self.inner.lock().await;

        let index = inner
            .users
            .iter()
            .position(|u| u.id() == id)
            .ok_or_else(|| user_not_found(id))?;

        inner.users.remove(index);
        Ok(())
    }
}
