//! SQLite user repository implementation

use async_trait::async_trait;
use chrono::NaiveDateTime;
use sqlx::sqlite::{SqlitePool, SqliteRow};
use sqlx::{Executor, Row};
use tracing::debug;

use crate::domain::DomainError;
use crate::domain::user::{User, UserFields, UserId, UserRepository, user_not_found};

const CREATE_USER: &str =
    "INSERT INTO users (name, email) VALUES (?, ?) RETURNING id, name, email, created_at";
const GET_USER_BY_ID: &str = "SELECT id, name, email, created_at FROM users WHERE id = ?";
const LIST_USERS: &str = "SELECT id, name, email, created_at FROM users ORDER BY id";
const UPDATE_USER: &str =
    "UPDATE users SET name = ?, email = ? WHERE id = ? RETURNING id, name, email, created_at";
const DELETE_USER: &str = "DELETE FROM users WHERE id = ?";

const STATEMENTS: [&str; 5] = [CREATE_USER, GET_USER_BY_ID, LIST_USERS, UPDATE_USER, DELETE_USER];

/// SQLite implementation of UserRepository
#[derive(Debug, Clone)]
pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    /// Create a repository after checking the schema it depends on
    ///
    /// Fails if the `users` table is missing or any statement does not
    /// prepare against the current schema.
    pub async fn new(pool: SqlitePool) -> Result<Self, DomainError> {
        let repo = Self { pool };

        repo.validate_schema().await?;
        repo.validate_statements().await?;

        Ok(repo)
    }

    async fn validate_schema(&self) -> Result<(), DomainError> {
        let table: Option<String> = sqlx::query_scalar(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name = 'users'",
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Schema validation failed: {}", e)))?;

        if table.is_none() {
            return Err(DomainError::storage("Schema validation failed: users table does not exist"));
        }

        Ok(())
    }

    async fn validate_statements(&self) -> Result<(), DomainError> {
        for statement in STATEMENTS {
            (&self.pool).prepare(statement).await.map_err(|e| {
                DomainError::storage(format!("Invalid query '{}': {}", statement, e))
            })?;
        }

        debug!(count = STATEMENTS.len(), "User statements validated");
        Ok(())
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn create(&self, fields: UserFields) -> Result<User, DomainError> {
        let row = sqlx::query(CREATE_USER)
            .bind(fields.name())
            .bind(fields.email())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| write_error("create", fields.email(), e))?;

        row_to_user(&row)
    }

    async fn get(&self, id: UserId) -> Result<User, DomainError> {
        let row = sqlx::query(GET_USER_BY_ID)
            .bind(id.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to get user: {}", e)))?;

        match row {
            Some(row) => row_to_user(&row),
            None => Err(user_not_found(id)),
        }
    }

    async fn list(&self) -> Result<Vec<User>, DomainError> {
        let rows = sqlx::query(LIST_USERS)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to list users: {}", e)))?;

        rows.iter().map(row_to_user).collect()
    }

    async fn update(&self, id: UserId, fields: UserFields) -> Result<User, DomainError> {
        let row = sqlx::query(UPDATE_USER)
            .bind(fields.name())
            .bind(fields.email())
            .bind(id.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| write_error("update", fields.email(), e))?;

        match row {
            Some(row) => row_to_user(&row),
            None => Err(user_not_found(id)),
        }
    }

    async fn delete(&self, id: UserId) -> Result<(), DomainError> {
        let result = sqlx::query(DELETE_USER)
            .bind(id.value())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to delete user: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(user_not_found(id));
        }

        Ok(())
    }
}

fn write_error(action: &str, email: &str, err: sqlx::Error) -> DomainError {
    let unique_violation = err
        .as_database_error()
        .is_some_and(|db| db.is_unique_violation());

    if unique_violation {
        DomainError::storage(format!("Email '{}' already exists", email))
    } else {
        DomainError::storage(format!("Failed to {} user: {}", action, err))
    }
}

fn row_to_user(row: &SqliteRow) -> Result<User, DomainError> {
    let id: i64 = row.try_get("id")?;
    let name: String = row.try_get("name")?;
    let email: String = row.try_get("email")?;
    let created_at: Option<NaiveDateTime> = row.try_get("created_at")?;

    Ok(User::from_stored(
        UserId::new(id),
        name,
        email,
        created_at.map(|ts| ts.and_utc()),
    ))
}
