//! SQLite connection pool and schema bootstrap

use std::path::Path;
use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::info;

use crate::domain::DomainError;

/// Schema applied on startup; idempotent
pub const SCHEMA: &str = include_str!("../../sql/schema.sql");

/// Create a SQLite pool, creating the database file if it does not exist
pub async fn create_pool(
    database_url: &str,
    max_connections: u32,
) -> Result<SqlitePool, DomainError> {
    let options = SqliteConnectOptions::from_str(database_url)
        .map_err(|e| DomainError::storage(format!("Invalid database URL: {}", e)))?
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to connect to database: {}", e)))?;

    info!(url = %database_url, "Database connection established");

    Ok(pool)
}

/// Create the users table if it is missing
pub async fn bootstrap_schema(pool: &SqlitePool) -> Result<(), DomainError> {
    sqlx::raw_sql(SCHEMA)
        .execute(pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to create schema: {}", e)))?;

    info!("Users table ready");
    Ok(())
}

/// Execute a SQL seed file against the pool, returning the affected row count
pub async fn seed(pool: &SqlitePool, path: &Path) -> Result<u64, DomainError> {
    let script = tokio::fs::read_to_string(path).await.map_err(|e| {
        DomainError::internal(format!(
            "Could not read seed file '{}': {}",
            path.display(),
            e
        ))
    })?;

    let result = sqlx::raw_sql(&script)
        .execute(pool)
        .await
        .map_err(|e| DomainError::storage(format!("Could not seed data: {}", e)))?;

    info!(path = %path.display(), rows = result.rows_affected(), "Database seeded");

    Ok(result.rows_affected())
}

#[cfg(test)]
pub(crate) async fn memory_pool() -> SqlitePool {
    // Every connection to `sqlite::memory:` is a separate database, so pin the pool to one.
    SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap()
}
