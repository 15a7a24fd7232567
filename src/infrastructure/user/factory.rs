//! User repository factory for runtime backend selection

use std::sync::Arc;

use tracing::{info, warn};

use crate::config::{StorageBackend, StorageConfig};
use crate::domain::DomainError;
use crate::domain::user::UserRepository;
use crate::infrastructure::database;

use super::{InMemoryUserRepository, SqliteUserRepository};

/// Build the repository selected by `config.backend`
///
/// For SQLite this connects, creates the schema if missing, applies the
/// optional seed file and runs the repository self-check.
pub async fn create_user_repository(
    config: &StorageConfig,
) -> Result<Arc<dyn UserRepository>, DomainError> {
    info!(backend = %config.backend, "Initializing user repository");

    match config.backend {
        StorageBackend::Memory => Ok(Arc::new(InMemoryUserRepository::new())),
        StorageBackend::Sqlite => {
            let pool = database::create_pool(&config.database_url, config.max_connections).await?;
            database::bootstrap_schema(&pool).await?;

            if let Some(seed_file) = config.seed_path() {
                if let Err(e) = database::seed(&pool, seed_file).await {
                    warn!(error = %e, file = %seed_file.display(), "Skipping seed data");
                }
            }

            let repo = SqliteUserRepository::new(pool).await?;
            Ok(Arc::new(repo))
        }
    }
}
