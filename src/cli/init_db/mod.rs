//! Init-db command - creates the SQLite schema and exits

use anyhow::{Context, bail};
use clap::Args;
use tracing::info;

use crate::config::{StorageBackend, StorageConfig};
use crate::infrastructure::database;
use crate::infrastructure::user::SqliteUserRepository;

/// Arguments for the init-db command
#[derive(Args, Clone, Debug, Default)]
pub struct InitDbArgs {
    /// Also apply the configured seed file
    #[arg(long)]
    pub seed: bool,
}

/// Create the schema, optionally seed, and run the repository self-check
pub async fn run(args: InitDbArgs) -> anyhow::Result<()> {
    let config = super::load_config();
    init_database(&config.storage, args.seed).await
}

async fn init_database(storage: &StorageConfig, seed: bool) -> anyhow::Result<()> {
    if storage.backend != StorageBackend::Sqlite {
        bail!("init-db requires the sqlite backend, got '{}'", storage.backend);
    }

    let pool = database::create_pool(&storage.database_url, storage.max_connections).await?;
    database::bootstrap_schema(&pool).await?;

    if seed {
        let seed_file = storage
            .seed_path()
            .context("--seed given but storage.seed_file is not configured")?;
        database::seed(&pool, seed_file).await?;
    }

    SqliteUserRepository::new(pool).await?;
    info!(url = %storage.database_url, "Database initialized");

    Ok(())
}
