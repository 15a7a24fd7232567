//! CLI module for the Users API
//!
//! Provides subcommands:
//! - `serve`: run the HTTP server
//! - `init-db`: create the SQLite schema (and optionally seed it), then exit

pub mod init_db;
pub mod serve;

use clap::{Parser, Subcommand};

use crate::config::AppConfig;
use crate::infrastructure::logging;

/// Users API - CRUD service for user records
#[derive(Parser)]
#[command(name = "users-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP server
    Serve(serve::ServeArgs),

    /// Create the database schema and exit
    InitDb(init_db::InitDbArgs),
}

/// Load `.env` and layered configuration, then install logging.
///
/// A broken configuration falls back to defaults with a warning.
pub(crate) fn load_config() -> AppConfig {
    dotenvy::dotenv().ok();

    let loaded = AppConfig::load();
    let config = loaded.as_ref().cloned().unwrap_or_default();
    logging::init_logging(&config.logging);

    if let Err(e) = loaded {
        tracing::warn!(error = %e, "Failed to load configuration, using defaults");
    }

    config
}
