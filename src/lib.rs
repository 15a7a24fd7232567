//! Users API
//!
//! A small HTTP service exposing CRUD operations on user records with
//! interchangeable storage backends:
//! - SQLite, with a schema self-check at startup
//! - In-memory, guarded by a single mutex

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use api::state::AppState;
use infrastructure::user::create_user_repository;

/// Build application state from configuration
pub async fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    let users = create_user_repository(&config.storage).await?;
    Ok(AppState::new(users))
}
