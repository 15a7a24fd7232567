//! User infrastructure module
//!
//! This module provides the two storage backends for user records:
//! an in-memory list and a SQLite table.

mod factory;
mod in_memory_repository;
mod sqlite_repository;

pub use factory::create_user_repository;
pub use in_memory_repository::InMemoryUserRepository;
pub use sqlite_repository::SqliteUserRepository;
