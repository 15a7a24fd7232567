//! Infrastructure layer - Storage backends and process plumbing

pub mod database;
pub mod logging;
pub mod user;
