//! Application state shared by all handlers

use std::sync::Arc;

use crate::domain::user::UserRepository;

/// Application state holding the repository chosen at startup
#[derive(Clone, Debug)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
}

impl AppState {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }
}
