use axum::{Router, middleware, routing::get};
use tower_http::trace::TraceLayer;

use super::health;
use super::middleware::{logging_middleware, recovery_layer};
use super::state::AppState;
use super::users;

/// Routes for the user resource
pub fn create_users_router() -> Router<AppState> {
    Router::new()
        .route("/users", get(users::list_users).post(users::create_user))
        .route(
            "/users/{id}",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
}

/// Create the full router with application state
///
/// Layer order, outermost first: trace, logging, panic recovery.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check))
        .merge(create_users_router())
        .with_state(state)
        .layer(recovery_layer())
        .layer(middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
}
