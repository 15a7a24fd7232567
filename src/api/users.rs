//! User CRUD endpoints
//!
//! Each handler validates its inputs, makes exactly one repository call and
//! maps the outcome to a status code.

use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;
use tracing::{debug, error};

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::DomainError;
use crate::domain::user::{User, UserFields, UserId};

pub const USER_NOT_FOUND: &str = "User not found";

/// Body of POST /users and PUT /users/{id}
///
/// Missing and `null` fields are treated as empty strings so that they fail
/// the "is required" checks instead of the body decode.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserPayload {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl TryFrom<UserPayload> for UserFields {
    type Error = ApiError;

    fn try_from(payload: UserPayload) -> Result<Self, Self::Error> {
        Ok(UserFields::new(
            payload.name.unwrap_or_default(),
            payload.email.unwrap_or_default(),
        )?)
    }
}

fn parse_id(raw: &str) -> Result<UserId, ApiError> {
    Ok(raw.parse::<UserId>()?)
}

/// Map a repository failure on a single-record operation
fn lookup_error(err: DomainError, failure: &'static str) -> ApiError {
    if err.is_not_found() {
        return ApiError::not_found(USER_NOT_FOUND);
    }

    error!(error = %err, "{}", failure);
    ApiError::internal(failure)
}

/// GET /users
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    let users = state.users.list().await.map_err(|e| {
        error!(error = %e, "Failed to fetch users");
        ApiError::internal("Failed to fetch users")
    })?;

    debug!(count = users.len(), "Listed users");
    Ok(Json(users))
}

/// POST /users
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<UserPayload>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let fields = UserFields::try_from(payload)?;

    let user = state.users.create(fields).await.map_err(|e| {
        error!(error = %e, "Failed to create user");
        ApiError::internal("Failed to create user")
    })?;

    debug!(id = %user.id(), "Created user");
    Ok((StatusCode::CREATED, Json(user)))
}

/// GET /users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<User>, ApiError> {
    let id = parse_id(&id)?;

    let user = state
        .users
        .get(id)
        .await
        .map_err(|e| lookup_error(e, "Failed to fetch user"))?;

    Ok(Json(user))
}

/// PUT /users/{id}
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<UserPayload>, ApiError>,
) -> Result<Json<User>, ApiError> {
    // The id is checked before the body is looked at.
    let id = parse_id(&id)?;
    let Json(payload) = body?;
    let fields = UserFields::try_from(payload)?;

    let user = state
        .users
        .update(id, fields)
        .await
        .map_err(|e| lookup_error(e, "Failed to update user"))?;

    debug!(id = %id, "Updated user");
    Ok(Json(user))
}

/// DELETE /users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;

    state
        .users
        .delete(id)
        .await
        .map_err(|e| lookup_error(e, "Failed to delete user"))?;

    debug!(id = %id, "Deleted user");
    Ok(StatusCode::NO_CONTENT)
}
