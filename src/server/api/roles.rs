use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode};

use crate::server::AppState;
use crate::server::extract::{IdPath, JsonBody};
use crate::server::response::{ApiError, ApiResult, Created, StoreOptionExt};
use crate::types::Role;

pub async fn list_roles(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Role>>> {
    Ok(Json(state.store.list_roles()?))
}

pub async fn get_role(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath<i64>,
) -> ApiResult<Json<Role>> {
    let role = state.store.get_role(id)?.or_not_found("Role not found")?;
    Ok(Json(role))
}

pub async fn create_role(
    State(state): State<Arc<AppState>>,
    JsonBody(role): JsonBody<Role>,
) -> ApiResult<Created> {
    let id = state.store.create_role(&role)?;
    tracing::debug!("Created role {id} ({})", role.role_name);
    Ok(Created::new("role_id", id))
}

/// Replaces a role. The bootstrap roles cannot be modified.
pub async fn update_role(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath<i64>,
    JsonBody(mut role): JsonBody<Role>,
) -> ApiResult<Json<Role>> {
    let stored = state.store.get_role(id)?.or_not_found("Role not found")?;
    if Role::is_reserved_name(&stored.role_name) {
        tracing::debug!("Refused to modify reserved role {}", stored.role_name);
        return Err(ApiError::unauthorized(
            "Modifying one of the base roles is not authorized",
        ));
    }

    role.role_id = id;
    let updated = state.store.update_role(&role)?;
    tracing::debug!("Updated role {id}");
    Ok(Json(updated))
}

pub async fn delete_role(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath<i64>,
) -> ApiResult<StatusCode> {
    state.store.delete_role(id)?;
    tracing::debug!("Deleted role {id}");
    Ok(StatusCode::OK)
}
