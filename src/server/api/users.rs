use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode};

use crate::server::AppState;
use crate::server::dto::ScheduleDto;
use crate::server::extract::{IdPath, JsonBody};
use crate::server::response::{ApiError, ApiResult, Created, StoreOptionExt};
use crate::types::{Comment, Contract, Function, Project, Role, User};

pub async fn list_users(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<User>>> {
    Ok(Json(state.store.list_users()?))
}

pub async fn get_user(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath<i64>,
) -> ApiResult<Json<User>> {
    let user = state.store.get_user(id)?.or_not_found("User not found")?;
    Ok(Json(user))
}

pub async fn create_user(
    State(state): State<Arc<AppState>>,
    JsonBody(mut user): JsonBody<User>,
) -> ApiResult<Created> {
    if user.password.is_empty() {
        return Err(ApiError::bad_request("Password is required"));
    }

    user.password = state.hasher.hash(&user.password)?;
    let id = state.store.create_user(&user)?;

    tracing::debug!("Created user {id} ({})", user.mail);
    Ok(Created::new("user_id", id))
}

/// Replaces a user's profile. The stored password hash is always kept.
pub async fn update_user(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath<i64>,
    JsonBody(mut user): JsonBody<User>,
) -> ApiResult<Json<User>> {
    let existing = state.store.get_user(id)?.or_not_found("User not found")?;

    user.user_id = id;
    user.password = existing.password;

    let updated = state.store.update_user(&user)?;
    tracing::debug!("Updated user {id}");
    Ok(Json(updated))
}

pub async fn delete_user(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath<i64>,
) -> ApiResult<StatusCode> {
    state.store.delete_user(id)?;
    tracing::debug!("Deleted user {id}");
    Ok(StatusCode::OK)
}

pub async fn list_user_schedules(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath<i64>,
) -> ApiResult<Json<Vec<ScheduleDto>>> {
    let schedules = state.store.list_schedules_of_user(id)?;
    Ok(Json(schedules.into_iter().map(ScheduleDto::from).collect()))
}

pub async fn list_user_vacations(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath<i64>,
) -> ApiResult<Json<Vec<ScheduleDto>>> {
    let vacations = state.store.list_vacations_of_user(id)?;
    Ok(Json(vacations.into_iter().map(ScheduleDto::from).collect()))
}

pub async fn list_user_comments(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath<i64>,
) -> ApiResult<Json<Vec<Comment>>> {
    Ok(Json(state.store.list_comments_of_user(id)?))
}

pub async fn list_user_projects(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath<i64>,
) -> ApiResult<Json<Vec<Project>>> {
    Ok(Json(state.store.list_projects_of_user(id)?))
}

pub async fn list_user_functions(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath<i64>,
) -> ApiResult<Json<Vec<Function>>> {
    Ok(Json(state.store.list_functions_of_user(id)?))
}

pub async fn get_user_role(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath<i64>,
) -> ApiResult<Json<Role>> {
    let role = state.store.get_role_of_user(id)?.or_not_found("Role not found")?;
    Ok(Json(role))
}

pub async fn get_user_contract(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath<i64>,
) -> ApiResult<Json<Contract>> {
    let contract = state
        .store
        .get_contract_of_user(id)?
        .or_not_found("Contract not found")?;
    Ok(Json(contract))
}

pub async fn list_company_users(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath<i64>,
) -> ApiResult<Json<Vec<User>>> {
    Ok(Json(state.store.list_users_of_company(id)?))
}

pub async fn list_project_users(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath<i64>,
) -> ApiResult<Json<Vec<User>>> {
    Ok(Json(state.store.list_users_of_project(id)?))
}

pub async fn list_schedule_users(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath<i64>,
) -> ApiResult<Json<Vec<User>>> {
    Ok(Json(state.store.list_users_of_schedule(id)?))
}
