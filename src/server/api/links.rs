//! Join-table mutations of the form `/{parent}/{id}/{child}/{child_id}`.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode};

use crate::server::AppState;
use crate::server::extract::IdPath;
use crate::server::response::ApiResult;
use crate::types::{CompanyProject, CompanyUser, UserFunction, UserSchedule};

pub async fn add_company_user(
    State(state): State<Arc<AppState>>,
    IdPath((company_id, user_id)): IdPath<(i64, i64)>,
) -> ApiResult<StatusCode> {
    state
        .store
        .create_company_user(CompanyUser { company_id, user_id })?;
    tracing::debug!("Linked user {user_id} to company {company_id}");
    Ok(StatusCode::OK)
}

pub async fn remove_company_user(
    State(state): State<Arc<AppState>>,
    IdPath((company_id, user_id)): IdPath<(i64, i64)>,
) -> ApiResult<StatusCode> {
    state
        .store
        .delete_company_user(CompanyUser { company_id, user_id })?;
    Ok(StatusCode::OK)
}

pub async fn add_company_project(
    State(state): State<Arc<AppState>>,
    IdPath((company_id, project_id)): IdPath<(i64, i64)>,
) -> ApiResult<StatusCode> {
    state.store.create_company_project(CompanyProject {
        company_id,
        project_id,
    })?;
    tracing::debug!("Linked project {project_id} to company {company_id}");
    Ok(StatusCode::OK)
}

pub async fn remove_company_project(
    State(state): State<Arc<AppState>>,
    IdPath((company_id, project_id)): IdPath<(i64, i64)>,
) -> ApiResult<StatusCode> {
    state.store.delete_company_project(CompanyProject {
        company_id,
        project_id,
    })?;
    Ok(StatusCode::OK)
}

pub async fn add_user_schedule(
    State(state): State<Arc<AppState>>,
    IdPath((user_id, schedule_id)): IdPath<(i64, i64)>,
) -> ApiResult<StatusCode> {
    state
        .store
        .create_user_schedule(UserSchedule { user_id, schedule_id })?;
    tracing::debug!("Linked schedule {schedule_id} to user {user_id}");
    Ok(StatusCode::OK)
}

pub async fn remove_user_schedule(
    State(state): State<Arc<AppState>>,
    IdPath((user_id, schedule_id)): IdPath<(i64, i64)>,
) -> ApiResult<StatusCode> {
    state
        .store
        .delete_user_schedule(UserSchedule { user_id, schedule_id })?;
    Ok(StatusCode::OK)
}

pub async fn add_user_function(
    State(state): State<Arc<AppState>>,
    IdPath((user_id, function_id)): IdPath<(i64, i64)>,
) -> ApiResult<StatusCode> {
    state
        .store
        .create_user_function(UserFunction { user_id, function_id })?;
    tracing::debug!("Linked function {function_id} to user {user_id}");
    Ok(StatusCode::OK)
}

pub async fn remove_user_function(
    State(state): State<Arc<AppState>>,
    IdPath((user_id, function_id)): IdPath<(i64, i64)>,
) -> ApiResult<StatusCode> {
    state
        .store
        .delete_user_function(UserFunction { user_id, function_id })?;
    Ok(StatusCode::OK)
}
