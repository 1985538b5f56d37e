use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode};

use crate::server::AppState;
use crate::server::extract::{IdPath, JsonBody};
use crate::server::response::{ApiResult, Created, StoreOptionExt};
use crate::types::{Company, Project};

pub async fn list_companies(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Company>>> {
    Ok(Json(state.store.list_companies()?))
}

pub async fn get_company(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath<i64>,
) -> ApiResult<Json<Company>> {
    let company = state
        .store
        .get_company(id)?
        .or_not_found("Company not found")?;
    Ok(Json(company))
}

pub async fn create_company(
    State(state): State<Arc<AppState>>,
    JsonBody(company): JsonBody<Company>,
) -> ApiResult<Created> {
    let id = state.store.create_company(&company)?;
    tracing::debug!("Created company {id}");
    Ok(Created::new("company_id", id))
}

pub async fn update_company(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath<i64>,
    JsonBody(mut company): JsonBody<Company>,
) -> ApiResult<Json<Company>> {
    company.company_id = id;
    Ok(Json(state.store.update_company(&company)?))
}

pub async fn delete_company(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath<i64>,
) -> ApiResult<StatusCode> {
    state.store.delete_company(id)?;
    Ok(StatusCode::OK)
}

pub async fn list_company_projects(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath<i64>,
) -> ApiResult<Json<Vec<Project>>> {
    Ok(Json(state.store.list_projects_of_company(id)?))
}
