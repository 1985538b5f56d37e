use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode};

use crate::server::AppState;
use crate::server::extract::{IdPath, JsonBody};
use crate::server::response::{ApiResult, Created, StoreOptionExt};
use crate::types::Function;

pub async fn list_functions(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Function>>> {
    Ok(Json(state.store.list_functions()?))
}

pub async fn get_function(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath<i64>,
) -> ApiResult<Json<Function>> {
    let function = state
        .store
        .get_function(id)?
        .or_not_found("Function not found")?;
    Ok(Json(function))
}

pub async fn create_function(
    State(state): State<Arc<AppState>>,
    JsonBody(function): JsonBody<Function>,
) -> ApiResult<Created> {
    let id = state.store.create_function(&function)?;
    tracing::debug!("Created function {id}");
    Ok(Created::new("function_id", id))
}

pub async fn update_function(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath<i64>,
    JsonBody(mut function): JsonBody<Function>,
) -> ApiResult<Json<Function>> {
    function.function_id = id;
    Ok(Json(state.store.update_function(&function)?))
}

pub async fn delete_function(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath<i64>,
) -> ApiResult<StatusCode> {
    state.store.delete_function(id)?;
    Ok(StatusCode::OK)
}
