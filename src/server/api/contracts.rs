use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode};

use crate::server::AppState;
use crate::server::extract::{IdPath, JsonBody};
use crate::server::response::{ApiResult, Created, StoreOptionExt};
use crate::types::Contract;

pub async fn list_contracts(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Contract>>> {
    Ok(Json(state.store.list_contracts()?))
}

pub async fn get_contract(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath<i64>,
) -> ApiResult<Json<Contract>> {
    let contract = state
        .store
        .get_contract(id)?
        .or_not_found("Contract not found")?;
    Ok(Json(contract))
}

pub async fn create_contract(
    State(state): State<Arc<AppState>>,
    JsonBody(contract): JsonBody<Contract>,
) -> ApiResult<Created> {
    let id = state.store.create_contract(&contract)?;
    tracing::debug!("Created contract {id}");
    Ok(Created::new("contract_id", id))
}

pub async fn update_contract(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath<i64>,
    JsonBody(mut contract): JsonBody<Contract>,
) -> ApiResult<Json<Contract>> {
    contract.contract_id = id;
    Ok(Json(state.store.update_contract(&contract)?))
}

pub async fn delete_contract(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath<i64>,
) -> ApiResult<StatusCode> {
    state.store.delete_contract(id)?;
    Ok(StatusCode::OK)
}
