//! Vacations are schedules pinned to the reserved Vacation project. Any
//! project id sent by the client is ignored.

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode};

use crate::server::AppState;
use crate::server::dto::ScheduleDto;
use crate::server::extract::{IdPath, JsonBody};
use crate::server::response::{ApiResult, Created, StoreOptionExt};

pub async fn get_vacation(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath<i64>,
) -> ApiResult<Json<ScheduleDto>> {
    let vacation = state
        .store
        .get_vacation(id)?
        .or_not_found("Vacation not found")?;
    Ok(Json(vacation.into()))
}

pub async fn create_vacation(
    State(state): State<Arc<AppState>>,
    JsonBody(dto): JsonBody<ScheduleDto>,
) -> ApiResult<Created> {
    let id = state.store.create_vacation(&dto.into_schedule()?)?;
    tracing::debug!("Created vacation {id}");
    Ok(Created::new("vacation_id", id))
}

pub async fn update_vacation(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath<i64>,
    JsonBody(dto): JsonBody<ScheduleDto>,
) -> ApiResult<Json<ScheduleDto>> {
    let mut vacation = dto.into_schedule()?;
    vacation.schedule_id = id;

    let updated = state.store.update_vacation(&vacation)?;
    Ok(Json(updated.into()))
}

pub async fn delete_vacation(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath<i64>,
) -> ApiResult<StatusCode> {
    state.store.delete_vacation(id)?;
    Ok(StatusCode::OK)
}
