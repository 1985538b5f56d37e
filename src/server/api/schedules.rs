use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode};

use crate::server::AppState;
use crate::server::dto::ScheduleDto;
use crate::server::extract::{IdPath, JsonBody};
use crate::server::response::{ApiResult, Created, StoreOptionExt};
use crate::types::Comment;

pub async fn get_schedule(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath<i64>,
) -> ApiResult<Json<ScheduleDto>> {
    let schedule = state
        .store
        .get_schedule(id)?
        .or_not_found("Schedule not found")?;
    Ok(Json(schedule.into()))
}

pub async fn create_schedule(
    State(state): State<Arc<AppState>>,
    JsonBody(dto): JsonBody<ScheduleDto>,
) -> ApiResult<Created> {
    let schedule = dto.into_schedule()?;
    let id = state.store.create_schedule(&schedule)?;
    tracing::debug!("Created schedule {id} on project {}", schedule.project_id);
    Ok(Created::new("schedule_id", id))
}

pub async fn update_schedule(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath<i64>,
    JsonBody(dto): JsonBody<ScheduleDto>,
) -> ApiResult<Json<ScheduleDto>> {
    let mut schedule = dto.into_schedule()?;
    schedule.schedule_id = id;

    let updated = state.store.update_schedule(&schedule)?;
    Ok(Json(updated.into()))
}

pub async fn delete_schedule(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath<i64>,
) -> ApiResult<StatusCode> {
    state.store.delete_schedule(id)?;
    Ok(StatusCode::OK)
}

pub async fn list_schedule_comments(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath<i64>,
) -> ApiResult<Json<Vec<Comment>>> {
    Ok(Json(state.store.list_comments_of_schedule(id)?))
}
