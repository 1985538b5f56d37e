use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode};

use crate::server::AppState;
use crate::server::dto::ScheduleDto;
use crate::server::extract::{IdPath, JsonBody};
use crate::server::response::{ApiError, ApiResult, Created, StoreOptionExt};
use crate::types::{Comment, Project, VACATION_PROJECT_NAME};

pub async fn list_projects(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Project>>> {
    Ok(Json(state.store.list_projects()?))
}

pub async fn get_project(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath<i64>,
) -> ApiResult<Json<Project>> {
    let project = state
        .store
        .get_project(id)?
        .or_not_found("Project not found")?;
    Ok(Json(project))
}

pub async fn create_project(
    State(state): State<Arc<AppState>>,
    JsonBody(project): JsonBody<Project>,
) -> ApiResult<Created> {
    let id = state.store.create_project(&project)?;
    tracing::debug!("Created project {id} ({})", project.project_name);
    Ok(Created::new("project_id", id))
}

/// Replaces a project. Neither the Vacation project nor a rename to its
/// reserved name is allowed.
pub async fn update_project(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath<i64>,
    JsonBody(mut project): JsonBody<Project>,
) -> ApiResult<Json<Project>> {
    let vacation = state.store.get_vacation_project()?;
    let touches_vacation = vacation.is_some_and(|v| v.project_id == id)
        || project.project_name == VACATION_PROJECT_NAME;

    if touches_vacation {
        tracing::debug!("Refused to modify the vacation project through project {id}");
        return Err(ApiError::unauthorized(
            "Updating the vacation project is unauthorized",
        ));
    }

    project.project_id = id;
    let updated = state.store.update_project(&project)?;
    tracing::debug!("Updated project {id}");
    Ok(Json(updated))
}

pub async fn delete_project(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath<i64>,
) -> ApiResult<StatusCode> {
    state.store.delete_project(id)?;
    tracing::debug!("Deleted project {id}");
    Ok(StatusCode::OK)
}

pub async fn list_project_schedules(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath<i64>,
) -> ApiResult<Json<Vec<ScheduleDto>>> {
    let schedules = state.store.list_schedules_of_project(id)?;
    Ok(Json(schedules.into_iter().map(ScheduleDto::from).collect()))
}

pub async fn list_project_comments(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath<i64>,
) -> ApiResult<Json<Vec<Comment>>> {
    Ok(Json(state.store.list_comments_of_project(id)?))
}
