use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode};

use crate::server::AppState;
use crate::server::extract::{IdPath, JsonBody};
use crate::server::response::{ApiResult, Created, StoreOptionExt};
use crate::types::Comment;

pub async fn list_comments(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Comment>>> {
    Ok(Json(state.store.list_comments()?))
}

pub async fn get_comment(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath<i64>,
) -> ApiResult<Json<Comment>> {
    let comment = state
        .store
        .get_comment(id)?
        .or_not_found("Comment not found")?;
    Ok(Json(comment))
}

pub async fn create_comment(
    State(state): State<Arc<AppState>>,
    JsonBody(comment): JsonBody<Comment>,
) -> ApiResult<Created> {
    let id = state.store.create_comment(&comment)?;
    tracing::debug!("Created comment {id} on schedule {}", comment.schedule_id);
    Ok(Created::new("comment_id", id))
}

pub async fn update_comment(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath<i64>,
    JsonBody(mut comment): JsonBody<Comment>,
) -> ApiResult<Json<Comment>> {
    comment.comment_id = id;
    Ok(Json(state.store.update_comment(&comment)?))
}

pub async fn delete_comment(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath<i64>,
) -> ApiResult<StatusCode> {
    state.store.delete_comment(id)?;
    Ok(StatusCode::OK)
}
