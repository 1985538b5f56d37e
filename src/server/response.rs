use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Map, Value};

use crate::error::Error;

/// API error that converts to a plain-text HTTP response.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::UNAUTHORIZED,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::FORBIDDEN,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, self.message).into_response()
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match err {
            Error::NotFound => Self::not_found("Not found"),
            other => {
                tracing::error!("Request failed: {other}");
                Self::internal(other.to_string())
            }
        }
    }
}

/// Extension for Option types from store operations.
pub trait StoreOptionExt<T> {
    fn or_not_found(self, message: &'static str) -> Result<T, ApiError>;
}

impl<T> StoreOptionExt<T> for Option<T> {
    fn or_not_found(self, message: &'static str) -> Result<T, ApiError> {
        self.ok_or_else(|| ApiError::not_found(message))
    }
}

/// Body of a create response: `{"<entity>_id": <id>}`.
#[derive(Debug)]
pub struct Created {
    field: &'static str,
    id: i64,
}

impl Created {
    #[must_use]
    pub fn new(field: &'static str, id: i64) -> Self {
        Self { field, id }
    }
}

impl IntoResponse for Created {
    fn into_response(self) -> Response {
        let mut body = Map::new();
        body.insert(self.field.to_string(), Value::from(self.id));
        Json(Value::Object(body)).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_error_body_is_plain_text() {
        let response = ApiError::forbidden("nope").into_response();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert_eq!(body_text(response).await, "nope");
    }

    #[tokio::test]
    async fn test_created_body() {
        let response = Created::new("user_id", 7).into_response();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, r#"{"user_id":7}"#);
    }

    #[test]
    fn test_store_errors_map_to_status() {
        assert_eq!(ApiError::from(Error::NotFound).status, StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::from(Error::TokenLifetime).status,
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::from(Error::Config("x".into())).status,
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
