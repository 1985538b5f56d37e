use std::sync::Arc;
use std::time::Instant;

use axum::extract::Request;
use axum::http::{HeaderValue, header};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::set_header::SetResponseHeaderLayer;

use super::api::api_router;
use super::session;
use crate::auth::{PasswordHasher, TokenSigner, authenticate, authorize};
use crate::store::Store;

pub struct AppState {
    pub store: Arc<dyn Store>,
    /// Signs session tokens with a key that lives only in this process.
    pub signer: TokenSigner,
    pub hasher: PasswordHasher,
}

impl AppState {
    #[must_use]
    pub fn new(store: Arc<dyn Store>, signer: TokenSigner) -> Self {
        Self {
            store,
            signer,
            hasher: PasswordHasher::new(),
        }
    }
}

async fn health() -> &'static str {
    "OK"
}

async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let start = Instant::now();

    let response = next.run(request).await;

    let latency = start.elapsed();
    let status = response.status();

    tracing::info!(
        "{} {} {} {}ms",
        method,
        uri.path(),
        status.as_u16(),
        latency.as_millis()
    );

    response
}

pub fn create_router(state: Arc<AppState>) -> Router {
    // Layers run bottom-up: authenticate before authorize.
    let protected = api_router()
        .layer(middleware::from_fn_with_state(state.clone(), authorize))
        .layer(middleware::from_fn_with_state(state.clone(), authenticate));

    Router::new()
        .route("/health", get(health))
        .route("/get-token", post(session::get_token))
        .route("/logout", post(session::logout))
        .merge(protected)
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type, Accept"),
        ))
        .layer(middleware::from_fn(log_request))
        .with_state(state)
}
