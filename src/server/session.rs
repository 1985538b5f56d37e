use std::sync::Arc;

use axum::{
    extract::State,
    http::header::SET_COOKIE,
    response::{IntoResponse, Response},
};

use crate::auth::{Identity, TOKEN_COOKIE};
use crate::server::AppState;
use crate::server::dto::LoginRequest;
use crate::server::extract::JsonBody;
use crate::server::response::{ApiError, ApiResult};

/// Exchanges a mail and password for a session token.
///
/// The token is returned as the plain-text body and set as the `token`
/// cookie.
pub async fn get_token(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<LoginRequest>,
) -> ApiResult<Response> {
    let user = state.store.get_user_by_mail(&req.mail)?.ok_or_else(|| {
        tracing::debug!("Login attempt for unknown mail {}", req.mail);
        ApiError::unauthorized("User does not exist")
    })?;

    if !state.hasher.verify(&req.password, &user.password)? {
        tracing::debug!("Wrong password for {}", user.mail);
        return Err(ApiError::unauthorized("The password is incorrect"));
    }

    let token = state.signer.issue(&Identity {
        mail: user.mail.clone(),
        user_id: user.user_id,
        role_id: user.role_id,
    })?;

    let cookie = format!(
        "{TOKEN_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
        state.signer.ttl().num_seconds()
    );

    tracing::info!("User {} logged in", user.mail);
    Ok(([(SET_COOKIE, cookie)], token).into_response())
}

/// Clears the session cookie. Neither the token nor the store is consulted.
pub async fn logout() -> impl IntoResponse {
    [(SET_COOKIE, format!("{TOKEN_COOKIE}=; Path=/; Max-Age=0"))]
}
