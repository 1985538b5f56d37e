use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{HeaderMap, StatusCode, header::COOKIE},
    middleware::Next,
    response::{IntoResponse, Response},
};

use super::token::TokenRejection;
use crate::server::AppState;

/// Name of the cookie carrying the session token.
pub const TOKEN_COOKIE: &str = "token";

#[derive(Debug, PartialEq, Eq)]
pub enum AuthError {
    MissingToken,
    InvalidToken,
    TokenExpired,
    MissingClaims,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AuthError::MissingToken => (StatusCode::UNAUTHORIZED, "Token not found in cookies"),
            AuthError::InvalidToken => (StatusCode::UNAUTHORIZED, "Token signature is invalid"),
            AuthError::TokenExpired => (StatusCode::UNAUTHORIZED, "Token expired"),
            AuthError::MissingClaims => (StatusCode::BAD_REQUEST, "Could not extract claims"),
        };

        (status, message).into_response()
    }
}

impl From<TokenRejection> for AuthError {
    fn from(rejection: TokenRejection) -> Self {
        match rejection {
            TokenRejection::Invalid => AuthError::InvalidToken,
            TokenRejection::Expired => AuthError::TokenExpired,
            TokenRejection::MissingClaims => AuthError::MissingClaims,
        }
    }
}

/// Returns the value of the named cookie from the Cookie headers, if any.
pub fn cookie_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|h| h.to_str().ok())
        .flat_map(|h| h.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value)
}

/// Verifies the session cookie and attaches the caller's [`Identity`] to the
/// request extensions.
///
/// [`Identity`]: super::Identity
pub async fn authenticate(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let token = cookie_value(request.headers(), TOKEN_COOKIE)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| {
            tracing::debug!("Token was not found in cookies");
            AuthError::MissingToken
        })?;

    let identity = state.signer.verify(token).map_err(|rejection| {
        tracing::debug!("Rejected session token: {rejection:?}");
        AuthError::from(rejection)
    })?;

    request.extensions_mut().insert(identity);
    Ok(next.run(request).await)
}
