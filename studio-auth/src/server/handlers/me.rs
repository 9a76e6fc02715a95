use axum::{
    extract::State,
    http::{header::AUTHORIZATION, HeaderMap},
    Json,
};

use super::login::TOKEN_PREFIX;
use crate::common::Principal;
use crate::server::{error::ServerError, AppState};

pub async fn me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Principal>, ServerError> {
    let token = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or_else(|| ServerError::Unauthorized("No token provided".to_string()))?;

    // Only the first word after the scheme counts.
    let token = token.split(' ').next().unwrap_or_default();
    if token.is_empty() || !token.starts_with(TOKEN_PREFIX) {
        tracing::debug!("Rejected bearer token");
        return Err(ServerError::Unauthorized("Invalid token".to_string()));
    }

    Ok(Json(state.configuration.account.principal()))
}
