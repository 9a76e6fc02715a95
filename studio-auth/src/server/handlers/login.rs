use axum::{extract::rejection::JsonRejection, extract::State, Json};
use chrono::Utc;

use crate::common::LoginResponse;
use crate::server::{error::ServerError, models::LoginBody, AppState};

pub const TOKEN_PREFIX: &str = "mock-jwt-token";

pub async fn login(
    State(state): State<AppState>,
    body: Result<Json<LoginBody>, JsonRejection>,
) -> Result<Json<LoginResponse>, ServerError> {
    let Json(body) = body?;
    state.simulate_latency().await;

    let account = &state.configuration.account;
    let accepted = body.email.as_deref() == Some(account.email.as_str())
        && body.password.as_deref() == Some(account.password.as_str());

    if !accepted {
        tracing::warn!(email = ?body.email, "Rejected login");
        return Err(ServerError::Unauthorized(
            "Invalid email or password".to_string(),
        ));
    }

    let token = format!("{}-{}", TOKEN_PREFIX, Utc::now().timestamp_millis());
    tracing::info!(user_id = %account.id, "Issued token");

    Ok(Json(LoginResponse {
        success: true,
        token: Some(token),
        user: Some(account.principal()),
    }))
}
