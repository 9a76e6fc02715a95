use axum::{extract::rejection::JsonRejection, extract::State, Json};

use crate::common::MessageResponse;
use crate::server::{error::ServerError, models::ForgotPasswordBody, AppState};

/// Always acknowledges; no mail is sent.
pub async fn forgot_password(
    State(state): State<AppState>,
    body: Result<Json<ForgotPasswordBody>, JsonRejection>,
) -> Result<Json<MessageResponse>, ServerError> {
    let Json(body) = body?;
    state.simulate_latency().await;

    tracing::info!(email = ?body.email, "Password reset requested");

    Ok(Json(MessageResponse::success("Password reset email sent")))
}
