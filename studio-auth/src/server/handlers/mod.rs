mod forgot_password;
mod login;
mod me;

pub use forgot_password::forgot_password;
pub use login::login;
pub use me::me;

use crate::server::models::HealthResponse;
use axum::Json;

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
