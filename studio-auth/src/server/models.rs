use serde::{Deserialize, Serialize};

// POST /api/auth/login
#[derive(Debug, Deserialize)]
pub struct LoginBody {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

// POST /api/auth/forgot-password
#[derive(Debug, Deserialize)]
pub struct ForgotPasswordBody {
    #[serde(default)]
    pub email: Option<String>,
}

// Health check
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
