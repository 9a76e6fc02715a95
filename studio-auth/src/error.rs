use studio_api::StudioApiError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Credentials rejected, auth service unreachable, or no token held.
    #[error("{0}")]
    Authentication(String),

    /// An authenticated request was answered with 401; the session has been cleared.
    #[error("Session expired. Please login again.")]
    SessionExpired,

    #[error(transparent)]
    Api(#[from] StudioApiError),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Token storage error: {0}")]
    TokenStorage(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<config::ConfigError> for AuthError {
    fn from(err: config::ConfigError) -> Self {
        AuthError::Configuration(err.to_string())
    }
}
