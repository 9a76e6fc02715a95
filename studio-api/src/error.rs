use crate::endpoints::StatusMessage;
use tower_api_client::{Error as ApiError, StatusCode};

#[derive(Debug)]
pub enum StudioApiError {
    /// The backend answered 401; the bearer token is missing, invalid or expired.
    Unauthorized(String),
    /// Any other non-success status, with the message from the response body.
    Api(StatusCode, String),
    /// Network failure or an unreadable response, passed through untouched.
    Transport(ApiError),
}

impl StudioApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized(_))
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Unauthorized(_) => Some(StatusCode::UNAUTHORIZED),
            Self::Api(status, _) => Some(*status),
            Self::Transport(_) => None,
        }
    }
}

impl From<ApiError> for StudioApiError {
    fn from(value: ApiError) -> Self {
        match value {
            ApiError::ClientError(status, detail) | ApiError::ServerError(status, detail) => {
                let message = serde_json::from_str::<StatusMessage>(&detail)
                    .ok()
                    .and_then(|body| body.message)
                    .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));

                if status == StatusCode::UNAUTHORIZED {
                    StudioApiError::Unauthorized(message)
                } else {
                    StudioApiError::Api(status, message)
                }
            }
            e => StudioApiError::Transport(e),
        }
    }
}

impl std::fmt::Display for StudioApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StudioApiError::Unauthorized(message) => write!(f, "Unauthorized: {}", message),
            StudioApiError::Api(status, message) => write!(f, "({}) {}", status, message),
            StudioApiError::Transport(e) => write!(f, "Transport error: {}", e),
        }
    }
}

impl std::error::Error for StudioApiError {}
