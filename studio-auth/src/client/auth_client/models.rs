use crate::error::AuthError;

pub const LOGIN_FAILED: &str = "Login failed";

#[derive(Debug)]
pub enum AuthClientError {
    Http(reqwest::Error),
    /// Non-success status with the server's message, if it sent one.
    Rejected { status: u16, message: Option<String> },
    InvalidResponse(String),
}

impl AuthClientError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Rejected { status: 401, .. })
    }
}

impl std::fmt::Display for AuthClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Http(e) => write!(f, "Unable to reach the authentication service: {}", e),
            Self::Rejected {
                message: Some(msg), ..
            } => write!(f, "{}", msg),
            Self::Rejected { status, .. } => write!(f, "{} (HTTP {})", LOGIN_FAILED, status),
            Self::InvalidResponse(msg) => write!(f, "Invalid auth response: {}", msg),
        }
    }
}

impl std::error::Error for AuthClientError {}

impl From<reqwest::Error> for AuthClientError {
    fn from(err: reqwest::Error) -> Self {
        Self::Http(err)
    }
}

impl From<AuthClientError> for AuthError {
    fn from(err: AuthClientError) -> Self {
        match err {
            AuthClientError::Rejected { message, .. } => {
                AuthError::Authentication(message.unwrap_or_else(|| LOGIN_FAILED.to_string()))
            }
            other => AuthError::Authentication(other.to_string()),
        }
    }
}
