use crate::validators::FormErrors;
use studio_api::StudioApiError;
use studio_auth::AuthError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StudioError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Api(#[from] StudioApiError),

    #[error("Please fix the highlighted fields: {0}")]
    Form(#[from] FormErrors),

    /// The backend answered with a body that was neither enveloped nor bare.
    #[error("Unexpected response from {0}")]
    Malformed(&'static str),
}

impl StudioError {
    /// True when the user has to sign in again before retrying.
    pub fn needs_login(&self) -> bool {
        matches!(
            self,
            StudioError::Auth(AuthError::SessionExpired | AuthError::Authentication(_))
        )
    }
}
