pub mod auth_client;
mod config;
mod gate;
mod session_storage;

pub use auth_client::{AuthClient, AuthClientError};
pub use config::Settings;
pub use gate::{GateDecision, Navigator, Route, SessionGate, SessionStatus, NO_TOKEN_MESSAGE};
pub use session_storage::{
    FileStorage, MemoryStorage, SessionStorage, StoredSession, TOKEN_KEY, USER_KEY,
};

use crate::error::AuthError;

/// Build the application's session gate and restore any stored session.
///
/// Storage lives in `settings.storage_dir`, or the user cache dir when unset.
/// An unusable storage location is not fatal: the gate then starts
/// unauthenticated and keeps the session in memory only.
pub async fn connect<N: Navigator>(
    settings: &Settings,
    navigator: N,
) -> Result<SessionGate<Box<dyn SessionStorage>, N>, AuthError> {
    settings.validate().map_err(|e| {
        tracing::error!(error = %e, "Configuration validation failed");
        AuthError::Configuration(e)
    })?;

    let file_storage = match &settings.storage_dir {
        Some(dir) => FileStorage::new(dir),
        None => FileStorage::in_cache_dir(),
    };
    let storage: Box<dyn SessionStorage> = match file_storage {
        Ok(storage) => {
            tracing::debug!(path = %storage.path().display(), "Using file session storage");
            Box::new(storage)
        }
        Err(e) => {
            tracing::warn!(error = %e, "Durable session storage unavailable, using memory");
            Box::new(MemoryStorage::new())
        }
    };

    let gate = SessionGate::new(settings, storage, navigator)?;

    let status = if settings.verify_on_restore {
        gate.initialize_verified().await
    } else {
        gate.initialize()
    };
    tracing::info!(status = ?status, "Session initialized");

    Ok(gate)
}

impl SessionStorage for Box<dyn SessionStorage> {
    fn load(&self) -> Result<StoredSession, AuthError> {
        (**self).load()
    }

    fn save(&self, token: &str, user: &str) -> Result<(), AuthError> {
        (**self).save(token, user)
    }

    fn clear(&self) -> Result<(), AuthError> {
        (**self).clear()
    }
}
