//! Client-side session state.
//!
//! [`SessionGate`] is built once at startup and shared (usually behind an
//! `Arc`) with everything that needs to know who is logged in or needs to
//! call the API with the user's credentials.
//!
//! ```text
//! Initializing ──restore──► Authenticated
//!      │                        │   ▲
//!      └──────► Unauthenticated ◄┘   │ login ok
//!                    │               │
//!                    └─► Authenticating
//! ```
//!
//! Transitions only happen once a response (or storage read) is in hand; the
//! state lock is never held across an `.await`.

use super::auth_client::{AuthClient, LoginGrant};
use super::config::Settings;
use super::session_storage::SessionStorage;
use crate::common::Principal;
use crate::error::AuthError;
use secrecy::{ExposeSecret, SecretString};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use studio_api::{ApiRequest, Client as ApiClient, StudioApiError};

pub const NO_TOKEN_MESSAGE: &str = "No authentication token found. Please login again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// Storage has not been consulted yet.
    Initializing,
    Authenticating,
    Authenticated,
    Unauthenticated,
}

/// Views the gate can send the user to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Dashboard,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/auth/login",
            Route::Dashboard => "/dashboard",
        }
    }
}

/// Receives the route changes the gate decides on.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}

/// What a protected view should do right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// Session not settled yet, show a loading state.
    Pending,
    Render,
    Redirect(Route),
}

struct SessionState {
    status: SessionStatus,
    token: Option<SecretString>,
    principal: Option<Principal>,
    api: Option<Arc<ApiClient>>,
    /// Bumped on every sign-in and sign-out so a late 401 from an old token
    /// cannot end a newer session.
    generation: u64,
}

impl SessionState {
    fn new() -> Self {
        Self {
            status: SessionStatus::Initializing,
            token: None,
            principal: None,
            api: None,
            generation: 0,
        }
    }

    fn establish(&mut self, api_url: &str, token: SecretString, principal: Principal) {
        self.api = Some(Arc::new(ApiClient::with_token(api_url, &token)));
        self.token = Some(token);
        self.principal = Some(principal);
        self.status = SessionStatus::Authenticated;
        self.generation += 1;
    }

    fn reset(&mut self) {
        self.token = None;
        self.principal = None;
        self.api = None;
        self.status = SessionStatus::Unauthenticated;
        self.generation += 1;
    }
}

pub struct SessionGate<S: SessionStorage, N: Navigator> {
    auth_client: AuthClient,
    public_api: ApiClient,
    api_url: String,
    storage: S,
    navigator: N,
    state: RwLock<SessionState>,
}

impl<S: SessionStorage, N: Navigator> SessionGate<S, N> {
    pub fn new(settings: &Settings, storage: S, navigator: N) -> Result<Self, AuthError> {
        let api_url = settings.api_url.trim_end_matches('/').to_string();
        let auth_client = AuthClient::new(api_url.clone(), settings.request_timeout())?;

        Ok(Self {
            auth_client,
            public_api: ApiClient::new(&api_url),
            api_url,
            storage,
            navigator,
            state: RwLock::new(SessionState::new()),
        })
    }

    fn read(&self) -> RwLockReadGuard<'_, SessionState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, SessionState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn status(&self) -> SessionStatus {
        self.read().status
    }

    pub fn principal(&self) -> Option<Principal> {
        self.read().principal.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.status() == SessionStatus::Authenticated
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    /// Restore the session left in storage by a previous run.
    ///
    /// The stored token is trusted as is; use [`Self::initialize_verified`] to
    /// confirm it with the auth service first. Only the first call does any
    /// work.
    pub fn initialize(&self) -> SessionStatus {
        let mut state = self.write();
        if state.status != SessionStatus::Initializing {
            return state.status;
        }

        let stored = match self.storage.load() {
            Ok(stored) => stored,
            Err(AuthError::Json(e)) => {
                tracing::error!(error = %e, "Stored session is corrupt, clearing it");
                self.clear_storage();
                state.reset();
                return state.status;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Session storage unavailable");
                state.reset();
                return state.status;
            }
        };

        tracing::debug!(
            has_token = stored.token.is_some(),
            has_user = stored.user.is_some(),
            "Checking stored session"
        );

        match (stored.token, stored.user) {
            (Some(token), Some(user)) => match serde_json::from_str::<Principal>(&user) {
                Ok(principal) => {
                    state.establish(&self.api_url, SecretString::from(token), principal);
                    tracing::info!("Session restored from storage");
                }
                Err(e) => {
                    tracing::error!(error = %e, "Failed to parse stored user, clearing session");
                    self.clear_storage();
                    state.reset();
                }
            },
            _ => state.reset(),
        }

        state.status
    }

    /// Like [`Self::initialize`], then confirm a restored token with `GET /auth/me`.
    ///
    /// A rejected token clears the session. If the auth service cannot be
    /// reached the restored session is kept.
    pub async fn initialize_verified(&self) -> SessionStatus {
        if self.initialize() != SessionStatus::Authenticated {
            return self.status();
        }

        let (token, generation) = {
            let state = self.read();
            match state.token.as_ref() {
                Some(token) => (
                    SecretString::from(token.expose_secret().to_string()),
                    state.generation,
                ),
                None => return state.status,
            }
        };

        match self.auth_client.me(&token).await {
            Ok(principal) => {
                let mut state = self.write();
                if state.generation == generation {
                    state.principal = Some(principal);
                }
                tracing::info!("Restored session confirmed");
            }
            Err(e) if e.is_unauthorized() => {
                tracing::warn!(error = %e, "Stored token rejected");
                self.expire(generation);
            }
            Err(e) => {
                tracing::warn!(error = %e, "Could not confirm restored session, keeping it");
            }
        }

        self.status()
    }

    /// Sign in with an email and password.
    ///
    /// Both are trimmed before they are sent. On success the token and
    /// principal are persisted and the user is sent to the dashboard; on
    /// failure storage is left untouched.
    pub async fn login(&self, email: &str, password: &str) -> Result<Principal, AuthError> {
        let email = email.trim();
        let password = SecretString::from(password.trim().to_string());

        self.write().status = SessionStatus::Authenticating;
        tracing::info!("Attempting login");

        match self.try_login(email, &password).await {
            Ok(principal) => {
                tracing::info!(user_id = %principal.id, "Login successful");
                self.navigator.navigate(Route::Dashboard);
                Ok(principal)
            }
            Err(e) => {
                let mut state = self.write();
                state.status = if state.token.is_some() {
                    SessionStatus::Authenticated
                } else {
                    SessionStatus::Unauthenticated
                };
                tracing::warn!(error = %e, "Login failed");
                Err(e)
            }
        }
    }

    async fn try_login(&self, email: &str, password: &SecretString) -> Result<Principal, AuthError> {
        let LoginGrant { token, user } = self.auth_client.login(email, password).await?;

        let user_json = serde_json::to_string(&user)?;
        self.storage.save(token.expose_secret(), &user_json)?;
        tracing::debug!("Token and user saved to storage");

        self.write().establish(&self.api_url, token, user.clone());
        Ok(user)
    }

    /// Sign out: clear storage and memory, then go to the login view.
    pub fn logout(&self) -> Result<(), AuthError> {
        tracing::info!("Logging out");
        let cleared = self.storage.clear();
        self.write().reset();
        self.navigator.navigate(Route::Login);
        cleared
    }

    /// Send a request with the session's bearer token.
    ///
    /// Fails without touching the network when no token is held. A 401 ends
    /// the session (storage cleared, user sent to login) and surfaces as
    /// [`AuthError::SessionExpired`]. Requests are never retried.
    pub async fn authenticated<R>(&self, request: R) -> Result<R::Response, AuthError>
    where
        R: ApiRequest,
    {
        let (api, generation) = {
            let state = self.read();
            match state.api.clone() {
                Some(api) => (api, state.generation),
                None => return Err(AuthError::Authentication(NO_TOKEN_MESSAGE.to_string())),
            }
        };

        let endpoint = request.endpoint().into_owned();
        tracing::debug!(endpoint = %endpoint, "Making authenticated request");

        match api.send(request).await {
            Ok(response) => Ok(response),
            Err(StudioApiError::Unauthorized(message)) => {
                tracing::warn!(
                    endpoint = %endpoint,
                    message = %message,
                    "Token rejected, clearing session"
                );
                self.expire(generation);
                Err(AuthError::SessionExpired)
            }
            Err(e) => {
                tracing::debug!(endpoint = %endpoint, error = %e, "Authenticated request failed");
                Err(AuthError::Api(e))
            }
        }
    }

    /// Send a request without credentials. Errors, 401 included, are returned as is.
    pub async fn public<R>(&self, request: R) -> Result<R::Response, StudioApiError>
    where
        R: ApiRequest,
    {
        tracing::debug!(endpoint = %request.endpoint(), "Making public request");
        self.public_api.send(request).await
    }

    pub async fn request_password_reset(&self, email: &str) -> Result<String, AuthError> {
        let message = self.auth_client.forgot_password(email.trim()).await?;
        tracing::info!("Password reset requested");
        Ok(message)
    }

    /// Decide whether a protected view may render, redirecting when it may not.
    pub fn guard(&self) -> GateDecision {
        match self.status() {
            SessionStatus::Initializing | SessionStatus::Authenticating => GateDecision::Pending,
            SessionStatus::Authenticated => GateDecision::Render,
            SessionStatus::Unauthenticated => {
                self.navigator.navigate(Route::Login);
                GateDecision::Redirect(Route::Login)
            }
        }
    }

    /// Forced sign-out after the server rejected the token of `generation`.
    fn expire(&self, generation: u64) {
        {
            let mut state = self.write();
            if state.generation != generation || state.token.is_none() {
                return;
            }
            state.reset();
        }
        self.clear_storage();
        self.navigator.navigate(Route::Login);
    }

    fn clear_storage(&self) {
        if let Err(e) = self.storage.clear() {
            tracing::warn!(error = %e, "Failed to clear session storage");
        }
    }
}

impl<S: SessionStorage, N: Navigator> std::fmt::Debug for SessionGate<S, N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.read();
        f.debug_struct("SessionGate")
            .field("api_url", &self.api_url)
            .field("status", &state.status)
            .field("principal", &state.principal)
            .finish()
    }
}
