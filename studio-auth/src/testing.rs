use crate::client::{MemoryStorage, Navigator, Route, SessionStorage, StoredSession};
use crate::error::AuthError;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

/// Navigator that remembers every route it was sent to.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    routes: Mutex<Vec<Route>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn routes(&self) -> Vec<Route> {
        self.routes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn last(&self) -> Option<Route> {
        self.routes().last().copied()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        self.routes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(route);
    }
}

/// In-memory storage that counts writes and clears.
#[derive(Debug, Default)]
pub struct RecordingStorage {
    inner: MemoryStorage,
    saves: AtomicUsize,
    clears: AtomicUsize,
}

impl RecordingStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session(token: &str, user: &str) -> Self {
        Self {
            inner: MemoryStorage::with_session(token, user),
            ..Self::default()
        }
    }

    pub fn saves(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    pub fn clears(&self) -> usize {
        self.clears.load(Ordering::SeqCst)
    }

    pub fn contents(&self) -> StoredSession {
        self.inner.load().unwrap_or_default()
    }
}

impl SessionStorage for RecordingStorage {
    fn load(&self) -> Result<StoredSession, AuthError> {
        self.inner.load()
    }

    fn save(&self, token: &str, user: &str) -> Result<(), AuthError> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        self.inner.save(token, user)
    }

    fn clear(&self) -> Result<(), AuthError> {
        self.clears.fetch_add(1, Ordering::SeqCst);
        self.inner.clear()
    }
}

/// Storage that cannot be read, as in a context without durable storage.
#[derive(Debug, Default)]
pub struct UnavailableStorage;

impl SessionStorage for UnavailableStorage {
    fn load(&self) -> Result<StoredSession, AuthError> {
        Err(AuthError::TokenStorage("storage is not available".to_string()))
    }

    fn save(&self, _token: &str, _user: &str) -> Result<(), AuthError> {
        Err(AuthError::TokenStorage("storage is not available".to_string()))
    }

    fn clear(&self) -> Result<(), AuthError> {
        Ok(())
    }
}
