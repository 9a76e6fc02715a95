use crate::error::AuthError;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

/// Raw contents of durable session storage.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StoredSession {
    pub token: Option<String>,
    /// Serialized principal, parsed by the gate.
    pub user: Option<String>,
}

impl StoredSession {
    fn from_map(mut map: BTreeMap<String, String>) -> Self {
        Self {
            token: map.remove(TOKEN_KEY),
            user: map.remove(USER_KEY),
        }
    }
}

/// Durable key/value storage for the session.
///
/// The `token` and `user` keys are only ever written together and cleared
/// together, so the trait exposes no single-key writes.
pub trait SessionStorage: Send + Sync {
    fn load(&self) -> Result<StoredSession, AuthError>;

    fn save(&self, token: &str, user: &str) -> Result<(), AuthError>;

    fn clear(&self) -> Result<(), AuthError>;
}

/// Session storage backed by a JSON file readable only by the owner.
pub struct FileStorage {
    session_path: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl AsRef<Path>) -> Result<Self, AuthError> {
        let dir = dir.as_ref();

        // Create storage directory if it doesn't exist
        if !dir.exists() {
            fs::create_dir_all(dir).map_err(|e| {
                AuthError::TokenStorage(format!("Failed to create storage directory: {}", e))
            })?;
        }

        Ok(Self {
            session_path: dir.join("session.json"),
        })
    }

    pub fn in_cache_dir() -> Result<Self, AuthError> {
        let cache_dir = dirs::cache_dir()
            .ok_or_else(|| AuthError::TokenStorage("Could not find cache directory".to_string()))?
            .join("studio");
        Self::new(cache_dir)
    }

    pub fn path(&self) -> &Path {
        &self.session_path
    }
}

impl SessionStorage for FileStorage {
    fn load(&self) -> Result<StoredSession, AuthError> {
        if !self.session_path.exists() {
            return Ok(StoredSession::default());
        }

        let json = fs::read_to_string(&self.session_path)
            .map_err(|e| AuthError::TokenStorage(format!("Failed to read session: {}", e)))?;

        let map: BTreeMap<String, String> = serde_json::from_str(&json)?;
        Ok(StoredSession::from_map(map))
    }

    fn save(&self, token: &str, user: &str) -> Result<(), AuthError> {
        let map = BTreeMap::from([
            (TOKEN_KEY.to_string(), token.to_string()),
            (USER_KEY.to_string(), user.to_string()),
        ]);
        let json = serde_json::to_string_pretty(&map)?;

        fs::write(&self.session_path, json)
            .map_err(|e| AuthError::TokenStorage(format!("Failed to save session: {}", e)))?;

        // Set permissions to 0600 (read/write for owner only)
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = fs::metadata(&self.session_path)
                .map_err(|e| {
                    AuthError::TokenStorage(format!("Failed to get file permissions: {}", e))
                })?
                .permissions();
            perms.set_mode(0o600);
            fs::set_permissions(&self.session_path, perms).map_err(|e| {
                AuthError::TokenStorage(format!("Failed to set file permissions: {}", e))
            })?;
        }

        Ok(())
    }

    fn clear(&self) -> Result<(), AuthError> {
        if self.session_path.exists() {
            fs::remove_file(&self.session_path)
                .map_err(|e| AuthError::TokenStorage(format!("Failed to delete session: {}", e)))?;
        }
        Ok(())
    }
}

/// Process-local session storage.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-filled with raw values, as a previous run would have left it.
    pub fn with_session(token: &str, user: &str) -> Self {
        let storage = Self::new();
        storage.insert(TOKEN_KEY, token);
        storage.insert(USER_KEY, user);
        storage
    }

    fn insert(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
    }

    pub fn is_empty(&self) -> bool {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }
}

impl SessionStorage for MemoryStorage {
    fn load(&self) -> Result<StoredSession, AuthError> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(StoredSession::from_map(entries.clone()))
    }

    fn save(&self, token: &str, user: &str) -> Result<(), AuthError> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.insert(TOKEN_KEY.to_string(), token.to_string());
        entries.insert(USER_KEY.to_string(), user.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), AuthError> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.remove(TOKEN_KEY);
        entries.remove(USER_KEY);
        Ok(())
    }
}
