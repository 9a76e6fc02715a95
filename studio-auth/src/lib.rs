// Common types shared between client and server
pub mod common;

// Client library (public API for the studio app)
mod client;
mod error;

pub use client::{
    auth_client, connect, AuthClient, AuthClientError, FileStorage, GateDecision, MemoryStorage,
    Navigator, Route, SessionGate, SessionStatus, SessionStorage, Settings, StoredSession,
    NO_TOKEN_MESSAGE, TOKEN_KEY, USER_KEY,
};
pub use common::Principal;
pub use error::AuthError;

// Test doubles for gate consumers
pub mod testing;

// Mock auth service (public for binary and tests)
#[cfg(feature = "server")]
pub mod server;
