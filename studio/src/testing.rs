use std::sync::Arc;
use studio_auth::testing::{RecordingNavigator, RecordingStorage};
use studio_auth::{Principal, SessionGate, SessionStatus, Settings};

pub type TestGate = SessionGate<RecordingStorage, RecordingNavigator>;

pub const TEST_TOKEN: &str = "mock-jwt-token-1";

pub fn admin() -> Principal {
    Principal {
        id: "1".to_string(),
        email: "admin@s51studios.com".to_string(),
        name: "Admin User".to_string(),
        role: "Admin".to_string(),
    }
}

fn build(api_url: &str, storage: RecordingStorage) -> Arc<TestGate> {
    let gate = SessionGate::new(
        &Settings::with_api_url(api_url),
        storage,
        RecordingNavigator::new(),
    )
    .expect("test settings are valid");
    gate.initialize();
    Arc::new(gate)
}

/// Gate restored from storage as if the admin had logged in on a previous run.
pub fn signed_in_gate(api_url: &str) -> Arc<TestGate> {
    let user = serde_json::to_string(&admin()).expect("principal serializes");
    let gate = build(api_url, RecordingStorage::with_session(TEST_TOKEN, &user));
    assert_eq!(gate.status(), SessionStatus::Authenticated);
    gate
}

/// Gate with empty storage.
pub fn anonymous_gate(api_url: &str) -> Arc<TestGate> {
    build(api_url, RecordingStorage::new())
}
