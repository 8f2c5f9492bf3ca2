#![allow(dead_code)]

use mx_auth::{AuthClient, SessionCache, SessionStore};

use std::time::Duration;

use serde_json::{Value, json};
use tempfile::TempDir;
use wiremock::MockServer;

pub fn user_json(id: i64, email: &str) -> Value {
    json!({
        "id": id,
        "email": email,
        "created_at": "2024-01-01T00:00:00Z"
    })
}

pub fn auth_response(id: i64, email: &str) -> Value {
    json!({ "user": user_json(id, email) })
}

pub fn client_for(server: &MockServer) -> AuthClient {
    AuthClient::new(&server.uri(), Duration::from_secs(5)).unwrap()
}

/// Store over a cache file in a fresh temp dir; keep the dir alive
pub fn temp_store() -> (TempDir, SessionStore) {
    let temp = TempDir::new().unwrap();
    let cache = SessionCache::new(temp.path().join("user.json"));
    (temp, SessionStore::new(cache))
}
