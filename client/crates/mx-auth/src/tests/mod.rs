mod cookie_file;
mod route;

use crate::{SessionCache, SessionStore};

use chrono::{TimeZone, Utc};
use mx_core::Identity;
use tempfile::TempDir;

pub(crate) fn identity(id: i64, email: &str) -> Identity {
    Identity::new(
        id,
        email,
        None,
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
    )
    .unwrap()
}

/// Store backed by a cache file in a fresh temp dir
pub(crate) fn temp_store() -> (TempDir, SessionStore) {
    let temp = TempDir::new().unwrap();
    let cache = SessionCache::new(temp.path().join("user.json"));
    (temp, SessionStore::new(cache))
}
