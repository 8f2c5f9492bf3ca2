pub(crate) mod error;
pub(crate) mod load_result;

pub use error::{CacheError, Result as CacheResult};
pub use load_result::LoadResult;

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use mx_core::Identity;

const DATE_FORMAT: &str = "%Y%m%d_%H%M%S";

/// File-backed mirror of the last known identity.
///
/// Never authoritative: the Session Store reconciles it against the server.
#[derive(Debug, Clone)]
pub struct SessionCache {
    path: PathBuf,
}

impl SessionCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_present(&self) -> bool {
        self.path.exists()
    }

    /// Reads the cached identity.
    ///
    /// Returns:
    /// - `Ok(LoadResult { identity: Some(...), corruption_error: None })` - loaded
    /// - `Ok(LoadResult { identity: None, corruption_error: None })` - no cache entry
    /// - `Ok(LoadResult { identity: None, corruption_error: Some(...) })` - unusable content
    pub fn load(&self) -> CacheResult<LoadResult> {
        if !self.path.exists() {
            debug!("No session cache at {:?}", self.path);
            return Ok(LoadResult::default());
        }

        let contents = fs::read_to_string(&self.path)
            .map_err(|e| CacheError::file_read(self.path.clone(), e))?;

        let parsed = serde_json::from_str::<Identity>(&contents)
            .map_err(|e| e.to_string())
            .and_then(|identity| {
                identity
                    .validate()
                    .map(|_| identity)
                    .map_err(|e| e.to_string())
            });

        match parsed {
            Ok(identity) => {
                debug!("Loaded cached identity {} from {:?}", identity.id, self.path);
                Ok(LoadResult {
                    identity: Some(identity),
                    corruption_error: None,
                })
            }
            Err(e) => {
                warn!("Session cache corrupted at {:?}: {e}", self.path);
                Ok(LoadResult {
                    identity: None,
                    corruption_error: Some(e),
                })
            }
        }
    }

    /// Writes the identity, replacing any previous entry.
    pub fn save(&self, identity: &Identity) -> CacheResult<()> {
        let json = serde_json::to_string_pretty(identity)?;
        write_atomic(&self.path, json.as_bytes())?;
        debug!("Cached identity {} at {:?}", identity.id, self.path);
        Ok(())
    }

    /// Removes the cache entry. Missing entry is not an error.
    pub fn clear(&self) -> CacheResult<()> {
        remove_if_exists(&self.path)
    }

    /// Renames an unusable cache file to `<name>.corrupted.{timestamp}`.
    pub fn backup_corrupted(&self) -> CacheResult<Option<PathBuf>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| String::from("session"));
        let timestamp = chrono::Utc::now().format(DATE_FORMAT);
        let backup_path = self
            .path
            .with_file_name(format!("{file_name}.corrupted.{timestamp}"));

        fs::rename(&self.path, &backup_path)
            .map_err(|e| CacheError::backup_failed(self.path.clone(), e))?;

        info!("Backed up corrupted session cache to {backup_path:?}");
        Ok(Some(backup_path))
    }
}

/// Write through a temp file, fsync, then rename over `path`.
pub(crate) fn write_atomic(path: &Path, bytes: &[u8]) -> CacheResult<()> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(dir).map_err(|e| CacheError::dir_creation(dir.to_path_buf(), e))?;

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let temp_path = dir.join(format!("{file_name}.tmp.{}", std::process::id()));

    {
        let mut file = fs::File::create(&temp_path)
            .map_err(|e| CacheError::file_write(temp_path.clone(), e))?;

        file.write_all(bytes)
            .map_err(|e| CacheError::file_write(temp_path.clone(), e))?;

        file.sync_all()
            .map_err(|e| CacheError::file_write(temp_path.clone(), e))?;
    }

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        CacheError::atomic_rename(temp_path.clone(), path.to_path_buf(), e)
    })
}

pub(crate) fn remove_if_exists(path: &Path) -> CacheResult<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(CacheError::file_remove(path.to_path_buf(), e)),
    }
}
