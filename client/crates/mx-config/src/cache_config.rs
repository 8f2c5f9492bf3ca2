use crate::{ConfigError, ConfigErrorResult, DEFAULT_CACHE_NAMESPACE};

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Local session cache location.
///
/// The namespace is the fixed key of the cached identity; it becomes the
/// file stem of both the identity file and the cookie file.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    pub namespace: String,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            namespace: String::from(DEFAULT_CACHE_NAMESPACE),
        }
    }
}

impl CacheConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.namespace.is_empty() {
            return Err(ConfigError::cache("cache.namespace cannot be empty"));
        }

        if !self
            .namespace
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(ConfigError::cache(format!(
                "cache.namespace may only contain ASCII letters, digits, '-' and '_', got {:?}",
                self.namespace
            )));
        }

        Ok(())
    }

    pub fn identity_path(&self, dir: &Path) -> PathBuf {
        dir.join(format!("{}.json", self.namespace))
    }

    pub fn cookie_path(&self, dir: &Path) -> PathBuf {
        dir.join(format!("{}.cookies", self.namespace))
    }
}
