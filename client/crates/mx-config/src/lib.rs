mod api_config;
mod cache_config;
mod config;
mod error;
mod log_level;
mod logging_config;

#[cfg(test)]
mod tests;

pub use api_config::ApiConfig;
pub use cache_config::CacheConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:7701";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const MIN_TIMEOUT_SECS: u64 = 1;
pub const MAX_TIMEOUT_SECS: u64 = 300;
pub const DEFAULT_CACHE_NAMESPACE: &str = "user";
pub const DEFAULT_LOG_COLORED: bool = true;

const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Warn;
const CONFIG_DIR_ENV: &str = "MX_CONFIG_DIR";
const CONFIG_DIR_NAME: &str = ".mx";
const CONFIG_FILE_NAME: &str = "config.toml";
