use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Config error: {0}")]
    Config(#[from] mx_config::ConfigError),

    #[error("Client error: {0}")]
    Client(#[from] mx_auth::ClientError),

    #[error("Cache error: {0}")]
    Cache(#[from] mx_auth::CacheError),

    #[error("{}", .0.summary())]
    Flow(#[from] mx_auth::FlowError),

    #[error("Invalid URL {url}: {message}")]
    Url { url: String, message: String },

    #[error("Logger error: {message}")]
    Logger { message: String },
}

pub type Result<T> = std::result::Result<T, CliError>;
