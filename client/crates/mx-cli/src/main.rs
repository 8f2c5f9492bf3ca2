//! mx - terminal client for the metrics platform's sign-in flow
//!
//! Prints one JSON object per command on stdout; logs go to stderr or the
//! configured log file.
//!
//! # Examples
//!
//! ```bash
//! # Sign in
//! mx login --email me@example.com --password secret123
//!
//! # Who am I (verified against the server)
//! mx whoami --pretty
//!
//! # Finish a Google sign-in
//! mx callback "http://localhost:3000/auth/callback?id=42&email=me%40example.com"
//! ```

use mx_cli::{App, Cli, CliResult, initialize_logger};
use mx_config::Config;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::debug;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = run(cli.server, cli.command).await;

    match result {
        Ok(value) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(server: Option<String>, command: mx_cli::Commands) -> CliResult<serde_json::Value> {
    let config = Config::load()?;
    config.validate()?;

    let log_file = match &config.logging.file {
        Some(file) => Some(resolve_log_path(file)?),
        None => None,
    };
    initialize_logger(config.logging.level, log_file, config.logging.colored)?;
    config.log_summary();

    // Explicit flag > config file / env
    let base_url = server.unwrap_or_else(|| config.api.base_url().to_string());
    debug!("Using server {base_url}");

    let mut app = App::new(
        &base_url,
        config.api.timeout(),
        config.identity_cache_path()?,
        config.cookie_path()?,
    )?;

    app.execute(command).await
}

/// Relative log paths live next to config.toml.
fn resolve_log_path(file: &str) -> CliResult<PathBuf> {
    let path = PathBuf::from(file);
    if path.is_absolute() {
        Ok(path)
    } else {
        Ok(Config::config_dir()?.join(path))
    }
}
