use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "mx")]
#[command(about = "Sign in to the metrics platform from the terminal")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Server URL (overrides api.base_url from config.toml)
    #[arg(long, global = true)]
    pub server: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
