//! Tally CLI - Personal finance tracker
//!
//! Usage:
//!   tally serve --port 3000          Start the web server
//!   tally dashboard -f records.json  Print the dashboard summary
//!   tally performance -f records.json Print recommendations

mod cli;
mod commands;

#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    match cli.command {
        Commands::Serve {
            port,
            host,
            static_dir,
            seed,
        } => commands::cmd_serve(&host, port, static_dir.as_deref(), seed.as_deref()).await,
        Commands::Dashboard { file } => commands::cmd_dashboard(&file),
        Commands::Performance { file } => commands::cmd_performance(&file),
    }
}
