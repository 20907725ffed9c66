//! CLI argument definitions using clap
//!
//! This module contains the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Tally - Track income, expenses, and where the money should go
#[derive(Parser)]
#[command(name = "tally")]
#[command(about = "Personal finance tracker with a 50/30/20 dashboard", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Directory containing static files to serve (e.g., ui/dist)
        #[arg(long)]
        static_dir: Option<PathBuf>,

        /// JSON snapshot to pre-populate the in-memory store
        ///
        /// The store starts empty and resets on restart; a seed file is the
        /// only way to begin with existing records.
        #[arg(long)]
        seed: Option<PathBuf>,
    },

    /// Show the dashboard summary for a snapshot file
    Dashboard {
        /// JSON snapshot of incomes and expenses
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Show the performance report and recommendations for a snapshot file
    Performance {
        /// JSON snapshot of incomes and expenses
        #[arg(short, long)]
        file: PathBuf,
    },
}
