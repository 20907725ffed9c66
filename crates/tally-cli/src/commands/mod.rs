//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `reports` - Terminal renditions of the dashboard and performance views
//! - `serve` - Web server command

pub mod reports;
pub mod serve;

// Re-export command functions for main.rs
pub use reports::*;
pub use serve::*;

use std::path::Path;

use anyhow::{Context, Result};
use tally_core::store::RecordStore;

/// Load a snapshot file into a fresh store.
pub fn load_store(file: &Path) -> Result<RecordStore> {
    let store = RecordStore::new();
    store
        .load_snapshot_file(file)
        .with_context(|| format!("Failed to load snapshot from {}", file.display()))?;
    tracing::debug!(
        incomes = store.list_incomes().len(),
        expenses = store.list_expenses().len(),
        "Loaded snapshot from {}",
        file.display()
    );
    Ok(store)
}
