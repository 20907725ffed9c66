//! Server command implementation

use std::path::Path;

use anyhow::{Context, Result};
use tally_core::store::RecordStore;

pub async fn cmd_serve(
    host: &str,
    port: u16,
    static_dir: Option<&Path>,
    seed: Option<&Path>,
) -> Result<()> {
    println!("🚀 Starting Tally web server...");
    println!("   Listening: http://{}:{}", host, port);
    if let Some(dir) = static_dir {
        println!("   Static files: {}", dir.display());
    }

    let store = RecordStore::new();
    if let Some(file) = seed {
        store
            .load_snapshot_file(file)
            .with_context(|| format!("Failed to load seed file {}", file.display()))?;
        tracing::debug!(seed = %file.display(), "Store seeded");
        println!("   Seeded from: {}", file.display());
    } else {
        println!("   Store: empty (in-memory, resets on restart)");
    }
    println!();
    println!("   Press Ctrl+C to stop");

    let config = tally_server::ServerConfig::default();
    let static_dir_str =
        static_dir.map(|p| p.to_str().expect("static_dir path must be valid UTF-8"));
    tally_server::serve(store, host, port, static_dir_str, config).await?;

    Ok(())
}
