//! Initialize journal use case

use crate::error::Result;
use crate::infrastructure::{Config, FileSystemRepository, JournalRepository};
use std::fs;
use std::path::Path;

/// Initialize a new journal at the specified path.
pub fn init(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());
    repo.initialize()?;

    let config = Config::new();
    repo.save_config(&config)?;

    // Start with an empty array so the first read is "stored", not "missing"
    repo.entry_store(&config).save_all(&[])?;

    tracing::info!(root = %path.display(), "initialized journal");
    println!("Initialized dayjot journal at {}", path.display());

    Ok(())
}
