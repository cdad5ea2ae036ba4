//! Journal root discovery and layout

use crate::error::{DayjotError, Result};
use crate::infrastructure::config::DATA_DIR;
use crate::infrastructure::{Config, EntryStore, FileStorage};
use std::fs;
use std::path::{Path, PathBuf};

/// Abstract repository for journal operations
pub trait JournalRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .dayjot/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .dayjot/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .dayjot directory exists
    fn is_initialized(&self) -> bool;

    /// Create .dayjot directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of JournalRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Find the journal root: DAYJOT_ROOT if set, else walk up from the current directory
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("DAYJOT_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_data_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            }
            return Err(DayjotError::Config(format!(
                "DAYJOT_ROOT is set to '{}' but no .dayjot directory found. \
                Run 'dayjot init' in that directory or unset DAYJOT_ROOT.",
                path.display()
            )));
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Walk up from `start` until a directory containing .dayjot is found
    pub fn discover_from(start: &Path) -> Result<Self> {
        start
            .ancestors()
            .find(|dir| Self::has_data_dir(dir))
            .map(|dir| FileSystemRepository::new(dir.to_path_buf()))
            .ok_or_else(|| DayjotError::NotJournalDirectory(start.to_path_buf()))
    }

    fn has_data_dir(path: &Path) -> bool {
        path.join(DATA_DIR).is_dir()
    }

    pub fn data_dir(&self) -> PathBuf {
        self.root.join(DATA_DIR)
    }

    /// Entry store backed by files in .dayjot, under the configured key
    pub fn entry_store(&self, config: &Config) -> EntryStore<FileStorage> {
        EntryStore::with_key(FileStorage::new(self.data_dir()), config.storage_key.clone())
    }

    /// Scratch file used while composing an entry in the editor
    pub fn scratch_path(&self) -> PathBuf {
        self.data_dir().join("ENTRY_EDITMSG.txt")
    }
}

impl JournalRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_data_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        if self.is_initialized() {
            return Err(DayjotError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir_all(self.data_dir())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    #[test]
    fn test_initialize_twice_fails() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());

        assert!(!repo.is_initialized());
        repo.initialize().unwrap();
        assert!(repo.is_initialized());
        assert!(matches!(repo.initialize(), Err(DayjotError::Config(_))));
    }

    #[test]
    fn test_discover_from_nested_directory() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();

        let nested = temp.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();

        let found = FileSystemRepository::discover_from(&nested).unwrap();
        assert_eq!(found.root, temp.path());
    }

    #[test]
    fn test_discover_from_uninitialized() {
        let temp = TempDir::new().unwrap();
        match FileSystemRepository::discover_from(temp.path()) {
            Err(DayjotError::NotJournalDirectory(path)) => assert_eq!(path, temp.path()),
            other => panic!("Expected NotJournalDirectory, got {:?}", other),
        }
    }

    #[test]
    fn test_entry_store_uses_configured_key() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();

        let mut config = Config::new();
        config.storage_key = "@work_entries".to_string();
        let store = repo.entry_store(&config);
        store
            .create(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(), "hello")
            .unwrap();

        assert!(temp.path().join(".dayjot/work_entries.json").exists());
    }
}
