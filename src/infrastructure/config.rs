//! Configuration management

use crate::error::{DayjotError, Result};
use crate::infrastructure::entry_store::DEFAULT_STORAGE_KEY;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Directory under the journal root holding config and entry data
pub const DATA_DIR: &str = ".dayjot";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub editor: String,
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    /// Allow writing entries for days after today
    #[serde(default)]
    pub allow_future_dates: bool,
    pub created: DateTime<Utc>,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            editor: Self::detect_default_editor(),
            storage_key: default_storage_key(),
            allow_future_dates: false,
            created: Utc::now(),
        }
    }

    /// Load config from .dayjot/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(DATA_DIR).join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                DayjotError::NotJournalDirectory(path.to_path_buf())
            } else {
                DayjotError::Io(e)
            }
        })?;

        let config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save config to .dayjot/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let data_dir = path.join(DATA_DIR);

        if !data_dir.exists() {
            fs::create_dir(&data_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;

        fs::write(data_dir.join("config.toml"), contents)?;
        Ok(())
    }

    /// Editor command; EDITOR and VISUAL win over the configured value
    pub fn get_editor(&self) -> String {
        std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| self.editor.clone())
    }

    fn detect_default_editor() -> String {
        std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(windows) {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
