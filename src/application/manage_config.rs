//! Config management use case

use crate::error::{DayjotError, Result};
use crate::infrastructure::{Config, FileSystemRepository, JournalRepository};

const VALID_KEYS: &str = "editor, storage_key, allow_future_dates, created";

/// Service for managing journal configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "editor" => Ok(config.editor),
            "storage_key" => Ok(config.storage_key),
            "allow_future_dates" => Ok(config.allow_future_dates.to_string()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(DayjotError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: {}",
                key, VALID_KEYS
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "editor" => config.editor = value.to_string(),
            "storage_key" => {
                if value.trim().is_empty() {
                    return Err(DayjotError::Config("storage_key cannot be empty".to_string()));
                }
                config.storage_key = value.trim().to_string();
            }
            "allow_future_dates" => {
                config.allow_future_dates = parse_bool(value).ok_or_else(|| {
                    DayjotError::Config(format!(
                        "Invalid value for allow_future_dates: '{}' (expected true or false)",
                        value
                    ))
                })?;
            }
            "created" => {
                return Err(DayjotError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(DayjotError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: {}",
                    key, VALID_KEYS
                )));
            }
        }

        self.repository.save_config(&config)?;
        tracing::debug!(key, value, "config updated");
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}
