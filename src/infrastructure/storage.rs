//! Key-value storage backends
//!
//! The entry store persists one string payload under one key. Backends only
//! need to get and replace whole values; a replace either fully lands or
//! leaves the previous value in place.

use crate::error::Result;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

static TMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Flat string-to-string storage
pub trait KeyValueStorage: Send + Sync {
    /// Read the value stored under `key`, `None` if it was never written
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`
    fn set_item(&self, key: &str, value: &str) -> Result<()>;
}

/// One file per key inside a directory
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: PathBuf) -> Self {
        FileStorage { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File backing `key`: `@journal_entries` maps to `journal_entries.json`
    pub fn path_for_key(&self, key: &str) -> PathBuf {
        let name: String = key
            .trim_start_matches('@')
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        let name = if name.is_empty() { "default".to_string() } else { name };
        self.dir.join(format!("{}.json", name))
    }
}

impl KeyValueStorage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for_key(key);
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Write to a temp file beside the target, then rename it into place.
    ///
    /// On Windows `rename` does not overwrite, so the old file is removed first.
    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for_key(key);

        if !self.dir.exists() {
            fs::create_dir_all(&self.dir)?;
        }

        let tmp_name = format!(
            "{}.dayjot-tmp-{}-{}",
            path.file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("entries.json"),
            std::process::id(),
            TMP_COUNTER.fetch_add(1, Ordering::Relaxed)
        );
        let tmp_path = path.with_file_name(tmp_name);

        fs::write(&tmp_path, value)?;

        #[cfg(windows)]
        {
            if path.exists() {
                fs::remove_file(&path)?;
            }
        }

        if let Err(e) = fs::rename(&tmp_path, &path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(e.into());
        }
        Ok(())
    }
}

/// Process-local storage, used by tests and embedders that persist elsewhere
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let items = self.items.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let mut items = self.items.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
