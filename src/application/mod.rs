//! Application layer - Use cases and orchestration

pub mod browse;
pub mod init;
pub mod manage_config;
pub mod manage_entry;
pub mod write_entry;

pub use browse::{BrowseService, DayView};
pub use manage_config::ConfigService;
pub use manage_entry::EntryService;
pub use write_entry::{validate_text, WriteEntryService};

use crate::error::Result;
use crate::infrastructure::{Config, EntryStore, FileStorage, FileSystemRepository, JournalRepository};

/// Load config and open the entry store it points at
pub(crate) fn open_store(repository: &FileSystemRepository) -> Result<(Config, EntryStore<FileStorage>)> {
    let config = repository.load_config()?;
    let store = repository.entry_store(&config);
    Ok((config, store))
}
