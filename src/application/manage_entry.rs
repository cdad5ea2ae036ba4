//! Favorite toggling and deletion of single entries

use crate::application::open_store;
use crate::domain::{query, JournalEntry};
use crate::error::{DayjotError, Result};
use crate::infrastructure::FileSystemRepository;

pub struct EntryService {
    repository: FileSystemRepository,
}

impl EntryService {
    pub fn new(repository: FileSystemRepository) -> Self {
        EntryService { repository }
    }

    /// Look up one entry by full id or `JE-xxxxxx`
    pub fn find(&self, id: &str) -> Result<JournalEntry> {
        let (_, store) = open_store(&self.repository)?;
        let entries = store.try_load_all()?;
        let id = query::resolve_id(&entries, id)?;
        entries
            .into_iter()
            .find(|e| e.id == id)
            .ok_or_else(|| DayjotError::EntryNotFound(id.to_string()))
    }

    pub fn toggle_favorite(&self, id: &str) -> Result<JournalEntry> {
        let (_, store) = open_store(&self.repository)?;
        let id = query::resolve_id(&store.try_load_all()?, id)?;
        store.toggle_favorite(&id)
    }

    pub fn delete(&self, id: &str) -> Result<JournalEntry> {
        let (_, store) = open_store(&self.repository)?;
        let id = query::resolve_id(&store.try_load_all()?, id)?;
        store.delete(&id)
    }
}
