//! Entry store: the whole journal as one JSON array under one storage key

use crate::domain::{
    apply_create, apply_delete, apply_toggle, apply_update, calendar, collection, query, timestamp_now,
    EntryCollection, EntryId, JournalEntry,
};
use crate::error::{DayjotError, Result};
use crate::infrastructure::storage::KeyValueStorage;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

/// Storage key the entry array lives under
pub const DEFAULT_STORAGE_KEY: &str = "@journal_entries";

/// Where the entries of a [`Snapshot`] came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadSource {
    /// Nothing has been saved under the key yet
    Missing,
    Stored,
    /// A payload exists but is not a valid entry array
    Unreadable(String),
}

/// Result of a read that keeps "empty" and "unreadable" apart
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub entries: Vec<JournalEntry>,
    pub source: LoadSource,
}

/// Durable mapping from entry id to journal entry.
///
/// Reads load the full array and filter in memory. Every mutation is
/// read-full, transform, write-full, run under a single writer lock so that
/// overlapping mutations from several threads cannot drop each other's
/// changes.
pub struct EntryStore<S> {
    storage: S,
    key: String,
    writer: Mutex<()>,
}

impl<S: KeyValueStorage> EntryStore<S> {
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        EntryStore {
            storage,
            key: key.into(),
            writer: Mutex::new(()),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Read the full collection, reporting whether it was missing or unreadable.
    ///
    /// Only a storage I/O failure is an `Err`; a payload that fails to parse is
    /// reported as [`LoadSource::Unreadable`] with no entries.
    pub fn load_snapshot(&self) -> Result<Snapshot> {
        let Some(raw) = self.storage.get_item(&self.key)? else {
            tracing::debug!(key = %self.key, "no stored entries");
            return Ok(Snapshot {
                entries: Vec::new(),
                source: LoadSource::Missing,
            });
        };

        match serde_json::from_str::<Vec<JournalEntry>>(&raw) {
            Ok(entries) => {
                tracing::debug!(key = %self.key, count = entries.len(), "loaded entries");
                Ok(Snapshot {
                    entries,
                    source: LoadSource::Stored,
                })
            }
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "stored entries could not be parsed");
                Ok(Snapshot {
                    entries: Vec::new(),
                    source: LoadSource::Unreadable(e.to_string()),
                })
            }
        }
    }

    /// Full collection; any read failure is logged and treated as "no entries"
    pub fn load_all(&self) -> Vec<JournalEntry> {
        match self.load_snapshot() {
            Ok(snapshot) => snapshot.entries,
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "failed to read stored entries");
                Vec::new()
            }
        }
    }

    /// Full collection, failing with `Parse` instead of masking a bad payload
    pub fn try_load_all(&self) -> Result<Vec<JournalEntry>> {
        let snapshot = self.load_snapshot()?;
        match snapshot.source {
            LoadSource::Unreadable(reason) => Err(DayjotError::Parse(reason)),
            _ => Ok(snapshot.entries),
        }
    }

    /// Overwrite the persisted payload with `entries`. Ids must be distinct.
    pub fn save_all(&self, entries: &[JournalEntry]) -> Result<()> {
        if let Some(id) = collection::find_duplicate_id(entries) {
            return Err(DayjotError::DuplicateId(id.to_string()));
        }
        let _guard = self.lock_writer();
        self.write_entries(entries)
    }

    pub fn find_by_date(&self, date: NaiveDate) -> Vec<JournalEntry> {
        query::by_date(&self.load_all(), date)
    }

    /// Entries whose `createdAt` starts with `day` (`YYYY-MM-DD`, UTC)
    pub fn find_by_day_prefix(&self, day: &str) -> Vec<JournalEntry> {
        query::by_day_prefix(&self.load_all(), day)
    }

    pub fn find_favorites(&self) -> Vec<JournalEntry> {
        query::favorites(&self.load_all())
    }

    pub fn get(&self, id: &EntryId) -> Option<JournalEntry> {
        self.load_all().into_iter().find(|e| &e.id == id)
    }

    pub fn marked_dates(&self) -> BTreeMap<NaiveDate, usize> {
        calendar::marked_dates(&self.load_all())
    }

    /// Create an entry for journal day `date` and put it first
    pub fn create(&self, date: NaiveDate, text: impl Into<String>) -> Result<JournalEntry> {
        let text = text.into();
        let entry = self.mutate(|collection| {
            let (next, entry) = apply_create(collection, date, text, timestamp_now());
            Ok((next, entry))
        })?;
        tracing::info!(id = %entry.id, date = %entry.date, "created entry");
        Ok(entry)
    }

    pub fn update(&self, id: &EntryId, text: impl Into<String>) -> Result<JournalEntry> {
        let text = text.into();
        let entry = self.mutate(|collection| {
            let next = apply_update(collection, id, text, timestamp_now())?;
            let updated = Self::lookup(&next, id)?;
            Ok((next, updated))
        })?;
        tracing::info!(id = %entry.id, "updated entry");
        Ok(entry)
    }

    pub fn toggle_favorite(&self, id: &EntryId) -> Result<JournalEntry> {
        let entry = self.mutate(|collection| {
            let next = apply_toggle(collection, id)?;
            let toggled = Self::lookup(&next, id)?;
            Ok((next, toggled))
        })?;
        tracing::info!(id = %entry.id, memorable = entry.is_memorable(), "toggled favorite");
        Ok(entry)
    }

    /// Remove an entry, returning the record that was deleted
    pub fn delete(&self, id: &EntryId) -> Result<JournalEntry> {
        let entry = self.mutate(|collection| {
            let removed = Self::lookup(&collection, id)?;
            let next = apply_delete(collection, id)?;
            Ok((next, removed))
        })?;
        tracing::info!(id = %entry.id, "deleted entry");
        Ok(entry)
    }

    fn lookup(collection: &EntryCollection, id: &EntryId) -> Result<JournalEntry> {
        collection
            .get(id)
            .cloned()
            .ok_or_else(|| DayjotError::EntryNotFound(id.to_string()))
    }

    /// Read, transform and write back while holding the writer lock.
    ///
    /// Refuses to run on an unreadable payload, or one with repeated ids, so
    /// that no stored record is ever overwritten or dropped.
    fn mutate<T, F>(&self, transform: F) -> Result<T>
    where
        F: FnOnce(EntryCollection) -> Result<(EntryCollection, T)>,
    {
        let _guard = self.lock_writer();

        let snapshot = self.load_snapshot()?;
        if let LoadSource::Unreadable(reason) = snapshot.source {
            return Err(DayjotError::Parse(reason));
        }

        let collection = EntryCollection::from_entries(snapshot.entries).map_err(|e| {
            tracing::warn!(key = %self.key, error = %e, "refusing to rewrite stored entries");
            e
        })?;
        let (next, value) = transform(collection)?;
        self.write_entries(&next.into_entries())?;
        Ok(value)
    }

    fn write_entries(&self, entries: &[JournalEntry]) -> Result<()> {
        let payload = serde_json::to_string(entries)?;
        self.storage.set_item(&self.key, &payload).map_err(|e| {
            tracing::error!(key = %self.key, error = %e, "failed to save entries");
            DayjotError::Write(e.to_string())
        })?;
        tracing::debug!(key = %self.key, count = entries.len(), "saved entries");
        Ok(())
    }

    fn lock_writer(&self) -> MutexGuard<'_, ()> {
        self.writer.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
