//! Pure collection transforms behind every store mutation
//!
//! Each function takes the current collection and returns the next one.
//! Nothing here touches storage or reads the clock; timestamps are passed in.

use crate::domain::collection::EntryCollection;
use crate::domain::entry::{EntryId, JournalEntry};
use crate::error::{DayjotError, Result};
use chrono::{DateTime, NaiveDate, Utc};

/// Add a new entry at the front of the collection.
///
/// Returns the next collection and the record that was created.
pub fn apply_create(
    mut collection: EntryCollection,
    date: NaiveDate,
    text: String,
    now: DateTime<Utc>,
) -> (EntryCollection, JournalEntry) {
    let id = collection.next_id(now);
    let entry = JournalEntry::new(id, date, text, now);
    collection.prepend(entry.clone());
    (collection, entry)
}

/// Replace the text of `id` and stamp `updated_at`
pub fn apply_update(
    mut collection: EntryCollection,
    id: &EntryId,
    text: String,
    now: DateTime<Utc>,
) -> Result<EntryCollection> {
    let entry = collection
        .get_mut(id)
        .ok_or_else(|| DayjotError::EntryNotFound(id.to_string()))?;
    entry.text = text;
    entry.updated_at = Some(now);
    Ok(collection)
}

/// Flip the memorable flag of `id`. Content and `updated_at` are left alone.
pub fn apply_toggle(mut collection: EntryCollection, id: &EntryId) -> Result<EntryCollection> {
    let entry = collection
        .get_mut(id)
        .ok_or_else(|| DayjotError::EntryNotFound(id.to_string()))?;
    entry.memorable = Some(!entry.is_memorable());
    Ok(collection)
}

pub fn apply_delete(mut collection: EntryCollection, id: &EntryId) -> Result<EntryCollection> {
    collection
        .remove(id)
        .ok_or_else(|| DayjotError::EntryNotFound(id.to_string()))?;
    Ok(collection)
}
