//! In-memory entry collection keyed by id

use crate::domain::entry::{EntryId, JournalEntry};
use crate::error::{DayjotError, Result};
use chrono::{DateTime, Utc};
use std::collections::{HashMap, HashSet};

/// First id that occurs more than once in `entries`
pub fn find_duplicate_id(entries: &[JournalEntry]) -> Option<&EntryId> {
    let mut seen = HashSet::new();
    entries.iter().map(|e| &e.id).find(|id| !seen.insert(*id))
}

/// All journal entries, addressable by id, remembering stored order.
///
/// Lookups go through the id map; `order` only matters when the collection
/// is flattened back into the persisted array.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryCollection {
    order: Vec<EntryId>,
    by_id: HashMap<EntryId, JournalEntry>,
}

impl EntryCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from the persisted array. Fails with `DuplicateId` if an id repeats.
    pub fn from_entries(entries: Vec<JournalEntry>) -> Result<Self> {
        if let Some(id) = find_duplicate_id(&entries) {
            return Err(DayjotError::DuplicateId(id.to_string()));
        }
        let mut collection = EntryCollection::new();
        for entry in entries {
            collection.order.push(entry.id.clone());
            collection.by_id.insert(entry.id.clone(), entry);
        }
        Ok(collection)
    }

    /// Flatten back into stored order
    pub fn into_entries(mut self) -> Vec<JournalEntry> {
        self.order
            .iter()
            .filter_map(|id| self.by_id.remove(id))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &JournalEntry> {
        self.order.iter().filter_map(|id| self.by_id.get(id))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn get(&self, id: &EntryId) -> Option<&JournalEntry> {
        self.by_id.get(id)
    }

    pub fn contains(&self, id: &EntryId) -> bool {
        self.by_id.contains_key(id)
    }

    pub(crate) fn get_mut(&mut self, id: &EntryId) -> Option<&mut JournalEntry> {
        self.by_id.get_mut(id)
    }

    /// Id for an entry created at `created_at`, bumped past any id already taken
    pub fn next_id(&self, created_at: DateTime<Utc>) -> EntryId {
        let mut millis = created_at.timestamp_millis();
        loop {
            let candidate = EntryId::new(millis.to_string());
            if !self.contains(&candidate) {
                return candidate;
            }
            millis += 1;
        }
    }

    pub(crate) fn prepend(&mut self, entry: JournalEntry) {
        self.order.insert(0, entry.id.clone());
        self.by_id.insert(entry.id.clone(), entry);
    }

    pub(crate) fn remove(&mut self, id: &EntryId) -> Option<JournalEntry> {
        let removed = self.by_id.remove(id)?;
        self.order.retain(|existing| existing != id);
        Some(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};

    fn entry(id: &str, text: &str) -> JournalEntry {
        JournalEntry::new(
            EntryId::new(id),
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            text.to_string(),
            Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap(),
        )
    }

    #[test]
    fn test_preserves_stored_order() {
        let collection = EntryCollection::from_entries(vec![entry("3", "c"), entry("1", "a"), entry("2", "b")]).unwrap();
        let texts: Vec<_> = collection.iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, vec!["c", "a", "b"]);
        let ids: Vec<_> = collection
            .into_entries()
            .into_iter()
            .map(|e| e.id.to_string())
            .collect();
        assert_eq!(ids, vec!["3", "1", "2"]);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = EntryCollection::from_entries(vec![entry("1", "first"), entry("2", "b"), entry("1", "second")]);
        assert!(matches!(result, Err(DayjotError::DuplicateId(id)) if id == "1"));
    }

    #[test]
    fn test_find_duplicate_id() {
        assert_eq!(find_duplicate_id(&[entry("1", "a"), entry("2", "b")]), None);
        let entries = [entry("1", "a"), entry("2", "b"), entry("2", "c")];
        assert_eq!(find_duplicate_id(&entries), Some(&EntryId::new("2")));
    }

    #[test]
    fn test_next_id_skips_taken_ids() {
        let created = Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap();
        let taken = EntryId::from_timestamp(created);
        let collection = EntryCollection::from_entries(vec![entry(taken.as_str(), "x")]).unwrap();
        assert_eq!(collection.next_id(created).as_str(), "1709285400001");
        assert_eq!(EntryCollection::new().next_id(created), taken);
    }

    #[test]
    fn test_prepend_and_remove() {
        let mut collection = EntryCollection::from_entries(vec![entry("1", "a")]).unwrap();
        collection.prepend(entry("2", "b"));
        assert_eq!(collection.iter().next().unwrap().text, "b");

        let removed = collection.remove(&EntryId::new("1")).unwrap();
        assert_eq!(removed.text, "a");
        assert_eq!(collection.len(), 1);
        assert!(collection.remove(&EntryId::new("1")).is_none());
    }
}
