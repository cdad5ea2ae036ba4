//! Read-side views over the full entry list
//!
//! Nothing here is persisted. Every view is recomputed from the loaded
//! collection on each read.

use crate::domain::entry::{EntryId, JournalEntry};
use crate::error::{DayjotError, Result};
use chrono::NaiveDate;

/// Entries filed under the journal day `date`, newest first
pub fn by_date(entries: &[JournalEntry], date: NaiveDate) -> Vec<JournalEntry> {
    let mut matching: Vec<JournalEntry> = entries.iter().filter(|e| e.date == date).cloned().collect();
    newest_first(&mut matching);
    matching
}

/// Entries whose persisted `createdAt` string starts with `day_prefix`.
///
/// This looks at the creation instant (UTC), not the journal day.
pub fn by_day_prefix(entries: &[JournalEntry], day_prefix: &str) -> Vec<JournalEntry> {
    entries
        .iter()
        .filter(|e| e.created_at_iso().starts_with(day_prefix))
        .cloned()
        .collect()
}

pub fn favorites(entries: &[JournalEntry]) -> Vec<JournalEntry> {
    entries.iter().filter(|e| e.is_memorable()).cloned().collect()
}

/// Sort by `created_at` descending. Ties keep their current order.
pub fn newest_first(entries: &mut [JournalEntry]) {
    entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

/// Filters of the entry list screen; both may be active at once
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryFilter {
    /// Keep only entries created on this day (`YYYY-MM-DD`, UTC)
    pub created_on: Option<String>,
    pub memorable_only: bool,
}

impl EntryFilter {
    pub fn apply(&self, entries: &[JournalEntry]) -> Vec<JournalEntry> {
        let mut result = match &self.created_on {
            Some(prefix) => by_day_prefix(entries, prefix),
            None => entries.to_vec(),
        };
        if self.memorable_only {
            result.retain(JournalEntry::is_memorable);
        }
        result
    }
}

/// Resolve user input to a stored id.
///
/// Accepts the full id, or the `JE-xxxxxx` short form as long as exactly one
/// entry ends with that suffix.
pub fn resolve_id(entries: &[JournalEntry], input: &str) -> Result<EntryId> {
    let input = input.trim();
    if let Some(entry) = entries.iter().find(|e| e.id.as_str() == input) {
        return Ok(entry.id.clone());
    }

    let suffix = input
        .strip_prefix("JE-")
        .or_else(|| input.strip_prefix("je-"))
        .unwrap_or(input);
    if suffix.is_empty() {
        return Err(DayjotError::EntryNotFound(input.to_string()));
    }

    let mut matches = entries.iter().filter(|e| e.id.as_str().ends_with(suffix));
    match (matches.next(), matches.next()) {
        (Some(entry), None) => Ok(entry.id.clone()),
        (Some(_), Some(_)) => Err(DayjotError::AmbiguousId(input.to_string())),
        _ => Err(DayjotError::EntryNotFound(input.to_string())),
    }
}
