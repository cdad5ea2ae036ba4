//! Read-only views: one day, the filtered list, favorites, calendar marks

use crate::application::open_store;
use crate::domain::{calendar, EntryFilter, JournalEntry, TimeReference};
use crate::error::{DayjotError, Result};
use crate::infrastructure::FileSystemRepository;
use chrono::{Local, NaiveDate};
use std::collections::BTreeMap;

/// Entries filed under one journal day
#[derive(Debug, Clone)]
pub struct DayView {
    pub date: NaiveDate,
    pub day_name: String,
    /// Newest first
    pub entries: Vec<JournalEntry>,
}

pub struct BrowseService {
    repository: FileSystemRepository,
}

impl BrowseService {
    pub fn new(repository: FileSystemRepository) -> Self {
        BrowseService { repository }
    }

    pub fn day(&self, date_ref: &str) -> Result<DayView> {
        self.day_relative_to(date_ref, Local::now().date_naive())
    }

    pub fn day_relative_to(&self, date_ref: &str, today: NaiveDate) -> Result<DayView> {
        let date = TimeReference::parse(date_ref)?.resolve(today);
        let (_, store) = open_store(&self.repository)?;
        Ok(DayView {
            date,
            day_name: calendar::day_name(date),
            entries: store.find_by_date(date),
        })
    }

    /// All entries in stored order, narrowed by `filter`
    pub fn list(&self, filter: &EntryFilter) -> Result<Vec<JournalEntry>> {
        let (_, store) = open_store(&self.repository)?;
        Ok(filter.apply(&store.load_all()))
    }

    pub fn favorites(&self) -> Result<Vec<JournalEntry>> {
        let (_, store) = open_store(&self.repository)?;
        Ok(store.find_favorites())
    }

    /// Days of one month that have entries, with counts
    pub fn calendar(&self, year: i32, month: u32) -> Result<BTreeMap<NaiveDate, usize>> {
        let (first, last) = calendar::month_bounds(year, month)
            .ok_or_else(|| DayjotError::InvalidTimeReference(format!("{}-{:02}", year, month)))?;
        let (_, store) = open_store(&self.repository)?;
        Ok(store
            .marked_dates()
            .range(first..=last)
            .map(|(date, count)| (*date, *count))
            .collect())
    }
}
