//! Calendar helpers: marked days, future-date guard, month layout

use crate::domain::entry::JournalEntry;
use chrono::{Datelike, Duration, NaiveDate};
use std::collections::BTreeMap;

/// Journal days that have at least one entry, with the entry count per day
pub fn marked_dates(entries: &[JournalEntry]) -> BTreeMap<NaiveDate, usize> {
    let mut marks = BTreeMap::new();
    for entry in entries {
        *marks.entry(entry.date).or_insert(0) += 1;
    }
    marks
}

/// Whether `date` falls after `today`
pub fn is_future_date(date: NaiveDate, today: NaiveDate) -> bool {
    date > today
}

/// Full weekday name, e.g. "Friday"
pub fn day_name(date: NaiveDate) -> String {
    date.format("%A").to_string()
}

/// First and last day of a month, or None for an invalid month
pub fn month_bounds(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some((first, next_first - Duration::days(1)))
}

/// Monday-first week rows for a month; `None` pads days outside it
pub fn month_weeks(year: i32, month: u32) -> Vec<[Option<NaiveDate>; 7]> {
    let Some((first, last)) = month_bounds(year, month) else {
        return Vec::new();
    };

    let mut weeks = Vec::new();
    let mut week = [None; 7];
    let mut day = first;
    while day <= last {
        let column = day.weekday().num_days_from_monday() as usize;
        week[column] = Some(day);
        if column == 6 {
            weeks.push(week);
            week = [None; 7];
        }
        day += Duration::days(1);
    }
    if week.iter().any(Option::is_some) {
        weeks.push(week);
    }
    weeks
}
