//! Output formatting utilities

use crate::application::DayView;
use crate::domain::{calendar, JournalEntry};
use chrono::{DateTime, Datelike, Local, NaiveDate, Utc};
use std::collections::BTreeMap;

fn local_timestamp(at: DateTime<Utc>, pattern: &str) -> String {
    at.with_timezone(&Local).format(pattern).to_string()
}

fn indent(text: &str) -> String {
    text.lines()
        .map(|line| format!("    {}\n", line))
        .collect()
}

/// One list card: short id, creation time, heart, then the indented text
fn format_card(entry: &JournalEntry) -> String {
    let heart = if entry.is_memorable() { "  ♥" } else { "" };
    format!(
        "{}  {}{}\n{}",
        entry.id.short(),
        local_timestamp(entry.created_at, "%d %b %Y, %a, %-I:%M %p"),
        heart,
        indent(&entry.text)
    )
}

/// Format the entry list
pub fn format_entry_list(entries: &[JournalEntry]) -> String {
    if entries.is_empty() {
        return "No entries match your filter.".to_string();
    }
    entries.iter().map(format_card).collect::<Vec<_>>().join("\n")
}

/// Format the memorable entries screen
pub fn format_favorites(entries: &[JournalEntry]) -> String {
    if entries.is_empty() {
        return "No memorable entries yet.".to_string();
    }
    format!("Memorable Entries\n\n{}", format_entry_list(entries))
}

/// Format the entries of one journal day
pub fn format_day_view(view: &DayView) -> String {
    let mut output = format!("{} ({})\n\n", view.date, view.day_name);

    if view.entries.is_empty() {
        output.push_str("No entries yet for this date.");
        return output;
    }

    for entry in &view.entries {
        let label = if entry.updated_at.is_some() { "Updated" } else { "Created" };
        output.push_str(&format!(
            "{}{}: {}  [{}]\n\n",
            indent(&entry.text),
            label,
            local_timestamp(entry.last_modified(), "%d %b %Y, %-I:%M %p"),
            entry.id.short()
        ));
    }
    output
}

/// Month grid with `*` beside days that have entries and `[ ]` around `today`
pub fn format_calendar(year: i32, month: u32, marks: &BTreeMap<NaiveDate, usize>, today: NaiveDate) -> String {
    let title = NaiveDate::from_ymd_opt(year, month, 1)
        .map(|d| d.format("%B %Y").to_string())
        .unwrap_or_default();

    let mut output = format!("{}\n Mo    Tu    We    Th    Fr    Sa    Su\n", title);
    for week in calendar::month_weeks(year, month) {
        let row: Vec<String> = week
            .iter()
            .map(|day| match day {
                Some(day) => {
                    let mark = if marks.contains_key(day) { '*' } else { ' ' };
                    if *day == today {
                        format!("[{:>2}]{}", day.day(), mark)
                    } else {
                        format!(" {:>2} {}", day.day(), mark)
                    }
                }
                None => "     ".to_string(),
            })
            .collect();
        output.push_str(row.join(" ").trim_end());
        output.push('\n');
    }

    let total: usize = marks.values().sum();
    output.push_str(&format!("\n{} entries on {} days", total, marks.len()));
    output
}

/// Confirmation line after a write or edit
pub fn format_saved(entry: &JournalEntry) -> String {
    format!("Saved {} for {}", entry.id.short(), entry.date)
}
