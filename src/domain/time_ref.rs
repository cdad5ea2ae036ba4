//! Human date input: relative day names and explicit dates

use crate::error::{DayjotError, Result};
use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// A date as the user typed it, resolved against "today" later
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeReference {
    Today,
    Yesterday,
    Tomorrow,
    /// Today if it matches, else the most recent such day
    Weekday(Weekday),
    /// Strictly before today
    LastWeekday(Weekday),
    /// Strictly after today
    NextWeekday(Weekday),
    SpecificDate(NaiveDate),
}

impl TimeReference {
    /// Parse a date reference (`today`, `last friday`, `2024-03-01`, `01-03-2024`)
    pub fn parse(input: &str) -> Result<Self> {
        let normalized = input.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase();
        let invalid = || DayjotError::InvalidTimeReference(input.trim().to_string());

        match normalized.as_str() {
            "" => Err(invalid()),
            "today" | "now" => Ok(TimeReference::Today),
            "yesterday" => Ok(TimeReference::Yesterday),
            "tomorrow" => Ok(TimeReference::Tomorrow),
            _ => {
                if let Some(day) = normalized.strip_prefix("last ") {
                    return weekday_from_name(day).map(TimeReference::LastWeekday).ok_or_else(invalid);
                }
                if let Some(day) = normalized.strip_prefix("next ") {
                    return weekday_from_name(day).map(TimeReference::NextWeekday).ok_or_else(invalid);
                }
                if let Some(weekday) = weekday_from_name(&normalized) {
                    return Ok(TimeReference::Weekday(weekday));
                }
                NaiveDate::parse_from_str(&normalized, "%Y-%m-%d")
                    .or_else(|_| NaiveDate::parse_from_str(&normalized, "%d-%m-%Y"))
                    .map(TimeReference::SpecificDate)
                    .map_err(|_| invalid())
            }
        }
    }

    /// Resolve to a calendar date relative to `today`
    pub fn resolve(&self, today: NaiveDate) -> NaiveDate {
        match self {
            TimeReference::Today => today,
            TimeReference::Yesterday => today - Duration::days(1),
            TimeReference::Tomorrow => today + Duration::days(1),
            TimeReference::Weekday(target) => today - Duration::days(days_back(today, *target)),
            TimeReference::LastWeekday(target) => {
                let back = match days_back(today, *target) {
                    0 => 7,
                    n => n,
                };
                today - Duration::days(back)
            }
            TimeReference::NextWeekday(target) => {
                let forward = match (7 - days_back(today, *target)) % 7 {
                    0 => 7,
                    n => n,
                };
                today + Duration::days(forward)
            }
            TimeReference::SpecificDate(date) => *date,
        }
    }
}

/// Days since the most recent `target` on or before `today` (0..=6)
fn days_back(today: NaiveDate, target: Weekday) -> i64 {
    let current = today.weekday().num_days_from_monday() as i64;
    let target = target.num_days_from_monday() as i64;
    (current - target).rem_euclid(7)
}

fn weekday_from_name(name: &str) -> Option<Weekday> {
    match name {
        "monday" | "mon" => Some(Weekday::Mon),
        "tuesday" | "tue" => Some(Weekday::Tue),
        "wednesday" | "wed" => Some(Weekday::Wed),
        "thursday" | "thu" => Some(Weekday::Thu),
        "friday" | "fri" => Some(Weekday::Fri),
        "saturday" | "sat" => Some(Weekday::Sat),
        "sunday" | "sun" => Some(Weekday::Sun),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_relative_words() {
        assert_eq!(TimeReference::parse("today").unwrap(), TimeReference::Today);
        assert_eq!(TimeReference::parse("Now").unwrap(), TimeReference::Today);
        assert_eq!(TimeReference::parse("yesterday").unwrap(), TimeReference::Yesterday);
        assert_eq!(TimeReference::parse("tomorrow").unwrap(), TimeReference::Tomorrow);
    }

    #[test]
    fn test_parse_weekdays() {
        assert_eq!(
            TimeReference::parse("friday").unwrap(),
            TimeReference::Weekday(Weekday::Fri)
        );
        assert_eq!(
            TimeReference::parse("last  Monday").unwrap(),
            TimeReference::LastWeekday(Weekday::Mon)
        );
        assert_eq!(
            TimeReference::parse("next sun").unwrap(),
            TimeReference::NextWeekday(Weekday::Sun)
        );
    }

    #[test]
    fn test_parse_explicit_dates() {
        let expected = TimeReference::SpecificDate(date(2024, 3, 1));
        assert_eq!(TimeReference::parse("2024-03-01").unwrap(), expected);
        assert_eq!(TimeReference::parse(" 01-03-2024 ").unwrap(), expected);
    }

    #[test]
    fn test_parse_invalid() {
        for input in ["", "someday", "last someday", "2024-02-30", "32-01-2025"] {
            assert!(
                matches!(TimeReference::parse(input), Err(DayjotError::InvalidTimeReference(_))),
                "expected '{}' to be rejected",
                input
            );
        }
    }

    #[test]
    fn test_resolve_relative_days() {
        let today = date(2024, 3, 1);
        assert_eq!(TimeReference::Today.resolve(today), today);
        assert_eq!(TimeReference::Yesterday.resolve(today), date(2024, 2, 29));
        assert_eq!(TimeReference::Tomorrow.resolve(today), date(2024, 3, 2));
    }

    #[test]
    fn test_resolve_weekday() {
        // 2024-03-01 is a Friday
        let today = date(2024, 3, 1);
        assert_eq!(TimeReference::Weekday(Weekday::Fri).resolve(today), today);
        assert_eq!(TimeReference::Weekday(Weekday::Mon).resolve(today), date(2024, 2, 26));
        assert_eq!(TimeReference::Weekday(Weekday::Sat).resolve(today), date(2024, 2, 24));
    }

    #[test]
    fn test_resolve_last_and_next() {
        let today = date(2024, 3, 1);
        assert_eq!(TimeReference::LastWeekday(Weekday::Fri).resolve(today), date(2024, 2, 23));
        assert_eq!(TimeReference::LastWeekday(Weekday::Wed).resolve(today), date(2024, 2, 28));
        assert_eq!(TimeReference::NextWeekday(Weekday::Fri).resolve(today), date(2024, 3, 8));
        assert_eq!(TimeReference::NextWeekday(Weekday::Mon).resolve(today), date(2024, 3, 4));
        assert_eq!(TimeReference::NextWeekday(Weekday::Thu).resolve(today), date(2024, 3, 7));
    }
}
