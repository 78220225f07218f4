use crate::storage::StorageError;
use chrono::{Datelike, Local, NaiveDate, TimeZone};
use std::fmt::Display;

pub fn display_label(label: &str) -> &str {
    if label.is_empty() {
        "New celebration"
    } else {
        label
    }
}

/// `2025-06-01` becomes `June 1, 2025`. Dates that don't parse are shown as typed.
pub fn display_date(date: &str) -> String {
    if date.is_empty() {
        return "Date TBC".to_string();
    }
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map(|day| day.format("%B %-d, %Y").to_string())
        .unwrap_or_else(|_| date.to_string())
}

/// Creation stamp in the visitor's timezone, e.g. `Jun 1, 02:05 PM`.
pub fn display_created_at(created_at: i64) -> String {
    display_created_at_in(created_at, &Local)
}

pub fn display_created_at_in<Tz>(created_at: i64, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match tz.timestamp_millis_opt(created_at).single() {
        Some(stamp) => stamp.format("%b %-d, %I:%M %p").to_string(),
        None => String::new(),
    }
}

/// Banner text shown while the saved list only lives in memory.
pub fn storage_warning(error: &StorageError) -> String {
    format!("Couldn't save to this browser: {}", error)
}

pub fn current_year() -> i32 {
    Local::now().year()
}
