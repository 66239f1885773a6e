//! Date utilities

use chrono::{Datelike, Local, NaiveDate};

/// Weekday labels, Sunday first
pub const WEEKDAY_LABELS: [&str; 7] = ["일", "월", "화", "수", "목", "금", "토"];

/// Parse a `YYYY-MM-DD` calendar date
pub fn parse_date(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").ok()
}

/// Weekday label for a `YYYY-MM-DD` date
pub fn weekday_label(date: &str) -> Option<&'static str> {
    let date = parse_date(date)?;
    Some(WEEKDAY_LABELS[date.weekday().num_days_from_sunday() as usize])
}

/// Today's date in the server's local time zone
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Format as `YYYY-MM-DD`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// True when `date` falls in the same year and month as `reference`
pub fn in_same_month(date: &str, reference: NaiveDate) -> bool {
    parse_date(date)
        .map(|d| d.year() == reference.year() && d.month() == reference.month())
        .unwrap_or(false)
}
