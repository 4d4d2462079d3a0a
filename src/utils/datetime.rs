use chrono::{DateTime, NaiveDate, Utc};

pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.format("%A, %B %d at %H:%M UTC").to_string()
}

/// "October 20" style, used in draw titles.
pub fn format_draw_date(date: &NaiveDate) -> String {
    date.format("%B %d").to_string()
}

/// Formats a stored epoch-seconds timestamp, falling back to the raw number.
pub fn format_timestamp(secs: i64) -> String {
    DateTime::from_timestamp(secs, 0)
        .map(|dt| format_datetime(&dt))
        .unwrap_or_else(|| secs.to_string())
}
