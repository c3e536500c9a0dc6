//! Local-calendar date handling for the dashboard and the service form.
//!
//! Date-only and timezone-naive strings are read as local wall-clock time.
//! Strings carrying `Z` or an explicit offset are converted into the target
//! timezone first. The `*_in` variants take the timezone explicitly; the
//! plain variants use [`chrono::Local`].

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};

/// Format expected by a `datetime-local` input.
pub const DATETIME_INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M";
pub const DATE_FORMAT: &str = "%Y-%m-%d";

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parse a date or date-time string into wall-clock time in `tz`.
pub fn parse_wall_clock_in<Tz: TimeZone>(value: &str, tz: &Tz) -> Option<NaiveDateTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(tz).naive_local());
    }
    // RFC 3339 with a space separator, as some backends emit.
    if let Ok(dt) = DateTime::parse_from_rfc3339(&value.replacen(' ', "T", 1)) {
        return Some(dt.with_timezone(tz).naive_local());
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Some(dt);
        }
    }

    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Calendar day of `value` in `tz`.
pub fn calendar_day_in<Tz: TimeZone>(value: &str, tz: &Tz) -> Option<NaiveDate> {
    parse_wall_clock_in(value, tz).map(|dt| dt.date())
}

pub fn format_datetime_input(dt: &NaiveDateTime) -> String {
    dt.format(DATETIME_INPUT_FORMAT).to_string()
}

/// `YYYY-MM-DDTHH:mm` in `tz`, or an empty string when `value` does not parse.
pub fn to_datetime_input_in<Tz: TimeZone>(value: &str, tz: &Tz) -> String {
    parse_wall_clock_in(value, tz)
        .map(|dt| format_datetime_input(&dt))
        .unwrap_or_default()
}

/// `YYYY-MM-DDTHH:mm` in local time, or an empty string when `value` does not parse.
pub fn to_local_datetime_input(value: &str) -> String {
    to_datetime_input_in(value, &Local)
}

/// Value for a `date` input: the leading `YYYY-MM-DD` of `value` when it
/// has one, else `value` unchanged. No timezone conversion is applied.
pub fn to_date_input(value: &str) -> String {
    match value.get(..10) {
        Some(prefix) if NaiveDate::parse_from_str(prefix, DATE_FORMAT).is_ok() => prefix.to_string(),
        _ => value.to_string(),
    }
}

/// The API expects seconds precision: `YYYY-MM-DDTHH:mm` gets `:00` appended.
pub fn with_seconds(value: &str) -> String {
    if value.chars().count() == 16 {
        format!("{value}:00")
    } else {
        value.to_string()
    }
}
