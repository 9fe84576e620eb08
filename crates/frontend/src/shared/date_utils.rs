//! Utilities for date and time formatting
//!
//! Provides consistent date/time formatting across the application

use chrono::{DateTime, Local, NaiveDateTime, Utc};
use std::fmt;

const DAY_MS: i64 = 24 * 60 * 60 * 1000;

/// How long ago something happened, as shown next to a document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelativeDate {
    Today,
    Yesterday,
    DaysAgo(i64),
    On(DateTime<Utc>),
}

impl fmt::Display for RelativeDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelativeDate::Today => f.write_str("today"),
            RelativeDate::Yesterday => f.write_str("yesterday"),
            RelativeDate::DaysAgo(days) => write!(f, "{days} days ago"),
            RelativeDate::On(date) => f.write_str(&locale_date_string(date)),
        }
    }
}

/// Classify `then` relative to `now`
///
/// The distance is counted in started days, so anything up to 24h old is
/// "today" and up to 48h is "yesterday".
pub fn relative_date(then: DateTime<Utc>, now: DateTime<Utc>) -> RelativeDate {
    let diff_ms = (now - then).num_milliseconds().abs();
    let days = ((diff_ms + DAY_MS - 1) / DAY_MS).max(1);
    match days {
        1 => RelativeDate::Today,
        2 => RelativeDate::Yesterday,
        d if d < 7 => RelativeDate::DaysAgo(d),
        _ => RelativeDate::On(then),
    }
}

/// Parse a server timestamp
///
/// Accepts RFC 3339 and naive ISO-8601 ("2024-03-15T14:02:26.123456"),
/// the latter interpreted as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

/// Format a server timestamp relative to `now`
/// Example: 48 hours ago -> "yesterday"
///
/// Unparseable input is returned unchanged.
pub fn format_date(raw: &str, now: DateTime<Utc>) -> String {
    match parse_timestamp(raw) {
        Some(then) => relative_date(then, now).to_string(),
        None => raw.to_string(),
    }
}

/// Local wall-clock time of a message, e.g. "14:02"
pub fn format_time(ts: &DateTime<Utc>) -> String {
    ts.with_timezone(&Local).format("%H:%M").to_string()
}

#[cfg(target_arch = "wasm32")]
fn locale_date_string(date: &DateTime<Utc>) -> String {
    let millis = wasm_bindgen::JsValue::from_f64(date.timestamp_millis() as f64);
    js_sys::Date::new(&millis)
        .to_locale_date_string("default", &wasm_bindgen::JsValue::UNDEFINED)
        .into()
}

#[cfg(not(target_arch = "wasm32"))]
fn locale_date_string(date: &DateTime<Utc>) -> String {
    date.with_timezone(&Local).format("%x").to_string()
}
