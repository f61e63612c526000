//! Timestamp parsing for repair and inventory records.
//!
//! Timestamps are stored as free text by several clients. Accepted shapes:
//! RFC 3339, ISO-like local date-times (with `T` or a space), `dd/mm/yyyy`
//! date-times as produced by the Thai locale (Buddhist-era years are converted
//! back to the Gregorian calendar), bare dates and Unix epoch milliseconds.
//! Anything else is treated as unparseable and yields `None`.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc};

use crate::constants::BUDDHIST_ERA_OFFSET;

const DATE_TIME_FORMATS: [&str; 6] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y, %H:%M:%S",
];

const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%d/%m/%Y"];

/// Years at or beyond this are read as Buddhist era.
const BUDDHIST_YEAR_THRESHOLD: i32 = 2400;

/// Parse a stored timestamp into a naive UTC date-time.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if raw.len() >= 12 && raw.bytes().all(|b| b.is_ascii_digit()) {
        let millis = raw.parse::<i64>().ok()?;
        let dt = DateTime::<Utc>::from_timestamp_millis(millis)?;
        return Some(dt.naive_utc());
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }

    let parsed = DATE_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })?;

    to_gregorian(parsed)
}

/// Hours elapsed between two stored timestamps.
///
/// `None` when either side is unparseable or the interval is negative, so a
/// malformed record can never poison an average.
pub fn hours_between(start: &str, end: &str) -> Option<f64> {
    let start = parse_timestamp(start)?;
    let end = parse_timestamp(end)?;
    let seconds = end.signed_duration_since(start).num_seconds();
    let hours = seconds as f64 / 3600.0;
    (hours.is_finite() && hours >= 0.0).then_some(hours)
}

/// Buddhist-era year of a stored timestamp.
pub fn buddhist_year(raw: &str) -> Option<i32> {
    let dt = parse_timestamp(raw)?;
    Some(dt.year() + BUDDHIST_ERA_OFFSET)
}

/// Render a stored timestamp as `dd/mm/yyyy` with a Buddhist-era year.
pub fn format_buddhist_date(raw: &str) -> Option<String> {
    let dt = parse_timestamp(raw)?;
    let year = dt.year() + BUDDHIST_ERA_OFFSET;
    Some(format!("{:02}/{:02}/{year}", dt.day(), dt.month()))
}

fn to_gregorian(dt: NaiveDateTime) -> Option<NaiveDateTime> {
    if dt.year() >= BUDDHIST_YEAR_THRESHOLD {
        dt.with_year(dt.year() - BUDDHIST_ERA_OFFSET)
    } else {
        Some(dt)
    }
}
