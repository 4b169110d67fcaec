//! ISO-8601 text form of timestamps
//!
//! Rendering is strict and stable: `YYYY-MM-DDTHH:MM:SS.fffffffZ`, always seven
//! fractional digits (100 ns ticks) and the `Z` designator. Persisted text
//! compares equal across versions.
//!
//! Years outside 0000..=9999 render with an explicit sign and more digits
//! (`+10000-01-01T…Z`, `-0001-12-31T…Z`) and parse back the same way.
//!
//! Parsing is lenient. Besides the rendered form it accepts:
//! - RFC 3339 with any offset and any fraction length
//! - date-time without an offset, read as UTC
//! - a space instead of `T`
//! - a bare date, read as midnight UTC
//! - RFC 2822

use chrono::{DateTime, NaiveDate, NaiveDateTime, Timelike, Utc};

const NANOS_PER_TICK: u32 = 100;

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Renders a timestamp in the canonical round-trip form.
pub fn render(timestamp: &DateTime<Utc>) -> String {
    // leap seconds carry nanos >= 1s; %S already shows them as :60
    let ticks = (timestamp.nanosecond() % 1_000_000_000) / NANOS_PER_TICK;
    format!("{}.{:07}Z", timestamp.format("%Y-%m-%dT%H:%M:%S"), ticks)
}

/// Parses ISO-8601 text into a UTC timestamp.
///
/// Returns `None` if no accepted form matches.
pub fn parse(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();

    if let Ok(ts) = DateTime::parse_from_rfc3339(text) {
        return Some(ts.with_timezone(&Utc));
    }

    // RFC 3339 requires a four-digit year; %Y also takes a signed wider one
    if let Some(naive) = text
        .strip_suffix('Z')
        .and_then(|t| NaiveDateTime::parse_from_str(t, "%Y-%m-%dT%H:%M:%S%.f").ok())
    {
        return Some(naive.and_utc());
    }

    // RFC 3339 requires 'T'; allow a space with an explicit offset too
    if let Ok(ts) = DateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S%.f%:z") {
        return Some(ts.with_timezone(&Utc));
    }

    if let Some(naive) = NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
    {
        return Some(naive.and_utc());
    }

    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
    }

    DateTime::parse_from_rfc2822(text)
        .ok()
        .map(|ts| ts.with_timezone(&Utc))
}
