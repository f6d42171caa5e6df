//! Display formatting for API date/time strings.
//!
//! The backend emits ISO-like datetimes that are sometimes naive (no
//! timezone marker). Naive values are UTC by convention and must be shown
//! in the viewer's local time; values carrying an explicit marker are
//! parsed as-is.

#[cfg(test)]
#[path = "datetime_test.rs"]
mod datetime_test;

use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// Placeholder shown for missing dates.
pub const DATE_PLACEHOLDER: &str = "-";

/// Display pattern: zero-padded `DD.MM.YYYY HH:MM`, 24-hour clock.
const DISPLAY_FORMAT: &str = "%d.%m.%Y %H:%M";

/// Naive datetime layouts the backend is known to emit.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Offset-carrying layouts accepted besides strict RFC 3339.
const OFFSET_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%d %H:%M:%S%.f%z"];

/// Format a raw API date string for display in the viewer's local time.
///
/// Empty input yields [`DATE_PLACEHOLDER`]; unparseable input is returned
/// unchanged.
pub fn format_date(raw: &str) -> String {
    format_date_in(raw, &Local)
}

/// Timezone-parameterized core of [`format_date`].
pub fn format_date_in<Tz: TimeZone>(raw: &str, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    if raw.is_empty() {
        return DATE_PLACEHOLDER.to_owned();
    }
    match parse_instant(raw.trim()) {
        Some(instant) => instant.with_timezone(tz).format(DISPLAY_FORMAT).to_string(),
        None => raw.to_owned(),
    }
}

/// True when the string carries an explicit timezone marker: a `Z`, a `+`,
/// or a `-` at byte position 10 or later (past the calendar date).
fn has_timezone_marker(raw: &str) -> bool {
    if raw.contains('Z') || raw.contains('+') {
        return true;
    }
    raw.char_indices().any(|(i, c)| i >= 10 && c == '-')
}

fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    if has_timezone_marker(raw) {
        parse_marked(raw)
    } else {
        parse_naive_utc(raw)
    }
}

fn parse_marked(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    for format in OFFSET_FORMATS {
        if let Ok(parsed) = DateTime::<FixedOffset>::parse_from_str(raw, format) {
            return Some(parsed.with_timezone(&Utc));
        }
    }
    None
}

fn parse_naive_utc(raw: &str) -> Option<DateTime<Utc>> {
    for format in NAIVE_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(parsed.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc())
}
