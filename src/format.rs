//! Date and time display strings (en-US).
//!
//! Inputs are resolved to local wall-clock time first. Text follows the
//! browser's `Date` parsing rules for the forms pages actually send: ISO
//! date-only strings (`YYYY-MM-DD`, zero-padded) are UTC midnight, ISO
//! date-times without an offset are local, and anything with an offset or `Z`
//! is an instant. Other date forms, including unpadded `2024-1-5`, are local.
//! Unparseable input formats as [`INVALID_DATE`] rather than failing.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

pub const INVALID_DATE: &str = "Invalid Date";

const MONTH_FORMAT: &str = "%B";
const TIME_FORMAT: &str = "%I:%M %p";

const ISO_DATE: &str = "%Y-%m-%d";
/// `%#z` accepts `Z`, `+05:30`, `+0530`, and `+05`.
const OFFSET_DATE_TIME_FORMATS: [&str; 4] =
    ["%Y-%m-%dT%H:%M:%S%.f%#z", "%Y-%m-%dT%H:%M%#z", "%Y-%m-%d %H:%M:%S%.f%#z", "%Y-%m-%d %H:%M%#z"];
const UTC_DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.fZ", "%Y-%m-%dT%H:%MZ"];
const LOCAL_DATE_TIME_FORMATS: [&str; 4] =
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%d %H:%M"];
const LOCAL_DATE_FORMATS: [&str; 4] = ["%B %d, %Y", "%b %d, %Y", "%m/%d/%Y", ISO_DATE];

/// A point in time as callers hand it over.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DateInput {
    /// Local wall-clock time, like `new Date(2024, 0, 5)`.
    Local(NaiveDateTime),
    Instant(DateTime<Utc>),
    Text(String),
    /// A time value the host already knows is invalid.
    Invalid,
}

impl DateInput {
    /// Milliseconds since the Unix epoch, as a JS `Date` stores them.
    #[must_use]
    pub fn from_epoch_millis(ms: f64) -> Self {
        if !ms.is_finite() {
            return Self::Invalid;
        }
        #[allow(clippy::cast_possible_truncation)]
        let whole = ms.trunc() as i64;
        DateTime::from_timestamp_millis(whole).map_or(Self::Invalid, Self::Instant)
    }

    /// The Unix epoch, which is what `new Date(null)` holds.
    #[must_use]
    pub fn epoch() -> Self {
        Self::from_epoch_millis(0.0)
    }

    /// Resolve to local wall-clock time; `None` when unparseable.
    #[must_use]
    pub fn to_local(&self) -> Option<NaiveDateTime> {
        match self {
            Self::Local(naive) => Some(*naive),
            Self::Instant(instant) => Some(instant_to_local(instant)),
            Self::Text(raw) => parse_text(raw),
            Self::Invalid => None,
        }
    }
}

impl From<NaiveDateTime> for DateInput {
    fn from(value: NaiveDateTime) -> Self {
        Self::Local(value)
    }
}

impl From<NaiveDate> for DateInput {
    fn from(value: NaiveDate) -> Self {
        Self::Local(value.and_time(NaiveTime::MIN))
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for DateInput {
    fn from(value: DateTime<Tz>) -> Self {
        Self::Instant(value.with_timezone(&Utc))
    }
}

impl From<&str> for DateInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for DateInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Long-form date, e.g. `January 5, 2024`.
///
/// The year is printed without padding (`January 5, 5`), as
/// `toLocaleDateString` does for `year: 'numeric'`.
pub fn format_date(date: impl Into<DateInput>) -> String {
    match resolve(&date.into()) {
        Some(local) => format!("{} {}, {}", local.format(MONTH_FORMAT), local.day(), local.year()),
        None => INVALID_DATE.to_owned(),
    }
}

/// Two-digit hour and minute, e.g. `09:05 AM`.
pub fn format_time(date: impl Into<DateInput>) -> String {
    match resolve(&date.into()) {
        Some(local) => local.format(TIME_FORMAT).to_string(),
        None => INVALID_DATE.to_owned(),
    }
}

fn resolve(input: &DateInput) -> Option<NaiveDateTime> {
    let local = input.to_local();
    if local.is_none() {
        log::debug!("format: unparseable date input {input:?}");
    }
    local
}

/// Zero-padded `YYYY-MM-DD`, the only date-only form read as UTC.
fn is_iso_date(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

fn instant_to_local<Tz: TimeZone>(instant: &DateTime<Tz>) -> NaiveDateTime {
    instant.with_timezone(&Local).naive_local()
}

fn parse_text(raw: &str) -> Option<NaiveDateTime> {
    let text = raw.trim();
    if text.is_empty() {
        return None;
    }
    if let Ok(instant) = DateTime::parse_from_rfc3339(text) {
        return Some(instant_to_local(&instant));
    }
    if let Ok(instant) = DateTime::parse_from_rfc2822(text) {
        return Some(instant_to_local(&instant));
    }
    for pattern in OFFSET_DATE_TIME_FORMATS {
        if let Ok(instant) = DateTime::parse_from_str(text, pattern) {
            return Some(instant_to_local(&instant));
        }
    }
    for pattern in UTC_DATE_TIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, pattern) {
            return Some(instant_to_local(&Utc.from_utc_datetime(&naive)));
        }
    }
    if is_iso_date(text)
        && let Ok(date) = NaiveDate::parse_from_str(text, ISO_DATE)
    {
        let midnight = Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN));
        return Some(instant_to_local(&midnight));
    }
    for pattern in LOCAL_DATE_TIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, pattern) {
            return Some(naive);
        }
    }
    for pattern in LOCAL_DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(text, pattern) {
            return Some(date.and_time(NaiveTime::MIN));
        }
    }
    None
}
