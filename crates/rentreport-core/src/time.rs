//! Pickup date parsing, display, and date-range filtering

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Display format for pickup dates, e.g. "Mon Jan 15 2024"
pub const PICKUP_DATE_FORMAT: &str = "%a %b %d %Y";

/// Inclusive date range with optional bounds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// First included day (unbounded when absent)
    pub start: Option<NaiveDate>,
    /// Last included day (unbounded when absent)
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    /// Build from raw `YYYY-MM-DD` form inputs; blank or invalid inputs leave the bound open
    pub fn from_inputs(start: Option<&str>, end: Option<&str>) -> Self {
        Self {
            start: start.and_then(parse_date_input),
            end: end.and_then(parse_date_input),
        }
    }

    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// Check if a day is within the range
    pub fn contains(&self, date: &NaiveDate) -> bool {
        match (self.start, self.end) {
            (None, None) => true,
            (Some(s), None) => *date >= s,
            (None, Some(e)) => *date <= e,
            (Some(s), Some(e)) => *date >= s && *date <= e,
        }
    }

    /// Check a pickup date; a missing date only passes an unbounded range
    pub fn contains_pickup(&self, pickup: Option<&DateTime<Utc>>) -> bool {
        match pickup {
            Some(dt) => self.contains(&dt.date_naive()),
            None => self.is_unbounded(),
        }
    }
}

/// Parse a `YYYY-MM-DD` date input
pub fn parse_date_input(input: &str) -> Option<NaiveDate> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").ok()
}

/// Read a pickup date field
///
/// Accepted shapes: RFC 3339 strings, `YYYY-MM-DD`, `YYYY-MM-DD HH:MM:SS`
/// (taken as UTC), and timestamp objects with `seconds`/`nanoseconds` or
/// `_seconds`/`_nanoseconds`. Anything else reads as no date.
pub fn parse_pickup_date(value: Option<&Value>) -> Option<DateTime<Utc>> {
    match value? {
        Value::String(s) => parse_date_text(s.trim()),
        Value::Object(map) => {
            let seconds = map
                .get("seconds")
                .or_else(|| map.get("_seconds"))
                .and_then(Value::as_i64)?;
            let nanos = map
                .get("nanoseconds")
                .or_else(|| map.get("_nanoseconds"))
                .and_then(Value::as_u64)
                .and_then(|n| u32::try_from(n).ok())
                .unwrap_or(0);
            DateTime::from_timestamp(seconds, nanos)
        }
        _ => None,
    }
}

fn parse_date_text(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Human-readable pickup date; empty when absent
pub fn format_pickup_date(pickup: Option<&DateTime<Utc>>) -> String {
    pickup
        .map(|dt| dt.format(PICKUP_DATE_FORMAT).to_string())
        .unwrap_or_default()
}
