// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Date parsing for the ranking tie-break and for display.
//!
//! Content dates come in as loosely formatted strings. Accepted forms:
//! RFC 3339 (`2024-01-01T10:00:00.000Z`), naive date-times
//! (`2024-01-01T10:00:00`, read as UTC), and bare dates (`2024-01-01`,
//! midnight UTC).

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};

/// Parse a content date, or `None` if it is not in an accepted form.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Milliseconds since the epoch; missing or unparseable dates are 0.
pub fn timestamp_millis(value: Option<&str>) -> i64 {
    value
        .and_then(parse_timestamp)
        .map_or(0, |dt| dt.timestamp_millis())
}

/// `2024-01-01T00:00:00.000Z`
pub fn to_iso_millis(dt: DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// `Jan 5, 2024`. Unparseable input comes back unchanged.
pub fn format_date(iso: &str) -> String {
    if iso.is_empty() {
        return String::new();
    }
    match parse_timestamp(iso) {
        Some(dt) => dt.format("%b %-d, %Y").to_string(),
        None => iso.to_string(),
    }
}
