//! Points in time as used by events and range queries.
//!
//! Instants are timezone-agnostic. Textual input accepts ISO-8601 style
//! date-times with either a `T` or a space separator, with or without
//! seconds and fractional seconds, or a bare date meaning midnight.

use chrono::{NaiveDate, NaiveDateTime};

use crate::error::{CalendarError, Result};

/// A timezone-agnostic point in time.
pub type Instant = NaiveDateTime;

/// Format used when rendering event blocks.
pub const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M";

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parse a textual instant.
///
/// # Errors
/// Returns `CalendarError::InvalidArgument` if `text` matches none of the
/// accepted formats.
pub fn parse_instant(text: &str) -> Result<Instant> {
    let trimmed = text.trim();

    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(dt);
        }
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or_else(|| CalendarError::invalid(format!("not a valid instant: '{}'", text)))
}

/// Render an instant in the event block format (`YYYY-MM-DD HH:MM`).
pub fn format_instant(instant: &Instant) -> String {
    instant.format(DISPLAY_FORMAT).to_string()
}
