use chrono::{NaiveDate, NaiveDateTime};

use crate::constants::{DATE_FORMAT, DISPLAY_DATE_FORMAT};
use crate::errors::{Result, ValidationError};

/// Timestamp layouts written by the refresh jobs, most specific first.
const TIMESTAMP_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f",
];

/// Parses a source-table refresh timestamp.
///
/// Offsets are dropped; a bare date is read as midnight.
pub fn parse_timestamp(value: &str) -> Result<NaiveDateTime> {
    let trimmed = value.trim();
    for format in TIMESTAMP_FORMATS {
        if format.ends_with("%:z") {
            if let Ok(dt) = chrono::DateTime::parse_from_str(trimmed, format) {
                return Ok(dt.naive_local());
            }
        } else if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(dt);
        }
    }
    let date = NaiveDate::parse_from_str(trimmed, DATE_FORMAT)?;
    date.and_hms_opt(0, 0, 0).ok_or_else(|| {
        ValidationError::InvalidInput(format!("Invalid timestamp '{}'", value)).into()
    })
}

/// Formats a day the way the grids show it (`MM-DD-YYYY`).
pub fn format_display_date(date: NaiveDate) -> String {
    date.format(DISPLAY_DATE_FORMAT).to_string()
}
