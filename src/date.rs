//! date.rs
//!
//! Strict parsing of `YYYY-MM-DD` birth dates.
//!
//! Chrono's `%Y-%m-%d` is lenient about field widths (it accepts `2024-2-9`
//! and signed or 5-digit years), so the shape is checked by hand first and
//! chrono is only asked whether the day exists in that month and year.

use chrono::NaiveDate;

use crate::error::ValidationError;

/// Format used for every date the crate reads or prints.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses `raw` as an exact `YYYY-MM-DD` calendar date.
pub fn parse_date(raw: &str) -> Result<NaiveDate, ValidationError> {
    let bytes = raw.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return Err(ValidationError::InvalidDate);
    }

    let year = digits(&bytes[0..4])?;
    let month = digits(&bytes[5..7])?;
    let day = digits(&bytes[8..10])?;

    // from_ymd_opt rejects month 13, Feb 30, Feb 29 in common years, etc.
    NaiveDate::from_ymd_opt(year as i32, month, day).ok_or(ValidationError::InvalidDate)
}

/// Formats a date back into the `YYYY-MM-DD` form accepted by [`parse_date`].
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

fn digits(field: &[u8]) -> Result<u32, ValidationError> {
    field.iter().try_fold(0u32, |acc, b| {
        if b.is_ascii_digit() {
            Ok(acc * 10 + u32::from(b - b'0'))
        } else {
            Err(ValidationError::InvalidDate)
        }
    })
}
