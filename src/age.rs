//! age.rs
//!
//! Age-mode input: a whole number of years, turned into a synthetic birth
//! date of January 1st in `today.year() - age`.
//!
//! Only the year of `today` matters. The synthetic date always lands in
//! January, so the lunar-year rule always shifts it back one year.

use chrono::{Datelike, NaiveDate};

use crate::error::ValidationError;

/// Largest accepted age, inclusive.
pub const MAX_AGE: u32 = 150;

/// Parses a base-10 age in `0..=MAX_AGE`.
///
/// Surrounding whitespace is ignored. Anything else that is not part of the
/// number (`"30y"`, `"3.5"`, `""`) is rejected.
pub fn parse_age(raw: &str) -> Result<u32, ValidationError> {
    let age: i64 = raw.trim().parse().map_err(|_| ValidationError::InvalidAge)?;

    if !(0..=i64::from(MAX_AGE)).contains(&age) {
        return Err(ValidationError::InvalidAge);
    }

    u32::try_from(age).map_err(|_| ValidationError::InvalidAge)
}

/// Returns the reference date for someone `age` years old on `today`.
pub fn reference_date_for_age(age: u32, today: NaiveDate) -> Result<NaiveDate, ValidationError> {
    if age > MAX_AGE {
        return Err(ValidationError::InvalidAge);
    }

    // age <= MAX_AGE, so the cast cannot wrap.
    let year = today.year() - age as i32;
    NaiveDate::from_ymd_opt(year, 1, 1).ok_or(ValidationError::InvalidAge)
}
