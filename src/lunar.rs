//! Approximate lunar (Chinese) year of a Gregorian date.
//!
//! This is a heuristic, not a calendar conversion. Chinese New Year falls
//! somewhere between January 21 and February 20; every date before
//! February 20 is treated as belonging to the previous lunar year. People
//! born inside the real new-year window can be off by one sign.

use chrono::{Datelike, NaiveDate};

/// Month of the fixed new-year cutoff.
pub const CUTOFF_MONTH: u32 = 2;

/// First day of [`CUTOFF_MONTH`] that counts as the new lunar year.
pub const CUTOFF_DAY: u32 = 20;

/// Returns the approximate lunar year that `date` falls in.
pub fn lunar_year(date: NaiveDate) -> i32 {
    if before_cutoff(date) {
        date.year() - 1
    } else {
        date.year()
    }
}

fn before_cutoff(date: NaiveDate) -> bool {
    date.month() < CUTOFF_MONTH || (date.month() == CUTOFF_MONTH && date.day() < CUTOFF_DAY)
}
