//! Raw input → zodiac resolution.
//!
//! `raw → reference date → lunar year → zodiac`. Every step is pure; only
//! [`resolve`] reads the system clock, and only to learn the current year
//! for age mode.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::age::{parse_age, reference_date_for_age};
use crate::date::parse_date;
use crate::error::ValidationError;
use crate::lunar::lunar_year;
use crate::zodiac::{Zodiac, ZodiacResult};

/// Which raw input is authoritative for a resolution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
pub enum InputMode {
    /// A `YYYY-MM-DD` birth date.
    #[default]
    #[serde(rename = "date")]
    #[value(name = "date")]
    ByDate,
    /// An age in whole years.
    #[serde(rename = "age")]
    #[value(name = "age")]
    ByAge,
}

/// Intermediate values of a successful resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub mode: InputMode,
    #[serde(serialize_with = "serialize_date")]
    pub reference_date: NaiveDate,
    pub lunar_year: i32,
    pub zodiac: Zodiac,
}

impl Resolution {
    pub fn result(&self) -> ZodiacResult {
        self.zodiac.result()
    }
}

/// Resolves `raw` using today's local date for age mode.
pub fn resolve(mode: InputMode, raw: &str) -> Result<ZodiacResult, ValidationError> {
    resolve_on(mode, raw, Local::now().date_naive())
}

/// Resolves `raw` as if the current date were `today`.
pub fn resolve_on(
    mode: InputMode,
    raw: &str,
    today: NaiveDate,
) -> Result<ZodiacResult, ValidationError> {
    resolve_detailed(mode, raw, today).map(|r| r.result())
}

/// Like [`resolve_on`], but keeps the reference date and lunar year.
pub fn resolve_detailed(
    mode: InputMode,
    raw: &str,
    today: NaiveDate,
) -> Result<Resolution, ValidationError> {
    let reference_date = reference_date(mode, raw, today).inspect_err(|e| {
        debug!(?mode, raw, error = %e, "rejected input");
    })?;

    let lunar_year = lunar_year(reference_date);
    let zodiac = Zodiac::from_lunar_year(lunar_year);

    debug!(?mode, %reference_date, lunar_year, zodiac = zodiac.name(), "resolved zodiac");

    Ok(Resolution {
        mode,
        reference_date,
        lunar_year,
        zodiac,
    })
}

fn reference_date(
    mode: InputMode,
    raw: &str,
    today: NaiveDate,
) -> Result<NaiveDate, ValidationError> {
    match mode {
        InputMode::ByDate => parse_date(raw),
        InputMode::ByAge => reference_date_for_age(parse_age(raw)?, today),
    }
}

fn serialize_date<S: serde::Serializer>(date: &NaiveDate, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(&crate::date::format_date(*date))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    #[test]
    fn date_mode_ignores_today() {
        let a = resolve_on(InputMode::ByDate, "1992-06-14", today());
        let b = resolve_on(InputMode::ByDate, "1992-06-14", NaiveDate::MIN);
        assert_eq!(a, b);
        assert_eq!(a, Ok(Zodiac::Monkey.result()));
    }

    #[test]
    fn modes_do_not_coerce() {
        assert_eq!(
            resolve_on(InputMode::ByDate, "30", today()),
            Err(ValidationError::InvalidDate)
        );
        assert_eq!(
            resolve_on(InputMode::ByAge, "1992-06-14", today()),
            Err(ValidationError::InvalidAge)
        );
    }

    #[test]
    fn age_mode_uses_previous_lunar_year() {
        // 2026 - 34 = 1992, Jan 1 → lunar 1991 (goat)
        let r = resolve_detailed(InputMode::ByAge, "34", today()).unwrap();
        assert_eq!(r.reference_date, NaiveDate::from_ymd_opt(1992, 1, 1).unwrap());
        assert_eq!(r.lunar_year, 1991);
        assert_eq!(r.zodiac, Zodiac::Goat);
    }

    #[test]
    fn resolution_serializes_flat() {
        let r = resolve_detailed(InputMode::ByDate, "2024-02-20", today()).unwrap();
        let json = serde_json::to_value(r).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "mode": "date",
                "reference_date": "2024-02-20",
                "lunar_year": 2024,
                "zodiac": "dragon",
            })
        );
    }

    #[test]
    fn input_mode_round_trips_through_serde() {
        let mode: InputMode = serde_json::from_str("\"age\"").unwrap();
        assert_eq!(mode, InputMode::ByAge);
        assert_eq!(InputMode::default(), InputMode::ByDate);
    }
}
