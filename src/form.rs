//! Caller-owned form state.
//!
//! The resolver holds no state. A front end keeps the mode selector, the two
//! text fields and the last submission here and feeds it [`FormEvent`]s.

use chrono::NaiveDate;

use crate::date::format_date;
use crate::error::ValidationError;
use crate::resolver::{InputMode, Resolution, resolve_detailed};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    SelectMode(InputMode),
    EditBirthDate(String),
    /// A date chosen from a calendar picker.
    PickDate(NaiveDate),
    EditAge(String),
    /// Resolve the active field, taking `today` as the current date.
    Submit { today: NaiveDate },
}

/// What was resolved, and how it went.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub mode: InputMode,
    pub input: String,
    pub outcome: Result<Resolution, ValidationError>,
}

impl Submission {
    /// Heading shown above the result, e.g. `2024-02-20出生的生肖是：`.
    pub fn caption(&self) -> String {
        match self.mode {
            InputMode::ByDate => format!("{}出生的生肖是：", self.input),
            InputMode::ByAge => format!("{}岁的生肖是：", self.input),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub mode: InputMode,
    pub birth_date: String,
    pub age: String,
    pub submission: Option<Submission>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw text of the field selected by the current mode.
    pub fn active_input(&self) -> &str {
        match self.mode {
            InputMode::ByDate => &self.birth_date,
            InputMode::ByAge => &self.age,
        }
    }

    pub fn apply(&mut self, event: FormEvent) {
        match event {
            FormEvent::SelectMode(mode) => self.mode = mode,
            FormEvent::EditBirthDate(text) => self.birth_date = text,
            FormEvent::PickDate(date) => self.birth_date = format_date(date),
            FormEvent::EditAge(text) => self.age = text,
            FormEvent::Submit { today } => {
                let input = self.active_input().to_owned();
                let outcome = resolve_detailed(self.mode, &input, today);
                self.submission = Some(Submission {
                    mode: self.mode,
                    input,
                    outcome,
                });
            }
        }
    }

    /// Applies every event in order and returns the final state.
    pub fn replay(events: impl IntoIterator<Item = FormEvent>) -> Self {
        let mut state = Self::new();
        for event in events {
            state.apply(event);
        }
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zodiac::Zodiac;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    #[test]
    fn starts_in_date_mode_without_submission() {
        let state = FormState::new();
        assert_eq!(state.mode, InputMode::ByDate);
        assert_eq!(state.active_input(), "");
        assert!(state.submission.is_none());
    }

    #[test]
    fn edits_do_not_resolve() {
        let state = FormState::replay([FormEvent::EditBirthDate("2024-02-20".into())]);
        assert!(state.submission.is_none());
    }

    #[test]
    fn picked_date_fills_date_field() {
        let picked = NaiveDate::from_ymd_opt(2001, 3, 9).unwrap();
        let state = FormState::replay([FormEvent::PickDate(picked)]);
        assert_eq!(state.birth_date, "2001-03-09");
    }

    #[test]
    fn submit_resolves_only_active_field() {
        let state = FormState::replay([
            FormEvent::EditBirthDate("not a date".into()),
            FormEvent::EditAge("0".into()),
            FormEvent::SelectMode(InputMode::ByAge),
            FormEvent::Submit { today: today() },
        ]);
        let submission = state.submission.unwrap();
        assert_eq!(submission.input, "0");
        // 2026-01-01 → lunar 2025
        assert_eq!(submission.outcome.unwrap().zodiac, Zodiac::Snake);
    }

    #[test]
    fn caption_follows_submitted_input_not_later_edits() {
        let mut state = FormState::replay([
            FormEvent::EditBirthDate("2024-02-20".into()),
            FormEvent::Submit { today: today() },
        ]);
        state.apply(FormEvent::EditBirthDate("1999-01-01".into()));
        state.apply(FormEvent::SelectMode(InputMode::ByAge));

        let submission = state.submission.as_ref().unwrap();
        assert_eq!(submission.caption(), "2024-02-20出生的生肖是：");
        assert_eq!(submission.outcome.unwrap().zodiac, Zodiac::Dragon);
    }

    #[test]
    fn age_caption() {
        let state = FormState::replay([
            FormEvent::SelectMode(InputMode::ByAge),
            FormEvent::EditAge("30".into()),
            FormEvent::Submit { today: today() },
        ]);
        assert_eq!(state.submission.unwrap().caption(), "30岁的生肖是：");
    }

    #[test]
    fn failed_submit_replaces_previous_result() {
        let state = FormState::replay([
            FormEvent::EditBirthDate("2024-02-20".into()),
            FormEvent::Submit { today: today() },
            FormEvent::EditBirthDate("1999-13-01".into()),
            FormEvent::Submit { today: today() },
        ]);
        assert_eq!(
            state.submission.unwrap().outcome,
            Err(ValidationError::InvalidDate)
        );
    }
}
