//! Input collection for the four profile fields.
//!
//! Edits are accepted freely; nothing is checked until [`InputForm::submit`],
//! which either hands back an [`InputRecord`] or the full list of problems.

use chrono::{Days, NaiveDate};
use itertools::Itertools;
use thiserror::Error;

use crate::band::Band;

pub const MIN_DAILY_HOURS: f64 = 0.5;
pub const MAX_DAILY_HOURS: f64 = 24.0;
const HOURS_STEP: f64 = 0.5;
const MAX_FIELD_LEN: usize = 6;

/// A validated profile. Only obtainable through validation, so the target
/// always sits above the current band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputRecord {
    current_band: Band,
    target_band: Band,
    days_left: u32,
    daily_hours: f64,
}

impl InputRecord {
    /// Checks every rule and collects all violations.
    pub fn try_new(
        current_band: Band,
        target_band: Band,
        days_left: Option<u32>,
        daily_hours: Option<f64>,
    ) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        if target_band <= current_band {
            errors.push(ValidationError::TargetNotAboveCurrent);
        }
        let days_left = match days_left {
            Some(days) if days >= 1 => days,
            _ => {
                errors.push(ValidationError::TooFewDays);
                0
            }
        };
        let daily_hours = match daily_hours {
            Some(h) if (MIN_DAILY_HOURS..=MAX_DAILY_HOURS).contains(&h) => h,
            _ => {
                errors.push(ValidationError::HoursOutOfRange);
                0.0
            }
        };

        if errors.is_empty() {
            Ok(Self {
                current_band,
                target_band,
                days_left,
                daily_hours,
            })
        } else {
            Err(errors)
        }
    }

    /// Builds a record without validation, for exercising the calculator's
    /// guarded paths.
    #[cfg(test)]
    pub(crate) fn unchecked(
        current_band: Band,
        target_band: Band,
        days_left: u32,
        daily_hours: f64,
    ) -> Self {
        Self {
            current_band,
            target_band,
            days_left,
            daily_hours,
        }
    }

    pub fn current_band(&self) -> Band {
        self.current_band
    }

    pub fn target_band(&self) -> Band {
        self.target_band
    }

    pub fn days_left(&self) -> u32 {
        self.days_left
    }

    pub fn daily_hours(&self) -> f64 {
        self.daily_hours
    }

    /// Exam day, counting `days_left` from `today`.
    pub fn exam_date(&self, today: NaiveDate) -> Option<NaiveDate> {
        today.checked_add_days(Days::new(self.days_left as u64))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::Display)]
pub enum Field {
    #[strum(serialize = "Current IELTS Band Score")]
    CurrentBand,
    #[strum(serialize = "Target IELTS Band Score")]
    TargetBand,
    #[strum(serialize = "Days Left Until Exam")]
    DaysLeft,
    #[strum(serialize = "Daily Preparation Time (hours)")]
    DailyHours,
}

impl Field {
    pub const ALL: [Field; 4] = [
        Field::CurrentBand,
        Field::TargetBand,
        Field::DaysLeft,
        Field::DailyHours,
    ];

    pub fn icon(&self) -> &'static str {
        match self {
            Field::CurrentBand => "📊",
            Field::TargetBand => "🏆",
            Field::DaysLeft => "📅",
            Field::DailyHours => "⏱️",
        }
    }

    pub fn is_dropdown(&self) -> bool {
        matches!(self, Field::CurrentBand | Field::TargetBand)
    }

    fn index(&self) -> usize {
        Self::ALL.iter().position(|f| f == self).unwrap_or(0)
    }

    pub fn next(&self) -> Field {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Field {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Target band must be higher than your current band.")]
    TargetNotAboveCurrent,
    #[error("Please enter at least 1 day.")]
    TooFewDays,
    #[error("Please enter between 0.5 and 24 hours.")]
    HoursOutOfRange,
}

impl ValidationError {
    /// The field the message is shown under.
    pub fn field(&self) -> Field {
        match self {
            ValidationError::TargetNotAboveCurrent => Field::TargetBand,
            ValidationError::TooFewDays => Field::DaysLeft,
            ValidationError::HoursOutOfRange => Field::DailyHours,
        }
    }
}

/// Every rule a submission broke, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{}", .errors.iter().join(" "))]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    fn push(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.errors.iter()
    }

    pub fn for_field(&self, field: Field) -> Option<&ValidationError> {
        self.errors.iter().find(|e| e.field() == field)
    }
}

/// Starting values for a fresh form
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormDefaults {
    pub current_band: Band,
    pub target_band: Band,
    pub days_left: u32,
    pub daily_hours: f64,
}

impl Default for FormDefaults {
    fn default() -> Self {
        Self {
            current_band: Band::from_hundredths(550).unwrap_or_default(),
            target_band: Band::from_hundredths(700).unwrap_or(Band::MAX),
            days_left: 30,
            daily_hours: 2.0,
        }
    }
}

/// Editable state of the input screen.
#[derive(Debug, Clone, PartialEq)]
pub struct InputForm {
    pub current_band: Band,
    pub target_band: Band,
    pub days_left: String,
    pub daily_hours: String,
    pub focus: Field,
    errors: ValidationErrors,
}

impl Default for InputForm {
    fn default() -> Self {
        Self::new(FormDefaults::default())
    }
}

impl InputForm {
    pub fn new(defaults: FormDefaults) -> Self {
        Self {
            current_band: defaults.current_band,
            target_band: defaults.target_band,
            days_left: defaults.days_left.to_string(),
            daily_hours: format_hours(defaults.daily_hours),
            focus: Field::CurrentBand,
            errors: ValidationErrors::default(),
        }
    }

    /// Messages from the last failed submit.
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn error_for(&self, field: Field) -> Option<&ValidationError> {
        self.errors.for_field(field)
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Moves the focused field one option/step up.
    pub fn step_up(&mut self) {
        match self.focus {
            Field::CurrentBand => self.current_band = self.current_band.step_up(),
            Field::TargetBand => self.target_band = self.target_band.step_up(),
            Field::DaysLeft => {
                let days = parse_days(&self.days_left).unwrap_or(0);
                self.days_left = days.saturating_add(1).to_string();
            }
            Field::DailyHours => {
                let hours = parse_hours(&self.daily_hours).unwrap_or(0.0);
                self.daily_hours = format_hours((hours + HOURS_STEP).min(MAX_DAILY_HOURS));
            }
        }
    }

    /// Moves the focused field one option/step down.
    pub fn step_down(&mut self) {
        match self.focus {
            Field::CurrentBand => self.current_band = self.current_band.step_down(Band::MIN),
            Field::TargetBand => {
                let floor = Band::target_options().next().unwrap_or(Band::MIN);
                self.target_band = self.target_band.step_down(floor);
            }
            Field::DaysLeft => {
                let days = parse_days(&self.days_left).unwrap_or(1);
                self.days_left = days.saturating_sub(1).to_string();
            }
            Field::DailyHours => {
                let hours = parse_hours(&self.daily_hours).unwrap_or(MIN_DAILY_HOURS);
                self.daily_hours = format_hours((hours - HOURS_STEP).max(0.0));
            }
        }
    }

    /// Types a character into the focused text field. Dropdowns and
    /// characters other than digits and `.` are ignored.
    pub fn push_char(&mut self, c: char) {
        let buf = match self.focus {
            Field::DaysLeft if c.is_ascii_digit() => &mut self.days_left,
            Field::DailyHours if c.is_ascii_digit() || (c == '.' && !self.daily_hours.contains('.')) => {
                &mut self.daily_hours
            }
            _ => return,
        };
        if buf.len() < MAX_FIELD_LEN {
            buf.push(c);
        }
    }

    pub fn backspace(&mut self) {
        match self.focus {
            Field::DaysLeft => {
                self.days_left.pop();
            }
            Field::DailyHours => {
                self.daily_hours.pop();
            }
            Field::CurrentBand | Field::TargetBand => {}
        }
    }

    /// Distance still to close, never negative.
    pub fn band_gap(&self) -> f64 {
        self.target_band
            .hundredths()
            .saturating_sub(self.current_band.hundredths()) as f64
            / 100.0
    }

    /// Validates all fields at once. On failure the messages are kept for
    /// display and the field values are left untouched.
    pub fn submit(&mut self) -> Result<InputRecord, ValidationErrors> {
        let result = InputRecord::try_new(
            self.current_band,
            self.target_band,
            parse_days(&self.days_left),
            parse_hours(&self.daily_hours),
        );
        match &result {
            Ok(_) => self.errors = ValidationErrors::default(),
            Err(errors) => self.errors = errors.clone(),
        }
        result
    }
}

fn parse_days(raw: &str) -> Option<u32> {
    raw.trim().parse().ok()
}

fn parse_hours(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|h| h.is_finite())
}

/// Hours without a trailing `.0`, the way they are typed: `2`, `1.5`.
pub fn format_hours(hours: f64) -> String {
    if hours.fract() == 0.0 {
        format!("{}", hours as u32)
    } else {
        format!("{}", hours)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn band(v: f64) -> Band {
        Band::from_f64(v).unwrap()
    }

    #[test]
    fn test_defaults() {
        let form = InputForm::default();
        assert_eq!(form.current_band, band(5.5));
        assert_eq!(form.target_band, band(7.0));
        assert_eq!(form.days_left, "30");
        assert_eq!(form.daily_hours, "2");
        assert_eq!(form.focus, Field::CurrentBand);
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_submit_valid_form() {
        let mut form = InputForm::default();
        let record = form.submit().unwrap();
        assert_eq!(record.current_band(), band(5.5));
        assert_eq!(record.target_band(), band(7.0));
        assert_eq!(record.days_left(), 30);
        assert_eq!(record.daily_hours(), 2.0);
    }

    #[test]
    fn test_submit_collects_every_violation() {
        let mut form = InputForm::default();
        form.target_band = form.current_band;
        form.days_left = "0".into();
        form.daily_hours = "25".into();

        let errors = form.submit().unwrap_err();
        assert_eq!(errors.len(), 3);
        assert_eq!(
            errors.iter().copied().collect::<Vec<_>>(),
            vec![
                ValidationError::TargetNotAboveCurrent,
                ValidationError::TooFewDays,
                ValidationError::HoursOutOfRange,
            ]
        );
        assert_eq!(form.errors(), &errors);
        // values are kept as typed
        assert_eq!(form.days_left, "0");
        assert_eq!(form.daily_hours, "25");
    }

    #[test]
    fn test_only_offending_fields_are_annotated() {
        let mut form = InputForm::default();
        form.daily_hours = "0.25".into();

        assert_matches!(form.submit(), Err(_));
        assert_eq!(form.error_for(Field::CurrentBand), None);
        assert_eq!(form.error_for(Field::TargetBand), None);
        assert_eq!(form.error_for(Field::DaysLeft), None);
        assert_eq!(
            form.error_for(Field::DailyHours).map(|e| e.to_string()),
            Some("Please enter between 0.5 and 24 hours.".to_string())
        );
    }

    #[test]
    fn test_target_must_exceed_current() {
        let mut form = InputForm::default();
        form.current_band = band(7.5);
        form.target_band = band(7.0);
        let errors = form.submit().unwrap_err();
        assert_eq!(
            errors.for_field(Field::TargetBand),
            Some(&ValidationError::TargetNotAboveCurrent)
        );
        assert_eq!(
            errors.to_string(),
            "Target band must be higher than your current band."
        );
    }

    #[test]
    fn test_empty_or_garbage_numbers_fail() {
        let mut form = InputForm::default();
        form.days_left.clear();
        form.daily_hours = ".".into();
        let errors = form.submit().unwrap_err();
        assert_eq!(errors.for_field(Field::DaysLeft), Some(&ValidationError::TooFewDays));
        assert_eq!(
            errors.for_field(Field::DailyHours),
            Some(&ValidationError::HoursOutOfRange)
        );
    }

    #[test]
    fn test_hour_bounds_are_inclusive() {
        for hours in ["0.5", "24"] {
            let mut form = InputForm::default();
            form.daily_hours = hours.into();
            assert_matches!(form.submit(), Ok(_));
        }
    }

    #[test]
    fn test_errors_clear_on_successful_submit() {
        let mut form = InputForm::default();
        form.days_left = "0".into();
        assert_matches!(form.submit(), Err(_));
        assert!(!form.errors().is_empty());

        form.days_left = "1".into();
        assert_matches!(form.submit(), Ok(_));
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_edits_do_not_validate() {
        let mut form = InputForm::default();
        form.focus = Field::DaysLeft;
        form.backspace();
        form.backspace();
        assert_eq!(form.days_left, "");
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_push_char_filters_input() {
        let mut form = InputForm::default();
        form.focus = Field::DaysLeft;
        form.push_char('a');
        form.push_char('.');
        form.push_char('5');
        assert_eq!(form.days_left, "305");

        form.focus = Field::DailyHours;
        form.push_char('.');
        form.push_char('.');
        form.push_char('5');
        assert_eq!(form.daily_hours, "2.5");

        form.focus = Field::CurrentBand;
        form.push_char('7');
        assert_eq!(form.current_band, band(5.5));
    }

    #[test]
    fn test_focus_wraps() {
        let mut form = InputForm::default();
        form.focus_prev();
        assert_eq!(form.focus, Field::DailyHours);
        form.focus_next();
        assert_eq!(form.focus, Field::CurrentBand);
        for _ in 0..4 {
            form.focus_next();
        }
        assert_eq!(form.focus, Field::CurrentBand);
    }

    #[test]
    fn test_stepping_fields() {
        let mut form = InputForm::default();
        form.step_up();
        assert_eq!(form.current_band, band(6.0));

        form.focus = Field::TargetBand;
        form.target_band = band(0.5);
        form.step_down();
        assert_eq!(form.target_band, band(0.5));

        form.focus = Field::DaysLeft;
        form.step_down();
        assert_eq!(form.days_left, "29");

        form.focus = Field::DailyHours;
        form.step_up();
        assert_eq!(form.daily_hours, "2.5");
        form.daily_hours = "24".into();
        form.step_up();
        assert_eq!(form.daily_hours, "24");
    }

    #[test]
    fn test_band_gap() {
        let mut form = InputForm::default();
        assert_eq!(form.band_gap(), 1.5);
        form.target_band = band(5.0);
        assert_eq!(form.band_gap(), 0.0);
    }

    #[test]
    fn test_exam_date() {
        let record = InputForm::default().submit().unwrap();
        let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(
            record.exam_date(today),
            NaiveDate::from_ymd_opt(2024, 1, 31)
        );
    }

    #[test]
    fn test_field_labels() {
        assert_eq!(Field::DaysLeft.to_string(), "Days Left Until Exam");
        assert!(Field::TargetBand.is_dropdown());
        assert!(!Field::DailyHours.is_dropdown());
    }
}
