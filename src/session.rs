use tracing::info;

use crate::form::{FormDefaults, InputForm, ValidationErrors};
use crate::plan::PlanPresenter;

/// The two screens a session moves between.
#[derive(Debug, Clone)]
pub enum Mode {
    CollectingInput(InputForm),
    PresentingPlan(PlanPresenter),
}

#[derive(Debug, Clone)]
pub struct Session {
    defaults: FormDefaults,
    pub mode: Mode,
}

impl Session {
    pub fn new(defaults: FormDefaults) -> Self {
        Self {
            defaults,
            mode: Mode::CollectingInput(InputForm::new(defaults)),
        }
    }

    pub fn is_collecting_input(&self) -> bool {
        matches!(self.mode, Mode::CollectingInput(_))
    }

    pub fn form(&self) -> Option<&InputForm> {
        match &self.mode {
            Mode::CollectingInput(form) => Some(form),
            Mode::PresentingPlan(_) => None,
        }
    }

    pub fn form_mut(&mut self) -> Option<&mut InputForm> {
        match &mut self.mode {
            Mode::CollectingInput(form) => Some(form),
            Mode::PresentingPlan(_) => None,
        }
    }

    pub fn plan(&self) -> Option<&PlanPresenter> {
        match &self.mode {
            Mode::PresentingPlan(plan) => Some(plan),
            Mode::CollectingInput(_) => None,
        }
    }

    pub fn plan_mut(&mut self) -> Option<&mut PlanPresenter> {
        match &mut self.mode {
            Mode::PresentingPlan(plan) => Some(plan),
            Mode::CollectingInput(_) => None,
        }
    }

    /// Validates the form and, when it passes, moves on to the plan. A
    /// submit while the plan is showing is a no-op.
    pub fn submit(&mut self) -> Result<(), ValidationErrors> {
        let Mode::CollectingInput(form) = &mut self.mode else {
            return Ok(());
        };
        match form.submit() {
            Ok(record) => {
                info!(
                    current = %record.current_band(),
                    target = %record.target_band(),
                    days = record.days_left(),
                    hours = record.daily_hours(),
                    "plan generated"
                );
                self.mode = Mode::PresentingPlan(PlanPresenter::new(record));
                Ok(())
            }
            Err(errors) => {
                info!(errors = %errors, "input rejected");
                Err(errors)
            }
        }
    }

    /// Drops the profile and every ticked task and starts over with a fresh
    /// form.
    pub fn reset(&mut self) {
        info!("session reset");
        self.mode = Mode::CollectingInput(InputForm::new(self.defaults));
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(FormDefaults::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::TaskId;
    use assert_matches::assert_matches;

    #[test]
    fn test_starts_collecting_input() {
        let session = Session::default();
        assert!(session.is_collecting_input());
        assert!(session.plan().is_none());
    }

    #[test]
    fn test_valid_submit_moves_to_plan() {
        let mut session = Session::default();
        assert_matches!(session.submit(), Ok(()));
        assert_matches!(session.mode, Mode::PresentingPlan(_));
    }

    #[test]
    fn test_invalid_submit_stays_put() {
        let mut session = Session::default();
        session.form_mut().unwrap().days_left = "0".into();
        assert_matches!(session.submit(), Err(e) if e.len() == 1);
        assert!(session.is_collecting_input());
        assert!(!session.form().unwrap().errors().is_empty());
    }

    #[test]
    fn test_reset_discards_everything() {
        let mut session = Session::default();
        session.form_mut().unwrap().days_left = "12".into();
        session.submit().unwrap();
        let plan = session.plan_mut().unwrap();
        plan.toggle(TaskId::Writing);
        plan.toggle(TaskId::Reading);

        session.reset();
        assert!(session.is_collecting_input());
        assert_eq!(session.form().unwrap().days_left, "30");

        session.submit().unwrap();
        let plan = session.plan().unwrap();
        assert_eq!(plan.metrics().completed_count, 0);
        assert_eq!(plan.input().days_left(), 30);
    }

    #[test]
    fn test_reset_from_input_mode() {
        let mut session = Session::default();
        session.form_mut().unwrap().daily_hours = "99".into();
        let _ = session.submit();
        session.reset();
        let form = session.form().unwrap();
        assert!(form.errors().is_empty());
        assert_eq!(form.daily_hours, "2");
    }

    #[test]
    fn test_reset_uses_configured_defaults() {
        let defaults = FormDefaults {
            days_left: 90,
            ..FormDefaults::default()
        };
        let mut session = Session::new(defaults);
        session.submit().unwrap();
        session.reset();
        assert_eq!(session.form().unwrap().days_left, "90");
    }
}
