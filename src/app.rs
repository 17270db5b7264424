use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::info;

use crate::form::FormDefaults;
use crate::runtime::AppEvent;
use crate::session::{Mode, Session};

/// What the event loop should do after an event was handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Redraw,
    Idle,
    Quit,
}

#[derive(Debug, Clone)]
pub struct App {
    pub session: Session,
}

impl App {
    pub fn new(defaults: FormDefaults) -> Self {
        Self {
            session: Session::new(defaults),
        }
    }

    pub fn handle_event(&mut self, event: AppEvent) -> Flow {
        match event {
            AppEvent::Key(key) => self.handle_key(key),
            AppEvent::Resize => Flow::Redraw,
            AppEvent::Closed => {
                info!("event source closed");
                Flow::Quit
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Flow {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            info!("quit");
            return Flow::Quit;
        }

        match &mut self.session.mode {
            Mode::CollectingInput(form) => match key.code {
                KeyCode::Esc => {
                    info!("quit");
                    return Flow::Quit;
                }
                KeyCode::Tab | KeyCode::Down => form.focus_next(),
                KeyCode::BackTab | KeyCode::Up => form.focus_prev(),
                KeyCode::Right => form.step_up(),
                KeyCode::Left => form.step_down(),
                KeyCode::Backspace => form.backspace(),
                KeyCode::Char(c) => form.push_char(c),
                KeyCode::Enter => {
                    // rejected input stays on screen with its messages
                    let _ = self.session.submit();
                }
                _ => return Flow::Idle,
            },
            Mode::PresentingPlan(plan) => match key.code {
                KeyCode::Esc | KeyCode::Char('q') => {
                    info!("quit");
                    return Flow::Quit;
                }
                KeyCode::Up | KeyCode::Char('k') => plan.select_prev(),
                KeyCode::Down | KeyCode::Char('j') => plan.select_next(),
                KeyCode::Char(' ') | KeyCode::Enter => {
                    plan.toggle_selected();
                }
                KeyCode::Char(c @ '1'..='9') => {
                    let index = c as usize - '1' as usize;
                    if plan.toggle_nth(index).is_none() {
                        return Flow::Idle;
                    }
                }
                KeyCode::Char('b') | KeyCode::Backspace | KeyCode::Left => self.session.reset(),
                _ => return Flow::Idle,
            },
        }
        Flow::Redraw
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(FormDefaults::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::Field;
    use crate::task::TaskId;

    fn press(app: &mut App, code: KeyCode) -> Flow {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_ctrl_c_quits_everywhere() {
        let mut app = App::default();
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(app.handle_key(ctrl_c), Flow::Quit);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.handle_key(ctrl_c), Flow::Quit);
    }

    #[test]
    fn test_form_navigation_and_editing() {
        let mut app = App::default();
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Char('5'));

        let form = app.session.form().unwrap();
        assert_eq!(form.current_band.to_string(), "6.0");
        assert_eq!(form.focus, Field::DaysLeft);
        assert_eq!(form.days_left, "35");

        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.session.form().unwrap().focus, Field::TargetBand);
    }

    #[test]
    fn test_enter_submits_only_when_valid() {
        let mut app = App::default();
        press(&mut app, KeyCode::Down);
        for _ in 0..10 {
            press(&mut app, KeyCode::Left);
        }
        assert_eq!(press(&mut app, KeyCode::Enter), Flow::Redraw);
        assert!(app.session.is_collecting_input());

        for _ in 0..10 {
            press(&mut app, KeyCode::Right);
        }
        press(&mut app, KeyCode::Enter);
        assert!(!app.session.is_collecting_input());
    }

    #[test]
    fn test_plan_keys() {
        let mut app = App::default();
        press(&mut app, KeyCode::Enter);

        press(&mut app, KeyCode::Char('3'));
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(press(&mut app, KeyCode::Char('9')), Flow::Idle);

        let plan = app.session.plan().unwrap();
        assert!(plan.completion().is_done(TaskId::Writing));
        assert!(plan.completion().is_done(TaskId::Speaking));
        assert_eq!(plan.metrics().predicted_score, 5.7);

        press(&mut app, KeyCode::Char('b'));
        assert!(app.session.is_collecting_input());
    }

    #[test]
    fn test_quit_keys_per_mode() {
        let mut app = App::default();
        // 'q' is plain text on the form
        assert_eq!(press(&mut app, KeyCode::Char('q')), Flow::Redraw);
        assert!(app.session.is_collecting_input());

        press(&mut app, KeyCode::Enter);
        assert_eq!(press(&mut app, KeyCode::Char('q')), Flow::Quit);
        assert_eq!(press(&mut app, KeyCode::Esc), Flow::Quit);
    }

    #[test]
    fn test_non_key_events() {
        let mut app = App::default();
        assert_eq!(app.handle_event(AppEvent::Resize), Flow::Redraw);
        assert_eq!(app.handle_event(AppEvent::Closed), Flow::Quit);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.handle_event(AppEvent::Closed), Flow::Quit);
    }
}
