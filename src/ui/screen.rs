use ratatui::Frame;

use crate::{
    app::App,
    session::Mode,
    ui::{dashboard::render_dashboard, input_screen::render_input_screen},
};

/// A UI Screen boundary: responsible for rendering one session mode
pub trait Screen {
    fn render(&self, app: &App, f: &mut Frame);
}

/// Profile form shown while collecting input
pub struct InputScreen;

impl Screen for InputScreen {
    fn render(&self, app: &App, f: &mut Frame) {
        if let Some(form) = app.session.form() {
            render_input_screen(form, f);
        }
    }
}

/// Score cards, progress and checklist
pub struct DashboardScreen;

impl Screen for DashboardScreen {
    fn render(&self, app: &App, f: &mut Frame) {
        if let Some(plan) = app.session.plan() {
            render_dashboard(plan, f);
        }
    }
}

/// Helper to construct the appropriate screen for the current mode
pub fn current_screen(mode: &Mode) -> Box<dyn Screen> {
    match mode {
        Mode::CollectingInput(_) => Box::new(InputScreen),
        Mode::PresentingPlan(_) => Box::new(DashboardScreen),
    }
}
