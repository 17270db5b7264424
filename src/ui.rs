pub mod dashboard;
pub mod input_screen;
pub mod screen;

use ratatui::{
    style::{Color, Modifier, Style},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::{app::App, task::Tone};

pub const TITLE: &str = "IELTS Momentum Engine";
pub const LOGO: &str = "🎯";

const HORIZONTAL_MARGIN: u16 = 2;
const VERTICAL_MARGIN: u16 = 1;

/// Draws whichever screen the session is on.
pub fn draw(app: &App, f: &mut Frame) {
    screen::current_screen(&app.session.mode).render(app, f);
}

pub(crate) fn bold() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

pub(crate) fn dim() -> Style {
    Style::default().add_modifier(Modifier::DIM)
}

pub(crate) fn legend_style() -> Style {
    Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC)
}

pub(crate) fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Blue => Color::Blue,
        Tone::Teal => Color::Cyan,
        Tone::Violet => Color::Magenta,
        Tone::Rose => Color::LightRed,
    }
}

/// Joins `left` and `right` with enough spaces to fill `width` columns.
/// When both do not fit, a single space separates them.
pub(crate) fn spread(left: &str, right: &str, width: u16) -> String {
    let used = left.width() + right.width();
    let gap = (width as usize).saturating_sub(used).max(1);
    format!("{}{}{}", left, " ".repeat(gap), right)
}

/// Cuts `text` to at most `width` columns, marking the cut with `…`.
pub(crate) fn truncate(text: &str, width: u16) -> String {
    let width = width as usize;
    if text.width() <= width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}
