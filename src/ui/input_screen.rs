use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::form::{Field, InputForm};
use crate::ui::{bold, dim, legend_style, HORIZONTAL_MARGIN, LOGO, TITLE, VERTICAL_MARGIN};

const TAGLINE: &str = "Turn daily effort into measurable band score progress";
const SUBTITLE: &str =
    "Tell us where you are and where you want to be, and we'll build your daily plan.";
const LEGEND: &str =
    "(tab/↑↓) field  (←→) change  (0-9 .) type  (enter) Generate My Momentum Plan  (esc)ape";

const HOW_IT_WORKS: [&str; 3] = [
    "📝 Enter your scores & timeline",
    "✅ Complete daily tasks",
    "📈 Watch your predicted score rise",
];

/// Lines used by one field: label, value, error
const FIELD_HEIGHT: u16 = 3;

pub fn render_input_screen(form: &InputForm, f: &mut Frame) {
    let card_height = 2 + 1 + FIELD_HEIGHT * Field::ALL.len() as u16 + 1;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(HORIZONTAL_MARGIN)
        .vertical_margin(VERTICAL_MARGIN)
        .constraints([
            Constraint::Length(3),           // header
            Constraint::Length(card_height), // form card
            Constraint::Min(0),              // padding
            Constraint::Length(2),           // how it works
            Constraint::Length(1),           // legend
        ])
        .split(f.area());

    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            format!("{} {}", LOGO, TITLE),
            bold().fg(Color::Cyan),
        )),
        Line::from(Span::styled(TAGLINE, dim())),
    ])
    .alignment(Alignment::Center);
    f.render_widget(header, chunks[0]);

    let mut lines = vec![Line::from(Span::styled(SUBTITLE, dim()))];
    for field in Field::ALL {
        lines.extend(field_lines(form, field));
    }
    lines.push(gap_summary(form));

    let card = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Set Up Your Profile "),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(card, chunks[1]);

    f.render_widget(how_it_works(), chunks[3]);

    let legend = Paragraph::new(LEGEND)
        .style(legend_style())
        .alignment(Alignment::Center);
    f.render_widget(legend, chunks[4]);
}

fn how_it_works() -> Paragraph<'static> {
    Paragraph::new(vec![
        Line::from(Span::styled("How it works", bold())),
        Line::from(Span::styled(HOW_IT_WORKS.join("   "), dim())),
    ])
    .alignment(Alignment::Center)
}

fn field_lines(form: &InputForm, field: Field) -> [Line<'static>; FIELD_HEIGHT as usize] {
    let focused = form.focus == field;
    let label_style = if focused {
        bold().fg(Color::Yellow)
    } else {
        bold()
    };
    let marker = if focused { "› " } else { "  " };

    let label = Line::from(vec![
        Span::styled(marker, label_style),
        Span::styled(format!("{} {}", field.icon(), field), label_style),
    ]);

    let value_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let value = Line::from(vec![
        Span::raw("    "),
        Span::styled(field_value(form, field, focused), value_style),
    ]);

    let error = match form.error_for(field) {
        Some(err) => Line::from(Span::styled(
            format!("    {}", err),
            Style::default().fg(Color::Red).add_modifier(Modifier::ITALIC),
        )),
        None => Line::default(),
    };

    [label, value, error]
}

fn field_value(form: &InputForm, field: Field, focused: bool) -> String {
    let cursor = if focused { "▏" } else { "" };
    match field {
        Field::CurrentBand => format!("◀ {} ▶", form.current_band),
        Field::TargetBand => format!("◀ {} ▶", form.target_band),
        Field::DaysLeft => format!("{}{} days", form.days_left, cursor),
        Field::DailyHours => format!("{}{} h", form.daily_hours, cursor),
    }
}

fn gap_summary(form: &InputForm) -> Line<'static> {
    Line::from(vec![
        Span::raw("  Band gap to close: "),
        Span::styled(
            format!("{:.1} bands", form.band_gap()),
            bold().fg(Color::Magenta),
        ),
    ])
}
