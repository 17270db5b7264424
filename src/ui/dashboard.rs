use chrono::Local;
use itertools::Itertools;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::form::format_hours;
use crate::momentum::DerivedMetrics;
use crate::plan::{PlanPresenter, TaskView};
use crate::ui::{
    bold, dim, legend_style, spread, tone_color, truncate, HORIZONTAL_MARGIN, LOGO, TITLE,
    VERTICAL_MARGIN,
};

const ON_TRACK_MESSAGE: &str =
    "You are on track to reach your target band score if you continue this daily momentum.";
const OFF_TRACK_MESSAGE: &str = "You need to complete more tasks to stay on track.";
const LEGEND: &str = "(↑↓/jk) select  (space) toggle  (1-4) toggle task  (b)ack  (esc)ape";

/// Lines used by one task card: title row, description row
const TASK_HEIGHT: u16 = 2;
const ARROW_WIDTH: u16 = 3;

pub fn render_dashboard(plan: &PlanPresenter, f: &mut Frame) {
    let metrics = plan.metrics();
    let tasks = plan.task_views();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(HORIZONTAL_MARGIN)
        .vertical_margin(VERTICAL_MARGIN)
        .constraints([
            Constraint::Length(1),                                   // top bar
            Constraint::Length(4),                                   // score hero
            Constraint::Length(1),                                   // progress header
            Constraint::Length(1),                                   // progress bar
            Constraint::Length(1),                                   // feedback
            Constraint::Length(1),                                   // padding
            Constraint::Length(1),                                   // plan header
            Constraint::Length(TASK_HEIGHT * tasks.len() as u16),    // checklist
            Constraint::Length(1),                                   // padding
            Constraint::Length(1),                                   // info row
            Constraint::Min(0),                                      // padding
            Constraint::Length(1),                                   // legend
        ])
        .split(f.area());

    let top_bar = Paragraph::new(Span::styled(
        spread(&format!("{} {}", LOGO, TITLE), "(b) ← Back", chunks[0].width),
        bold().fg(Color::Cyan),
    ));
    f.render_widget(top_bar, chunks[0]);

    render_score_hero(plan, &metrics, chunks[1], f);
    render_progress(plan, &metrics, [chunks[2], chunks[3], chunks[4]], f);

    let input = plan.input();
    let plan_meta = [
        format!("{}/{} tasks", metrics.completed_count, plan.task_count()),
        format!("{} days left", input.days_left()),
        format!("{}h/day", format_hours(input.daily_hours())),
    ]
    .iter()
    .join(" · ");
    let plan_header = Paragraph::new(Span::styled(
        spread("📋 Today's Study Plan", &plan_meta, chunks[6].width),
        bold(),
    ));
    f.render_widget(plan_header, chunks[6]);

    let task_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(TASK_HEIGHT); tasks.len()])
        .split(chunks[7]);
    for (task, area) in tasks.iter().zip(task_areas.iter()) {
        f.render_widget(task_card(task, area.width), *area);
    }

    f.render_widget(info_row(plan, &metrics), chunks[9]);

    let legend = Paragraph::new(LEGEND)
        .style(legend_style())
        .alignment(Alignment::Center);
    f.render_widget(legend, chunks[11]);
}

fn render_score_hero(plan: &PlanPresenter, metrics: &DerivedMetrics, area: Rect, f: &mut Frame) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(ARROW_WIDTH),
            Constraint::Fill(1),
            Constraint::Length(ARROW_WIDTH),
            Constraint::Fill(1),
        ])
        .split(area);

    let input = plan.input();
    let badge = (metrics.completed_count > 0).then(|| metrics.gain_badge());

    f.render_widget(
        score_card("Current Score", input.current_band().to_string(), None, Color::White),
        columns[0],
    );
    f.render_widget(
        score_card(
            "Predicted Score",
            format!("{:.1}", metrics.predicted_score),
            badge,
            Color::Green,
        ),
        columns[2],
    );
    f.render_widget(
        score_card("Target Score", input.target_band().to_string(), None, Color::Magenta),
        columns[4],
    );

    for arrow_area in [columns[1], columns[3]] {
        f.render_widget(arrow(), arrow_area);
    }
}

/// Arrow on the value row, between two cards
fn arrow() -> Paragraph<'static> {
    Paragraph::new(vec![Line::default(), Line::from(Span::styled("→", dim()))])
        .alignment(Alignment::Center)
}

fn score_card(title: &str, value: String, badge: Option<String>, color: Color) -> Paragraph<'static> {
    let mut spans = vec![Span::styled(value, bold().fg(color))];
    if let Some(badge) = badge {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(badge, Style::default().fg(Color::Green)));
    }
    Paragraph::new(Line::from(spans))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", title)),
        )
        .alignment(Alignment::Center)
}

fn render_progress(
    plan: &PlanPresenter,
    metrics: &DerivedMetrics,
    areas: [Rect; 3],
    f: &mut Frame,
) {
    let header = Paragraph::new(Span::styled(
        spread(
            // whole bands read "Band 7", half bands "Band 6.5"
            &format!("Progress toward Band {}", plan.input().target_band().as_f64()),
            &format!("{}%", metrics.progress_percent),
            areas[0].width,
        ),
        bold(),
    ));
    f.render_widget(header, areas[0]);

    f.render_widget(progress_bar(metrics.progress_percent), areas[1]);

    let (icon, message, color) = if metrics.is_on_track {
        ("✅", ON_TRACK_MESSAGE, Color::Green)
    } else {
        ("⚠️", OFF_TRACK_MESSAGE, Color::Yellow)
    };
    let feedback = Paragraph::new(Line::from(vec![
        Span::raw(format!("{} ", icon)),
        Span::styled(message, Style::default().fg(color)),
    ]));
    f.render_widget(feedback, areas[2]);
}

fn progress_bar(percent: u8) -> Gauge<'static> {
    Gauge::default()
        .gauge_style(Style::default().fg(Color::Green).bg(Color::DarkGray))
        .percent(percent.min(100) as u16)
        .label("")
}

fn task_card(task: &TaskView, width: u16) -> Paragraph<'static> {
    let checkbox = if task.done { "[x]" } else { "[ ]" };
    let tag = if task.done {
        format!("✓ {}", task.tag)
    } else {
        task.tag.clone()
    };
    let pointer = if task.selected { "›" } else { " " };

    let mut title_style = bold().fg(tone_color(task.tone));
    if task.done {
        title_style = title_style.add_modifier(Modifier::CROSSED_OUT);
    }
    if task.selected {
        title_style = title_style.add_modifier(Modifier::REVERSED);
    }
    let tag_style = if task.done {
        bold().fg(Color::Green)
    } else {
        dim()
    };

    let left = format!("{} {} {} {}", pointer, checkbox, task.icon, task.label);
    let title = spread(&left, &tag, width);
    let (left_part, tag_part) = title.split_at(title.len() - tag.len());

    let description_width = width.saturating_sub(8);
    Paragraph::new(vec![
        Line::from(vec![
            Span::styled(left_part.to_string(), title_style),
            Span::styled(tag_part.to_string(), tag_style),
        ]),
        Line::from(Span::styled(
            format!("        {}", truncate(task.description, description_width)),
            dim(),
        )),
    ])
}

fn info_row(plan: &PlanPresenter, metrics: &DerivedMetrics) -> Paragraph<'static> {
    let input = plan.input();
    let exam = input
        .exam_date(Local::now().date_naive())
        .map(|d| format!(" (exam {})", d.format("%a %-d %b")))
        .unwrap_or_default();

    Paragraph::new(Line::from(vec![
        Span::raw("🏆 Max achievable today "),
        Span::styled(format!("Band {:.1}", metrics.max_possible), bold()),
        Span::raw("  │  📅 Days remaining "),
        Span::styled(format!("{} days", input.days_left()), bold()),
        Span::raw(exam),
        Span::raw("  │  ⏱️ Study time today "),
        Span::styled(format!("{}h", format_hours(input.daily_hours())), bold()),
    ]))
    .alignment(Alignment::Center)
}
