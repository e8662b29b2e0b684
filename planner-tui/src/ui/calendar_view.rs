use crate::app::{App, FocusedPane};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::utils::pane_block;

const CELL_WIDTH: usize = 5;
/// Seven cells plus borders and padding.
pub const WIDTH: u16 = (CELL_WIDTH as u16) * 7 + 4;

const WEEKDAYS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

pub fn render_calendar(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.focused_pane == FocusedPane::Calendar;
    let muted = Style::default().fg(Color::DarkGray);

    let mut lines = vec![
        Line::from(vec![
            Span::styled("[ ", muted),
            Span::styled(
                format!("{:^width$}", app.viewed_month().to_string(), width = CELL_WIDTH * 7 - 4),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" ]", muted),
        ]),
        Line::from(""),
        Line::from(
            WEEKDAYS
                .iter()
                .map(|d| Span::styled(format!("{:^width$}", d, width = CELL_WIDTH), muted))
                .collect::<Vec<_>>(),
        ),
    ];

    let blanks = app.leading_blank_days() as usize;
    let mut cells: Vec<Option<time::Date>> = vec![None; blanks];
    cells.extend(app.month_days().into_iter().map(Some));

    for week in cells.chunks(7) {
        let mut days = Vec::with_capacity(7);
        let mut badges = Vec::with_capacity(7);
        for cell in week {
            match cell {
                Some(date) => {
                    let (day, badge) = day_cell(app, *date);
                    days.push(day);
                    badges.push(badge);
                }
                None => {
                    days.push(Span::raw(" ".repeat(CELL_WIDTH)));
                    badges.push(Span::raw(" ".repeat(CELL_WIDTH)));
                }
            }
        }
        lines.push(Line::from(days));
        lines.push(Line::from(badges));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(" selected ", selected_style()),
        Span::raw("  "),
        Span::styled("today", today_style()),
    ]));

    frame.render_widget(
        Paragraph::new(lines).block(pane_block("Calendar", focused)),
        area,
    );
}

fn selected_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

fn today_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
}

/// Day number and completed/total badge for one grid cell.
fn day_cell(app: &App, date: time::Date) -> (Span<'static>, Span<'static>) {
    let style = if date == app.selected_date() {
        selected_style()
    } else if date == app.today() {
        today_style()
    } else {
        Style::default().fg(Color::White)
    };
    let day = Span::styled(format!("{:^width$}", date.day(), width = CELL_WIDTH), style);

    let progress = app.progress_for(date);
    let badge_style = if !progress.is_empty() && progress.completed == progress.total {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let badge = Span::styled(
        format!("{:^width$}", progress.badge().unwrap_or_default(), width = CELL_WIDTH),
        badge_style,
    );
    (day, badge)
}
