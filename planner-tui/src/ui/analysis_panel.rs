use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use super::utils::pane_block;

pub fn render_analysis_panel(frame: &mut Frame, area: Rect, app: &App) {
    let muted = Style::default().fg(Color::DarkGray);

    let lines = match (&app.analysis, app.is_analyzing) {
        (_, true) => vec![Line::from(Span::styled("Analyzing your day...", muted))],
        (None, false) => vec![Line::from(Span::styled(
            "Press a to analyze the selected day's tasks",
            muted,
        ))],
        (Some(analysis), false) => {
            let mut lines = vec![
                Line::from(Span::styled(
                    analysis.summary.as_str(),
                    Style::default().fg(Color::White),
                )),
                Line::from(""),
            ];
            lines.extend(analysis.suggestions.iter().map(|s| {
                Line::from(vec![
                    Span::styled("• ", Style::default().fg(Color::Yellow)),
                    Span::raw(s.as_str()),
                ])
            }));
            lines
        }
    };

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(pane_block("Analysis", false)),
        area,
    );
}
