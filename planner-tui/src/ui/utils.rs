use planner_core::Priority;
use ratatui::{
    style::{Color, Style},
    text::Span,
    widgets::{Block, Borders, Padding},
};

pub fn priority_color(priority: Priority) -> Color {
    match priority {
        Priority::High => Color::Red,
        Priority::Medium => Color::Yellow,
        Priority::Low => Color::Green,
    }
}

/// Bordered block, yellow when its pane has focus.
pub fn pane_block(title: &str, focused: bool) -> Block<'_> {
    let color = if focused { Color::Yellow } else { Color::DarkGray };
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .title(Span::styled(format!(" {} ", title), Style::default().fg(color)))
        .padding(Padding::horizontal(1))
}
