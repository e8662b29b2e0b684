use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

mod analysis_panel;
mod calendar_view;
mod day_panel;
pub(super) mod utils;

pub fn render(frame: &mut Frame, app: &mut App) {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_title_bar(frame, root[0], app);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(calendar_view::WIDTH), Constraint::Min(30)])
        .split(root[1]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(10), Constraint::Length(10)])
        .split(body[1]);

    calendar_view::render_calendar(frame, body[0], app);
    day_panel::render_day_panel(frame, right[0], app);
    analysis_panel::render_analysis_panel(frame, right[1], app);

    render_status_bar(frame, root[2], app);
}

fn render_title_bar(frame: &mut Frame, area: Rect, app: &mut App) {
    const LABEL: &str = " Daily Planner";
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(LABEL.len() as u16),
            Constraint::Min(0),
        ])
        .split(area);

    let throbber = throbber_widgets_tui::Throbber::default()
        .style(Style::default().fg(Color::Yellow))
        .throbber_style(Style::default().fg(Color::Yellow))
        .throbber_set(throbber_widgets_tui::BRAILLE_SIX)
        .use_type(if app.is_analyzing {
            throbber_widgets_tui::WhichUse::Spin
        } else {
            throbber_widgets_tui::WhichUse::Full
        });
    frame.render_stateful_widget(throbber, cols[1], &mut app.throbber_state);
    frame.render_widget(
        Paragraph::new(Span::styled(LABEL, Style::default().fg(Color::Yellow))),
        cols[2],
    );
    frame.render_widget(
        Paragraph::new(Span::styled(
            format!("  {}", app.api_url),
            Style::default().fg(Color::DarkGray),
        ))
        .alignment(ratatui::layout::Alignment::Right),
        cols[3],
    );
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let key = Style::default().fg(Color::Yellow);
    let muted = Style::default().fg(Color::DarkGray);

    let line = match &app.status_message {
        Some(message) => Line::from(Span::styled(message.as_str(), Style::default().fg(Color::White))),
        None => Line::from(vec![
            Span::styled("Tab", key),
            Span::styled(": pane  ", muted),
            Span::styled("n", key),
            Span::styled(": new task  ", muted),
            Span::styled("a", key),
            Span::styled(": analyze  ", muted),
            Span::styled("t", key),
            Span::styled(": today  ", muted),
            Span::styled("[ ]", key),
            Span::styled(": month  ", muted),
            Span::styled("q", key),
            Span::styled(": quit", muted),
        ]),
    };
    frame.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use planner_core::Priority;
    use ratatui::{backend::TestBackend, Terminal};
    use time::macros::date;

    fn rendered(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn renders_month_tasks_and_badges() {
        let today = date!(2024 - 03 - 15);
        let mut app = App::new(today, "http://localhost:3001");
        app.add_task("Write report", Priority::High, Some("09:00"), today);
        app.add_task("Team meeting", Priority::Medium, None, today);
        app.select_date(today);
        app.toggle_focused_task();

        let screen = rendered(&mut app);
        assert!(screen.contains("March 2024"), "{screen}");
        assert!(screen.contains("Write report"));
        assert!(screen.contains("09:00"));
        assert!(screen.contains("1/2"));
        assert!(screen.contains("50%"));
    }

    #[test]
    fn renders_analysis_when_present() {
        let mut app = App::new(date!(2024 - 03 - 15), "http://localhost:3001");
        app.finish_analysis(planner_core::Analysis::offline_fallback());

        let screen = rendered(&mut app);
        assert!(screen.contains("Complete high-priority tasks first"), "{screen}");
    }
}
