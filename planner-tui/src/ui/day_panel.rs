use crate::app::{App, FocusedPane, FormField, TextInput};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Gauge, List, ListItem, ListState, Paragraph},
    Frame,
};
use time::macros::format_description;

use super::utils::{pane_block, priority_color};

pub fn render_day_panel(frame: &mut Frame, area: Rect, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(5),
            Constraint::Min(3),
        ])
        .split(area);

    render_header(frame, rows[0], app);
    render_form(frame, rows[1], app);
    render_task_list(frame, rows[2], app);
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    let format = format_description!("[weekday], [month repr:long] [day padding:none], [year]");
    let title = app
        .selected_date()
        .format(&format)
        .unwrap_or_else(|_| app.selected_date().to_string());
    frame.render_widget(
        Paragraph::new(Span::styled(
            format!(" {}", title),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        rows[0],
    );

    let progress = app.selected_progress();
    let label = match progress.badge() {
        Some(badge) => format!("{} done ({:.0}%)", badge, progress.percent()),
        None => "No tasks".to_string(),
    };
    let gauge = Gauge::default()
        .block(Block::default())
        .gauge_style(Style::default().fg(Color::Cyan).bg(Color::DarkGray))
        .ratio((progress.percent() / 100.0).clamp(0.0, 1.0))
        .label(label);
    frame.render_widget(gauge, rows[1]);
}

fn input_spans<'a>(input: &'a TextInput, focused: bool, placeholder: &'a str) -> Vec<Span<'a>> {
    if !focused {
        if input.is_blank() {
            return vec![Span::styled(placeholder, Style::default().fg(Color::DarkGray))];
        }
        return vec![Span::styled(input.value.as_str(), Style::default().fg(Color::White))];
    }
    let (before, after) = input.split_at_cursor();
    let text = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
    vec![
        Span::styled(before, text),
        Span::styled("█", Style::default().fg(Color::Yellow)),
        Span::styled(after, text),
    ]
}

fn render_form(frame: &mut Frame, area: Rect, app: &App) {
    let pane_focused = app.focused_pane == FocusedPane::Form;
    let form = &app.form;
    let label = |field: FormField, text: &'static str| {
        let style = if pane_focused && form.focused_field == field {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        Span::styled(text, style)
    };

    let mut title_line = vec![label(FormField::Title, "Title:    ")];
    title_line.extend(input_spans(
        &form.title,
        pane_focused && form.focused_field == FormField::Title,
        "press n to add a task",
    ));

    let priority_line = vec![
        label(FormField::Priority, "Priority: "),
        Span::styled("< ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            form.priority.to_string(),
            Style::default()
                .fg(priority_color(form.priority))
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" >", Style::default().fg(Color::DarkGray)),
    ];

    let mut time_line = vec![label(FormField::Time, "Time:     ")];
    time_line.extend(input_spans(
        &form.time,
        pane_focused && form.focused_field == FormField::Time,
        "HH:MM (optional)",
    ));

    frame.render_widget(
        Paragraph::new(vec![
            Line::from(title_line),
            Line::from(priority_line),
            Line::from(time_line),
        ])
        .block(pane_block("New task", pane_focused)),
        area,
    );
}

fn render_task_list(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.focused_pane == FocusedPane::Tasks;
    let tasks = app.selected_tasks();
    let block = pane_block("Tasks", focused);

    if tasks.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "No tasks for this day",
                Style::default().fg(Color::DarkGray),
            ))
            .block(block),
            area,
        );
        return;
    }

    let items: Vec<ListItem> = tasks
        .iter()
        .map(|task| {
            let (check, title_style) = if task.completed {
                (
                    "[x] ",
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::CROSSED_OUT),
                )
            } else {
                ("[ ] ", Style::default().fg(Color::White))
            };
            let mut spans = vec![
                Span::styled(check, Style::default().fg(Color::Cyan)),
                Span::styled(task.title.clone(), title_style),
            ];
            if let Some(time) = task.time.as_deref().filter(|_| task.has_time()) {
                spans.push(Span::styled(
                    format!("  {}", time),
                    Style::default().fg(Color::Blue),
                ));
            }
            spans.push(Span::styled(
                format!("  {}", task.priority),
                Style::default().fg(priority_color(task.priority)),
            ));
            ListItem::new(Line::from(spans))
        })
        .collect();

    let mut list_state = ListState::default();
    if focused {
        list_state.select(Some(app.focused_task_index));
    }

    let list = List::new(items).block(block).highlight_style(
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_stateful_widget(list, area, &mut list_state);
}
