use crate::app::{App, FocusedPane};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::action_queue::{Action, ActionTx};

fn enqueue_action(action_tx: &ActionTx, action: Action) {
    let _ = action_tx.send(action);
}

pub(super) fn handle_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    // Ctrl+C quits from anywhere, including while typing
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }

    match key.code {
        KeyCode::Tab => {
            app.focused_pane = app.focused_pane.next();
            return;
        }
        KeyCode::BackTab => {
            app.focused_pane = app.focused_pane.previous();
            return;
        }
        _ => {}
    }

    match app.focused_pane {
        FocusedPane::Calendar => handle_calendar_key(key, app, action_tx),
        FocusedPane::Form => handle_form_key(key, app),
        FocusedPane::Tasks => handle_tasks_key(key, app, action_tx),
    }
}

/// Keys shared by the non-typing panes.
fn handle_common_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char('a') => enqueue_action(action_tx, Action::RequestAnalysis),
        KeyCode::Char('n') => app.focused_pane = FocusedPane::Form,
        KeyCode::Char('t') => app.go_to_today(),
        KeyCode::Char(']') => app.next_month(),
        KeyCode::Char('[') => app.previous_month(),
        _ => return false,
    }
    true
}

fn handle_calendar_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    if handle_common_key(key, app, action_tx) {
        return;
    }
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => app.move_selection(-1),
        KeyCode::Right | KeyCode::Char('l') => app.move_selection(1),
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(-7),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(7),
        KeyCode::Enter => app.focused_pane = FocusedPane::Tasks,
        _ => {}
    }
}

fn handle_form_key(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Esc => app.focused_pane = FocusedPane::Calendar,
        KeyCode::Enter => {
            app.add_task_from_form();
        }
        KeyCode::Up => app.form.focused_field = app.form.focused_field.previous(),
        KeyCode::Down => app.form.focused_field = app.form.focused_field.next(),
        KeyCode::Left => app.form.move_left(),
        KeyCode::Right => app.form.move_right(),
        KeyCode::Backspace => app.form.backspace(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.form.input_char(c)
        }
        _ => {}
    }
}

fn handle_tasks_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    if handle_common_key(key, app, action_tx) {
        return;
    }
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.focus_previous_task(),
        KeyCode::Down | KeyCode::Char('j') => app.focus_next_task(),
        KeyCode::Char(' ') | KeyCode::Enter => {
            app.toggle_focused_task();
        }
        KeyCode::Char('d') | KeyCode::Delete => {
            app.delete_focused_task();
        }
        KeyCode::Left | KeyCode::Char('h') => app.move_selection(-1),
        KeyCode::Right | KeyCode::Char('l') => app.move_selection(1),
        KeyCode::Esc => app.focused_pane = FocusedPane::Calendar,
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::action_queue::channel;
    use planner_core::Priority;
    use time::macros::date;

    fn press(app: &mut App, tx: &ActionTx, code: KeyCode) {
        handle_key(KeyEvent::new(code, KeyModifiers::NONE), app, tx);
    }

    fn app() -> App {
        App::new(date!(2024 - 03 - 31), "http://localhost:3001")
    }

    #[test]
    fn typing_in_form_adds_task() {
        let mut app = app();
        let (tx, _rx) = channel();

        press(&mut app, &tx, KeyCode::Char('n'));
        assert_eq!(app.focused_pane, FocusedPane::Form);
        for c in "quit smoking".chars() {
            press(&mut app, &tx, KeyCode::Char(c));
        }
        press(&mut app, &tx, KeyCode::Down);
        press(&mut app, &tx, KeyCode::Right);
        press(&mut app, &tx, KeyCode::Enter);

        assert!(app.running, "'q' typed into the form must not quit");
        let tasks = app.selected_tasks();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].title, "quit smoking");
        assert_eq!(tasks[0].priority, Priority::High);
    }

    #[test]
    fn calendar_arrows_move_selection_across_months() {
        let mut app = app();
        let (tx, _rx) = channel();

        press(&mut app, &tx, KeyCode::Right);
        assert_eq!(app.selected_date(), date!(2024 - 04 - 01));
        assert_eq!(app.viewed_month().month, time::Month::April);

        press(&mut app, &tx, KeyCode::Char('['));
        assert_eq!(app.viewed_month().month, time::Month::March);
        assert_eq!(app.selected_date(), date!(2024 - 04 - 01));
    }

    #[test]
    fn tasks_pane_toggles_and_deletes() {
        let mut app = app();
        let (tx, _rx) = channel();
        app.add_task("A", Priority::Low, None, app.today());
        app.add_task("B", Priority::Low, None, app.today());

        press(&mut app, &tx, KeyCode::Tab);
        press(&mut app, &tx, KeyCode::Tab);
        assert_eq!(app.focused_pane, FocusedPane::Tasks);

        press(&mut app, &tx, KeyCode::Char(' '));
        assert_eq!(app.selected_progress().completed, 1);

        press(&mut app, &tx, KeyCode::Down);
        press(&mut app, &tx, KeyCode::Char('d'));
        assert_eq!(app.selected_tasks().len(), 1);
        assert_eq!(app.selected_tasks()[0].title, "A");
    }

    #[test]
    fn analyze_key_enqueues_request() {
        let mut app = app();
        let (tx, mut rx) = channel();

        press(&mut app, &tx, KeyCode::Char('a'));
        assert!(matches!(rx.try_recv(), Ok(Action::RequestAnalysis)));
    }

    #[test]
    fn quit_keys() {
        let mut app = app();
        let (tx, _rx) = channel();
        handle_key(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            &mut app,
            &tx,
        );
        assert!(!app.running);

        let mut app = self::app();
        press(&mut app, &tx, KeyCode::Char('q'));
        assert!(!app.running);
    }
}
