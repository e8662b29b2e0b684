use planner_core::{
    Analysis, CalendarState, DayProgress, Priority, Task, TaskId, TaskSnapshot, TaskStore, YearMonth,
};
use time::Date;

use crate::time_utils::Clock;

mod state;
pub use state::{FocusedPane, FormField, TaskForm, TextInput};

/// All client state. Tasks and the calendar are private and only change
/// through the operations below.
pub struct App {
    pub running: bool,
    pub status_message: Option<String>,
    pub focused_pane: FocusedPane,
    pub form: TaskForm,
    pub focused_task_index: usize,

    // Analysis panel
    pub analysis: Option<Analysis>,
    pub is_analyzing: bool,
    pub throbber_state: throbber_widgets_tui::ThrobberState,

    pub api_url: String,

    clock: Clock,
    store: TaskStore,
    calendar: CalendarState,
}

impl App {
    pub fn new(clock: impl Into<Clock>, api_url: impl Into<String>) -> Self {
        let clock = clock.into();
        let today = clock.today();
        Self {
            running: true,
            status_message: None,
            focused_pane: FocusedPane::default(),
            form: TaskForm::default(),
            focused_task_index: 0,
            analysis: None,
            is_analyzing: false,
            throbber_state: throbber_widgets_tui::ThrobberState::default(),
            api_url: api_url.into(),
            clock,
            store: TaskStore::new(),
            calendar: CalendarState::new(today),
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    // ---- Read side ----

    /// Read from the clock on every call, so it follows local midnight.
    pub fn today(&self) -> Date {
        self.clock.today()
    }

    pub fn selected_date(&self) -> Date {
        self.calendar.selected_date()
    }

    pub fn viewed_month(&self) -> YearMonth {
        self.calendar.viewed_month()
    }

    pub fn month_days(&self) -> Vec<Date> {
        self.calendar.month_days()
    }

    pub fn leading_blank_days(&self) -> u8 {
        self.calendar.leading_blank_days()
    }

    pub fn selected_tasks(&self) -> Vec<&Task> {
        self.store.tasks_for_date(self.selected_date())
    }

    pub fn progress_for(&self, date: Date) -> DayProgress {
        self.store.progress_for_date(date)
    }

    pub fn selected_progress(&self) -> DayProgress {
        self.progress_for(self.selected_date())
    }

    pub fn focused_task(&self) -> Option<&Task> {
        self.selected_tasks().get(self.focused_task_index).copied()
    }

    // ---- Tasks ----

    /// Add a task directly, bypassing the form.
    pub fn add_task(
        &mut self,
        title: &str,
        priority: Priority,
        time: Option<&str>,
        date: Date,
    ) -> Option<Task> {
        self.store.add_task(title, priority, time, date)
    }

    /// Submit the form as a task on the selected date.
    pub fn add_task_from_form(&mut self) -> Option<Task> {
        let time = self.form.time.value.clone();
        let added = self.store.add_task(
            &self.form.title.value,
            self.form.priority,
            Some(time.as_str()),
            self.selected_date(),
        );

        match &added {
            Some(task) => {
                self.set_status(format!("Added \"{}\"", task.title));
                self.form.reset_inputs();
            }
            None => self.set_status("Task title cannot be empty"),
        }
        added
    }

    pub fn toggle_task(&mut self, id: TaskId) -> Option<bool> {
        self.store.toggle_task(id)
    }

    pub fn toggle_focused_task(&mut self) -> Option<bool> {
        let id = self.focused_task()?.id;
        self.toggle_task(id)
    }

    pub fn delete_focused_task(&mut self) -> Option<Task> {
        let id = self.focused_task()?.id;
        let removed = self.store.delete_task(id)?;
        self.clamp_focused_task();
        self.set_status(format!("Deleted \"{}\"", removed.title));
        Some(removed)
    }

    pub fn focus_next_task(&mut self) {
        let count = self.selected_tasks().len();
        if self.focused_task_index + 1 < count {
            self.focused_task_index += 1;
        }
    }

    pub fn focus_previous_task(&mut self) {
        self.focused_task_index = self.focused_task_index.saturating_sub(1);
    }

    fn clamp_focused_task(&mut self) {
        let count = self.selected_tasks().len();
        self.focused_task_index = self.focused_task_index.min(count.saturating_sub(1));
    }

    // ---- Calendar ----

    pub fn select_date(&mut self, date: Date) {
        self.calendar.select(date);
        self.focused_task_index = 0;
    }

    pub fn move_selection(&mut self, days: i64) {
        self.calendar.move_selection(days);
        self.focused_task_index = 0;
    }

    pub fn go_to_today(&mut self) {
        self.select_date(self.today());
    }

    pub fn next_month(&mut self) {
        self.calendar.next_month();
    }

    pub fn previous_month(&mut self) {
        self.calendar.previous_month();
    }

    // ---- Analysis ----

    /// Mark an analysis as in flight and return the snapshot to send.
    ///
    /// `None` while another request is pending or when the selected day has
    /// no tasks.
    pub fn begin_analysis(&mut self) -> Option<Vec<TaskSnapshot>> {
        if self.is_analyzing {
            return None;
        }
        let snapshot = self.store.snapshots_for_date(self.selected_date());
        if snapshot.is_empty() {
            self.set_status("Add a task before asking for an analysis");
            return None;
        }
        self.is_analyzing = true;
        self.set_status("Analyzing...");
        Some(snapshot)
    }

    /// Show `analysis`, whatever day is selected now.
    pub fn finish_analysis(&mut self, analysis: Analysis) {
        self.analysis = Some(analysis);
        self.is_analyzing = false;
        self.clear_status();
    }
}
