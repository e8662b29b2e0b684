use time::Date;

use crate::{Priority, Task, TaskId, TaskSnapshot};

/// Completed/total counts for a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DayProgress {
    pub completed: usize,
    pub total: usize,
}

impl DayProgress {
    /// Percentage of completed tasks, `0.0` for a day without tasks.
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.completed as f64 / self.total as f64 * 100.0
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Calendar badge text, e.g. `"2/3"`. Days without tasks get none.
    pub fn badge(&self) -> Option<String> {
        if self.is_empty() {
            return None;
        }
        Some(format!("{}/{}", self.completed, self.total))
    }
}

/// Insertion-ordered, in-memory task collection.
///
/// This is the only place tasks live; dropping the store drops every task.
#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a task dated `date`.
    ///
    /// Returns `None` without touching the store if `title` is blank. A blank
    /// `time` is stored as no time.
    pub fn add_task(
        &mut self,
        title: &str,
        priority: Priority,
        time: Option<&str>,
        date: Date,
    ) -> Option<Task> {
        let title = title.trim();
        if title.is_empty() {
            return None;
        }

        let time = time
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string);

        let task = Task {
            id: self.fresh_id(),
            title: title.to_string(),
            completed: false,
            priority,
            time,
            date,
        };
        self.tasks.push(task.clone());
        Some(task)
    }

    /// Flip `completed`, returning the new value.
    pub fn toggle_task(&mut self, id: TaskId) -> Option<bool> {
        let task = self.tasks.iter_mut().find(|t| t.id == id)?;
        task.completed = !task.completed;
        Some(task.completed)
    }

    pub fn delete_task(&mut self, id: TaskId) -> Option<Task> {
        let index = self.tasks.iter().position(|t| t.id == id)?;
        Some(self.tasks.remove(index))
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn tasks_for_date(&self, date: Date) -> Vec<&Task> {
        self.tasks.iter().filter(|t| t.date == date).collect()
    }

    pub fn snapshots_for_date(&self, date: Date) -> Vec<TaskSnapshot> {
        self.tasks
            .iter()
            .filter(|t| t.date == date)
            .map(Task::snapshot)
            .collect()
    }

    pub fn progress_for_date(&self, date: Date) -> DayProgress {
        self.tasks
            .iter()
            .filter(|t| t.date == date)
            .fold(DayProgress::default(), |mut progress, task| {
                progress.total += 1;
                if task.completed {
                    progress.completed += 1;
                }
                progress
            })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    fn fresh_id(&self) -> TaskId {
        loop {
            let id = TaskId::new();
            if self.get(id).is_none() {
                return id;
            }
        }
    }
}
