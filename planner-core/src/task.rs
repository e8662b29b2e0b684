use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{Display, EnumString};
use time::Date;
use uuid::Uuid;

/// Opaque task identifier, unique within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(Uuid);

impl TaskId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for TaskId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    /// Next priority in `low -> medium -> high -> low` order.
    pub fn cycle_next(self) -> Self {
        match self {
            Priority::Low => Priority::Medium,
            Priority::Medium => Priority::High,
            Priority::High => Priority::Low,
        }
    }

    pub fn cycle_previous(self) -> Self {
        match self {
            Priority::Low => Priority::High,
            Priority::Medium => Priority::Low,
            Priority::High => Priority::Medium,
        }
    }
}

/// A planned to-do item owned by exactly one calendar date.
///
/// Only `completed` ever changes after creation; everything else is fixed by
/// [`TaskStore::add_task`](crate::TaskStore::add_task).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub completed: bool,
    pub priority: Priority,
    pub time: Option<String>,
    pub date: Date,
}

impl Task {
    pub fn snapshot(&self) -> TaskSnapshot {
        TaskSnapshot {
            title: self.title.clone(),
            completed: self.completed,
            priority: self.priority,
            time: self.time.clone(),
        }
    }

    pub fn has_time(&self) -> bool {
        self.time.as_deref().is_some_and(|t| !t.trim().is_empty())
    }
}

/// The part of a [`Task`] sent to the summarization service.
///
/// `id` and `date` never leave the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskSnapshot {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

impl TaskSnapshot {
    pub fn new(title: impl Into<String>, priority: Priority) -> Self {
        Self {
            title: title.into(),
            completed: false,
            priority,
            time: None,
        }
    }

    pub fn completed(mut self) -> Self {
        self.completed = true;
        self
    }

    pub fn at(mut self, time: impl Into<String>) -> Self {
        self.time = Some(time.into());
        self
    }

    pub fn has_time(&self) -> bool {
        self.time.as_deref().is_some_and(|t| !t.trim().is_empty())
    }
}
