//! Day node.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::{EntityId, EntityKind, Task};

/// Title of the task every new day starts with.
pub const SEED_TASK_TITLE: &str = "Add your first task";

/// One scheduled day within a month.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Day {
    /// Unique identifier for the day
    pub id: EntityId,

    /// Title of the day
    pub title: String,

    /// What the day is about
    #[serde(default)]
    pub description: String,

    /// Calendar date, serialized as `YYYY-MM-DD`
    pub date: Date,

    /// Manually set completion flag
    #[serde(default)]
    pub is_completed: bool,

    /// Tasks in insertion order
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl Day {
    /// Creates the day at 0-based `position` within its month.
    ///
    /// The new day carries a single seed task so the user has something to
    /// rename.
    pub fn new(position: usize, date: Date) -> Self {
        Self {
            id: EntityId::generate(EntityKind::Day),
            title: format!("Day {} - Daily Plan", position + 1),
            description: "Plan your daily tasks and activities".to_string(),
            date,
            is_completed: false,
            tasks: vec![Task::new(SEED_TASK_TITLE)],
        }
    }

    /// Looks up a task of this day by id.
    pub fn task(&self, task_id: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id.as_str() == task_id)
    }

    /// Looks up a task of this day by id for mutation.
    pub fn task_mut(&mut self, task_id: &str) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.id.as_str() == task_id)
    }
}
