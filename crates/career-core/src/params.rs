//! Parameter structures for career plan operations
//!
//! These structures address nodes in the plan tree and carry creation inputs.
//! They are shared by every interface (the CLI today) and stay free of
//! framework-specific derives. Interface layers convert their own argument
//! types into these with `From` impls.
//!
//! Nodes are addressed by the full id path from the year down, because ids are
//! only looked up within their parent:
//!
//! ```text
//! TaskPath { year_id, month_id, day_id, task_id }
//!     └── DayPath { year_id, month_id, day_id }
//!           └── MonthPath { year_id, month_id }
//! ```

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::models::EntityId;

/// Address of a month within a year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthPath {
    pub year_id: EntityId,
    pub month_id: EntityId,
}

impl MonthPath {
    pub fn new(year_id: impl Into<EntityId>, month_id: impl Into<EntityId>) -> Self {
        Self {
            year_id: year_id.into(),
            month_id: month_id.into(),
        }
    }

    /// Address of a day within this month.
    pub fn day(&self, day_id: impl Into<EntityId>) -> DayPath {
        DayPath {
            year_id: self.year_id.clone(),
            month_id: self.month_id.clone(),
            day_id: day_id.into(),
        }
    }
}

/// Address of a day within a month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPath {
    pub year_id: EntityId,
    pub month_id: EntityId,
    pub day_id: EntityId,
}

impl DayPath {
    /// Address of the month holding this day.
    pub fn month(&self) -> MonthPath {
        MonthPath {
            year_id: self.year_id.clone(),
            month_id: self.month_id.clone(),
        }
    }

    /// Address of a task within this day.
    pub fn task(&self, task_id: impl Into<EntityId>) -> TaskPath {
        TaskPath {
            year_id: self.year_id.clone(),
            month_id: self.month_id.clone(),
            day_id: self.day_id.clone(),
            task_id: task_id.into(),
        }
    }
}

/// Address of a task within a day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskPath {
    pub year_id: EntityId,
    pub month_id: EntityId,
    pub day_id: EntityId,
    pub task_id: EntityId,
}

impl TaskPath {
    /// Address of the day holding this task.
    pub fn day(&self) -> DayPath {
        DayPath {
            year_id: self.year_id.clone(),
            month_id: self.month_id.clone(),
            day_id: self.day_id.clone(),
        }
    }
}

/// Parameters for appending a month to a year.
///
/// Missing title and description fall back to the numbered defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddMonth {
    /// Year to append the month to
    pub year_id: EntityId,
    /// Optional title; must not be blank when given
    #[serde(default)]
    pub title: Option<String>,
    /// Optional description
    #[serde(default)]
    pub description: Option<String>,
}

impl AddMonth {
    /// Month with default title and description.
    pub fn to_year(year_id: impl Into<EntityId>) -> Self {
        Self {
            year_id: year_id.into(),
            title: None,
            description: None,
        }
    }
}

/// Parameters for appending a day to a month.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddDay {
    /// Month to append the day to
    pub month: MonthPath,
    /// Optional title; must not be blank when given
    #[serde(default)]
    pub title: Option<String>,
    /// Optional description
    #[serde(default)]
    pub description: Option<String>,
    /// Explicit date; computed from the day's position when absent
    #[serde(default)]
    pub date: Option<Date>,
}

impl AddDay {
    /// Day with default title, description and date.
    pub fn to_month(month: MonthPath) -> Self {
        Self {
            month,
            title: None,
            description: None,
            date: None,
        }
    }

    /// Same request with an explicit date.
    pub fn on(mut self, date: Date) -> Self {
        self.date = Some(date);
        self
    }
}

/// Parameters for appending a task to a day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTask {
    /// Day to append the task to
    pub day: DayPath,
    /// Optional title; defaults to `Task {n}`
    #[serde(default)]
    pub title: Option<String>,
}

impl AddTask {
    /// Task with the numbered default title.
    pub fn to_day(day: DayPath) -> Self {
        Self { day, title: None }
    }

    /// Task with an explicit title.
    pub fn titled(day: DayPath, title: impl Into<String>) -> Self {
        Self {
            day,
            title: Some(title.into()),
        }
    }
}
