//! Month node.

use serde::{Deserialize, Serialize};

use super::{Day, EntityId, EntityKind};

/// One month within a year.
///
/// `month_number` is the 1-based position at creation time. It is expected to
/// fall in 1..=12 but nothing enforces that.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Month {
    pub id: EntityId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub month_number: u32,
    #[serde(default)]
    pub is_completed: bool,
    #[serde(default)]
    pub days: Vec<Day>,
}

impl Month {
    /// Creates month `month_number` with default title and description.
    pub fn new(month_number: u32) -> Self {
        Self {
            id: EntityId::generate(EntityKind::Month),
            title: format!("Month {month_number} - New Monthly Plan"),
            description: "Add your monthly objectives and learning goals".to_string(),
            month_number,
            is_completed: false,
            days: Vec::new(),
        }
    }

    /// Looks up a day of this month by id.
    pub fn day(&self, day_id: &str) -> Option<&Day> {
        self.days.iter().find(|day| day.id.as_str() == day_id)
    }

    /// Looks up a day of this month by id for mutation.
    pub fn day_mut(&mut self, day_id: &str) -> Option<&mut Day> {
        self.days.iter_mut().find(|day| day.id.as_str() == day_id)
    }
}
