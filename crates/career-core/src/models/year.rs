//! Year node.

use serde::{Deserialize, Serialize};

use super::{EntityId, EntityKind, Month};

/// One year of the plan, numbered from 1 at creation time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Year {
    /// Unique identifier for the year
    pub id: EntityId,

    /// Title of the year
    pub title: String,

    /// What the year is about
    #[serde(default)]
    pub description: String,

    /// 1-based number assigned at creation; never renumbered
    pub year_number: u32,

    /// Manually set completion flag
    #[serde(default)]
    pub is_completed: bool,

    /// Months in insertion order
    #[serde(default)]
    pub months: Vec<Month>,
}

impl Year {
    /// Creates year `year_number` with default title and description.
    pub fn new(year_number: u32) -> Self {
        Self {
            id: EntityId::generate(EntityKind::Year),
            title: format!("Year {year_number} - New Career Phase"),
            description: "Define your goals and milestones for this year".to_string(),
            year_number,
            is_completed: false,
            months: Vec::new(),
        }
    }

    /// Looks up a month of this year by id.
    pub fn month(&self, month_id: &str) -> Option<&Month> {
        self.months.iter().find(|month| month.id.as_str() == month_id)
    }

    /// Looks up a month of this year by id for mutation.
    pub fn month_mut(&mut self, month_id: &str) -> Option<&mut Month> {
        self.months
            .iter_mut()
            .find(|month| month.id.as_str() == month_id)
    }
}
