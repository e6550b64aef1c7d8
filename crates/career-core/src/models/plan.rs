//! Career plan aggregate root.

use serde::{Deserialize, Serialize};

use super::{EntityId, EntityKind, Year};

/// Title given to a plan on first run.
pub const DEFAULT_PLAN_TITLE: &str = "My Career Journey";

/// Description given to a plan on first run.
pub const DEFAULT_PLAN_DESCRIPTION: &str = "Plan your career growth and development";

/// Root of the year → month → day → task hierarchy.
///
/// The plan owns every descendant exclusively; a snapshot of this struct is
/// what gets persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CareerPlan {
    /// Unique identifier for the plan
    #[serde(default = "generate_plan_id")]
    pub id: EntityId,

    /// Title of the career goal
    pub title: String,

    /// Longer description of the goal
    #[serde(default)]
    pub description: String,

    /// Years in insertion order
    #[serde(default)]
    pub years: Vec<Year>,
}

// Snapshots written by older front-ends carry no plan id.
fn generate_plan_id() -> EntityId {
    EntityId::generate(EntityKind::Plan)
}

impl CareerPlan {
    /// Creates an empty plan with the given title and description.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: generate_plan_id(),
            title: title.into(),
            description: description.into(),
            years: Vec::new(),
        }
    }

    /// Looks up a year by id.
    pub fn year(&self, year_id: &str) -> Option<&Year> {
        self.years.iter().find(|year| year.id.as_str() == year_id)
    }

    /// Looks up a year by id for mutation.
    pub fn year_mut(&mut self, year_id: &str) -> Option<&mut Year> {
        self.years.iter_mut().find(|year| year.id.as_str() == year_id)
    }
}

impl Default for CareerPlan {
    fn default() -> Self {
        Self::new(DEFAULT_PLAN_TITLE, DEFAULT_PLAN_DESCRIPTION)
    }
}
