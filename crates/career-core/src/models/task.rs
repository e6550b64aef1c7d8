//! Task leaf node.

use serde::{Deserialize, Serialize};

use super::{EntityId, EntityKind};

/// A single actionable item scheduled on a day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: EntityId,
    pub title: String,
    #[serde(default)]
    pub is_completed: bool,
}

impl Task {
    /// Creates an incomplete task with a fresh id.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: EntityId::generate(EntityKind::Task),
            title: title.into(),
            is_completed: false,
        }
    }
}
