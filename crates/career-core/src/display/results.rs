//! Result wrapper types for displaying operation outcomes.
//!
//! These wrap a node returned by a store operation and prefix its rendering
//! with a one-line confirmation.

use std::fmt;

use crate::models::{Day, EntityId, Month, Task, Year};

/// A node of the plan tree that operation results can describe.
pub trait PlanNode: fmt::Display {
    /// Lowercase noun used in messages, e.g. `"month"`.
    const KIND: &'static str;

    fn id(&self) -> &EntityId;

    fn title(&self) -> &str;
}

macro_rules! impl_plan_node {
    ($($node:ty => $kind:literal),* $(,)?) => {
        $(
            impl PlanNode for $node {
                const KIND: &'static str = $kind;

                fn id(&self) -> &EntityId {
                    &self.id
                }

                fn title(&self) -> &str {
                    &self.title
                }
            }
        )*
    };
}

impl_plan_node!(Year => "year", Month => "month", Day => "day", Task => "task");

/// Wrapper for displaying a newly created node.
///
/// # Examples
///
/// ```rust
/// use career_core::{display::CreateResult, models::Year};
///
/// let output = CreateResult::new(Year::new(1)).to_string();
/// assert!(output.contains("Created year 'Year 1 - New Career Phase'"));
/// ```
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl<T: PlanNode> fmt::Display for CreateResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Created {} '{}' (ID: {})",
            T::KIND,
            self.resource.title(),
            self.resource.id()
        )?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper for displaying an edited node along with what changed.
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            changes: Vec::new(),
        }
    }

    /// Create an UpdateResult with a list of changes made.
    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }
}

impl<T: PlanNode> fmt::Display for UpdateResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated {} with ID: {}", T::KIND, self.resource.id())?;

        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper for displaying a removed node.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl<T: PlanNode> fmt::Display for DeleteResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted {} '{}' (ID: {})",
            T::KIND,
            self.resource.title(),
            self.resource.id()
        )
    }
}
