//! Request types for editing nodes.

use crate::error::{PlannerError, Result};

/// Partial update of a node's editable text fields.
///
/// Only title and description are editable; ids, numbers and dates are fixed
/// at creation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditNode {
    pub title: Option<String>,
    pub description: Option<String>,
}

impl EditNode {
    /// Edit that only replaces the title.
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            description: None,
        }
    }

    /// Edit that only replaces the description.
    pub fn description(description: impl Into<String>) -> Self {
        Self {
            title: None,
            description: Some(description.into()),
        }
    }

    /// Whether the edit would change nothing.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none()
    }

    /// Validates the edit, returning the trimmed title to apply.
    ///
    /// # Errors
    ///
    /// * `PlannerError::InvalidInput` - When the title is blank
    pub fn validated_title(&self) -> Result<Option<String>> {
        self.title.as_deref().map(clean_title).transpose()
    }
}

/// Trims a user supplied title, rejecting empty and whitespace-only input.
///
/// # Examples
///
/// ```rust
/// use career_core::models::clean_title;
///
/// assert_eq!(clean_title("  Learn Rust ").unwrap(), "Learn Rust");
/// assert!(clean_title("   ").is_err());
/// ```
pub fn clean_title(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(PlannerError::invalid_input("title").with_reason("title cannot be empty"));
    }
    Ok(trimmed.to_string())
}

/// Validates an optional title, keeping `None` as "use the default".
pub(crate) fn clean_optional_title(raw: Option<&str>) -> Result<Option<String>> {
    raw.map(clean_title).transpose()
}
