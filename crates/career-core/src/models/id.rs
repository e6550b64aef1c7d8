//! Entity identifiers.

use std::{borrow::Borrow, fmt};

use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Kind of node in the plan tree, used as the identifier prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Plan,
    Year,
    Month,
    Day,
    Task,
}

impl EntityKind {
    /// Lowercase name, also used as the id prefix.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Plan => "career",
            EntityKind::Year => "year",
            EntityKind::Month => "month",
            EntityKind::Day => "day",
            EntityKind::Task => "task",
        }
    }
}

/// Globally unique, stable identifier of a plan entity.
///
/// Generated ids look like `year-01j9…` (kind prefix plus a lowercase ULID).
/// Ids loaded from an existing snapshot are kept verbatim, whatever their
/// shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    /// Generates a fresh id for an entity of the given kind.
    pub fn generate(kind: EntityKind) -> Self {
        Self(format!(
            "{}-{}",
            kind.as_str(),
            Ulid::new().to_string().to_lowercase()
        ))
    }

    /// Borrow the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntityId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for EntityId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Borrow<str> for EntityId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for EntityId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for EntityId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
