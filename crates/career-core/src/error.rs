//! Error types for the career planner library.

use std::path::PathBuf;

use thiserror::Error;

use crate::models::EntityId;

/// Comprehensive error type for all planner operations.
///
/// Lookup and validation failures never leave a partially updated tree
/// behind: the store checks everything before it mutates, so callers may treat
/// these variants as a no-op.
#[derive(Error, Debug)]
pub enum PlannerError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Year not found for the given ID
    #[error("Year with ID {id} not found")]
    YearNotFound { id: EntityId },
    /// Month not found under the addressed year
    #[error("Month with ID {id} not found")]
    MonthNotFound { id: EntityId },
    /// Day not found under the addressed month
    #[error("Day with ID {id} not found")]
    DayNotFound { id: EntityId },
    /// Task not found under the addressed day
    #[error("Task with ID {id} not found")]
    TaskNotFound { id: EntityId },
    /// No node at a 1-based position
    #[error("No {kind} at position {position}")]
    PositionOutOfRange { kind: &'static str, position: usize },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> PlannerError {
        PlannerError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl PlannerError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a new database error with additional context.
    pub fn database_error(message: &str, source: rusqlite::Error) -> Self {
        Self::Database {
            message: message.to_string(),
            source,
        }
    }

    /// Whether the error reports a missing node rather than a failure.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::YearNotFound { .. }
                | Self::MonthNotFound { .. }
                | Self::DayNotFound { .. }
                | Self::TaskNotFound { .. }
                | Self::PositionOutOfRange { .. }
        )
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| PlannerError::database_error(message, e))
    }
}

/// Result type alias for planner operations
pub type Result<T> = std::result::Result<T, PlannerError>;
