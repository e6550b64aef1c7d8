//! Persistence adapters for plan snapshots.
//!
//! The store only needs a keyed load/save pair of JSON documents. Two
//! adapters ship with the crate:
//!
//! - [`SqliteStorage`]: durable key/value table in a SQLite file
//! - [`MemoryStorage`]: process-local map, for tests and throwaway sessions
//!
//! Adapters report failures as errors; deciding what a failure means (the
//! store keeps working in memory) is the caller's business.

use serde_json::Value;

use crate::error::Result;

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStorage;
pub use sqlite::SqliteStorage;

/// Key of the plan snapshot, the only key the core depends on.
pub const PLAN_KEY: &str = "careerData";

/// Key under which interfaces may keep expansion state between sessions.
pub const EXPANSION_KEY: &str = "expandedNodes";

/// Key holding the last plan snapshot that could not be loaded.
pub const CORRUPT_PLAN_KEY: &str = "careerData.corrupt";

/// Keyed storage of JSON documents.
pub trait Storage {
    /// Returns the value saved under `key`, or `None` if nothing was saved.
    fn load(&self, key: &str) -> Result<Option<Value>>;

    /// Saves `value` under `key`, replacing any earlier value.
    fn save(&mut self, key: &str, value: &Value) -> Result<()>;

    /// Copies whatever is stored under `from` to `to` without parsing it,
    /// replacing any earlier value under `to`. Returns `false` when nothing
    /// is stored under `from`.
    fn copy(&mut self, from: &str, to: &str) -> Result<bool>;
}
