//! Core library for the career planner.
//!
//! This crate holds the plan tree (year → month → day → task), the store
//! that mutates it, and the pure read-side helpers built on top of it.
//!
//! - [`models`]: The plan entities and their serialized shape
//! - [`store`]: [`PlanStore`], the sole mutator, plus its builder
//! - [`stats`] and [`query`]: Pure functions over a plan snapshot
//! - [`expansion`]: Which years and months a viewer has open
//! - [`storage`]: Key/value persistence of snapshots (SQLite or memory)
//! - [`display`]: Markdown rendering for the CLI
//!
//! # Quick Start
//!
//! ```rust
//! use career_core::{
//!     params::{AddDay, AddMonth, AddTask, MonthPath},
//!     PlanStoreBuilder,
//! };
//! use jiff::civil::date;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut store = PlanStoreBuilder::new()
//!     .in_memory()
//!     .with_reference_date(date(2024, 6, 15))
//!     .build()?;
//!
//! let year = store.add_year();
//! let month = store.add_month(&AddMonth::to_year(year.id.clone()))?;
//! let month_path = MonthPath::new(year.id.clone(), month.id.clone());
//! let day = store.add_day(&AddDay::to_month(month_path.clone()))?;
//! assert_eq!(day.date, date(2024, 1, 1));
//!
//! let day_path = month_path.day(day.id.clone());
//! store.add_task(&AddTask::titled(day_path, "Read the Rust book"))?;
//!
//! let stats = store.stats();
//! assert_eq!(stats.total_tasks, 2);
//! assert_eq!(store.tasks_on_date(date(2024, 1, 1)).len(), 2);
//! # Ok(())
//! # }
//! ```

pub mod display;
pub mod error;
pub mod expansion;
pub mod models;
pub mod params;
pub mod query;
pub mod stats;
pub mod storage;
pub mod store;

// Re-export commonly used types
pub use display::{
    CreateResult, DatedTasks, DeleteResult, OperationStatus, PlanTree, UpdateResult,
};
pub use error::{PlannerError, Result};
pub use expansion::ExpansionState;
pub use models::{CareerPlan, Day, EditNode, EntityId, Month, Task, Year};
pub use params::{AddDay, AddMonth, AddTask, DayPath, MonthPath, TaskPath};
pub use query::DatedTask;
pub use stats::{Progress, Stats};
pub use storage::{MemoryStorage, SqliteStorage, Storage};
pub use store::{PlanStore, PlanStoreBuilder};
