//! Data models for the career plan tree.
//!
//! This module contains the entities of the planning hierarchy:
//!
//! ```text
//! CareerPlan
//! └── Year        (year_number, is_completed)
//!     └── Month   (month_number, is_completed)
//!         └── Day (date, is_completed)
//!             └── Task (is_completed)
//! ```
//!
//! Every entity carries an [`EntityId`] that stays stable for its lifetime and
//! is never reused. Completion flags on years, months and days are set by
//! hand; they are never derived from the tasks below them. Display
//! implementations live in [`crate::display`].
//!
//! # Examples
//!
//! ```rust
//! use career_core::models::{CareerPlan, Year};
//!
//! let mut plan = CareerPlan::default();
//! plan.years.push(Year::new(1));
//!
//! let json = serde_json::to_value(&plan).unwrap();
//! assert_eq!(json["years"][0]["yearNumber"], 1);
//! assert_eq!(json["years"][0]["isCompleted"], false);
//! ```

pub mod day;
pub mod id;
pub mod month;
pub mod plan;
pub mod requests;
pub mod task;
pub mod year;

#[cfg(test)]
mod tests;

pub use day::{Day, SEED_TASK_TITLE};
pub use id::{EntityId, EntityKind};
pub use month::Month;
pub use plan::{CareerPlan, DEFAULT_PLAN_DESCRIPTION, DEFAULT_PLAN_TITLE};
pub use requests::{clean_title, EditNode};
pub(crate) use requests::clean_optional_title;
pub use task::Task;
pub use year::Year;
