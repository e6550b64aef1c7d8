//! In-memory owner of the career plan tree.
//!
//! [`PlanStore`] is the only thing that mutates a [`CareerPlan`]. It also keeps
//! the [`ExpansionState`] of the tree in step with structural changes, and
//! writes a snapshot to its [`Storage`] after every successful mutation.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   Interface     │    │    PlanStore    │    │     Storage     │
//! │  (CLI command)  │───▶│ (year_ops, ...) │───▶│ (sqlite/memory) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!                               │
//!                               ▼
//!                     stats / query (pure reads)
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for [`PlanStore`] instances with configuration
//! - [`year_ops`]: Plan and year operations
//! - [`month_ops`]: Month operations
//! - [`day_ops`]: Day operations
//! - [`task_ops`]: Task operations
//!
//! ## Atomicity
//!
//! Every operation validates its input and resolves its target before it
//! touches the tree. An `Err` therefore means nothing changed; callers may
//! treat it as a no-op. A failed save never fails the operation: the new tree
//! stays in memory and the failure is logged and kept in
//! [`PlanStore::last_persistence_error`].
//!
//! # Usage Examples
//!
//! ```rust
//! use career_core::{params::AddMonth, PlanStoreBuilder};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut store = PlanStoreBuilder::new().in_memory().build()?;
//!
//! let year = store.add_year();
//! let month = store.add_month(&AddMonth::to_year(year.id.clone()))?;
//!
//! assert_eq!(month.month_number, 1);
//! assert!(store.expansion().is_year_expanded(year.id.as_str()));
//! assert_eq!(store.stats().total_months, 1);
//! # Ok(())
//! # }
//! ```

use jiff::{civil::Date, Span, Zoned};
use log::{debug, warn};

use crate::{
    error::{PlannerError, Result},
    expansion::ExpansionState,
    models::{CareerPlan, Day, Month, Task, Year},
    params::{DayPath, MonthPath, TaskPath},
    query::{self, DatedTask},
    stats::{self, Stats},
    storage::{Storage, EXPANSION_KEY, PLAN_KEY},
};

pub mod builder;
pub mod day_ops;
pub mod month_ops;
pub mod task_ops;
pub mod year_ops;


pub use builder::PlanStoreBuilder;

/// Owner of the live plan, its expansion state and its storage.
pub struct PlanStore {
    plan: CareerPlan,
    expansion: ExpansionState,
    storage: Box<dyn Storage>,
    /// Fixed "today" for default day dates; the system date when `None`
    reference_date: Option<Date>,
    remember_expansion: bool,
    last_persistence_error: Option<String>,
    /// Why the saved plan was replaced by the default one at startup
    load_error: Option<String>,
}

impl PlanStore {
    pub(crate) fn new(
        plan: CareerPlan,
        expansion: ExpansionState,
        storage: Box<dyn Storage>,
        reference_date: Option<Date>,
        remember_expansion: bool,
    ) -> Self {
        Self {
            plan,
            expansion,
            storage,
            reference_date,
            remember_expansion,
            last_persistence_error: None,
            load_error: None,
        }
    }

    /// The current plan snapshot.
    pub fn plan(&self) -> &CareerPlan {
        &self.plan
    }

    /// The current expansion state.
    pub fn expansion(&self) -> &ExpansionState {
        &self.expansion
    }

    /// Aggregate statistics of the current snapshot.
    pub fn stats(&self) -> Stats {
        stats::compute_stats(&self.plan)
    }

    /// Tasks scheduled on `date` in the current snapshot.
    pub fn tasks_on_date(&self, date: Date) -> Vec<DatedTask> {
        query::tasks_on_date(&self.plan, date)
    }

    /// Message of the most recent failed save, cleared by the next success.
    pub fn last_persistence_error(&self) -> Option<&str> {
        self.last_persistence_error.as_deref()
    }

    /// Set when a saved plan existed but could not be read, so the store
    /// started from the default plan. The unreadable snapshot is kept under
    /// [`CORRUPT_PLAN_KEY`](crate::storage::CORRUPT_PLAN_KEY). Stays set for the store's lifetime.
    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    /// Flips whether a year's months are shown.
    ///
    /// # Errors
    ///
    /// * `PlannerError::YearNotFound` - When the year does not exist
    pub fn toggle_year_expansion(&mut self, year_id: &str) -> Result<bool> {
        let id = self.year(year_id)?.id.clone();
        let expanded = self.expansion.toggle_year(&id);
        let result = self.write_expansion();
        self.record_persistence(&result);
        Ok(expanded)
    }

    /// Flips whether a month's days are shown.
    ///
    /// # Errors
    ///
    /// * `PlannerError::YearNotFound` / `PlannerError::MonthNotFound` - When
    ///   the path does not resolve
    pub fn toggle_month_expansion(&mut self, path: &MonthPath) -> Result<bool> {
        self.month_mut(path)?;
        let expanded = self.expansion.toggle_month(&path.year_id, &path.month_id);
        let result = self.write_expansion();
        self.record_persistence(&result);
        Ok(expanded)
    }

    /// Writes the plan snapshot now, reporting any failure to the caller.
    pub fn save(&mut self) -> Result<()> {
        let result = self.write_plan();
        self.record_persistence(&result);
        result
    }

    /// Reference date used when a day is added without one.
    pub fn today(&self) -> Date {
        self.reference_date.unwrap_or_else(|| Zoned::now().date())
    }

    /// Saves the plan (and expansion state) after a mutation; failures only
    /// degrade durability.
    fn persist(&mut self) {
        let plan = self.write_plan();
        let expansion = self.write_expansion();
        self.record_persistence(&plan.and(expansion));
    }

    fn write_plan(&mut self) -> Result<()> {
        let value = serde_json::to_value(&self.plan)?;
        self.storage.save(PLAN_KEY, &value)
    }

    fn write_expansion(&mut self) -> Result<()> {
        if !self.remember_expansion {
            return Ok(());
        }
        let value = serde_json::to_value(&self.expansion)?;
        self.storage.save(EXPANSION_KEY, &value)
    }

    /// Keeps the outcome of the latest write; a success clears older failures.
    fn record_persistence(&mut self, result: &Result<()>) {
        match result {
            Ok(()) => self.last_persistence_error = None,
            Err(e) => {
                warn!("Plan changed in memory but could not be saved: {e}");
                self.last_persistence_error = Some(e.to_string());
            }
        }
    }

    fn year(&self, year_id: &str) -> Result<&Year> {
        self.plan
            .year(year_id)
            .ok_or_else(|| PlannerError::YearNotFound { id: year_id.into() })
    }

    fn year_mut(&mut self, year_id: &str) -> Result<&mut Year> {
        self.plan
            .year_mut(year_id)
            .ok_or_else(|| PlannerError::YearNotFound { id: year_id.into() })
    }

    fn month_mut(&mut self, path: &MonthPath) -> Result<&mut Month> {
        self.year_mut(path.year_id.as_str())?
            .month_mut(path.month_id.as_str())
            .ok_or_else(|| PlannerError::MonthNotFound {
                id: path.month_id.clone(),
            })
    }

    fn day_mut(&mut self, path: &DayPath) -> Result<&mut Day> {
        self.month_mut(&path.month())?
            .day_mut(path.day_id.as_str())
            .ok_or_else(|| PlannerError::DayNotFound {
                id: path.day_id.clone(),
            })
    }

    fn task_mut(&mut self, path: &TaskPath) -> Result<&mut Task> {
        self.day_mut(&path.day())?
            .task_mut(path.task_id.as_str())
            .ok_or_else(|| PlannerError::TaskNotFound {
                id: path.task_id.clone(),
            })
    }
}

/// Default date of the day at 0-based `position` in month `month_number`.
///
/// Starts from the first of that month in the reference year and rolls over
/// into later months when the position runs past the month's end.
pub(crate) fn default_day_date(reference: Date, month_number: u32, position: usize) -> Date {
    let month = month_number.clamp(1, 12) as i8;
    let offset = i64::try_from(position).unwrap_or(0);

    Span::new()
        .try_days(offset)
        .and_then(|span| Date::new(reference.year(), month, 1)?.checked_add(span))
        .unwrap_or_else(|e| {
            debug!("Falling back to reference date for default day date: {e}");
            reference
        })
}
