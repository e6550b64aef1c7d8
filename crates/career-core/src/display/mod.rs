//! Display formatting for plans, query results and operation outcomes.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]).
//! Collections and operation results go through small wrapper types so each
//! output context gets a consistent shape. Everything renders as markdown,
//! which the CLI hands to a terminal skin.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrappers        │    │   Markdown      │
//! │  (Plan, Day)    │───▶│ & Result Types  │───▶│    Output       │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: Query result wrappers (DatedTasks)
//! - [`results`]: Operation result types (CreateResult, UpdateResult, DeleteResult)
//! - [`status`]: Status and confirmation messages (OperationStatus)
//! - [`datetime`]: Calendar date formatting
//! - [`models`]: Display implementations for domain models and the plan tree
//!
//! # Examples
//!
//! ```rust
//! use career_core::{
//!     display::{PlanTree, UpdateResult},
//!     expansion::ExpansionState,
//!     models::{CareerPlan, Year},
//! };
//!
//! let mut plan = CareerPlan::default();
//! plan.years.push(Year::new(1));
//!
//! // Nothing is expanded, so the year shows as a collapsed heading
//! let expansion = ExpansionState::new();
//! let tree = PlanTree::with_expansion(&plan, &expansion).to_string();
//! assert!(tree.contains("## 1. Year 1 - New Career Phase ○ (0/0 months done) [collapsed]"));
//!
//! let changes = vec!["Updated title".to_string()];
//! let output = UpdateResult::with_changes(plan.years[0].clone(), changes).to_string();
//! assert!(output.contains("Changes made:"));
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::DatedTasks;
pub use datetime::LongDate;
pub use models::PlanTree;
pub use results::{CreateResult, DeleteResult, PlanNode, UpdateResult};
pub use status::OperationStatus;
