//! Command-line argument definitions using clap
//!
//! The argument structs here are CLI-only wrappers. Nodes are addressed by
//! their 1-based position as printed by `career show` (`2 1 3` is the third
//! day of the first month of the second year); the positions are resolved to
//! ids against the current plan before any core operation runs.
//!
//! ```text
//! User Input → CLI Args (clap) → Position lookup → Core Params → PlanStore
//! ```

use std::path::PathBuf;

use career_core::{
    params::{AddDay, AddMonth, AddTask, DayPath, MonthPath, TaskPath},
    query, CareerPlan, EditNode, EntityId,
};
use clap::{Args as ClapArgs, Parser, Subcommand};
use jiff::civil::Date;

/// Plan a multi-year career goal as years, months, days and tasks
///
/// Without a subcommand the plan tree is shown. Years and months can be
/// collapsed with `year toggle` / `month toggle`; the collapsed state is
/// remembered between runs.
#[derive(Parser)]
#[command(version, about, name = "career")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/career-planner/career.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the career CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Show the plan tree
    #[command(alias = "s")]
    Show(ShowArgs),
    /// Show completion statistics for the whole plan
    Stats,
    /// List the tasks scheduled on a date
    On(OnArgs),
    /// Edit the plan itself
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
    /// Manage years
    #[command(alias = "y")]
    Year {
        #[command(subcommand)]
        command: YearCommands,
    },
    /// Manage months within a year
    #[command(alias = "m")]
    Month {
        #[command(subcommand)]
        command: MonthCommands,
    },
    /// Manage days within a month
    #[command(alias = "d")]
    Day {
        #[command(subcommand)]
        command: DayCommands,
    },
    /// Manage tasks within a day
    #[command(alias = "t")]
    Task {
        #[command(subcommand)]
        command: TaskCommands,
    },
}

#[derive(ClapArgs, Default)]
pub struct ShowArgs {
    /// Show every node, ignoring collapsed years and months
    #[arg(short, long)]
    pub all: bool,
}

#[derive(ClapArgs)]
pub struct OnArgs {
    /// Date in YYYY-MM-DD form; today when omitted
    pub date: Option<Date>,
}

/// Title and description changes shared by every `edit` command
#[derive(ClapArgs)]
pub struct EditArgs {
    /// New title (surrounding whitespace is trimmed; must not be blank)
    #[arg(short, long)]
    pub title: Option<String>,
    /// New description; pass "" to clear it
    #[arg(short, long)]
    pub description: Option<String>,
}

impl From<EditArgs> for EditNode {
    fn from(val: EditArgs) -> Self {
        EditNode {
            title: val.title,
            description: val.description,
        }
    }
}

// ============================================================================
// Positions
// ============================================================================

#[derive(ClapArgs)]
pub struct YearPosition {
    /// Position of the year (1-based)
    pub year: usize,
}

impl YearPosition {
    pub fn locate(&self, plan: &CareerPlan) -> career_core::Result<EntityId> {
        query::locate_year(plan, self.year)
    }
}

#[derive(ClapArgs)]
pub struct MonthPosition {
    /// Position of the year (1-based)
    pub year: usize,
    /// Position of the month within the year (1-based)
    pub month: usize,
}

impl MonthPosition {
    pub fn locate(&self, plan: &CareerPlan) -> career_core::Result<MonthPath> {
        query::locate_month(plan, self.year, self.month)
    }
}

#[derive(ClapArgs)]
pub struct DayPosition {
    /// Position of the year (1-based)
    pub year: usize,
    /// Position of the month within the year (1-based)
    pub month: usize,
    /// Position of the day within the month (1-based)
    pub day: usize,
}

impl DayPosition {
    pub fn locate(&self, plan: &CareerPlan) -> career_core::Result<DayPath> {
        query::locate_day(plan, self.year, self.month, self.day)
    }
}

#[derive(ClapArgs)]
pub struct TaskPosition {
    /// Position of the year (1-based)
    pub year: usize,
    /// Position of the month within the year (1-based)
    pub month: usize,
    /// Position of the day within the month (1-based)
    pub day: usize,
    /// Position of the task within the day (1-based)
    pub task: usize,
}

impl TaskPosition {
    pub fn locate(&self, plan: &CareerPlan) -> career_core::Result<TaskPath> {
        query::locate_task(plan, self.year, self.month, self.day, self.task)
    }
}

// ============================================================================
// Plan
// ============================================================================

#[derive(Subcommand)]
pub enum PlanCommands {
    /// Change the plan's title or description
    #[command(alias = "e")]
    Edit(EditArgs),
}

// ============================================================================
// Years
// ============================================================================

#[derive(Subcommand)]
pub enum YearCommands {
    /// Append a new year to the plan
    #[command(alias = "a")]
    Add,
    /// Remove a year with all its months, days and tasks
    #[command(aliases = ["d", "rm"])]
    Remove(YearPosition),
    /// Mark a year complete, or open again
    Done(YearPosition),
    /// Change a year's title or description
    #[command(alias = "e")]
    Edit {
        #[command(flatten)]
        position: YearPosition,
        #[command(flatten)]
        edit: EditArgs,
    },
    /// Expand or collapse a year in the tree
    #[command(alias = "fold")]
    Toggle(YearPosition),
}

// ============================================================================
// Months
// ============================================================================

/// Append a month to a year
#[derive(ClapArgs)]
pub struct AddMonthArgs {
    #[command(flatten)]
    pub position: YearPosition,
    /// Title of the month; "Month N - New Monthly Plan" when omitted
    #[arg(short, long)]
    pub title: Option<String>,
    /// Description of the month
    #[arg(short, long)]
    pub description: Option<String>,
}

impl AddMonthArgs {
    /// Core parameters for adding to the year `year_id`
    pub fn into_params(self, year_id: EntityId) -> AddMonth {
        AddMonth {
            year_id,
            title: self.title,
            description: self.description,
        }
    }
}

#[derive(Subcommand)]
pub enum MonthCommands {
    /// Append a month to a year
    #[command(alias = "a")]
    Add(AddMonthArgs),
    /// Remove a month with all its days and tasks
    #[command(aliases = ["d", "rm"])]
    Remove(MonthPosition),
    /// Mark a month complete, or open again
    Done(MonthPosition),
    /// Change a month's title or description
    #[command(alias = "e")]
    Edit {
        #[command(flatten)]
        position: MonthPosition,
        #[command(flatten)]
        edit: EditArgs,
    },
    /// Expand or collapse a month in the tree
    #[command(alias = "fold")]
    Toggle(MonthPosition),
}

// ============================================================================
// Days
// ============================================================================

/// Append a day to a month
#[derive(ClapArgs)]
pub struct AddDayArgs {
    #[command(flatten)]
    pub position: MonthPosition,
    /// Title of the day; "Day N - Daily Plan" when omitted
    #[arg(short, long)]
    pub title: Option<String>,
    /// Description of the day
    #[arg(short, long)]
    pub description: Option<String>,
    /// Calendar date (YYYY-MM-DD); derived from the month number when omitted
    #[arg(long)]
    pub date: Option<Date>,
}

impl AddDayArgs {
    /// Core parameters for adding to the month at `month`
    pub fn into_params(self, month: MonthPath) -> AddDay {
        AddDay {
            month,
            title: self.title,
            description: self.description,
            date: self.date,
        }
    }
}

#[derive(Subcommand)]
pub enum DayCommands {
    /// Append a day to a month
    #[command(alias = "a")]
    Add(AddDayArgs),
    /// Remove a day with its tasks
    #[command(aliases = ["d", "rm"])]
    Remove(DayPosition),
    /// Mark a day complete, or open again
    Done(DayPosition),
    /// Change a day's title or description
    #[command(alias = "e")]
    Edit {
        #[command(flatten)]
        position: DayPosition,
        #[command(flatten)]
        edit: EditArgs,
    },
}

// ============================================================================
// Tasks
// ============================================================================

/// Append a task to a day
#[derive(ClapArgs)]
pub struct AddTaskArgs {
    #[command(flatten)]
    pub position: DayPosition,
    /// Title of the task; "Task N" when omitted
    pub title: Option<String>,
}

impl AddTaskArgs {
    /// Core parameters for adding to the day at `day`
    pub fn into_params(self, day: DayPath) -> AddTask {
        AddTask {
            day,
            title: self.title,
        }
    }
}

#[derive(ClapArgs)]
pub struct RenameTaskArgs {
    #[command(flatten)]
    pub position: TaskPosition,
    /// New title (surrounding whitespace is trimmed; must not be blank)
    pub title: String,
}

#[derive(Subcommand)]
pub enum TaskCommands {
    /// Append a task to a day
    #[command(alias = "a")]
    Add(AddTaskArgs),
    /// Remove a task
    #[command(aliases = ["d", "rm"])]
    Remove(TaskPosition),
    /// Flip a task between done and not done
    #[command(alias = "done")]
    Toggle(TaskPosition),
    /// Change a task's title
    #[command(alias = "r")]
    Rename(RenameTaskArgs),
}
