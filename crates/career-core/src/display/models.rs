//! Display implementations for the plan tree.
//!
//! Nodes print as markdown headings labelled with their 1-based position
//! path (`2.1.3` is the third day of the first month of the second year), so
//! the labels can be fed back to position-addressed commands. Completed nodes
//! carry `✓`, open ones `○`.

use std::fmt;

use super::datetime::LongDate;
use crate::{
    expansion::ExpansionState,
    models::{CareerPlan, Day, Month, Task, Year},
    stats::{Progress, Stats},
};

fn mark(is_completed: bool) -> &'static str {
    if is_completed {
        "✓"
    } else {
        "○"
    }
}

fn fmt_description(f: &mut fmt::Formatter<'_>, description: &str) -> fmt::Result {
    if !description.is_empty() {
        writeln!(f, "{description}")?;
        writeln!(f)?;
    }
    Ok(())
}

fn fmt_task(f: &mut fmt::Formatter<'_>, task: &Task, position: usize) -> fmt::Result {
    let check = if task.is_completed { "x" } else { " " };
    writeln!(f, "- [{check}] {position}. {}", task.title)
}

fn fmt_day(f: &mut fmt::Formatter<'_>, day: &Day, label: &str) -> fmt::Result {
    let progress = Progress::of_day(day);
    let heading = if label.is_empty() {
        day.title.clone()
    } else {
        format!("{label} {}", day.title)
    };
    writeln!(
        f,
        "#### {heading} {} · {} ({}/{} tasks, {}%)",
        mark(day.is_completed),
        LongDate(&day.date),
        progress.completed,
        progress.total,
        progress.percent()
    )?;
    writeln!(f)?;
    fmt_description(f, &day.description)?;

    if day.tasks.is_empty() {
        writeln!(f, "No tasks on this day.")?;
    } else {
        for (i, task) in day.tasks.iter().enumerate() {
            fmt_task(f, task, i + 1)?;
        }
    }
    writeln!(f)
}

fn fmt_month(
    f: &mut fmt::Formatter<'_>,
    month: &Month,
    label: &str,
    expanded: bool,
) -> fmt::Result {
    let progress = Progress::of_month(month);
    write!(
        f,
        "### {label} {} {} ({}/{} days done)",
        month.title,
        mark(month.is_completed),
        progress.completed,
        progress.total
    )?;
    if !expanded {
        return writeln!(f, " [collapsed]\n");
    }
    writeln!(f)?;
    writeln!(f)?;
    fmt_description(f, &month.description)?;

    for (i, day) in month.days.iter().enumerate() {
        fmt_day(f, day, &format!("{label}.{}", i + 1))?;
    }
    Ok(())
}

fn fmt_year(
    f: &mut fmt::Formatter<'_>,
    year: &Year,
    label: &str,
    expansion: Option<&ExpansionState>,
) -> fmt::Result {
    let progress = Progress::of_year(year);
    write!(
        f,
        "## {label}. {} {} ({}/{} months done)",
        year.title,
        mark(year.is_completed),
        progress.completed,
        progress.total
    )?;
    if expansion.is_some_and(|state| !state.is_year_expanded(year.id.as_str())) {
        return writeln!(f, " [collapsed]\n");
    }
    writeln!(f)?;
    writeln!(f)?;
    fmt_description(f, &year.description)?;

    for (i, month) in year.months.iter().enumerate() {
        let expanded = expansion
            .map_or(true, |state| state.is_month_expanded(year.id.as_str(), month.id.as_str()));
        fmt_month(f, month, &format!("{label}.{}", i + 1), expanded)?;
    }
    Ok(())
}

/// The whole plan as a markdown outline, optionally honoring expansion state.
///
/// Without expansion state every node is shown. With it, collapsed years and
/// months print their heading only.
pub struct PlanTree<'a> {
    pub plan: &'a CareerPlan,
    pub expansion: Option<&'a ExpansionState>,
}

impl<'a> PlanTree<'a> {
    /// Tree with every node expanded.
    pub fn full(plan: &'a CareerPlan) -> Self {
        Self {
            plan,
            expansion: None,
        }
    }

    /// Tree with collapsed nodes hidden.
    pub fn with_expansion(plan: &'a CareerPlan, expansion: &'a ExpansionState) -> Self {
        Self {
            plan,
            expansion: Some(expansion),
        }
    }
}

impl<'a> fmt::Display for PlanTree<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.plan.title)?;
        writeln!(f)?;
        fmt_description(f, &self.plan.description)?;

        if self.plan.years.is_empty() {
            return writeln!(f, "No years in this plan.");
        }
        for (i, year) in self.plan.years.iter().enumerate() {
            fmt_year(f, year, &(i + 1).to_string(), self.expansion)?;
        }
        Ok(())
    }
}

impl fmt::Display for CareerPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", PlanTree::full(self))
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_year(f, self, &self.year_number.to_string(), None)
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_month(f, self, &self.month_number.to_string(), true)
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_day(f, self, "")
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let check = if self.is_completed { "x" } else { " " };
        writeln!(f, "- [{check}] {}", self.title)
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Progress")?;
        writeln!(f)?;
        writeln!(
            f,
            "- Years: {}/{} completed ({:.0}%)",
            self.completed_years, self.total_years, self.year_progress_pct
        )?;
        writeln!(
            f,
            "- Months: {}/{} completed",
            self.completed_months, self.total_months
        )?;
        writeln!(f, "- Days: {}", self.total_days)?;
        writeln!(
            f,
            "- Tasks: {}/{} completed ({:.0}%)",
            self.completed_tasks, self.total_tasks, self.task_progress_pct
        )
    }
}
