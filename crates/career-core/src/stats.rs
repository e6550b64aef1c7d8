//! Aggregate statistics computed from a plan snapshot.
//!
//! Everything here is a pure function of the tree. Nothing is cached, so the
//! figures are always those of the snapshot passed in.

use serde::{Deserialize, Serialize};

use crate::models::{CareerPlan, Day, Month, Year};

/// Counts and completion ratios over a whole plan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub total_years: usize,
    /// Years whose own completion flag is set
    pub completed_years: usize,
    pub total_months: usize,
    /// Months whose own completion flag is set
    pub completed_months: usize,
    pub total_days: usize,
    pub total_tasks: usize,
    pub completed_tasks: usize,
    /// `completed_years / total_years * 100`, 0 for a plan without years
    pub year_progress_pct: f64,
    /// `completed_tasks / total_tasks * 100`, 0 for a plan without tasks
    pub task_progress_pct: f64,
}

/// Walks the whole tree and tallies every level.
///
/// # Examples
///
/// ```rust
/// use career_core::{models::CareerPlan, stats::compute_stats};
///
/// let stats = compute_stats(&CareerPlan::default());
/// assert_eq!(stats.total_tasks, 0);
/// assert_eq!(stats.task_progress_pct, 0.0);
/// ```
pub fn compute_stats(plan: &CareerPlan) -> Stats {
    let mut stats = Stats {
        total_years: plan.years.len(),
        completed_years: plan.years.iter().filter(|y| y.is_completed).count(),
        ..Stats::default()
    };

    for month in plan.years.iter().flat_map(|year| &year.months) {
        stats.total_months += 1;
        stats.completed_months += usize::from(month.is_completed);

        for day in &month.days {
            stats.total_days += 1;
            stats.total_tasks += day.tasks.len();
            stats.completed_tasks += day.tasks.iter().filter(|t| t.is_completed).count();
        }
    }

    stats.year_progress_pct = percentage(stats.completed_years, stats.total_years);
    stats.task_progress_pct = percentage(stats.completed_tasks, stats.total_tasks);
    stats
}

/// Exact percentage, defined as 0 when there is nothing to complete.
pub fn percentage(completed: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        completed as f64 / total as f64 * 100.0
    }
}

/// Completion of a node's direct children.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    pub total: usize,
    pub completed: usize,
}

impl Progress {
    fn of<T>(items: &[T], is_completed: impl Fn(&T) -> bool) -> Self {
        Self {
            total: items.len(),
            completed: items.iter().filter(|&item| is_completed(item)).count(),
        }
    }

    /// Months of a year with their completion flag set.
    pub fn of_year(year: &Year) -> Self {
        Self::of(&year.months, |m| m.is_completed)
    }

    /// Days of a month with their completion flag set.
    pub fn of_month(month: &Month) -> Self {
        Self::of(&month.days, |d| d.is_completed)
    }

    /// Completed tasks of a day.
    pub fn of_day(day: &Day) -> Self {
        Self::of(&day.tasks, |t| t.is_completed)
    }

    /// Whole-number percentage, rounded half away from zero.
    pub fn percent(&self) -> u32 {
        percentage(self.completed, self.total).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;
    use crate::models::Task;

    fn plan_with_tasks(done: &[bool]) -> CareerPlan {
        let mut plan = CareerPlan::default();
        let mut year = Year::new(1);
        let mut month = Month::new(1);
        let mut day = Day::new(0, date(2024, 3, 5));
        day.tasks = done
            .iter()
            .enumerate()
            .map(|(i, &is_completed)| Task {
                is_completed,
                ..Task::new(format!("Task {}", i + 1))
            })
            .collect();
        month.days.push(day);
        year.months.push(month);
        plan.years.push(year);
        plan
    }

    #[test]
    fn test_empty_plan_has_zero_progress() {
        let stats = compute_stats(&CareerPlan::default());

        assert_eq!(stats, Stats::default());
        assert_eq!(stats.year_progress_pct, 0.0);
    }

    #[test]
    fn test_plan_without_tasks_has_zero_task_progress() {
        let stats = compute_stats(&plan_with_tasks(&[]));

        assert_eq!(stats.total_years, 1);
        assert_eq!(stats.total_months, 1);
        assert_eq!(stats.total_days, 1);
        assert_eq!(stats.total_tasks, 0);
        assert_eq!(stats.task_progress_pct, 0.0);
    }

    #[test]
    fn test_task_progress_is_exact() {
        let stats = compute_stats(&plan_with_tasks(&[true, false, false]));

        assert_eq!(stats.total_tasks, 3);
        assert_eq!(stats.completed_tasks, 1);
        assert!((stats.task_progress_pct - 100.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_completion_flags_are_counted_not_derived() {
        let mut plan = plan_with_tasks(&[true, true]);
        plan.years.push(Year {
            is_completed: true,
            ..Year::new(2)
        });

        let stats = compute_stats(&plan);

        // All tasks of year 1 are done, but only year 2 carries the flag.
        assert_eq!(stats.completed_years, 1);
        assert_eq!(stats.completed_months, 0);
        assert_eq!(stats.year_progress_pct, 50.0);
        assert_eq!(stats.task_progress_pct, 100.0);
    }

    #[test]
    fn test_node_progress_rounds() {
        let plan = plan_with_tasks(&[true, true, false]);
        let day = &plan.years[0].months[0].days[0];

        let progress = Progress::of_day(day);
        assert_eq!(progress, Progress { total: 3, completed: 2 });
        assert_eq!(progress.percent(), 67);

        assert_eq!(Progress::of_month(&plan.years[0].months[0]).percent(), 0);
        assert_eq!(Progress::of_year(&Year::new(1)).percent(), 0);
    }
}
