//! Read-only queries over a plan snapshot.
//!
//! [`tasks_on_date`] flattens the tasks scheduled on a calendar date. The
//! `locate_*` functions translate 1-based positions, as shown to a user, into
//! the id paths the store operations take.

use jiff::civil::Date;
use serde::Serialize;

use crate::{
    error::{PlannerError, Result},
    models::{CareerPlan, EntityId, Task},
    params::{DayPath, MonthPath, TaskPath},
};

/// A task found by date, with the titles of the nodes above it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatedTask {
    pub task: Task,
    /// Where the task lives, for follow-up operations
    pub path: TaskPath,
    pub year_title: String,
    pub month_title: String,
    pub day_title: String,
}

/// Every task on every day dated `date`, in tree order.
///
/// Nothing prevents two days from sharing a date, so matches may come from
/// several months or years.
pub fn tasks_on_date(plan: &CareerPlan, date: Date) -> Vec<DatedTask> {
    let mut found = Vec::new();

    for year in &plan.years {
        for month in &year.months {
            for day in month.days.iter().filter(|day| day.date == date) {
                found.extend(day.tasks.iter().map(|task| DatedTask {
                    task: task.clone(),
                    path: TaskPath {
                        year_id: year.id.clone(),
                        month_id: month.id.clone(),
                        day_id: day.id.clone(),
                        task_id: task.id.clone(),
                    },
                    year_title: year.title.clone(),
                    month_title: month.title.clone(),
                    day_title: day.title.clone(),
                }));
            }
        }
    }

    found
}

fn nth<'a, T>(items: &'a [T], position: usize, kind: &'static str) -> Result<&'a T> {
    position
        .checked_sub(1)
        .and_then(|index| items.get(index))
        .ok_or(PlannerError::PositionOutOfRange { kind, position })
}

/// Id of the year at 1-based `year`.
pub fn locate_year(plan: &CareerPlan, year: usize) -> Result<EntityId> {
    nth(&plan.years, year, "year").map(|y| y.id.clone())
}

/// Path of the month at 1-based positions.
pub fn locate_month(plan: &CareerPlan, year: usize, month: usize) -> Result<MonthPath> {
    let y = nth(&plan.years, year, "year")?;
    let m = nth(&y.months, month, "month")?;
    Ok(MonthPath::new(y.id.clone(), m.id.clone()))
}

/// Path of the day at 1-based positions.
pub fn locate_day(plan: &CareerPlan, year: usize, month: usize, day: usize) -> Result<DayPath> {
    let y = nth(&plan.years, year, "year")?;
    let m = nth(&y.months, month, "month")?;
    let d = nth(&m.days, day, "day")?;
    Ok(MonthPath::new(y.id.clone(), m.id.clone()).day(d.id.clone()))
}

/// Path of the task at 1-based positions.
pub fn locate_task(
    plan: &CareerPlan,
    year: usize,
    month: usize,
    day: usize,
    task: usize,
) -> Result<TaskPath> {
    let day_path = locate_day(plan, year, month, day)?;
    let tasks = plan
        .year(day_path.year_id.as_str())
        .and_then(|y| y.month(day_path.month_id.as_str()))
        .and_then(|m| m.day(day_path.day_id.as_str()))
        .map(|d| d.tasks.as_slice())
        .unwrap_or_default();
    let t = nth(tasks, task, "task")?;
    Ok(day_path.task(t.id.clone()))
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;
    use crate::models::{Day, Month, Year};

    fn sample_plan() -> CareerPlan {
        let mut plan = CareerPlan::default();

        let mut year1 = Year::new(1);
        year1.title = "Foundation".to_string();
        let mut january = Month::new(1);
        january.title = "React Core".to_string();
        let mut setup = Day::new(0, date(2024, 1, 1));
        setup.title = "Environment Setup".to_string();
        setup.tasks.push(Task::new("Install Node.js"));
        january.days.push(setup);
        january.days.push(Day::new(1, date(2024, 1, 2)));
        year1.months.push(january);

        let mut year2 = Year::new(2);
        year2.title = "Backend".to_string();
        let mut month = Month::new(1);
        month.title = "Databases".to_string();
        let mut same_date = Day::new(0, date(2024, 1, 1));
        same_date.title = "Schema design".to_string();
        month.days.push(same_date);
        year2.months.push(month);

        plan.years.push(year1);
        plan.years.push(year2);
        plan
    }

    #[test]
    fn test_tasks_on_date_collects_across_years_in_order() {
        let plan = sample_plan();

        let found = tasks_on_date(&plan, date(2024, 1, 1));

        assert_eq!(found.len(), 3);
        assert_eq!(found[0].year_title, "Foundation");
        assert_eq!(found[0].day_title, "Environment Setup");
        assert_eq!(found[1].task.title, "Install Node.js");
        assert_eq!(found[2].year_title, "Backend");
        assert_eq!(found[2].month_title, "Databases");
        assert_eq!(found[2].day_title, "Schema design");
        assert_eq!(found[2].path.year_id, plan.years[1].id);
    }

    #[test]
    fn test_tasks_on_date_without_match_is_empty() {
        assert!(tasks_on_date(&sample_plan(), date(1999, 1, 1)).is_empty());
    }

    #[test]
    fn test_locate_by_position() {
        let plan = sample_plan();

        assert_eq!(locate_year(&plan, 2).unwrap(), plan.years[1].id);

        let day = locate_day(&plan, 1, 1, 2).unwrap();
        assert_eq!(day.day_id, plan.years[0].months[0].days[1].id);

        let task = locate_task(&plan, 1, 1, 1, 2).unwrap();
        assert_eq!(task.task_id, plan.years[0].months[0].days[0].tasks[1].id);
        assert_eq!(task.day().month().year_id, plan.years[0].id);
    }

    #[test]
    fn test_locate_out_of_range() {
        let plan = sample_plan();

        assert!(matches!(
            locate_year(&plan, 0),
            Err(PlannerError::PositionOutOfRange { kind: "year", position: 0 })
        ));
        assert!(matches!(
            locate_month(&plan, 2, 5),
            Err(PlannerError::PositionOutOfRange { kind: "month", position: 5 })
        ));
        assert!(matches!(
            locate_task(&plan, 1, 1, 2, 9),
            Err(PlannerError::PositionOutOfRange { kind: "task", position: 9 })
        ));
    }
}
