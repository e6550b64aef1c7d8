mod common;

use career_core::{
    params::{AddDay, AddMonth, AddTask, MonthPath},
    query, EditNode, PlannerError,
};
use common::{create_memory_store, create_test_environment, open_store};
use jiff::civil::date;

#[test]
fn test_adding_years_numbers_and_expands_them() {
    let mut store = create_memory_store();
    assert!(store.plan().years.is_empty());

    let years: Vec<_> = (0..3).map(|_| store.add_year()).collect();

    assert_eq!(store.stats().total_years, 3);
    for (i, year) in years.iter().enumerate() {
        assert_eq!(year.year_number as usize, i + 1);
        assert!(store.plan().year(year.id.as_str()).is_some());
        assert!(store.expansion().is_year_expanded(year.id.as_str()));
    }
}

#[test]
fn test_dated_day_workflow() {
    let mut store = create_memory_store();

    // One year, one month, one day on a fixed date
    let year = store.add_year();
    let month = store
        .add_month(&AddMonth::to_year(year.id.clone()))
        .expect("Failed to add month");
    let month_path = MonthPath::new(year.id.clone(), month.id.clone());
    let day = store
        .add_day(&AddDay::to_month(month_path.clone()).on(date(2024, 3, 5)))
        .expect("Failed to add day");
    let day_path = month_path.day(day.id.clone());

    // The seed task plus one more, the seed marked done
    let seed = day_path.task(day.tasks[0].id.clone());
    store
        .add_task(&AddTask::titled(day_path.clone(), "Pair on the parser"))
        .expect("Failed to add task");
    assert!(store.toggle_task_completion(&seed).expect("Failed to toggle"));

    let stats = store.stats();
    assert_eq!(stats.total_tasks, 2);
    assert_eq!(stats.completed_tasks, 1);
    assert_eq!(stats.task_progress_pct, 50.0);

    // Both tasks are found on the day's date with their ancestry
    let found = store.tasks_on_date(date(2024, 3, 5));
    assert_eq!(found.len(), 2);
    for dated in &found {
        assert_eq!(dated.year_title, year.title);
        assert_eq!(dated.month_title, month.title);
        assert_eq!(dated.day_title, day.title);
        assert_eq!(dated.path.day(), day_path);
    }
    assert_eq!(found[1].task.title, "Pair on the parser");
    assert!(store.tasks_on_date(date(1999, 1, 1)).is_empty());

    // Removing the month takes the day and its tasks along
    store
        .remove_month(&month_path)
        .expect("Failed to remove month");
    assert_eq!(store.stats().total_tasks, 0);
    assert_eq!(store.stats().total_days, 0);
    assert!(!store
        .expansion()
        .tracks_month(year.id.as_str(), month.id.as_str()));
    assert!(store.tasks_on_date(date(2024, 3, 5)).is_empty());
}

#[test]
fn test_tree_shape_holds_across_operations() {
    let mut store = create_memory_store();

    for _ in 0..2 {
        let year = store.add_year();
        for _ in 0..2 {
            let month = store
                .add_month(&AddMonth::to_year(year.id.clone()))
                .expect("Failed to add month");
            let path = MonthPath::new(year.id.clone(), month.id.clone());
            store
                .add_day(&AddDay::to_month(path))
                .expect("Failed to add day");
        }
    }

    let first_year = store.plan().years[0].id.clone();
    store.remove_year(first_year.as_str()).expect("Failed to remove year");

    let plan = store.plan();
    let mut ids = std::collections::HashSet::new();
    for year in &plan.years {
        assert!(ids.insert(year.id.clone()));
        for month in &year.months {
            assert!(ids.insert(month.id.clone()));
            for day in &month.days {
                assert!(ids.insert(day.id.clone()));
                for task in &day.tasks {
                    assert!(ids.insert(task.id.clone()));
                }
            }
        }
    }
    // 1 year, 2 months, 2 days, 2 seed tasks
    assert_eq!(ids.len(), 7);
    assert!(!store.expansion().tracks_year(first_year.as_str()));
}

#[test]
fn test_missing_targets_leave_plan_untouched() {
    let mut store = create_memory_store();
    let year = store.add_year();
    let before = store.plan().clone();

    let err = store
        .add_month(&AddMonth::to_year("year-missing"))
        .unwrap_err();
    assert!(matches!(err, PlannerError::YearNotFound { .. }));

    let err = store
        .remove_month(&MonthPath::new(year.id.clone(), "month-missing"))
        .unwrap_err();
    assert!(matches!(err, PlannerError::MonthNotFound { .. }));
    assert!(err.is_not_found());

    let err = store
        .edit_year(year.id.as_str(), &EditNode::title("  "))
        .unwrap_err();
    assert!(matches!(err, PlannerError::InvalidInput { .. }));

    assert_eq!(store.plan(), &before);
}

#[test]
fn test_plan_survives_reopening_database() {
    let (_temp_dir, db_path) = create_test_environment();

    let (year_id, month_id, day_date) = {
        let mut store = open_store(&db_path);
        let year = store.add_year();
        let month = store
            .add_month(&AddMonth::to_year(year.id.clone()))
            .expect("Failed to add month");
        let path = MonthPath::new(year.id.clone(), month.id.clone());
        let day = store
            .add_day(&AddDay::to_month(path.clone()))
            .expect("Failed to add day");
        store
            .edit_plan(&EditNode::title("Staff Engineer Track"))
            .expect("Failed to edit plan");
        store
            .toggle_month_expansion(&path)
            .expect("Failed to collapse month");
        assert!(store.last_persistence_error().is_none());
        (year.id, month.id, day.date)
    };

    let store = open_store(&db_path);
    let plan = store.plan();
    assert_eq!(plan.title, "Staff Engineer Track");
    assert_eq!(plan.years.len(), 1);
    assert_eq!(plan.years[0].id, year_id);
    assert_eq!(plan.years[0].months[0].id, month_id);
    assert_eq!(plan.years[0].months[0].days[0].date, day_date);
    assert_eq!(day_date, date(2024, 1, 1));

    // Expansion comes back too: year open, month collapsed
    assert!(store.expansion().is_year_expanded(year_id.as_str()));
    assert!(!store
        .expansion()
        .is_month_expanded(year_id.as_str(), month_id.as_str()));
}

#[test]
fn test_locate_resolves_display_positions() {
    let mut store = create_memory_store();
    let year = store.add_year();
    let month = store
        .add_month(&AddMonth::to_year(year.id.clone()))
        .expect("Failed to add month");
    let path = MonthPath::new(year.id.clone(), month.id.clone());
    let day = store
        .add_day(&AddDay::to_month(path.clone()))
        .expect("Failed to add day");

    let plan = store.plan();
    assert_eq!(query::locate_year(plan, 1).expect("year"), year.id);
    assert_eq!(query::locate_month(plan, 1, 1).expect("month"), path);
    let task = query::locate_task(plan, 1, 1, 1, 1).expect("task");
    assert_eq!(task.day_id, day.id);

    let err = query::locate_day(plan, 1, 1, 2).unwrap_err();
    assert!(matches!(
        err,
        PlannerError::PositionOutOfRange { kind: "day", position: 2 }
    ));
}
