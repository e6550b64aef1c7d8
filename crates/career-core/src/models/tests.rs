#[cfg(test)]
mod model_tests {
    use std::collections::HashSet;

    use jiff::civil::date;
    use serde_json::json;

    use crate::models::{
        clean_title, CareerPlan, Day, EditNode, EntityId, EntityKind, Month, Task, Year,
        DEFAULT_PLAN_TITLE, SEED_TASK_TITLE,
    };

    #[test]
    fn test_generated_ids_are_prefixed_and_unique() {
        let ids: HashSet<EntityId> = (0..1000)
            .map(|_| EntityId::generate(EntityKind::Task))
            .collect();

        assert_eq!(ids.len(), 1000);
        assert!(ids.iter().all(|id| id.as_str().starts_with("task-")));
    }

    #[test]
    fn test_year_defaults() {
        let year = Year::new(3);

        assert_eq!(year.year_number, 3);
        assert_eq!(year.title, "Year 3 - New Career Phase");
        assert!(!year.is_completed);
        assert!(year.months.is_empty());
        assert!(year.id.as_str().starts_with("year-"));
    }

    #[test]
    fn test_month_defaults() {
        let month = Month::new(2);

        assert_eq!(month.month_number, 2);
        assert_eq!(month.title, "Month 2 - New Monthly Plan");
        assert!(month.days.is_empty());
    }

    #[test]
    fn test_day_starts_with_seed_task() {
        let day = Day::new(0, date(2024, 3, 5));

        assert_eq!(day.title, "Day 1 - Daily Plan");
        assert_eq!(day.tasks.len(), 1);
        assert_eq!(day.tasks[0].title, SEED_TASK_TITLE);
        assert!(!day.tasks[0].is_completed);
    }

    #[test]
    fn test_default_plan_is_empty() {
        let plan = CareerPlan::default();

        assert_eq!(plan.title, DEFAULT_PLAN_TITLE);
        assert!(plan.years.is_empty());
    }

    #[test]
    fn test_snapshot_uses_camel_case_and_iso_dates() {
        let mut plan = CareerPlan::default();
        let mut year = Year::new(1);
        let mut month = Month::new(1);
        month.days.push(Day::new(0, date(2024, 1, 2)));
        year.months.push(month);
        plan.years.push(year);

        let value = serde_json::to_value(&plan).unwrap();
        let day = &value["years"][0]["months"][0]["days"][0];

        assert_eq!(value["years"][0]["yearNumber"], 1);
        assert_eq!(value["years"][0]["months"][0]["monthNumber"], 1);
        assert_eq!(day["date"], "2024-01-02");
        assert_eq!(day["tasks"][0]["isCompleted"], false);
    }

    #[test]
    fn test_snapshot_without_optional_fields_loads() {
        let value = json!({
            "title": "Senior Full-Stack Developer",
            "description": "Master React",
            "version": 2,
            "years": [{
                "id": "year-1",
                "title": "Foundation & Fundamentals",
                "yearNumber": 1,
                "months": [{
                    "id": "month-1",
                    "title": "React Core Concepts",
                    "monthNumber": 1,
                    "isCompleted": false,
                    "days": [{
                        "id": "day-1",
                        "title": "Environment Setup",
                        "date": "2024-01-01",
                        "isCompleted": true,
                        "tasks": [
                            { "id": "task-1", "title": "Install Node.js & npm", "isCompleted": true }
                        ]
                    }]
                }]
            }]
        });

        let plan: CareerPlan = serde_json::from_value(value).unwrap();

        assert!(plan.id.as_str().starts_with("career-"));
        assert_eq!(plan.years[0].id, "year-1");
        assert_eq!(plan.years[0].description, "");
        assert_eq!(plan.years[0].months[0].days[0].date, date(2024, 1, 1));
        assert!(plan.years[0].months[0].days[0].tasks[0].is_completed);
    }

    #[test]
    fn test_invalid_date_is_rejected() {
        let value = json!({
            "id": "day-x",
            "title": "Broken",
            "date": "2024-02-31",
            "tasks": []
        });

        assert!(serde_json::from_value::<Day>(value).is_err());
    }

    #[test]
    fn test_lookup_helpers() {
        let mut year = Year::new(1);
        let month = Month::new(1);
        let month_id = month.id.clone();
        year.months.push(month);

        assert!(year.month(month_id.as_str()).is_some());
        assert!(year.month("month-missing").is_none());

        year.month_mut(month_id.as_str()).unwrap().is_completed = true;
        assert!(year.months[0].is_completed);

        let mut day = Day::new(0, date(2024, 1, 1));
        day.tasks.push(Task::new("Read the book"));
        let task_id = day.tasks[1].id.clone();
        assert_eq!(day.task(task_id.as_str()).unwrap().title, "Read the book");
    }

    #[test]
    fn test_clean_title() {
        assert_eq!(clean_title("  Ship it  ").unwrap(), "Ship it");
        assert!(clean_title("").is_err());
        assert!(clean_title(" \t\n").is_err());
    }

    #[test]
    fn test_edit_node_validation() {
        assert!(EditNode::default().is_empty());
        assert_eq!(
            EditNode::title(" New ").validated_title().unwrap(),
            Some("New".to_string())
        );
        assert_eq!(EditNode::description("x").validated_title().unwrap(), None);
        assert!(EditNode::title("  ").validated_title().is_err());
    }
}
