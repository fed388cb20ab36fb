#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use positrack::db::db::Db;
    use positrack::db::tasks::Tasks;
    use positrack::libs::task::{filter_tasks, Task, TaskFilter, TaskPriority, TaskSummary};
    use positrack::libs::validation::ValidationError;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct TasksTestContext {
        _temp_dir: TempDir,
        db_path: PathBuf,
    }

    impl TestContext for TasksTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db_path = temp_dir.path().join("positrack.db");
            TasksTestContext {
                _temp_dir: temp_dir,
                db_path,
            }
        }
    }

    fn at(d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, d).unwrap().and_hms_opt(h, 0, 0).unwrap()
    }

    fn sample_tasks() -> Vec<Task> {
        let mut done = Task::new("Pay rent", "", Some(at(1, 9)), TaskPriority::High).unwrap();
        done.toggle_completion();
        vec![
            Task::new("Call mom", "", Some(at(10, 18)), TaskPriority::Medium).unwrap(),
            Task::new("Renew passport", "Bring photos", Some(at(5, 12)), TaskPriority::High).unwrap(),
            Task::new("Read a book", "", None, TaskPriority::Low).unwrap(),
            done,
        ]
    }

    #[test]
    fn test_task_requires_title() {
        assert_eq!(Task::new("  ", "", None, TaskPriority::Low).unwrap_err(), ValidationError::EmptyTaskTitle);

        let task = Task::new(" Groceries ", " milk ", None, TaskPriority::default()).unwrap();
        assert_eq!(task.title, "Groceries");
        assert_eq!(task.description, "milk");
        assert_eq!(task.priority, TaskPriority::Medium);
        assert!(!task.is_completed);
    }

    #[test]
    fn test_priority_parsing() {
        assert_eq!("high".parse::<TaskPriority>().unwrap(), TaskPriority::High);
        assert_eq!("LOW".parse::<TaskPriority>().unwrap(), TaskPriority::Low);
        assert!("urgent".parse::<TaskPriority>().is_err());
        assert_eq!(TaskPriority::Medium.to_string(), "Medium");
    }

    #[test]
    fn test_overdue_excludes_completed() {
        let now = at(10, 12);
        let mut task = Task::new("Submit report", "", Some(at(9, 17)), TaskPriority::High).unwrap();
        assert!(task.is_overdue(now));

        task.toggle_completion();
        assert!(!task.is_overdue(now));

        let undated = Task::new("Someday", "", None, TaskPriority::Low).unwrap();
        assert!(!undated.is_overdue(now));
    }

    #[test]
    fn test_filters() {
        let now = at(10, 12);

        let titles = |filter: TaskFilter, priority: Option<TaskPriority>| -> Vec<String> {
            filter_tasks(sample_tasks(), filter, priority, now).into_iter().map(|t| t.title).collect()
        };

        assert_eq!(titles(TaskFilter::All, None).len(), 4);
        assert_eq!(titles(TaskFilter::Today, None), vec!["Call mom"]);
        assert_eq!(titles(TaskFilter::Overdue, None), vec!["Renew passport"]);
        assert_eq!(titles(TaskFilter::Completed, None), vec!["Pay rent"]);
        assert_eq!(titles(TaskFilter::All, Some(TaskPriority::High)), vec!["Renew passport", "Pay rent"]);
        assert!(titles(TaskFilter::Today, Some(TaskPriority::Low)).is_empty());
    }

    #[test]
    fn test_summary() {
        let summary = TaskSummary::from_tasks(&sample_tasks(), at(10, 12));
        assert_eq!(summary.total, 4);
        assert_eq!(summary.completed, 1);
        assert_eq!(summary.overdue, 1);
        assert_eq!(summary.completion_rate(), 25.0);

        assert_eq!(TaskSummary::from_tasks(&[], at(10, 12)).completion_rate(), 0.0);
    }

    #[test_context(TasksTestContext)]
    #[test]
    fn test_tasks_crud(ctx: &mut TasksTestContext) {
        let mut tasks = Tasks::with_db(Db::open(&ctx.db_path).unwrap());

        let task = Task::new("Book dentist", "Ask about Friday", Some(at(12, 10)), TaskPriority::High).unwrap();
        let id = tasks.insert(&task).unwrap();

        let mut fetched = tasks.get_by_id(id).unwrap().unwrap();
        assert_eq!(fetched.title, "Book dentist");
        assert_eq!(fetched.description, "Ask about Friday");
        assert_eq!(fetched.due_date, Some(at(12, 10)));
        assert_eq!(fetched.priority, TaskPriority::High);
        assert!(fetched.created_at.is_some());

        fetched.title = "Book dentist appointment".to_string();
        fetched.due_date = None;
        fetched.priority = TaskPriority::Low;
        tasks.update(&fetched).unwrap();

        let updated = tasks.get_by_id(id).unwrap().unwrap();
        assert_eq!(updated.title, "Book dentist appointment");
        assert_eq!(updated.due_date, None);
        assert_eq!(updated.priority, TaskPriority::Low);

        tasks.set_completed(id, true).unwrap();
        assert!(tasks.get_by_id(id).unwrap().unwrap().is_completed);

        assert_eq!(tasks.delete(id).unwrap(), 1);
        assert!(tasks.get_by_id(id).unwrap().is_none());
        assert!(tasks.set_completed(id, false).is_err());
    }

    #[test_context(TasksTestContext)]
    #[test]
    fn test_fetch_orders_open_tasks_by_due_date(ctx: &mut TasksTestContext) {
        let mut tasks = Tasks::with_db(Db::open(&ctx.db_path).unwrap());
        for task in sample_tasks() {
            tasks.insert(&task).unwrap();
        }

        let all: Vec<String> = tasks.all().unwrap().into_iter().map(|t| t.title).collect();
        assert_eq!(all, vec!["Renew passport", "Call mom", "Read a book", "Pay rent"]);

        let overdue = tasks.fetch(TaskFilter::Overdue, None, at(10, 12)).unwrap();
        assert_eq!(overdue.len(), 1);
        assert_eq!(overdue[0].title, "Renew passport");
    }
}
