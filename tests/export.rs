#[cfg(test)]
mod tests {
    use chrono::{Local, NaiveDate, TimeZone};
    use positrack::libs::export::{default_file_name, ExportData, ExportDocument, ExportFormat, ExportSnapshot, Exporter};
    use positrack::libs::habit::{Habit, HabitFrequency};
    use positrack::libs::mood::{MoodCategory, MoodEntry, MoodTrigger};
    use positrack::libs::task::{Task, TaskPriority};
    use serde_json::Value;
    use std::fs;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ExportTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for ExportTestContext {
        fn setup() -> Self {
            ExportTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    fn snapshot() -> ExportSnapshot {
        let day = NaiveDate::from_ymd_opt(2024, 10, 1).unwrap();
        let mut habit = Habit::new("Drink water", 8.0, "glasses", HabitFrequency::Daily, day).unwrap();
        habit.id = Some(1);
        habit.add_progress(day, 3.0).unwrap();

        let mut task = Task::new("Write report", "quarterly", None, TaskPriority::High).unwrap();
        task.id = Some(1);

        let timestamp = Local.with_ymd_and_hms(2024, 10, 1, 9, 30, 0).unwrap();
        let mut entry = MoodEntry::new(MoodCategory::Happy, "Joyful", 4, timestamp)
            .unwrap()
            .with_triggers(vec![MoodTrigger::Work, MoodTrigger::Sleep]);
        entry.id = 1;

        ExportSnapshot {
            habits: vec![habit],
            tasks: vec![task],
            mood_entries: vec![entry],
        }
    }

    #[test]
    fn test_document_sections() {
        let now = Local::now();
        let document = ExportDocument::build(&snapshot(), &[ExportData::Habits], ExportFormat::Json, now);
        assert_eq!(document.format, "JSON");
        assert_eq!(document.app_version, env!("CARGO_PKG_VERSION"));
        assert_eq!(document.habits.as_ref().map(Vec::len), Some(1));
        assert!(document.tasks.is_none());
        assert!(document.mood_entries.is_none());

        let habit = &document.habits.unwrap()[0];
        assert_eq!(habit.frequency, "Daily");
        assert_eq!(habit.daily_progress.get("2024-10-01"), Some(&3.0));

        let document = ExportDocument::build(&snapshot(), &[ExportData::All], ExportFormat::Csv, now);
        assert_eq!(document.format, "CSV");
        assert!(document.habits.is_some());
        assert!(document.tasks.is_some());
        assert!(document.mood_entries.is_some());
    }

    #[test]
    fn test_section_subsets() {
        let now = Local::now();
        let document = ExportDocument::build(&snapshot(), &[ExportData::Habits, ExportData::Mood], ExportFormat::Json, now);
        assert!(document.habits.is_some());
        assert!(document.tasks.is_none());
        assert!(document.mood_entries.is_some());

        let document = ExportDocument::build(&snapshot(), &[], ExportFormat::Json, now);
        assert!(document.habits.is_some());
        assert!(document.tasks.is_some());
        assert!(document.mood_entries.is_some());

        let document = ExportDocument::build(&snapshot(), &[ExportData::Tasks, ExportData::All], ExportFormat::Json, now);
        assert!(document.habits.is_some());
        assert!(document.mood_entries.is_some());
    }

    #[test]
    fn test_default_file_name() {
        let now = Local.with_ymd_and_hms(2024, 10, 1, 14, 5, 9).unwrap();
        assert_eq!(default_file_name(ExportFormat::Json, now), "positrack_export_20241001_140509.json");
        assert_eq!(default_file_name(ExportFormat::Csv, now), "positrack_export_20241001_140509.csv");
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_json(ctx: &mut ExportTestContext) {
        let path = ctx.temp_dir.path().join("export.json");
        let written = Exporter::new(ExportFormat::Json, Some(path.clone())).export(&snapshot(), &[ExportData::Tasks]).unwrap();
        assert_eq!(written, path);

        let json: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json["format"], "JSON");
        assert_eq!(json["tasks"][0]["title"], "Write report");
        assert_eq!(json["tasks"][0]["priority"], "High");
        assert!(json["tasks"][0].get("due_date").is_none());
        assert!(json.get("habits").is_none());
        assert!(json.get("mood_entries").is_none());
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_csv(ctx: &mut ExportTestContext) {
        let path = ctx.temp_dir.path().join("export.csv");
        Exporter::new(ExportFormat::Csv, Some(path.clone())).export(&snapshot(), &[]).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "PosiTrack Data Export");
        assert!(lines[1].starts_with("Export Date: "));
        assert!(content.contains("Habits\nName,Goal,Unit,Frequency,Creation Date\nDrink water,8,glasses,Daily,2024-10-01"));
        assert!(content.contains("Tasks\nTitle,Description,Priority,Completed,Due Date\nWrite report,quarterly,High,false,"));
        assert!(content.contains("Mood Entries"));
        assert!(content.contains("Work; Sleep"));
    }
}
