#[cfg(test)]
mod tests {
    use chrono::{Duration, Local, NaiveDate, TimeZone};
    use positrack::libs::analytics::{HabitAnalytics, Overview};
    use positrack::libs::focus::{FocusPreset, FocusSession, GENERAL_ACTIVITY};
    use positrack::libs::habit::{Habit, HabitFrequency, StreakTier};
    use positrack::libs::mood::{MoodCategory, MoodEntry, StatsPeriod};
    use positrack::libs::task::{Task, TaskPriority};

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 10, d).unwrap()
    }

    fn habit_with_streak(name: &str, created: NaiveDate, today: NaiveDate, days: i64) -> Habit {
        let mut habit = Habit::new(name, 1.0, "", HabitFrequency::Daily, created).unwrap();
        for offset in 0..days {
            habit.increment(today - Duration::days(offset));
        }
        habit
    }

    fn session(started: NaiveDate, focused_secs: i64) -> FocusSession {
        let started_at = started.and_hms_opt(9, 0, 0).unwrap();
        FocusSession {
            id: None,
            activity: GENERAL_ACTIVITY.to_string(),
            preset: FocusPreset::Pomodoro,
            planned_secs: 25 * 60,
            focused_secs,
            completed: focused_secs == 25 * 60,
            started_at,
            ended_at: started_at + Duration::seconds(focused_secs),
        }
    }

    #[test]
    fn test_habit_analytics() {
        let today = day(20);
        let habit = habit_with_streak("Read", day(1), today, 8);

        let analytics = HabitAnalytics::for_habit(&habit, today);
        assert_eq!(analytics.name, "Read");
        assert_eq!(analytics.progress_today, 1.0);
        assert_eq!(analytics.current_streak, 8);
        assert_eq!(analytics.scheduled_streak, 8);
        assert_eq!(analytics.tier, StreakTier::from_streak(8));
        // Created on the 1st, so 20 due days in the window, 8 of them complete
        assert!((analytics.completion_rate - 8.0 / 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_habit_analytics_without_progress() {
        let habit = Habit::new("Stretch", 2.0, "sets", HabitFrequency::Weekly, day(1)).unwrap();
        let analytics = HabitAnalytics::for_habit(&habit, day(8));
        assert_eq!(analytics.current_streak, 0);
        assert_eq!(analytics.scheduled_streak, 0);
        assert_eq!(analytics.completion_rate, 0.0);
        assert_eq!(analytics.frequency, "Weekly");
    }

    #[test]
    fn test_overview() {
        let now = Local.with_ymd_and_hms(2024, 10, 10, 12, 0, 0).unwrap();
        let today = now.date_naive();

        let habits = vec![
            habit_with_streak("Walk", day(1), today, 3),
            habit_with_streak("Meditate", day(1), today, 0),
            // Weekly from the 2nd: due on the 9th and 16th, not today
            Habit::new("Laundry", 1.0, "", HabitFrequency::Weekly, day(2)).unwrap(),
        ];

        let mut done = Task::new("Done", "", None, TaskPriority::Low).unwrap();
        done.toggle_completion();
        let overdue = Task::new("Late", "", Some(today.pred_opt().unwrap().and_hms_opt(8, 0, 0).unwrap()), TaskPriority::High).unwrap();
        let tasks = vec![done, overdue];

        let moods = vec![
            MoodEntry::new(MoodCategory::Calm, "Relaxed", 4, now - Duration::hours(1)).unwrap(),
            MoodEntry::new(MoodCategory::Calm, "Peaceful", 2, now - Duration::hours(2)).unwrap(),
        ];

        let sessions = vec![session(today, 25 * 60), session(today, 600), session(day(9), 25 * 60)];

        let overview = Overview::compute(&habits, &tasks, &moods, &sessions, StatsPeriod::Day, now);
        assert_eq!(overview.date, today);
        assert_eq!(overview.total_habits, 3);
        assert_eq!(overview.due_today, 2);
        assert_eq!(overview.completed_today, 1);
        assert_eq!(overview.best_streak, 3);
        assert!((overview.habit_completion() - 0.5).abs() < 1e-9);

        assert_eq!(overview.tasks.total, 2);
        assert_eq!(overview.tasks.completed, 1);
        assert_eq!(overview.tasks.overdue, 1);

        assert_eq!(overview.mood.total_entries, 2);
        assert_eq!(overview.mood.average_intensity, 3.0);
        assert_eq!(overview.mood.most_common_category, Some(MoodCategory::Calm));

        assert_eq!(overview.focus_sessions_today, 2);
        assert_eq!(overview.focused_secs_today, 25 * 60 + 600);
    }

    #[test]
    fn test_empty_overview() {
        let now = Local.with_ymd_and_hms(2024, 10, 10, 12, 0, 0).unwrap();
        let overview = Overview::compute(&[], &[], &[], &[], StatsPeriod::Week, now);
        assert_eq!(overview.total_habits, 0);
        assert_eq!(overview.best_streak, 0);
        assert_eq!(overview.habit_completion(), 0.0);
        assert_eq!(overview.mood.total_entries, 0);
        assert_eq!(overview.mood.most_common_category, None);
        assert_eq!(overview.focused_secs_today, 0);
    }
}
