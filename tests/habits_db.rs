#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use positrack::db::db::Db;
    use positrack::db::habits::Habits;
    use positrack::libs::habit::{Habit, HabitFrequency};
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct HabitsTestContext {
        _temp_dir: TempDir,
        db_path: PathBuf,
    }

    impl HabitsTestContext {
        fn habits(&self) -> Habits {
            Habits::with_db(Db::open(&self.db_path).unwrap())
        }
    }

    impl TestContext for HabitsTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db_path = temp_dir.path().join("positrack.db");
            HabitsTestContext {
                _temp_dir: temp_dir,
                db_path,
            }
        }
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, d).unwrap()
    }

    #[test_context(HabitsTestContext)]
    #[test]
    fn test_habit_crud(ctx: &mut HabitsTestContext) {
        let mut habits = ctx.habits();

        let mut habit = Habit::new("Meditate", 10.0, "minutes", HabitFrequency::custom(2).unwrap(), day(1)).unwrap();
        habit.reminder = true;
        let id = habits.insert(&habit).unwrap();
        assert!(id > 0);

        let fetched = habits.get_by_id(id).unwrap().unwrap();
        assert_eq!(fetched.name, "Meditate");
        assert_eq!(fetched.goal, 10.0);
        assert_eq!(fetched.unit, "minutes");
        assert_eq!(fetched.frequency, HabitFrequency::Custom { days: 2 });
        assert_eq!(fetched.creation_date, day(1));
        assert!(fetched.reminder);
        assert!(fetched.is_new);

        let mut edited = fetched.clone();
        edited.rename("Meditation").unwrap();
        edited.set_goal(15.0).unwrap();
        edited.frequency = HabitFrequency::Weekly;
        habits.update(&edited).unwrap();

        let updated = habits.find("meditation").unwrap();
        assert_eq!(updated.id, Some(id));
        assert_eq!(updated.goal, 15.0);
        assert_eq!(updated.frequency, HabitFrequency::Weekly);

        assert_eq!(habits.delete(id).unwrap(), 1);
        assert!(habits.get_by_id(id).unwrap().is_none());
    }

    #[test_context(HabitsTestContext)]
    #[test]
    fn test_duplicate_names_are_rejected(ctx: &mut HabitsTestContext) {
        let mut habits = ctx.habits();

        habits.insert(&Habit::new("Walk", 1.0, "", HabitFrequency::Daily, day(1)).unwrap()).unwrap();
        let duplicate = Habit::new("walk", 1.0, "", HabitFrequency::Daily, day(2)).unwrap();
        let err = habits.insert(&duplicate).unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }

    #[test_context(HabitsTestContext)]
    #[test]
    fn test_progress_persists_between_connections(ctx: &mut HabitsTestContext) {
        let id = {
            let mut habits = ctx.habits();
            let id = habits.insert(&Habit::new("Water", 8.0, "glasses", HabitFrequency::Daily, day(1)).unwrap()).unwrap();

            let mut habit = habits.get_by_id(id).unwrap().unwrap();
            for d in 1..=3 {
                habit.add_progress(day(d), 8.0).unwrap();
                habits.save_progress(&habit, day(d)).unwrap();
            }
            habit.increment(day(4));
            habits.save_progress(&habit, day(4)).unwrap();
            id
        };

        let mut habits = ctx.habits();
        let habit = habits.get_by_id(id).unwrap().unwrap();
        assert_eq!(habit.daily_progress.len(), 4);
        assert_eq!(habit.progress_on(day(4)), 1.0);
        assert_eq!(habit.computed_streak(day(3)), 3);
        assert_eq!(habit.last_progress_date, Some(day(4)));
        assert_eq!(habit.last_completion_date, Some(day(3)));
        assert!(!habit.is_new);
    }

    #[test_context(HabitsTestContext)]
    #[test]
    fn test_reset_removes_progress_row(ctx: &mut HabitsTestContext) {
        let mut habits = ctx.habits();
        let id = habits.insert(&Habit::new("Stretch", 1.0, "", HabitFrequency::Daily, day(1)).unwrap()).unwrap();

        let mut habit = habits.get_by_id(id).unwrap().unwrap();
        habit.increment(day(2));
        habits.save_progress(&habit, day(2)).unwrap();
        habit.reset(day(2));
        habits.save_progress(&habit, day(2)).unwrap();

        let reloaded = habits.get_by_id(id).unwrap().unwrap();
        assert!(reloaded.daily_progress.is_empty());
        assert_eq!(reloaded.last_completion_date, None);
        assert_eq!(reloaded.last_progress_date, Some(day(2)));
    }

    #[test_context(HabitsTestContext)]
    #[test]
    fn test_list_and_due_on(ctx: &mut HabitsTestContext) {
        let mut habits = ctx.habits();
        let daily = habits.insert(&Habit::new("Floss", 1.0, "", HabitFrequency::Daily, day(1)).unwrap()).unwrap();
        let weekly = habits.insert(&Habit::new("Review", 1.0, "", HabitFrequency::Weekly, day(1)).unwrap()).unwrap();

        let mut habit = habits.get_by_id(weekly).unwrap().unwrap();
        habit.increment(day(8));
        habits.save_progress(&habit, day(8)).unwrap();

        let all = habits.list().unwrap();
        assert_eq!(all.iter().map(|h| h.id.unwrap()).collect::<Vec<_>>(), vec![daily, weekly]);
        assert_eq!(all[1].progress_on(day(8)), 1.0);
        assert!(all[0].daily_progress.is_empty());

        assert_eq!(habits.due_on(day(8)).unwrap().len(), 2);
        let due = habits.due_on(day(9)).unwrap();
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].name, "Floss");
    }

    #[test_context(HabitsTestContext)]
    #[test]
    fn test_find_by_id_or_name(ctx: &mut HabitsTestContext) {
        let mut habits = ctx.habits();
        let read = habits.insert(&Habit::new("Read", 1.0, "", HabitFrequency::Daily, day(1)).unwrap()).unwrap();
        let walk = habits.insert(&Habit::new("Walk 1", 1.0, "", HabitFrequency::Daily, day(1)).unwrap()).unwrap();

        assert_eq!(habits.find(&read.to_string()).unwrap().name, "Read");
        assert_eq!(habits.find("read").unwrap().id, Some(read));
        assert_eq!(habits.find("Walk 1").unwrap().id, Some(walk));
        assert_eq!(habits.find(&walk.to_string()).unwrap().name, "Walk 1");

        // A numeric name cannot be created, so ids are never shadowed
        assert!(Habit::new("1", 1.0, "", HabitFrequency::Daily, day(1)).is_err());
    }

    #[test_context(HabitsTestContext)]
    #[test]
    fn test_find_unknown_habit(ctx: &mut HabitsTestContext) {
        let mut habits = ctx.habits();
        assert!(habits.find("42").is_err());
        assert!(habits.find("Nothing").is_err());
    }
}
