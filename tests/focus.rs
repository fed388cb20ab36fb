#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use positrack::db::db::Db;
    use positrack::db::focus_sessions::FocusSessions;
    use positrack::libs::focus::{
        session_duration, Countdown, CountdownOutcome, FocusPreset, FocusSession, FocusTimer, TickOutcome, TimerState, GENERAL_ACTIVITY,
    };
    use positrack::libs::validation::ValidationError;
    use std::time::Duration;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    #[test]
    fn test_preset_durations() {
        assert_eq!(FocusPreset::Pomodoro.duration(), Duration::from_secs(25 * 60));
        assert_eq!(FocusPreset::ShortFocus.duration(), Duration::from_secs(15 * 60));
        assert_eq!(FocusPreset::LongFocus.duration(), Duration::from_secs(50 * 60));
        assert_eq!(FocusPreset::Custom.duration(), Duration::from_secs(25 * 60));

        assert_eq!(FocusPreset::ShortFocus.to_string(), "Short Focus");
        assert_eq!("long focus".parse::<FocusPreset>().unwrap(), FocusPreset::LongFocus);
    }

    #[test]
    fn test_session_duration() {
        assert_eq!(session_duration(FocusPreset::Custom, Some(40)).unwrap(), Duration::from_secs(40 * 60));
        assert_eq!(session_duration(FocusPreset::Custom, None).unwrap(), Duration::from_secs(25 * 60));
        assert_eq!(session_duration(FocusPreset::LongFocus, Some(5)).unwrap(), Duration::from_secs(50 * 60));
        assert_eq!(session_duration(FocusPreset::Custom, Some(0)).unwrap_err(), ValidationError::InvalidFocusMinutes(0));
    }

    #[test]
    fn test_timer_runs_to_completion() {
        let mut timer = FocusTimer::new(Duration::from_secs(3));
        assert_eq!(timer.state(), TimerState::Idle);
        assert_eq!(timer.tick(), TickOutcome::Idle);

        timer.start();
        assert_eq!(timer.tick(), TickOutcome::Ticked { remaining: 2 });
        assert_eq!(timer.tick(), TickOutcome::Ticked { remaining: 1 });
        assert_eq!(timer.tick(), TickOutcome::Completed);
        assert_eq!(timer.state(), TimerState::Finished);
        assert_eq!(timer.remaining_secs(), 0);
        assert_eq!(timer.elapsed_secs(), 3);
        assert_eq!(timer.progress(), 0.0);
    }

    #[test]
    fn test_timer_pause_stop_and_restart() {
        let mut timer = FocusTimer::new(Duration::from_secs(10));
        timer.start();
        timer.tick();
        timer.tick();

        timer.pause();
        assert_eq!(timer.state(), TimerState::Paused);
        assert_eq!(timer.tick(), TickOutcome::Idle);
        assert_eq!(timer.remaining_secs(), 8);

        timer.start();
        assert_eq!(timer.tick(), TickOutcome::Ticked { remaining: 7 });

        timer.stop();
        assert_eq!(timer.state(), TimerState::Idle);
        assert_eq!(timer.remaining_secs(), 10);
        assert_eq!(timer.progress(), 1.0);
    }

    #[test]
    fn test_start_after_finish_resets() {
        let mut timer = FocusTimer::new(Duration::from_secs(1));
        timer.start();
        assert_eq!(timer.tick(), TickOutcome::Completed);

        timer.start();
        assert!(timer.is_running());
        assert_eq!(timer.remaining_secs(), 1);
    }

    #[test]
    fn test_set_duration_rewinds() {
        let mut timer = FocusTimer::new(Duration::from_secs(60));
        timer.start();
        timer.tick();
        timer.set_duration(Duration::from_secs(120));

        assert_eq!(timer.state(), TimerState::Idle);
        assert_eq!(timer.remaining_secs(), 120);
        assert_eq!(timer.duration_secs(), 120);
    }

    #[tokio::test]
    async fn test_countdown_completes() {
        let countdown = Countdown::with_tick(FocusTimer::new(Duration::from_secs(3)), Duration::from_millis(1));

        let mut seen = Vec::new();
        let outcome = countdown.run(|timer| seen.push(timer.remaining_secs())).await;

        assert_eq!(outcome, CountdownOutcome::Completed { focused_secs: 3 });
        assert_eq!(seen, vec![2, 1, 0]);
        assert_eq!(countdown.handle().lock().state(), TimerState::Finished);
    }

    #[tokio::test]
    async fn test_countdown_stops_when_paused_elsewhere() {
        let countdown = Countdown::with_tick(FocusTimer::new(Duration::from_secs(100_000)), Duration::from_millis(1));
        let handle = countdown.handle();

        let pauser = tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(30)).await;
            handle.lock().pause();
        });

        let outcome = countdown.run(|_| {}).await;
        pauser.await.unwrap();

        assert!(!outcome.is_completed());
        assert!(outcome.focused_secs() > 0);
        assert!(outcome.focused_secs() < 100_000);
    }

    struct FocusTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for FocusTestContext {
        fn setup() -> Self {
            FocusTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    fn session(d: u32, h: u32, focused_secs: i64) -> FocusSession {
        let started_at = NaiveDate::from_ymd_opt(2024, 9, d).unwrap().and_hms_opt(h, 0, 0).unwrap();
        FocusSession {
            id: None,
            activity: GENERAL_ACTIVITY.to_string(),
            preset: FocusPreset::Pomodoro,
            planned_secs: 1500,
            focused_secs,
            completed: focused_secs == 1500,
            started_at,
            ended_at: started_at + chrono::Duration::seconds(focused_secs),
        }
    }

    #[test_context(FocusTestContext)]
    #[test]
    fn test_sessions_are_recorded(ctx: &mut FocusTestContext) {
        let mut sessions = FocusSessions::with_db(Db::open(ctx.temp_dir.path().join("positrack.db")).unwrap());

        sessions.insert(&session(1, 9, 1500)).unwrap();
        sessions.insert(&session(1, 23, 600)).unwrap();
        sessions.insert(&session(2, 0, 1500)).unwrap();

        let day_one = sessions.fetch_for_date(NaiveDate::from_ymd_opt(2024, 9, 1).unwrap()).unwrap();
        assert_eq!(day_one.len(), 2);
        assert!(day_one[0].completed);
        assert!(!day_one[1].completed);
        assert_eq!(day_one[0].preset, FocusPreset::Pomodoro);
        assert_eq!(day_one.iter().map(|s| s.focused_secs).sum::<i64>(), 2100);

        let recent = sessions.recent(2).unwrap();
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].started_at.date(), NaiveDate::from_ymd_opt(2024, 9, 2).unwrap());

        assert_eq!(sessions.recent(10).unwrap().len(), 3);
    }
}
