//! Aggregated statistics across habits, tasks, mood entries and focus sessions.

use super::focus::FocusSession;
use super::habit::{Habit, StreakTier};
use super::mood::{MoodEntry, MoodStats, StatsPeriod};
use super::task::{Task, TaskSummary};
use chrono::{DateTime, Duration, Local, NaiveDate};
use serde::Serialize;

/// Days covered by the per-habit completion rate, today included.
pub const COMPLETION_WINDOW_DAYS: i64 = 30;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HabitAnalytics {
    pub name: String,
    pub goal: f64,
    pub unit: String,
    pub frequency: String,
    pub progress_today: f64,
    pub current_streak: u32,
    pub scheduled_streak: u32,
    #[serde(skip)]
    pub tier: StreakTier,
    /// Share of due days completed over the last [`COMPLETION_WINDOW_DAYS`].
    pub completion_rate: f64,
}

impl HabitAnalytics {
    pub fn for_habit(habit: &Habit, today: NaiveDate) -> Self {
        let window_start = today - Duration::days(COMPLETION_WINDOW_DAYS - 1);
        HabitAnalytics {
            name: habit.name.clone(),
            goal: habit.goal,
            unit: habit.unit.clone(),
            frequency: habit.frequency.to_string(),
            progress_today: habit.progress_on(today),
            current_streak: habit.computed_streak(today),
            scheduled_streak: habit.scheduled_streak(today),
            tier: habit.streak_tier(today),
            completion_rate: habit.completion_rate(window_start, today),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Overview {
    pub date: NaiveDate,
    pub total_habits: usize,
    pub due_today: usize,
    pub completed_today: usize,
    /// Longest current streak among all habits.
    pub best_streak: u32,
    pub tasks: TaskSummary,
    pub mood_period: StatsPeriod,
    pub mood: MoodStats,
    pub focus_sessions_today: usize,
    pub focused_secs_today: i64,
}

impl Overview {
    pub fn compute(
        habits: &[Habit],
        tasks: &[Task],
        moods: &[MoodEntry],
        sessions: &[FocusSession],
        mood_period: StatsPeriod,
        now: DateTime<Local>,
    ) -> Self {
        let today = now.date_naive();
        let due: Vec<&Habit> = habits.iter().filter(|h| h.should_display(today)).collect();
        let todays_sessions: Vec<&FocusSession> = sessions.iter().filter(|s| s.started_at.date() == today).collect();

        Overview {
            date: today,
            total_habits: habits.len(),
            due_today: due.len(),
            completed_today: due.iter().filter(|h| h.is_complete(today)).count(),
            best_streak: habits.iter().map(|h| h.computed_streak(today)).max().unwrap_or(0),
            tasks: TaskSummary::from_tasks(tasks, now.naive_local()),
            mood_period,
            mood: MoodStats::compute(moods, mood_period, now),
            focus_sessions_today: todays_sessions.len(),
            focused_secs_today: todays_sessions.iter().map(|s| s.focused_secs).sum(),
        }
    }

    /// Share of today's due habits that are complete, 0 when nothing is due.
    pub fn habit_completion(&self) -> f64 {
        if self.due_today == 0 {
            0.0
        } else {
            self.completed_today as f64 / self.due_today as f64
        }
    }
}
