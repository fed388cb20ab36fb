//! Terminal tables for every command.

use super::analytics::{HabitAnalytics, Overview};
use super::focus::{FocusPreset, FocusSession};
use super::formatter::{format_amount, format_countdown, format_duration, format_percent, format_progress};
use super::habit::{week_window, Habit};
use super::mood::{MoodEntry, MoodStats};
use super::task::{Task, TaskSummary};
use anyhow::Result;
use chrono::{Duration, NaiveDate};
use prettytable::{row, Table};

const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

pub struct View {}

impl View {
    /// Habits due on `date`, with a week strip of completion marks around it.
    pub fn habits(habits: &[Habit], date: NaiveDate) -> Result<()> {
        let mut table = Table::new();

        let days = week_window(date);
        let strip_header = days.iter().map(|d| d.format("%a").to_string()[..2].to_string()).collect::<Vec<_>>().join(" ");

        table.add_row(row!["ID", "NAME", "FREQUENCY", "PROGRESS", "STREAK", strip_header]);
        for habit in habits {
            let streak = habit.computed_streak(date);
            let strip = days.iter().map(|d| Self::day_mark(habit, *d)).collect::<Vec<_>>().join(" ");
            let name = if habit.is_new { format!("{} (new)", habit.name) } else { habit.name.clone() };
            table.add_row(row![
                habit.id.unwrap_or(0),
                name,
                habit.frequency,
                format_progress(habit.progress_on(date), habit.goal, &habit.unit),
                format!("{} {}", habit.streak_tier(date).flame(), streak),
                strip
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn habit(analytics: &HabitAnalytics, habit: &Habit, today: NaiveDate) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["Frequency", analytics.frequency]);
        table.add_row(row!["Goal", format_progress(analytics.progress_today, analytics.goal, &analytics.unit)]);
        table.add_row(row!["Created", habit.creation_date]);
        table.add_row(row!["Streak", format!("{} {}", analytics.tier.flame(), analytics.current_streak)]);
        table.add_row(row!["Scheduled streak", analytics.scheduled_streak]);
        table.add_row(row!["Completion (30 days)", format_percent(analytics.completion_rate)]);
        table.add_row(row!["Reminder", if habit.reminder { "on" } else { "off" }]);
        table.add_row(row![
            "Last progress",
            habit.last_progress_date.map(|d| d.to_string()).unwrap_or_else(|| "-".to_string())
        ]);
        table.add_row(row![
            "Last completed",
            habit.last_completion_date.map(|d| d.to_string()).unwrap_or_else(|| "-".to_string())
        ]);
        table.printstd();

        let mut history = Table::new();
        history.add_row(row!["DATE", "PROGRESS", "DONE"]);
        for offset in (0..7).rev() {
            let day = today - Duration::days(offset);
            if !habit.should_display(day) {
                continue;
            }
            history.add_row(row![
                day,
                format_amount(habit.progress_on(day)),
                if habit.is_complete(day) { "✔" } else { "" }
            ]);
        }
        history.printstd();

        Ok(())
    }

    pub fn tasks(tasks: &[Task]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "DONE", "TITLE", "DESCRIPTION", "PRIORITY", "DUE"]);
        for task in tasks {
            table.add_row(row![
                task.id.unwrap_or(0),
                if task.is_completed { "✔" } else { "" },
                task.title,
                task.description,
                task.priority,
                task.due_date.map(|d| d.format(DATE_TIME_FORMAT).to_string()).unwrap_or_default()
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn task_summary(summary: &TaskSummary) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["TOTAL", "COMPLETED", "OVERDUE", "COMPLETION"]);
        table.add_row(row![
            summary.total,
            summary.completed,
            summary.overdue,
            format!("{:.0}%", summary.completion_rate())
        ]);
        table.printstd();

        Ok(())
    }

    pub fn moods(entries: &[MoodEntry]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "TIME", "MOOD", "INTENSITY", "TRIGGERS", "LOCATION", "NOTES"]);
        for entry in entries {
            table.add_row(row![
                entry.id,
                entry.timestamp.format(DATE_TIME_FORMAT),
                format!("{} ({})", entry.category, entry.subcategory),
                format!("{}/5", entry.intensity),
                entry.triggers.iter().map(|t| t.as_str()).collect::<Vec<_>>().join(", "),
                entry.location.map(|l| l.as_str()).unwrap_or(""),
                entry.notes
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn mood_stats(stats: &MoodStats, today: NaiveDate) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["Entries", stats.total_entries]);
        table.add_row(row!["Average intensity", format!("{:.1}", stats.average_intensity)]);
        table.add_row(row![
            "Most common mood",
            stats.most_common_category.map(|c| c.to_string()).unwrap_or_else(|| "-".to_string())
        ]);
        table.add_row(row![
            "Most common trigger",
            stats.most_common_trigger.map(|t| t.to_string()).unwrap_or_else(|| "-".to_string())
        ]);
        table.printstd();

        let mut trend = Table::new();
        let days: Vec<NaiveDate> = (0..7).rev().map(|offset| today - Duration::days(offset)).collect();
        trend.add_row(days.iter().map(|d| prettytable::Cell::new(&d.format("%a").to_string())).collect());
        trend.add_row(stats.weekly_trend.iter().map(|v| prettytable::Cell::new(&format!("{:.1}", v))).collect());
        trend.printstd();

        Ok(())
    }

    pub fn focus_presets(presets: &[(FocusPreset, u64)]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["PRESET", "DURATION"]);
        for (preset, seconds) in presets {
            table.add_row(row![preset, format_countdown(*seconds)]);
        }
        table.printstd();

        Ok(())
    }

    pub fn focus_sessions(sessions: &[FocusSession]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "STARTED", "ACTIVITY", "PRESET", "FOCUSED", "COMPLETED"]);
        for session in sessions {
            table.add_row(row![
                session.id.unwrap_or(0),
                session.started_at.format(DATE_TIME_FORMAT),
                session.activity,
                session.preset,
                format_countdown(session.focused_secs.max(0) as u64),
                if session.completed { "✔" } else { "" }
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn overview(overview: &Overview) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["Habits", overview.total_habits]);
        table.add_row(row![
            "Done today",
            format!("{}/{} ({})", overview.completed_today, overview.due_today, format_percent(overview.habit_completion()))
        ]);
        table.add_row(row!["Best streak", overview.best_streak]);
        table.add_row(row!["Task completion", format!("{:.0}%", overview.tasks.completion_rate())]);
        table.add_row(row!["Overdue tasks", overview.tasks.overdue]);
        table.add_row(row![format!("Mood entries ({})", overview.mood_period), overview.mood.total_entries]);
        table.add_row(row!["Average mood", format!("{:.1}", overview.mood.average_intensity)]);
        table.add_row(row![
            "Focus today",
            format!("{} session(s), {}", overview.focus_sessions_today, format_duration(&Duration::seconds(overview.focused_secs_today)))
        ]);
        table.printstd();

        Ok(())
    }

    pub fn habit_analytics(items: &[HabitAnalytics]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["NAME", "FREQUENCY", "STREAK", "SCHEDULED", "30 DAYS"]);
        for item in items {
            table.add_row(row![
                item.name,
                item.frequency,
                format!("{} {}", item.tier.flame(), item.current_streak),
                item.scheduled_streak,
                format_percent(item.completion_rate)
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn migration_history(history: &[(u32, String, String)]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["VERSION", "NAME", "APPLIED AT"]);
        for (version, name, applied_at) in history {
            table.add_row(row![version, name, applied_at]);
        }
        table.printstd();

        Ok(())
    }

    fn day_mark(habit: &Habit, day: NaiveDate) -> &'static str {
        if !habit.should_display(day) {
            " ·"
        } else if habit.is_complete(day) {
            " ✔"
        } else if habit.progress_on(day) > 0.0 {
            " ◐"
        } else {
            " ○"
        }
    }
}
