//! Text for every [`Message`] variant.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let s = match self {
            // === HABIT MESSAGES ===
            Message::HabitCreated(name) => format!("Habit '{}' created", name),
            Message::HabitUpdated(name) => format!("Habit '{}' updated", name),
            Message::HabitDeleted(name) => format!("Habit '{}' deleted", name),
            Message::HabitNotFound(id) => format!("Habit '{}' not found", id),
            Message::HabitAlreadyExists(name) => format!("A habit named '{}' already exists", name),
            Message::HabitsNotFound => "No habits yet. Add one with 'positrack habit add <name>'".to_string(),
            Message::HabitsNotDue(date) => format!("No habits due on {}", date),
            Message::HabitsHeader(date) => format!("Habits for {}", date),
            Message::HabitProgress(name, progress) => format!("{}: {}", name, progress),
            Message::HabitGoalReached(name, streak) => format!("Goal reached for '{}'! Streak: {} day(s)", name, streak),
            Message::HabitProgressReset(name, date) => format!("Progress of '{}' on {} reset", name, date),
            Message::ConfirmDeleteHabit(name) => format!("Delete habit '{}' and all of its progress?", name),
            Message::HabitDetailsHeader(name) => format!("Habit '{}'", name),

            // === TASK MESSAGES ===
            Message::TaskCreated(id) => format!("Task #{} created", id),
            Message::TaskUpdated(id) => format!("Task #{} updated", id),
            Message::TaskDeleted(id) => format!("Task #{} deleted", id),
            Message::TaskNotFound(id) => format!("Task '{}' not found", id),
            Message::TaskCompleted(title) => format!("Task '{}' completed", title),
            Message::TaskReopened(title) => format!("Task '{}' reopened", title),
            Message::TasksNotFound => "No tasks found".to_string(),
            Message::TasksHeader(filter) => format!("Tasks ({})", filter),
            Message::ConfirmDeleteTask(title) => format!("Delete task '{}'?", title),

            // === MOOD MESSAGES ===
            Message::MoodEntryAdded(id) => format!("Mood entry #{} saved", id),
            Message::MoodEntryUpdated(id) => format!("Mood entry #{} updated", id),
            Message::MoodEntryDeleted(id) => format!("Mood entry #{} deleted", id),
            Message::MoodEntryNotFound(id) => format!("Mood entry #{} not found", id),
            Message::MoodEntriesNotFound => "No mood entries found".to_string(),
            Message::MoodEntriesHeader => "Mood journal".to_string(),
            Message::MoodStatsHeader(period) => format!("Mood statistics: {}", period),
            Message::ConfirmDeleteMoodEntry(id) => format!("Delete mood entry #{}?", id),
            Message::PromptMoodCategory => "How are you feeling?".to_string(),
            Message::PromptMoodSubcategory => "Which word fits best?".to_string(),
            Message::PromptMoodIntensity => "Intensity (1-5)".to_string(),
            Message::PromptMoodNotes => "Notes (optional)".to_string(),
            Message::PromptMoodTriggers => "What triggered it? (space to select)".to_string(),
            Message::PromptMoodLocation => "Where are you?".to_string(),
            Message::PromptMoodActivities => "Activities, comma separated (optional)".to_string(),

            // === FOCUS MESSAGES ===
            Message::FocusStarted(activity, preset, time) => format!("Focus on '{}' started ({}, {})", activity, preset, time),
            Message::FocusRemaining(time) => format!("⏳ {}", time),
            Message::FocusCompleted(activity, duration) => format!("Focus session on '{}' completed: {}", activity, duration),
            Message::FocusInterrupted(activity, duration) => format!("Focus session on '{}' stopped after {}", activity, duration),
            Message::FocusActivityNotFound(name) => format!("'{}' is neither 'General Focus' nor an existing habit", name),
            Message::FocusSessionsNotFound => "No focus sessions recorded".to_string(),
            Message::FocusHistoryHeader => "Focus history".to_string(),
            Message::FocusPresetsHeader => "Focus presets".to_string(),
            Message::FocusStopHint => "Press Ctrl-C to stop".to_string(),

            // === STATS MESSAGES ===
            Message::StatsHeader(date) => format!("Overview for {}", date),
            Message::HabitStatsHeader => "Habits".to_string(),
            Message::TaskStatsHeader => "Tasks".to_string(),
            Message::MoodStatsSection(period) => format!("Mood ({})", period),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved".to_string(),
            Message::ConfigModuleHabits => "Habits".to_string(),
            Message::ConfigModuleFocus => "Focus timer".to_string(),
            Message::PromptSelectModules => "Select sections to configure".to_string(),
            Message::PromptDefaultGoal => "Default daily goal for new habits".to_string(),
            Message::PromptDefaultUnit => "Default unit for new habits".to_string(),
            Message::PromptDefaultPreset => "Default focus preset".to_string(),
            Message::PromptCustomMinutes => "Minutes for the Custom preset".to_string(),

            // === EXPORT MESSAGES ===
            Message::ExportingData(format) => format!("Exporting data as {}...", format),
            Message::ExportCompleted(path) => format!("Export completed: {}", path),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending migration(s)", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("Migration v{} completed", version),
            Message::MigrationFailed(version, error) => format!("Migration v{} failed: {}", version, error),
            Message::AllMigrationsCompleted => "All migrations completed".to_string(),
            Message::NothingToRollback => "Nothing to roll back".to_string(),
            Message::RollingBack(from, to) => format!("Rolling back from v{} to v{}", from, to),
            Message::RollbackCompleted(version) => format!("Rolled back to v{}", version),
            Message::DbVersion(version) => format!("Database version: {}", version),
            Message::MigrationsUpToDate => "Database schema is up to date".to_string(),
            Message::MigrationsPending => "Database schema has pending migrations".to_string(),
            Message::MigrationHistoryHeader => "Migration history".to_string(),
            Message::NoMigrationsApplied => "No migrations applied".to_string(),

            // === GENERAL MESSAGES ===
            Message::InvalidDate(value) => format!("Invalid date '{}', expected YYYY-MM-DD", value),
            Message::InvalidDateTime(value) => format!("Invalid date '{}', expected YYYY-MM-DD or YYYY-MM-DD HH:MM", value),
            Message::OperationCancelled => "Operation cancelled".to_string(),
        };
        write!(f, "{}", s)
    }
}
