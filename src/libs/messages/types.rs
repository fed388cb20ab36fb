/// Every user-facing message, rendered through its `Display` impl.
#[derive(Debug, Clone)]
pub enum Message {
    // === HABIT MESSAGES ===
    HabitCreated(String),
    HabitUpdated(String),
    HabitDeleted(String),
    HabitNotFound(String),
    HabitAlreadyExists(String),
    HabitsNotFound,
    HabitsNotDue(String),         // date
    HabitsHeader(String),         // date
    HabitProgress(String, String), // name, "progress/goal unit"
    HabitGoalReached(String, u32), // name, streak
    HabitProgressReset(String, String), // name, date
    ConfirmDeleteHabit(String),
    HabitDetailsHeader(String),

    // === TASK MESSAGES ===
    TaskCreated(i32),
    TaskUpdated(i32),
    TaskDeleted(i32),
    TaskNotFound(String),
    TaskCompleted(String),
    TaskReopened(String),
    TasksNotFound,
    TasksHeader(String), // filter label
    ConfirmDeleteTask(String),

    // === MOOD MESSAGES ===
    MoodEntryAdded(u32),
    MoodEntryUpdated(u32),
    MoodEntryDeleted(u32),
    MoodEntryNotFound(u32),
    MoodEntriesNotFound,
    MoodEntriesHeader,
    MoodStatsHeader(String), // period label
    ConfirmDeleteMoodEntry(u32),
    PromptMoodCategory,
    PromptMoodSubcategory,
    PromptMoodIntensity,
    PromptMoodNotes,
    PromptMoodTriggers,
    PromptMoodLocation,
    PromptMoodActivities,

    // === FOCUS MESSAGES ===
    FocusStarted(String, String, String), // activity, preset, MM:SS
    FocusRemaining(String),               // MM:SS
    FocusCompleted(String, String),       // activity, duration
    FocusInterrupted(String, String),     // activity, duration
    FocusActivityNotFound(String),
    FocusSessionsNotFound,
    FocusHistoryHeader,
    FocusPresetsHeader,
    FocusStopHint,

    // === STATS MESSAGES ===
    StatsHeader(String), // date
    HabitStatsHeader,
    TaskStatsHeader,
    MoodStatsSection(String),

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigModuleHabits,
    ConfigModuleFocus,
    PromptSelectModules,
    PromptDefaultGoal,
    PromptDefaultUnit,
    PromptDefaultPreset,
    PromptCustomMinutes,

    // === EXPORT MESSAGES ===
    ExportingData(String), // format
    ExportCompleted(String),

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),
    RunningMigration(u32, String),
    MigrationCompleted(u32),
    MigrationFailed(u32, String),
    AllMigrationsCompleted,
    NothingToRollback,
    RollingBack(u32, u32),
    RollbackCompleted(u32),
    DbVersion(u32),
    MigrationsUpToDate,
    MigrationsPending,
    MigrationHistoryHeader,
    NoMigrationsApplied,

    // === GENERAL MESSAGES ===
    InvalidDate(String),
    InvalidDateTime(String),
    OperationCancelled,
}
