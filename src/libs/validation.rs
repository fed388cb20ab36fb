//! Input validation errors for habit, task, mood and focus forms.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Please enter a habit name")]
    EmptyHabitName,

    #[error("Habit name '{0}' is a number; numbers are reserved for habit ids")]
    NumericHabitName(String),

    #[error("Goal must be a positive number, got {0}")]
    InvalidGoal(f64),

    #[error("Custom frequency must be at least 1 day, got {0}")]
    InvalidFrequencyDays(u32),

    #[error("Unknown frequency '{0}' (expected daily, weekly or custom_N)")]
    UnknownFrequency(String),

    #[error("Progress amount must be a positive number, got {0}")]
    InvalidAmount(f64),

    #[error("Please enter a task title")]
    EmptyTaskTitle,

    #[error("Unknown task priority '{0}'")]
    UnknownPriority(String),

    #[error("Intensity must be between 1 and 5, got {0}")]
    IntensityOutOfRange(u8),

    #[error("'{subcategory}' is not a {category} feeling")]
    UnknownSubcategory { category: String, subcategory: String },

    #[error("Unknown value '{0}'")]
    UnknownVariant(String),

    #[error("Focus duration must be at least 1 minute, got {0}")]
    InvalidFocusMinutes(u32),
}
