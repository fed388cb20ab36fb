//! Habit model: recurrence rules, per-day progress and streaks.
//!
//! A habit keeps a sparse log of progress keyed by calendar day. Everything else
//! (whether the habit is due, how far along today is, how long the current streak
//! is) is derived from that log, the habit's goal and its recurrence rule.
//!
//! ## Recurrence
//!
//! Recurrence is anchored at the creation day. With `d` the number of days
//! between the creation day and the day in question:
//!
//! - **Daily**: due every day
//! - **Weekly**: due when `d % 7 == 0`
//! - **Custom(N)**: due when `d % N == 0`
//!
//! Nothing is due before the creation day.
//!
//! ## Streaks
//!
//! ```text
//! day:       ... 10  11  12  13  14
//! progress:  ...  8   8   3   8   8     goal = 8
//! complete:  ...  ✔   ✔   ✘   ✔   ✔
//!                             └───┴── computed_streak(14) = 2
//! ```
//!
//! [`Habit::computed_streak`] walks back over calendar days and stops at the
//! first incomplete day. [`Habit::scheduled_streak`] walks back over due days
//! only, so weekly and custom habits can build streaks longer than one.

use super::validation::ValidationError;
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_GOAL: f64 = 1.0;
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// How often a habit is due, anchored at its creation day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum HabitFrequency {
    #[default]
    Daily,
    Weekly,
    /// Every `days` days.
    Custom { days: u32 },
}

impl HabitFrequency {
    pub fn custom(days: u32) -> Result<Self, ValidationError> {
        if days == 0 {
            return Err(ValidationError::InvalidFrequencyDays(days));
        }
        Ok(HabitFrequency::Custom { days })
    }

    /// Stable identifier used for storage, e.g. `daily` or `custom_3`.
    pub fn id(&self) -> String {
        match self {
            HabitFrequency::Daily => "daily".to_string(),
            HabitFrequency::Weekly => "weekly".to_string(),
            HabitFrequency::Custom { days } => format!("custom_{}", days),
        }
    }

    /// Interval between due days.
    pub fn interval_days(&self) -> i64 {
        match self {
            HabitFrequency::Daily => 1,
            HabitFrequency::Weekly => 7,
            HabitFrequency::Custom { days } => i64::from(*days),
        }
    }

    /// Whether a habit created on `creation_date` is due on `date`.
    pub fn is_due(&self, creation_date: NaiveDate, date: NaiveDate) -> bool {
        if date < creation_date {
            return false;
        }
        let days_difference = (date - creation_date).num_days();
        match self {
            HabitFrequency::Daily => true,
            // Stored rows may still carry a zero interval.
            _ => {
                let interval = self.interval_days();
                interval > 0 && days_difference % interval == 0
            }
        }
    }
}

impl fmt::Display for HabitFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HabitFrequency::Daily => write!(f, "Daily"),
            HabitFrequency::Weekly => write!(f, "Weekly"),
            HabitFrequency::Custom { days } => write!(f, "Every {} days", days),
        }
    }
}

impl FromStr for HabitFrequency {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        match normalized.as_str() {
            "daily" => Ok(HabitFrequency::Daily),
            "weekly" => Ok(HabitFrequency::Weekly),
            other => {
                let days = other
                    .strip_prefix("custom_")
                    .and_then(|days| days.parse::<u32>().ok())
                    .ok_or_else(|| ValidationError::UnknownFrequency(s.to_string()))?;
                HabitFrequency::custom(days)
            }
        }
    }
}

/// Visual intensity of a streak, used for the flame indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StreakTier {
    Cold,
    Warm,
    Hot,
    Blazing,
}

impl StreakTier {
    pub fn from_streak(streak: u32) -> Self {
        match streak {
            0 => StreakTier::Cold,
            1..=9 => StreakTier::Warm,
            10..=49 => StreakTier::Hot,
            _ => StreakTier::Blazing,
        }
    }

    pub fn flame(&self) -> &'static str {
        match self {
            StreakTier::Cold => "·",
            StreakTier::Warm => "🔥",
            StreakTier::Hot => "🔥🔥",
            StreakTier::Blazing => "🔥🔥🔥",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Habit {
    pub id: Option<i32>,
    /// Day the habit was added; recurrence is anchored here.
    pub creation_date: NaiveDate,
    pub name: String,
    pub is_new: bool,
    /// Sparse per-day progress log.
    pub daily_progress: BTreeMap<NaiveDate, f64>,
    pub goal: f64,
    pub unit: String,
    pub reminder: bool,
    pub frequency: HabitFrequency,
    pub last_completion_date: Option<NaiveDate>,
    pub last_progress_date: Option<NaiveDate>,
}

impl Habit {
    /// Builds a new habit from form input.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when the trimmed name is empty or the goal
    /// is not a positive finite number.
    pub fn new(name: &str, goal: f64, unit: &str, frequency: HabitFrequency, creation_date: NaiveDate) -> Result<Self, ValidationError> {
        Ok(Habit {
            id: None,
            creation_date,
            name: validate_name(name)?,
            is_new: true,
            daily_progress: BTreeMap::new(),
            goal: validate_goal(goal)?,
            unit: unit.trim().to_string(),
            reminder: false,
            frequency,
            last_completion_date: None,
            last_progress_date: None,
        })
    }

    pub fn date_key(date: NaiveDate) -> String {
        date.format(DATE_KEY_FORMAT).to_string()
    }

    pub fn rename(&mut self, name: &str) -> Result<(), ValidationError> {
        self.name = validate_name(name)?;
        Ok(())
    }

    pub fn set_goal(&mut self, goal: f64) -> Result<(), ValidationError> {
        self.goal = validate_goal(goal)?;
        Ok(())
    }

    /// Progress logged on `date`, zero when nothing was logged.
    pub fn progress_on(&self, date: NaiveDate) -> f64 {
        self.daily_progress.get(&date).copied().unwrap_or(0.0)
    }

    pub fn is_complete(&self, date: NaiveDate) -> bool {
        self.progress_on(date) >= self.goal
    }

    /// Progress on `date` as a fraction of the goal, capped at 1.
    pub fn completion_fraction(&self, date: NaiveDate) -> f64 {
        if self.goal <= 0.0 {
            return 0.0;
        }
        (self.progress_on(date) / self.goal).min(1.0)
    }

    /// Whether the habit is due (and therefore listed) on `date`.
    pub fn should_display(&self, date: NaiveDate) -> bool {
        self.frequency.is_due(self.creation_date, date)
    }

    /// Consecutive complete calendar days ending with `up_to`.
    ///
    /// If `up_to` itself is not complete the streak is 0.
    pub fn computed_streak(&self, up_to: NaiveDate) -> u32 {
        let mut streak = 0;
        let mut current = up_to;
        while self.is_complete(current) {
            streak += 1;
            match current.pred_opt() {
                Some(previous) => current = previous,
                None => break,
            }
        }
        streak
    }

    /// Consecutive complete due days ending at or before `up_to`.
    ///
    /// Days on which the habit is not due are skipped. A due `up_to` that is not
    /// complete yet is still in progress and does not break the streak.
    pub fn scheduled_streak(&self, up_to: NaiveDate) -> u32 {
        let mut streak = 0;
        let mut current = up_to;

        if self.should_display(current) && !self.is_complete(current) {
            match current.pred_opt() {
                Some(previous) => current = previous,
                None => return 0,
            }
        }

        while current >= self.creation_date {
            if self.should_display(current) {
                if !self.is_complete(current) {
                    break;
                }
                streak += 1;
            }
            match current.pred_opt() {
                Some(previous) => current = previous,
                None => break,
            }
        }
        streak
    }

    pub fn streak_tier(&self, up_to: NaiveDate) -> StreakTier {
        StreakTier::from_streak(self.computed_streak(up_to))
    }

    /// Adds a manually entered amount to `date`. Returns the new total for the day.
    pub fn add_progress(&mut self, date: NaiveDate, amount: f64) -> Result<f64, ValidationError> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(ValidationError::InvalidAmount(amount));
        }
        let total = self.daily_progress.entry(date).or_insert(0.0);
        *total += amount;
        let total = *total;
        self.record_progress(date);
        Ok(total)
    }

    /// Adds a single unit to `date`. Returns the new total for the day.
    pub fn increment(&mut self, date: NaiveDate) -> f64 {
        let total = self.daily_progress.entry(date).or_insert(0.0);
        *total += 1.0;
        let total = *total;
        self.record_progress(date);
        total
    }

    /// Clears progress for `date`.
    ///
    /// A completion recorded for that day is withdrawn and the last completion
    /// falls back to the latest day still meeting the goal.
    pub fn reset(&mut self, date: NaiveDate) {
        self.daily_progress.remove(&date);
        self.last_progress_date = self.last_progress_date.max(Some(date));
        if self.last_completion_date == Some(date) {
            let goal = self.goal;
            self.last_completion_date = self.daily_progress.iter().rev().find(|(_, amount)| **amount >= goal).map(|(day, _)| *day);
        }
    }

    /// Share of due days in `from..=to` on which the habit was complete.
    pub fn completion_rate(&self, from: NaiveDate, to: NaiveDate) -> f64 {
        let mut due = 0u32;
        let mut complete = 0u32;
        let mut day = from.max(self.creation_date);
        while day <= to {
            if self.should_display(day) {
                due += 1;
                if self.is_complete(day) {
                    complete += 1;
                }
            }
            day += Duration::days(1);
        }
        if due == 0 {
            0.0
        } else {
            f64::from(complete) / f64::from(due)
        }
    }

    fn record_progress(&mut self, date: NaiveDate) {
        self.is_new = false;
        self.last_progress_date = self.last_progress_date.max(Some(date));
        if self.is_complete(date) {
            self.last_completion_date = self.last_completion_date.max(Some(date));
        }
    }
}

/// The seven days centred on `reference`, oldest first.
pub fn week_window(reference: NaiveDate) -> Vec<NaiveDate> {
    (-3..=3).map(|offset| reference + Duration::days(offset)).collect()
}

fn validate_name(name: &str) -> Result<String, ValidationError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyHabitName);
    }
    // Numeric identifiers always address habits by id.
    if name.parse::<i64>().is_ok() {
        return Err(ValidationError::NumericHabitName(name.to_string()));
    }
    Ok(name.to_string())
}

fn validate_goal(goal: f64) -> Result<f64, ValidationError> {
    if !goal.is_finite() || goal <= 0.0 {
        return Err(ValidationError::InvalidGoal(goal));
    }
    Ok(goal)
}
