//! Focus sessions: presets, the countdown state machine and its async driver.
//!
//! ## Timer lifecycle
//!
//! ```text
//!            start()            tick() reaches 0
//!   Idle ─────────────▶ Running ─────────────────▶ Finished
//!    ▲                   │   ▲                        │
//!    │ stop()   pause()  │   │ start()                │ start() (resets)
//!    │                   ▼   │                        │
//!    └────────────────  Paused ◀──────────────────────┘
//! ```
//!
//! `stop()` always rewinds the remaining time to the full duration.

use super::validation::ValidationError;
use chrono::NaiveDateTime;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

pub const GENERAL_ACTIVITY: &str = "General Focus";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
pub enum FocusPreset {
    #[default]
    Pomodoro,
    ShortFocus,
    LongFocus,
    Custom,
}

impl FocusPreset {
    pub const ALL: [FocusPreset; 4] = [FocusPreset::Pomodoro, FocusPreset::ShortFocus, FocusPreset::LongFocus, FocusPreset::Custom];

    pub fn as_str(&self) -> &'static str {
        match self {
            FocusPreset::Pomodoro => "Pomodoro",
            FocusPreset::ShortFocus => "Short Focus",
            FocusPreset::LongFocus => "Long Focus",
            FocusPreset::Custom => "Custom",
        }
    }

    pub fn default_minutes(&self) -> u32 {
        match self {
            FocusPreset::Pomodoro => 25,
            FocusPreset::ShortFocus => 15,
            FocusPreset::LongFocus => 50,
            FocusPreset::Custom => 25,
        }
    }

    pub fn duration(&self) -> Duration {
        Duration::from_secs(u64::from(self.default_minutes()) * 60)
    }
}

impl fmt::Display for FocusPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FocusPreset {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FocusPreset::ALL
            .iter()
            .copied()
            .find(|preset| preset.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ValidationError::UnknownVariant(s.to_string()))
    }
}

/// Duration for a session, honouring a custom minute count for the `Custom` preset.
pub fn session_duration(preset: FocusPreset, custom_minutes: Option<u32>) -> Result<Duration, ValidationError> {
    match (preset, custom_minutes) {
        (FocusPreset::Custom, Some(0)) => Err(ValidationError::InvalidFocusMinutes(0)),
        (FocusPreset::Custom, Some(minutes)) => Ok(Duration::from_secs(u64::from(minutes) * 60)),
        _ => Ok(preset.duration()),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    Idle,
    Running,
    Paused,
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The timer was not running; nothing changed.
    Idle,
    Ticked { remaining: u64 },
    Completed,
}

/// One-second countdown.
#[derive(Debug, Clone)]
pub struct FocusTimer {
    duration: u64,
    remaining: u64,
    state: TimerState,
}

impl FocusTimer {
    pub fn new(duration: Duration) -> Self {
        let seconds = duration.as_secs();
        Self {
            duration: seconds,
            remaining: seconds,
            state: TimerState::Idle,
        }
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn duration_secs(&self) -> u64 {
        self.duration
    }

    pub fn remaining_secs(&self) -> u64 {
        self.remaining
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.duration - self.remaining
    }

    pub fn is_running(&self) -> bool {
        self.state == TimerState::Running
    }

    /// Switches to a new duration and rewinds. Any running session is stopped.
    pub fn set_duration(&mut self, duration: Duration) {
        self.duration = duration.as_secs();
        self.remaining = self.duration;
        self.state = TimerState::Idle;
    }

    pub fn start(&mut self) {
        if self.remaining == 0 {
            self.remaining = self.duration;
        }
        self.state = TimerState::Running;
    }

    pub fn pause(&mut self) {
        if self.state == TimerState::Running {
            self.state = TimerState::Paused;
        }
    }

    pub fn stop(&mut self) {
        self.state = TimerState::Idle;
        self.remaining = self.duration;
    }

    /// Advances the countdown by one second.
    pub fn tick(&mut self) -> TickOutcome {
        if self.state != TimerState::Running {
            return TickOutcome::Idle;
        }
        if self.remaining > 0 {
            self.remaining -= 1;
        }
        if self.remaining == 0 {
            self.state = TimerState::Finished;
            return TickOutcome::Completed;
        }
        TickOutcome::Ticked { remaining: self.remaining }
    }

    /// Remaining share of the session, 1.0 at start and 0.0 when finished.
    pub fn progress(&self) -> f64 {
        if self.duration == 0 {
            return 0.0;
        }
        self.remaining as f64 / self.duration as f64
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownOutcome {
    Completed { focused_secs: u64 },
    Interrupted { focused_secs: u64 },
}

impl CountdownOutcome {
    pub fn focused_secs(&self) -> u64 {
        match self {
            CountdownOutcome::Completed { focused_secs } | CountdownOutcome::Interrupted { focused_secs } => *focused_secs,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, CountdownOutcome::Completed { .. })
    }
}

/// Drives a shared [`FocusTimer`] from a tokio interval.
///
/// Other tasks hold a clone of [`Countdown::handle`] and may pause or stop the
/// timer; the countdown ends at the next tick once the timer is no longer running.
pub struct Countdown {
    timer: Arc<Mutex<FocusTimer>>,
    tick: Duration,
}

impl Countdown {
    pub fn new(timer: FocusTimer) -> Self {
        Self::with_tick(timer, Duration::from_secs(1))
    }

    pub fn with_tick(timer: FocusTimer, tick: Duration) -> Self {
        Self {
            timer: Arc::new(Mutex::new(timer)),
            tick,
        }
    }

    pub fn handle(&self) -> Arc<Mutex<FocusTimer>> {
        Arc::clone(&self.timer)
    }

    pub async fn run<F>(&self, mut on_tick: F) -> CountdownOutcome
    where
        F: FnMut(&FocusTimer),
    {
        self.timer.lock().start();
        info!(seconds = self.timer.lock().remaining_secs(), "focus countdown started");

        let mut interval = tokio::time::interval(self.tick);
        // The first tick of a tokio interval completes immediately.
        interval.tick().await;

        loop {
            interval.tick().await;
            let outcome = {
                let mut timer = self.timer.lock();
                let outcome = timer.tick();
                if outcome != TickOutcome::Idle {
                    on_tick(&timer);
                }
                (outcome, timer.elapsed_secs())
            };

            match outcome {
                (TickOutcome::Ticked { remaining }, _) => debug!(remaining, "tick"),
                (TickOutcome::Completed, focused_secs) => {
                    info!(focused_secs, "focus countdown completed");
                    return CountdownOutcome::Completed { focused_secs };
                }
                (TickOutcome::Idle, focused_secs) => {
                    info!(focused_secs, "focus countdown interrupted");
                    return CountdownOutcome::Interrupted { focused_secs };
                }
            }
        }
    }
}

/// A finished or interrupted focus session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FocusSession {
    pub id: Option<i32>,
    pub activity: String,
    pub preset: FocusPreset,
    pub planned_secs: i64,
    pub focused_secs: i64,
    pub completed: bool,
    pub started_at: NaiveDateTime,
    pub ended_at: NaiveDateTime,
}
