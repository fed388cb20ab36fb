//! # PosiTrack
//!
//! A command-line habit, task, mood and focus tracker.
//!
//! - **Habits**: daily, weekly or every-N-days habits with a numeric goal, a
//!   per-day progress log and completion streaks
//! - **Tasks**: a prioritised to-do list with due dates and filters
//! - **Mood journal**: categorised entries with triggers, location and statistics
//! - **Focus timer**: Pomodoro-style countdowns with recorded sessions
//! - **Export**: JSON and CSV dumps of everything above
//!
//! ## Usage
//!
//! ```rust,no_run
//! use positrack::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
