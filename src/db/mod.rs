//! SQLite persistence.
//!
//! Every repository owns a [`db::Db`] connection whose schema has been brought
//! up to date by [`migrations`]. Repositories open the default database with
//! `new()` or wrap an existing connection with `with_db()`:
//!
//! ```rust,no_run
//! use positrack::db::{db::Db, habits::Habits};
//!
//! let mut habits = Habits::with_db(Db::open("/tmp/positrack.db")?);
//! for habit in habits.list()? {
//!     println!("{}", habit.name);
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! Mood entries are not stored here; see [`crate::libs::mood_store`].

/// Connection setup.
pub mod db;

/// Versioned schema changes and their history.
pub mod migrations;

/// Habits and their per-day progress.
pub mod habits;

pub mod tasks;

/// Recorded focus sessions.
pub mod focus_sessions;
