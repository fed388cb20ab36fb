//! `positrack focus`: runs a focus countdown in the terminal.
//!
//! ```text
//!  start ──▶ countdown (1s ticks) ──▶ completed ──┐
//!              │                                 ├──▶ session saved
//!              └── Ctrl-C ──▶ interrupted ───────┘
//! ```
//!
//! The activity is either "General Focus" or the name of an existing habit.

use crate::{
    db::{focus_sessions::FocusSessions, habits::Habits},
    libs::{
        config::Config,
        focus::{session_duration, Countdown, FocusPreset, FocusSession, FocusTimer, GENERAL_ACTIVITY},
        formatter::{format_countdown, parse_date},
        messages::Message,
        view::View,
    },
    msg_error_anyhow, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use chrono::Local;
use clap::{Args, Subcommand};
use std::io::{self, Write};

#[derive(Debug, Args)]
pub struct FocusArgs {
    #[command(subcommand)]
    command: Option<FocusCommand>,
}

#[derive(Debug, Subcommand)]
enum FocusCommand {
    /// Run a focus countdown
    Start {
        /// Defaults to the configured preset
        #[arg(short, long, value_enum)]
        preset: Option<FocusPreset>,
        /// Session length; implies the Custom preset
        #[arg(short, long)]
        minutes: Option<u32>,
        /// "General Focus" or the name of a habit
        #[arg(short, long, default_value = GENERAL_ACTIVITY)]
        activity: String,
    },
    /// Available presets and their lengths
    Presets,
    /// Recorded sessions
    History {
        #[arg(short, long)]
        date: Option<String>,
        #[arg(short, long, default_value_t = 10)]
        limit: usize,
    },
}

pub async fn cmd(args: FocusArgs) -> Result<()> {
    match args.command {
        Some(FocusCommand::Start { preset, minutes, activity }) => handle_start(preset, minutes, &activity).await,
        Some(FocusCommand::Presets) | None => handle_presets(),
        Some(FocusCommand::History { date, limit }) => handle_history(date, limit),
    }
}

async fn handle_start(preset: Option<FocusPreset>, minutes: Option<u32>, activity: &str) -> Result<()> {
    let config = Config::read()?.focus();
    let preset = match minutes {
        Some(_) => FocusPreset::Custom,
        None => preset.unwrap_or(config.default_preset),
    };
    let duration = session_duration(preset, minutes.or(Some(config.custom_minutes)))?;
    let activity = resolve_activity(activity)?;

    let countdown = Countdown::new(FocusTimer::new(duration));
    let handle = countdown.handle();
    let stopper = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            handle.lock().pause();
        }
    });

    let started_at = Local::now().naive_local();
    msg_info!(Message::FocusStarted(activity.clone(), preset.to_string(), format_countdown(duration.as_secs())));
    msg_print!(Message::FocusStopHint);

    let outcome = countdown
        .run(|timer| {
            print!("\r{}  ", Message::FocusRemaining(format_countdown(timer.remaining_secs())));
            let _ = io::stdout().flush();
        })
        .await;
    stopper.abort();
    println!();

    let session = FocusSession {
        id: None,
        activity: activity.clone(),
        preset,
        planned_secs: duration.as_secs() as i64,
        focused_secs: outcome.focused_secs() as i64,
        completed: outcome.is_completed(),
        started_at,
        ended_at: Local::now().naive_local(),
    };
    FocusSessions::new()?.insert(&session)?;

    let focused = format_countdown(outcome.focused_secs());
    if outcome.is_completed() {
        msg_success!(Message::FocusCompleted(activity, focused));
    } else {
        msg_info!(Message::FocusInterrupted(activity, focused));
    }
    Ok(())
}

/// Canonical activity name: the general label or an existing habit's name.
fn resolve_activity(activity: &str) -> Result<String> {
    if activity.trim().eq_ignore_ascii_case(GENERAL_ACTIVITY) {
        return Ok(GENERAL_ACTIVITY.to_string());
    }
    Habits::new()?
        .get_by_name(activity)?
        .map(|habit| habit.name)
        .ok_or_else(|| msg_error_anyhow!(Message::FocusActivityNotFound(activity.to_string())))
}

fn handle_presets() -> Result<()> {
    let config = Config::read()?.focus();
    let presets = FocusPreset::ALL
        .iter()
        .map(|preset| Ok((*preset, config.duration_for(*preset)?.as_secs())))
        .collect::<Result<Vec<_>>>()?;

    msg_print!(Message::FocusPresetsHeader, true);
    View::focus_presets(&presets)?;
    Ok(())
}

fn handle_history(date: Option<String>, limit: usize) -> Result<()> {
    let mut sessions_db = FocusSessions::new()?;
    let sessions = match date {
        Some(date) => sessions_db.fetch_for_date(parse_date(&date, Local::now().date_naive())?)?,
        None => sessions_db.recent(limit)?,
    };

    if sessions.is_empty() {
        msg_info!(Message::FocusSessionsNotFound);
        return Ok(());
    }

    msg_print!(Message::FocusHistoryHeader, true);
    View::focus_sessions(&sessions)?;
    Ok(())
}
