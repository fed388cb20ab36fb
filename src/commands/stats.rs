//! `positrack stats`: today's overview across habits, tasks, mood and focus.

use crate::{
    db::{focus_sessions::FocusSessions, habits::Habits, tasks::Tasks},
    libs::{
        analytics::{HabitAnalytics, Overview},
        messages::Message,
        mood::StatsPeriod,
        mood_store::MoodStore,
        view::View,
    },
    msg_print,
};
use anyhow::Result;
use chrono::Local;
use clap::Args;

#[derive(Debug, Args)]
pub struct StatsArgs {
    /// Period for the mood figures
    #[arg(short, long, value_enum, default_value = "week")]
    period: StatsPeriod,
}

pub async fn cmd(args: StatsArgs) -> Result<()> {
    let now = Local::now();
    let today = now.date_naive();

    let habits = Habits::new()?.list()?;
    let tasks = Tasks::new()?.all()?;
    let sessions = FocusSessions::new()?.fetch_for_date(today)?;
    let store = MoodStore::new()?;

    let overview = Overview::compute(&habits, &tasks, store.entries(), &sessions, args.period, now);

    msg_print!(Message::StatsHeader(today.to_string()), true);
    View::overview(&overview)?;

    if !habits.is_empty() {
        let per_habit: Vec<HabitAnalytics> = habits.iter().map(|h| HabitAnalytics::for_habit(h, today)).collect();
        msg_print!(Message::HabitStatsHeader, true);
        View::habit_analytics(&per_habit)?;
    }

    msg_print!(Message::TaskStatsHeader, true);
    View::task_summary(&overview.tasks)?;

    msg_print!(Message::MoodStatsSection(args.period.label().to_string()), true);
    View::mood_stats(&overview.mood, today)?;
    Ok(())
}
