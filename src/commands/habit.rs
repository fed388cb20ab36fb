//! `positrack habit`: create habits and log their daily progress.
//!
//! ```text
//! positrack habit add "Drink water" --goal 8 --unit glasses
//! positrack habit inc "Drink water"            # +1 for today
//! positrack habit log 1 2.5 --date yesterday   # by id, manual amount
//! positrack habit list --all
//! ```
//!
//! Every subcommand that takes a habit accepts its numeric id or its name
//! (case-insensitive). Names are never plain numbers, so the two cannot clash.
//! Without a subcommand the habits due today are listed.

use crate::{
    db::habits::Habits,
    libs::{
        analytics::HabitAnalytics,
        config::Config,
        formatter::{format_progress, parse_date},
        habit::{Habit, HabitFrequency},
        messages::Message,
        view::View,
    },
    msg_info, msg_print, msg_success,
};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm, Input};

#[derive(Debug, Args)]
pub struct HabitArgs {
    #[command(subcommand)]
    command: Option<HabitCommand>,
}

#[derive(Debug, Subcommand)]
enum HabitCommand {
    /// Create a habit
    Add {
        /// Habit name; plain numbers are reserved for IDs
        name: String,
        /// Daily goal, defaults to the configured value
        #[arg(short, long)]
        goal: Option<f64>,
        #[arg(short, long)]
        unit: Option<String>,
        /// daily, weekly or custom_N (every N days)
        #[arg(short, long, default_value = "daily")]
        frequency: HabitFrequency,
        #[arg(short, long)]
        reminder: bool,
    },
    /// Habits due on a day, with streaks and the surrounding week
    List {
        #[arg(short, long, default_value = "today")]
        date: String,
        /// Include habits that are not due on that day
        #[arg(short, long)]
        all: bool,
    },
    /// Add an amount to a day's progress
    Log {
        /// Habit name or ID
        habit: String,
        amount: f64,
        #[arg(short, long, default_value = "today")]
        date: String,
    },
    /// Add one unit to a day's progress
    Inc {
        /// Habit name or ID
        habit: String,
        #[arg(short, long, default_value = "today")]
        date: String,
    },
    /// Clear a day's progress
    Reset {
        /// Habit name or ID
        habit: String,
        #[arg(short, long, default_value = "today")]
        date: String,
    },
    /// Streaks, completion rate and recent history
    Show {
        /// Habit name or ID
        habit: String,
        #[arg(short, long, default_value = "today")]
        date: String,
    },
    /// Change name, goal, unit, frequency or reminder; prompts when no option is given
    Edit {
        /// Habit name or ID
        habit: String,
        #[arg(short, long)]
        name: Option<String>,
        #[arg(short, long)]
        goal: Option<f64>,
        #[arg(short, long)]
        unit: Option<String>,
        #[arg(short, long)]
        frequency: Option<HabitFrequency>,
        #[arg(short, long)]
        reminder: Option<bool>,
    },
    Delete {
        /// Habit name or ID
        habit: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

pub async fn cmd(args: HabitArgs) -> Result<()> {
    let today = Local::now().date_naive();
    let mut habits = Habits::new()?;

    match args.command {
        Some(HabitCommand::Add {
            name,
            goal,
            unit,
            frequency,
            reminder,
        }) => handle_add(&mut habits, &name, goal, unit, frequency, reminder, today),
        Some(HabitCommand::List { date, all }) => handle_list(&mut habits, parse_date(&date, today)?, all),
        Some(HabitCommand::Log { habit, amount, date }) => handle_log(&mut habits, &habit, Some(amount), parse_date(&date, today)?),
        Some(HabitCommand::Inc { habit, date }) => handle_log(&mut habits, &habit, None, parse_date(&date, today)?),
        Some(HabitCommand::Reset { habit, date }) => handle_reset(&mut habits, &habit, parse_date(&date, today)?),
        Some(HabitCommand::Show { habit, date }) => handle_show(&mut habits, &habit, parse_date(&date, today)?),
        Some(HabitCommand::Edit {
            habit,
            name,
            goal,
            unit,
            frequency,
            reminder,
        }) => handle_edit(&mut habits, &habit, name, goal, unit, frequency, reminder),
        Some(HabitCommand::Delete { habit, yes }) => handle_delete(&mut habits, &habit, yes),
        None => handle_list(&mut habits, today, false),
    }
}

fn handle_add(
    habits: &mut Habits,
    name: &str,
    goal: Option<f64>,
    unit: Option<String>,
    frequency: HabitFrequency,
    reminder: bool,
    today: NaiveDate,
) -> Result<()> {
    let defaults = Config::read()?.habits();
    let mut habit = Habit::new(
        name,
        goal.unwrap_or(defaults.default_goal),
        &unit.unwrap_or(defaults.default_unit),
        frequency,
        today,
    )?;
    habit.reminder = reminder;

    habits.insert(&habit)?;
    msg_success!(Message::HabitCreated(habit.name));
    Ok(())
}

fn handle_list(habits: &mut Habits, date: NaiveDate, all: bool) -> Result<()> {
    let list = habits.list()?;
    if list.is_empty() {
        msg_info!(Message::HabitsNotFound);
        return Ok(());
    }

    let shown: Vec<Habit> = list.into_iter().filter(|h| all || h.should_display(date)).collect();
    if shown.is_empty() {
        msg_info!(Message::HabitsNotDue(date.to_string()));
        return Ok(());
    }

    msg_print!(Message::HabitsHeader(date.to_string()), true);
    View::habits(&shown, date)?;
    Ok(())
}

/// `amount` of `None` is the one-tap +1.
fn handle_log(habits: &mut Habits, identifier: &str, amount: Option<f64>, date: NaiveDate) -> Result<()> {
    let mut habit = habits.find(identifier)?;
    let was_complete = habit.is_complete(date);

    let total = match amount {
        Some(amount) => habit.add_progress(date, amount)?,
        None => habit.increment(date),
    };
    habits.save_progress(&habit, date)?;

    if !was_complete && habit.is_complete(date) {
        msg_success!(Message::HabitGoalReached(habit.name.clone(), habit.computed_streak(date)));
    } else {
        msg_info!(Message::HabitProgress(habit.name.clone(), format_progress(total, habit.goal, &habit.unit)));
    }
    Ok(())
}

fn handle_reset(habits: &mut Habits, identifier: &str, date: NaiveDate) -> Result<()> {
    let mut habit = habits.find(identifier)?;
    habit.reset(date);
    habits.save_progress(&habit, date)?;
    msg_success!(Message::HabitProgressReset(habit.name, date.to_string()));
    Ok(())
}

fn handle_show(habits: &mut Habits, identifier: &str, date: NaiveDate) -> Result<()> {
    let habit = habits.find(identifier)?;
    let analytics = HabitAnalytics::for_habit(&habit, date);

    msg_print!(Message::HabitDetailsHeader(habit.name.clone()), true);
    View::habit(&analytics, &habit, date)?;
    Ok(())
}

fn handle_edit(
    habits: &mut Habits,
    identifier: &str,
    name: Option<String>,
    goal: Option<f64>,
    unit: Option<String>,
    frequency: Option<HabitFrequency>,
    reminder: Option<bool>,
) -> Result<()> {
    let mut habit = habits.find(identifier)?;
    let interactive = name.is_none() && goal.is_none() && unit.is_none() && frequency.is_none() && reminder.is_none();

    if interactive {
        let theme = ColorfulTheme::default();
        let new_name: String = Input::with_theme(&theme).with_prompt("Name").default(habit.name.clone()).interact_text()?;
        let new_goal: f64 = Input::with_theme(&theme).with_prompt("Goal").default(habit.goal).interact_text()?;
        let new_unit: String = Input::with_theme(&theme)
            .with_prompt("Unit")
            .default(habit.unit.clone())
            .allow_empty(true)
            .interact_text()?;
        let new_frequency: HabitFrequency = Input::with_theme(&theme)
            .with_prompt("Frequency (daily, weekly, custom_N)")
            .default(habit.frequency.id())
            .interact_text()?
            .parse()?;
        let new_reminder = Confirm::with_theme(&theme).with_prompt("Reminder").default(habit.reminder).interact()?;

        habit.rename(&new_name)?;
        habit.set_goal(new_goal)?;
        habit.unit = new_unit.trim().to_string();
        habit.frequency = new_frequency;
        habit.reminder = new_reminder;
    } else {
        if let Some(name) = name {
            habit.rename(&name)?;
        }
        if let Some(goal) = goal {
            habit.set_goal(goal)?;
        }
        if let Some(unit) = unit {
            habit.unit = unit.trim().to_string();
        }
        if let Some(frequency) = frequency {
            habit.frequency = frequency;
        }
        if let Some(reminder) = reminder {
            habit.reminder = reminder;
        }
    }

    habits.update(&habit)?;
    msg_success!(Message::HabitUpdated(habit.name));
    Ok(())
}

fn handle_delete(habits: &mut Habits, identifier: &str, yes: bool) -> Result<()> {
    let habit = habits.find(identifier)?;

    let confirmed = yes
        || Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteHabit(habit.name.clone()).to_string())
            .default(false)
            .interact()?;

    if !confirmed {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    }

    if let Some(id) = habit.id {
        habits.delete(id)?;
    }
    msg_success!(Message::HabitDeleted(habit.name));
    Ok(())
}
