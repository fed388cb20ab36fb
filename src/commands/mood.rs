//! `positrack mood`: the mood journal.
//!
//! `mood add` takes the category, subcategory and intensity as arguments, or
//! asks for every field interactively when they are omitted.

use crate::{
    libs::{
        formatter::parse_date,
        messages::Message,
        mood::{validate_intensity, MoodCategory, MoodEntry, MoodLocation, MoodTrigger, StatsPeriod, MAX_INTENSITY, MIN_INTENSITY},
        mood_store::MoodStore,
        view::View,
    },
    msg_error_anyhow, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use chrono::Local;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, MultiSelect, Select};

#[derive(Debug, Args)]
pub struct MoodArgs {
    #[command(subcommand)]
    command: Option<MoodCommand>,
}

#[derive(Debug, Subcommand)]
enum MoodCommand {
    /// Log a mood; prompts for anything not given
    Add {
        #[arg(value_enum)]
        category: Option<MoodCategory>,
        subcategory: Option<String>,
        #[arg(short, long)]
        intensity: Option<u8>,
        #[arg(short, long)]
        notes: Option<String>,
        #[arg(short, long = "trigger", value_enum)]
        triggers: Vec<MoodTrigger>,
        #[arg(short, long, value_enum)]
        location: Option<MoodLocation>,
        #[arg(short, long = "activity")]
        activities: Vec<String>,
    },
    /// List entries, newest first
    List {
        /// Only entries of this day
        #[arg(short, long)]
        date: Option<String>,
        #[arg(short, long, value_enum)]
        category: Option<MoodCategory>,
        #[arg(long)]
        min: Option<u8>,
        #[arg(long)]
        max: Option<u8>,
    },
    Edit {
        id: u32,
        #[arg(short, long)]
        intensity: Option<u8>,
        #[arg(short, long)]
        notes: Option<String>,
        /// Replaces the stored triggers
        #[arg(short, long = "trigger", value_enum)]
        triggers: Vec<MoodTrigger>,
        #[arg(short, long, value_enum)]
        location: Option<MoodLocation>,
    },
    Delete {
        id: u32,
        #[arg(short, long)]
        yes: bool,
    },
    /// Averages, most common mood and trigger, weekly trend
    Stats {
        #[arg(short, long, value_enum, default_value = "week")]
        period: StatsPeriod,
    },
}

pub async fn cmd(args: MoodArgs) -> Result<()> {
    let mut store = MoodStore::new()?;

    match args.command {
        Some(MoodCommand::Add {
            category,
            subcategory,
            intensity,
            notes,
            triggers,
            location,
            activities,
        }) => {
            let entry = match category {
                Some(category) => MoodEntry::new(
                    category,
                    subcategory.as_deref().unwrap_or_else(|| category.subcategories()[0]),
                    intensity.unwrap_or(3),
                    Local::now(),
                )?
                .with_notes(notes.as_deref().unwrap_or(""))
                .with_triggers(triggers)
                .with_location(location)
                .with_activities(activities),
                None => prompt_entry()?,
            };
            let id = store.add(entry)?;
            msg_success!(Message::MoodEntryAdded(id));
            Ok(())
        }
        Some(MoodCommand::List { date, category, min, max }) => handle_list(&store, date, category, min, max),
        Some(MoodCommand::Edit {
            id,
            intensity,
            notes,
            triggers,
            location,
        }) => handle_edit(&mut store, id, intensity, notes, triggers, location),
        Some(MoodCommand::Delete { id, yes }) => handle_delete(&mut store, id, yes),
        Some(MoodCommand::Stats { period }) => handle_stats(&store, period),
        None => handle_list(&store, Some("today".to_string()), None, None, None),
    }
}

fn prompt_entry() -> Result<MoodEntry> {
    let theme = ColorfulTheme::default();

    let category_index = Select::with_theme(&theme)
        .with_prompt(Message::PromptMoodCategory.to_string())
        .items(&MoodCategory::ALL.iter().map(|c| c.as_str()).collect::<Vec<_>>())
        .default(0)
        .interact()?;
    let category = MoodCategory::ALL[category_index];

    let subcategories = category.subcategories();
    let subcategory_index = Select::with_theme(&theme)
        .with_prompt(Message::PromptMoodSubcategory.to_string())
        .items(subcategories)
        .default(0)
        .interact()?;

    let intensity: u8 = Input::with_theme(&theme)
        .with_prompt(Message::PromptMoodIntensity.to_string())
        .default(3)
        .validate_with(|value: &u8| validate_intensity(*value).map(|_| ()).map_err(|e| e.to_string()))
        .interact_text()?;

    let notes: String = Input::with_theme(&theme)
        .with_prompt(Message::PromptMoodNotes.to_string())
        .allow_empty(true)
        .interact_text()?;

    let trigger_indices = MultiSelect::with_theme(&theme)
        .with_prompt(Message::PromptMoodTriggers.to_string())
        .items(&MoodTrigger::ALL.iter().map(|t| t.as_str()).collect::<Vec<_>>())
        .interact()?;

    let mut locations = vec!["-"];
    locations.extend(MoodLocation::ALL.iter().map(|l| l.as_str()));
    let location_index = Select::with_theme(&theme)
        .with_prompt(Message::PromptMoodLocation.to_string())
        .items(&locations)
        .default(0)
        .interact()?;

    let activities: String = Input::with_theme(&theme)
        .with_prompt(Message::PromptMoodActivities.to_string())
        .allow_empty(true)
        .interact_text()?;

    let entry = MoodEntry::new(category, subcategories[subcategory_index], intensity, Local::now())?
        .with_notes(&notes)
        .with_triggers(trigger_indices.into_iter().map(|i| MoodTrigger::ALL[i]).collect())
        .with_location(location_index.checked_sub(1).map(|i| MoodLocation::ALL[i]))
        .with_activities(split_activities(&activities));
    Ok(entry)
}

fn split_activities(raw: &str) -> Vec<String> {
    raw.split(',').map(str::trim).filter(|a| !a.is_empty()).map(str::to_string).collect()
}

fn handle_list(store: &MoodStore, date: Option<String>, category: Option<MoodCategory>, min: Option<u8>, max: Option<u8>) -> Result<()> {
    let today = Local::now().date_naive();
    let day = date.map(|d| parse_date(&d, today)).transpose()?;
    let min = min.unwrap_or(MIN_INTENSITY);
    let max = max.unwrap_or(MAX_INTENSITY);

    let entries: Vec<MoodEntry> = store
        .entries_by_intensity(min, max)
        .into_iter()
        .filter(|e| day.map(|d| e.date() == d).unwrap_or(true))
        .filter(|e| category.map(|c| e.category == c).unwrap_or(true))
        .cloned()
        .collect();

    if entries.is_empty() {
        msg_info!(Message::MoodEntriesNotFound);
        return Ok(());
    }

    msg_print!(Message::MoodEntriesHeader, true);
    View::moods(&entries)?;
    Ok(())
}

fn handle_edit(
    store: &mut MoodStore,
    id: u32,
    intensity: Option<u8>,
    notes: Option<String>,
    triggers: Vec<MoodTrigger>,
    location: Option<MoodLocation>,
) -> Result<()> {
    let mut entry = store.get(id).cloned().ok_or_else(|| msg_error_anyhow!(Message::MoodEntryNotFound(id)))?;

    if let Some(intensity) = intensity {
        entry.intensity = validate_intensity(intensity)?;
    }
    if let Some(notes) = notes {
        entry = entry.with_notes(&notes);
    }
    if !triggers.is_empty() {
        entry = entry.with_triggers(triggers);
    }
    if location.is_some() {
        entry = entry.with_location(location);
    }

    if store.update(entry)? {
        msg_success!(Message::MoodEntryUpdated(id));
    } else {
        msg_info!(Message::MoodEntryNotFound(id));
    }
    Ok(())
}

fn handle_delete(store: &mut MoodStore, id: u32, yes: bool) -> Result<()> {
    if store.get(id).is_none() {
        return Err(msg_error_anyhow!(Message::MoodEntryNotFound(id)));
    }

    let confirmed = yes
        || Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteMoodEntry(id).to_string())
            .default(false)
            .interact()?;

    if !confirmed {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    }

    store.delete(id)?;
    msg_success!(Message::MoodEntryDeleted(id));
    Ok(())
}

fn handle_stats(store: &MoodStore, period: StatsPeriod) -> Result<()> {
    let now = Local::now();
    let stats = store.stats(period, now);

    msg_print!(Message::MoodStatsHeader(period.label().to_string()), true);
    View::mood_stats(&stats, now.date_naive())?;
    Ok(())
}
