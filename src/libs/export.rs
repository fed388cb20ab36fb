//! Data export to JSON or CSV files.
//!
//! JSON exports are a single document with `export_date`, `app_version`,
//! `format` and one array per selected section. CSV exports start with two
//! header lines and follow with one titled table per section, separated by
//! blank lines.

use crate::libs::formatter::format_amount;
use crate::libs::habit::{Habit, DATE_KEY_FORMAT};
use crate::libs::messages::Message;
use crate::libs::mood::MoodEntry;
use crate::libs::task::Task;
use crate::msg_success;
use anyhow::Result;
use chrono::{DateTime, Local, SecondsFormat};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;

include!(concat!(env!("OUT_DIR"), "/app_metadata.rs"));

const DUE_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Json => "JSON",
            ExportFormat::Csv => "CSV",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }
}

/// Which sections end up in the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportData {
    Habits,
    Tasks,
    Mood,
    All,
}

impl ExportData {
    /// Whether `section` is part of `selection`. An empty selection means everything.
    fn selected(selection: &[ExportData], section: ExportData) -> bool {
        selection.is_empty() || selection.iter().any(|d| *d == section || *d == ExportData::All)
    }
}

/// Everything that can be exported, loaded up front by the caller.
#[derive(Debug, Clone, Default)]
pub struct ExportSnapshot {
    pub habits: Vec<Habit>,
    pub tasks: Vec<Task>,
    pub mood_entries: Vec<MoodEntry>,
}

#[derive(Debug, Serialize)]
pub struct ExportHabit {
    pub id: i32,
    pub name: String,
    pub creation_date: String,
    pub goal: f64,
    pub unit: String,
    pub frequency: String,
    pub reminder: bool,
    pub daily_progress: BTreeMap<String, f64>,
}

impl From<&Habit> for ExportHabit {
    fn from(habit: &Habit) -> Self {
        ExportHabit {
            id: habit.id.unwrap_or(0),
            name: habit.name.clone(),
            creation_date: habit.creation_date.format(DATE_KEY_FORMAT).to_string(),
            goal: habit.goal,
            unit: habit.unit.clone(),
            frequency: habit.frequency.to_string(),
            reminder: habit.reminder,
            daily_progress: habit.daily_progress.iter().map(|(date, amount)| (Habit::date_key(*date), *amount)).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ExportTask {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub is_completed: bool,
    pub priority: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
}

impl From<&Task> for ExportTask {
    fn from(task: &Task) -> Self {
        ExportTask {
            id: task.id.unwrap_or(0),
            title: task.title.clone(),
            description: task.description.clone(),
            is_completed: task.is_completed,
            priority: task.priority.to_string(),
            due_date: task.due_date.map(|d| d.format(DUE_DATE_FORMAT).to_string()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ExportMoodEntry {
    pub id: u32,
    pub timestamp: String,
    pub category: String,
    pub subcategory: String,
    pub intensity: u8,
    pub notes: String,
    pub triggers: Vec<String>,
    pub location: String,
    pub activities: Vec<String>,
}

impl From<&MoodEntry> for ExportMoodEntry {
    fn from(entry: &MoodEntry) -> Self {
        ExportMoodEntry {
            id: entry.id,
            timestamp: entry.timestamp.to_rfc3339_opts(SecondsFormat::Secs, false),
            category: entry.category.to_string(),
            subcategory: entry.subcategory.clone(),
            intensity: entry.intensity,
            notes: entry.notes.clone(),
            triggers: entry.triggers.iter().map(|t| t.to_string()).collect(),
            location: entry.location.map(|l| l.to_string()).unwrap_or_default(),
            activities: entry.activities.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ExportDocument {
    pub export_date: String,
    pub app_version: String,
    pub format: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub habits: Option<Vec<ExportHabit>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tasks: Option<Vec<ExportTask>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mood_entries: Option<Vec<ExportMoodEntry>>,
}

impl ExportDocument {
    pub fn build(snapshot: &ExportSnapshot, data: &[ExportData], format: ExportFormat, now: DateTime<Local>) -> Self {
        ExportDocument {
            export_date: now.to_rfc3339_opts(SecondsFormat::Secs, false),
            app_version: APP_METADATA_VERSION.to_string(),
            format: format.as_str().to_string(),
            habits: ExportData::selected(data, ExportData::Habits).then(|| snapshot.habits.iter().map(ExportHabit::from).collect()),
            tasks: ExportData::selected(data, ExportData::Tasks).then(|| snapshot.tasks.iter().map(ExportTask::from).collect()),
            mood_entries: ExportData::selected(data, ExportData::Mood).then(|| snapshot.mood_entries.iter().map(ExportMoodEntry::from).collect()),
        }
    }
}

/// `positrack_export_<YYYYMMDD_HHMMSS>.<ext>`
pub fn default_file_name(format: ExportFormat, now: DateTime<Local>) -> String {
    format!("{}_export_{}.{}", APP_METADATA_NAME, now.format("%Y%m%d_%H%M%S"), format.extension())
}

pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>) -> Self {
        let output_path = output_path.unwrap_or_else(|| PathBuf::from(default_file_name(format, Local::now())));
        Self { format, output_path }
    }

    /// Writes the selected sections of `snapshot` and returns the file written.
    pub fn export(&self, snapshot: &ExportSnapshot, data: &[ExportData]) -> Result<PathBuf> {
        let document = ExportDocument::build(snapshot, data, self.format, Local::now());
        debug!(path = %self.output_path.display(), format = self.format.as_str(), "exporting");

        match self.format {
            ExportFormat::Json => self.export_json(&document)?,
            ExportFormat::Csv => self.export_csv(&document)?,
        }

        msg_success!(Message::ExportCompleted(self.output_path.display().to_string()));
        Ok(self.output_path.clone())
    }

    fn export_json(&self, document: &ExportDocument) -> Result<()> {
        let json = serde_json::to_string_pretty(document)?;
        File::create(&self.output_path)?.write_all(json.as_bytes())?;
        Ok(())
    }

    fn export_csv(&self, document: &ExportDocument) -> Result<()> {
        let mut wtr = csv::WriterBuilder::new().flexible(true).from_path(&self.output_path)?;

        wtr.write_record(["PosiTrack Data Export"])?;
        wtr.write_record([format!("Export Date: {}", document.export_date)])?;

        if let Some(habits) = &document.habits {
            wtr.write_record([""])?;
            wtr.write_record(["Habits"])?;
            wtr.write_record(["Name", "Goal", "Unit", "Frequency", "Creation Date"])?;
            for habit in habits {
                wtr.write_record([
                    habit.name.clone(),
                    format_amount(habit.goal),
                    habit.unit.clone(),
                    habit.frequency.clone(),
                    habit.creation_date.clone(),
                ])?;
            }
        }

        if let Some(tasks) = &document.tasks {
            wtr.write_record([""])?;
            wtr.write_record(["Tasks"])?;
            wtr.write_record(["Title", "Description", "Priority", "Completed", "Due Date"])?;
            for task in tasks {
                wtr.write_record([
                    task.title.clone(),
                    task.description.clone(),
                    task.priority.clone(),
                    task.is_completed.to_string(),
                    task.due_date.clone().unwrap_or_default(),
                ])?;
            }
        }

        if let Some(entries) = &document.mood_entries {
            wtr.write_record([""])?;
            wtr.write_record(["Mood Entries"])?;
            wtr.write_record(["Timestamp", "Category", "Subcategory", "Intensity", "Triggers", "Location", "Notes"])?;
            for entry in entries {
                wtr.write_record([
                    entry.timestamp.clone(),
                    entry.category.clone(),
                    entry.subcategory.clone(),
                    entry.intensity.to_string(),
                    entry.triggers.join("; "),
                    entry.location.clone(),
                    entry.notes.clone(),
                ])?;
            }
        }

        wtr.flush()?;
        Ok(())
    }
}
