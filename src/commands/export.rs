//! `positrack export`: writes habits, tasks and mood entries to JSON or CSV.

use crate::{
    db::{habits::Habits, tasks::Tasks},
    libs::{
        export::{ExportData, ExportFormat, ExportSnapshot, Exporter},
        messages::Message,
        mood_store::MoodStore,
    },
    msg_info,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Sections to export, any combination; all of them when omitted
    #[arg(value_enum)]
    data: Vec<ExportData>,

    #[arg(short, long, value_enum, default_value = "json")]
    format: ExportFormat,

    /// Defaults to positrack_export_<timestamp>.<ext> in the current directory
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub async fn cmd(args: ExportArgs) -> Result<()> {
    msg_info!(Message::ExportingData(args.format.as_str().to_string()));

    let snapshot = ExportSnapshot {
        habits: Habits::new()?.list()?,
        tasks: Tasks::new()?.all()?,
        mood_entries: MoodStore::new()?.entries().to_vec(),
    };

    Exporter::new(args.format, args.output).export(&snapshot, &args.data)?;
    Ok(())
}
