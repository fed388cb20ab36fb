//! Command-line interface.
//!
//! Each subcommand lives in its own module exposing an `Args` struct and a
//! `cmd` entry point.

pub mod export;
pub mod focus;
pub mod habit;
pub mod init;
#[cfg(debug_assertions)]
pub mod migrations;
pub mod mood;
pub mod stats;
pub mod task;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Manage habits and log progress")]
    Habit(habit::HabitArgs),
    #[command(about = "Manage the to-do list")]
    Task(task::TaskArgs),
    #[command(about = "Mood journal")]
    Mood(mood::MoodArgs),
    #[command(about = "Focus timer")]
    Focus(focus::FocusArgs),
    #[command(about = "Overview across habits, tasks, mood and focus")]
    Stats(stats::StatsArgs),
    #[command(about = "Export data to JSON or CSV")]
    Export(export::ExportArgs),
    #[cfg(debug_assertions)]
    #[command(about = "Inspect database migrations")]
    Migrations(migrations::MigrationsArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Habit(args) => habit::cmd(args).await,
            Commands::Task(args) => task::cmd(args).await,
            Commands::Mood(args) => mood::cmd(args).await,
            Commands::Focus(args) => focus::cmd(args).await,
            Commands::Stats(args) => stats::cmd(args).await,
            Commands::Export(args) => export::cmd(args).await,
            #[cfg(debug_assertions)]
            Commands::Migrations(args) => migrations::cmd(args),
        }
    }
}
