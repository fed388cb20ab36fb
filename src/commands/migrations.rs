//! Debug-only database schema inspection.

use crate::{
    db::{
        db::Db,
        migrations::{get_db_version, needs_migration, MigrationManager},
    },
    libs::{messages::Message, view::View},
    msg_info, msg_print,
};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct MigrationsArgs {
    #[command(subcommand)]
    command: MigrationsCommand,
}

#[derive(Debug, Subcommand)]
enum MigrationsCommand {
    /// Current schema version and whether migrations are pending
    Status,
    /// Applied migrations
    History,
    /// Forget migrations above a version so they run again on next start
    Rollback { version: u32 },
}

pub fn cmd(args: MigrationsArgs) -> Result<()> {
    let mut conn = Db::new_without_migrations()?;
    let manager = MigrationManager::new();

    match args.command {
        MigrationsCommand::Status => {
            let version = get_db_version(&conn)?;
            msg_print!(Message::DbVersion(version));
            if needs_migration(&conn)? {
                msg_info!(Message::MigrationsPending);
            } else {
                msg_info!(Message::MigrationsUpToDate);
            }
        }
        MigrationsCommand::History => {
            let history = manager.get_migration_history(&conn)?;
            if history.is_empty() {
                msg_info!(Message::NoMigrationsApplied);
                return Ok(());
            }
            msg_print!(Message::MigrationHistoryHeader, true);
            View::migration_history(&history)?;
        }
        MigrationsCommand::Rollback { version } => manager.rollback_to(&mut conn, version)?,
    }

    Ok(())
}
