//! Timesheet export command.
//!
//! Writes the weekly-grouped timesheet to CSV, JSON or Excel for the
//! production accountant or external analysis.

use crate::db::time_logs::TimeLogs;
use crate::libs::config::Config;
use crate::libs::export::{ExportFormat, Exporter};
use crate::libs::messages::Message;
use crate::libs::week::WeekGrouping;
use crate::msg_success;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// Command-line arguments for the export command.
#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Output format for the exported timesheet
    #[arg(short, long, value_enum, default_value = "csv")]
    format: ExportFormat,

    /// Custom output file path
    ///
    /// Defaults to a timestamped file name in the current directory, e.g.
    /// `wraptime_timesheet_20260807_143022.csv`.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

/// Exports the full timesheet of the configured user.
pub fn cmd(args: ExportArgs) -> Result<()> {
    let config = Config::read()?;
    let identity = config.require_identity()?;

    let logs = TimeLogs::new()?.fetch_user(&identity.email)?;
    let weeks = logs.group_by_week();

    let path = Exporter::new(args.format, args.output).export(&weeks)?;
    msg_success!(Message::ExportCompleted(path.display().to_string()));

    Ok(())
}
