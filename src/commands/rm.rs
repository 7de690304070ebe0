//! Time log deletion command.
//!
//! Removes the log of a single day after explicit confirmation. Deletion is
//! final: there is no history, so an overwritten or deleted entry cannot be
//! recovered.

use crate::commands::parse_date;
use crate::db::time_logs::{TimeLogStore, TimeLogs};
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::timelog::TimeLog;
use crate::{msg_print, msg_success, msg_warning};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

/// Command-line arguments for the rm command.
#[derive(Debug, Args)]
pub struct RmArgs {
    /// Date of the entry to delete
    #[arg(long, short, default_value = "today", help = "Date of the entry (YYYY-MM-DD or 'today')")]
    date: String,

    /// Skip the confirmation prompt
    #[arg(long, short, help = "Delete without asking for confirmation")]
    yes: bool,
}

/// Deletes the time log for a day after confirmation.
pub fn cmd(args: RmArgs) -> Result<()> {
    let date = parse_date(&args.date)?;
    let date_str = date.format("%Y-%m-%d").to_string();

    let config = Config::read()?;
    let identity = config.require_identity()?;
    let id = TimeLog::log_id(date, &identity.email);

    let mut store = TimeLogs::new()?;
    if store.get(&id)?.is_none() {
        msg_warning!(Message::TimeLogNotFound(date_str));
        return Ok(());
    }

    if !args.yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteLog(date_str.clone()).to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            msg_print!(Message::DeleteCancelled);
            return Ok(());
        }
    }

    store.delete(&id)?;
    msg_success!(Message::TimeLogDeleted(date_str));
    Ok(())
}
