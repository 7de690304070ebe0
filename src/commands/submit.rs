//! Weekly timesheet submission command.
//!
//! Sends one week of logs to the production office API as JSON. The office
//! stores them in its own document database; this side only cares about the
//! response status.

use crate::api::office::Office;
use crate::db::time_logs::TimeLogs;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::timelog::TimeLog;
use crate::libs::week::WeekKey;
use crate::{msg_error, msg_error_anyhow, msg_success, msg_warning};
use anyhow::Result;
use clap::Args;

/// Command-line arguments for the submit command.
#[derive(Debug, Args)]
pub struct SubmitArgs {
    /// Week to submit
    ///
    /// ISO week key such as '2026-W31'. Defaults to the current week.
    #[arg(long, short, help = "Week to submit (YYYY-Wnn, defaults to the current week)")]
    week: Option<String>,
}

/// Submits a week of logs to the production office.
pub async fn cmd(args: SubmitArgs) -> Result<()> {
    let week = match &args.week {
        Some(raw) => raw
            .parse::<WeekKey>()
            .map_err(|_| msg_error_anyhow!(Message::InvalidWeek(raw.clone())))?,
        None => WeekKey::current(),
    };

    let config = Config::read()?;
    let identity = config.require_identity()?;
    let office = config.require_office()?;

    let logs: Vec<TimeLog> = TimeLogs::new()?
        .fetch_user(&identity.email)?
        .into_iter()
        .filter(|log| week.contains(log.date))
        .collect();

    if logs.is_empty() {
        msg_warning!(Message::SubmitNoLogs(week.to_string()));
        return Ok(());
    }

    let status = Office::new(office, &identity.email).submit_week(&week, &logs).await?;
    if status.is_success() {
        msg_success!(Message::SubmitSuccess(week.to_string()));
    } else {
        msg_error!(Message::SubmitFailed(status.to_string()));
    }

    Ok(())
}
