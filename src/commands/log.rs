//! Daily time log entry command.
//!
//! The CLI counterpart of the daily entry form: call time, optional meal
//! time, wrap time and the shortened-meal flag for one date. The total is
//! derived at save time and the record replaces any previous log for the
//! same day.

use crate::commands::parse_date;
use crate::db::time_logs::{TimeLogStore, TimeLogs};
use crate::libs::config::Config;
use crate::libs::formatter::format_hours;
use crate::libs::hours::clock_minutes;
use crate::libs::messages::Message;
use crate::libs::timelog::TimeLog;
use crate::{msg_bail_anyhow, msg_success};
use anyhow::Result;
use clap::Args;

/// Command-line arguments for the log command.
#[derive(Debug, Args)]
pub struct LogArgs {
    /// Date of the shooting day
    ///
    /// Accepts 'YYYY-MM-DD' or the keyword 'today'. Logging a date that
    /// already has an entry replaces the previous entry wholesale.
    #[arg(long, short, default_value = "today", help = "Date of the entry (YYYY-MM-DD or 'today')")]
    date: String,

    /// Call (convocation) time
    #[arg(long, short, help = "Call time (HH:MM)")]
    call: String,

    /// Meal break time
    ///
    /// Recorded for the production office but informational only: the meal
    /// deduction depends on the shortened flag, not on this value.
    #[arg(long, short, help = "Meal time (HH:MM)")]
    meal: Option<String>,

    /// Wrap time
    ///
    /// A wrap earlier than the call is treated as ending on the next day.
    #[arg(long, short, help = "Wrap time (HH:MM)")]
    end: String,

    /// Shortened meal break
    ///
    /// Deducts 30 minutes instead of the standard 60.
    #[arg(long, help = "Meal break shortened to 30 minutes")]
    shortened_meal: bool,
}

/// Saves (or replaces) the time log for a day and prints the derived total.
pub fn cmd(args: LogArgs) -> Result<()> {
    let date = parse_date(&args.date)?;
    let meal_time = args.meal.unwrap_or_default();

    // Reject malformed clock strings at the edge; the calculator itself
    // degrades them to zero hours.
    for value in [&args.call, &args.end] {
        if clock_minutes(value).is_none() {
            msg_bail_anyhow!(Message::InvalidClockTime(value.clone()));
        }
    }
    if !meal_time.is_empty() && clock_minutes(&meal_time).is_none() {
        msg_bail_anyhow!(Message::InvalidClockTime(meal_time));
    }

    let config = Config::read()?;
    let identity = config.require_identity()?;

    let log = TimeLog::new(identity, date, &args.call, &meal_time, &args.end, args.shortened_meal);
    TimeLogs::new()?.put(&log)?;

    msg_success!(Message::TimeLogSaved(
        date.format("%Y-%m-%d").to_string(),
        format_hours(log.total_hours)
    ));
    Ok(())
}
