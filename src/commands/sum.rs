use crate::db::time_logs::TimeLogs;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::libs::week::WeekGrouping;
use crate::{msg_info, msg_print};
use anyhow::Result;

/// Prints the weekly hour summaries for the configured user, most recent
/// week first.
pub fn cmd() -> Result<()> {
    let config = Config::read()?;
    let identity = config.require_identity()?;

    let logs = TimeLogs::new()?.fetch_user(&identity.email)?;
    if logs.is_empty() {
        msg_info!(Message::NoTimeLogs);
        return Ok(());
    }

    let weeks = logs.group_by_week();

    msg_print!(Message::TimesheetTitle(identity.name.clone()), true);
    View::timesheet(&weeks)?;

    Ok(())
}
