use crate::libs::formatter::{format_hours, LogGroup};
use crate::libs::week::WeekSummary;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Renders the weekly timesheet, one table per week, most recent first.
    pub fn timesheet(weeks: &[WeekSummary]) -> Result<()> {
        for week in weeks {
            println!("\n{}  (weekly total: {}h)", week.key, format_hours(week.total_hours));

            let mut table = Table::new();
            table.add_row(row!["DAY", "CALL", "MEAL", "WRAP", "TOTAL"]);
            for log in week.logs.format() {
                table.add_row(row![log.day, log.call, log.meal, log.end, log.total]);
            }
            table.printstd();
        }

        Ok(())
    }
}
