//! Display formatting for timesheet rows.
//!
//! Pre-formats time logs into plain strings so the table view and the data
//! exporters render identical values. Hours are always shown with two
//! decimals ("8.50"), days as an abbreviated weekday plus date.

use crate::libs::timelog::TimeLog;
use serde::{Deserialize, Serialize};

/// A time log flattened to display strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormattedLog {
    /// ISO date of the entry.
    pub date: String,
    /// Human-readable day, e.g. "Mon 02 Feb".
    pub day: String,
    /// Call time, "HH:MM".
    pub call: String,
    /// Meal time with a shortened-break marker, or "-" when not recorded.
    pub meal: String,
    /// Wrap time, "HH:MM".
    pub end: String,
    /// Total hours with two decimals.
    pub total: String,
}

/// Formats a collection of time logs for display.
pub trait LogGroup {
    fn format(&self) -> Vec<FormattedLog>;
}

impl LogGroup for Vec<TimeLog> {
    fn format(&self) -> Vec<FormattedLog> {
        self.iter()
            .map(|log| FormattedLog {
                date: log.date.format("%Y-%m-%d").to_string(),
                day: log.date.format("%a %d %b").to_string(),
                call: log.call_time.clone(),
                meal: format_meal(&log.meal_time, log.has_shortened_meal),
                end: log.end_time.clone(),
                total: format_hours(log.total_hours),
            })
            .collect()
    }
}

/// Formats decimal hours with two decimals, e.g. `8.5` -> `"8.50"`.
pub fn format_hours(hours: f64) -> String {
    format!("{:.2}", hours)
}

fn format_meal(meal_time: &str, has_shortened_meal: bool) -> String {
    match (meal_time.is_empty(), has_shortened_meal) {
        (true, false) => "-".to_string(),
        (true, true) => "(30m)".to_string(),
        (false, false) => meal_time.to_string(),
        (false, true) => format!("{} (30m)", meal_time),
    }
}
