//! The daily time log record.

use crate::libs::config::IdentityConfig;
use crate::libs::hours::compute_hours;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single day of recorded hours for one crew member.
///
/// Saving an entry for a date that already has a log replaces the previous
/// record wholesale; there is at most one log per (user, date) pair and no
/// history of overwritten values is kept.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeLog {
    /// Derived key: `{date}_{user_id}`.
    pub id: String,
    /// Email of the crew member the log belongs to.
    pub user_id: String,
    /// Display name snapshot taken at save time.
    pub user_name: String,
    /// Department snapshot taken at save time.
    pub department: String,
    /// Calendar date of the shooting day.
    pub date: NaiveDate,
    /// Call (convocation) time, "HH:MM".
    pub call_time: String,
    /// Meal break time, "HH:MM"; empty when no meal was recorded.
    pub meal_time: String,
    /// Whether the meal break was shortened to 30 minutes.
    pub has_shortened_meal: bool,
    /// Wrap time, "HH:MM".
    pub end_time: String,
    /// Derived total, recomputed on every save and never edited directly.
    pub total_hours: f64,
}

impl TimeLog {
    /// Builds the composite key for a (user, date) pair.
    pub fn log_id(date: NaiveDate, user_id: &str) -> String {
        format!("{}_{}", date.format("%Y-%m-%d"), user_id)
    }

    /// Creates a log for the given identity and form fields, deriving the
    /// id and the total hours.
    pub fn new(
        identity: &IdentityConfig,
        date: NaiveDate,
        call_time: &str,
        meal_time: &str,
        end_time: &str,
        has_shortened_meal: bool,
    ) -> Self {
        let total_hours = compute_hours(call_time, meal_time, end_time, has_shortened_meal);
        Self {
            id: Self::log_id(date, &identity.email),
            user_id: identity.email.clone(),
            user_name: identity.name.clone(),
            department: identity.department.clone(),
            date,
            call_time: call_time.to_string(),
            meal_time: meal_time.to_string(),
            has_shortened_meal,
            end_time: end_time.to_string(),
            total_hours,
        }
    }
}
