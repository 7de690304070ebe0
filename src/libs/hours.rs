//! Work-hours calculation for daily timesheet entries.
//!
//! Computes the billable hours of a shooting day from the call (convocation)
//! and wrap times recorded on the daily entry form. The calculation follows
//! the production timesheet rules:
//!
//! - Times are "HH:MM" 24-hour clock strings as entered on the form.
//! - A wrap time earlier than the call time means the shift crossed midnight
//!   and the wrap belongs to the next day.
//! - A fixed meal break is deducted from every day: 60 minutes for a standard
//!   break, 30 minutes when the break was shortened.
//! - The result is never negative; incomplete input yields zero hours rather
//!   than an error, so a half-filled form previews as "0.00" instead of
//!   failing.

/// Minutes deducted for a standard meal break.
const STANDARD_MEAL_MINUTES: i64 = 60;

/// Minutes deducted for a shortened meal break.
const SHORTENED_MEAL_MINUTES: i64 = 30;

/// Minutes in a full day, added to the wrap time of an overnight shift.
const MINUTES_PER_DAY: i64 = 1440;

/// Parses an "HH:MM" 24-hour clock string into minutes since midnight.
///
/// Returns `None` for empty or malformed values, including out-of-range
/// hour or minute components.
pub fn clock_minutes(value: &str) -> Option<i64> {
    let (hours, minutes) = value.split_once(':')?;
    let hours: i64 = hours.parse().ok()?;
    let minutes: i64 = minutes.parse().ok()?;
    if !(0..24).contains(&hours) || !(0..60).contains(&minutes) {
        return None;
    }
    Some(hours * 60 + minutes)
}

/// Computes the total worked hours for a single day.
///
/// `call_time` and `end_time` are "HH:MM" strings; if either is missing or
/// malformed the function returns `0.0`. A wrap earlier than the call is
/// treated as next-day wrap unconditionally. The meal deduction is applied
/// whether or not a meal time was recorded.
///
/// # Examples
///
/// ```
/// use wraptime::libs::hours::compute_hours;
///
/// // 9 hour span minus the standard 60 minute meal break
/// assert_eq!(compute_hours("09:00", "13:00", "18:00", false), 8.0);
/// // Overnight wrap: 22:00 to 06:00 next day, minus 60 minutes
/// assert_eq!(compute_hours("22:00", "02:00", "06:00", false), 7.0);
/// ```
pub fn compute_hours(call_time: &str, meal_time: &str, end_time: &str, has_shortened_meal: bool) -> f64 {
    // The recorded meal time is informational only; the deduction is driven
    // by the shortened-meal flag alone.
    let _ = meal_time;

    let (Some(start), Some(end)) = (clock_minutes(call_time), clock_minutes(end_time)) else {
        return 0.0;
    };

    // A wrap before the call crossed midnight.
    let end = if end < start { end + MINUTES_PER_DAY } else { end };

    let deduction = if has_shortened_meal { SHORTENED_MEAL_MINUTES } else { STANDARD_MEAL_MINUTES };
    let duration = end - start - deduction;

    duration.max(0) as f64 / 60.0
}
