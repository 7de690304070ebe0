//! Weekly grouping of time logs.
//!
//! A pure read-side projection: logs are grouped by ISO-8601 week and the
//! per-day totals are summed per group. Nothing here is persisted; the
//! projection is recomputed on every read.

use crate::libs::timelog::TimeLog;
use anyhow::{anyhow, Result};
use chrono::{Datelike, NaiveDate};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// An ISO-8601 week identifier.
///
/// The ISO year can differ from the calendar year around January 1st: the
/// week containing a Thursday determines its year/week pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WeekKey {
    pub iso_year: i32,
    pub week: u32,
}

impl WeekKey {
    /// The week a date falls in.
    pub fn of(date: NaiveDate) -> Self {
        let iso = date.iso_week();
        Self {
            iso_year: iso.year(),
            week: iso.week(),
        }
    }

    /// The current local week.
    pub fn current() -> Self {
        Self::of(chrono::Local::now().date_naive())
    }

    /// Whether the given date belongs to this week.
    pub fn contains(&self, date: NaiveDate) -> bool {
        Self::of(date) == *self
    }
}

impl fmt::Display for WeekKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-W{:02}", self.iso_year, self.week)
    }
}

impl FromStr for WeekKey {
    type Err = anyhow::Error;

    /// Parses a "YYYY-Wnn" week key, e.g. `2026-W31`.
    fn from_str(value: &str) -> Result<Self> {
        let (year, week) = value
            .split_once("-W")
            .ok_or_else(|| anyhow!("invalid week '{}', expected YYYY-Wnn", value))?;
        let iso_year: i32 = year.parse().map_err(|_| anyhow!("invalid week year in '{}'", value))?;
        let week: u32 = week.parse().map_err(|_| anyhow!("invalid week number in '{}'", value))?;
        if !(1..=53).contains(&week) {
            return Err(anyhow!("week number out of range in '{}'", value));
        }
        Ok(Self { iso_year, week })
    }
}

/// One week of logs with its summed total.
#[derive(Debug, Clone)]
pub struct WeekSummary {
    pub key: WeekKey,
    pub total_hours: f64,
    /// Logs of the week in ascending date order.
    pub logs: Vec<TimeLog>,
}

/// Groups a flat list of time logs into weekly summaries.
pub trait WeekGrouping {
    /// Returns one summary per ISO week, most recent week first. Within a
    /// week the logs are ordered by ascending date.
    fn group_by_week(self) -> Vec<WeekSummary>;
}

impl WeekGrouping for Vec<TimeLog> {
    fn group_by_week(self) -> Vec<WeekSummary> {
        let mut weeks: BTreeMap<WeekKey, WeekSummary> = BTreeMap::new();

        for log in self {
            let key = WeekKey::of(log.date);
            let summary = weeks.entry(key).or_insert_with(|| WeekSummary {
                key,
                total_hours: 0.0,
                logs: Vec::new(),
            });
            summary.total_hours += log.total_hours;
            summary.logs.push(log);
        }

        let mut summaries: Vec<WeekSummary> = weeks.into_values().rev().collect();
        for summary in &mut summaries {
            summary.logs.sort_by_key(|log| log.date);
        }
        summaries
    }
}
