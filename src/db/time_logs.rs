//! Time log persistence.
//!
//! Stores daily [`TimeLog`] records keyed by their composite id. Saving an
//! entry replaces any previous record with the same id wholesale, which is
//! what gives the entry form its one-log-per-day semantics. Access goes
//! through the narrow [`TimeLogStore`] trait so the calculator and weekly
//! aggregation can be exercised against any backend in tests.

use crate::db::db::Db;
use crate::libs::timelog::TimeLog;
use anyhow::Result;
use chrono::NaiveDate;
use rusqlite::{params, OptionalExtension, Row};

const UPSERT: &str = "INSERT OR REPLACE INTO time_logs
    (id, user_id, user_name, department, date, call_time, meal_time, end_time, has_shortened_meal, total_hours)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)";
const SELECT_BY_ID: &str = "SELECT id, user_id, user_name, department, date, call_time, meal_time, end_time, has_shortened_meal, total_hours
    FROM time_logs WHERE id = ?1";
const SELECT_BY_USER: &str = "SELECT id, user_id, user_name, department, date, call_time, meal_time, end_time, has_shortened_meal, total_hours
    FROM time_logs WHERE user_id = ?1 ORDER BY date";
const DELETE_BY_ID: &str = "DELETE FROM time_logs WHERE id = ?1";

/// Narrow persistence interface for time log records.
///
/// Keyed `get`/`put`/`delete` with replace-by-id semantics on `put`.
pub trait TimeLogStore {
    fn get(&mut self, id: &str) -> Result<Option<TimeLog>>;
    fn put(&mut self, log: &TimeLog) -> Result<()>;
    fn delete(&mut self, id: &str) -> Result<()>;
}

/// SQLite-backed time log store.
pub struct TimeLogs {
    db: Db,
}

impl TimeLogs {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        Ok(Self { db })
    }

    /// All logs of a user in ascending date order.
    pub fn fetch_user(&mut self, user_id: &str) -> Result<Vec<TimeLog>> {
        let mut stmt = self.db.conn.prepare(SELECT_BY_USER)?;
        let rows = stmt.query_map([user_id], Self::row_to_log)?;

        let mut logs = Vec::new();
        for log in rows {
            logs.push(log?);
        }
        Ok(logs)
    }

    fn row_to_log(row: &Row<'_>) -> rusqlite::Result<TimeLog> {
        Ok(TimeLog {
            id: row.get(0)?,
            user_id: row.get(1)?,
            user_name: row.get(2)?,
            department: row.get(3)?,
            date: row.get::<_, NaiveDate>(4)?,
            call_time: row.get(5)?,
            meal_time: row.get(6)?,
            end_time: row.get(7)?,
            has_shortened_meal: row.get(8)?,
            total_hours: row.get(9)?,
        })
    }
}

impl TimeLogStore for TimeLogs {
    fn get(&mut self, id: &str) -> Result<Option<TimeLog>> {
        let log = self
            .db
            .conn
            .query_row(SELECT_BY_ID, [id], Self::row_to_log)
            .optional()?;
        Ok(log)
    }

    fn put(&mut self, log: &TimeLog) -> Result<()> {
        self.db.conn.execute(
            UPSERT,
            params![
                log.id,
                log.user_id,
                log.user_name,
                log.department,
                log.date,
                log.call_time,
                log.meal_time,
                log.end_time,
                log.has_shortened_meal,
                log.total_hours,
            ],
        )?;
        Ok(())
    }

    fn delete(&mut self, id: &str) -> Result<()> {
        self.db.conn.execute(DELETE_BY_ID, [id])?;
        Ok(())
    }
}
