//! Database layer for the wraptime application.
//!
//! SQLite-backed persistence with a versioned migration system. The only
//! entity stored locally is the daily time log; everything else (session
//! tokens, configuration) lives as plain files in the data directory.

/// Core database connection and initialization module.
pub mod db;

/// Database schema migration system.
pub mod migrations;

/// Daily time log storage with replace-by-id semantics.
pub mod time_logs;
