//! # Wraptime - Production Timesheet Tracking
//!
//! A command-line utility for film and TV crews to record daily working
//! hours and report them to the production office.
//!
//! ## Features
//!
//! - **Daily Entry**: Record call, meal and wrap times; totals are derived
//!   with meal-break deduction and overnight-wrap handling
//! - **Weekly Summaries**: Hours grouped by ISO week, most recent first
//! - **Data Export**: CSV, JSON and Excel timesheets for accounting
//! - **Office Submission**: Send a week of logs to the production office API
//! - **Attachments**: Downscale and upload call sheets and receipts
//! - **Session Management**: Cached office sessions with encrypted
//!   credential storage
//!
//! ## Usage
//!
//! ```rust,no_run
//! use wraptime::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod db;
pub mod libs;
