//! Display implementation for wraptime application messages.
//!
//! Central conversion of structured [`Message`] values into the text shown
//! to the user. Keeping every user-facing string in one place keeps wording
//! consistent across commands and leaves room for future localization.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigParseError => "Failed to parse configuration file".to_string(),
            Message::ConfigIdentityMissing => "No crew identity configured. Run 'wraptime init' first".to_string(),
            Message::ConfigOfficeMissing => "No production office configured. Run 'wraptime init' first".to_string(),

            // === TIME LOG MESSAGES ===
            Message::TimeLogSaved(date, total) => format!("Time log for {} saved: {}h", date, total),
            Message::TimeLogDeleted(date) => format!("Time log for {} deleted", date),
            Message::TimeLogNotFound(date) => format!("No time log found for {}", date),
            Message::ConfirmDeleteLog(date) => format!("Delete the time log for {}?", date),
            Message::DeleteCancelled => "Deletion cancelled".to_string(),
            Message::InvalidClockTime(value) => format!("Invalid time '{}', expected HH:MM", value),
            Message::TimesheetTitle(name) => format!("Timesheet for {}", name),
            Message::NoTimeLogs => "No hours recorded yet. Use 'wraptime log' to add a day".to_string(),

            // === EXPORT MESSAGES ===
            Message::ExportCompleted(path) => format!("Timesheet exported to: {}", path),
            Message::ExportEmpty => "Nothing to export".to_string(),

            // === SUBMISSION MESSAGES ===
            Message::SubmitSuccess(week) => format!("Week {} submitted to the production office", week),
            Message::SubmitFailed(status) => format!("Submission failed with status: {}", status),
            Message::SubmitNoLogs(week) => format!("No time logs recorded for week {}", week),
            Message::InvalidWeek(value) => format!("Invalid week '{}', expected YYYY-Wnn", value),

            // === ATTACHMENT MESSAGES ===
            Message::AttachmentUploaded(name, date) => format!("Attachment '{}' uploaded for {}", name, date),
            Message::AttachmentUploadFailed(status) => format!("Attachment upload failed with status: {}", status),
            Message::AttachmentSaved(path) => format!("Compressed attachment written to: {}", path),

            // === SESSION MESSAGES ===
            Message::LoginSuccess => "Signed in to the production office".to_string(),
            Message::LogoutSuccess => "Office session cleared".to_string(),
            Message::WrongPassword(count) => format!("Authentication failed after {} attempts", count),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending database migration(s)", count),
            Message::RunningMigration(version, name) => format!("Applying migration {}: {}", version, name),
            Message::MigrationCompleted(version) => format!("Migration {} applied", version),
            Message::MigrationFailed(version, error) => format!("Migration {} failed: {}", version, error),
            Message::AllMigrationsCompleted => "Database schema is up to date".to_string(),
        };
        write!(f, "{}", text)
    }
}
