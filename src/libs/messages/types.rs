#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigParseError,
    ConfigIdentityMissing,
    ConfigOfficeMissing,

    // === TIME LOG MESSAGES ===
    TimeLogSaved(String, String),    // date, total hours
    TimeLogDeleted(String),          // date
    TimeLogNotFound(String),         // date
    ConfirmDeleteLog(String),        // date
    DeleteCancelled,
    InvalidClockTime(String),        // raw value
    TimesheetTitle(String),          // user name
    NoTimeLogs,

    // === EXPORT MESSAGES ===
    ExportCompleted(String), // path
    ExportEmpty,

    // === SUBMISSION MESSAGES ===
    SubmitSuccess(String),       // week
    SubmitFailed(String),        // status
    SubmitNoLogs(String),        // week
    InvalidWeek(String),         // raw value

    // === ATTACHMENT MESSAGES ===
    AttachmentUploaded(String, String), // file name, date
    AttachmentUploadFailed(String),     // status
    AttachmentSaved(String),            // path

    // === SESSION MESSAGES ===
    LoginSuccess,
    LogoutSuccess,
    WrongPassword(i32), // retry count

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),
    RunningMigration(u32, String), // version, name
    MigrationCompleted(u32),       // version
    MigrationFailed(u32, String),  // version, error
    AllMigrationsCompleted,
}
