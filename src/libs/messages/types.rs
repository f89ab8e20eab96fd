#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigModuleGeneral,
    RateOutOfRange(f64),
    PromptFetchUser,
    PromptFetchPassword,
    PromptHolidayUrl,
    PromptAddUser,
    PromptUserName,
    PromptUserCal,
    PromptUserVacation,
    PromptUserMonthHours,
    PromptAddProject,
    PromptProjectName,
    PromptProjectOnsite,
    PromptProjectRemote,
    NoUsersConfigured,
    NoProjectsConfigured,

    // === PARSER MESSAGES ===
    StagedEventDiscarded,
    EventBoundaryMissing(String), // subject
    EventEndsBeforeStart(String), // subject
    TimestampRejected(String, String), // literal, reason
    HolidayRejected(String, String), // subject, reason

    // === FETCH MESSAGES ===
    FetchFailed(String),             // url
    FetchHttpStatus(String, String), // url, status
    HolidayCalendarFetchFailed,
    UserCalendarFetchFailed(String), // user
}
