//! Display implementation for calstat application messages.
//!
//! Single source of truth for all user-facing message text; the `Message`
//! variants carry their parameters and are rendered here.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigModuleGeneral => "General settings".to_string(),
            Message::RateOutOfRange(rate) => {
                format!("Hourly rate {} does not fit in fixed-point hundredths", rate)
            }
            Message::PromptFetchUser => "Fetch auth user (empty for none)".to_string(),
            Message::PromptFetchPassword => "Fetch auth password (empty for none)".to_string(),
            Message::PromptHolidayUrl => "Public holiday calendar URL (empty for none)".to_string(),
            Message::PromptAddUser => "Add a user?".to_string(),
            Message::PromptUserName => "User name".to_string(),
            Message::PromptUserCal => "User calendar URL".to_string(),
            Message::PromptUserVacation => "Annual vacation days".to_string(),
            Message::PromptUserMonthHours => "Monthly contract hours".to_string(),
            Message::PromptAddProject => "Add a project?".to_string(),
            Message::PromptProjectName => "Project name".to_string(),
            Message::PromptProjectOnsite => "Onsite hourly rate".to_string(),
            Message::PromptProjectRemote => "Remote hourly rate".to_string(),
            Message::NoUsersConfigured => "No users configured, run 'calstat init' first".to_string(),
            Message::NoProjectsConfigured => "No projects configured, run 'calstat init' first".to_string(),

            // === PARSER MESSAGES ===
            Message::StagedEventDiscarded => "Staging slot is in use, cleaning up for new calendar entry".to_string(),
            Message::EventBoundaryMissing(subject) => {
                format!("Event '{}' has no usable start or end, skipping", subject)
            }
            Message::EventEndsBeforeStart(subject) => {
                format!("Event '{}' ends before it starts, skipping", subject)
            }
            Message::TimestampRejected(literal, reason) => {
                format!("Cannot decode timestamp '{}': {}", literal, reason)
            }
            Message::HolidayRejected(subject, reason) => {
                format!("Holiday '{}' rejected: {}", subject, reason)
            }

            // === FETCH MESSAGES ===
            Message::FetchFailed(url) => format!("Failed to fetch calendar from {}", url),
            Message::FetchHttpStatus(url, status) => {
                format!("Calendar fetch from {} answered {}", url, status)
            }
            Message::HolidayCalendarFetchFailed => "Failed to fetch public holiday calendar".to_string(),
            Message::UserCalendarFetchFailed(user) => {
                format!("Failed to fetch calendar for user '{}'", user)
            }
        };
        write!(f, "{}", text)
    }
}
