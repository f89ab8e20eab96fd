//! Line-at-a-time ICS event parsing.
//!
//! The parser recognizes a fixed set of case-sensitive line prefixes and
//! stages at most one event at a time in a draft slot. A begin marker opens
//! the slot, property markers fill it, and the end marker commits it: events
//! with an owning user go to the [`EventStore`], entries from the holiday
//! source (no user) are applied to the [`WorkdayCalendar`] instead and never
//! reach the store. Every other line is ignored.

use crate::ics::event::{CalendarEvent, EventStore};
use crate::ics::timestamp;
use crate::libs::calendar::WorkdayCalendar;
use crate::libs::messages::Message;
use crate::{msg_debug, msg_warning};

const BEGIN_EVENT: &str = "BEGIN:VEVENT";
const END_EVENT: &str = "END:VEVENT";
const SUMMARY: &str = "SUMMARY:";
const LOCATION: &str = "LOCATION:";
const DTSTART: &str = "DTSTART:";
const DTSTART_DATE: &str = "DTSTART;VALUE=DATE:";
const DTEND: &str = "DTEND:";
const DTEND_DATE: &str = "DTEND;VALUE=DATE:";
const RRULE_YEARLY: &str = "RRULE:FREQ=YEARLY";

/// An event staged while its source lines are being consumed.
#[derive(Debug)]
struct EventDraft {
    user: Option<String>,
    subject: String,
    start: Option<i64>,
    end: Option<i64>,
    dayevent: bool,
    recurring_yearly: bool,
    onsite: bool,
}

impl EventDraft {
    fn new(user: Option<String>) -> Self {
        Self {
            user,
            subject: String::new(),
            start: None,
            end: None,
            dayevent: false,
            recurring_yearly: false,
            onsite: false,
        }
    }

    /// Validates the staged boundaries and produces the committed event.
    ///
    /// An event whose start or end never decoded, or whose start lies after
    /// its end, is discarded with a warning and never enters the store.
    fn commit(self) -> Option<CalendarEvent> {
        let (start, end) = match (self.start, self.end) {
            (Some(start), Some(end)) => (start, end),
            _ => {
                msg_warning!(Message::EventBoundaryMissing(self.subject));
                return None;
            }
        };
        if start > end {
            msg_warning!(Message::EventEndsBeforeStart(self.subject));
            return None;
        }
        Some(CalendarEvent {
            user: self.user,
            subject: self.subject,
            start,
            end,
            dayevent: self.dayevent,
            recurring_yearly: self.recurring_yearly,
            onsite: self.onsite,
        })
    }
}

/// Stateful parser for one calendar source.
#[derive(Debug)]
pub struct EventParser {
    user: Option<String>,
    draft: Option<EventDraft>,
}

impl EventParser {
    /// `user` identifies the source; `None` marks the holiday calendar.
    pub fn new(user: Option<&str>) -> Self {
        Self {
            user: user.map(str::to_owned),
            draft: None,
        }
    }

    /// Processes one logical line, mutating the store or the calendar.
    ///
    /// Protocol violations are recovered locally: a begin marker while an
    /// event is staged discards the staged one with a warning, and an end
    /// marker with nothing staged is a no-op.
    pub fn parse_line(&mut self, line: &str, store: &mut EventStore, calendar: &mut WorkdayCalendar) {
        if line.starts_with(BEGIN_EVENT) {
            if self.draft.take().is_some() {
                msg_warning!(Message::StagedEventDiscarded);
            }
            self.draft = Some(EventDraft::new(self.user.clone()));
            return;
        }

        if line.starts_with(END_EVENT) {
            if let Some(draft) = self.draft.take() {
                match draft.commit() {
                    Some(event) if event.user.is_some() => store.insert(event),
                    Some(event) => {
                        if let Err(reason) = calendar.flag_holiday(&event) {
                            msg_warning!(Message::HolidayRejected(event.subject, reason.to_string()));
                        }
                    }
                    None => {}
                }
            }
            return;
        }

        let Some(draft) = self.draft.as_mut() else {
            // Property lines outside BEGIN/END are ignored.
            return;
        };

        if let Some(subject) = line.strip_prefix(SUMMARY) {
            draft.subject = subject.to_owned();
        } else if line.starts_with(LOCATION) {
            draft.onsite = true;
        } else if line.starts_with(RRULE_YEARLY) {
            draft.recurring_yearly = true;
        } else if let Some(literal) = line.strip_prefix(DTSTART_DATE) {
            draft.start = Self::decode_boundary(literal, true);
            draft.dayevent = true;
        } else if let Some(literal) = line.strip_prefix(DTSTART) {
            draft.start = Self::decode_boundary(literal, false);
        } else if let Some(literal) = line.strip_prefix(DTEND_DATE) {
            draft.end = Self::decode_boundary(literal, true);
            draft.dayevent = true;
        } else if let Some(literal) = line.strip_prefix(DTEND) {
            draft.end = Self::decode_boundary(literal, false);
        } else {
            msg_debug!(format!("ICS: ignoring line '{}'", line));
        }
    }

    fn decode_boundary(literal: &str, dayevent: bool) -> Option<i64> {
        match timestamp::decode(literal, dayevent) {
            Ok(seconds) => Some(seconds),
            Err(reason) => {
                msg_warning!(Message::TimestampRejected(literal.to_owned(), reason.to_string()));
                None
            }
        }
    }
}
