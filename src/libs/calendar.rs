//! Per-day-of-year workday classification for one report year.
//!
//! The calendar starts as a plain weekday table computed from January 1 and
//! is then overridden day by day while the public-holiday source is parsed.
//! Day index 365 only exists in leap years; in other years that slot is
//! marked not applicable and never counted.

use crate::ics::event::CalendarEvent;
use crate::libs::period::{self, ReportPeriod};
use crate::msg_debug;
use anyhow::Result;
use chrono::Datelike;
use thiserror::Error;

/// Classification of one day of the year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayKind {
    /// 0 = Sunday … 6 = Saturday.
    Weekday(u8),
    /// Overridden by the public-holiday calendar.
    Holiday,
    /// Day 366 of a non-leap year; not a real day.
    NotApplicable,
}

impl DayKind {
    /// Monday through Friday, not overridden by a holiday.
    pub fn is_workday(self) -> bool {
        matches!(self, DayKind::Weekday(code) if (1..=5).contains(&code))
    }
}

/// Reasons a holiday entry is rejected without touching the table.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HolidayError {
    #[error("holiday is not a dayevent")]
    NotDayEvent,
    #[error("holiday has begin after end")]
    EndBeforeStart,
}

/// The workday table for exactly one year, plus that year's bounds.
#[derive(Debug)]
pub struct WorkdayCalendar {
    days: [DayKind; 366],
    begin: i64,
    end: i64,
}

impl WorkdayCalendar {
    /// Builds the weekday table for `year` and records its local bounds.
    pub fn new(year: i32) -> Result<Self> {
        let (begin, end) = ReportPeriod { year, month: None }.year_bounds()?;
        let january_first = period::local_datetime(begin)?;
        let offset = january_first.weekday().num_days_from_sunday();

        let mut days = [DayKind::NotApplicable; 366];
        for (index, day) in days.iter_mut().enumerate() {
            *day = DayKind::Weekday(((index as u32 + offset) % 7) as u8);
        }
        if period::local_datetime(end - 1)?.ordinal0() != 365 {
            days[365] = DayKind::NotApplicable;
        }

        Ok(Self { days, begin, end })
    }

    /// `[begin, end)` of the calendar year, local time.
    pub fn year_bounds(&self) -> (i64, i64) {
        (self.begin, self.end)
    }

    /// Classification of the day at `index` (0-based day of year).
    pub fn day(&self, index: usize) -> DayKind {
        self.days[index]
    }

    /// Applies a committed holiday entry to the table.
    ///
    /// Only date-only entries are accepted. Entries that are not yearly
    /// recurring and lie entirely outside the report year are skipped
    /// silently. The flagged range is `[start day, end day)` by day-of-year
    /// index; an empty or inverted range is rejected unless it wraps from
    /// the end of one year to day 0 of the next, which flags nothing.
    pub fn flag_holiday(&mut self, event: &CalendarEvent) -> Result<(), HolidayError> {
        if !event.dayevent {
            return Err(HolidayError::NotDayEvent);
        }

        if !event.recurring_yearly && (event.start >= self.end || event.end < self.begin) {
            return Ok(());
        }

        let begin = period::local_datetime(event.start).map_err(|_| HolidayError::EndBeforeStart)?;
        let end = period::local_datetime(event.end).map_err(|_| HolidayError::EndBeforeStart)?;
        let begin_day = begin.ordinal0() as usize;
        let end_day = end.ordinal0() as usize;

        let wraps = end_day == 0 && begin.year() + 1 == end.year();
        if begin_day >= end_day && !wraps {
            return Err(HolidayError::EndBeforeStart);
        }

        for index in begin_day..end_day {
            msg_debug!(format!("day {} of the year marked as holiday ({})", index, event.subject));
            self.days[index] = DayKind::Holiday;
        }
        Ok(())
    }

    /// Counts workdays over the inclusive day-of-year range of two local
    /// timestamps.
    pub fn workdays_between(&self, begin: i64, end: i64) -> u16 {
        let Ok(begin_day) = period::local_datetime(begin).map(|dt| dt.ordinal0() as usize) else {
            return 0;
        };
        let Ok(end_day) = period::local_datetime(end).map(|dt| dt.ordinal0() as usize) else {
            return 0;
        };

        let count = (begin_day..=end_day.min(365)).filter(|&index| self.days[index].is_workday()).count() as u16;
        msg_debug!(format!(
            "period day {}..={} has {} workdays",
            begin_day, end_day, count
        ));
        count
    }
}
