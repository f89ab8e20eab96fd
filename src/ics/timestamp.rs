//! Decoding of ICS date and date-time literals into absolute timestamps.
//!
//! ICS feeds carry boundaries either as `yyyymmdd` (all-day events) or as
//! `yyyymmddThhmmss` with an optional trailing `Z`. Both forms are
//! interpreted in the local timezone of the reporting host; a `Z` suffix is
//! compensated with the host's UTC offset only, not with a calendar-declared
//! timezone.

use chrono::{Local, NaiveDate, Offset, TimeZone};
use thiserror::Error;

/// Reasons a timestamp literal is rejected.
///
/// A rejected boundary leaves the owning event without a usable start or
/// end, which causes the event to be discarded when its end marker is seen.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimestampError {
    #[error("timestamp is shorter than yyyymmdd")]
    TooShort,
    #[error("timestamp field is not numeric")]
    InvalidField,
    #[error("timestamp does not name a valid date or time")]
    OutOfRange,
}

fn field(ts: &str, range: std::ops::Range<usize>) -> Result<u32, TimestampError> {
    ts.get(range)
        .ok_or(TimestampError::TooShort)?
        .parse::<u32>()
        .map_err(|_| TimestampError::InvalidField)
}

/// Decodes an ICS date or date-time literal into UNIX seconds.
///
/// `dayevent` marks the caller's expectation of a date-only value; any
/// time-of-day part is then ignored and the result is local midnight.
/// A timed literal with a trailing `Z` is corrected by the local UTC
/// offset of the reporting host.
pub fn decode(ts: &str, dayevent: bool) -> Result<i64, TimestampError> {
    if ts.len() < "yyyymmdd".len() {
        return Err(TimestampError::TooShort);
    }

    let year = field(ts, 0..4)? as i32;
    let month = field(ts, 4..6)?;
    let day = field(ts, 6..8)?;
    let date = NaiveDate::from_ymd_opt(year, month, day).ok_or(TimestampError::OutOfRange)?;

    let timed = !dayevent && ts.len() >= "yyyymmddThhmmss".len() && ts.as_bytes()[8] == b'T';
    let (hour, min, sec) = if timed {
        (field(ts, 9..11)?, field(ts, 11..13)?, field(ts, 13..15)?)
    } else {
        (0, 0, 0)
    };

    let naive = date.and_hms_opt(hour, min, sec).ok_or(TimestampError::OutOfRange)?;
    let local = Local
        .from_local_datetime(&naive)
        .earliest()
        .ok_or(TimestampError::OutOfRange)?;
    let mut seconds = local.timestamp();

    if timed && ts.as_bytes().get(15) == Some(&b'Z') {
        seconds += i64::from(local.offset().fix().local_minus_utc());
    }

    Ok(seconds)
}
