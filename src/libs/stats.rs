//! The slice and aggregation engine.
//!
//! Walks the committed event store once, in sorted order, splitting each
//! timed event into per-day segments clipped to the reporting window and
//! accumulating onsite/remote centihours and vacation-day counts. Day
//! events only feed the vacation counters; they emit no timeline lines.

use crate::ics::event::{CalendarEvent, EventStore};
use crate::libs::calendar::WorkdayCalendar;
use crate::libs::config::{ProjectConfig, UserConfig};
use crate::libs::period::{self, ReportPeriod};
use crate::libs::render::Render;
use crate::msg_debug;
use anyhow::{Context, Result};
use chrono::{Datelike, Timelike};

/// Seconds per centihour; durations in centihours are `seconds / 36`.
const SECONDS_PER_CENTIHOUR: i64 = 60 * 60 / 100;

/// Transient aggregation state handed to the renderer.
///
/// Mutated while the store is walked and flushed to the renderer once per
/// timeline line plus once each for header and footer. Not stored anywhere.
#[derive(Debug, Default, Clone)]
pub struct TimeSlotInfo {
    pub user: String,
    pub userlimit: bool,
    pub project: String,
    pub projectlimit: bool,
    pub mday: u32,
    pub mon: u32,
    pub year: i32,
    pub shour: u32,
    pub smin: u32,
    pub ehour: u32,
    pub emin: u32,
    pub allyear: bool,
    pub onsite: bool,
    // vacation days
    pub vmonth: u16,
    pub vyear: u16,
    pub vleft: i32,
    // centihours: industry hours without floats
    pub workhours_ch: i64,
    pub worksum_onsite_ch: i64,
    pub worksum_remote_ch: i64,
    pub worktbd_ch: i64,
    pub rate_onsite_ch: u16,
    pub rate_remote_ch: u16,
}

/// Optional scoping of one report run.
#[derive(Debug, Default)]
pub struct ReportScope<'a> {
    /// Contract figures when the report is limited to one configured user.
    pub user: Option<&'a UserConfig>,
    /// Name of the project filter, when given.
    pub project: Option<&'a str>,
    /// Hourly rates when the filtered project is configured.
    pub rates: Option<&'a ProjectConfig>,
}

/// Runs the aggregation pass, consuming the store.
pub fn aggregate(
    store: EventStore,
    calendar: &WorkdayCalendar,
    period: &ReportPeriod,
    scope: &ReportScope<'_>,
    renderer: &mut dyn Render,
) -> Result<()> {
    let (begin_month, end_month) = period.bounds()?;
    let (begin_year, end_year) = calendar.year_bounds();

    let mut tsi = TimeSlotInfo {
        mon: period.month.unwrap_or(1),
        allyear: period.month.is_none(),
        year: period.year,
        ..TimeSlotInfo::default()
    };

    if let Some(user) = scope.user {
        tsi.userlimit = true;
        tsi.user = user.name.clone();
    }
    if let Some(project) = scope.project {
        tsi.projectlimit = true;
        tsi.project = project.to_owned();
        if let Some(rates) = scope.rates {
            tsi.rate_onsite_ch = rates.onsite_centi()?;
            tsi.rate_remote_ch = rates.remote_centi()?;
        }
    }

    renderer.header(&tsi)?;

    for event in store {
        tsi.onsite = event.onsite;
        tsi.user = event.user.clone().unwrap_or_default();
        tsi.project = event.subject.clone();

        if event.start < end_month && event.end > begin_month {
            let clipped = slice_timeslots(&event, begin_month, end_month, &mut tsi, renderer)?;
            if event.dayevent {
                tsi.vmonth += calendar.workdays_between(event.start.max(begin_month), event.end.min(end_month) - 1);
            } else if tsi.onsite {
                tsi.worksum_onsite_ch += clipped / SECONDS_PER_CENTIHOUR;
            } else {
                tsi.worksum_remote_ch += clipped / SECONDS_PER_CENTIHOUR;
            }
        }

        if event.dayevent && event.start < end_year && event.end > begin_year {
            tsi.vyear += calendar.workdays_between(event.start.max(begin_year), event.end.min(end_year) - 1);
        }
    }

    if let Some(user) = scope.user {
        let year_workdays = calendar.workdays_between(begin_year, end_year - 1);
        let vday_hours = (f64::from(user.monthhours) * 12.0 / f64::from(year_workdays) + 0.5) as u16;
        msg_debug!(format!("vacation day in work hours: {}", vday_hours));

        let contract_months: i64 = if period.month.is_some() { 1 } else { 12 };
        tsi.worktbd_ch = tsi.worksum_onsite_ch
            + tsi.worksum_remote_ch
            + (i64::from(tsi.vmonth) * i64::from(vday_hours) - i64::from(user.monthhours) * contract_months) * 100;
        tsi.vleft = i32::from(user.vacation) - i32::from(tsi.vyear);
    }

    renderer.footer(&tsi)?;
    Ok(())
}

/// Emits the per-day timeline lines for one event and returns the clipped
/// duration in seconds.
///
/// A timed event confined to one calendar day produces a single line. A
/// multi-day event produces a line up to the first midnight, one fixed
/// 00:00→24:00 line per whole intervening day, and a final line after the
/// last midnight when the end time lies beyond it. Day events produce no
/// lines at all.
fn slice_timeslots(
    event: &CalendarEvent,
    begin: i64,
    end: i64,
    tsi: &mut TimeSlotInfo,
    renderer: &mut dyn Render,
) -> Result<i64> {
    let start_ts = event.start.max(begin);
    let end_ts = event.end.min(end);
    let clipped = end_ts - start_ts;
    if event.dayevent {
        return Ok(clipped);
    }

    let start_dt = period::local_datetime(start_ts)?;
    let end_dt = period::local_datetime(end_ts)?;

    tsi.mday = start_dt.day();
    tsi.mon = start_dt.month();
    tsi.shour = start_dt.hour();
    tsi.smin = start_dt.minute();

    if start_dt.ordinal0() < end_dt.ordinal0() {
        // Up to the first midnight.
        let mut next_day = start_dt.date_naive().succ_opt().context("date overflow")?;
        tsi.ehour = 24;
        tsi.emin = 0;
        tsi.workhours_ch = (period::local_midnight(next_day)? - start_ts) / SECONDS_PER_CENTIHOUR;
        renderer.timeline(tsi)?;

        // Whole intervening days.
        tsi.shour = 0;
        tsi.smin = 0;
        tsi.workhours_ch = 24 * 100;
        while end_dt.ordinal0() > next_day.ordinal0() {
            tsi.mday = next_day.day();
            tsi.mon = next_day.month();
            next_day = next_day.succ_opt().context("date overflow")?;
            renderer.timeline(tsi)?;
        }

        // After the last midnight.
        let last_midnight = period::local_midnight(next_day)?;
        if end_ts > last_midnight {
            tsi.mday = end_dt.day();
            tsi.mon = end_dt.month();
            tsi.ehour = end_dt.hour();
            tsi.emin = end_dt.minute();
            tsi.workhours_ch = (end_ts - last_midnight) / SECONDS_PER_CENTIHOUR;
            renderer.timeline(tsi)?;
        }
    } else {
        tsi.ehour = end_dt.hour();
        tsi.emin = end_dt.minute();
        tsi.workhours_ch = (end_ts - start_ts) / SECONDS_PER_CENTIHOUR;
        renderer.timeline(tsi)?;
    }

    Ok(clipped)
}
