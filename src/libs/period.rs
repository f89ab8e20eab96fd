//! Resolution of the reporting window and local-time helpers.

use anyhow::{Context, Result};
use chrono::{DateTime, Datelike, Local, NaiveDate, TimeZone};

/// The resolved reporting window: one month or a whole year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportPeriod {
    pub year: i32,
    /// `None` means the whole year.
    pub month: Option<u32>,
}

impl ReportPeriod {
    /// Resolves the command-line year/month arguments against today.
    ///
    /// No year and no month → the current month. A year alone → that whole
    /// year. A month alone → that month of the current year.
    pub fn resolve(year: Option<i32>, month: Option<u32>) -> Self {
        let today = Local::now();
        match (year, month) {
            (Some(year), month @ Some(_)) => Self { year, month },
            (Some(year), None) => Self { year, month: None },
            (None, Some(month)) => Self {
                year: today.year(),
                month: Some(month),
            },
            (None, None) => Self {
                year: today.year(),
                month: Some(today.month()),
            },
        }
    }

    /// `[begin, end)` timestamps of the reporting window, local time.
    pub fn bounds(&self) -> Result<(i64, i64)> {
        match self.month {
            Some(month) => {
                let begin = first_of_month(self.year, month)?;
                let end = if month == 12 {
                    first_of_month(self.year + 1, 1)?
                } else {
                    first_of_month(self.year, month + 1)?
                };
                Ok((begin, end))
            }
            None => self.year_bounds(),
        }
    }

    /// `[begin, end)` timestamps of the report year, local time.
    pub fn year_bounds(&self) -> Result<(i64, i64)> {
        Ok((first_of_month(self.year, 1)?, first_of_month(self.year + 1, 1)?))
    }
}

fn first_of_month(year: i32, month: u32) -> Result<i64> {
    let date = NaiveDate::from_ymd_opt(year, month, 1).with_context(|| format!("invalid period {}-{}", year, month))?;
    local_midnight(date)
}

/// First second of `date` in the local timezone.
pub fn local_midnight(date: NaiveDate) -> Result<i64> {
    let naive = date.and_hms_opt(0, 0, 0).context("midnight out of range")?;
    let local = Local
        .from_local_datetime(&naive)
        .earliest()
        .with_context(|| format!("no local midnight for {}", date))?;
    Ok(local.timestamp())
}

/// Local calendar representation of an absolute timestamp.
pub fn local_datetime(seconds: i64) -> Result<DateTime<Local>> {
    Local
        .timestamp_opt(seconds, 0)
        .single()
        .with_context(|| format!("timestamp {} out of range", seconds))
}
