//! The report command: fetch all calendar sources, reconcile them and
//! print the aggregated statistics for the requested window.

use crate::{
    ics::EventStore,
    libs::{
        calendar::WorkdayCalendar,
        config::Config,
        fetch::CalendarFetcher,
        messages::Message,
        period::ReportPeriod,
        render::OutputFormat,
        stats::{self, ReportScope},
    },
};
use anyhow::{Context, Result};
use clap::Args;

#[derive(Debug, Args)]
pub struct ReportArgs {
    /// Report year; without a month this selects the whole year
    #[arg(short, long, value_parser = clap::value_parser!(i32).range(1970..=9999))]
    year: Option<i32>,

    /// Report month
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=12))]
    month: Option<u32>,

    /// Limit the report to one configured user
    #[arg(short, long)]
    user: Option<String>,

    /// Limit the report to one project (timed events only)
    #[arg(short, long)]
    project: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    output: OutputFormat,
}

pub async fn cmd(args: ReportArgs) -> Result<()> {
    let config = Config::read()?;
    let period = ReportPeriod::resolve(args.year, args.month);
    let mut calendar = WorkdayCalendar::new(period.year)?;
    let mut store = EventStore::new();
    let fetcher = CalendarFetcher::new(&config.general);

    // The holiday source first, so vacation counting sees the final table.
    if let Some(url) = &config.general.public_holidays {
        fetcher
            .fetch(None, url, &mut store, &mut calendar)
            .await
            .context(Message::HolidayCalendarFetchFailed.to_string())?;
    }

    for user in &config.users {
        if let Some(filter) = &args.user {
            if &user.name != filter {
                continue;
            }
        }
        fetcher
            .fetch(Some(&user.name), &user.cal, &mut store, &mut calendar)
            .await
            .with_context(|| Message::UserCalendarFetchFailed(user.name.clone()).to_string())?;
    }

    if let Some(project) = &args.project {
        store.retain_project(project);
    }

    let scope = ReportScope {
        user: args.user.as_deref().and_then(|name| config.find_user(name)),
        project: args.project.as_deref(),
        rates: args.project.as_deref().and_then(|name| config.find_project(name)),
    };

    let mut renderer = args.output.renderer();
    stats::aggregate(store, &calendar, &period, &scope, renderer.as_mut())
}
