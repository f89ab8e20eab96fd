//! # Calstat
//!
//! A command-line utility for calculating project-/worktime and vacation
//! statistics from iCalendar feeds.
//!
//! ## Features
//!
//! - **ICS Ingestion**: Streaming line assembly and event parsing of one
//!   calendar per user plus a public-holiday calendar
//! - **Reconciliation**: Time-ordered event store with merge-on-insert for
//!   overlapping vacation ranges
//! - **Workday Calendar**: Per-day-of-year weekday/holiday classification,
//!   leap-year aware
//! - **Aggregation**: Per-day work segments, onsite/remote hour totals,
//!   vacation-day counts and worktime balance
//! - **Report Output**: Plain-text and HTML renderers
//!
//! ## Usage
//!
//! ```rust,no_run
//! use calstat::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod ics;
pub mod libs;
