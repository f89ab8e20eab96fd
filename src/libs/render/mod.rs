//! Report output rendering.
//!
//! The aggregation engine never formats text itself; it fills a
//! [`TimeSlotInfo`] snapshot and calls the three renderer hooks in order:
//! header once, timeline once per emitted work segment, footer once.

pub mod html;
pub mod text;

use crate::libs::stats::TimeSlotInfo;
use anyhow::Result;
use clap::ValueEnum;
use std::io;

pub use html::HtmlRenderer;
pub use text::TextRenderer;

pub(crate) const DECIMAL_SEPARATOR: &str = ",";
pub(crate) const CURRENCY_SYMBOL: &str = "€";

/// The three ordered output callbacks of one report run.
pub trait Render {
    fn header(&mut self, tsi: &TimeSlotInfo) -> Result<()>;
    fn timeline(&mut self, tsi: &TimeSlotInfo) -> Result<()>;
    fn footer(&mut self, tsi: &TimeSlotInfo) -> Result<()>;
}

/// Output format selected on the command line.
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Html,
}

impl OutputFormat {
    /// Builds the renderer for this format, writing to stdout.
    pub fn renderer(self) -> Box<dyn Render> {
        match self {
            OutputFormat::Text => Box::new(TextRenderer::new(io::stdout())),
            OutputFormat::Html => Box::new(HtmlRenderer::new(io::stdout())),
        }
    }
}

/// `dd.mm.` with zero padding.
pub fn fmt_date(mday: u32, mon: u32) -> String {
    format!("{:02}.{:02}.", mday, mon)
}

/// `hh:mm` with zero padding.
pub fn fmt_time(hour: u32, min: u32) -> String {
    format!("{:02}:{:02}", hour, min)
}

/// Centihours as industry hours, e.g. 150 → `01,50h`.
pub fn fmt_ind_hours(centihours: i64) -> String {
    format!(
        "{:02}{}{:02}h",
        centihours / 100,
        DECIMAL_SEPARATOR,
        (centihours % 100).abs()
    )
}

/// An amount in hundredths as currency, e.g. 12345 → `123,45€`.
pub fn fmt_price(hundredths: i64) -> String {
    format!(
        "{}{}{:02}{}",
        hundredths / 100,
        DECIMAL_SEPARATOR,
        (hundredths % 100).abs(),
        CURRENCY_SYMBOL
    )
}
