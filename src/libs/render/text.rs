//! Plain-text report renderer.

use super::{fmt_date, fmt_ind_hours, fmt_price, fmt_time, Render};
use crate::libs::stats::TimeSlotInfo;
use anyhow::Result;
use std::io::Write;

pub struct TextRenderer<W: Write> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consumes the renderer, handing back the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Render for TextRenderer<W> {
    fn header(&mut self, tsi: &TimeSlotInfo) -> Result<()> {
        if tsi.allyear {
            write!(self.out, "1-12/{}", tsi.year)?;
        } else {
            write!(self.out, "{}/{}", tsi.mon, tsi.year)?;
        }
        if tsi.userlimit {
            write!(self.out, "\t{}", tsi.user)?;
        }
        if tsi.projectlimit {
            write!(self.out, "\tProjekt {}", tsi.project)?;
        }
        writeln!(self.out)?;
        Ok(())
    }

    fn timeline(&mut self, tsi: &TimeSlotInfo) -> Result<()> {
        let mut line = format!(
            "{} {} -> {} = {}",
            fmt_date(tsi.mday, tsi.mon),
            fmt_time(tsi.shour, tsi.smin),
            fmt_time(tsi.ehour, tsi.emin),
            fmt_ind_hours(tsi.workhours_ch)
        );
        line.push_str(if tsi.onsite { " | onsite" } else { " | remote" });
        if !tsi.userlimit {
            line.push_str(" | ");
            line.push_str(&tsi.user);
        }
        if !tsi.projectlimit {
            line.push_str(" | ");
            line.push_str(&tsi.project);
        }
        writeln!(self.out, "{}", line)?;
        Ok(())
    }

    fn footer(&mut self, tsi: &TimeSlotInfo) -> Result<()> {
        write!(
            self.out,
            "Onsite: {}\tRemote: {}",
            fmt_ind_hours(tsi.worksum_onsite_ch),
            fmt_ind_hours(tsi.worksum_remote_ch)
        )?;
        if tsi.projectlimit {
            let onsite_amount = (tsi.worksum_onsite_ch * i64::from(tsi.rate_onsite_ch)) / 100;
            let remote_amount = (tsi.worksum_remote_ch * i64::from(tsi.rate_remote_ch)) / 100;
            write!(self.out, "\namount onsite => {}", fmt_price(onsite_amount))?;
            write!(self.out, "\namount remote => {}", fmt_price(remote_amount))?;
            write!(self.out, "\namount sum => {}", fmt_price(onsite_amount + remote_amount))?;
        } else if tsi.userlimit {
            write!(self.out, "\nworktime balance: {}", fmt_ind_hours(tsi.worktbd_ch))?;
            write!(self.out, "\tvacation: {}days (left: {}days)", tsi.vmonth, tsi.vleft)?;
        }
        writeln!(self.out)?;
        Ok(())
    }
}
