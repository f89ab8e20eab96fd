//! HTML table report renderer.

use super::{fmt_date, fmt_ind_hours, fmt_time, Render};
use crate::libs::stats::TimeSlotInfo;
use anyhow::Result;
use std::io::Write;

pub struct HtmlRenderer<W: Write> {
    out: W,
}

impl<W: Write> HtmlRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Render for HtmlRenderer<W> {
    fn header(&mut self, tsi: &TimeSlotInfo) -> Result<()> {
        if tsi.allyear {
            write!(self.out, "1-12/{}", tsi.year)?;
        } else {
            write!(self.out, "{}/{}", tsi.mon, tsi.year)?;
        }
        if tsi.userlimit {
            write!(self.out, "&nbsp;{}", tsi.user)?;
        }
        writeln!(self.out)?;
        writeln!(
            self.out,
            "<table>\n\t<tr>\t<th>Date</th><th>Starttime</th><th>Endtime</th><th>Duration</th><th>Location</th>\t</tr>"
        )?;
        Ok(())
    }

    fn timeline(&mut self, tsi: &TimeSlotInfo) -> Result<()> {
        writeln!(
            self.out,
            "\t<tr>\t<td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td>\t</tr>",
            fmt_date(tsi.mday, tsi.mon),
            fmt_time(tsi.shour, tsi.smin),
            fmt_time(tsi.ehour, tsi.emin),
            fmt_ind_hours(tsi.workhours_ch),
            if tsi.onsite { "onsite" } else { "remote" }
        )?;
        Ok(())
    }

    fn footer(&mut self, tsi: &TimeSlotInfo) -> Result<()> {
        writeln!(
            self.out,
            "\t<tr>\t<td colspan=\"5\">Onsite: {}&nbsp;Remote: {}&nbsp;worktime balance: {}</td>\t</tr>",
            fmt_ind_hours(tsi.worksum_onsite_ch),
            fmt_ind_hours(tsi.worksum_remote_ch),
            fmt_ind_hours(tsi.worktbd_ch)
        )?;
        writeln!(
            self.out,
            "\t<tr>\t<td colspan=\"5\">vacation: {}days (left: {}days)</td>\t</tr>\n</table>",
            tsi.vmonth, tsi.vleft
        )?;
        Ok(())
    }
}
