#[cfg(test)]
mod tests {
    use anyhow::Result;
    use calstat::ics::{CalendarEvent, EventStore};
    use calstat::libs::calendar::WorkdayCalendar;
    use calstat::libs::config::UserConfig;
    use calstat::libs::period::ReportPeriod;
    use calstat::libs::render::Render;
    use calstat::libs::stats::{aggregate, ReportScope, TimeSlotInfo};
    use chrono::{Local, TimeZone};

    /// Captures every renderer call for inspection.
    #[derive(Default)]
    struct CollectingRenderer {
        header: Option<TimeSlotInfo>,
        lines: Vec<TimeSlotInfo>,
        footer: Option<TimeSlotInfo>,
    }

    impl Render for CollectingRenderer {
        fn header(&mut self, tsi: &TimeSlotInfo) -> Result<()> {
            self.header = Some(tsi.clone());
            Ok(())
        }

        fn timeline(&mut self, tsi: &TimeSlotInfo) -> Result<()> {
            self.lines.push(tsi.clone());
            Ok(())
        }

        fn footer(&mut self, tsi: &TimeSlotInfo) -> Result<()> {
            self.footer = Some(tsi.clone());
            Ok(())
        }
    }

    fn local_ts(year: i32, month: u32, day: u32, hour: u32, min: u32) -> i64 {
        Local
            .with_ymd_and_hms(year, month, day, hour, min, 0)
            .single()
            .unwrap()
            .timestamp()
    }

    fn timed_event(user: &str, subject: &str, start: i64, end: i64, onsite: bool) -> CalendarEvent {
        CalendarEvent {
            user: Some(user.to_string()),
            subject: subject.to_string(),
            start,
            end,
            dayevent: false,
            recurring_yearly: false,
            onsite,
        }
    }

    fn day_event(user: &str, start: i64, end: i64) -> CalendarEvent {
        CalendarEvent {
            user: Some(user.to_string()),
            subject: "vacation".to_string(),
            start,
            end,
            dayevent: true,
            recurring_yearly: false,
            onsite: false,
        }
    }

    fn june_2023() -> ReportPeriod {
        ReportPeriod {
            year: 2023,
            month: Some(6),
        }
    }

    #[test]
    fn test_single_day_event_emits_one_line() {
        let mut store = EventStore::new();
        store.insert(timed_event(
            "alice",
            "alpha",
            local_ts(2023, 6, 14, 9, 0),
            local_ts(2023, 6, 14, 10, 30),
            false,
        ));
        let calendar = WorkdayCalendar::new(2023).unwrap();
        let mut renderer = CollectingRenderer::default();

        aggregate(store, &calendar, &june_2023(), &ReportScope::default(), &mut renderer).unwrap();

        assert_eq!(renderer.lines.len(), 1);
        let line = &renderer.lines[0];
        assert_eq!((line.mday, line.mon), (14, 6));
        assert_eq!((line.shour, line.smin), (9, 0));
        assert_eq!((line.ehour, line.emin), (10, 30));
        assert_eq!(line.workhours_ch, 150);

        let footer = renderer.footer.unwrap();
        assert_eq!(footer.worksum_remote_ch, 150);
        assert_eq!(footer.worksum_onsite_ch, 0);
    }

    #[test]
    fn test_midnight_spanning_event_emits_three_increasing_segments() {
        let mut store = EventStore::new();
        store.insert(timed_event(
            "alice",
            "alpha",
            local_ts(2023, 6, 12, 22, 0),
            local_ts(2023, 6, 14, 2, 0),
            true,
        ));
        let calendar = WorkdayCalendar::new(2023).unwrap();
        let mut renderer = CollectingRenderer::default();

        aggregate(store, &calendar, &june_2023(), &ReportScope::default(), &mut renderer).unwrap();

        assert_eq!(renderer.lines.len(), 3);

        let first = &renderer.lines[0];
        assert_eq!((first.mday, first.shour, first.ehour), (12, 22, 24));
        assert_eq!(first.workhours_ch, 200);

        let middle = &renderer.lines[1];
        assert_eq!((middle.mday, middle.shour, middle.ehour), (13, 0, 24));
        assert_eq!(middle.workhours_ch, 2400);

        let last = &renderer.lines[2];
        assert_eq!((last.mday, last.shour, last.ehour), (14, 0, 2));
        assert_eq!(last.workhours_ch, 200);

        let days: Vec<u32> = renderer.lines.iter().map(|l| l.mday).collect();
        assert!(days.windows(2).all(|pair| pair[0] < pair[1]));

        let total: i64 = renderer.lines.iter().map(|l| l.workhours_ch).sum();
        assert_eq!(total, 2800);
        assert_eq!(renderer.footer.unwrap().worksum_onsite_ch, 2800);
    }

    #[test]
    fn test_month_rollover_in_multi_day_event() {
        let mut store = EventStore::new();
        store.insert(timed_event(
            "alice",
            "alpha",
            local_ts(2023, 6, 30, 23, 0),
            local_ts(2023, 7, 1, 8, 0),
            false,
        ));
        let calendar = WorkdayCalendar::new(2023).unwrap();
        let period = ReportPeriod {
            year: 2023,
            month: None,
        };
        let mut renderer = CollectingRenderer::default();

        aggregate(store, &calendar, &period, &ReportScope::default(), &mut renderer).unwrap();

        assert_eq!(renderer.lines.len(), 2);
        assert_eq!((renderer.lines[0].mday, renderer.lines[0].mon), (30, 6));
        assert_eq!((renderer.lines[1].mday, renderer.lines[1].mon), (1, 7));
        let total: i64 = renderer.lines.iter().map(|l| l.workhours_ch).sum();
        assert_eq!(total, 900);
    }

    #[test]
    fn test_event_clipped_to_reporting_window() {
        let mut store = EventStore::new();
        // Runs from late May into June; only the June part counts.
        store.insert(timed_event(
            "alice",
            "alpha",
            local_ts(2023, 5, 31, 22, 0),
            local_ts(2023, 6, 1, 6, 0),
            false,
        ));
        let calendar = WorkdayCalendar::new(2023).unwrap();
        let mut renderer = CollectingRenderer::default();

        aggregate(store, &calendar, &june_2023(), &ReportScope::default(), &mut renderer).unwrap();

        assert_eq!(renderer.lines.len(), 1);
        let line = &renderer.lines[0];
        assert_eq!((line.mday, line.mon), (1, 6));
        assert_eq!((line.shour, line.ehour), (0, 6));
        assert_eq!(line.workhours_ch, 600);
        assert_eq!(renderer.footer.unwrap().worksum_remote_ch, 600);
    }

    #[test]
    fn test_event_outside_window_is_skipped() {
        let mut store = EventStore::new();
        store.insert(timed_event(
            "alice",
            "alpha",
            local_ts(2023, 5, 10, 9, 0),
            local_ts(2023, 5, 10, 17, 0),
            false,
        ));
        let calendar = WorkdayCalendar::new(2023).unwrap();
        let mut renderer = CollectingRenderer::default();

        aggregate(store, &calendar, &june_2023(), &ReportScope::default(), &mut renderer).unwrap();

        assert!(renderer.lines.is_empty());
        let footer = renderer.footer.unwrap();
        assert_eq!(footer.worksum_remote_ch + footer.worksum_onsite_ch, 0);
    }

    #[test]
    fn test_vacation_counts_workdays_and_emits_no_lines() {
        let mut store = EventStore::new();
        // Monday June 12 through Friday June 16, exclusive end.
        store.insert(day_event("alice", local_ts(2023, 6, 12, 0, 0), local_ts(2023, 6, 16, 0, 0)));
        let calendar = WorkdayCalendar::new(2023).unwrap();
        let mut renderer = CollectingRenderer::default();

        aggregate(store, &calendar, &june_2023(), &ReportScope::default(), &mut renderer).unwrap();

        assert!(renderer.lines.is_empty());
        let footer = renderer.footer.unwrap();
        assert_eq!(footer.vmonth, 4);
        assert_eq!(footer.vyear, 4);
    }

    #[test]
    fn test_vacation_spanning_weekend_skips_weekend_days() {
        let mut store = EventStore::new();
        // Thursday June 15 through Tuesday June 20, exclusive end: Thu, Fri, Mon.
        store.insert(day_event("alice", local_ts(2023, 6, 15, 0, 0), local_ts(2023, 6, 20, 0, 0)));
        let calendar = WorkdayCalendar::new(2023).unwrap();
        let mut renderer = CollectingRenderer::default();

        aggregate(store, &calendar, &june_2023(), &ReportScope::default(), &mut renderer).unwrap();

        assert_eq!(renderer.footer.unwrap().vmonth, 3);
    }

    #[test]
    fn test_user_scope_computes_balance_and_vacation_left() {
        let user = UserConfig {
            name: "alice".to_string(),
            cal: "https://example.invalid/alice.ics".to_string(),
            vacation: 30,
            monthhours: 160,
        };
        let mut store = EventStore::new();
        store.insert(timed_event(
            "alice",
            "alpha",
            local_ts(2023, 6, 14, 9, 0),
            local_ts(2023, 6, 14, 10, 0),
            true,
        ));
        let calendar = WorkdayCalendar::new(2023).unwrap();
        let scope = ReportScope {
            user: Some(&user),
            project: None,
            rates: None,
        };
        let mut renderer = CollectingRenderer::default();

        aggregate(store, &calendar, &june_2023(), &scope, &mut renderer).unwrap();

        let header = renderer.header.unwrap();
        assert!(header.userlimit);
        assert_eq!(header.user, "alice");

        let footer = renderer.footer.unwrap();
        assert_eq!(footer.worksum_onsite_ch, 100);
        assert_eq!(footer.worksum_remote_ch, 0);
        // One worked hour against 160 contract hours, no vacation taken.
        assert_eq!(footer.worktbd_ch, 100 - 160 * 100);
        assert_eq!(footer.vleft, 30);
    }

    #[test]
    fn test_whole_year_report_uses_twelve_contract_months() {
        let user = UserConfig {
            name: "alice".to_string(),
            cal: "https://example.invalid/alice.ics".to_string(),
            vacation: 30,
            monthhours: 160,
        };
        let mut store = EventStore::new();
        store.insert(timed_event(
            "alice",
            "alpha",
            local_ts(2023, 6, 14, 9, 0),
            local_ts(2023, 6, 14, 10, 0),
            false,
        ));
        let calendar = WorkdayCalendar::new(2023).unwrap();
        let period = ReportPeriod {
            year: 2023,
            month: None,
        };
        let scope = ReportScope {
            user: Some(&user),
            project: None,
            rates: None,
        };
        let mut renderer = CollectingRenderer::default();

        aggregate(store, &calendar, &period, &scope, &mut renderer).unwrap();

        let footer = renderer.footer.unwrap();
        assert!(footer.allyear);
        assert_eq!(footer.worktbd_ch, 100 - 160 * 12 * 100);
    }

    #[test]
    fn test_onsite_and_remote_are_separate_buckets() {
        let mut store = EventStore::new();
        store.insert(timed_event(
            "alice",
            "alpha",
            local_ts(2023, 6, 14, 9, 0),
            local_ts(2023, 6, 14, 11, 0),
            true,
        ));
        store.insert(timed_event(
            "alice",
            "beta",
            local_ts(2023, 6, 15, 9, 0),
            local_ts(2023, 6, 15, 10, 0),
            false,
        ));
        let calendar = WorkdayCalendar::new(2023).unwrap();
        let mut renderer = CollectingRenderer::default();

        aggregate(store, &calendar, &june_2023(), &ReportScope::default(), &mut renderer).unwrap();

        let footer = renderer.footer.unwrap();
        assert_eq!(footer.worksum_onsite_ch, 200);
        assert_eq!(footer.worksum_remote_ch, 100);
    }
}
