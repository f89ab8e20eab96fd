#[cfg(test)]
mod tests {
    use calstat::ics::CalendarEvent;
    use calstat::libs::calendar::{DayKind, HolidayError, WorkdayCalendar};
    use chrono::{Local, TimeZone};

    fn local_ts(year: i32, month: u32, day: u32) -> i64 {
        Local
            .with_ymd_and_hms(year, month, day, 0, 0, 0)
            .single()
            .unwrap()
            .timestamp()
    }

    fn holiday(start: i64, end: i64, dayevent: bool, recurring: bool) -> CalendarEvent {
        CalendarEvent {
            user: None,
            subject: "holiday".to_string(),
            start,
            end,
            dayevent,
            recurring_yearly: recurring,
            onsite: false,
        }
    }

    #[test]
    fn test_weekday_fill_from_january_first() {
        // 2020 begins on a Wednesday.
        let calendar = WorkdayCalendar::new(2020).unwrap();
        assert_eq!(calendar.day(0), DayKind::Weekday(3));
        assert_eq!(calendar.day(1), DayKind::Weekday(4));
        assert_eq!(calendar.day(6), DayKind::Weekday(2));
    }

    #[test]
    fn test_leap_year_has_day_366() {
        let calendar = WorkdayCalendar::new(2020).unwrap();
        // December 31, 2020 is a Thursday.
        assert_eq!(calendar.day(365), DayKind::Weekday(4));
    }

    #[test]
    fn test_non_leap_year_marks_day_366_not_applicable() {
        let calendar = WorkdayCalendar::new(2021).unwrap();
        assert_eq!(calendar.day(365), DayKind::NotApplicable);
    }

    #[test]
    fn test_workdays_between_counts_weekdays_only() {
        // January 1, 1970 is a Thursday; Thu+Fri are workdays, Sat+Sun not.
        let calendar = WorkdayCalendar::new(1970).unwrap();
        let begin = local_ts(1970, 1, 1);
        let end = local_ts(1970, 1, 4);
        assert_eq!(calendar.workdays_between(begin, end), 2);
    }

    #[test]
    fn test_flag_holiday_marks_range_exclusive_end() {
        let mut calendar = WorkdayCalendar::new(2023).unwrap();
        // April 3 (Monday, day 92) through April 6 exclusive.
        let event = holiday(local_ts(2023, 4, 3), local_ts(2023, 4, 6), true, false);
        calendar.flag_holiday(&event).unwrap();

        assert_eq!(calendar.day(91), DayKind::Weekday(0));
        assert_eq!(calendar.day(92), DayKind::Holiday);
        assert_eq!(calendar.day(93), DayKind::Holiday);
        assert_eq!(calendar.day(94), DayKind::Holiday);
        assert_eq!(calendar.day(95), DayKind::Weekday(4));
    }

    #[test]
    fn test_flag_holiday_rejects_timed_event() {
        let mut calendar = WorkdayCalendar::new(2023).unwrap();
        let event = holiday(local_ts(2023, 4, 3), local_ts(2023, 4, 6), false, false);
        assert_eq!(calendar.flag_holiday(&event), Err(HolidayError::NotDayEvent));
        assert_eq!(calendar.day(92), DayKind::Weekday(1));
    }

    #[test]
    fn test_flag_holiday_rejects_single_day_range() {
        // ICS date ranges are exclusive-end; equal start and end day is empty.
        let mut calendar = WorkdayCalendar::new(2023).unwrap();
        let event = holiday(local_ts(2023, 4, 3), local_ts(2023, 4, 3), true, false);
        assert_eq!(calendar.flag_holiday(&event), Err(HolidayError::EndBeforeStart));
        assert_eq!(calendar.day(92), DayKind::Weekday(1));
    }

    #[test]
    fn test_flag_holiday_outside_year_is_silently_skipped() {
        let mut calendar = WorkdayCalendar::new(2023).unwrap();
        let event = holiday(local_ts(2022, 4, 3), local_ts(2022, 4, 6), true, false);
        calendar.flag_holiday(&event).unwrap();
        assert_eq!(calendar.day(92), DayKind::Weekday(1));
    }

    #[test]
    fn test_recurring_holiday_from_another_year_is_applied() {
        let mut calendar = WorkdayCalendar::new(2023).unwrap();
        // May 1, 2022 has day index 120, same as in any non-leap year.
        let event = holiday(local_ts(2022, 5, 1), local_ts(2022, 5, 2), true, true);
        calendar.flag_holiday(&event).unwrap();
        assert_eq!(calendar.day(120), DayKind::Holiday);
    }

    #[test]
    fn test_year_wrap_holiday_is_accepted_but_flags_nothing() {
        let mut calendar = WorkdayCalendar::new(2023).unwrap();
        let event = holiday(local_ts(2023, 12, 31), local_ts(2024, 1, 1), true, false);
        calendar.flag_holiday(&event).unwrap();
        assert_eq!(calendar.day(364), DayKind::Weekday(0));
    }

    #[test]
    fn test_holiday_excluded_from_workday_count() {
        let mut calendar = WorkdayCalendar::new(2023).unwrap();
        let event = holiday(local_ts(2023, 4, 3), local_ts(2023, 4, 6), true, false);
        calendar.flag_holiday(&event).unwrap();

        // Workweek April 3-7: three days flagged, Thursday + Friday remain.
        let begin = local_ts(2023, 4, 3);
        let end = local_ts(2023, 4, 7);
        assert_eq!(calendar.workdays_between(begin, end), 2);
    }
}
