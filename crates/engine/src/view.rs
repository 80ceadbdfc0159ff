// SPDX-License-Identifier: MIT

//!
//! The days each calendar view shows, and moving between periods
//!

use crate::collection::{CalendarCollection, DateRange};
use chrono::{Datelike, Days, Months, NaiveDate, NaiveTime};
use sigma_calendar_core::{CalendarView, DefaultStartDate, Settings, WeekStart};

/// Which way to move through the calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Previous,
    Next,
}

/// Days from the start of the week to `date` (0 to 6)
fn days_into_week(date: NaiveDate, week_start: WeekStart) -> u32 {
    match week_start {
        WeekStart::Sunday => date.weekday().num_days_from_sunday(),
        WeekStart::Monday => date.weekday().num_days_from_monday(),
    }
}

/// The first day of the week containing `date`, clamped to the earliest
/// representable date
pub fn start_of_week(date: NaiveDate, week_start: WeekStart) -> NaiveDate {
    let offset = days_into_week(date, week_start);
    date.checked_sub_days(Days::new(u64::from(offset)))
        .unwrap_or(NaiveDate::MIN)
}

/// The last day of the week containing `date`, clamped to the latest
/// representable date
pub fn end_of_week(date: NaiveDate, week_start: WeekStart) -> NaiveDate {
    let offset = days_into_week(date, week_start);
    date.checked_add_days(Days::new(u64::from(6 - offset)))
        .unwrap_or(NaiveDate::MAX)
}

/// First and last day of the month containing `date`
fn month_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let first = date.with_day(1).unwrap_or(date);
    let last = first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(NaiveDate::MAX);
    (first, last)
}

/// First and last day shown by a view
fn visible_bounds(
    view: CalendarView,
    date: NaiveDate,
    week_start: WeekStart,
) -> (NaiveDate, NaiveDate) {
    match view {
        CalendarView::Month => {
            let (first, last) = month_bounds(date);
            (start_of_week(first, week_start), end_of_week(last, week_start))
        }
        CalendarView::Week => (start_of_week(date, week_start), end_of_week(date, week_start)),
        CalendarView::Day => (date, date),
        CalendarView::Year => {
            let first = date.with_ordinal(1).unwrap_or(date);
            let last = NaiveDate::from_ymd_opt(date.year(), 12, 31).unwrap_or(date);
            (first, last)
        }
    }
}

/// Every day cell the view shows for `date`, in order.  Month views are padded
/// out to whole weeks.
pub fn visible_days(
    view: CalendarView,
    date: NaiveDate,
    week_start: WeekStart,
) -> Vec<NaiveDate> {
    let (first, last) = visible_bounds(view, date, week_start);
    std::iter::successors(Some(first), |day| day.succ_opt())
        .take_while(|day| *day <= last)
        .collect()
}

/// The span of time the view shows, from midnight on its first day to the last
/// millisecond of its last day
pub fn visible_range(view: CalendarView, date: NaiveDate, week_start: WeekStart) -> DateRange {
    let (first, last) = visible_bounds(view, date, week_start);
    let midnight = NaiveTime::default();
    let end_of_day = NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap_or(midnight);
    DateRange {
        start: first.and_time(midnight),
        end: last.and_time(end_of_day),
    }
}

/// The date one period before or after `date`.  Month steps keep the day of
/// the month where possible (31 Jan + 1 month is 29 Feb in a leap year).
/// `None` if the result is out of range.
pub fn navigate(view: CalendarView, date: NaiveDate, direction: Direction) -> Option<NaiveDate> {
    match (view, direction) {
        (CalendarView::Month, Direction::Previous) => date.checked_sub_months(Months::new(1)),
        (CalendarView::Month, Direction::Next) => date.checked_add_months(Months::new(1)),
        (CalendarView::Year, Direction::Previous) => date.checked_sub_months(Months::new(12)),
        (CalendarView::Year, Direction::Next) => date.checked_add_months(Months::new(12)),
        (CalendarView::Week, Direction::Previous) => date.checked_sub_days(Days::new(7)),
        (CalendarView::Week, Direction::Next) => date.checked_add_days(Days::new(7)),
        (CalendarView::Day, Direction::Previous) => date.checked_sub_days(Days::new(1)),
        (CalendarView::Day, Direction::Next) => date.checked_add_days(Days::new(1)),
    }
}

/// The date the calendar opens on: today, or the day the first event starts
/// if the settings ask for that and there are events
pub fn initial_date(
    settings: &Settings,
    collection: Option<&CalendarCollection>,
    today: NaiveDate,
) -> NaiveDate {
    match settings.default_start_date {
        DefaultStartDate::Today => today,
        DefaultStartDate::FirstData => collection
            .and_then(|collection| collection.events().first())
            .map_or(today, |event| event.start_day()),
    }
}

/// The heading shown above a view
pub fn title(view: CalendarView, date: NaiveDate, week_start: WeekStart) -> String {
    match view {
        CalendarView::Month => date.format("%B %Y").to_string(),
        CalendarView::Week => {
            let first = start_of_week(date, week_start);
            let last = end_of_week(date, week_start);
            format!("{} - {}", first.format("%b %-d"), last.format("%b %-d, %Y"))
        }
        CalendarView::Day => date.format("%A, %B %-d, %Y").to_string(),
        CalendarView::Year => date.format("%Y").to_string(),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::query::test::event;
    use sigma_calendar_macros::{date, datetime};

    #[test]
    fn week_bounds() {
        // Wednesday
        let date = date!("2024-01-17");
        assert_eq!(start_of_week(date, WeekStart::Sunday), date!("2024-01-14"));
        assert_eq!(end_of_week(date, WeekStart::Sunday), date!("2024-01-20"));
        assert_eq!(start_of_week(date, WeekStart::Monday), date!("2024-01-15"));
        assert_eq!(end_of_week(date, WeekStart::Monday), date!("2024-01-21"));

        // Sunday with weeks starting on Monday
        assert_eq!(
            start_of_week(date!("2024-01-21"), WeekStart::Monday),
            date!("2024-01-15")
        );
    }

    #[test]
    fn month_grid() {
        let days = visible_days(CalendarView::Month, date!("2024-01-17"), WeekStart::Sunday);
        assert_eq!(days.first(), Some(&date!("2023-12-31")));
        assert_eq!(days.last(), Some(&date!("2024-02-03")));
        assert_eq!(days.len(), 35);
        assert_eq!(days.len() % 7, 0);

        let days = visible_days(CalendarView::Month, date!("2024-02-29"), WeekStart::Monday);
        assert_eq!(days.first(), Some(&date!("2024-01-29")));
        assert_eq!(days.last(), Some(&date!("2024-03-03")));
    }

    #[test]
    fn extreme_dates() {
        let days = visible_days(CalendarView::Month, NaiveDate::MAX, WeekStart::Sunday);
        assert_eq!(days.last(), Some(&NaiveDate::MAX));
        assert!(days.windows(2).all(|pair| pair[0] < pair[1]));

        let days = visible_days(CalendarView::Month, NaiveDate::MIN, WeekStart::Monday);
        assert_eq!(days.first(), Some(&NaiveDate::MIN));

        for view in [CalendarView::Week, CalendarView::Year, CalendarView::Day] {
            assert!(!visible_days(view, NaiveDate::MAX, WeekStart::Sunday).is_empty());
            assert!(!visible_days(view, NaiveDate::MIN, WeekStart::Sunday).is_empty());
        }
        let range = visible_range(CalendarView::Week, NaiveDate::MAX, WeekStart::Monday);
        assert_eq!(range.end.date(), NaiveDate::MAX);
        assert_eq!(navigate(CalendarView::Month, NaiveDate::MAX, Direction::Next), None);
    }

    #[test]
    fn other_views() {
        let date = date!("2024-01-17");
        assert_eq!(visible_days(CalendarView::Day, date, WeekStart::Sunday), vec![date]);
        assert_eq!(visible_days(CalendarView::Week, date, WeekStart::Sunday).len(), 7);
        assert_eq!(visible_days(CalendarView::Year, date, WeekStart::Sunday).len(), 366);

        let range = visible_range(CalendarView::Week, date, WeekStart::Monday);
        assert_eq!(range.start, datetime!("2024-01-15"));
        assert_eq!(
            range.end,
            date!("2024-01-21").and_hms_milli_opt(23, 59, 59, 999).unwrap()
        );
    }

    #[test]
    fn navigation() {
        use Direction::*;
        let date = date!("2024-01-31");
        assert_eq!(navigate(CalendarView::Month, date, Next), Some(date!("2024-02-29")));
        assert_eq!(navigate(CalendarView::Month, date, Previous), Some(date!("2023-12-31")));
        assert_eq!(navigate(CalendarView::Week, date, Next), Some(date!("2024-02-07")));
        assert_eq!(navigate(CalendarView::Day, date, Previous), Some(date!("2024-01-30")));
        assert_eq!(
            navigate(CalendarView::Year, date!("2024-02-29"), Next),
            Some(date!("2025-02-28"))
        );
    }

    #[test]
    fn opening_date() {
        let today = date!("2024-06-01");
        let collection = CalendarCollection::assemble(
            vec![event(0, datetime!("2024-03-05T10:00:00"), datetime!("2024-03-05T11:00:00"))],
            1,
        );

        let settings = Settings::default();
        assert_eq!(initial_date(&settings, Some(&collection), today), today);

        let settings = Settings {
            default_start_date: DefaultStartDate::FirstData,
            ..Settings::default()
        };
        assert_eq!(
            initial_date(&settings, Some(&collection), today),
            date!("2024-03-05")
        );
        assert_eq!(initial_date(&settings, None, today), today);
        let empty = CalendarCollection::assemble(Vec::new(), 0);
        assert_eq!(initial_date(&settings, Some(&empty), today), today);
    }

    #[test]
    fn titles() {
        let date = date!("2024-01-15");
        assert_eq!(title(CalendarView::Month, date, WeekStart::Sunday), "January 2024");
        assert_eq!(
            title(CalendarView::Week, date, WeekStart::Sunday),
            "Jan 14 - Jan 20, 2024"
        );
        assert_eq!(
            title(CalendarView::Day, date, WeekStart::Sunday),
            "Monday, January 15, 2024"
        );
        assert_eq!(title(CalendarView::Year, date, WeekStart::Sunday), "2024");
    }
}
