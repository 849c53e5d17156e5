// Property-based tests for month grid generation
// Every focused month must produce whole Sunday-first weeks of consecutive days

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use picker_modals::models::calendar::TrailingWeek;
use picker_modals::services::calendar_grid::build_calendar_grid_with;
use picker_modals::utils::date::days_in_month;
use proptest::prelude::*;

fn trailing_week() -> impl Strategy<Value = TrailingWeek> {
    prop_oneof![Just(TrailingWeek::Omit), Just(TrailingWeek::Pad)]
}

proptest! {
    /// Property: the grid is a run of consecutive days from a Sunday to a Saturday
    #[test]
    fn prop_grid_days_are_consecutive(
        year in 1900..2100i32,
        month in 1..=12u32,
        day in 1..=28u32,
        trailing in trailing_week(),
    ) {
        let focused = NaiveDate::from_ymd_opt(year, month, day).unwrap();
        let grid = build_calendar_grid_with(focused, trailing);
        let days: Vec<_> = grid.days().collect();

        prop_assert_eq!(days.len(), grid.row_count() * 7);
        prop_assert_eq!(days[0].date.weekday(), Weekday::Sun);
        prop_assert_eq!(days[days.len() - 1].date.weekday(), Weekday::Sat);
        for pair in days.windows(2) {
            prop_assert_eq!(pair[1].date - pair[0].date, Duration::days(1));
        }
        for cell in &days {
            prop_assert_eq!(cell.day_of_month, cell.date.day());
        }
    }

    /// Property: the focused month appears once, in order, from day 1 to its last day
    #[test]
    fn prop_current_month_days_are_complete(
        year in 1900..2100i32,
        month in 1..=12u32,
        trailing in trailing_week(),
    ) {
        let focused = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
        let grid = build_calendar_grid_with(focused, trailing);

        let current: Vec<u32> = grid
            .weeks
            .iter()
            .flat_map(|week| week.current_month_days().map(|d| d.day_of_month).collect::<Vec<_>>())
            .collect();
        let expected: Vec<u32> = (1..=days_in_month(year, month)).collect();
        prop_assert_eq!(current, expected);

        // Previous-month cells only lead, next-month cells only trail
        let days: Vec<_> = grid.days().collect();
        let first_current = days.iter().position(|d| d.is_current_month()).unwrap();
        let last_current = days.iter().rposition(|d| d.is_current_month()).unwrap();
        prop_assert!(days[..first_current].iter().all(|d| d.is_previous_month()));
        prop_assert!(days[last_current + 1..].iter().all(|d| d.is_next_month()));
        prop_assert!(first_current < 7);
    }

    /// Property: omitting the trailing week ends on the row holding the last day
    #[test]
    fn prop_row_counts(year in 1900..2100i32, month in 1..=12u32) {
        let focused = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
        let omitted = build_calendar_grid_with(focused, TrailingWeek::Omit);
        let padded = build_calendar_grid_with(focused, TrailingWeek::Pad);

        prop_assert!((4..=6).contains(&omitted.row_count()));
        let last_row = omitted.weeks.last().unwrap();
        prop_assert!(last_row.iter().any(|d| d.is_current_month()));

        let last = NaiveDate::from_ymd_opt(year, month, days_in_month(year, month)).unwrap();
        if last.weekday() == Weekday::Sat {
            prop_assert_eq!(padded.row_count(), omitted.row_count() + 1);
            prop_assert!(padded.weeks.last().unwrap().iter().all(|d| d.is_next_month()));
        } else {
            prop_assert_eq!(padded.row_count(), omitted.row_count());
        }
    }
}
