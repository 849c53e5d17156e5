// Date utility functions
// Month arithmetic shared by the calendar grid and the date picker controls

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};

/// Number of days in the given month (1-based).
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(30)
}

/// First day of the month containing `date`.
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Shift a date by the given number of months, clamping the day to the
/// length of the target month (Jan 31 + 1 month = Feb 28/29).
pub fn shift_month(date: NaiveDate, delta: i32) -> NaiveDate {
    let total_months = (date.year() * 12) + (date.month() as i32 - 1) + delta;
    let new_year = total_months.div_euclid(12);
    let new_month = (total_months.rem_euclid(12) + 1) as u32;
    let max_day = days_in_month(new_year, new_month);
    let day = date.day().min(max_day);
    NaiveDate::from_ymd_opt(new_year, new_month, day).unwrap_or(date)
}

pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// The instant the next calendar day begins.
pub fn next_midnight(now: NaiveDateTime) -> NaiveDateTime {
    start_of_day(now.date()) + Duration::days(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_days_in_month_handles_leap_years() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2100, 2), 28);
        assert_eq!(days_in_month(2000, 2), 29);
        assert_eq!(days_in_month(2024, 12), 31);
        assert_eq!(days_in_month(2024, 4), 30);
    }

    #[test]
    fn test_shift_month_clamps_day() {
        assert_eq!(shift_month(date(2024, 1, 31), 1), date(2024, 2, 29));
        assert_eq!(shift_month(date(2024, 3, 31), -1), date(2024, 2, 29));
        assert_eq!(shift_month(date(2024, 12, 15), 1), date(2025, 1, 15));
        assert_eq!(shift_month(date(2024, 1, 15), -1), date(2023, 12, 15));
    }

    #[test]
    fn test_shift_month_by_a_year() {
        assert_eq!(shift_month(date(2024, 2, 29), 12), date(2025, 2, 28));
        assert_eq!(shift_month(date(2024, 6, 10), -12), date(2023, 6, 10));
    }

    #[test]
    fn test_first_of_month() {
        assert_eq!(first_of_month(date(2024, 3, 17)), date(2024, 3, 1));
    }

    #[test]
    fn test_next_midnight_rolls_over_month_end() {
        let now = date(2024, 2, 29).and_hms_opt(23, 59, 30).unwrap();
        assert_eq!(next_midnight(now), start_of_day(date(2024, 3, 1)));
    }
}
