//! Month grid generation for the date picker.
//!
//! A grid always starts on the Sunday on or before the first of the focused
//! month and ends on a Saturday, so every row holds exactly seven days. The
//! leading cells belong to the previous month, the trailing cells to the next.

use chrono::{Datelike, Duration, NaiveDate};

use crate::models::calendar::{
    CalendarDay, CalendarGrid, CalendarWeek, MonthMembership, TrailingWeek,
};
use crate::utils::date::{days_in_month, first_of_month};

const DAYS_PER_WEEK: u32 = 7;

/// Build the grid for the month containing `focused`, ending on the row that
/// holds the month's last day.
pub fn build_calendar_grid(focused: NaiveDate) -> CalendarGrid {
    build_calendar_grid_with(focused, TrailingWeek::Omit)
}

pub fn build_calendar_grid_with(focused: NaiveDate, trailing: TrailingWeek) -> CalendarGrid {
    let first = first_of_month(focused);
    let last_day = days_in_month(first.year(), first.month());

    // 0 when the month starts on a Sunday: no previous-month cells
    let leading = first.weekday().num_days_from_sunday();

    let filled = leading + last_day;
    let remainder = filled % DAYS_PER_WEEK;
    let trailing_cells = match (remainder, trailing) {
        (0, TrailingWeek::Omit) => 0,
        (0, TrailingWeek::Pad) => DAYS_PER_WEEK,
        (partial, _) => DAYS_PER_WEEK - partial,
    };

    let row_count = (filled + trailing_cells) / DAYS_PER_WEEK;
    let grid_start = first - Duration::days(i64::from(leading));

    let weeks = (0..row_count)
        .map(|row| CalendarWeek {
            days: std::array::from_fn(|column| {
                let offset = i64::from(row * DAYS_PER_WEEK) + column as i64;
                calendar_day(grid_start + Duration::days(offset), first)
            }),
        })
        .collect();

    log::trace!(
        "Built calendar grid for {}: {} rows ({} leading, {} trailing)",
        first.format("%Y-%m"),
        row_count,
        leading,
        trailing_cells
    );

    CalendarGrid {
        focused_month: first,
        weeks,
    }
}

fn calendar_day(date: NaiveDate, focused_first: NaiveDate) -> CalendarDay {
    let membership = if date < focused_first {
        MonthMembership::Previous
    } else if date.month() == focused_first.month() && date.year() == focused_first.year() {
        MonthMembership::Current
    } else {
        MonthMembership::Next
    };

    CalendarDay {
        date,
        membership,
        day_of_month: date.day(),
    }
}
