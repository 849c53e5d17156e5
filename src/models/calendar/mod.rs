// Calendar grid model
// Days, weeks and the month grid rendered by the date picker

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Which month a grid cell belongs to, relative to the focused month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MonthMembership {
    Previous,
    Current,
    Next,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub membership: MonthMembership,
    pub day_of_month: u32,
}

impl CalendarDay {
    pub fn is_current_month(&self) -> bool {
        self.membership == MonthMembership::Current
    }

    pub fn is_previous_month(&self) -> bool {
        self.membership == MonthMembership::Previous
    }

    pub fn is_next_month(&self) -> bool {
        self.membership == MonthMembership::Next
    }
}

/// Seven consecutive days, Sunday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarWeek {
    pub days: [CalendarDay; 7],
}

impl CalendarWeek {
    pub fn iter(&self) -> impl Iterator<Item = &CalendarDay> {
        self.days.iter()
    }

    pub fn current_month_days(&self) -> impl Iterator<Item = &CalendarDay> {
        self.days.iter().filter(|day| day.is_current_month())
    }
}

/// What to do when the focused month's last day lands on a Saturday.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrailingWeek {
    /// End the grid on the row that holds the last day of the month.
    #[default]
    Omit,
    /// Append one full row of next-month days.
    Pad,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarGrid {
    /// First day of the month the grid was built for
    pub focused_month: NaiveDate,
    pub weeks: Vec<CalendarWeek>,
}

impl CalendarGrid {
    pub fn row_count(&self) -> usize {
        self.weeks.len()
    }

    pub fn days(&self) -> impl Iterator<Item = &CalendarDay> {
        self.weeks.iter().flat_map(|week| week.days.iter())
    }

    /// Cell lookup with the row clamped to the last row and the column
    /// clamped to Saturday.
    pub fn day_at_clamped(&self, row: usize, column: usize) -> Option<&CalendarDay> {
        let last_row = self.weeks.len().checked_sub(1)?;
        self.weeks
            .get(row.min(last_row))
            .map(|week| &week.days[column.min(6)])
    }
}
