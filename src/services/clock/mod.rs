//! Cached "today" for the pickers.
//!
//! The date pickers highlight today and style past selections differently,
//! so they need a current date that rolls over at local midnight even when
//! the modal stays open across it.

use std::time::Duration;

use chrono::{Local, NaiveDate, NaiveDateTime};

use crate::utils::date::next_midnight;

#[cfg_attr(test, mockall::automock)]
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Reads the local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

pub struct CurrentDateClock<C: Clock = SystemClock> {
    clock: C,
    today: NaiveDate,
}

impl CurrentDateClock<SystemClock> {
    pub fn system() -> Self {
        Self::new(SystemClock)
    }
}

impl<C: Clock> CurrentDateClock<C> {
    pub fn new(clock: C) -> Self {
        let today = clock.now().date();
        Self { clock, today }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Re-read the clock. Returns `true` when the cached date changed.
    pub fn refresh(&mut self) -> bool {
        let today = self.clock.now().date();
        if today == self.today {
            return false;
        }

        log::debug!("Current date rolled over from {} to {}", self.today, today);
        self.today = today;
        true
    }

    /// How long until the cached date goes stale.
    pub fn time_until_midnight(&self) -> Duration {
        let now = self.clock.now();
        (next_midnight(now) - now)
            .to_std()
            .unwrap_or(Duration::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn test_today_comes_from_clock() {
        let mut clock = MockClock::new();
        clock
            .expect_now()
            .returning(|| at(2024, 3, 1, 9, 30, 0));

        let current = CurrentDateClock::new(clock);
        assert_eq!(current.today(), NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    }

    #[test]
    fn test_time_until_midnight() {
        let mut clock = MockClock::new();
        clock
            .expect_now()
            .returning(|| at(2024, 3, 1, 23, 59, 0));

        let current = CurrentDateClock::new(clock);
        assert_eq!(current.time_until_midnight(), Duration::from_secs(60));
    }

    #[test]
    fn test_refresh_reports_rollover_once() {
        let now = Arc::new(Mutex::new(at(2024, 3, 1, 23, 59, 59)));
        let source = Arc::clone(&now);

        let mut clock = MockClock::new();
        clock
            .expect_now()
            .returning(move || *source.lock().unwrap());

        let mut current = CurrentDateClock::new(clock);
        assert!(!current.refresh());

        *now.lock().unwrap() = at(2024, 3, 2, 0, 0, 0);
        assert!(current.refresh());
        assert_eq!(current.today(), NaiveDate::from_ymd_opt(2024, 3, 2).unwrap());
        assert!(!current.refresh());
    }
}
