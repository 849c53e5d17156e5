// Time step and clock time models

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::PickerError;

pub const MINUTES_IN_AN_HOUR: u32 = 60;
pub const MINUTES_IN_A_DAY: u32 = 1440;

/// Minute granularity of the time picker. Every variant divides a day evenly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum TimeStep {
    One,
    Two,
    Three,
    Four,
    #[default]
    Five,
    Ten,
    Fifteen,
    Twenty,
    Thirty,
    Sixty,
}

impl TimeStep {
    pub const ALL: [TimeStep; 10] = [
        TimeStep::One,
        TimeStep::Two,
        TimeStep::Three,
        TimeStep::Four,
        TimeStep::Five,
        TimeStep::Ten,
        TimeStep::Fifteen,
        TimeStep::Twenty,
        TimeStep::Thirty,
        TimeStep::Sixty,
    ];

    pub fn minutes(self) -> u32 {
        match self {
            TimeStep::One => 1,
            TimeStep::Two => 2,
            TimeStep::Three => 3,
            TimeStep::Four => 4,
            TimeStep::Five => 5,
            TimeStep::Ten => 10,
            TimeStep::Fifteen => 15,
            TimeStep::Twenty => 20,
            TimeStep::Thirty => 30,
            TimeStep::Sixty => 60,
        }
    }

    pub fn indexes_per_hour(self) -> usize {
        (MINUTES_IN_AN_HOUR / self.minutes()) as usize
    }

    /// Index of the 24:00 boundary.
    pub fn last_index(self) -> usize {
        (MINUTES_IN_A_DAY / self.minutes()) as usize
    }

    /// Number of selectable boundaries, both midnights included.
    pub fn boundary_count(self) -> usize {
        self.last_index() + 1
    }
}

impl TryFrom<u32> for TimeStep {
    type Error = PickerError;

    fn try_from(minutes: u32) -> Result<Self, Self::Error> {
        TimeStep::ALL
            .into_iter()
            .find(|step| step.minutes() == minutes)
            .ok_or(PickerError::InvalidTimeStep(minutes))
    }
}

impl From<TimeStep> for u32 {
    fn from(step: TimeStep) -> Self {
        step.minutes()
    }
}

impl FromStr for TimeStep {
    type Err = PickerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let minutes = s
            .trim()
            .parse::<u32>()
            .map_err(|_| PickerError::InvalidTimeStepText(s.to_string()))?;
        TimeStep::try_from(minutes)
    }
}

impl fmt::Display for TimeStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} min", self.minutes())
    }
}

/// Time of day on the picker's scale. Unlike `NaiveTime` it can hold 24:00,
/// the end-of-day boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime {
    pub hour: u32,
    pub minute: u32,
}

impl ClockTime {
    pub const END_OF_DAY: ClockTime = ClockTime { hour: 24, minute: 0 };

    pub fn new(hour: u32, minute: u32) -> Self {
        Self { hour, minute }
    }

    pub fn minutes_since_midnight(self) -> u32 {
        self.hour * MINUTES_IN_AN_HOUR + self.minute
    }

    /// `None` for 24:00.
    pub fn to_naive_time(self) -> Option<NaiveTime> {
        NaiveTime::from_hms_opt(self.hour, self.minute, 0)
    }
}

impl From<NaiveTime> for ClockTime {
    fn from(time: NaiveTime) -> Self {
        Self {
            hour: time.hour(),
            minute: time.minute(),
        }
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_step_divides_a_day() {
        for step in TimeStep::ALL {
            assert_eq!(MINUTES_IN_A_DAY % step.minutes(), 0, "{step}");
            assert_eq!(MINUTES_IN_AN_HOUR % step.minutes(), 0, "{step}");
        }
    }

    #[test]
    fn test_try_from_rejects_unknown_steps() {
        assert_eq!(TimeStep::try_from(15).unwrap(), TimeStep::Fifteen);
        assert!(matches!(
            TimeStep::try_from(7),
            Err(PickerError::InvalidTimeStep(7))
        ));
        assert!(TimeStep::try_from(0).is_err());
    }

    #[test]
    fn test_parse_accepts_numeric_strings() {
        assert_eq!("30".parse::<TimeStep>().unwrap(), TimeStep::Thirty);
        assert_eq!(" 5 ".parse::<TimeStep>().unwrap(), TimeStep::Five);
        assert!("quarter".parse::<TimeStep>().is_err());
        assert!("45".parse::<TimeStep>().is_err());
    }

    #[test]
    fn test_boundary_count_includes_end_of_day() {
        assert_eq!(TimeStep::Sixty.boundary_count(), 25);
        assert_eq!(TimeStep::Five.boundary_count(), 289);
        assert_eq!(TimeStep::Five.indexes_per_hour(), 12);
    }

    #[test]
    fn test_clock_time_end_of_day_has_no_naive_time() {
        assert_eq!(ClockTime::END_OF_DAY.to_naive_time(), None);
        assert_eq!(ClockTime::END_OF_DAY.minutes_since_midnight(), 1440);
        assert_eq!(
            ClockTime::new(13, 45).to_naive_time(),
            NaiveTime::from_hms_opt(13, 45, 0)
        );
        assert_eq!(ClockTime::new(7, 5).to_string(), "07:05");
    }
}
