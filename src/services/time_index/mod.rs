//! Mapping between clock times, boundary indexes and slider offsets.
//!
//! Boundary `i` is the time `i * step` minutes after midnight. The slider
//! ruler is translated horizontally so that the selected boundary sits under
//! the centre line: boundary `i` is selected when the ruler offset equals
//! `slider_width / 2 - i * bar_width_with_margin`.

use crate::models::time_step::{ClockTime, TimeStep, MINUTES_IN_AN_HOUR};

/// `[0, 1, ..., 1440 / step]`.
pub fn time_boundary_indexes(step: TimeStep) -> Vec<usize> {
    (0..step.boundary_count()).collect()
}

/// Callers clamp `index` to `[0, step.last_index()]` first.
pub fn index_to_time(index: usize, step: TimeStep) -> ClockTime {
    let per_hour = step.indexes_per_hour();
    ClockTime {
        hour: (index / per_hour) as u32,
        minute: (index % per_hour) as u32 * step.minutes(),
    }
}

/// Inverse of [`index_to_time`]. Minutes between boundaries floor to the
/// earlier boundary.
pub fn time_to_index(time: ClockTime, step: TimeStep) -> usize {
    time.hour as usize * step.indexes_per_hour() + (time.minute / step.minutes()) as usize
}

/// Fractional index under the centre line for a ruler offset.
pub fn slider_position_to_index(
    position_x: f32,
    bar_width_with_margin: f32,
    slider_width: f32,
) -> f32 {
    -((position_x - slider_width / 2.0) / bar_width_with_margin)
}

/// Ruler offset that puts `index` under the centre line.
pub fn index_to_slider_position(
    index: usize,
    bar_width_with_margin: f32,
    slider_width: f32,
) -> f32 {
    -(index as f32 * bar_width_with_margin - slider_width / 2.0)
}

/// One ruler offset per boundary, in index order (decreasing offsets).
pub fn snap_points(step: TimeStep, bar_width_with_margin: f32, slider_width: f32) -> Vec<f32> {
    time_boundary_indexes(step)
        .into_iter()
        .map(|index| index_to_slider_position(index, bar_width_with_margin, slider_width))
        .collect()
}

/// Round a fractional index and clamp it into `[0, len - 1]`.
pub fn clamp_index(raw_index: f32, len: usize) -> usize {
    let last = len.saturating_sub(1);
    let rounded = raw_index.round();
    if rounded.is_nan() || rounded <= 0.0 {
        0
    } else if rounded >= last as f32 {
        last
    } else {
        rounded as usize
    }
}

pub fn pad_hours(hour: u32) -> String {
    format!("{:02}", hour)
}

/// 12-hour clock with meridiem, e.g. `01:15 PM`. 24:00 reads as `12:00 AM`.
pub fn format_12h(time: ClockTime) -> String {
    let hour = time.hour % 24;
    let meridiem = if hour < 12 { "AM" } else { "PM" };
    let display_hour = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{}:{:02} {}", pad_hours(display_hour), time.minute, meridiem)
}

/// Ruler label without meridiem, e.g. `01:00`.
pub fn format_ruler_label(time: ClockTime) -> String {
    let display_hour = match time.hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{}:{:02}", pad_hours(display_hour), time.minute)
}

pub fn is_hour_boundary(index: usize, step: TimeStep) -> bool {
    (index as u32 * step.minutes()) % MINUTES_IN_AN_HOUR == 0
}

pub fn is_half_hour_boundary(index: usize, step: TimeStep) -> bool {
    (index as u32 * step.minutes()) % (MINUTES_IN_AN_HOUR / 2) == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;
    use test_case::test_case;

    #[test_case(TimeStep::One, 1441)]
    #[test_case(TimeStep::Five, 289)]
    #[test_case(TimeStep::Fifteen, 97)]
    #[test_case(TimeStep::Twenty, 73)]
    #[test_case(TimeStep::Sixty, 25)]
    fn test_boundary_indexes_length(step: TimeStep, expected: usize) {
        let indexes = time_boundary_indexes(step);
        assert_eq!(indexes.len(), expected);
        assert_eq!(indexes.first(), Some(&0));
        assert_eq!(indexes.last(), Some(&(expected - 1)));
    }

    #[test_case(5, TimeStep::Fifteen, ClockTime::new(1, 15))]
    #[test_case(0, TimeStep::Five, ClockTime::new(0, 0))]
    #[test_case(157, TimeStep::Five, ClockTime::new(13, 5))]
    #[test_case(288, TimeStep::Five, ClockTime::END_OF_DAY)]
    #[test_case(23, TimeStep::Sixty, ClockTime::new(23, 0))]
    #[test_case(71, TimeStep::Twenty, ClockTime::new(23, 40))]
    fn test_index_to_time(index: usize, step: TimeStep, expected: ClockTime) {
        assert_eq!(index_to_time(index, step), expected);
    }

    #[test]
    fn test_time_to_index_floors_between_boundaries() {
        assert_eq!(time_to_index(ClockTime::new(1, 29), TimeStep::Fifteen), 5);
        assert_eq!(time_to_index(ClockTime::new(1, 30), TimeStep::Fifteen), 6);
        assert_eq!(time_to_index(ClockTime::new(9, 59), TimeStep::Sixty), 9);
    }

    #[test]
    fn test_time_to_index_from_naive_time() {
        let time = NaiveTime::from_hms_opt(18, 47, 12).unwrap();
        assert_eq!(time_to_index(time.into(), TimeStep::Five), 18 * 12 + 9);
    }

    #[test]
    fn test_slider_position_round_trip() {
        let bar = 9.0;
        let width = 300.0;
        for index in [0usize, 1, 17, 288] {
            let position = index_to_slider_position(index, bar, width);
            let back = slider_position_to_index(position, bar, width);
            assert!((back - index as f32).abs() < 1e-3, "{index} -> {back}");
        }
    }

    #[test]
    fn test_centre_offset_is_index_zero() {
        assert_eq!(slider_position_to_index(150.0, 9.0, 300.0), 0.0);
        assert_eq!(slider_position_to_index(150.0 - 4.0 * 9.0, 9.0, 300.0), 4.0);
    }

    #[test]
    fn test_snap_points_decrease_by_bar_width() {
        let points = snap_points(TimeStep::Sixty, 10.0, 200.0);
        assert_eq!(points.len(), 25);
        assert_eq!(points[0], 100.0);
        assert_eq!(points[1], 90.0);
        assert_eq!(points[24], -140.0);
    }

    #[test_case(-3.2, 289, 0)]
    #[test_case(0.4, 289, 0)]
    #[test_case(0.5, 289, 1)]
    #[test_case(12.6, 289, 13)]
    #[test_case(400.0, 289, 288)]
    #[test_case(f32::NAN, 289, 0)]
    fn test_clamp_index(raw: f32, len: usize, expected: usize) {
        assert_eq!(clamp_index(raw, len), expected);
    }

    #[test_case(ClockTime::new(0, 0), "12:00 AM")]
    #[test_case(ClockTime::new(1, 15), "01:15 AM")]
    #[test_case(ClockTime::new(12, 5), "12:05 PM")]
    #[test_case(ClockTime::new(23, 55), "11:55 PM")]
    #[test_case(ClockTime::END_OF_DAY, "12:00 AM")]
    fn test_format_12h(time: ClockTime, expected: &str) {
        assert_eq!(format_12h(time), expected);
    }

    #[test]
    fn test_ruler_label() {
        assert_eq!(format_ruler_label(ClockTime::new(13, 0)), "01:00");
        assert_eq!(format_ruler_label(ClockTime::new(0, 0)), "12:00");
    }

    #[test]
    fn test_hour_and_half_hour_boundaries_follow_step() {
        assert!(is_hour_boundary(12, TimeStep::Five));
        assert!(!is_hour_boundary(6, TimeStep::Five));
        assert!(is_half_hour_boundary(6, TimeStep::Five));
        assert!(is_hour_boundary(4, TimeStep::Fifteen));
        assert!(is_half_hour_boundary(2, TimeStep::Fifteen));
        assert!(!is_half_hour_boundary(1, TimeStep::Fifteen));
        assert!(is_hour_boundary(1, TimeStep::Sixty));
    }
}
