//! Snap point selection for the time slider.

/// Seconds of travel a release velocity is projected over when picking a
/// fling target.
pub const FLING_PROJECTION_SECS: f32 = 0.2;

/// The snap point nearest to `position`. On an exact tie the earlier
/// candidate wins. Returns `position` unchanged when there are no points.
pub fn closest_snap_point(position: f32, snap_points: &[f32]) -> f32 {
    snap_points
        .iter()
        .copied()
        .reduce(|best, candidate| {
            if (candidate - position).abs() < (best - position).abs() {
                candidate
            } else {
                best
            }
        })
        .unwrap_or(position)
}

/// Fling target: the snap point nearest to where the release velocity would
/// carry `position`, so a fast drag keeps travelling in its direction past
/// the nearest boundary.
pub fn velocity_snap_point(position: f32, velocity: f32, snap_points: &[f32]) -> f32 {
    let projected = position + FLING_PROJECTION_SECS * velocity;
    closest_snap_point(projected, snap_points)
}

/// Picks the fling target when the drag is faster than `fling_threshold`
/// (px/s), the closest snap point otherwise.
pub fn snap_target(position: f32, velocity: f32, snap_points: &[f32], fling_threshold: f32) -> f32 {
    if velocity.abs() > fling_threshold {
        velocity_snap_point(position, velocity, snap_points)
    } else {
        closest_snap_point(position, snap_points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closest_snap_point() {
        assert_eq!(closest_snap_point(12.0, &[0.0, 10.0, 20.0]), 10.0);
        assert_eq!(closest_snap_point(-50.0, &[0.0, 10.0, 20.0]), 0.0);
        assert_eq!(closest_snap_point(18.0, &[0.0, 10.0, 20.0]), 20.0);
    }

    #[test]
    fn test_exact_tie_keeps_first_candidate() {
        assert_eq!(closest_snap_point(5.0, &[0.0, 10.0]), 0.0);
        assert_eq!(closest_snap_point(5.0, &[10.0, 0.0]), 10.0);
    }

    #[test]
    fn test_closest_snap_point_with_no_points() {
        assert_eq!(closest_snap_point(3.5, &[]), 3.5);
    }

    #[test]
    fn test_fling_travels_past_nearest_point() {
        let points = [100.0, 90.0, 80.0, 70.0, 60.0];
        // Nearest to 89 is 90, but a leftward fling continues on
        assert_eq!(velocity_snap_point(89.0, -500.0, &points), 60.0);
        assert_eq!(velocity_snap_point(89.0, 60.0, &points), 100.0);
    }

    #[test]
    fn test_snap_target_respects_threshold() {
        let points = [100.0, 90.0, 80.0, 70.0, 60.0];
        assert_eq!(snap_target(89.0, -140.0, &points, 150.0), 90.0);
        assert_eq!(snap_target(89.0, -160.0, &points, 150.0), 60.0);
        assert_eq!(snap_target(89.0, 0.0, &points, 150.0), 90.0);
    }
}
