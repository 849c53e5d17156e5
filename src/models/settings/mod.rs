// Settings module
// Picker behaviour loaded from settings.toml

use serde::{Deserialize, Serialize};

use crate::models::calendar::TrailingWeek;
use crate::models::time_step::TimeStep;

/// Drag speed (px/s) above which a released slider flings instead of
/// settling on the nearest boundary.
pub const DEFAULT_FLING_VELOCITY_THRESHOLD: f32 = 150.0;
pub const DEFAULT_SNAP_ANIMATION_SECS: f32 = 0.3;
pub const DEFAULT_ACCENT_COLOR: &str = "#4a83e7";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub time_step: TimeStep,
    pub fling_velocity_threshold: f32,
    pub snap_animation_secs: f32,
    pub trailing_week: TrailingWeek,
    /// Extra padding under the sheet's buttons, for devices with a home
    /// indicator or gesture bar.
    pub bottom_inset: f32,
    pub accent_color: String,
    pub follow_system_theme: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            time_step: TimeStep::default(),
            fling_velocity_threshold: DEFAULT_FLING_VELOCITY_THRESHOLD,
            snap_animation_secs: DEFAULT_SNAP_ANIMATION_SECS,
            trailing_week: TrailingWeek::default(),
            bottom_inset: 0.0,
            accent_color: DEFAULT_ACCENT_COLOR.to_string(),
            follow_system_theme: true,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), String> {
        if !self.fling_velocity_threshold.is_finite() || self.fling_velocity_threshold < 0.0 {
            return Err(format!(
                "fling_velocity_threshold must be a non-negative number, got {}",
                self.fling_velocity_threshold
            ));
        }

        if !self.snap_animation_secs.is_finite() || self.snap_animation_secs < 0.0 {
            return Err(format!(
                "snap_animation_secs must be a non-negative number, got {}",
                self.snap_animation_secs
            ));
        }

        if !self.bottom_inset.is_finite() || self.bottom_inset < 0.0 {
            return Err(format!(
                "bottom_inset must be a non-negative number, got {}",
                self.bottom_inset
            ));
        }

        Ok(())
    }
}
