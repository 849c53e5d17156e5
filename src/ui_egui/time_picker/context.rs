//! Slider state owned by a time picker.
//!
//! Pointer and button events are queued as [`SliderUpdate`]s while the frame
//! is drawn and folded in once by [`SliderContext::apply_pending`], so the
//! ruler offset only changes at one point per frame.

use crate::models::time_step::TimeStep;
use crate::services::snap::snap_target;
use crate::services::time_index::{
    clamp_index, index_to_slider_position, slider_position_to_index, snap_points,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SliderUpdate {
    /// The bar container was laid out with this size
    Layout {
        width: f32,
        height: f32,
        selected_index: usize,
    },
    DragStart,
    /// Pointer moved `translation_x` since the drag began
    DragMove { translation_x: f32, velocity_x: f32 },
    DragEnd,
    /// Move the ruler by whole boundaries (+1 is one step later)
    Step { delta: i32 },
    /// Advance the snap animation
    Tick { dt: f32 },
}

/// Ruler spacing and snapping behaviour used when applying updates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderGeometry {
    pub step: TimeStep,
    pub bar_width_with_margin: f32,
    pub fling_threshold: f32,
    pub snap_secs: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct SnapAnimation {
    from: f32,
    to: f32,
    elapsed: f32,
    duration: f32,
}

impl SnapAnimation {
    fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        }
    }

    /// Ease-out cubic between `from` and `to`.
    fn value(&self) -> f32 {
        let t = self.progress();
        let eased = 1.0 - (1.0 - t).powi(3);
        self.from + (self.to - self.from) * eased
    }

    fn is_finished(&self) -> bool {
        self.progress() >= 1.0
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SliderContext {
    pub height: f32,
    /// Ruler offset when the current drag began
    pub offset_x: f32,
    /// Current ruler offset
    pub position_x: f32,
    /// Set while a drag is in progress; step buttons are ignored meanwhile
    pub slide_lock: bool,
    /// Where the ruler will settle when the drag is released
    pub target_x: f32,
    /// Zero until the bar container has been laid out
    pub width: f32,
    animation: Option<SnapAnimation>,
    pending: Vec<SliderUpdate>,
}

impl SliderContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn queue(&mut self, update: SliderUpdate) {
        self.pending.push(update);
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    pub fn is_laid_out(&self) -> bool {
        self.width > 0.0
    }

    /// Apply every queued update in order. Returns `true` when a drag, step
    /// or animation tick moved the ruler; layout alone never counts.
    pub fn apply_pending(&mut self, geometry: &SliderGeometry) -> bool {
        let pending = std::mem::take(&mut self.pending);
        let mut moved = false;
        for update in pending {
            let before = self.position_x;
            let is_layout = matches!(update, SliderUpdate::Layout { .. });
            self.apply(update, geometry);
            moved |= !is_layout && self.position_x != before;
        }
        moved
    }

    fn apply(&mut self, update: SliderUpdate, geometry: &SliderGeometry) {
        let bar = geometry.bar_width_with_margin;
        match update {
            SliderUpdate::Layout {
                width,
                height,
                selected_index,
            } => {
                self.height = height;
                if width != self.width {
                    self.position_x = index_to_slider_position(selected_index, bar, width);
                    self.target_x = self.position_x;
                    self.width = width;
                    self.animation = None;
                }
            }
            SliderUpdate::DragStart => {
                self.animation = None;
                self.slide_lock = true;
                self.offset_x = self.position_x;
                self.target_x = self.position_x;
            }
            SliderUpdate::DragMove {
                translation_x,
                velocity_x,
            } => {
                if !self.slide_lock {
                    return;
                }
                self.position_x = self.offset_x + translation_x;
                let points = snap_points(geometry.step, bar, self.width);
                self.target_x =
                    snap_target(self.position_x, velocity_x, &points, geometry.fling_threshold);
            }
            SliderUpdate::DragEnd => {
                if !self.slide_lock {
                    return;
                }
                self.slide_lock = false;
                self.animation = Some(SnapAnimation {
                    from: self.position_x,
                    to: self.target_x,
                    elapsed: 0.0,
                    duration: geometry.snap_secs,
                });
                // A zero-length animation lands immediately
                self.advance(0.0);
            }
            SliderUpdate::Step { delta } => {
                if self.slide_lock {
                    return;
                }
                self.finish_animation();
                let next = self.position_x - delta as f32 * bar;
                let index = slider_position_to_index(next, bar, self.width).round();
                let last = geometry.step.last_index() as f32;
                if index < 0.0 || index > last {
                    log::debug!("Ignoring step past the end of the day");
                    return;
                }
                self.position_x = next;
                self.target_x = next;
            }
            SliderUpdate::Tick { dt } => self.advance(dt),
        }
    }

    fn advance(&mut self, dt: f32) {
        let Some(animation) = self.animation.as_mut() else {
            return;
        };
        animation.elapsed += dt;
        self.position_x = animation.value();
        if animation.is_finished() {
            self.position_x = animation.to;
            self.animation = None;
        }
    }

    fn finish_animation(&mut self) {
        if let Some(animation) = self.animation.take() {
            self.position_x = animation.to;
        }
    }

    /// The boundary under the centre line, once laid out.
    pub fn selected_index(&self, geometry: &SliderGeometry) -> Option<usize> {
        if !self.is_laid_out() {
            return None;
        }
        let raw = slider_position_to_index(
            self.position_x,
            geometry.bar_width_with_margin,
            self.width,
        );
        Some(clamp_index(raw, geometry.step.boundary_count()))
    }
}
