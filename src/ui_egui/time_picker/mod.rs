//! Time picker bottom sheet.
//!
//! Shows the selected time between − and + step buttons above a horizontal
//! ruler of time boundaries. Dragging the ruler moves the boundary under the
//! centre line; releasing settles on a boundary, flinging past the nearest
//! one when the drag was fast.

mod context;
mod controls;
mod slider;

pub use context::{SliderContext, SliderGeometry, SliderUpdate};

use chrono::{Duration, NaiveDateTime};
use egui::{Color32, Id};

use super::modal::{show_sheet, PickerOutcome, SheetAction, SheetContent};
use super::style::{accent_from_settings, TimePickerStyleSheet};
use crate::models::settings::{
    Settings, DEFAULT_ACCENT_COLOR, DEFAULT_FLING_VELOCITY_THRESHOLD, DEFAULT_SNAP_ANIMATION_SECS,
};
use crate::models::time_step::{ClockTime, TimeStep};
use crate::services::time_index::{index_to_time, time_to_index};
use crate::utils::date::start_of_day;

const MISSING_SELECTION_MESSAGE: &str = "You need to select a time";

type ConfirmCallback = Box<dyn FnMut(NaiveDateTime)>;
type CancelCallback = Box<dyn FnMut()>;

pub struct TimePickerModal {
    id: Id,
    visible: bool,
    initial_datetime: NaiveDateTime,
    step: TimeStep,
    selected_index: Option<usize>,
    show_selection_error: bool,
    context: SliderContext,
    fling_threshold: f32,
    snap_secs: f32,
    accent: Color32,
    overrides: TimePickerStyleSheet,
    style: TimePickerStyleSheet,
    bottom_inset: f32,
    on_confirm: Option<ConfirmCallback>,
    on_cancel: Option<CancelCallback>,
}

impl TimePickerModal {
    /// A hidden picker at `initial_datetime`, floored to a 5-minute boundary.
    pub fn new(initial_datetime: NaiveDateTime) -> Self {
        let accent = accent_from_settings(DEFAULT_ACCENT_COLOR);
        let step = TimeStep::default();
        Self {
            id: Id::new("time_picker_modal"),
            visible: false,
            initial_datetime,
            step,
            selected_index: Some(time_to_index(initial_datetime.time().into(), step)),
            show_selection_error: false,
            context: SliderContext::new(),
            fling_threshold: DEFAULT_FLING_VELOCITY_THRESHOLD,
            snap_secs: DEFAULT_SNAP_ANIMATION_SECS,
            accent,
            overrides: TimePickerStyleSheet::default(),
            style: TimePickerStyleSheet::defaults(accent),
            bottom_inset: 0.0,
            on_confirm: None,
            on_cancel: None,
        }
    }

    pub fn id_source(mut self, id_source: impl std::hash::Hash) -> Self {
        self.id = Id::new(id_source);
        self
    }

    pub fn time_step(mut self, step: TimeStep) -> Self {
        self.set_time_step(step);
        self
    }

    pub fn with_settings(mut self, settings: &Settings) -> Self {
        self.fling_threshold = settings.fling_velocity_threshold;
        self.snap_secs = settings.snap_animation_secs;
        self.bottom_inset = settings.bottom_inset;
        self.accent = accent_from_settings(&settings.accent_color);
        self.restyle();
        self.set_time_step(settings.time_step);
        self
    }

    pub fn stylesheet(mut self, overrides: TimePickerStyleSheet) -> Self {
        self.overrides = overrides;
        self.restyle();
        self
    }

    pub fn on_confirm(mut self, callback: impl FnMut(NaiveDateTime) + 'static) -> Self {
        self.on_confirm = Some(Box::new(callback));
        self
    }

    pub fn on_cancel(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_cancel = Some(Box::new(callback));
        self
    }

    fn restyle(&mut self) {
        self.style = TimePickerStyleSheet::defaults(self.accent).overlaid(&self.overrides);
        // Bar spacing may have changed
        self.context = SliderContext::new();
    }

    /// Change granularity, keeping the selected time (floored to the new
    /// step).
    pub fn set_time_step(&mut self, step: TimeStep) {
        if step == self.step {
            return;
        }
        let time = self
            .selected_time()
            .unwrap_or_else(|| self.initial_datetime.time().into());
        self.step = step;
        self.selected_index = Some(time_to_index(time, step).min(step.last_index()));
        self.context = SliderContext::new();
    }

    /// Clear the selection; Confirm will be refused until one is made.
    pub fn clear_selection(&mut self) {
        self.selected_index = None;
    }

    pub fn open(&mut self) {
        self.visible = true;
        self.show_selection_error = false;
    }

    pub fn close(&mut self) {
        self.visible = false;
        // Re-centre on the selection the next time the ruler is laid out
        self.context = SliderContext::new();
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn step(&self) -> TimeStep {
        self.step
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected_index
    }

    pub fn selected_time(&self) -> Option<ClockTime> {
        self.selected_index.map(|index| index_to_time(index, self.step))
    }

    pub fn selection_error(&self) -> Option<&'static str> {
        self.show_selection_error.then_some(MISSING_SELECTION_MESSAGE)
    }

    pub fn slider(&self) -> &SliderContext {
        &self.context
    }

    fn geometry(&self) -> SliderGeometry {
        SliderGeometry {
            step: self.step,
            bar_width_with_margin: self.style.bar_width_with_margin(),
            fling_threshold: self.fling_threshold,
            snap_secs: self.snap_secs,
        }
    }

    /// Queue a slider update to be applied with the next batch.
    pub fn queue(&mut self, update: SliderUpdate) {
        self.context.queue(update);
    }

    /// Fold queued slider updates in. The selection only follows the ruler
    /// when a drag, step or snap actually moved it, so a cleared selection
    /// stays cleared across idle frames.
    pub fn apply_pending(&mut self) {
        let geometry = self.geometry();
        if !self.context.apply_pending(&geometry) {
            return;
        }
        if let Some(index) = self.context.selected_index(&geometry) {
            if self.selected_index != Some(index) {
                log::trace!("Time picker index {:?} -> {}", self.selected_index, index);
                self.selected_index = Some(index);
                self.show_selection_error = false;
            }
        }
    }

    pub fn add_one_step(&mut self) {
        self.step_by(1);
    }

    pub fn remove_one_step(&mut self) {
        self.step_by(-1);
    }

    fn step_by(&mut self, delta: i32) {
        if self.context.is_laid_out() {
            self.queue(SliderUpdate::Step { delta });
            self.apply_pending();
            return;
        }

        // No ruler yet: move the index directly
        let current = self.selected_index.unwrap_or(0) as i64;
        let next = current + i64::from(delta);
        if (0..=self.step.last_index() as i64).contains(&next) {
            self.selected_index = Some(next as usize);
        }
    }

    /// The initial date at the selected time; 24:00 is midnight of the
    /// following day.
    pub fn selected_datetime(&self) -> Option<NaiveDateTime> {
        self.selected_time().map(|time| {
            start_of_day(self.initial_datetime.date())
                + Duration::minutes(i64::from(time.minutes_since_midnight()))
        })
    }

    pub fn confirm(&mut self) -> PickerOutcome<NaiveDateTime> {
        let Some(datetime) = self.selected_datetime() else {
            log::debug!("Time picker confirm rejected: nothing selected");
            self.show_selection_error = true;
            return PickerOutcome::Pending;
        };

        log::info!("Time picker confirmed {}", datetime);
        if let Some(callback) = self.on_confirm.as_mut() {
            callback(datetime);
        }
        self.close();
        PickerOutcome::Confirmed(datetime)
    }

    pub fn cancel(&mut self) -> PickerOutcome<NaiveDateTime> {
        log::info!("Time picker cancelled");
        if let Some(callback) = self.on_cancel.as_mut() {
            callback();
        }
        self.close();
        PickerOutcome::Cancelled
    }

    pub fn show(&mut self, ctx: &egui::Context) -> PickerOutcome<NaiveDateTime> {
        if !self.visible {
            return PickerOutcome::Pending;
        }

        if self.context.is_animating() {
            let dt = ctx.input(|i| i.stable_dt);
            self.queue(SliderUpdate::Tick { dt });
        }

        let style = self.style.clone();
        let step = self.step;
        let selected_index = self.selected_index.unwrap_or(0);
        let mut requested_step = None;

        let action = show_sheet(
            ctx,
            SheetContent {
                id: self.id,
                style: &style.modal,
                heading: "Select a Time",
                error: self.selection_error(),
                bottom_inset: self.bottom_inset,
            },
            |ui| {
                let selector = style.time_selector.unwrap_or_default();
                selector.frame().show(ui, |ui| {
                    requested_step =
                        controls::render_controls_and_value(ui, &style, step, selected_index);
                    slider::render_slider(ui, &mut self.context, &style, step, selected_index);
                });
            },
        );

        if let Some(delta) = requested_step {
            self.queue(SliderUpdate::Step { delta });
        }
        self.apply_pending();

        if self.context.is_animating() || self.context.slide_lock {
            ctx.request_repaint();
        }

        match action {
            SheetAction::Confirm => self.confirm(),
            SheetAction::Cancel => self.cancel(),
            SheetAction::None => PickerOutcome::Pending,
        }
    }
}
