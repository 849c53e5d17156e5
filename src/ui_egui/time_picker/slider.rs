use egui::{Align2, Color32, Rect, Sense, Vec2};

use super::context::{SliderContext, SliderUpdate};
use crate::models::time_step::TimeStep;
use crate::services::time_index::{
    format_ruler_label, index_to_time, is_half_hour_boundary, is_hour_boundary,
};
use crate::ui_egui::style::{BoxStyle, TimePickerStyleSheet};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BarKind {
    Plain,
    HalfHour,
    Hour,
}

impl BarKind {
    fn of(index: usize, step: TimeStep) -> Self {
        if is_hour_boundary(index, step) {
            BarKind::Hour
        } else if is_half_hour_boundary(index, step) {
            BarKind::HalfHour
        } else {
            BarKind::Plain
        }
    }
}

/// Every hour is also a half hour, so hour bars stack the half-hour slot
/// under the hour slot.
fn bar_style(style: &TimePickerStyleSheet, kind: BarKind) -> BoxStyle {
    let bar = style.bar.unwrap_or_default();
    match kind {
        BarKind::Plain => bar,
        BarKind::HalfHour => bar.merged(style.bar_half_hour.as_ref()),
        BarKind::Hour => bar
            .merged(style.bar_half_hour.as_ref())
            .merged(style.bar_hour.as_ref()),
    }
}

/// Draw the ruler and queue the pointer events it received this frame.
pub(super) fn render_slider(
    ui: &mut egui::Ui,
    context: &mut SliderContext,
    style: &TimePickerStyleSheet,
    step: TimeStep,
    selected_index: usize,
) {
    let bar = style.bar.unwrap_or_default();
    let hour_bar = bar_style(style, BarKind::Hour);
    let half_hour_bar = bar_style(style, BarKind::HalfHour);
    let selected_bar = style.bar_selected.unwrap_or_default();
    let indexes = style.bar_indexes.unwrap_or_default();
    let label = style.bar_text.unwrap_or_default();
    let spacing = style.bar_width_with_margin();

    let height = indexes.padding_top.unwrap_or(0.0) + hour_bar.height.unwrap_or(35.0);
    let (rect, response) =
        ui.allocate_exact_size(Vec2::new(ui.available_width(), height), Sense::drag());

    context.queue(SliderUpdate::Layout {
        width: rect.width(),
        height,
        selected_index,
    });

    if response.drag_started() {
        context.queue(SliderUpdate::DragStart);
    }
    if response.dragged() {
        let translation_x = ui.input(|i| {
            match (i.pointer.press_origin(), i.pointer.interact_pos()) {
                (Some(origin), Some(current)) => current.x - origin.x,
                _ => 0.0,
            }
        });
        let velocity_x = ui.input(|i| i.pointer.velocity().x);
        context.queue(SliderUpdate::DragMove {
            translation_x,
            velocity_x,
        });
    }
    if response.drag_stopped() {
        context.queue(SliderUpdate::DragEnd);
    }

    if !ui.is_rect_visible(rect) || !context.is_laid_out() {
        return;
    }

    let container = style.bar_container.unwrap_or_default();
    let painter = ui.painter_at(rect);
    if let Some(fill) = container.background {
        painter.rect_filled(rect, container.rounding(), fill);
    }

    // Centre of bar `i` sits at origin + i * spacing
    let origin = rect.left() + context.position_x;
    let first = (((rect.left() - origin) / spacing).floor() - 1.0).max(0.0) as usize;
    let last = (((rect.right() - origin) / spacing).ceil() + 1.0)
        .clamp(0.0, step.last_index() as f32) as usize;

    let bar_width = bar.width.unwrap_or(5.0);
    for index in first..=last {
        let x = origin + index as f32 * spacing;
        let kind = BarKind::of(index, step);
        let is_hour = kind == BarKind::Hour;
        let shape = match kind {
            BarKind::Hour => hour_bar,
            BarKind::HalfHour => half_hour_bar,
            BarKind::Plain => bar,
        };
        let fill = if index == selected_index {
            selected_bar.background.or(shape.background)
        } else {
            shape.background
        };

        let bar_height = shape.height.unwrap_or(20.0);
        let bar_rect = Rect::from_min_max(
            egui::pos2(x - bar_width / 2.0, rect.bottom() - bar_height),
            egui::pos2(x + bar_width / 2.0, rect.bottom()),
        );
        painter.rect_filled(bar_rect, shape.rounding(), fill.unwrap_or(Color32::GRAY));

        if is_hour {
            painter.text(
                egui::pos2(x, bar_rect.top() - 5.0),
                Align2::CENTER_BOTTOM,
                format_ruler_label(index_to_time(index, step)),
                label.font_id(),
                label.color_or(Color32::GRAY),
            );
        }
    }
}
