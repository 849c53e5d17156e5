use egui::{Align, Layout, Vec2};

use crate::models::time_step::TimeStep;
use crate::services::time_index::{format_12h, index_to_time};
use crate::ui_egui::style::TimePickerStyleSheet;

/// "−  01:15 PM  +" row. Returns the requested step, if a button was
/// pressed.
pub(super) fn render_controls_and_value(
    ui: &mut egui::Ui,
    style: &TimePickerStyleSheet,
    step: TimeStep,
    selected_index: usize,
) -> Option<i32> {
    let container = style.controls_and_value_container.unwrap_or_default();
    let value = style.value.unwrap_or_default();
    let control = style.control_text.unwrap_or_default();

    let mut requested = None;
    container.frame().show(ui, |ui| {
        let width = ui.available_width();
        ui.allocate_ui_with_layout(
            Vec2::new(width, value.size.unwrap_or(30.0) * 1.5),
            Layout::left_to_right(Align::Center),
            |ui| {
                let third = width / 3.0;
                ui.allocate_ui_with_layout(
                    Vec2::new(third, 0.0),
                    Layout::centered_and_justified(egui::Direction::LeftToRight),
                    |ui| {
                        if ui
                            .add(egui::Button::new(control.rich("−")).frame(false))
                            .on_hover_text(format!("Remove {}", step))
                            .clicked()
                        {
                            requested = Some(-1);
                        }
                    },
                );
                ui.allocate_ui_with_layout(
                    Vec2::new(third, 0.0),
                    Layout::centered_and_justified(egui::Direction::LeftToRight),
                    |ui| {
                        ui.label(value.rich(format_12h(index_to_time(selected_index, step))));
                    },
                );
                ui.allocate_ui_with_layout(
                    Vec2::new(third, 0.0),
                    Layout::centered_and_justified(egui::Direction::LeftToRight),
                    |ui| {
                        if ui
                            .add(egui::Button::new(control.rich("+")).frame(false))
                            .on_hover_text(format!("Add {}", step))
                            .clicked()
                        {
                            requested = Some(1);
                        }
                    },
                );
            },
        );
    });
    ui.add_space(container.margin_bottom.unwrap_or(0.0));

    requested
}
