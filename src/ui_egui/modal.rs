//! Bottom-sheet chrome shared by the date and time pickers.
//!
//! Draws a dimmed backdrop over the whole screen and a sheet anchored to the
//! bottom edge holding a heading, the picker body, an inline error line and
//! the Confirm/Cancel buttons. Tapping the backdrop or pressing Escape
//! cancels; taps on the sheet never reach the backdrop.

use egui::{Align2, Color32, Id, Response, Sense, Vec2};

use super::style::{BoxStyle, ModalStyleSheet, TextStyle};

const MAX_SHEET_WIDTH: f32 = 480.0;

/// Result of showing a picker for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerOutcome<T> {
    /// The modal is hidden or still open
    Pending,
    /// The user confirmed a value
    Confirmed(T),
    /// The user dismissed the modal
    Cancelled,
}

impl<T> PickerOutcome<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, PickerOutcome::Pending)
    }

    pub fn confirmed(self) -> Option<T> {
        match self {
            PickerOutcome::Confirmed(value) => Some(value),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SheetAction {
    None,
    Confirm,
    Cancel,
}

pub(crate) struct SheetContent<'a> {
    pub id: Id,
    pub style: &'a ModalStyleSheet,
    pub heading: &'a str,
    pub error: Option<&'a str>,
    pub bottom_inset: f32,
}

pub(crate) fn show_sheet(
    ctx: &egui::Context,
    content: SheetContent<'_>,
    add_body: impl FnOnce(&mut egui::Ui),
) -> SheetAction {
    let SheetContent {
        id,
        style,
        heading,
        error,
        bottom_inset,
    } = content;

    let screen = ctx.screen_rect();
    let container = style.container.unwrap_or_default();

    let backdrop_clicked = egui::Area::new(id.with("backdrop"))
        .order(egui::Order::Middle)
        .fixed_pos(screen.min)
        .show(ctx, |ui| {
            let response = ui.allocate_rect(screen, Sense::click());
            ui.painter().rect_filled(
                screen,
                0.0,
                container.background.unwrap_or(Color32::TRANSPARENT),
            );
            response.clicked()
        })
        .inner;

    let mut action = SheetAction::None;
    let sheet_width = screen.width().min(MAX_SHEET_WIDTH);

    egui::Area::new(id.with("sheet"))
        .order(egui::Order::Foreground)
        .anchor(Align2::CENTER_BOTTOM, Vec2::ZERO)
        .show(ctx, |ui| {
            let frame = style.content.unwrap_or_default().frame();
            frame.show(ui, |ui| {
                ui.set_width(sheet_width);

                let heading_style = style.heading.unwrap_or_default();
                ui.add_space(20.0);
                ui.vertical_centered(|ui| ui.label(heading_style.rich(heading)));
                ui.add_space(20.0);

                add_body(ui);

                render_error_line(ui, style, error);

                if sheet_button(
                    ui,
                    style.confirm_button.unwrap_or_default(),
                    style.confirm_button_text.unwrap_or_default(),
                    "Confirm",
                )
                .clicked()
                {
                    action = SheetAction::Confirm;
                }

                if sheet_button(
                    ui,
                    style.cancel_button.unwrap_or_default(),
                    style.cancel_button_text.unwrap_or_default(),
                    "Cancel",
                )
                .clicked()
                {
                    action = SheetAction::Cancel;
                }

                ui.add_space(bottom_inset);
            });
        });

    if action == SheetAction::None
        && (backdrop_clicked || ctx.input(|i| i.key_pressed(egui::Key::Escape)))
    {
        action = SheetAction::Cancel;
    }

    action
}

fn render_error_line(ui: &mut egui::Ui, style: &ModalStyleSheet, error: Option<&str>) {
    let container = style.error_container.unwrap_or_default();
    let text = style.error_text.unwrap_or_default();
    let height = container.height.unwrap_or(60.0);

    let (rect, _) = ui.allocate_exact_size(Vec2::new(ui.available_width(), height), Sense::hover());
    if let Some(message) = error {
        // Sits at the bottom of the reserved space, right above Confirm
        let padding = container.padding_y.unwrap_or(0.0);
        let anchor = egui::pos2(rect.center().x, rect.bottom() - padding);
        ui.painter().text(
            anchor,
            Align2::CENTER_BOTTOM,
            message,
            text.font_id(),
            text.color_or(Color32::RED),
        );
    }
}

/// Full-width button painted from a style slot.
pub(crate) fn sheet_button(
    ui: &mut egui::Ui,
    style: BoxStyle,
    text: TextStyle,
    label: &str,
) -> Response {
    let margin_x = style.margin_x.unwrap_or(0.0);
    let font = text.font_id();
    let height = font.size + style.padding_y.unwrap_or(0.0) * 2.0;
    let width = (ui.available_width() - margin_x * 2.0).max(0.0);

    let response = ui
        .horizontal(|ui| {
            ui.add_space(margin_x);
            let (rect, response) = ui.allocate_exact_size(Vec2::new(width, height), Sense::click());
            if ui.is_rect_visible(rect) {
                let fill = style.background.unwrap_or(Color32::TRANSPARENT);
                let fill = if response.hovered() {
                    fill.gamma_multiply(0.9)
                } else {
                    fill
                };
                let painter = ui.painter();
                painter.rect_filled(rect, style.rounding(), fill);
                painter.text(
                    rect.center(),
                    Align2::CENTER_CENTER,
                    label,
                    font,
                    text.color_or(ui.visuals().text_color()),
                );
            }
            response
        })
        .inner;

    ui.add_space(style.margin_bottom.unwrap_or(0.0));
    response
}
