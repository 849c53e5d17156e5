//! Date picker bottom sheet.
//!
//! A month grid with year and month navigation. Pressing a cell marks its
//! date as the tap target and releasing commits it as the selection; the
//! selection is only handed to the caller on Confirm.

use chrono::{Datelike, NaiveDate};
use egui::{Align, Align2, Color32, Id, Layout, Rect, Sense, Vec2};

use super::modal::{show_sheet, PickerOutcome, SheetAction, SheetContent};
use super::style::{accent_from_settings, DatePickerStyleSheet, TextStyle};
use crate::models::calendar::{CalendarDay, CalendarGrid, TrailingWeek};
use crate::models::settings::{Settings, DEFAULT_ACCENT_COLOR};
use crate::services::calendar_grid::build_calendar_grid_with;
use crate::utils::date::shift_month;

const WEEKDAY_INITIALS: [&str; 7] = ["S", "M", "T", "W", "T", "F", "S"];
const MISSING_SELECTION_MESSAGE: &str = "You need to select a date";

/// How a single grid cell should be drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DayVisual {
    pub outside_month: bool,
    pub is_today: bool,
    /// Selected and today or later
    pub selected_upcoming: bool,
    /// Selected and before today
    pub selected_past: bool,
}

pub fn day_visual(day: &CalendarDay, today: NaiveDate, selected: Option<NaiveDate>) -> DayVisual {
    let is_selected = selected == Some(day.date);
    DayVisual {
        outside_month: !day.is_current_month(),
        is_today: day.date == today,
        selected_upcoming: is_selected && day.date >= today,
        selected_past: is_selected && day.date < today,
    }
}

type ConfirmCallback = Box<dyn FnMut(NaiveDate)>;
type CancelCallback = Box<dyn FnMut()>;

pub struct DatePickerModal {
    id: Id,
    visible: bool,
    focused_date: NaiveDate,
    selected_date: Option<NaiveDate>,
    show_selection_error: bool,
    column_width: f32,
    tap_target: Option<NaiveDate>,
    trailing_week: TrailingWeek,
    grid: CalendarGrid,
    accent: Color32,
    overrides: DatePickerStyleSheet,
    style: DatePickerStyleSheet,
    bottom_inset: f32,
    on_confirm: Option<ConfirmCallback>,
    on_cancel: Option<CancelCallback>,
}

impl DatePickerModal {
    /// A hidden picker focused on `today` with `today` selected.
    pub fn new(today: NaiveDate) -> Self {
        let accent = accent_from_settings(DEFAULT_ACCENT_COLOR);
        let trailing_week = TrailingWeek::default();
        Self {
            id: Id::new("date_picker_modal"),
            visible: false,
            focused_date: today,
            selected_date: Some(today),
            show_selection_error: false,
            column_width: 0.0,
            tap_target: None,
            trailing_week,
            grid: build_calendar_grid_with(today, trailing_week),
            accent,
            overrides: DatePickerStyleSheet::default(),
            style: DatePickerStyleSheet::defaults(accent),
            bottom_inset: 0.0,
            on_confirm: None,
            on_cancel: None,
        }
    }

    pub fn id_source(mut self, id_source: impl std::hash::Hash) -> Self {
        self.id = Id::new(id_source);
        self
    }

    pub fn initial_date(mut self, date: NaiveDate) -> Self {
        self.selected_date = Some(date);
        self.set_focused_date(date);
        self
    }

    /// Start with nothing selected instead of today.
    pub fn without_preselection(mut self) -> Self {
        self.selected_date = None;
        self
    }

    pub fn with_settings(mut self, settings: &Settings) -> Self {
        self.bottom_inset = settings.bottom_inset;
        self.accent = accent_from_settings(&settings.accent_color);
        self.trailing_week = settings.trailing_week;
        self.grid = build_calendar_grid_with(self.focused_date, self.trailing_week);
        self.restyle();
        self
    }

    pub fn stylesheet(mut self, overrides: DatePickerStyleSheet) -> Self {
        self.overrides = overrides;
        self.restyle();
        self
    }

    pub fn on_confirm(mut self, callback: impl FnMut(NaiveDate) + 'static) -> Self {
        self.on_confirm = Some(Box::new(callback));
        self
    }

    pub fn on_cancel(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_cancel = Some(Box::new(callback));
        self
    }

    fn restyle(&mut self) {
        self.style = DatePickerStyleSheet::defaults(self.accent).overlaid(&self.overrides);
    }

    pub fn open(&mut self) {
        self.visible = true;
        self.show_selection_error = false;
        if let Some(selected) = self.selected_date {
            self.set_focused_date(selected);
        }
    }

    pub fn close(&mut self) {
        self.visible = false;
        self.tap_target = None;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn focused_date(&self) -> NaiveDate {
        self.focused_date
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.selected_date
    }

    pub fn selection_error(&self) -> Option<&'static str> {
        self.show_selection_error.then_some(MISSING_SELECTION_MESSAGE)
    }

    pub fn grid(&self) -> &CalendarGrid {
        &self.grid
    }

    fn set_focused_date(&mut self, date: NaiveDate) {
        let month_changed =
            date.year() != self.focused_date.year() || date.month() != self.focused_date.month();
        self.focused_date = date;
        if month_changed {
            self.grid = build_calendar_grid_with(date, self.trailing_week);
        }
    }

    pub fn go_to_previous_year(&mut self) {
        self.set_focused_date(shift_month(self.focused_date, -12));
    }

    pub fn go_to_next_year(&mut self) {
        self.set_focused_date(shift_month(self.focused_date, 12));
    }

    pub fn go_to_previous_month(&mut self) {
        self.set_focused_date(shift_month(self.focused_date, -1));
    }

    pub fn go_to_next_month(&mut self) {
        self.set_focused_date(shift_month(self.focused_date, 1));
    }

    /// Press at `local` (relative to the top-left of the weeks area).
    /// Presses left of or above the grid are ignored; presses past the last
    /// row or column land on the last row or column.
    pub fn begin_tap(&mut self, local: Vec2, column_width: f32) {
        if column_width <= 0.0 || local.x < 0.0 || local.y < 0.0 {
            return;
        }

        let column = (local.x / column_width).floor() as usize;
        let row = (local.y / column_width).floor() as usize;
        self.tap_target = self.grid.day_at_clamped(row, column).map(|day| day.date);
    }

    /// Release: the pending tap target becomes the selection.
    pub fn end_tap(&mut self) {
        if let Some(date) = self.tap_target.take() {
            log::debug!("Date picker selected {}", date);
            self.selected_date = Some(date);
            self.show_selection_error = false;
        }
    }

    pub fn confirm(&mut self) -> PickerOutcome<NaiveDate> {
        let Some(date) = self.selected_date else {
            log::debug!("Date picker confirm rejected: nothing selected");
            self.show_selection_error = true;
            return PickerOutcome::Pending;
        };

        log::info!("Date picker confirmed {}", date);
        if let Some(callback) = self.on_confirm.as_mut() {
            callback(date);
        }
        self.close();
        PickerOutcome::Confirmed(date)
    }

    pub fn cancel(&mut self) -> PickerOutcome<NaiveDate> {
        log::info!("Date picker cancelled");
        if let Some(callback) = self.on_cancel.as_mut() {
            callback();
        }
        self.close();
        PickerOutcome::Cancelled
    }

    /// Render the picker if visible and report what the user did this frame.
    pub fn show(&mut self, ctx: &egui::Context, today: NaiveDate) -> PickerOutcome<NaiveDate> {
        if !self.visible {
            return PickerOutcome::Pending;
        }

        let style = self.style.clone();
        let action = show_sheet(
            ctx,
            SheetContent {
                id: self.id,
                style: &style.modal,
                heading: "Select a Date",
                error: self.selection_error(),
                bottom_inset: self.bottom_inset,
            },
            |ui| {
                let selector = style.date_selector.unwrap_or_default();
                selector.frame().show(ui, |ui| {
                    self.render_controls(ui, &style);
                    self.render_weekdays(ui, &style);
                    self.render_weeks(ui, &style, today);
                });
            },
        );

        match action {
            SheetAction::Confirm => self.confirm(),
            SheetAction::Cancel => self.cancel(),
            SheetAction::None => PickerOutcome::Pending,
        }
    }

    /// Year control on the left, month control on the right.
    fn render_controls(&mut self, ui: &mut egui::Ui, style: &DatePickerStyleSheet) {
        let controls = style.date_selector_controls.unwrap_or_default();
        let control = style.date_selector_control.unwrap_or_default();
        let text = style.date_selector_control_text.unwrap_or_default();

        controls.frame().show(ui, |ui| {
            ui.horizontal(|ui| {
                control.frame().show(ui, |ui| {
                    ui.horizontal(|ui| {
                        if chevron(ui, &text, "‹").on_hover_text("Previous year").clicked() {
                            self.go_to_previous_year();
                        }
                        ui.label(text.rich(self.focused_date.format("%Y").to_string()));
                        if chevron(ui, &text, "›").on_hover_text("Next year").clicked() {
                            self.go_to_next_year();
                        }
                    });
                });

                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    control.frame().show(ui, |ui| {
                        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                            if chevron(ui, &text, "›").on_hover_text("Next month").clicked() {
                                self.go_to_next_month();
                            }
                            ui.label(text.rich(self.focused_date.format("%b").to_string()));
                            if chevron(ui, &text, "‹")
                                .on_hover_text("Previous month")
                                .clicked()
                            {
                                self.go_to_previous_month();
                            }
                        });
                    });
                });
            });
        });
    }

    fn render_weekdays(&mut self, ui: &mut egui::Ui, style: &DatePickerStyleSheet) {
        let text = style.weekday_text.unwrap_or_default();
        let weekday = style.weekday.unwrap_or_default();

        self.column_width = ui.available_width() / 7.0;
        let cw = self.column_width;
        let (rect, _) = ui.allocate_exact_size(Vec2::new(cw * 7.0, cw), Sense::hover());
        if !ui.is_rect_visible(rect) {
            return;
        }

        let painter = ui.painter();
        if let Some(fill) = style.weekdays.unwrap_or_default().background {
            painter.rect_filled(rect, 0.0, fill);
        }
        for (column, initial) in WEEKDAY_INITIALS.iter().enumerate() {
            let cell = Rect::from_min_size(rect.min + Vec2::new(column as f32 * cw, 0.0), Vec2::splat(cw));
            if let Some(fill) = weekday.background {
                painter.rect_filled(cell, weekday.rounding(), fill);
            }
            painter.text(
                cell.center(),
                Align2::CENTER_CENTER,
                *initial,
                text.font_id(),
                text.color_or(ui.visuals().text_color()),
            );
        }
    }

    fn render_weeks(&mut self, ui: &mut egui::Ui, style: &DatePickerStyleSheet, today: NaiveDate) {
        let cw = self.column_width;
        let rows = self.grid.row_count();
        let (rect, response) =
            ui.allocate_exact_size(Vec2::new(cw * 7.0, cw * rows as f32), Sense::click());

        if response.is_pointer_button_down_on() && self.tap_target.is_none() {
            if let Some(pos) = response.interact_pointer_pos() {
                self.begin_tap(pos - rect.min, cw);
            }
        }
        if response.clicked() {
            self.end_tap();
        } else if !response.is_pointer_button_down_on() {
            self.tap_target = None;
        }

        if !ui.is_rect_visible(rect) {
            return;
        }

        if let Some(fill) = style.weeks.unwrap_or_default().background {
            ui.painter().rect_filled(rect, 0.0, fill);
        }

        let day_text = style.day_text.unwrap_or_default();
        let outside_text = day_text.merged(style.day_text_outside_month.as_ref());
        let selected_text = day_text.merged(style.day_text_selected.as_ref());
        let content = style.day_content.unwrap_or_default();
        let today_content = content.merged(style.day_content_today.as_ref());
        let selected_content = content.merged(style.day_content_selected.as_ref());
        let selected_past_content = content.merged(style.day_content_selected_past.as_ref());

        let painter = ui.painter();
        for (row, week) in self.grid.weeks.iter().enumerate() {
            let row_top = rect.min + Vec2::new(0.0, row as f32 * cw);
            if let Some(fill) = style.week.unwrap_or_default().background {
                painter.rect_filled(Rect::from_min_size(row_top, Vec2::new(cw * 7.0, cw)), 0.0, fill);
            }

            for (column, day) in week.days.iter().enumerate() {
                let cell = Rect::from_min_size(row_top + Vec2::new(column as f32 * cw, 0.0), Vec2::splat(cw));
                let bubble = cell.shrink(2.5);
                let visual = day_visual(day, today, self.selected_date);

                if let Some(fill) = style.day_container.unwrap_or_default().background {
                    painter.rect_filled(cell, 0.0, fill);
                }

                let bubble_style = if visual.selected_upcoming {
                    Some(selected_content)
                } else if visual.selected_past {
                    Some(selected_past_content)
                } else if visual.is_today {
                    Some(today_content)
                } else {
                    None
                };
                if let Some(fill) = bubble_style.and_then(|s| s.background) {
                    painter.rect_filled(bubble, bubble.width() / 2.0, fill);
                }

                let text: TextStyle = if visual.selected_upcoming {
                    selected_text
                } else if visual.outside_month {
                    outside_text
                } else {
                    day_text
                };
                painter.text(
                    cell.center(),
                    Align2::CENTER_CENTER,
                    day.day_of_month.to_string(),
                    text.font_id(),
                    text.color_or(ui.visuals().text_color()),
                );
            }
        }
    }
}

fn chevron(ui: &mut egui::Ui, text: &TextStyle, glyph: &str) -> egui::Response {
    ui.add(egui::Button::new(text.rich(glyph)).frame(false))
}
