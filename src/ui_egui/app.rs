//! Demo application: a date button and a time button that open the pickers.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};

use super::date_picker::DatePickerModal;
use super::modal::PickerOutcome;
use super::time_picker::TimePickerModal;
use crate::models::settings::Settings;
use crate::models::time_step::TimeStep;
use crate::services::clock::CurrentDateClock;
use crate::services::settings::{load_settings_or_default, SettingsService};

pub struct PickerDemoApp {
    settings_service: SettingsService,
    settings: Settings,
    clock: CurrentDateClock,
    date: NaiveDate,
    time: NaiveTime,
    date_picker: DatePickerModal,
    time_picker: TimePickerModal,
}

impl eframe::App for PickerDemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_update(ctx);
    }
}

impl PickerDemoApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings_service = SettingsService::from_default_location();
        let settings = load_settings_or_default(&settings_service);
        log::info!("Settings file: {}", settings_service.path().display());

        let clock = CurrentDateClock::system();
        let now = chrono::Local::now().naive_local();

        apply_visuals(&cc.egui_ctx, &settings);

        Self {
            date_picker: DatePickerModal::new(clock.today()).with_settings(&settings),
            time_picker: TimePickerModal::new(now).with_settings(&settings),
            date: clock.today(),
            time: now.time(),
            settings_service,
            settings,
            clock,
        }
    }

    fn handle_update(&mut self, ctx: &egui::Context) {
        if self.clock.refresh() {
            log::info!("Date changed to {}", self.clock.today());
        }
        ctx.request_repaint_after(self.clock.time_until_midnight());

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(ui.available_height() / 3.0);

                let date_label = format_day_label(self.date);
                if ui.add(egui::Button::new(egui::RichText::new(date_label).size(16.0))).clicked() {
                    self.date_picker.open();
                }
                ui.add_space(12.0);

                let time_label = self.time.format("%I:%M %p").to_string();
                if ui.add(egui::Button::new(egui::RichText::new(time_label).size(16.0))).clicked() {
                    self.time_picker.open();
                }
                ui.add_space(24.0);

                ui.label("Tap on a button above to change the date or time");
                ui.add_space(12.0);
                self.render_step_selector(ui);
            });
        });

        let today = self.clock.today();
        if let PickerOutcome::Confirmed(date) = self.date_picker.show(ctx, today) {
            self.date = date;
        }
        if let PickerOutcome::Confirmed(datetime) = self.time_picker.show(ctx) {
            self.time = datetime.time();
        }
    }

    fn render_step_selector(&mut self, ui: &mut egui::Ui) {
        let mut step = self.settings.time_step;
        ui.horizontal(|ui| {
            ui.label("Time step:");
            egui::ComboBox::from_id_source("time_step_selector")
                .selected_text(step.to_string())
                .show_ui(ui, |ui| {
                    for option in TimeStep::ALL {
                        ui.selectable_value(&mut step, option, option.to_string());
                    }
                });
        });

        if step != self.settings.time_step {
            self.settings.time_step = step;
            self.time_picker.set_time_step(step);
            if let Err(e) = self.settings_service.update(&self.settings) {
                log::error!("Failed to save settings: {e:#}");
            }
        }
    }

    /// Combine the chosen date and time.
    pub fn selected_datetime(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }
}

fn apply_visuals(ctx: &egui::Context, settings: &Settings) {
    let dark = settings.follow_system_theme && matches!(dark_light::detect(), dark_light::Mode::Dark);
    ctx.set_visuals(if dark {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    });
}

fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

/// "14th Mar 2024"
pub fn format_day_label(date: NaiveDate) -> String {
    format!(
        "{}{} {}",
        date.day(),
        ordinal_suffix(date.day()),
        date.format("%b %Y")
    )
}
