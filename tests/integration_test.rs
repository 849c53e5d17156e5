// Integration tests for settings persistence and picker wiring
use chrono::NaiveDate;
use picker_modals::models::calendar::TrailingWeek;
use picker_modals::models::settings::Settings;
use picker_modals::models::time_step::{ClockTime, TimeStep};
use picker_modals::services::settings::{load_settings_or_default, SettingsService};
use picker_modals::ui_egui::{DatePickerModal, PickerOutcome, TimePickerModal};
use pretty_assertions::assert_eq;

#[test]
fn test_settings_persistence() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let settings_service = SettingsService::new(dir.path().join("nested").join("settings.toml"));

    // Get default settings
    let mut settings = settings_service.get().expect("Failed to get settings");
    assert_eq!(settings, Settings::default());

    // Update settings to simulate UI changes
    settings.time_step = TimeStep::Fifteen;
    settings.trailing_week = TrailingWeek::Pad;
    settings.fling_velocity_threshold = 220.0;
    settings.accent_color = "#ff8800".to_string();

    settings_service.update(&settings).expect("Failed to update settings");

    // Verify persistence by reading again
    let loaded_settings = settings_service.get().expect("Failed to load settings");
    assert_eq!(loaded_settings, settings);

    settings_service.reset().expect("Failed to reset settings");
    assert_eq!(settings_service.get().unwrap(), Settings::default());
}

#[test]
fn test_invalid_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "time_step = 7\n").unwrap();

    let settings_service = SettingsService::new(&path);
    assert!(settings_service.get().is_err());
    assert_eq!(load_settings_or_default(&settings_service), Settings::default());
}

#[test]
fn test_pickers_follow_stored_settings() {
    let dir = tempfile::tempdir().unwrap();
    let settings_service = SettingsService::new(dir.path().join("settings.toml"));
    std::fs::write(
        settings_service.path(),
        "time_step = 30\ntrailing_week = \"pad\"\n",
    )
    .unwrap();
    let settings = load_settings_or_default(&settings_service);

    // February 2026 starts on a Sunday and ends on a Saturday
    let today = NaiveDate::from_ymd_opt(2026, 2, 10).unwrap();
    let date_picker = DatePickerModal::new(today).with_settings(&settings);
    assert_eq!(date_picker.grid().row_count(), 5);

    let morning = today.and_hms_opt(8, 50, 0).unwrap();
    let mut time_picker = TimePickerModal::new(morning).with_settings(&settings);
    assert_eq!(time_picker.selected_time(), Some(ClockTime::new(8, 30)));

    time_picker.open();
    time_picker.add_one_step();
    assert_eq!(
        time_picker.confirm(),
        PickerOutcome::Confirmed(today.and_hms_opt(9, 0, 0).unwrap())
    );
}
