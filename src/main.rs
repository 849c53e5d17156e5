// Picker Demo Application
// Main entry point

use picker_modals::ui_egui::PickerDemoApp;

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Picker Demo");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Picker Demo")
            .with_inner_size([420.0, 720.0])
            .with_min_inner_size([320.0, 560.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Picker Demo",
        native_options,
        Box::new(|cc| Ok(Box::new(PickerDemoApp::new(cc)))),
    )
}
