// egui UI Module
// Date and time picker bottom sheets plus the demo application

pub mod app;
pub mod date_picker;
pub mod modal;
pub mod style;
pub mod time_picker;

pub use app::PickerDemoApp;
pub use date_picker::DatePickerModal;
pub use modal::PickerOutcome;
pub use time_picker::TimePickerModal;
