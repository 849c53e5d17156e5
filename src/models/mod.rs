// Models module
// Contains data structures shared by the pickers

pub mod calendar;
pub mod settings;
pub mod time_step;
