// Services module
// Contains the grid, time index and snapping logic behind the pickers

pub mod calendar_grid;
pub mod clock;
pub mod settings;
pub mod snap;
pub mod time_index;
