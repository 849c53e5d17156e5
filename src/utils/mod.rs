// Utils module
// Contains utility functions

pub mod date;
