//! Error types for picker configuration.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PickerError {
    #[error("Unsupported time step of {0} minutes (expected one of 1, 2, 3, 4, 5, 10, 15, 20, 30, 60)")]
    InvalidTimeStep(u32),
    #[error("Time step is not a number: {0:?}")]
    InvalidTimeStepText(String),
    #[error("Invalid color {value:?}: {reason}")]
    InvalidColor { value: String, reason: String },
}
