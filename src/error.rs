//! Error types returned by the conversion and parsing functions.

use thiserror::Error;

use crate::soc_pin_data::SocFamily;

/// Errors produced while converting between pin descriptors and GPIO numbers.
///
/// None of these are fatal. A presentation layer that recalculates on every
/// keystroke can simply ignore them and keep showing its last valid result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GpioCalcError {
    /// Forward input was malformed or out of range for the SoC family.
    #[error("invalid {family} pin descriptor: {reason}")]
    InvalidDescriptor { family: SocFamily, reason: String },

    /// Backward input was negative or not a number.
    #[error("invalid GPIO number: {0}")]
    InvalidNumber(String),

    #[error("unknown SoC family: {0}")]
    UnknownFamily(String),

    #[error("unknown export mode: {0}")]
    UnknownExportMode(String),
}

pub type Result<T> = std::result::Result<T, GpioCalcError>;
