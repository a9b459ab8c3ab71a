//! Glide error types

use crate::color::ColorKind;
use thiserror::Error;

/// Errors raised while building animations, synchronizations, or configuration.
///
/// Everything here is detected up front. Nothing in the tick loop returns an error.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GlideError {
    /// Easing name that is not part of the easing library
    #[error("Unknown easing function: {0:?}")]
    UnknownEasing(String),

    /// Negative, NaN, or infinite duration
    #[error("Invalid animation duration: {0} ms")]
    InvalidDuration(f64),

    /// NaN or infinite start time
    #[error("Invalid animation start time: {0}")]
    InvalidStartTime(f64),

    /// Start and end colors use different color models
    #[error("Color kind mismatch: start is {start}, end is {end}")]
    ColorKindMismatch { start: ColorKind, end: ColorKind },

    /// Configuration could not be parsed or validated
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Result type for Glide operations
pub type Result<T> = std::result::Result<T, GlideError>;
