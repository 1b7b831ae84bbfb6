//! Zero-offset calibration.
//!
//! The sensors start with a transient. Calibration samples every channel for
//! `W + N` scheduler ticks, discards the first `W` (warm-up) and takes the
//! mean of the remaining `N` as the channel's zero offset.
//!
//! - [`OffsetAccumulator`]: the pure arithmetic, no clock or board
//! - [`OffsetCalibrator`]: drives the accumulator from a board, one read per
//!   scheduler tick
//! - [`CalibrationOffsets`]: one offset per [`Channel`](exosense_hal::Channel)
//!
//! There is no outlier rejection and no variance check: a noisy or failed
//! read during the averaging window biases the offset.

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]
#![warn(missing_docs)]

pub mod accumulator;
pub mod calibrator;
pub mod offsets;
pub mod sample;

pub use accumulator::OffsetAccumulator;
pub use calibrator::{INDICATOR_TOGGLE_INTERVAL, OffsetCalibrator};
pub use offsets::CalibrationOffsets;
pub use sample::RawSample;

use exosense_errors::{ConfigError, ExoError};
use thiserror::Error;

/// Default number of averaged samples.
pub const DEFAULT_SAMPLE_COUNT: u32 = 1010;

/// Default number of discarded warm-up samples.
pub const DEFAULT_WARMUP: u32 = 200;

/// Calibration failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalibrationError {
    /// Offsets requested before the averaging window was filled
    #[error("Calibration not complete: {collected} of {required} samples")]
    NotComplete {
        /// Samples accumulated so far
        collected: u32,
        /// Samples required
        required: u32,
    },

    /// Invalid calibration parameters or phase order
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type for calibration.
pub type CalibrationResult<T> = Result<T, CalibrationError>;

impl From<CalibrationError> for ExoError {
    fn from(err: CalibrationError) -> Self {
        match err {
            CalibrationError::Config(e) => ExoError::Config(e),
            other @ CalibrationError::NotComplete { .. } => ExoError::Other(other.to_string()),
        }
    }
}
