//! Peripheral read errors.
//!
//! These are produced inside the sampling loop, so they are `Copy`, carry no
//! heap data and map to a fixed numeric code for logging.

use crate::common::ErrorSeverity;

/// Peripheral failure codes.
///
/// # Examples
///
/// ```
/// use exosense_errors::{HalError, ErrorSeverity};
///
/// let err = HalError::GyroRead;
/// assert_eq!(err.code(), 2);
/// assert_eq!(err.severity(), ErrorSeverity::Warning);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[repr(u8)]
pub enum HalError {
    /// Analog-to-digital conversion failed
    #[error("analog read failed")]
    AnalogRead = 1,
    /// Gyroscope axis read failed
    #[error("gyroscope read failed")]
    GyroRead = 2,
    /// Accelerometer axis read failed
    #[error("accelerometer read failed")]
    AccelRead = 3,
    /// Peripheral reports no connection
    #[error("peripheral not connected")]
    NotConnected = 4,
}

impl HalError {
    /// Get the numeric error code.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Get the error severity.
    ///
    /// A failed read degrades one sample; it never stops the stream.
    pub fn severity(self) -> ErrorSeverity {
        ErrorSeverity::Warning
    }
}
