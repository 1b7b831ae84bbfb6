//! Configuration errors.
//!
//! Every variant here is detected once, when a value is configured or a
//! procedure is started, never inside the per-tick hot path.

use crate::common::ErrorSeverity;

/// Configuration error types.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// A range mapping whose input domain has zero width.
    #[error("degenerate range: input_min ({input_min}) equals input_max ({input_max})")]
    DegenerateRange {
        /// Lower input bound
        input_min: f64,
        /// Upper input bound
        input_max: f64,
    },

    /// A range mapping with a NaN or infinite bound.
    #[error("range bound '{bound}' is not finite: {value}")]
    NonFiniteRange {
        /// Name of the offending bound
        bound: &'static str,
        /// The offending value
        value: f64,
    },

    /// Offset calibration requested with zero accumulated samples.
    #[error("calibration sample count must be greater than zero")]
    ZeroSampleCount,

    /// Sampling frequency that yields no usable period.
    #[error("sampling frequency {hz} Hz is invalid (must be 1..=1000000)")]
    InvalidSamplingFrequency {
        /// Requested frequency in hertz
        hz: u32,
    },

    /// Torque model selector that names no known curve.
    #[error("unspecified model parameters: material '{material}', direction '{direction}'")]
    UnspecifiedModelParameters {
        /// Material tag as supplied
        material: String,
        /// Direction tag as supplied
        direction: String,
    },

    /// Session phase change that the state machine does not allow.
    #[error("invalid phase transition from {from} to {to}")]
    InvalidTransition {
        /// Current phase
        from: &'static str,
        /// Requested phase
        to: &'static str,
    },

    /// A configuration document that could not be parsed.
    #[error("failed to parse configuration: {reason}")]
    Parse {
        /// Parser message
        reason: String,
    },

    /// Any other out-of-domain configuration value.
    #[error("invalid value for '{field}': {reason}")]
    InvalidValue {
        /// Field name
        field: &'static str,
        /// Why the value was rejected
        reason: String,
    },
}

impl ConfigError {
    /// Get the error severity.
    ///
    /// Configuration errors are always fatal at startup.
    pub fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Critical
    }

    /// Create an [`ConfigError::InvalidValue`] error.
    pub fn invalid_value(field: &'static str, reason: impl Into<String>) -> Self {
        ConfigError::InvalidValue {
            field,
            reason: reason.into(),
        }
    }

    /// Create an [`ConfigError::UnspecifiedModelParameters`] error.
    pub fn unspecified_model(material: impl Into<String>, direction: impl Into<String>) -> Self {
        ConfigError::UnspecifiedModelParameters {
            material: material.into(),
            direction: direction.into(),
        }
    }
}
