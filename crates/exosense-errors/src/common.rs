//! Top-level error type and classification.

use crate::{ConfigError, HalError};

/// Top-level error type wrapping every exosense sub-error.
#[derive(Debug, thiserror::Error)]
pub enum ExoError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Peripheral errors
    #[error("Hardware error: {0}")]
    Hal(#[from] HalError),

    /// I/O errors on the telemetry or progress sink
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error with context
    #[error("{0}")]
    Other(String),
}

impl ExoError {
    /// Get the error category for classification.
    pub fn category(&self) -> ErrorCategory {
        match self {
            ExoError::Config(_) => ErrorCategory::Config,
            ExoError::Hal(_) => ErrorCategory::Hardware,
            ExoError::Io(_) => ErrorCategory::Io,
            ExoError::Other(_) => ErrorCategory::Other,
        }
    }

    /// Get the error severity level.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ExoError::Config(e) => e.severity(),
            ExoError::Hal(e) => e.severity(),
            ExoError::Io(_) | ExoError::Other(_) => ErrorSeverity::Error,
        }
    }

    /// Whether this error should stop the process.
    ///
    /// Only configuration errors are fatal; runtime anomalies degrade data
    /// quality but never halt the stream.
    pub fn is_fatal(&self) -> bool {
        self.severity() >= ErrorSeverity::Critical
    }
}

/// Error category for classification and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Configuration and startup validation
    Config,
    /// Peripheral reads
    Hardware,
    /// Output sinks
    Io,
    /// Everything else
    Other,
}

impl core::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ErrorCategory::Config => write!(f, "config"),
            ErrorCategory::Hardware => write!(f, "hardware"),
            ErrorCategory::Io => write!(f, "io"),
            ErrorCategory::Other => write!(f, "other"),
        }
    }
}

/// Error severity, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ErrorSeverity {
    /// Degraded data, operation continues
    Warning,
    /// Operation failed
    Error,
    /// Process cannot start
    Critical,
}
