//! Error taxonomy for the exosense sampling firmware.
//!
//! Errors fall into three groups:
//!
//! - [`config`]: configuration errors. Raised once, at the point of use, and
//!   fatal at startup.
//! - [`hal`]: peripheral read failures. `Copy`, allocation-free, safe to
//!   construct inside the sampling loop. They contaminate a single sample and
//!   never halt the stream.
//! - [`common`]: the top-level [`ExoError`] wrapper with classification.
//!
//! # Example
//!
//! ```
//! use exosense_errors::prelude::*;
//!
//! fn sample_count(n: u32) -> Result<u32> {
//!     if n == 0 {
//!         return Err(ConfigError::ZeroSampleCount.into());
//!     }
//!     Ok(n)
//! }
//!
//! assert!(sample_count(0).is_err());
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![warn(missing_docs, rust_2018_idioms)]

pub mod common;
pub mod config;
pub mod hal;
pub mod prelude;

pub use common::{ErrorCategory, ErrorSeverity, ExoError};
pub use config::ConfigError;
pub use hal::HalError;

/// A specialized `Result` type for exosense operations.
pub type Result<T> = std::result::Result<T, ExoError>;

/// Result type for peripheral reads.
pub type HalResult<T> = std::result::Result<T, HalError>;

/// Result type for configuration validation.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
