//! Prelude module for convenient error handling imports.

pub use crate::{
    ConfigResult, HalResult, Result,
    common::{ErrorCategory, ErrorSeverity, ExoError},
    config::ConfigError,
    hal::HalError,
};
