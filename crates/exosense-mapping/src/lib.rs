//! Linear range mapping and unit conversions.
//!
//! Every unit conversion in the sampling path is an affine rescale between two
//! numeric domains:
//!
//! - [`map`]: the unchecked formula, no clamping
//! - [`RangeSpec`]: a validated `(input_min, input_max, output_min, output_max)`
//!   tuple. Validation happens once at construction so the hot path is
//!   branch-free.
//! - [`PotentiometerScale`]: ADC codes to percentage, distance and angle
//! - [`ImuScaling`]: raw gyroscope and accelerometer axes to scaled units
//! - [`TouchDetector`]: thresholded touch-pad detection
//!
//! # Example
//!
//! ```
//! use exosense_mapping::RangeSpec;
//!
//! let spec = RangeSpec::new(0.0, 65535.0, 0.0, 300.0)?;
//! assert!((spec.map(65535.0) - 300.0).abs() < 1e-9);
//!
//! // Out-of-range inputs extrapolate.
//! assert!(spec.map(70000.0) > 300.0);
//! # Ok::<(), exosense_errors::ConfigError>(())
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod imu;
pub mod potentiometer;
pub mod range;
pub mod touch;
pub mod units;

pub use imu::ImuScaling;
pub use potentiometer::PotentiometerScale;
pub use range::{RangeSpec, map};
pub use touch::TouchDetector;
