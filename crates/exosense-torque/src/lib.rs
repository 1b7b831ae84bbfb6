//! Polynomial joint-torque model.
//!
//! Eight polynomial curves approximate the mechanical resistance of the
//! elastic bands: one per [`Material`] and motion [`Direction`]. Each curve
//! is a single-variable polynomial in the joint angle (degrees) with
//! coefficients stored in ascending power order.
//!
//! # Coefficient provenance
//!
//! Only the blue/increasing constant term is measured. The other coefficients
//! are placeholders awaiting the bench fits, so torque values other than
//! `torque(0.0, Blue, Increasing)` are not physical yet.
//!
//! Selection goes through a fixed `[[&[f64]; 2]; 4]` table indexed by the two
//! enums, so every combination is checked at compile time. Tag parsing
//! (`b g r y`, `i d`) is the only place an unknown selector can appear, and it
//! fails with [`ConfigError::UnspecifiedModelParameters`].
//!
//! # Extrapolation
//!
//! The working range of the joint is 0-120 degrees. Outside it the polynomial
//! extrapolates without clamping.
//!
//! # Example
//!
//! ```
//! use exosense_torque::{Direction, Material, torque};
//!
//! let t = torque(0.0, Material::Blue, Direction::Increasing);
//! assert!((t - 6.0390762886100471e-2).abs() < 1e-12);
//! ```
//!
//! [`ConfigError::UnspecifiedModelParameters`]: exosense_errors::ConfigError::UnspecifiedModelParameters

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

mod coefficients;
pub mod model;
pub mod selector;

pub use model::{TorqueCurve, evaluate_ascending, torque, torque_or_zero};
pub use selector::{Direction, Material};
