//! Peripheral abstraction for the exosense firmware.
//!
//! The sampling core talks to hardware through three seams only:
//!
//! - [`MonotonicClock`]: elapsed microseconds, owned by the scheduler
//! - [`SensorBoard`]: raw analog codes per channel, raw IMU axes, the
//!   operator-ready signal and the status indicator
//! - [`Channel`] / [`AnalogChannel`]: the closed set of signal sources
//!
//! [`StdClock`] backs hosted builds. The [`mock`] module provides scripted
//! doubles for tests and benches.

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]
#![deny(unused_must_use)]

pub mod board;
pub mod channel;
pub mod clock;
pub mod mock;

pub use board::SensorBoard;
pub use channel::{AnalogChannel, Channel};
pub use clock::{MonotonicClock, StdClock};
pub use exosense_errors::{HalError, HalResult};

/// Number of IMU axes per sensor.
pub const AXES: usize = 3;

/// Raw triple as returned by an IMU axis read.
pub type RawAxes = [i32; AXES];
