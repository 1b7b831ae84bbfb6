//! Fixed-period sample scheduling.
//!
//! Each tick computes `deadline = now + period`, runs one read, convert and
//! emit cycle, then busy-waits until the clock reaches the deadline. The
//! deadline is relative to the start of the tick, not to a schedule origin:
//! a tick whose work overruns the period simply takes longer, nothing is
//! caught up, and the drift accumulates.
//!
//! - [`SamplingRate`]: validated frequency and its integer microsecond period
//! - [`FixedRateScheduler`]: the tick loop; owns the clock
//! - [`ScheduleState`]: deadline, tick counter, calibration flag and
//!   [`SessionPhase`]
//! - [`WaitStrategy`]: busy-spin (default) or sleep with a spin tail
//!
//! # RT-Safety
//!
//! - No heap allocations after construction
//! - No locks; the clock is exclusively owned
//! - `BusySpin` never yields to the OS
//!
//! # Example
//!
//! ```
//! use exosense_hal::mock::MockClock;
//! use exosense_scheduler::{FixedRateScheduler, SamplingRate};
//!
//! let rate = SamplingRate::new(100)?;
//! let mut scheduler = FixedRateScheduler::new(MockClock::with_step(50), rate);
//!
//! for _ in 0..3 {
//!     scheduler.run_tick(|_tick| {
//!         // read, convert, emit
//!     });
//! }
//! assert_eq!(scheduler.tick_count(), 3);
//! # Ok::<(), exosense_errors::ConfigError>(())
//! ```

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]
#![deny(unused_must_use)]

pub mod phase;
pub mod rate;
pub mod scheduler;
pub mod wait;

pub use phase::{ScheduleState, SessionPhase};
pub use rate::{MAX_SAMPLING_HZ, SamplingRate};
pub use scheduler::{FixedRateScheduler, Tick};
pub use wait::WaitStrategy;

/// Microseconds per second.
pub const MICROS_PER_SECOND: u64 = 1_000_000;
