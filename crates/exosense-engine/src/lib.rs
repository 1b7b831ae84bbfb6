//! Session orchestration for the exosense sampling firmware.
//!
//! A [`Session`] owns every piece of process state: the scheduler and its
//! clock, the sensor board, the calibration offsets and the telemetry sink.
//! It walks the phase machine once:
//!
//! 1. **Idle**: print the operator prompt, poll the ready signal
//! 2. **Calibrating**: countdown, warm-up plus averaging window, offset summary
//! 3. **Streaming**: one telemetry row per tick until stopped
//!
//! Configuration is a single [`SessionConfig`], loadable from YAML and
//! validated once before anything runs.
//!
//! # Example
//!
//! ```
//! use exosense_engine::{Session, SessionConfig};
//! use exosense_hal::mock::{MockBoard, MockClock};
//!
//! let mut config = SessionConfig::default();
//! config.calibration.samples = 10;
//! config.calibration.warmup = 2;
//! config.calibration.countdown_seconds = 0;
//! config.calibration.echo = false;
//!
//! let mut session = Session::new(config, MockClock::new(), MockBoard::new(), Vec::new())?;
//! let rows = session.run(Some(3))?;
//! assert_eq!(rows, 3);
//! # Ok::<(), exosense_errors::ExoError>(())
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(unused_must_use)]
#![warn(missing_docs)]

pub mod config;
pub mod frame;
pub mod reading;
pub mod session;

pub use config::{CalibrationSettings, DEFAULT_SAMPLING_HZ, SessionConfig};
pub use frame::FrameBuilder;
pub use reading::PotReading;
pub use session::{READY_PROMPT, Session};
