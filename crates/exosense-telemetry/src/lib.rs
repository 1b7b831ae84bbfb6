//! Telemetry record assembly.
//!
//! One [`SampleFrame`] per scheduler tick, written as one tab-separated line.
//! Columns are positional; [`TelemetryFormat::header`] names them for
//! out-of-band documentation, the stream itself carries no header.
//!
//! ```
//! use exosense_telemetry::{SampleFrame, TelemetryFormat, TelemetryWriter};
//!
//! let mut writer = TelemetryWriter::new(Vec::new(), TelemetryFormat::default());
//! writer.write_frame(&SampleFrame {
//!     gyro: [0.5, 0.0, -0.5],
//!     touch: true,
//!     pot_right: 12.0,
//!     pot_left: 0.0,
//!     ..SampleFrame::default()
//! })?;
//! assert_eq!(
//!     writer.into_inner(),
//!     b"0.500000\t0.000000\t-0.500000\t1\t12.000000\t0.000000\n"
//! );
//! # Ok::<(), std::io::Error>(())
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(unused_must_use)]
#![warn(missing_docs)]

pub mod format;
pub mod frame;
pub mod writer;

pub use format::{DEFAULT_PRECISION, MAX_PRECISION, TelemetryFormat, TelemetryLayout};
pub use frame::SampleFrame;
pub use writer::TelemetryWriter;
