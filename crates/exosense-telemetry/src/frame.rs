//! One tick's output.

use serde::Serialize;

/// Calibrated readings of one tick.
///
/// Built, written and dropped within the tick.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct SampleFrame {
    /// Tick index within the streaming phase.
    pub tick: u64,
    /// Clock reading at the start of the tick.
    pub elapsed_us: u64,
    /// Scaled accelerometer axes, when the accelerometer was read.
    pub accel: Option<[f64; 3]>,
    /// Scaled, offset-corrected gyroscope axes.
    pub gyro: [f64; 3],
    /// Touch pad pressed.
    pub touch: bool,
    /// Right potentiometer in the configured reading mode.
    pub pot_right: f64,
    /// Left potentiometer in the configured reading mode.
    pub pot_left: f64,
    /// Estimated joint torque `[right, left]`, when a curve is selected.
    pub torque: Option<[f64; 2]>,
}
