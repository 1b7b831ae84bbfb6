//! Sensor board abstraction.

use crate::{AnalogChannel, HalResult, RawAxes};

/// Raw peripheral access for one exoskeleton board.
///
/// Implementations perform exactly one read per call. Callers never retry:
/// an `Err` contaminates the current sample and the loop carries on.
pub trait SensorBoard {
    /// Read the raw gyroscope axes (millidegrees per second).
    fn gyro_axes(&mut self) -> HalResult<RawAxes>;

    /// Read the raw accelerometer axes (milli-g).
    fn accel_axes(&mut self) -> HalResult<RawAxes>;

    /// Read the raw ADC code of one analog channel.
    fn analog_code(&mut self, channel: AnalogChannel) -> HalResult<u16>;

    /// Poll the operator-ready input (start button).
    fn operator_ready(&mut self) -> bool;

    /// Drive the status indicator (LED).
    fn set_indicator(&mut self, on: bool);

    /// Current status indicator state.
    fn indicator(&self) -> bool;

    /// Flip the status indicator.
    fn toggle_indicator(&mut self) {
        let on = self.indicator();
        self.set_indicator(!on);
    }
}

impl<B: SensorBoard + ?Sized> SensorBoard for &mut B {
    fn gyro_axes(&mut self) -> HalResult<RawAxes> {
        (**self).gyro_axes()
    }

    fn accel_axes(&mut self) -> HalResult<RawAxes> {
        (**self).accel_axes()
    }

    fn analog_code(&mut self, channel: AnalogChannel) -> HalResult<u16> {
        (**self).analog_code(channel)
    }

    fn operator_ready(&mut self) -> bool {
        (**self).operator_ready()
    }

    fn set_indicator(&mut self, on: bool) {
        (**self).set_indicator(on)
    }

    fn indicator(&self) -> bool {
        (**self).indicator()
    }
}
