//! Raw reads to [`SampleFrame`].

use exosense_calibration::{CalibrationOffsets, RawSample};
use exosense_hal::SensorBoard;
use exosense_mapping::{ImuScaling, PotentiometerScale, TouchDetector};
use exosense_scheduler::Tick;
use exosense_telemetry::SampleFrame;
use exosense_torque::TorqueCurve;
use tracing::warn;

use crate::config::SessionConfig;
use crate::reading::PotReading;

/// Converts one tick's raw reads into calibrated units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameBuilder {
    potentiometer: PotentiometerScale,
    pot_reading: PotReading,
    imu: ImuScaling,
    touch: TouchDetector,
    read_accel: bool,
    torque: Option<TorqueCurve>,
}

impl FrameBuilder {
    /// Builder for a session configuration.
    pub fn new(config: &SessionConfig) -> Self {
        Self {
            potentiometer: config.potentiometer,
            pot_reading: config.pot_reading,
            imu: config.imu,
            touch: config.touch,
            read_accel: config.telemetry.layout.has_accel(),
            torque: config.torque,
        }
    }

    /// Read every sensor once and convert.
    ///
    /// Failed reads contribute zeros. The torque estimate, when a curve is
    /// selected, uses the offset-corrected joint angle of each side
    /// regardless of the streamed reading mode.
    pub fn build<B: SensorBoard + ?Sized>(
        &self,
        board: &mut B,
        offsets: &CalibrationOffsets,
        tick: Tick,
    ) -> SampleFrame {
        let accel = self.read_accel.then(|| {
            let raw = board.accel_axes().unwrap_or_else(|error| {
                warn!(channel = "accel", %error, "sensor read failed, sample zeroed");
                [0; 3]
            });
            self.imu.accel(raw)
        });
        let raw = RawSample::read(board);

        let (right_offset, left_offset) = (offsets.pot_right(), offsets.pot_left());
        let torque = self.torque.map(|curve| {
            [
                curve.evaluate(self.potentiometer.angle(raw.pot_right, right_offset)),
                curve.evaluate(self.potentiometer.angle(raw.pot_left, left_offset)),
            ]
        });

        SampleFrame {
            tick: tick.index,
            elapsed_us: tick.started_us,
            accel,
            gyro: self.imu.gyro(raw.gyro, offsets.gyro()),
            touch: self.touch.is_touched(raw.touch),
            pot_right: self
                .pot_reading
                .apply(&self.potentiometer, raw.pot_right, right_offset),
            pot_left: self
                .pot_reading
                .apply(&self.potentiometer, raw.pot_left, left_offset),
            torque,
        }
    }
}
