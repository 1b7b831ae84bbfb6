//! One raw calibration read.

use exosense_hal::{AnalogChannel, HalResult, RawAxes, SensorBoard};
use tracing::warn;

/// Raw readings of every calibrated channel plus the touch pad, taken in
/// one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RawSample {
    /// Gyroscope axes (millidegrees per second).
    pub gyro: RawAxes,
    /// Right potentiometer ADC code.
    pub pot_right: u16,
    /// Left potentiometer ADC code.
    pub pot_left: u16,
    /// Touch pad ADC code.
    pub touch: u16,
    /// Reads that failed and were zeroed.
    pub failed_reads: u8,
}

impl RawSample {
    /// Read every channel once.
    ///
    /// A failed read is logged at `warn` and contributes zero. It is never
    /// retried.
    pub fn read<B: SensorBoard + ?Sized>(board: &mut B) -> Self {
        let mut failed_reads = 0u8;
        let gyro = settle("gyro", board.gyro_axes(), &mut failed_reads);
        let pot_right = settle(
            "pot_right",
            board.analog_code(AnalogChannel::PotentiometerRight),
            &mut failed_reads,
        );
        let pot_left = settle(
            "pot_left",
            board.analog_code(AnalogChannel::PotentiometerLeft),
            &mut failed_reads,
        );
        let touch = settle(
            "touch",
            board.analog_code(AnalogChannel::Touch),
            &mut failed_reads,
        );

        Self {
            gyro,
            pot_right,
            pot_left,
            touch,
            failed_reads,
        }
    }

    /// Whether any read in this sample failed.
    #[inline]
    pub fn is_contaminated(&self) -> bool {
        self.failed_reads > 0
    }
}

fn settle<T: Default>(channel: &'static str, result: HalResult<T>, failed_reads: &mut u8) -> T {
    result.unwrap_or_else(|error| {
        warn!(channel, %error, "sensor read failed, sample zeroed");
        *failed_reads = failed_reads.saturating_add(1);
        T::default()
    })
}
