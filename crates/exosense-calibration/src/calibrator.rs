//! Scheduled calibration run.

use exosense_errors::ConfigResult;
use exosense_hal::{MonotonicClock, SensorBoard};
use exosense_scheduler::{FixedRateScheduler, SamplingRate};
use tracing::{debug, info};

use crate::accumulator::OffsetAccumulator;
use crate::offsets::CalibrationOffsets;
use crate::sample::RawSample;
use crate::CalibrationResult;

/// The status indicator flips every this many calibration ticks.
pub const INDICATOR_TOGGLE_INTERVAL: u64 = 20;

/// Calibration parameters: averaging window and warm-up length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OffsetCalibrator {
    sample_count: u32,
    warmup: u32,
}

impl OffsetCalibrator {
    /// Calibrator averaging `sample_count` ticks after `warmup` discarded ones.
    ///
    /// # Errors
    ///
    /// Returns [`exosense_errors::ConfigError::ZeroSampleCount`] when
    /// `sample_count` is zero.
    pub fn new(sample_count: u32, warmup: u32) -> ConfigResult<Self> {
        OffsetAccumulator::new(sample_count, warmup)?;
        Ok(Self {
            sample_count,
            warmup,
        })
    }

    /// Averaging window size.
    pub fn sample_count(&self) -> u32 {
        self.sample_count
    }

    /// Warm-up length.
    pub fn warmup(&self) -> u32 {
        self.warmup
    }

    /// Scheduler ticks one run consumes.
    pub fn total_ticks(&self) -> u64 {
        u64::from(self.sample_count) + u64::from(self.warmup)
    }

    /// Whole seconds the averaging window lasts at `rate`, as announced to
    /// the operator. The warm-up is not included.
    pub fn approximate_seconds(&self, rate: SamplingRate) -> u64 {
        rate.whole_seconds_for(u64::from(self.sample_count))
    }

    /// Sample every channel once per scheduler tick and average.
    ///
    /// `observe` sees each raw sample, warm-up included, right after it is
    /// read. The board indicator flips on every
    /// [`INDICATOR_TOGGLE_INTERVAL`]-th tick, starting with the first.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the sample count is zero; this is
    /// checked before any read.
    pub fn run<C, B>(
        &self,
        scheduler: &mut FixedRateScheduler<C>,
        board: &mut B,
        mut observe: impl FnMut(&RawSample),
    ) -> CalibrationResult<CalibrationOffsets>
    where
        C: MonotonicClock,
        B: SensorBoard + ?Sized,
    {
        let mut accumulator = OffsetAccumulator::new(self.sample_count, self.warmup)?;
        debug!(
            samples = self.sample_count,
            warmup = self.warmup,
            period_us = scheduler.period_us(),
            "calibration run started"
        );

        for i in 0..accumulator.total_ticks() {
            scheduler.run_tick(|_tick| {
                let sample = RawSample::read(&mut *board);
                accumulator.push(&sample);
                observe(&sample);
                if i % INDICATOR_TOGGLE_INTERVAL == 0 {
                    board.toggle_indicator();
                }
            });
        }

        let offsets = accumulator.finish()?;
        let [gyro_x, gyro_y, gyro_z] = offsets.gyro();
        info!(
            gyro_x,
            gyro_y,
            gyro_z,
            pot_right = offsets.pot_right(),
            pot_left = offsets.pot_left(),
            contaminated = accumulator.contaminated(),
            "calibration finished"
        );
        Ok(offsets)
    }
}
