//! Warm-up skipping mean over a fixed window.

use exosense_errors::{ConfigError, ConfigResult};

use crate::offsets::CalibrationOffsets;
use crate::sample::RawSample;
use crate::{CalibrationError, CalibrationResult};

/// Running sums for one calibration run.
///
/// The first `warmup` pushes are discarded, the next `sample_count` are
/// summed, anything after that is ignored. Gyroscope sums are exact (`i64`),
/// potentiometer sums are `f64`.
#[derive(Debug, Clone, PartialEq)]
pub struct OffsetAccumulator {
    sample_count: u32,
    warmup: u32,
    pushed: u64,
    gyro: [i64; 3],
    pot_right: f64,
    pot_left: f64,
    contaminated: u32,
}

impl OffsetAccumulator {
    /// Accumulator averaging `sample_count` samples after `warmup` discarded
    /// ones.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroSampleCount`] when `sample_count` is zero.
    pub fn new(sample_count: u32, warmup: u32) -> ConfigResult<Self> {
        if sample_count == 0 {
            return Err(ConfigError::ZeroSampleCount);
        }
        Ok(Self {
            sample_count,
            warmup,
            pushed: 0,
            gyro: [0; 3],
            pot_right: 0.0,
            pot_left: 0.0,
            contaminated: 0,
        })
    }

    /// Offer one sample. Returns whether it entered the mean.
    pub fn push(&mut self, sample: &RawSample) -> bool {
        let position = self.pushed;
        self.pushed = self.pushed.saturating_add(1);
        if position < u64::from(self.warmup) || position >= self.total_ticks() {
            return false;
        }

        for (sum, &axis) in self.gyro.iter_mut().zip(sample.gyro.iter()) {
            *sum = sum.saturating_add(i64::from(axis));
        }
        self.pot_right += f64::from(sample.pot_right);
        self.pot_left += f64::from(sample.pot_left);
        if sample.is_contaminated() {
            self.contaminated = self.contaminated.saturating_add(1);
        }
        true
    }

    /// Ticks a full run takes: warm-up plus averaging window.
    #[inline]
    pub fn total_ticks(&self) -> u64 {
        u64::from(self.warmup) + u64::from(self.sample_count)
    }

    /// Samples that entered the mean so far.
    pub fn accumulated(&self) -> u32 {
        let counted = self.pushed.saturating_sub(u64::from(self.warmup));
        u32::try_from(counted.min(u64::from(self.sample_count))).unwrap_or(self.sample_count)
    }

    /// Averaged samples that carried at least one failed read.
    pub fn contaminated(&self) -> u32 {
        self.contaminated
    }

    /// Whether the averaging window is full.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.pushed >= self.total_ticks()
    }

    /// Averaging window size.
    pub fn sample_count(&self) -> u32 {
        self.sample_count
    }

    /// Warm-up length.
    pub fn warmup(&self) -> u32 {
        self.warmup
    }

    /// Mean of the averaging window, per channel.
    ///
    /// # Errors
    ///
    /// Returns [`CalibrationError::NotComplete`] before the window is full.
    #[expect(
        clippy::cast_precision_loss,
        reason = "gyro sums stay far below 2^52 for any realistic window"
    )]
    pub fn finish(&self) -> CalibrationResult<CalibrationOffsets> {
        if !self.is_complete() {
            return Err(CalibrationError::NotComplete {
                collected: self.accumulated(),
                required: self.sample_count,
            });
        }
        let n = f64::from(self.sample_count);
        Ok(CalibrationOffsets::from_parts(
            self.gyro.map(|sum| sum as f64 / n),
            self.pot_right / n,
            self.pot_left / n,
        ))
    }
}
