//! Sampling frequency and period.

use exosense_errors::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};

use crate::MICROS_PER_SECOND;

/// Highest frequency with a non-zero integer microsecond period.
pub const MAX_SAMPLING_HZ: u32 = 1_000_000;

/// Validated sampling frequency.
///
/// The period is `1_000_000 / hz` microseconds, truncated, and fixed for the
/// lifetime of the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct SamplingRate {
    hz: u32,
    period_us: u64,
}

impl SamplingRate {
    /// Validate a frequency in hertz.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidSamplingFrequency`] for `0` or anything
    /// above [`MAX_SAMPLING_HZ`].
    pub fn new(hz: u32) -> ConfigResult<Self> {
        if hz == 0 || hz > MAX_SAMPLING_HZ {
            return Err(ConfigError::InvalidSamplingFrequency { hz });
        }
        Ok(Self {
            hz,
            period_us: MICROS_PER_SECOND / u64::from(hz),
        })
    }

    /// Frequency in hertz.
    #[inline]
    pub fn hz(&self) -> u32 {
        self.hz
    }

    /// Period in microseconds.
    #[inline]
    pub fn period_us(&self) -> u64 {
        self.period_us
    }

    /// Whole seconds needed for `ticks` periods, truncated.
    pub fn whole_seconds_for(&self, ticks: u64) -> u64 {
        ticks / u64::from(self.hz)
    }
}

impl TryFrom<u32> for SamplingRate {
    type Error = ConfigError;

    fn try_from(hz: u32) -> ConfigResult<Self> {
        Self::new(hz)
    }
}

impl From<SamplingRate> for u32 {
    fn from(rate: SamplingRate) -> Self {
        rate.hz
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_100hz_period() -> ConfigResult<()> {
        assert_eq!(SamplingRate::new(100)?.period_us(), 10_000);
        Ok(())
    }

    #[test]
    fn test_period_truncates() -> ConfigResult<()> {
        assert_eq!(SamplingRate::new(3)?.period_us(), 333_333);
        Ok(())
    }

    #[test]
    fn test_zero_rejected() {
        assert_eq!(
            SamplingRate::new(0),
            Err(ConfigError::InvalidSamplingFrequency { hz: 0 })
        );
    }

    #[test]
    fn test_above_one_megahertz_rejected() {
        assert!(SamplingRate::new(MAX_SAMPLING_HZ).is_ok());
        assert!(SamplingRate::new(MAX_SAMPLING_HZ + 1).is_err());
    }

    #[test]
    fn test_whole_seconds() -> ConfigResult<()> {
        assert_eq!(SamplingRate::new(100)?.whole_seconds_for(1010), 10);
        Ok(())
    }

    #[test]
    fn test_serde_validates() {
        assert!(serde_json::from_str::<SamplingRate>("0").is_err());
        assert!(matches!(
            serde_json::from_str::<SamplingRate>("250"),
            Ok(rate) if rate.period_us() == 4_000
        ));
    }
}
