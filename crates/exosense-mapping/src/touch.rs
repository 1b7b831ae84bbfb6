//! Touch-pad detection.

use serde::{Deserialize, Serialize};

use crate::potentiometer::DEFAULT_FULL_SCALE;

/// Default detection level, in whole percent of full scale.
pub const DEFAULT_THRESHOLD_PERCENT: u8 = 40;

/// Thresholded force-sensitive pad.
///
/// The reading is converted to a whole percentage (truncated) and compared
/// strictly against the threshold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TouchDetector {
    /// ADC code that corresponds to full pressure.
    pub full_scale: f64,
    /// Detection level in whole percent.
    pub threshold_percent: u8,
}

impl Default for TouchDetector {
    fn default() -> Self {
        Self {
            full_scale: DEFAULT_FULL_SCALE,
            threshold_percent: DEFAULT_THRESHOLD_PERCENT,
        }
    }
}

impl TouchDetector {
    /// Whole-percent pressure level of a raw reading.
    #[inline]
    pub fn level_percent(&self, raw: u16) -> f64 {
        (f64::from(raw) / self.full_scale * 100.0).trunc()
    }

    /// Whether the pad is pressed.
    #[inline]
    pub fn is_touched(&self, raw: u16) -> bool {
        self.level_percent(raw) > f64::from(self.threshold_percent)
    }
}
