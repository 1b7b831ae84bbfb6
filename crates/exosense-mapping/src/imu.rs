//! Inertial sensor scaling.
//!
//! The gyroscope reports millidegrees per second and the accelerometer
//! milli-g. Both are rescaled symmetrically onto `[-ratio, ratio]`:
//!
//! - gyroscope: `[-fs_dps * 1000, fs_dps * 1000]`, after subtracting the
//!   calibrated offset
//! - accelerometer: `[-fs_g * G0 * 100, fs_g * G0 * 100]`, no offset

use exosense_errors::ConfigResult;
use serde::{Deserialize, Serialize};

use crate::range::RangeSpec;
use crate::units::G0;

/// Default gyroscope full scale in degrees per second.
pub const DEFAULT_GYRO_FULL_SCALE_DPS: f64 = 500.0;

/// Default accelerometer full scale in g.
pub const DEFAULT_ACCEL_FULL_SCALE_G: f64 = 2.0;

/// Default output ratio for both sensors.
pub const DEFAULT_RATIO: f64 = 100.0;

/// Scaling for the IMU axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ImuScaling {
    /// Offset-corrected gyroscope code to output units.
    pub gyro: RangeSpec,
    /// Accelerometer code to output units.
    pub accel: RangeSpec,
}

impl Default for ImuScaling {
    fn default() -> Self {
        let gyro_in = DEFAULT_GYRO_FULL_SCALE_DPS * 1000.0;
        let accel_in = DEFAULT_ACCEL_FULL_SCALE_G * G0 * 100.0;
        Self {
            gyro: RangeSpec::from_trusted(-gyro_in, gyro_in, -DEFAULT_RATIO, DEFAULT_RATIO),
            accel: RangeSpec::from_trusted(-accel_in, accel_in, -DEFAULT_RATIO, DEFAULT_RATIO),
        }
    }
}

impl ImuScaling {
    /// Scaling for a given gyroscope and accelerometer full scale.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when either full scale is zero or not
    /// finite.
    pub fn from_full_scale(gyro_dps: f64, accel_g: f64, ratio: f64) -> ConfigResult<Self> {
        Ok(Self {
            gyro: RangeSpec::symmetric(gyro_dps * 1000.0, ratio)?,
            accel: RangeSpec::symmetric(accel_g * G0 * 100.0, ratio)?,
        })
    }

    /// Scale raw gyroscope axes after removing per-axis offsets.
    #[inline]
    pub fn gyro(&self, raw: [i32; 3], offsets: [f64; 3]) -> [f64; 3] {
        let [x, y, z] = raw;
        let [ox, oy, oz] = offsets;
        [
            self.gyro.map(f64::from(x) - ox),
            self.gyro.map(f64::from(y) - oy),
            self.gyro.map(f64::from(z) - oz),
        ]
    }

    /// Scale raw accelerometer axes.
    #[inline]
    pub fn accel(&self, raw: [i32; 3]) -> [f64; 3] {
        raw.map(|axis| self.accel.map(f64::from(axis)))
    }
}
