//! Per-channel zero offsets.

use exosense_hal::Channel;
use serde::{Deserialize, Serialize};

/// One zero offset per [`Channel`], in raw sensor units.
///
/// Starts at zero, is overwritten once per calibration run and is never
/// reset automatically.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CalibrationOffsets {
    values: [f64; Channel::COUNT],
}

impl CalibrationOffsets {
    /// All-zero offsets.
    pub const fn zero() -> Self {
        Self {
            values: [0.0; Channel::COUNT],
        }
    }

    /// Offsets from gyroscope axes and potentiometer means.
    pub const fn from_parts(gyro: [f64; 3], pot_right: f64, pot_left: f64) -> Self {
        let [x, y, z] = gyro;
        Self {
            values: [x, y, z, pot_right, pot_left],
        }
    }

    /// Offset of one channel.
    #[inline]
    #[expect(
        clippy::indexing_slicing,
        reason = "Channel::index is always below Channel::COUNT"
    )]
    pub fn get(&self, channel: Channel) -> f64 {
        self.values[channel.index()]
    }

    /// Overwrite the offset of one channel.
    #[expect(
        clippy::indexing_slicing,
        reason = "Channel::index is always below Channel::COUNT"
    )]
    pub fn set(&mut self, channel: Channel, value: f64) {
        self.values[channel.index()] = value;
    }

    /// Gyroscope offsets in axis order.
    #[inline]
    pub fn gyro(&self) -> [f64; 3] {
        Channel::GYRO.map(|channel| self.get(channel))
    }

    /// Right potentiometer offset (raw ADC code).
    #[inline]
    pub fn pot_right(&self) -> f64 {
        self.get(Channel::PotentiometerRight)
    }

    /// Left potentiometer offset (raw ADC code).
    #[inline]
    pub fn pot_left(&self) -> f64 {
        self.get(Channel::PotentiometerLeft)
    }

    /// `(channel, offset)` pairs in storage order.
    pub fn iter(&self) -> impl Iterator<Item = (Channel, f64)> + '_ {
        Channel::ALL.into_iter().map(|channel| (channel, self.get(channel)))
    }
}
