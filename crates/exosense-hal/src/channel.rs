//! Signal source identifiers.

use serde::{Deserialize, Serialize};

/// A calibrated signal source.
///
/// Every channel owns exactly one zero offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    /// Gyroscope X axis
    GyroX,
    /// Gyroscope Y axis
    GyroY,
    /// Gyroscope Z axis
    GyroZ,
    /// Right knee potentiometer
    PotentiometerRight,
    /// Left knee potentiometer
    PotentiometerLeft,
}

impl Channel {
    /// Number of calibrated channels.
    pub const COUNT: usize = 5;

    /// All channels in storage order.
    pub const ALL: [Channel; Self::COUNT] = [
        Channel::GyroX,
        Channel::GyroY,
        Channel::GyroZ,
        Channel::PotentiometerRight,
        Channel::PotentiometerLeft,
    ];

    /// Gyroscope channels in axis order.
    pub const GYRO: [Channel; 3] = [Channel::GyroX, Channel::GyroY, Channel::GyroZ];

    /// Storage index of this channel.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Channel::GyroX => 0,
            Channel::GyroY => 1,
            Channel::GyroZ => 2,
            Channel::PotentiometerRight => 3,
            Channel::PotentiometerLeft => 4,
        }
    }

    /// Short label used in progress output.
    pub const fn label(self) -> &'static str {
        match self {
            Channel::GyroX => "gyroX",
            Channel::GyroY => "gyroY",
            Channel::GyroZ => "gyroZ",
            Channel::PotentiometerRight => "potRight",
            Channel::PotentiometerLeft => "potLeft",
        }
    }
}

/// An analog input pin wired to the board ADC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalogChannel {
    /// Right potentiometer wiper
    PotentiometerRight,
    /// Left potentiometer wiper
    PotentiometerLeft,
    /// Force-sensitive touch pad
    Touch,
}

impl AnalogChannel {
    /// Number of analog channels.
    pub const COUNT: usize = 3;

    /// Storage index of this analog channel.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            AnalogChannel::PotentiometerRight => 0,
            AnalogChannel::PotentiometerLeft => 1,
            AnalogChannel::Touch => 2,
        }
    }
}
