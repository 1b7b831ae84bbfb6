//! Potentiometer reading modes.

use std::fmt;
use std::str::FromStr;

use exosense_errors::{ConfigError, ConfigResult};
use exosense_mapping::PotentiometerScale;
use serde::{Deserialize, Serialize};

/// Which conversion of a potentiometer code the stream carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PotReading {
    /// Percentage of full scale, no offset, clamped to `[0, 100]`
    Percentage,
    /// Offset-corrected percentage, unclamped
    #[default]
    OffsetPercentage,
    /// Offset-corrected distance, unclamped
    Distance,
    /// Offset-corrected joint angle, unclamped
    Angle,
}

impl PotReading {
    /// Every mode.
    pub const ALL: [PotReading; 4] = [
        PotReading::Percentage,
        PotReading::OffsetPercentage,
        PotReading::Distance,
        PotReading::Angle,
    ];

    /// Convert one raw code with the channel's calibrated offset.
    #[inline]
    pub fn apply(self, scale: &PotentiometerScale, raw: u16, offset: f64) -> f64 {
        match self {
            PotReading::Percentage => scale.percentage(raw),
            PotReading::OffsetPercentage => scale.offset_percentage(raw, offset),
            PotReading::Distance => scale.distance(raw, offset),
            PotReading::Angle => scale.angle(raw, offset),
        }
    }

    /// Config name.
    pub fn name(self) -> &'static str {
        match self {
            PotReading::Percentage => "percentage",
            PotReading::OffsetPercentage => "offset_percentage",
            PotReading::Distance => "distance",
            PotReading::Angle => "angle",
        }
    }
}

impl fmt::Display for PotReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PotReading {
    type Err = ConfigError;

    fn from_str(s: &str) -> ConfigResult<Self> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|mode| mode.name() == wanted)
            .ok_or_else(|| {
                ConfigError::invalid_value("pot_reading", format!("unknown reading mode '{s}'"))
            })
    }
}
