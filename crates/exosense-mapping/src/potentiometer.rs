//! Wiper potentiometer conversions.
//!
//! Two clamping policies coexist:
//!
//! - [`PotentiometerScale::percentage`] is the display path. A reading
//!   outside the normalized `[0, 1]` window is logged and clamped.
//! - The offset-corrected paths ([`PotentiometerScale::offset_percentage`],
//!   [`PotentiometerScale::distance`], [`PotentiometerScale::angle`]) propagate
//!   the raw result unclamped.

use exosense_errors::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::range::{RangeSpec, map};

/// Full-scale code of a 16-bit ADC read.
pub const DEFAULT_FULL_SCALE: f64 = 65535.0;

/// Linear travel (mm) at full scale.
pub const DEFAULT_TRAVEL_MM: f64 = 50.0;

/// Rotation (degrees) at full scale.
pub const DEFAULT_TRAVEL_DEGREES: f64 = 300.0;

/// Conversion parameters for one potentiometer channel.
///
/// When deserialized, a missing `distance` or `angle` range spans
/// `[0, full_scale]` of the configured `full_scale`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PotentiometerFields", into = "PotentiometerFields")]
pub struct PotentiometerScale {
    /// ADC code that corresponds to full travel.
    pub full_scale: f64,
    /// Offset-corrected code to distance (mm).
    pub distance: RangeSpec,
    /// Offset-corrected code to joint angle (degrees).
    pub angle: RangeSpec,
}

/// Serialized form; ranges are optional so their defaults can follow
/// `full_scale`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct PotentiometerFields {
    full_scale: Option<f64>,
    distance: Option<RangeSpec>,
    angle: Option<RangeSpec>,
}

impl TryFrom<PotentiometerFields> for PotentiometerScale {
    type Error = ConfigError;

    fn try_from(fields: PotentiometerFields) -> ConfigResult<Self> {
        let derived = Self::with_full_scale(fields.full_scale.unwrap_or(DEFAULT_FULL_SCALE))?;
        Ok(Self {
            distance: fields.distance.unwrap_or(derived.distance),
            angle: fields.angle.unwrap_or(derived.angle),
            ..derived
        })
    }
}

impl From<PotentiometerScale> for PotentiometerFields {
    fn from(scale: PotentiometerScale) -> Self {
        Self {
            full_scale: Some(scale.full_scale),
            distance: Some(scale.distance),
            angle: Some(scale.angle),
        }
    }
}

impl Default for PotentiometerScale {
    fn default() -> Self {
        Self {
            full_scale: DEFAULT_FULL_SCALE,
            distance: RangeSpec::from_trusted(0.0, DEFAULT_FULL_SCALE, 0.0, DEFAULT_TRAVEL_MM),
            angle: RangeSpec::from_trusted(0.0, DEFAULT_FULL_SCALE, 0.0, DEFAULT_TRAVEL_DEGREES),
        }
    }
}

impl PotentiometerScale {
    /// Scale for an ADC whose full travel reads `full_scale`, with the
    /// distance and angle ranges spanning `[0, full_scale]`.
    ///
    /// # Errors
    ///
    /// Same as [`PotentiometerScale::validate`].
    pub fn with_full_scale(full_scale: f64) -> ConfigResult<Self> {
        let scale = Self {
            full_scale,
            ..Self::default()
        };
        scale.validate()?;
        Ok(Self {
            distance: RangeSpec::new(0.0, full_scale, 0.0, DEFAULT_TRAVEL_MM)?,
            angle: RangeSpec::new(0.0, full_scale, 0.0, DEFAULT_TRAVEL_DEGREES)?,
            ..scale
        })
    }

    /// Check the full-scale code.
    ///
    /// The range specs validate themselves on construction.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if `full_scale` is not a positive
    /// finite number.
    pub fn validate(&self) -> ConfigResult<()> {
        if !self.full_scale.is_finite() || self.full_scale <= 0.0 {
            return Err(ConfigError::invalid_value(
                "full_scale",
                format!("must be positive and finite, got {}", self.full_scale),
            ));
        }
        Ok(())
    }

    /// Raw reading as a percentage of full scale, clamped to `[0, 100]`.
    ///
    /// An out-of-window reading is reported at `warn` before clamping.
    pub fn percentage(&self, raw: u16) -> f64 {
        let normalized = f64::from(raw) / self.full_scale;
        if !(0.0..=1.0).contains(&normalized) {
            warn!(
                raw,
                normalized,
                full_scale = self.full_scale,
                "potentiometer reading outside normalized range, clamping"
            );
        }
        normalized.clamp(0.0, 1.0) * 100.0
    }

    /// Offset-corrected reading as a percentage of full scale. Unclamped.
    #[inline]
    pub fn offset_percentage(&self, raw: u16, offset: f64) -> f64 {
        map(f64::from(raw) - offset, 0.0, self.full_scale, 0.0, 100.0)
    }

    /// Offset-corrected reading as a distance. Unclamped.
    #[inline]
    pub fn distance(&self, raw: u16, offset: f64) -> f64 {
        self.distance.map(f64::from(raw) - offset)
    }

    /// Offset-corrected reading as a joint angle. Unclamped.
    #[inline]
    pub fn angle(&self, raw: u16, offset: f64) -> f64 {
        self.angle.map(f64::from(raw) - offset)
    }
}
