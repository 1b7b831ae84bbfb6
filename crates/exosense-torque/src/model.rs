//! Curve selection and polynomial evaluation.

use core::fmt;

use exosense_errors::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::coefficients::TABLE;
use crate::selector::{Direction, Material};

/// Evaluate a polynomial given in ascending power order.
///
/// Accumulates `c0 + c1*x + c2*x^2 + ...` term by term, starting from zero.
/// The summation order follows the coefficient order exactly; do not swap it
/// for a high-to-low scheme, high-degree terms make the result order
/// sensitive.
#[inline]
pub fn evaluate_ascending(coefficients: &[f64], x: f64) -> f64 {
    let mut acc = 0.0;
    let mut power = 1.0;
    for &c in coefficients {
        acc += c * power;
        power *= x;
    }
    acc
}

/// One torque curve, selected by material and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TorqueCurve {
    /// Band material
    pub material: Material,
    /// Motion direction
    pub direction: Direction,
}

impl TorqueCurve {
    /// All eight curves.
    pub const ALL: [TorqueCurve; 8] = [
        TorqueCurve::new(Material::Blue, Direction::Increasing),
        TorqueCurve::new(Material::Blue, Direction::Decreasing),
        TorqueCurve::new(Material::Green, Direction::Increasing),
        TorqueCurve::new(Material::Green, Direction::Decreasing),
        TorqueCurve::new(Material::Red, Direction::Increasing),
        TorqueCurve::new(Material::Red, Direction::Decreasing),
        TorqueCurve::new(Material::Yellow, Direction::Increasing),
        TorqueCurve::new(Material::Yellow, Direction::Decreasing),
    ];

    /// Select a curve.
    pub const fn new(material: Material, direction: Direction) -> Self {
        Self {
            material,
            direction,
        }
    }

    /// Select a curve from its tags or names (`"b"`/`"blue"`, `"i"`/`"increasing"`).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnspecifiedModelParameters`] if either selector
    /// names no curve.
    pub fn from_tags(material: &str, direction: &str) -> ConfigResult<Self> {
        match (material.parse::<Material>(), direction.parse::<Direction>()) {
            (Ok(m), Ok(d)) => Ok(Self::new(m, d)),
            _ => Err(ConfigError::unspecified_model(material, direction)),
        }
    }

    /// Coefficients, ascending power order.
    #[expect(
        clippy::indexing_slicing,
        reason = "enum indices are bounded by the table dimensions"
    )]
    #[inline]
    pub fn coefficients(&self) -> &'static [f64] {
        TABLE[self.material.index()][self.direction.index()]
    }

    /// Torque (N·m) at `angle` degrees. Unclamped outside the working range.
    #[inline]
    pub fn evaluate(&self, angle: f64) -> f64 {
        evaluate_ascending(self.coefficients(), angle)
    }
}

impl fmt::Display for TorqueCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.material, self.direction)
    }
}

/// Torque (N·m) at `angle` degrees for the given band and direction.
#[inline]
pub fn torque(angle: f64, material: Material, direction: Direction) -> f64 {
    TorqueCurve::new(material, direction).evaluate(angle)
}

/// Torque from tag strings, falling back to `0.0` on an unknown selector.
///
/// The fallback is logged at `error` level. A zero returned this way is not a
/// physical reading; use [`TorqueCurve::from_tags`] when the caller can
/// handle the error.
pub fn torque_or_zero(angle: f64, material: &str, direction: &str) -> f64 {
    match TorqueCurve::from_tags(material, direction) {
        Ok(curve) => curve.evaluate(angle),
        Err(e) => {
            error!(material, direction, "{e}");
            0.0
        }
    }
}
