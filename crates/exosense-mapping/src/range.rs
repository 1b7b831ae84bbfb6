//! Affine range mapping.

use exosense_errors::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};

/// Rescale `x` from `[in_min, in_max]` to `[out_min, out_max]`.
///
/// No clamping: inputs outside the input domain extrapolate. The caller must
/// guarantee `in_max != in_min`; otherwise the result is infinite or NaN.
/// Prefer [`RangeSpec`], which checks that once up front.
#[inline]
pub fn map(x: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    (x - in_min) * (out_max - out_min) / (in_max - in_min) + out_min
}

/// Validated linear mapping between two numeric domains.
///
/// Cheap to copy and reusable. A channel usually carries several of these
/// (raw to percentage, raw to distance, raw to angle).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RangeBounds", into = "RangeBounds")]
pub struct RangeSpec {
    input_min: f64,
    input_max: f64,
    output_min: f64,
    output_max: f64,
}

/// Unvalidated serialized form of [`RangeSpec`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RangeBounds {
    /// Lower input bound
    pub input_min: f64,
    /// Upper input bound
    pub input_max: f64,
    /// Output value at `input_min`
    pub output_min: f64,
    /// Output value at `input_max`
    pub output_max: f64,
}

impl RangeSpec {
    /// Create a mapping.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::DegenerateRange`] when `input_min == input_max`
    /// and [`ConfigError::NonFiniteRange`] when any bound is NaN or infinite.
    pub fn new(input_min: f64, input_max: f64, output_min: f64, output_max: f64) -> ConfigResult<Self> {
        for (bound, value) in [
            ("input_min", input_min),
            ("input_max", input_max),
            ("output_min", output_min),
            ("output_max", output_max),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NonFiniteRange { bound, value });
            }
        }

        #[expect(
            clippy::float_cmp,
            reason = "only an exactly empty input span divides by zero"
        )]
        let degenerate = input_min == input_max;
        if degenerate {
            return Err(ConfigError::DegenerateRange {
                input_min,
                input_max,
            });
        }

        Ok(Self {
            input_min,
            input_max,
            output_min,
            output_max,
        })
    }

    /// Build from bounds known to be valid at compile time.
    pub(crate) const fn from_trusted(
        input_min: f64,
        input_max: f64,
        output_min: f64,
        output_max: f64,
    ) -> Self {
        Self {
            input_min,
            input_max,
            output_min,
            output_max,
        }
    }

    /// Symmetric mapping `[-input, input] -> [-output, output]`.
    ///
    /// # Errors
    ///
    /// Same as [`RangeSpec::new`].
    pub fn symmetric(input: f64, output: f64) -> ConfigResult<Self> {
        Self::new(-input, input, -output, output)
    }

    /// Apply the mapping. Unclamped.
    #[inline]
    pub fn map(&self, x: f64) -> f64 {
        map(
            x,
            self.input_min,
            self.input_max,
            self.output_min,
            self.output_max,
        )
    }

    /// Lower input bound.
    pub fn input_min(&self) -> f64 {
        self.input_min
    }

    /// Upper input bound.
    pub fn input_max(&self) -> f64 {
        self.input_max
    }

    /// Output value at the lower input bound.
    pub fn output_min(&self) -> f64 {
        self.output_min
    }

    /// Output value at the upper input bound.
    pub fn output_max(&self) -> f64 {
        self.output_max
    }
}

impl TryFrom<RangeBounds> for RangeSpec {
    type Error = ConfigError;

    fn try_from(bounds: RangeBounds) -> ConfigResult<Self> {
        Self::new(
            bounds.input_min,
            bounds.input_max,
            bounds.output_min,
            bounds.output_max,
        )
    }
}

impl From<RangeSpec> for RangeBounds {
    fn from(spec: RangeSpec) -> Self {
        Self {
            input_min: spec.input_min,
            input_max: spec.input_max,
            output_min: spec.output_min,
            output_max: spec.output_max,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_map_midpoint() {
        assert_relative_eq!(map(5.0, 0.0, 10.0, 0.0, 100.0), 50.0);
    }

    #[test]
    fn test_map_inverted_output() {
        assert_relative_eq!(map(0.0, 0.0, 10.0, 100.0, 0.0), 100.0);
        assert_relative_eq!(map(10.0, 0.0, 10.0, 100.0, 0.0), 0.0);
    }

    #[test]
    fn test_map_extrapolates() {
        assert_relative_eq!(map(20.0, 0.0, 10.0, 0.0, 100.0), 200.0);
        assert_relative_eq!(map(-10.0, 0.0, 10.0, 0.0, 100.0), -100.0);
    }

    #[test]
    fn test_degenerate_range_rejected() {
        assert_eq!(
            RangeSpec::new(3.0, 3.0, 0.0, 1.0),
            Err(ConfigError::DegenerateRange {
                input_min: 3.0,
                input_max: 3.0
            })
        );
    }

    #[test]
    fn test_narrow_but_distinct_range_accepted() -> ConfigResult<()> {
        let narrow = RangeSpec::new(1.0, 1.0 + f64::EPSILON, 0.0, 1.0)?;
        assert_relative_eq!(narrow.map(1.0 + f64::EPSILON), 1.0);

        let far = RangeSpec::new(1e16, 1e16 + 2.0, 0.0, 100.0)?;
        assert_relative_eq!(far.map(1e16), 0.0);
        assert_relative_eq!(far.map(1e16 + 2.0), 100.0);

        assert!(matches!(
            RangeSpec::new(-0.0, 0.0, 0.0, 1.0),
            Err(ConfigError::DegenerateRange { .. })
        ));
        Ok(())
    }

    #[test]
    fn test_non_finite_rejected() {
        let result = RangeSpec::new(0.0, f64::INFINITY, 0.0, 1.0);
        assert!(matches!(
            result,
            Err(ConfigError::NonFiniteRange {
                bound: "input_max",
                ..
            })
        ));
        assert!(matches!(
            RangeSpec::new(0.0, 1.0, f64::NAN, 1.0),
            Err(ConfigError::NonFiniteRange {
                bound: "output_min",
                ..
            })
        ));
    }

    #[test]
    fn test_symmetric() -> ConfigResult<()> {
        let spec = RangeSpec::symmetric(500_000.0, 100.0)?;
        assert_relative_eq!(spec.map(250_000.0), 50.0);
        assert_relative_eq!(spec.map(-500_000.0), -100.0);
        assert_relative_eq!(spec.map(0.0), 0.0);
        Ok(())
    }

    #[test]
    fn test_serde_validates() -> Result<(), Box<dyn std::error::Error>> {
        let spec: RangeSpec = serde_json::from_str(
            r#"{"input_min":0.0,"input_max":4095.0,"output_min":0.0,"output_max":100.0}"#,
        )?;
        assert_relative_eq!(spec.input_max(), 4095.0);

        let bad = serde_json::from_str::<RangeSpec>(
            r#"{"input_min":1.0,"input_max":1.0,"output_min":0.0,"output_max":100.0}"#,
        );
        let message = match bad {
            Ok(spec) => return Err(format!("degenerate range accepted: {spec:?}").into()),
            Err(e) => e.to_string(),
        };
        assert!(message.contains("degenerate range"));
        Ok(())
    }
}
