//! Session configuration.

use std::fs;
use std::path::Path;

use exosense_calibration::{DEFAULT_SAMPLE_COUNT, DEFAULT_WARMUP};
use exosense_errors::{ConfigError, ConfigResult, ExoError};
use exosense_mapping::{ImuScaling, PotentiometerScale, TouchDetector};
use exosense_scheduler::{SamplingRate, WaitStrategy};
use exosense_telemetry::TelemetryFormat;
use exosense_torque::TorqueCurve;
use serde::{Deserialize, Serialize};

use crate::reading::PotReading;

/// Default sampling frequency in hertz.
pub const DEFAULT_SAMPLING_HZ: u32 = 100;

/// Calibration phase settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalibrationSettings {
    /// Averaged samples per channel.
    pub samples: u32,
    /// Discarded warm-up samples.
    pub warmup: u32,
    /// Operator countdown before sampling starts.
    pub countdown_seconds: u32,
    /// Print every raw calibration sample.
    pub echo: bool,
    /// Pause after the offset summary.
    pub settle_ms: u64,
}

impl Default for CalibrationSettings {
    fn default() -> Self {
        Self {
            samples: DEFAULT_SAMPLE_COUNT,
            warmup: DEFAULT_WARMUP,
            countdown_seconds: 5,
            echo: true,
            settle_ms: 1_000,
        }
    }
}

/// Everything a session needs, validated once by [`SessionConfig::validate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionConfig {
    /// Ticks per second, for calibration and streaming alike.
    pub sampling_frequency_hz: u32,
    /// How the scheduler blocks between ticks.
    pub wait: WaitStrategy,
    /// Calibration phase settings.
    pub calibration: CalibrationSettings,
    /// Delay between the end of calibration and the first telemetry row.
    pub stream_delay_ms: u64,
    /// Potentiometer conversions.
    pub potentiometer: PotentiometerScale,
    /// Which potentiometer conversion the stream carries.
    pub pot_reading: PotReading,
    /// IMU scaling.
    pub imu: ImuScaling,
    /// Touch pad detection.
    pub touch: TouchDetector,
    /// Row shape and number formatting.
    pub telemetry: TelemetryFormat,
    /// Torque curve applied to both joint angles, if any.
    pub torque: Option<TorqueCurve>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            sampling_frequency_hz: DEFAULT_SAMPLING_HZ,
            wait: WaitStrategy::default(),
            calibration: CalibrationSettings::default(),
            stream_delay_ms: 3_000,
            potentiometer: PotentiometerScale::default(),
            pot_reading: PotReading::default(),
            imu: ImuScaling::default(),
            touch: TouchDetector::default(),
            telemetry: TelemetryFormat::default(),
            torque: None,
        }
    }
}

impl SessionConfig {
    /// Parse a YAML document. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed YAML, unknown keys or
    /// values that fail their own validation (such as a degenerate range).
    pub fn from_yaml_str(yaml: &str) -> ConfigResult<Self> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigError::Parse {
            reason: e.to_string(),
        })
    }

    /// Read and parse a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an I/O error when the file cannot be read and a configuration
    /// error when it cannot be parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ExoError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let config = Self::from_yaml_str(&text)?;
        tracing::debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Serialize to YAML.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if serialization fails.
    pub fn to_yaml(&self) -> ConfigResult<String> {
        serde_yaml::to_string(self).map_err(|e| ConfigError::Parse {
            reason: e.to_string(),
        })
    }

    /// Validated sampling rate.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidSamplingFrequency`] for 0 Hz or above
    /// 1 MHz.
    pub fn sampling_rate(&self) -> ConfigResult<SamplingRate> {
        SamplingRate::new(self.sampling_frequency_hz)
    }

    /// Telemetry format with torque columns switched on exactly when a
    /// torque curve is selected.
    pub fn telemetry_format(&self) -> TelemetryFormat {
        TelemetryFormat {
            torque_columns: self.torque.is_some(),
            ..self.telemetry
        }
    }

    /// Run every configuration check.
    ///
    /// # Errors
    ///
    /// Returns the first failing check.
    pub fn validate(&self) -> ConfigResult<()> {
        self.sampling_rate()?;
        if self.calibration.samples == 0 {
            return Err(ConfigError::ZeroSampleCount);
        }
        self.potentiometer.validate()?;
        if !self.touch.full_scale.is_finite() || self.touch.full_scale <= 0.0 {
            return Err(ConfigError::invalid_value(
                "touch.full_scale",
                format!("must be positive and finite, got {}", self.touch.full_scale),
            ));
        }
        if self.touch.threshold_percent > 100 {
            return Err(ConfigError::invalid_value(
                "touch.threshold_percent",
                format!("{} is above 100", self.touch.threshold_percent),
            ));
        }
        self.telemetry.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use exosense_telemetry::TelemetryLayout;
    use exosense_torque::{Direction, Material};

    #[test]
    fn test_defaults_are_valid() -> ConfigResult<()> {
        let config = SessionConfig::default();
        config.validate()?;
        assert_eq!(config.sampling_rate()?.period_us(), 10_000);
        assert_eq!(config.calibration.samples, 1010);
        assert_eq!(config.calibration.warmup, 200);
        assert_eq!(config.pot_reading, PotReading::OffsetPercentage);
        Ok(())
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() -> ConfigResult<()> {
        let config = SessionConfig::from_yaml_str(
            "sampling_frequency_hz: 250\ncalibration:\n  samples: 50\ntelemetry:\n  layout: imu\n",
        )?;
        assert_eq!(config.sampling_frequency_hz, 250);
        assert_eq!(config.calibration.samples, 50);
        assert_eq!(config.calibration.warmup, 200);
        assert_eq!(config.telemetry.layout, TelemetryLayout::Imu);
        Ok(())
    }

    #[test]
    fn test_torque_selection_by_tag() -> ConfigResult<()> {
        let config = SessionConfig::from_yaml_str("torque:\n  material: r\n  direction: d\n")?;
        assert_eq!(
            config.torque,
            Some(TorqueCurve::new(Material::Red, Direction::Decreasing))
        );
        assert!(config.telemetry_format().torque_columns);
        Ok(())
    }

    #[test]
    fn test_unknown_key_rejected() {
        let result = SessionConfig::from_yaml_str("sampling_hz: 100\n");
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_misspelled_nested_key_rejected() {
        for yaml in [
            "calibration:\n  sample: 0\n",
            "potentiometer:\n  fullscale: 4095\n",
            "potentiometer:\n  angle:\n    input_min: 0.0\n    input_max: 4095.0\n    output_min: 0.0\n    output_maxx: 300.0\n",
            "imu:\n  gyroscope:\n    input_min: -1.0\n    input_max: 1.0\n    output_min: -1.0\n    output_max: 1.0\n",
            "touch:\n  threshold: 10\n",
            "telemetry:\n  precison: 2\n",
            "torque:\n  material: b\n  direction: i\n  side: left\n",
            "wait:\n  mode: sleep_then_spin\n  spin_margin: 50\n",
        ] {
            assert!(
                matches!(SessionConfig::from_yaml_str(yaml), Err(ConfigError::Parse { .. })),
                "accepted {yaml:?}"
            );
        }
    }

    #[test]
    fn test_degenerate_range_rejected_at_parse() {
        let yaml = "potentiometer:\n  angle:\n    input_min: 5.0\n    input_max: 5.0\n    output_min: 0.0\n    output_max: 300.0\n";
        assert!(matches!(
            SessionConfig::from_yaml_str(yaml),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_validation_failures() {
        let mut config = SessionConfig {
            sampling_frequency_hz: 0,
            ..SessionConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidSamplingFrequency { hz: 0 })
        );

        config.sampling_frequency_hz = 100;
        config.calibration.samples = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroSampleCount));

        config.calibration.samples = 10;
        config.touch.threshold_percent = 101;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue {
                field: "touch.threshold_percent",
                ..
            })
        ));
    }

    #[test]
    fn test_yaml_round_trip() -> ConfigResult<()> {
        let config = SessionConfig {
            torque: Some(TorqueCurve::new(Material::Blue, Direction::Increasing)),
            ..SessionConfig::default()
        };
        let back = SessionConfig::from_yaml_str(&config.to_yaml()?)?;
        assert_eq!(back, config);
        Ok(())
    }
}
