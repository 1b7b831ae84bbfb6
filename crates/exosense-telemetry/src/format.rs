//! Column layout and number formatting.

use std::fmt;
use std::str::FromStr;

use exosense_errors::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};

/// Decimal places per float, as printed by `%f`.
pub const DEFAULT_PRECISION: usize = 6;

/// Largest accepted precision. More digits than this carry no information
/// for an `f64`.
pub const MAX_PRECISION: usize = 17;

const TIMESTAMP_COLUMNS: &[&str] = &["tick", "elapsedUs"];
const GYRO_COLUMNS: &[&str] = &["gyroX", "gyroY", "gyroZ", "touch", "potRight", "potLeft"];
const IMU_COLUMNS: &[&str] = &[
    "accX", "accY", "accZ", "gyroX", "gyroY", "gyroZ", "touch", "potRight", "potLeft",
];
const TORQUE_COLUMNS: &[&str] = &["torqueRight", "torqueLeft"];

/// Which sensor columns a row carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TelemetryLayout {
    /// `gyroX gyroY gyroZ touch potRight potLeft`
    #[default]
    Gyro,
    /// `accX accY accZ` followed by the gyro layout
    Imu,
}

impl TelemetryLayout {
    /// Sensor column names.
    pub fn columns(self) -> &'static [&'static str] {
        match self {
            TelemetryLayout::Gyro => GYRO_COLUMNS,
            TelemetryLayout::Imu => IMU_COLUMNS,
        }
    }

    /// Whether rows start with accelerometer axes.
    #[inline]
    pub fn has_accel(self) -> bool {
        matches!(self, TelemetryLayout::Imu)
    }

    /// Lowercase name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            TelemetryLayout::Gyro => "gyro",
            TelemetryLayout::Imu => "imu",
        }
    }
}

impl fmt::Display for TelemetryLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TelemetryLayout {
    type Err = ConfigError;

    fn from_str(s: &str) -> ConfigResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "gyro" => Ok(TelemetryLayout::Gyro),
            "imu" => Ok(TelemetryLayout::Imu),
            other => Err(ConfigError::invalid_value(
                "layout",
                format!("unknown layout '{other}', expected 'gyro' or 'imu'"),
            )),
        }
    }
}

/// Row shape and number formatting of the telemetry stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TelemetryFormat {
    /// Sensor columns.
    pub layout: TelemetryLayout,
    /// Decimal places per float.
    pub precision: usize,
    /// Append `torqueRight torqueLeft`.
    pub torque_columns: bool,
    /// Prepend `tick elapsedUs`.
    pub timestamps: bool,
}

impl Default for TelemetryFormat {
    fn default() -> Self {
        Self {
            layout: TelemetryLayout::default(),
            precision: DEFAULT_PRECISION,
            torque_columns: false,
            timestamps: false,
        }
    }
}

impl TelemetryFormat {
    /// Check the precision.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when `precision` exceeds
    /// [`MAX_PRECISION`].
    pub fn validate(&self) -> ConfigResult<()> {
        if self.precision > MAX_PRECISION {
            return Err(ConfigError::invalid_value(
                "precision",
                format!("{} exceeds the maximum of {MAX_PRECISION}", self.precision),
            ));
        }
        Ok(())
    }

    /// Column names in row order.
    pub fn columns(&self) -> impl Iterator<Item = &'static str> {
        let timestamps: &[&str] = if self.timestamps { TIMESTAMP_COLUMNS } else { &[] };
        let torque: &[&str] = if self.torque_columns { TORQUE_COLUMNS } else { &[] };
        timestamps
            .iter()
            .chain(self.layout.columns())
            .chain(torque)
            .copied()
    }

    /// Tab-separated column names.
    pub fn header(&self) -> String {
        self.columns().collect::<Vec<_>>().join("\t")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_header() {
        insta::assert_snapshot!(TelemetryFormat::default().header(), @"gyroX	gyroY	gyroZ	touch	potRight	potLeft");
    }

    #[test]
    fn test_full_header() {
        let format = TelemetryFormat {
            layout: TelemetryLayout::Imu,
            torque_columns: true,
            timestamps: true,
            ..TelemetryFormat::default()
        };
        insta::assert_snapshot!(format.header(), @"tick	elapsedUs	accX	accY	accZ	gyroX	gyroY	gyroZ	touch	potRight	potLeft	torqueRight	torqueLeft");
    }

    #[test]
    fn test_layout_parsing() -> ConfigResult<()> {
        assert_eq!("IMU".parse::<TelemetryLayout>()?, TelemetryLayout::Imu);
        assert_eq!("gyro".parse::<TelemetryLayout>()?, TelemetryLayout::Gyro);
        assert!(matches!(
            "csv".parse::<TelemetryLayout>(),
            Err(ConfigError::InvalidValue { field: "layout", .. })
        ));
        Ok(())
    }

    #[test]
    fn test_precision_validation() {
        let mut format = TelemetryFormat::default();
        assert_eq!(format.validate(), Ok(()));
        format.precision = MAX_PRECISION + 1;
        assert!(format.validate().is_err());
    }

    #[test]
    fn test_serde_defaults() -> Result<(), serde_json::Error> {
        let format: TelemetryFormat = serde_json::from_str(r#"{"layout":"imu"}"#)?;
        assert_eq!(format.layout, TelemetryLayout::Imu);
        assert_eq!(format.precision, DEFAULT_PRECISION);
        assert!(!format.torque_columns);
        Ok(())
    }
}
