//! Subcommand arguments and handlers.

pub mod config;
pub mod header;
pub mod map;
pub mod run;
pub mod torque;

use std::path::PathBuf;

use clap::{Args, ValueEnum};
use exosense_engine::{PotReading, SessionConfig};
use exosense_telemetry::TelemetryLayout;

/// Telemetry column layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LayoutArg {
    /// gyroX gyroY gyroZ touch potRight potLeft
    Gyro,
    /// accX accY accZ gyroX gyroY gyroZ touch potRight potLeft
    Imu,
}

impl From<LayoutArg> for TelemetryLayout {
    fn from(arg: LayoutArg) -> Self {
        match arg {
            LayoutArg::Gyro => TelemetryLayout::Gyro,
            LayoutArg::Imu => TelemetryLayout::Imu,
        }
    }
}

/// Potentiometer reading mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PotReadingArg {
    /// Percentage of full scale, clamped
    Percentage,
    /// Offset-corrected percentage
    OffsetPercentage,
    /// Offset-corrected distance
    Distance,
    /// Offset-corrected joint angle
    Angle,
}

impl From<PotReadingArg> for PotReading {
    fn from(arg: PotReadingArg) -> Self {
        match arg {
            PotReadingArg::Percentage => PotReading::Percentage,
            PotReadingArg::OffsetPercentage => PotReading::OffsetPercentage,
            PotReadingArg::Distance => PotReading::Distance,
            PotReadingArg::Angle => PotReading::Angle,
        }
    }
}

/// Options shared by every command that builds a session configuration.
#[derive(Debug, Args)]
pub struct ConfigSource {
    /// YAML session configuration
    #[arg(short, long, env = "EXOSENSE_CONFIG")]
    pub config: Option<PathBuf>,
}

impl ConfigSource {
    /// Load the file, or the defaults when none is given.
    pub fn load(&self) -> anyhow::Result<SessionConfig> {
        match &self.config {
            Some(path) => Ok(SessionConfig::load(path)?),
            None => Ok(SessionConfig::default()),
        }
    }
}

/// `exoctl run`
#[derive(Debug, Args)]
pub struct RunArgs {
    #[command(flatten)]
    pub source: ConfigSource,

    /// Sampling frequency in Hz
    #[arg(long)]
    pub frequency: Option<u32>,

    /// Averaged calibration samples
    #[arg(long)]
    pub samples: Option<u32>,

    /// Discarded warm-up samples
    #[arg(long)]
    pub warmup: Option<u32>,

    /// Countdown before calibration, in seconds
    #[arg(long)]
    pub countdown: Option<u32>,

    /// Stop after this many telemetry rows (default: stream forever)
    #[arg(long)]
    pub ticks: Option<u64>,

    /// Telemetry column layout
    #[arg(long, value_enum)]
    pub layout: Option<LayoutArg>,

    /// Potentiometer reading mode
    #[arg(long, value_enum)]
    pub pot_reading: Option<PotReadingArg>,

    /// Torque curve material (b, g, r, y or full name)
    #[arg(long, requires = "direction")]
    pub material: Option<String>,

    /// Torque curve direction (i, d or full name)
    #[arg(long, requires = "material")]
    pub direction: Option<String>,

    /// Do not print raw calibration samples
    #[arg(long)]
    pub no_echo: bool,

    /// Seed for the simulated sensor noise
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// Ready-signal polls before the simulated operator presses start
    #[arg(long, value_name = "POLLS", default_value_t = 0)]
    pub ready_after: u64,
}

/// `exoctl torque`
#[derive(Debug, Args)]
pub struct TorqueArgs {
    /// Material tag (b, g, r, y) or name
    #[arg(long)]
    pub material: String,

    /// Direction tag (i, d) or name
    #[arg(long)]
    pub direction: String,

    /// Joint angle in degrees
    #[arg(long, allow_hyphen_values = true)]
    pub angle: f64,

    /// Fail on unknown tags instead of printing zero
    #[arg(long)]
    pub strict: bool,
}

/// `exoctl map`
#[derive(Debug, Args)]
pub struct MapArgs {
    /// Value to rescale
    pub x: f64,
    /// Input range lower bound
    pub in_min: f64,
    /// Input range upper bound
    pub in_max: f64,
    /// Output value at the lower bound
    pub out_min: f64,
    /// Output value at the upper bound
    pub out_max: f64,
}

/// `exoctl header`
#[derive(Debug, Args)]
pub struct HeaderArgs {
    /// Telemetry column layout
    #[arg(long, value_enum, default_value = "gyro")]
    pub layout: LayoutArg,

    /// Include torque columns
    #[arg(long)]
    pub torque: bool,

    /// Include tick and timestamp columns
    #[arg(long)]
    pub timestamps: bool,
}

/// `exoctl config`
#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(flatten)]
    pub source: ConfigSource,
}
