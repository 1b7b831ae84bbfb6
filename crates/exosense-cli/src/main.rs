//! exoctl - exosense sampling engine driver
//!
//! Runs full sessions against a simulated board and exposes the unit
//! conversions and torque model as one-shot queries.

#![deny(unused_must_use)]
#![deny(clippy::unwrap_used)]

mod commands;
mod sim;

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use exosense_errors::{ConfigError, ErrorCategory, ExoError};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::commands::{ConfigArgs, HeaderArgs, MapArgs, RunArgs, TorqueArgs};

#[derive(Parser)]
#[command(name = "exoctl")]
#[command(about = "Exoskeleton sensor sampling, calibration and telemetry")]
#[command(version)]
#[command(long_about = "
exoctl drives the exosense sampling engine. `run` waits for the operator,
calibrates the sensor offsets and streams one tab-separated telemetry row per
tick to stdout. Logs go to stderr.
")]
struct Cli {
    /// Verbose logging (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a session: wait for start, calibrate, stream telemetry
    Run(RunArgs),

    /// Evaluate one torque curve at one joint angle
    Torque(TorqueArgs),

    /// Rescale one value between two ranges
    #[command(allow_negative_numbers = true)]
    Map(MapArgs),

    /// Print the telemetry column names
    Header(HeaderArgs),

    /// Print the effective session configuration as YAML
    Config(ConfigArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match execute_command(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(exit_code(&e))
        }
    }
}

fn execute_command(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Run(args) => commands::run::execute(args),
        Commands::Torque(args) => commands::torque::execute(args),
        Commands::Map(args) => commands::map::execute(args),
        Commands::Header(args) => commands::header::execute(args),
        Commands::Config(args) => commands::config::execute(args),
    }
}

/// 2 for configuration errors, 3 for I/O, 1 for anything else.
fn exit_code(e: &anyhow::Error) -> u8 {
    if e.downcast_ref::<ConfigError>().is_some() {
        return 2;
    }
    match e.downcast_ref::<ExoError>().map(ExoError::category) {
        Some(ErrorCategory::Config) => 2,
        Some(ErrorCategory::Io) => 3,
        _ => 1,
    }
}
