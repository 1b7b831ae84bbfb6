//! `exoctl run`: a full session on the simulated board.

use std::io;

use anyhow::{Context, Result};
use exosense_engine::{Session, SessionConfig};
use exosense_hal::StdClock;
use exosense_torque::TorqueCurve;
use tracing::info;

use super::RunArgs;
use crate::sim::SimulatedBoard;

pub fn execute(args: &RunArgs) -> Result<()> {
    let config = resolve(args)?;
    let board = SimulatedBoard::new(args.seed).ready_after(args.ready_after);
    let mut session = Session::new(config, StdClock::new(), board, io::stdout().lock())
        .context("invalid session configuration")?;

    let rows = session.run(args.ticks)?;
    info!(rows, "session finished");
    Ok(())
}

/// Configuration file (or defaults) with command-line overrides applied.
pub fn resolve(args: &RunArgs) -> Result<SessionConfig> {
    let mut config = args.source.load()?;
    if let Some(hz) = args.frequency {
        config.sampling_frequency_hz = hz;
    }
    if let Some(samples) = args.samples {
        config.calibration.samples = samples;
    }
    if let Some(warmup) = args.warmup {
        config.calibration.warmup = warmup;
    }
    if let Some(countdown) = args.countdown {
        config.calibration.countdown_seconds = countdown;
    }
    if let Some(layout) = args.layout {
        config.telemetry.layout = layout.into();
    }
    if let Some(mode) = args.pot_reading {
        config.pot_reading = mode.into();
    }
    if let (Some(material), Some(direction)) = (&args.material, &args.direction) {
        config.torque = Some(TorqueCurve::from_tags(material, direction)?);
    }
    if args.no_echo {
        config.calibration.echo = false;
    }
    Ok(config)
}
