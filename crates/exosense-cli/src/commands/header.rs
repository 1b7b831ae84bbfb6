//! `exoctl header`: telemetry column names.

use anyhow::Result;
use exosense_telemetry::TelemetryFormat;

use super::HeaderArgs;

pub fn execute(args: &HeaderArgs) -> Result<()> {
    let format = TelemetryFormat {
        layout: args.layout.into(),
        torque_columns: args.torque,
        timestamps: args.timestamps,
        ..TelemetryFormat::default()
    };
    println!("{}", format.header());
    Ok(())
}
