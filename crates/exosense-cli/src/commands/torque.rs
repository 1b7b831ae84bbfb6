//! `exoctl torque`: one torque estimate.

use anyhow::Result;
use exosense_torque::{TorqueCurve, torque_or_zero};

use super::TorqueArgs;

pub fn execute(args: &TorqueArgs) -> Result<()> {
    println!("{:.6}", estimate(args)?);
    Ok(())
}

fn estimate(args: &TorqueArgs) -> Result<f64> {
    if args.strict {
        let curve = TorqueCurve::from_tags(&args.material, &args.direction)?;
        return Ok(curve.evaluate(args.angle));
    }
    Ok(torque_or_zero(args.angle, &args.material, &args.direction))
}
