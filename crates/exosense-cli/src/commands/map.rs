//! `exoctl map`: one validated range mapping.

use anyhow::Result;
use exosense_mapping::RangeSpec;

use super::MapArgs;

pub fn execute(args: &MapArgs) -> Result<()> {
    let spec = RangeSpec::new(args.in_min, args.in_max, args.out_min, args.out_max)?;
    println!("{:.6}", spec.map(args.x));
    Ok(())
}
