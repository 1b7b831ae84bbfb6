//! `exoctl config`: effective configuration.

use anyhow::Result;

use super::ConfigArgs;

pub fn execute(args: &ConfigArgs) -> Result<()> {
    let config = args.source.load()?;
    config.validate()?;
    print!("{}", config.to_yaml()?);
    Ok(())
}
