//! Check command - validate the effective configuration.

use crate::config::Config;
use crate::errors::ConfigResult;

/// Validate the effective configuration, failing with a descriptive
/// error on the first violated constraint.
pub fn execute(config: Config) -> ConfigResult<()> {
    config.validate()?;
    tracing::info!("Configuration is valid");
    println!("configuration OK");
    Ok(())
}
