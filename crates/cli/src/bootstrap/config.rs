use anyhow::Context;
use soa_monitor_domain::{CliOverrides, Config};

/// Loads and validates configuration. Any problem here is fatal.
pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(path, overrides).context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;
    Ok(config)
}
