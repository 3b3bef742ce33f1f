//! Config command implementation

use anyhow::Result;
use std::path::PathBuf;

use crate::config::Config;

/// Print the example configuration, the effective one, or write it to a file
pub fn execute(config: &Config, example: bool, out: Option<PathBuf>) -> Result<()> {
    match out {
        Some(path) => {
            let selected = if example { Config::default() } else { config.clone() };
            selected.save_to_file(&path)?;
            log::info!("Configuration written to {}", path.display());
        }
        None if example => print!("{}", Config::example_toml()?),
        None => print!("{}", config.to_toml()?),
    }

    Ok(())
}
