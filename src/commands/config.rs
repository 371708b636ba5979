//! Persisting command-line options as defaults

use anyhow::{Context, Result};
use colored::Colorize;

use crate::config::Linux2BsdConfig;

/// Write `config` to the config file and report where it went
pub fn cmd_save_config(config: &Linux2BsdConfig) -> Result<()> {
    let path = config.save().context("Failed to save config")?;

    println!(
        "{} Saved defaults to {}",
        "✓".green(),
        path.display().to_string().cyan()
    );

    Ok(())
}
