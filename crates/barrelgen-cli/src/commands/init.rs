//! `barrelgen init` — create a starter configuration file.

use std::path::Path;

use crate::{
    cli::{GlobalArgs, InitArgs},
    config::{AppConfig, DEFAULT_CONFIG_FILE},
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Write a starter `barrelgen.toml`.
pub fn execute(args: InitArgs, global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    let config_path = global
        .config
        .clone()
        .unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE).to_path_buf());

    // Bail early if the file already exists and --force was not given.
    if config_path.exists() && !args.force {
        return Err(CliError::ConfigExists { path: config_path });
    }

    let toml = toml::to_string_pretty(&AppConfig::starter()).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise starter config: {e}"),
        source: Some(Box::new(e)),
    })?;

    std::fs::write(&config_path, &toml).map_err(|e| CliError::IoError {
        message: format!("Failed to write config to '{}'", config_path.display()),
        source: e,
    })?;

    output.success(&format!(
        "Configuration created at {}",
        config_path.display(),
    ))?;
    output.detail("Edit sources, start_dirs, and generators, then run: barrelgen generate")?;

    Ok(())
}
