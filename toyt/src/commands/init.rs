//! Init command implementation.
//!
//! Writes a `toyt.toml` holding the default settings so they can be edited.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::{Config, CONFIG_FILE_NAME};
use crate::error::{Result, ToytError};

/// Arguments for the init command.
#[derive(Debug, Clone, Default)]
pub struct InitArgs {
    /// Directory to write the configuration into (default: current directory).
    pub path: Option<PathBuf>,
    /// Overwrite an existing configuration file.
    pub force: bool,
}

/// Write the default configuration and return where it went.
pub fn write_default_config(dir: &Path, force: bool) -> Result<PathBuf> {
    if dir.exists() && !dir.is_dir() {
        return Err(ToytError::Validation(format!(
            "target is not a directory: {}",
            dir.display()
        )));
    }

    let config_path = dir.join(CONFIG_FILE_NAME);
    if config_path.exists() && !force {
        return Err(ToytError::Validation(format!(
            "{} already exists (use --force to overwrite)",
            config_path.display()
        )));
    }

    Config::default().save_to_path(&config_path)?;
    Ok(config_path)
}

/// Run the init command.
pub fn run_init(args: InitArgs) -> Result<()> {
    let dir = args.path.unwrap_or_else(|| PathBuf::from("."));
    let config_path = write_default_config(&dir, args.force)?;
    info!("Created {}", config_path.display());
    Ok(())
}
