//! Global context for CLI commands

use anyhow::{Result, bail};
use doorknock_core::config::{CONFIG_FILE, Config};
use std::path::{Path, PathBuf};

/// Configuration and flags shared by every command
pub struct Context {
    pub config: Config,
    pub verbose: bool,
}

impl Context {
    /// Load the config named on the command line, or `./doorknock.toml` if
    /// it exists.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicitly named config file does not exist,
    /// or if a config file cannot be parsed.
    pub fn new(config_path: Option<&Path>, verbose: bool) -> Result<Self> {
        let config = match config_path {
            Some(path) => {
                if !path.exists() {
                    bail!("config file '{}' not found", path.display());
                }
                Config::from_file(path)?
            }
            None => Config::load_or_default(CONFIG_FILE)?,
        };

        Ok(Self { config, verbose })
    }

    /// Base directory for run directories: the flag wins over the config
    pub fn output_base(&self, out: Option<PathBuf>) -> PathBuf {
        out.unwrap_or_else(|| self.config.output.dir.clone())
    }
}
