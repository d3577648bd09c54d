//! Application configuration.
//!
//! The configuration is loaded from `$XDG_CONFIG_HOME/hyprmon/config.json`.
//! The file is optional and so is every key in it: anything left out falls
//! back to the behaviour of a stock Hyprland setup.
//!
//! # Example
//!
//! ```json
//! {
//!   "monitors_command": { "program": "hyprctl", "args": ["monitors", "all", "-j"] },
//!   "config_file": ".config/hypr/monitors.conf",
//!   "file_mode": 420,
//!   "socket_path": "/run/user/1000/hyprmon.sock"
//! }
//! ```
//!
//! `file_mode` is a plain JSON integer, so `0o644` is written as `420`.

use crate::hyprland::monitors::MonitorCommand;
use crate::monitors_conf::{DEFAULT_FILE_MODE, DEFAULT_RELATIVE_PATH};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Program that lists monitors as JSON on stdout.
    pub monitors_command: MonitorCommand,

    /// Location of the layout file, relative to the home directory.
    pub config_file: PathBuf,

    /// Permission bits for a layout file that does not exist yet.
    pub file_mode: u32,

    /// Unix socket for `serve`.  Defaults to
    /// `$XDG_RUNTIME_DIR/hyprmon.sock`.
    pub socket_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            monitors_command: MonitorCommand::default(),
            config_file: PathBuf::from(DEFAULT_RELATIVE_PATH),
            file_mode: DEFAULT_FILE_MODE,
            socket_path: None,
        }
    }
}

impl Config {
    /// Load configuration from a JSON file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError(format!("failed to read {}: {}", path.display(), e)))?;
        let config: Self = serde_json::from_str(&contents)
            .map_err(|e| ConfigError(format!("failed to parse {}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings that would point writes at the home directory
    /// itself.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.config_file.as_os_str().is_empty() {
            return Err(ConfigError("config_file must not be empty".into()));
        }
        if self.config_file.is_absolute() {
            return Err(ConfigError(format!(
                "config_file must be relative to the home directory, got {}",
                self.config_file.display()
            )));
        }
        Ok(())
    }
}

/// Error from loading or parsing a configuration file.
#[derive(Debug, thiserror::Error)]
#[error("config error: {0}")]
pub struct ConfigError(String);
