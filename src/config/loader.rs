//! Configuration loading from file system
//!
//! The config file is plain JSON. A missing file at the default location
//! yields the defaults. A path named by `--config` or `$WMENU_CONFIG` must
//! exist, and any file that cannot be read or parsed is an error.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

use super::defaults::{CONFIG_ENV_VAR, CONFIG_FILE_NAME};
use super::types::Config;
use crate::error::{Result, WmenuError};

/// A config file to read and whether the user asked for it by name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigLocation {
    pub path: PathBuf,
    /// Set for `--config` and `$WMENU_CONFIG`; such a file must exist
    pub explicit: bool,
}

impl ConfigLocation {
    pub fn explicit(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            explicit: true,
        }
    }

    pub fn default_location(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            explicit: false,
        }
    }
}

/// Resolve which config file to read.
///
/// Precedence: explicit path (from `--config`), then `$WMENU_CONFIG`, then
/// `<config dir>/wmenu/config.json`. A leading `~` is expanded.
pub fn config_path(explicit: Option<&str>) -> Option<ConfigLocation> {
    if let Some(path) = explicit {
        return Some(ConfigLocation::explicit(expand(path)));
    }
    if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
        if !path.is_empty() {
            return Some(ConfigLocation::explicit(expand(&path)));
        }
    }
    dirs::config_dir()
        .map(|dir| ConfigLocation::default_location(dir.join("wmenu").join(CONFIG_FILE_NAME)))
}

fn expand(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).as_ref())
}

/// Load configuration from `location`. Only a missing file at the default
/// location falls back to defaults.
#[instrument(
    name = "load_config",
    skip_all,
    fields(path = %location.path.display(), explicit = location.explicit)
)]
pub fn load_config(location: &ConfigLocation) -> Result<Config> {
    let path = location.path.as_path();
    if !location.explicit && !path.exists() {
        info!("Config file not found, using defaults");
        return Ok(Config::default());
    }
    read_config(path)
}

fn read_config(path: &Path) -> Result<Config> {
    let text = fs::read_to_string(path).map_err(|source| WmenuError::ConfigRead {
        path: path.display().to_string(),
        source,
    })?;

    let config = parse_config(&text).map_err(|source| WmenuError::ConfigParse {
        path: path.display().to_string(),
        source,
    })?;

    info!("Successfully loaded config");
    Ok(config)
}

/// Parse config JSON. An empty or whitespace-only file is the default config.
pub fn parse_config(text: &str) -> std::result::Result<Config, serde_json::Error> {
    if text.trim().is_empty() {
        return Ok(Config::default());
    }
    serde_json::from_str(text)
}
