//! User configuration
//!
//! Defaults for the command line live in `config.toml` under the platform
//! config directory (e.g. `~/.config/linux2bsd/config.toml`). The
//! `LINUX2BSD_CONFIG` environment variable points at another file.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::{Direction, PatternSyntax};

/// Result limit used when neither the CLI nor the config sets one
pub const DEFAULT_LIMIT: usize = 10;

const CONFIG_ENV: &str = "LINUX2BSD_CONFIG";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Linux2BsdConfig {
    /// Directory of category files; the built-in dataset when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<Direction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub syntax: Option<PatternSyntax>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
    /// Prompt after printing results; follows the terminal when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interactive: Option<bool>,
}

impl Linux2BsdConfig {
    /// Path of the config file, if a location can be determined
    pub fn config_path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }
        ProjectDirs::from("", "", "linux2bsd").map(|dirs| dirs.config_dir().join(CONFIG_FILE))
    }

    /// Load the config file, falling back to defaults when it does not exist
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: Self = toml::from_str(&content).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })?;
        config.data_dir = config.data_dir.map(|dir| expand_home(&dir));

        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Write the config back to its default location, returning that path
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_path().ok_or_else(|| Error::Io {
            path: PathBuf::from(CONFIG_FILE),
            source: std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "no config directory for this platform",
            ),
        })?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let io_err = |source| Error::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| Error::Io {
            path: path.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::InvalidData, e),
        })?;
        fs::write(path, content).map_err(io_err)
    }

    pub fn limit(&self) -> usize {
        self.limit.unwrap_or(DEFAULT_LIMIT)
    }
}

/// Expand a leading `~` to the home directory
fn expand_home(path: &Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => dirs::home_dir()
            .map(|home| home.join(rest))
            .unwrap_or_else(|| path.to_path_buf()),
        Err(_) => path.to_path_buf(),
    }
}
