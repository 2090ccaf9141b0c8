//! Locating and reading the configuration file.

use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use super::Config;

/// Directory name under the platform config root.
const APP_DIR: &str = "console_canvas";

/// Directory holding `config.toml`.
///
/// `%APPDATA%` on Windows; elsewhere `$XDG_CONFIG_HOME`, then
/// `$HOME/.config`. Falls back to a relative directory when none is set.
pub fn config_dir() -> PathBuf {
    config_root().map_or_else(|| PathBuf::from(APP_DIR), |root| root.join(APP_DIR))
}

/// Path of the default config file.
pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}

#[cfg(windows)]
fn config_root() -> Option<PathBuf> {
    std::env::var_os("APPDATA").map(PathBuf::from)
}

#[cfg(not(windows))]
fn config_root() -> Option<PathBuf> {
    std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))
}

impl Config {
    /// Config from the default path.
    ///
    /// A missing file yields the defaults silently; an unreadable or
    /// malformed one yields the defaults with a warning.
    pub fn load() -> Self {
        let path = config_path();
        if !path.is_file() {
            debug!("config: no file at {}, using defaults", path.display());
            return Self::default();
        }
        match Self::try_load_from(&path) {
            Ok(config) => {
                info!("config: loaded from {}", path.display());
                config
            }
            Err(e) => {
                warn!("config: {e}; using defaults");
                Self::default()
            }
        }
    }

    /// Config from `path`. A missing, unreadable, or malformed file is an
    /// error, described in the returned message.
    pub fn try_load_from(path: &Path) -> Result<Self, String> {
        let data = std::fs::read_to_string(path)
            .map_err(|e| format!("failed to read {}: {e}", path.display()))?;
        toml::from_str(&data).map_err(|e| format!("parse error in {}: {e}", path.display()))
    }
}
