//! Application settings
//!
//! Loaded from `~/.config/rolle/config.toml` (or an explicit path). Missing
//! or unparsable files fall back to defaults with a logged warning; CLI
//! flags override file values at the binary boundary.

use std::path::{Path, PathBuf};

use rolle_core::prelude::*;
use serde::{Deserialize, Serialize};

const CONFIG_FILENAME: &str = "config.toml";

/// Global application settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub ui: UiSettings,
}

/// Which rested server to browse
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Base URL of the rested server
    pub url: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            url: "http://localhost:8080/".to_string(),
        }
    }
}

/// Terminal UI tuning
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UiSettings {
    /// Event poll timeout in milliseconds (tick rate)
    pub tick_ms: u64,

    /// Width of one panel in the horizontal strip, in columns
    pub panel_width: u16,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            tick_ms: 50,
            panel_width: 42,
        }
    }
}

/// Default config file location: `<config dir>/rolle/config.toml`.
pub fn default_config_path() -> PathBuf {
    let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("rolle").join(CONFIG_FILENAME)
}

/// Load settings from the given path, or the default location.
///
/// Never fails: a missing file is the normal first-run case, and a broken
/// file is logged and ignored.
pub fn load_settings(path: Option<&Path>) -> Settings {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    match std::fs::read_to_string(&path) {
        Ok(text) => match toml::from_str(&text) {
            Ok(settings) => {
                info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                warn!("Ignoring broken config {}: {}", path.display(), e);
                Settings::default()
            }
        },
        Err(_) => Settings::default(),
    }
}
