use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::storage::config_dir;
use crate::tier::Breakpoints;

/// Persistence keys used by the layout controllers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreferenceKeys {
    /// Sidebar lock: absent, `"true"` or `"false"`.
    pub sidebar: String,
    /// Comma-joined `block`/`none` display of each menu section.
    pub menus: String,
}

impl Default for PreferenceKeys {
    fn default() -> Self {
        Self {
            sidebar: String::from("sidebar"),
            menus: String::from("sidebar menus"),
        }
    }
}

/// Layout configuration shared by every component of one page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub breakpoints: Breakpoints,
    pub keys: PreferenceKeys,
}

/// Status describing how the configuration was loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigLoadStatus {
    Loaded,
    Missing,
    Invalid(String),
}

/// Result of loading the configuration from disk.
#[derive(Debug, Clone)]
pub struct ConfigLoad {
    config: LayoutConfig,
    status: ConfigLoadStatus,
}

impl ConfigLoad {
    pub fn new(config: LayoutConfig, status: ConfigLoadStatus) -> Self {
        Self { config, status }
    }

    pub fn status(&self) -> &ConfigLoadStatus {
        &self.status
    }

    /// Consume the value and return both payload and status.
    pub fn into_parts(self) -> (LayoutConfig, ConfigLoadStatus) {
        (self.config, self.status)
    }
}

/// Load the configuration from its default location.
pub fn load_config() -> Result<ConfigLoad, ConfigError> {
    load_config_from_path(&config_path())
}

/// Load the configuration at `path`.
///
/// Missing files and unusable payloads fall back to
/// [`LayoutConfig::default`]; only IO failures are returned as errors.
pub fn load_config_from_path(path: &Path) -> Result<ConfigLoad, ConfigError> {
    let data = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(ConfigLoad::new(
                LayoutConfig::default(),
                ConfigLoadStatus::Missing,
            ));
        },
        Err(err) => return Err(err.into()),
    };

    let config = match serde_json::from_str::<LayoutConfig>(&data) {
        Ok(config) => config,
        Err(err) => {
            return Ok(ConfigLoad::new(
                LayoutConfig::default(),
                ConfigLoadStatus::Invalid(format!("{err}")),
            ));
        },
    };

    if let Err(err) = config.breakpoints.validate() {
        return Ok(ConfigLoad::new(
            LayoutConfig::default(),
            ConfigLoadStatus::Invalid(format!("{err}")),
        ));
    }

    Ok(ConfigLoad::new(config, ConfigLoadStatus::Loaded))
}

/// Default location: `$HOME/.config/gutter/layout.json`.
pub fn config_path() -> PathBuf {
    config_dir().join("layout.json")
}
