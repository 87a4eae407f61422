//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/zootree/zootree.toml`
//! 3. Environment variables: `ZOOTREE_*` prefix

use std::path::PathBuf;

use config::{Config, ConfigError, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error loading or serializing settings.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("config error: {0}")]
    Load(#[from] ConfigError),

    #[error("config error: serialize: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Display settings for the zootree CLI.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Spaces per nesting level in the `show` listing
    pub indent_width: usize,
    /// Include animal ages in listings
    pub show_ages: bool,
    /// Use plain ASCII glyphs in the `tree` view
    pub ascii: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            indent_width: 2,
            show_ages: true,
            ascii: false,
        }
    }
}

/// Get the XDG config directory for zootree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "zootree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("zootree.toml"))
}

impl Settings {
    /// Load settings with layered precedence: defaults, then the global
    /// config file if present, then `ZOOTREE_*` environment variables.
    pub fn load() -> Result<Self, SettingsError> {
        let defaults = Settings::default();
        let mut builder = Config::builder()
            .set_default("indent_width", defaults.indent_width as i64)?
            .set_default("show_ages", defaults.show_ages)?
            .set_default("ascii", defaults.ascii)?;

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                builder = builder.add_source(File::from(global_path).required(false));
            }
        }

        builder = builder.add_source(Environment::with_prefix("ZOOTREE").try_parsing(true));

        let config = builder.build()?;
        Ok(config.try_deserialize()?)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, SettingsError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
