//! Configuration for HoleKit
//!
//! Provides configuration file handling and validation. Supports JSON and
//! TOML files, chosen by extension, stored in the platform config directory
//! by default.
//!
//! Configuration is organized into sections:
//! - Geometry tolerances (curve flattening, endpoint coincidence)
//! - Output formatting

use holekit_designer::GeometryOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::{SettingsError, SettingsResult};

/// File name looked up inside the platform config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

const APP_DIR: &str = "holekit";

/// Geometry tolerances, in inches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeometrySettings {
    /// Maximum deviation between a curve and its flattened polyline
    pub flatten_tolerance: f64,
    /// Endpoint distance under which sub-paths close and open contours link
    pub chain_tolerance: f64,
}

impl Default for GeometrySettings {
    fn default() -> Self {
        let options = GeometryOptions::default();
        Self {
            flatten_tolerance: options.flatten_tolerance,
            chain_tolerance: options.chain_tolerance,
        }
    }
}

impl From<GeometrySettings> for GeometryOptions {
    fn from(settings: GeometrySettings) -> Self {
        Self {
            flatten_tolerance: settings.flatten_tolerance,
            chain_tolerance: settings.chain_tolerance,
        }
    }
}

/// Output formatting settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Pretty-print JSON output
    pub pretty: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self { pretty: true }
    }
}

/// Complete tool configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub geometry: GeometrySettings,
    pub output: OutputSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Default config location: `<config dir>/holekit/config.toml`.
    pub fn default_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR).join(CONFIG_FILE_NAME))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no config directory on this platform".to_string())
            })
    }

    /// Load `path` when given, else the default location when a file exists
    /// there, else the defaults.
    pub fn load_or_default(path: Option<&Path>) -> SettingsResult<Self> {
        if let Some(path) = path {
            return Self::load_from_file(path);
        }
        match Self::default_path() {
            Ok(default) if default.is_file() => Self::load_from_file(&default),
            _ => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)?;

        let config: Self = match Format::from_path(path)? {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match Format::from_path(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        debug!(path = %path.display(), "Saved configuration");
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        for (key, value) in [
            ("geometry.flatten_tolerance", self.geometry.flatten_tolerance),
            ("geometry.chain_tolerance", self.geometry.chain_tolerance),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(SettingsError::InvalidSetting {
                    key: key.to_string(),
                    reason: format!("must be a positive length, got {value}"),
                });
            }
        }
        Ok(())
    }

    pub fn geometry_options(&self) -> GeometryOptions {
        self.geometry.into()
    }
}

enum Format {
    Json,
    Toml,
}

impl Format {
    fn from_path(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(SettingsError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}
