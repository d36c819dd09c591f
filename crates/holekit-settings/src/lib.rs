//! HoleKit Settings Crate
//!
//! Loads, validates and saves the tool configuration.

pub mod config;
pub mod error;

pub use config::{Config, GeometrySettings, OutputSettings, CONFIG_FILE_NAME};
pub use error::{SettingsError, SettingsResult};
