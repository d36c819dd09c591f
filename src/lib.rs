//! # HoleKit
//!
//! Evenly spaced hole placement along the outlines of 2D shapes, for CNC
//! toolpath generators.
//!
//! ## Architecture
//!
//! HoleKit is organized as a workspace with multiple crates:
//!
//! 1. **holekit-core** - Length units, form number parsing, bit geometry
//! 2. **holekit-designer** - Shape descriptions, outline models, chains and sampling
//! 3. **holekit-settings** - Configuration loading and validation
//! 4. **holekit-camtools** - The perimeter holes tool: validation, spacing, cut records
//! 5. **holekit** - Command-line host that reads a project context and prints JSON

pub mod host;

pub use holekit_camtools as camtools;
pub use holekit_designer as designer;

pub use holekit_camtools::{
    CutRecord, FieldDescription, HoleToolError, PerimeterHoleTool, ProjectContext,
};
pub use holekit_core::{LengthUnit, Point};
pub use holekit_settings::{Config, SettingsError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - stderr output, leaving stdout to the JSON results
/// - RUST_LOG environment variable support, INFO by default
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(tracing::Level::INFO.to_string()));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
