//! Error types for the designer crate.
//!
//! Shape descriptions come straight from the host, so most failures here are
//! malformed numbers rather than geometric impossibilities.

use thiserror::Error;

/// Errors raised while importing or normalizing shape geometry.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// A coordinate or dimension is NaN or infinite.
    #[error("Non-finite value in {0}")]
    NonFinite(String),

    /// A declared dimension is negative.
    #[error("Invalid dimension '{name}': {value}")]
    InvalidDimension { name: String, value: f64 },

    /// A tolerance is zero, negative or non-finite.
    #[error("Invalid tolerance '{name}': {value}")]
    InvalidTolerance { name: String, value: f64 },
}

/// Result type alias for geometry operations.
pub type Result<T> = std::result::Result<T, GeometryError>;
