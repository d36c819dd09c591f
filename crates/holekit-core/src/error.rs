//! Error handling for HoleKit core types
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Core error type
///
/// Raised while interpreting host supplied values that every crate shares,
/// such as unit names and bit geometry.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// A unit name was not recognised
    #[error("Unknown length unit: {0}")]
    UnknownUnit(String),

    /// Bit geometry is unusable
    #[error("Invalid bit width: {width}")]
    InvalidBitWidth {
        /// The offending width, in the bit's own unit.
        width: f64,
    },
}

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
