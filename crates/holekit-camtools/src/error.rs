//! Error types for the CAM tools crate.
//!
//! The `Display` text of each variant is the message shown to the user.

use holekit_core::CoreError;
use holekit_designer::GeometryError;
use thiserror::Error;

/// Errors that end a tool run.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HoleToolError {
    /// A numeric field did not parse or was negative.
    #[error("{field} is not valid")]
    InvalidNumber { field: String },

    /// Hole size, in inches, is below the bit width.
    #[error("Hole Size is too small for current bit")]
    HoleTooSmall { hole_size: f64, bit_width: f64 },

    /// Spacing did not parse, was negative, or is below the bit width.
    #[error("Spacing is not valid")]
    SpacingTooSmall,

    /// Hole count did not parse as a non-negative integer.
    #[error("Number of holes is not valid")]
    InvalidHoleCount,

    /// Every selected shape sampled to zero points.
    #[error("No hole positions found on the selected shapes")]
    NoPointsFound,

    /// The host context itself is unusable (bad bit width or unit).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Geometry options are unusable.
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

impl HoleToolError {
    pub(crate) fn invalid_number(field: &str) -> Self {
        Self::InvalidNumber {
            field: field.to_string(),
        }
    }
}

/// Result type alias for tool runs.
pub type HoleToolResult<T> = Result<T, HoleToolError>;
