//! Outline geometry: flattened contours, normalized models, closed chains,
//! arc-length sampling and hole patterns.
//!
//! Shapes are built straight into f64 contours. Straight edges keep their
//! source coordinates and only curves are flattened, through `lyon::geom`,
//! so a side of 4.1 measures 4.1 and lengths that divide evenly stay exact.

mod chain;
mod contour;
mod holes;
mod model;
mod outline;

pub use chain::{find_single_chain, Chain};
pub use contour::{sample_path_points, Contour, Extents};
pub use holes::{build_hole_pattern, HoleCircle, HolePattern};
pub use model::GeometricModel;
pub use outline::OutlineBuilder;

use serde::{Deserialize, Serialize};

use crate::error::{GeometryError, Result};

/// Slack added to a length/step ratio before flooring, so a length that is
/// an exact multiple of the step up to float noise keeps its last division.
pub const DIVISION_EPSILON: f64 = 1e-9;

/// Number of whole `step`s that fit in `length`.
///
/// Zero for non-positive or non-finite inputs, never a fault.
pub fn division_count(length: f64, step: f64) -> usize {
    if !(length.is_finite() && step.is_finite()) || length <= 0.0 || step <= 0.0 {
        return 0;
    }
    (length / step + DIVISION_EPSILON).floor() as usize
}

/// Tolerances used while importing and chaining outlines, in inches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeometryOptions {
    /// Maximum deviation between a curve and its flattened polyline
    pub flatten_tolerance: f64,
    /// Distance under which two endpoints count as the same point
    pub chain_tolerance: f64,
}

impl Default for GeometryOptions {
    fn default() -> Self {
        Self {
            flatten_tolerance: 0.001,
            chain_tolerance: 0.0001,
        }
    }
}

impl GeometryOptions {
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("flatten_tolerance", self.flatten_tolerance),
            ("chain_tolerance", self.chain_tolerance),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(GeometryError::InvalidTolerance {
                    name: name.to_string(),
                    value,
                });
            }
        }
        Ok(())
    }
}
