//! Plain data shared across the HoleKit crates.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};
use crate::units::LengthUnit;

/// A 2D point, in inches unless stated otherwise
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Point at fraction `t` of the way from `self` to `other`
    pub fn lerp(&self, other: &Point, t: f64) -> Point {
        Point::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }
}

/// Active cutting bit geometry as reported by the host
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bit {
    /// Cutting diameter, in `unit`
    pub width: f64,
    #[serde(default)]
    pub unit: LengthUnit,
}

impl Bit {
    pub fn new(width: f64, unit: LengthUnit) -> Self {
        Self { width, unit }
    }

    /// Bit diameter normalized to inches.
    ///
    /// Fails when the host reports a negative or non-finite width.
    pub fn width_in_inches(&self) -> Result<f64> {
        if !self.width.is_finite() || self.width < 0.0 {
            return Err(CoreError::InvalidBitWidth { width: self.width });
        }
        Ok(self.unit.to_inches(self.width))
    }
}

/// Bit parameters block of a project context
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BitParams {
    pub bit: Bit,
}
