//! Hole pattern generation.
//!
//! Turns a list of sample points into circles of one diameter, in point
//! order. Coincident points are kept.

use holekit_core::Point;

/// A circular hole: origin and radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoleCircle {
    pub origin: Point,
    pub radius: f64,
}

impl HoleCircle {
    pub fn new(origin: Point, radius: f64) -> Self {
        Self { origin, radius }
    }

    pub fn diameter(&self) -> f64 {
        self.radius * 2.0
    }
}

/// Represents a set of equal holes.
#[derive(Debug, Clone, PartialEq)]
pub struct HolePattern {
    pub diameter: f64,
    pub holes: Vec<HoleCircle>,
}

impl HolePattern {
    /// Creates an empty pattern of holes of `diameter`.
    pub fn new(diameter: f64) -> Self {
        Self {
            diameter,
            holes: Vec::new(),
        }
    }

    /// Adds a hole centered on `point`.
    pub fn add_hole(&mut self, point: Point) {
        self.holes.push(HoleCircle::new(point, self.diameter / 2.0));
    }

    /// Adds one hole per point.
    pub fn add_holes(&mut self, points: &[Point]) {
        for p in points {
            self.add_hole(*p);
        }
    }

    /// Gets the total number of holes.
    pub fn hole_count(&self) -> usize {
        self.holes.len()
    }
}

/// Build a pattern of `diameter` holes centered on `points`.
pub fn build_hole_pattern(diameter: f64, points: &[Point]) -> HolePattern {
    let mut pattern = HolePattern::new(diameter);
    pattern.add_holes(points);
    pattern
}
