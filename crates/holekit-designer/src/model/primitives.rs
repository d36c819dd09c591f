use serde::{Deserialize, Serialize};

use super::{check_placement, check_point, rotated, OutlineShape};
use crate::error::Result;
use crate::geometry::{Contour, OutlineBuilder};
use holekit_core::Point;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RectangleShape {
    pub width: f64,
    pub height: f64,
    pub center: Point,
    #[serde(default)]
    pub rotation: f64,
}

impl RectangleShape {
    pub fn new(center: Point, width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            center,
            rotation: 0.0,
        }
    }
}

impl OutlineShape for RectangleShape {
    fn outline(&self, tolerance: f64) -> Vec<Contour> {
        let (hw, hh) = (self.width / 2.0, self.height / 2.0);
        let mut builder = OutlineBuilder::new(tolerance);
        builder.add_rectangle(Point::new(-hw, -hh), Point::new(hw, hh));
        rotated(builder.build(), self.rotation)
    }

    fn declared_width(&self) -> f64 {
        self.width
    }

    fn center(&self) -> Point {
        self.center
    }

    fn rotation(&self) -> f64 {
        self.rotation
    }

    fn validate(&self) -> Result<()> {
        check_placement(self.width, self.height, self.center, self.rotation)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EllipseShape {
    pub width: f64,
    pub height: f64,
    pub center: Point,
    #[serde(default)]
    pub rotation: f64,
}

impl EllipseShape {
    pub fn new(center: Point, width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            center,
            rotation: 0.0,
        }
    }
}

impl OutlineShape for EllipseShape {
    fn outline(&self, tolerance: f64) -> Vec<Contour> {
        let mut builder = OutlineBuilder::new(tolerance);
        builder.add_ellipse(Point::new(0.0, 0.0), self.width / 2.0, self.height / 2.0);
        rotated(builder.build(), self.rotation)
    }

    fn declared_width(&self) -> f64 {
        self.width
    }

    fn center(&self) -> Point {
        self.center
    }

    fn rotation(&self) -> f64 {
        self.rotation
    }

    fn validate(&self) -> Result<()> {
        check_placement(self.width, self.height, self.center, self.rotation)
    }
}

/// Closed outline through a single list of points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolygonShape {
    pub width: f64,
    pub height: f64,
    pub center: Point,
    #[serde(default)]
    pub rotation: f64,
    pub points: Vec<Point>,
}

impl PolygonShape {
    pub fn new(center: Point, width: f64, height: f64, points: Vec<Point>) -> Self {
        Self {
            width,
            height,
            center,
            rotation: 0.0,
            points,
        }
    }
}

impl OutlineShape for PolygonShape {
    fn outline(&self, _tolerance: f64) -> Vec<Contour> {
        rotated(polyline(&self.points, true), self.rotation)
    }

    fn declared_width(&self) -> f64 {
        self.width
    }

    fn center(&self) -> Point {
        self.center
    }

    fn rotation(&self) -> f64 {
        self.rotation
    }

    fn validate(&self) -> Result<()> {
        check_placement(self.width, self.height, self.center, self.rotation)?;
        self.points
            .iter()
            .try_for_each(|p| check_point(p, "polygon point"))
    }
}

/// Open segment list. Never closes, so it always samples through the
/// primary-path fallback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineShape {
    pub width: f64,
    pub height: f64,
    pub center: Point,
    #[serde(default)]
    pub rotation: f64,
    pub points: Vec<Point>,
}

impl LineShape {
    pub fn new(center: Point, start: Point, end: Point) -> Self {
        Self {
            width: (end.x - start.x).abs(),
            height: (end.y - start.y).abs(),
            center,
            rotation: 0.0,
            points: vec![start, end],
        }
    }
}

impl OutlineShape for LineShape {
    fn outline(&self, _tolerance: f64) -> Vec<Contour> {
        rotated(polyline(&self.points, false), self.rotation)
    }

    fn declared_width(&self) -> f64 {
        self.width
    }

    fn center(&self) -> Point {
        self.center
    }

    fn rotation(&self) -> f64 {
        self.rotation
    }

    fn validate(&self) -> Result<()> {
        check_placement(self.width, self.height, self.center, self.rotation)?;
        self.points
            .iter()
            .try_for_each(|p| check_point(p, "line point"))
    }
}

fn polyline(points: &[Point], close: bool) -> Vec<Contour> {
    if points.is_empty() {
        return Vec::new();
    }
    vec![Contour::new(points.to_vec(), close)]
}
