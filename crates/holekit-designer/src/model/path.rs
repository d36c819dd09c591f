use serde::{Deserialize, Serialize};

use super::{check_placement, check_point, rotated, OutlineShape};
use crate::error::Result;
use crate::geometry::{Contour, OutlineBuilder};
use holekit_core::Point;

/// One point of a path, with optional Bézier handles in absolute coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathPoint {
    pub x: f64,
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handle_in: Option<Point>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handle_out: Option<Point>,
}

impl PathPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            handle_in: None,
            handle_out: None,
        }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

impl From<Point> for PathPoint {
    fn from(p: Point) -> Self {
        Self::new(p.x, p.y)
    }
}

/// The point lists ("vertices") of a path or a text outline.
///
/// Each entry is one sub-path. `closed` closes every sub-path; a sub-path
/// whose last point lands on its first is treated as closed regardless.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathContours {
    pub points: Vec<Vec<PathPoint>>,
    #[serde(default)]
    pub closed: bool,
}

impl PathContours {
    pub fn new(points: Vec<Vec<PathPoint>>, closed: bool) -> Self {
        Self { points, closed }
    }

    /// Build from plain point lists without handles.
    pub fn from_polylines(lists: Vec<Vec<Point>>, closed: bool) -> Self {
        Self {
            points: lists
                .into_iter()
                .map(|list| list.into_iter().map(PathPoint::from).collect())
                .collect(),
            closed,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.points.len()
    }

    /// Copy with the point list at `index` moved to the front; the others
    /// keep their relative order.
    pub fn rotated_to(&self, index: usize) -> Self {
        let mut points = self.points.clone();
        if index < points.len() {
            let vertex = points.remove(index);
            points.insert(0, vertex);
        }
        Self {
            points,
            closed: self.closed,
        }
    }

    /// Outline in the local frame, one contour per point list.
    pub fn outline(&self, tolerance: f64) -> Vec<Contour> {
        let mut builder = OutlineBuilder::new(tolerance);
        for list in &self.points {
            let Some((first, rest)) = list.split_first() else {
                continue;
            };
            builder.begin(first.position());
            let mut prev = first;
            for p in rest {
                segment_to(&mut builder, prev, p);
                prev = p;
            }
            let curved_close = prev.handle_out.is_some() || first.handle_in.is_some();
            if self.closed && list.len() > 1 && curved_close {
                segment_to(&mut builder, prev, first);
            }
            builder.end(self.closed);
        }
        builder.build()
    }

    pub fn validate(&self) -> Result<()> {
        for p in self.points.iter().flatten() {
            check_point(&p.position(), "path point")?;
            if let Some(h) = &p.handle_in {
                check_point(h, "path handle")?;
            }
            if let Some(h) = &p.handle_out {
                check_point(h, "path handle")?;
            }
        }
        Ok(())
    }
}

fn segment_to(builder: &mut OutlineBuilder, from: &PathPoint, to: &PathPoint) {
    match (from.handle_out, to.handle_in) {
        (None, None) => builder.line_to(to.position()),
        (out, inn) => {
            let ctrl1 = out.unwrap_or_else(|| from.position());
            let ctrl2 = inn.unwrap_or_else(|| to.position());
            builder.cubic_bezier_to(ctrl1, ctrl2, to.position());
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathShape {
    pub width: f64,
    pub height: f64,
    pub center: Point,
    #[serde(default)]
    pub rotation: f64,
    #[serde(flatten)]
    pub contours: PathContours,
}

impl PathShape {
    pub fn new(center: Point, width: f64, height: f64, contours: PathContours) -> Self {
        Self {
            width,
            height,
            center,
            rotation: 0.0,
            contours,
        }
    }
}

impl OutlineShape for PathShape {
    fn outline(&self, tolerance: f64) -> Vec<Contour> {
        rotated(self.contours.outline(tolerance), self.rotation)
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
        self.contours.validate()
    }
}
