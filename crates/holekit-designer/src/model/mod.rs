use serde::{Deserialize, Serialize};

use crate::error::{GeometryError, Result};
use crate::geometry::Contour;
use holekit_core::Point;

mod path;
mod primitives;
mod text;

pub use path::{PathContours, PathPoint, PathShape};
pub use primitives::{EllipseShape, LineShape, PolygonShape, RectangleShape};
pub use text::TextShape;

/// A shape that can be drawn as an outline and placed by its declared box.
pub trait OutlineShape {
    /// Outline in the shape's local frame, rotation applied. Curves are
    /// flattened to within `tolerance`.
    fn outline(&self, tolerance: f64) -> Vec<Contour>;
    fn declared_width(&self) -> f64;
    /// Where the host displays the center of the shape.
    fn center(&self) -> Point;
    /// Rotation in degrees about the local origin.
    fn rotation(&self) -> f64;
    /// Reject non-finite or negative numbers before any geometry runs.
    fn validate(&self) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeType {
    Rectangle,
    Ellipse,
    Polygon,
    Line,
    Path,
    Text,
}

/// How a shape is decomposed into models.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeClass<'a> {
    /// One model for the whole outline.
    Primitive,
    /// A path with more than one point list; one model per starting list.
    MultiVertexPath(&'a PathContours),
    /// A text outline with more than one point list.
    Text(&'a PathContours),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Shape {
    Rectangle(RectangleShape),
    Ellipse(EllipseShape),
    Polygon(PolygonShape),
    Line(LineShape),
    Path(PathShape),
    Text(TextShape),
}

impl OutlineShape for Shape {
    fn outline(&self, tolerance: f64) -> Vec<Contour> {
        match self {
            Shape::Rectangle(s) => s.outline(tolerance),
            Shape::Ellipse(s) => s.outline(tolerance),
            Shape::Polygon(s) => s.outline(tolerance),
            Shape::Line(s) => s.outline(tolerance),
            Shape::Path(s) => s.outline(tolerance),
            Shape::Text(s) => s.outline(tolerance),
        }
    }

    fn declared_width(&self) -> f64 {
        match self {
            Shape::Rectangle(s) => s.declared_width(),
            Shape::Ellipse(s) => s.declared_width(),
            Shape::Polygon(s) => s.declared_width(),
            Shape::Line(s) => s.declared_width(),
            Shape::Path(s) => s.declared_width(),
            Shape::Text(s) => s.declared_width(),
        }
    }

    fn center(&self) -> Point {
        match self {
            Shape::Rectangle(s) => s.center(),
            Shape::Ellipse(s) => s.center(),
            Shape::Polygon(s) => s.center(),
            Shape::Line(s) => s.center(),
            Shape::Path(s) => s.center(),
            Shape::Text(s) => s.center(),
        }
    }

    fn rotation(&self) -> f64 {
        match self {
            Shape::Rectangle(s) => s.rotation(),
            Shape::Ellipse(s) => s.rotation(),
            Shape::Polygon(s) => s.rotation(),
            Shape::Line(s) => s.rotation(),
            Shape::Path(s) => s.rotation(),
            Shape::Text(s) => s.rotation(),
        }
    }

    fn validate(&self) -> Result<()> {
        match self {
            Shape::Rectangle(s) => s.validate(),
            Shape::Ellipse(s) => s.validate(),
            Shape::Polygon(s) => s.validate(),
            Shape::Line(s) => s.validate(),
            Shape::Path(s) => s.validate(),
            Shape::Text(s) => s.validate(),
        }
    }
}

impl Shape {
    pub fn shape_type(&self) -> ShapeType {
        match self {
            Shape::Rectangle(_) => ShapeType::Rectangle,
            Shape::Ellipse(_) => ShapeType::Ellipse,
            Shape::Polygon(_) => ShapeType::Polygon,
            Shape::Line(_) => ShapeType::Line,
            Shape::Path(_) => ShapeType::Path,
            Shape::Text(_) => ShapeType::Text,
        }
    }

    /// Classify the shape for model building. Paths and text outlines with a
    /// single point list are built like primitives.
    pub fn class(&self) -> ShapeClass<'_> {
        match self {
            Shape::Path(s) if s.contours.vertex_count() > 1 => {
                ShapeClass::MultiVertexPath(&s.contours)
            }
            Shape::Text(s) if s.font_outline.vertex_count() > 1 => {
                ShapeClass::Text(&s.font_outline)
            }
            _ => ShapeClass::Primitive,
        }
    }
}

/// Rotate a local-frame outline about the origin.
pub(crate) fn rotated(mut contours: Vec<Contour>, rotation_deg: f64) -> Vec<Contour> {
    if rotation_deg.abs() > 1e-9 {
        for contour in &mut contours {
            contour.rotate(rotation_deg);
        }
    }
    contours
}

pub(crate) fn check_placement(
    width: f64,
    height: f64,
    center: Point,
    rotation: f64,
) -> Result<()> {
    for (name, value) in [("width", width), ("height", height)] {
        if !value.is_finite() {
            return Err(GeometryError::NonFinite(name.to_string()));
        }
        if value < 0.0 {
            return Err(GeometryError::InvalidDimension {
                name: name.to_string(),
                value,
            });
        }
    }
    check_point(&center, "center")?;
    if !rotation.is_finite() {
        return Err(GeometryError::NonFinite("rotation".to_string()));
    }
    Ok(())
}

pub(crate) fn check_point(p: &Point, what: &str) -> Result<()> {
    if p.x.is_finite() && p.y.is_finite() {
        Ok(())
    } else {
        Err(GeometryError::NonFinite(what.to_string()))
    }
}
