use serde::{Deserialize, Serialize};

use super::{check_placement, rotated, OutlineShape, PathContours};
use crate::error::Result;
use crate::geometry::Contour;
use holekit_core::Point;

/// Text placed by the host. Only its embedded glyph outline matters here;
/// the characters themselves are never laid out again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextShape {
    pub width: f64,
    pub height: f64,
    pub center: Point,
    #[serde(default)]
    pub rotation: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    pub font_outline: PathContours,
}

impl TextShape {
    pub fn new(center: Point, width: f64, height: f64, font_outline: PathContours) -> Self {
        Self {
            width,
            height,
            center,
            rotation: 0.0,
            text: None,
            font_outline,
        }
    }
}

impl OutlineShape for TextShape {
    fn outline(&self, tolerance: f64) -> Vec<Contour> {
        rotated(self.font_outline.outline(tolerance), self.rotation)
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
        self.font_outline.validate()
    }
}
