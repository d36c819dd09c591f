use holekit_designer::{build_hole_pattern, Point};
use serde::{Deserialize, Serialize};

/// Geometry of one produced hole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum CutShape {
    /// A filled circle of the hole diameter
    Ellipse {
        center: Point,
        width: f64,
        height: f64,
        rotation: f64,
    },
    /// A drill point marker sized to the bit
    Drill {
        center: Point,
        width: f64,
        height: f64,
    },
}

impl CutShape {
    pub fn center(&self) -> Point {
        match self {
            Self::Ellipse { center, .. } | Self::Drill { center, .. } => *center,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CutType {
    Fill,
    Drill,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutlineStyle {
    #[serde(rename = "on-path")]
    OnPath,
}

/// How one hole is cut.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CutSpec {
    pub depth: f64,
    #[serde(rename = "type")]
    pub cut_type: CutType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outline_style: Option<OutlineStyle>,
    pub tab_preference: bool,
}

/// One output hole for the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CutRecord {
    pub shape: CutShape,
    pub cut: CutSpec,
}

/// Turn sample points into cut records, one per point, in point order.
///
/// Fill holes take the hole diameter; drill points take the bit width.
pub fn build_cuts(
    points: &[Point],
    hole_size: f64,
    bit_width: f64,
    depth: f64,
    use_drill_points: bool,
) -> Vec<CutRecord> {
    let pattern = build_hole_pattern(hole_size, points);
    pattern
        .holes
        .iter()
        .map(|hole| {
            if use_drill_points {
                CutRecord {
                    shape: CutShape::Drill {
                        center: hole.origin,
                        width: bit_width,
                        height: bit_width,
                    },
                    cut: CutSpec {
                        depth,
                        cut_type: CutType::Drill,
                        outline_style: Some(OutlineStyle::OnPath),
                        tab_preference: false,
                    },
                }
            } else {
                CutRecord {
                    shape: CutShape::Ellipse {
                        center: hole.origin,
                        width: hole.diameter(),
                        height: hole.diameter(),
                        rotation: 0.0,
                    },
                    cut: CutSpec {
                        depth,
                        cut_type: CutType::Fill,
                        outline_style: None,
                        tab_preference: false,
                    },
                }
            }
        })
        .collect()
}
