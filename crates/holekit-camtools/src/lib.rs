//! # HoleKit CAM Tools
//!
//! Hole placement along the outlines of selected shapes.
//!
//! ## Tools Included
//!
//! - **Perimeter Holes**: Evenly spaced holes (filled circles or drill
//!   points) along each selected shape's outline, by minimum spacing or by
//!   hole count
//!
//! ## Supporting Infrastructure
//!
//! - **Error**: User-facing validation and placement errors

pub mod error;
pub mod perimeter_holes;

pub use error::{HoleToolError, HoleToolResult};
pub use perimeter_holes::{
    build_cuts, compute_defaults, properties, sample_points, validate, CutRecord, CutShape,
    CutSpec, CutType, Defaults, FieldDescription, FieldType, OutlineStyle, ParamValue,
    PerimeterHoleTool, ProjectContext, RepeatType, SpacingPlan, SpacingPolicy, ValidatedParams,
    Volume,
};
