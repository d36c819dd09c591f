//! # HoleKit Designer
//!
//! Shape descriptions and the outline geometry built from them.
//!
//! ## Core Components
//!
//! - **Model**: Host shape descriptions (rectangles, ellipses, polygons,
//!   lines, multi-contour paths and text outlines)
//! - **Geometry**: Flattened contours, normalized models, closed chains,
//!   arc-length sampling and hole patterns
//! - **Model Builder**: Turns one shape into the models its outline is
//!   sampled from, one per starting contour for multi-contour shapes
//!
//! ## Architecture
//!
//! ```text
//! Shape (host description)
//!   └── outline() -> f64 contours (curves flattened with lyon::geom)
//!         └── GeometricModel (scaled/centered/placed)
//!               ├── Chain (closed loop, arc-length sampling)
//!               └── primary path (open fallback)
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use holekit_designer::{build_models, find_single_chain, GeometryOptions};
//!
//! let options = GeometryOptions::default();
//! for model in build_models(&shape, &options)? {
//!     if let Some(chain) = find_single_chain(&model, options.chain_tolerance) {
//!         let points = chain.sample_points(0.5);
//!     }
//! }
//! ```

pub mod error;
pub mod geometry;
pub mod model;
pub mod model_builder;

pub use error::{GeometryError, Result};
pub use geometry::{
    build_hole_pattern, find_single_chain, sample_path_points, Chain, Contour, Extents,
    GeometricModel, GeometryOptions, HoleCircle, HolePattern, OutlineBuilder,
};
pub use model::{
    EllipseShape, LineShape, OutlineShape, PathContours, PathPoint, PathShape, PolygonShape,
    RectangleShape, Shape, ShapeClass, ShapeType, TextShape,
};
pub use model_builder::build_models;

pub use holekit_core::Point;
