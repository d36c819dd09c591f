//! Perimeter Holes
//!
//! Places evenly spaced holes along the outline of every selected shape.
//!
//! A run validates the submitted form, then for each selected shape builds
//! its outline models, samples each model (closed chain, or primary path
//! when none closes) and turns every sample point into a cut record. The
//! records of all shapes are concatenated in selection order.

mod context;
mod cuts;
mod params;
mod sampler;
mod spacing;

pub use context::{ParamValue, ProjectContext, Volume};
pub use cuts::{build_cuts, CutRecord, CutShape, CutSpec, CutType, OutlineStyle};
pub use params::{
    compute_defaults, properties, validate, Defaults, FieldDescription, FieldType, RepeatType,
    SpacingPolicy, ValidatedParams, DEFAULT_DEPTH, DEFAULT_HOLE_COUNT, DEPTH, HOLE_SIZE, MAX_HOLE_COUNT,
    NUMBER_OF_HOLES, REPEAT_TYPE, SPACING, USE_DRILL_POINTS,
};
pub use sampler::sample_points;
pub use spacing::SpacingPlan;

use holekit_designer::{build_models, GeometryOptions, Point, Shape};
use tracing::{debug, info, warn};

use crate::error::{HoleToolError, HoleToolResult};

/// The perimeter holes tool.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PerimeterHoleTool {
    options: GeometryOptions,
}

impl PerimeterHoleTool {
    /// Create a tool with the given geometry tolerances
    pub fn new(options: GeometryOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &GeometryOptions {
        &self.options
    }

    /// Form description for the context's bit and preferred unit.
    pub fn properties(&self, context: &ProjectContext) -> HoleToolResult<Vec<FieldDescription>> {
        properties(&context.bit_params.bit, context.preferred_unit)
    }

    /// Run the tool once.
    ///
    /// Validation errors end the run. A shape that cannot be sampled only
    /// contributes no holes; the run fails with `NoPointsFound` when no shape
    /// contributes any.
    pub fn execute(&self, context: &ProjectContext) -> HoleToolResult<Vec<CutRecord>> {
        let bit_width = context.bit_params.bit.width_in_inches()?;
        let params = validate(&context.params, bit_width, context.preferred_unit)?;
        self.options.validate()?;

        let mut records = Vec::new();
        let mut shapes = 0usize;
        for volume in context.selected_volumes() {
            shapes += 1;
            let points = self.shape_points(&volume.shape, params.policy);
            debug!(id = %volume.id, points = points.len(), "Sampled shape");
            records.extend(build_cuts(
                &points,
                params.hole_size,
                params.bit_width,
                params.depth,
                params.use_drill_points,
            ));
        }

        if records.is_empty() {
            return Err(HoleToolError::NoPointsFound);
        }

        info!(
            shapes,
            holes = records.len(),
            repeat = params.policy.repeat_type().label(),
            "Placed perimeter holes"
        );
        Ok(records)
    }

    /// All sample points of one shape, its models' points concatenated.
    pub fn shape_points(&self, shape: &Shape, policy: SpacingPolicy) -> Vec<Point> {
        let models = match build_models(shape, &self.options) {
            Ok(models) => models,
            Err(e) => {
                warn!(error = %e, "Skipping shape");
                return Vec::new();
            }
        };
        models
            .iter()
            .flat_map(|model| sample_points(model, policy, &self.options))
            .collect()
    }
}
