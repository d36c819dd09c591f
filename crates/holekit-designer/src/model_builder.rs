//! Model building: one shape in, the normalized models its outline is
//! sampled from out.
//!
//! Every model is scaled up to the shape's declared width (never down),
//! centered on the origin and moved to the declared center. Multi-contour
//! paths and text outlines yield one model per point list, each built with
//! that list moved to the front and trimmed to its first contour.

use tracing::debug;

use crate::error::Result;
use crate::geometry::{Contour, GeometricModel, GeometryOptions};
use crate::model::{rotated, OutlineShape, Shape, ShapeClass};

/// Build the normalized models for one shape. The shape is not modified.
pub fn build_models(shape: &Shape, options: &GeometryOptions) -> Result<Vec<GeometricModel>> {
    shape.validate()?;
    options.validate()?;

    let models: Vec<GeometricModel> = match shape.class() {
        ShapeClass::Primitive => {
            let outline = shape.outline(options.flatten_tolerance);
            vec![normalize(outline, shape, options, false)]
        }
        ShapeClass::MultiVertexPath(contours) | ShapeClass::Text(contours) => {
            (0..contours.vertex_count())
                .map(|i| {
                    let outline = contours
                        .rotated_to(i)
                        .outline(options.flatten_tolerance);
                    normalize(rotated(outline, shape.rotation()), shape, options, true)
                })
                .collect()
        }
    };

    debug!(
        shape_type = ?shape.shape_type(),
        models = models.len(),
        "Built outline models"
    );
    Ok(models)
}

fn normalize(
    outline: Vec<Contour>,
    shape: &Shape,
    options: &GeometryOptions,
    first_only: bool,
) -> GeometricModel {
    let mut model = GeometricModel::import(outline, options.chain_tolerance);

    if let Some(extents) = model.measure_extents() {
        let measured = extents.width();
        let declared = shape.declared_width();
        if measured > f64::EPSILON && declared > measured {
            model.scale(declared / measured);
        }
    }

    model.center();
    let anchor = shape.center();
    model.translate(anchor.x, anchor.y);
    model.set_anchor(anchor);

    if first_only {
        model.retain_first();
    }
    let primary = model.contours().first().cloned();
    model.set_primary_path(primary);
    model
}
