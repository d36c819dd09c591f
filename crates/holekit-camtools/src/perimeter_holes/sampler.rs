use holekit_designer::{
    find_single_chain, sample_path_points, GeometricModel, GeometryOptions, Point,
};
use tracing::{debug, warn};

use super::params::SpacingPolicy;
use super::spacing::SpacingPlan;

/// Hole positions along one model.
///
/// A closed chain is sampled at even arc-length steps from its start. With
/// no chain the model's primary path, recentered on the model's anchor, is
/// sampled instead.
pub fn sample_points(
    model: &GeometricModel,
    policy: SpacingPolicy,
    options: &GeometryOptions,
) -> Vec<Point> {
    if let Some(chain) = find_single_chain(model, options.chain_tolerance) {
        let plan = SpacingPlan::for_chain(chain.length(), policy, options.chain_tolerance);
        debug!(
            length = chain.length(),
            divisions = plan.divisions,
            spacing = plan.spacing,
            "Sampling closed chain"
        );
        if plan.is_empty() {
            return Vec::new();
        }
        return chain.sample_points(plan.spacing);
    }

    let Some(primary) = model.primary_path() else {
        warn!("Model has no outline to sample");
        return Vec::new();
    };
    let path = primary.recentered(model.anchor());
    let divisions = SpacingPlan::path_divisions(path.length(), policy, options.chain_tolerance);
    debug!(
        length = path.length(),
        divisions, "No closed chain, sampling primary path"
    );
    sample_path_points(&path, divisions)
}
