use holekit_designer::geometry::division_count;

use super::params::SpacingPolicy;

/// How many holes a chain gets and how far apart they sit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpacingPlan {
    pub divisions: usize,
    pub spacing: f64,
}

impl SpacingPlan {
    pub const EMPTY: SpacingPlan = SpacingPlan {
        divisions: 0,
        spacing: 0.0,
    };

    /// Plan for a closed chain of `length`.
    ///
    /// Minimum spacing stretches to `length / floor(length / s)` so the
    /// holes divide the loop evenly; a hole count divides it `n` ways.
    /// Holes closer together than `min_step` are not placed at all.
    pub fn for_chain(length: f64, policy: SpacingPolicy, min_step: f64) -> Self {
        if !length.is_finite() || length <= 0.0 {
            return Self::EMPTY;
        }
        let divisions = match policy {
            SpacingPolicy::MinimumSpacing(minimum) => division_count(length, minimum),
            SpacingPolicy::HoleCount(count) => count,
        };
        let spacing = length / divisions as f64;
        if divisions == 0 || spacing < min_step {
            return Self::EMPTY;
        }
        Self { divisions, spacing }
    }

    /// Number of points to place along an open path of `length`. Both ends
    /// get a point, so `n` points sit `length / (n - 1)` apart; none are
    /// placed when that falls below `min_step`.
    pub fn path_divisions(length: f64, policy: SpacingPolicy, min_step: f64) -> usize {
        let count = match policy {
            SpacingPolicy::MinimumSpacing(minimum) => division_count(length, minimum),
            SpacingPolicy::HoleCount(count) => count,
        };
        if count > 1 && length / ((count - 1) as f64) < min_step {
            return 0;
        }
        count
    }

    pub fn is_empty(&self) -> bool {
        self.divisions == 0
    }
}
