use super::contour::Contour;
use super::model::GeometricModel;
use super::division_count;
use holekit_core::Point;

/// A closed loop of connected segments with its measured length.
#[derive(Debug, Clone, PartialEq)]
pub struct Chain {
    contour: Contour,
    length: f64,
}

impl Chain {
    fn new(contour: Contour) -> Self {
        let length = contour.length();
        Self { contour, length }
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn contour(&self) -> &Contour {
        &self.contour
    }

    /// Points every `spacing` along the loop, the first at the chain start.
    ///
    /// The start is not repeated at the end, so a spacing of `L / n` gives
    /// exactly `n` points.
    pub fn sample_points(&self, spacing: f64) -> Vec<Point> {
        let count = division_count(self.length, spacing);
        self.contour
            .points_at_distances((0..count).map(|k| k as f64 * spacing))
    }
}

/// Find the single closed chain of a model.
///
/// A closed contour wins outright. Otherwise open contours are linked end to
/// end, reversing where needed, until the loop closes within `tolerance`.
/// Returns `None` when nothing closes or the loop has no length.
pub fn find_single_chain(model: &GeometricModel, tolerance: f64) -> Option<Chain> {
    if let Some(closed) = model
        .contours()
        .iter()
        .find(|c| c.is_closed() && c.len() > 1 && c.length() > tolerance)
    {
        return Some(Chain::new(closed.clone()));
    }

    let open: Vec<&Contour> = model
        .contours()
        .iter()
        .filter(|c| !c.is_closed() && c.len() > 1)
        .collect();

    (0..open.len()).find_map(|start| link_from(&open, start, tolerance))
}

fn link_from(open: &[&Contour], start: usize, tolerance: f64) -> Option<Chain> {
    let mut used = vec![false; open.len()];
    used[start] = true;
    let mut points = open[start].points().to_vec();

    loop {
        let head = points[0];
        let tail = points[points.len() - 1];
        if points.len() > 2 && head.distance_to(&tail) <= tolerance {
            points.pop();
            let chain = Chain::new(Contour::new(points, true));
            return (chain.length() > tolerance).then_some(chain);
        }

        let next = open.iter().enumerate().find_map(|(i, c)| {
            if used[i] {
                return None;
            }
            let (s, e) = (c.start()?, c.end()?);
            if s.distance_to(&tail) <= tolerance {
                Some((i, false))
            } else if e.distance_to(&tail) <= tolerance {
                Some((i, true))
            } else {
                None
            }
        });

        let (i, reverse) = next?;
        used[i] = true;
        let segment = if reverse {
            open[i].reversed()
        } else {
            open[i].clone()
        };
        points.extend_from_slice(&segment.points()[1..]);
    }
}
