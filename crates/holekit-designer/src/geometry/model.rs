use super::contour::{Contour, Extents};
use holekit_core::Point;

/// The normalized outline of one shape instance.
///
/// Holds the flattened contours, the declared center the model was placed
/// at, and the primary path the sampler falls back to when no closed chain
/// exists.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GeometricModel {
    contours: Vec<Contour>,
    anchor: Point,
    primary_path: Option<Contour>,
}

impl GeometricModel {
    pub fn from_contours(contours: Vec<Contour>) -> Self {
        Self {
            contours,
            ..Default::default()
        }
    }

    /// Take built outline contours, closing any whose ends meet within
    /// `chain_tolerance`.
    pub fn import(contours: Vec<Contour>, chain_tolerance: f64) -> Self {
        Self::from_contours(
            contours
                .into_iter()
                .filter(|c| !c.is_empty())
                .map(|c| c.close_if_coincident(chain_tolerance))
                .collect(),
        )
    }

    pub fn contours(&self) -> &[Contour] {
        &self.contours
    }

    pub fn is_empty(&self) -> bool {
        self.contours.iter().all(Contour::is_empty)
    }

    pub fn measure_extents(&self) -> Option<Extents> {
        self.contours
            .iter()
            .filter_map(Contour::extents)
            .reduce(|a, b| a.union(&b))
    }

    /// Uniform scale about the origin.
    pub fn scale(&mut self, factor: f64) {
        for contour in &mut self.contours {
            contour.scale(factor);
        }
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        for contour in &mut self.contours {
            contour.translate(dx, dy);
        }
    }

    /// Move the model so its extents are centered on the origin.
    pub fn center(&mut self) {
        if let Some(ext) = self.measure_extents() {
            let c = ext.center();
            self.translate(-c.x, -c.y);
        }
    }

    /// Keep only the first sub-model, dropping any others the import made.
    pub fn retain_first(&mut self) {
        self.contours.truncate(1);
    }

    pub fn anchor(&self) -> Point {
        self.anchor
    }

    pub fn set_anchor(&mut self, anchor: Point) {
        self.anchor = anchor;
    }

    pub fn primary_path(&self) -> Option<&Contour> {
        self.primary_path.as_ref()
    }

    pub fn set_primary_path(&mut self, path: Option<Contour>) {
        self.primary_path = path;
    }
}
