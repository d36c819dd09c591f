use lyon::geom::{point, vector, Angle, Arc, CubicBezierSegment};

use super::contour::Contour;
use holekit_core::Point;

/// Builds f64 contours with the begin/line_to/end calls of a lyon path
/// builder.
///
/// Straight edges keep their source coordinates as given. Only curves go
/// through lyon's flattening, and every flattened curve ends on its exact
/// source endpoint.
#[derive(Debug, Clone)]
pub struct OutlineBuilder {
    tolerance: f64,
    contours: Vec<Contour>,
    current: Vec<Point>,
}

impl OutlineBuilder {
    /// `tolerance` is the largest allowed deviation of a flattened curve.
    pub fn new(tolerance: f64) -> Self {
        Self {
            tolerance,
            contours: Vec::new(),
            current: Vec::new(),
        }
    }

    /// Start a sub-path. An unfinished sub-path is ended open first.
    pub fn begin(&mut self, at: Point) {
        self.end(false);
        self.current.push(at);
    }

    pub fn line_to(&mut self, to: Point) {
        if !self.current.is_empty() {
            self.current.push(to);
        }
    }

    pub fn cubic_bezier_to(&mut self, ctrl1: Point, ctrl2: Point, to: Point) {
        let Some(&from) = self.current.last() else {
            return;
        };
        let curve = CubicBezierSegment {
            from: point(from.x, from.y),
            ctrl1: point(ctrl1.x, ctrl1.y),
            ctrl2: point(ctrl2.x, ctrl2.y),
            to: point(to.x, to.y),
        };
        let mut inner = Vec::new();
        curve.for_each_flattened(self.tolerance, &mut |seg| {
            inner.push(Point::new(seg.to.x, seg.to.y));
        });
        self.push_flattened(inner, to);
    }

    pub fn end(&mut self, close: bool) {
        if !self.current.is_empty() {
            let points = std::mem::take(&mut self.current);
            self.contours.push(Contour::new(points, close));
        }
    }

    /// Closed axis-aligned rectangle, counter-clockwise from `min`.
    pub fn add_rectangle(&mut self, min: Point, max: Point) {
        self.begin(min);
        self.line_to(Point::new(max.x, min.y));
        self.line_to(max);
        self.line_to(Point::new(min.x, max.y));
        self.end(true);
    }

    /// Closed axis-aligned ellipse around `center`, counter-clockwise from
    /// its rightmost point.
    ///
    /// Drawn as four quarter arcs so the extreme points on both axes are
    /// exact vertices.
    pub fn add_ellipse(&mut self, center: Point, rx: f64, ry: f64) {
        let quadrants = [
            Point::new(center.x + rx, center.y),
            Point::new(center.x, center.y + ry),
            Point::new(center.x - rx, center.y),
            Point::new(center.x, center.y - ry),
        ];
        self.begin(quadrants[0]);
        for q in 0..4 {
            let to = quadrants[(q + 1) % 4];
            let arc = Arc {
                center: point(center.x, center.y),
                radii: vector(rx, ry),
                start_angle: Angle::radians(q as f64 * std::f64::consts::FRAC_PI_2),
                sweep_angle: Angle::frac_pi_2(),
                x_rotation: Angle::zero(),
            };
            let mut inner = Vec::new();
            if rx > 0.0 && ry > 0.0 {
                arc.for_each_flattened(self.tolerance, &mut |seg| {
                    inner.push(Point::new(seg.to.x, seg.to.y));
                });
            }
            self.push_flattened(inner, to);
        }
        // the last quarter ends back on the start
        self.current.pop();
        self.end(true);
    }

    pub fn build(mut self) -> Vec<Contour> {
        self.end(false);
        self.contours
    }

    /// Append a flattened curve, replacing its computed end with `to`.
    fn push_flattened(&mut self, mut inner: Vec<Point>, to: Point) {
        inner.pop();
        self.current.extend(inner);
        self.current.push(to);
    }
}
