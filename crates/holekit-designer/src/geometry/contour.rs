use holekit_core::Point;

/// Axis-aligned bounds of a model or contour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extents {
    pub min: Point,
    pub max: Point,
}

impl Extents {
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.min.x + self.max.x) / 2.0,
            (self.min.y + self.max.y) / 2.0,
        )
    }

    pub fn union(&self, other: &Extents) -> Extents {
        Extents {
            min: Point::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            max: Point::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        }
    }
}

/// A flattened boundary path. Closed contours do not repeat their first
/// point; the closing segment is implicit.
#[derive(Debug, Clone, PartialEq)]
pub struct Contour {
    points: Vec<Point>,
    closed: bool,
}

impl Contour {
    pub fn new(points: Vec<Point>, closed: bool) -> Self {
        Self { points, closed }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn start(&self) -> Option<Point> {
        self.points.first().copied()
    }

    /// Where traversal ends: the start again for closed contours.
    pub fn end(&self) -> Option<Point> {
        if self.closed {
            self.start()
        } else {
            self.points.last().copied()
        }
    }

    /// Drop a trailing point that lands on the start and mark the contour
    /// closed. Open contours whose ends meet become closed too.
    pub fn close_if_coincident(mut self, tolerance: f64) -> Self {
        if self.points.len() > 2 {
            let first = self.points[0];
            let last = self.points[self.points.len() - 1];
            if first.distance_to(&last) <= tolerance {
                self.points.pop();
                self.closed = true;
            }
        }
        self
    }

    pub fn reversed(&self) -> Self {
        let mut points = self.points.clone();
        points.reverse();
        Self {
            points,
            closed: self.closed,
        }
    }

    /// Traversal vertices: the points, plus the start again when closed.
    fn walk(&self) -> impl Iterator<Item = &Point> {
        let closing = if self.closed && self.points.len() > 1 {
            self.points.first()
        } else {
            None
        };
        self.points.iter().chain(closing)
    }

    /// Arc length at each traversal vertex, starting at zero.
    fn cumulative_lengths(&self) -> Vec<f64> {
        let mut cumulative = Vec::with_capacity(self.points.len() + 1);
        let mut total = 0.0;
        let mut prev: Option<&Point> = None;
        for p in self.walk() {
            if let Some(q) = prev {
                total += q.distance_to(p);
            }
            cumulative.push(total);
            prev = Some(p);
        }
        cumulative
    }

    pub fn length(&self) -> f64 {
        self.cumulative_lengths().last().copied().unwrap_or(0.0)
    }

    pub fn point_at_distance(&self, distance: f64) -> Option<Point> {
        self.points_at_distances(std::iter::once(distance))
            .into_iter()
            .next()
    }

    /// Positions at the given arc lengths, clamped to the contour.
    pub fn points_at_distances(&self, distances: impl IntoIterator<Item = f64>) -> Vec<Point> {
        let vertices: Vec<Point> = self.walk().copied().collect();
        if vertices.is_empty() {
            return Vec::new();
        }
        let cumulative = self.cumulative_lengths();
        let total = cumulative[cumulative.len() - 1];

        distances
            .into_iter()
            .map(|d| {
                let d = d.clamp(0.0, total);
                let idx = cumulative.partition_point(|&c| c < d);
                if idx == 0 {
                    return vertices[0];
                }
                let seg_start = cumulative[idx - 1];
                let seg_len = cumulative[idx] - seg_start;
                let t = if seg_len > 1e-12 {
                    (d - seg_start) / seg_len
                } else {
                    0.0
                };
                vertices[idx - 1].lerp(&vertices[idx], t)
            })
            .collect()
    }

    pub fn extents(&self) -> Option<Extents> {
        let first = self.points.first()?;
        let init = Extents {
            min: *first,
            max: *first,
        };
        Some(self.points.iter().fold(init, |acc, p| Extents {
            min: Point::new(acc.min.x.min(p.x), acc.min.y.min(p.y)),
            max: Point::new(acc.max.x.max(p.x), acc.max.y.max(p.y)),
        }))
    }

    /// Uniform scale about the origin.
    pub fn scale(&mut self, factor: f64) {
        for p in &mut self.points {
            p.x *= factor;
            p.y *= factor;
        }
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        for p in &mut self.points {
            p.x += dx;
            p.y += dy;
        }
    }

    /// Rotate counter-clockwise about the origin.
    pub fn rotate(&mut self, degrees: f64) {
        let (sin, cos) = degrees.to_radians().sin_cos();
        for p in &mut self.points {
            *p = Point::new(p.x * cos - p.y * sin, p.x * sin + p.y * cos);
        }
    }

    /// Copy moved so its own extents are centered on `center`.
    pub fn recentered(&self, center: Point) -> Self {
        let mut contour = self.clone();
        if let Some(ext) = self.extents() {
            let c = ext.center();
            contour.translate(center.x - c.x, center.y - c.y);
        }
        contour
    }
}

/// Sample `divisions` evenly spaced points along a path.
///
/// One point lands at the middle of the path. Otherwise open paths get both
/// endpoints and the rest evenly between; closed paths start at their first
/// point and do not repeat it.
pub fn sample_path_points(path: &Contour, divisions: usize) -> Vec<Point> {
    if divisions == 0 || path.is_empty() {
        return Vec::new();
    }
    let length = path.length();
    if divisions == 1 {
        return path.points_at_distances([length / 2.0]);
    }
    let base = if path.is_closed() {
        divisions as f64
    } else {
        (divisions - 1) as f64
    };
    path.points_at_distances((0..divisions).map(|k| length * k as f64 / base))
}
