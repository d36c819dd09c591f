use holekit_designer::{build_hole_pattern, HoleCircle, HolePattern, Point};

#[test]
fn test_pattern_keeps_point_order() {
    let points = [
        Point::new(2.0, 0.0),
        Point::new(0.0, 0.0),
        Point::new(1.0, 1.0),
    ];
    let pattern = build_hole_pattern(0.25, &points);
    assert_eq!(pattern.hole_count(), 3);
    let origins: Vec<Point> = pattern.holes.iter().map(|h| h.origin).collect();
    assert_eq!(origins, points.to_vec());
}

#[test]
fn test_hole_radius_is_half_diameter() {
    let pattern = build_hole_pattern(0.251, &[Point::new(0.0, 0.0)]);
    let hole = pattern.holes[0];
    assert_eq!(hole.radius, 0.1255);
    assert_eq!(hole.diameter(), 0.251);
}

#[test]
fn test_coincident_points_are_kept() {
    let p = Point::new(1.0, 1.0);
    let pattern = build_hole_pattern(0.5, &[p, p]);
    assert_eq!(pattern.hole_count(), 2);
}

#[test]
fn test_empty_points_empty_pattern() {
    let pattern = build_hole_pattern(0.5, &[]);
    assert_eq!(pattern, HolePattern::new(0.5));
}

#[test]
fn test_add_hole_incrementally() {
    let mut pattern = HolePattern::new(1.0);
    pattern.add_hole(Point::new(3.0, 4.0));
    assert_eq!(pattern.holes, vec![HoleCircle::new(Point::new(3.0, 4.0), 0.5)]);
}
