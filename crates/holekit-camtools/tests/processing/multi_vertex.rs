use holekit_camtools::perimeter_holes::{DEPTH, HOLE_SIZE, SPACING};
use holekit_camtools::{PerimeterHoleTool, ProjectContext};
use holekit_core::{Bit, BitParams, LengthUnit, Point};
use holekit_designer::{PathContours, PathShape, Shape, TextShape};

fn unit_square_at(x: f64) -> Vec<Point> {
    vec![
        Point::new(x, 0.0),
        Point::new(x + 1.0, 0.0),
        Point::new(x + 1.0, 1.0),
        Point::new(x, 1.0),
    ]
}

fn three_squares() -> PathContours {
    PathContours::from_polylines(
        vec![unit_square_at(0.0), unit_square_at(2.0), unit_square_at(4.0)],
        true,
    )
}

fn run(shape: Shape) -> Vec<Point> {
    let mut ctx = ProjectContext::new(BitParams {
        bit: Bit::new(0.25, LengthUnit::Inch),
    });
    ctx.select("path", shape);
    ctx.set_param(HOLE_SIZE, 0.3);
    ctx.set_param(SPACING, 1.0);
    ctx.set_param(DEPTH, 0.1);
    PerimeterHoleTool::default()
        .execute(&ctx)
        .unwrap()
        .iter()
        .map(|r| r.shape.center())
        .collect()
}

#[test]
fn test_three_vertex_path_gives_three_sequences() {
    let shape = Shape::Path(PathShape::new(Point::new(2.5, 0.5), 5.0, 1.0, three_squares()));
    let centers = run(shape);

    // four holes per unit square, one square after another
    assert_eq!(centers.len(), 12);
    for (i, group) in centers.chunks(4).enumerate() {
        let left = 2.0 * i as f64;
        assert!(group
            .iter()
            .all(|p| p.x >= left - 1e-9 && p.x <= left + 1.0 + 1e-9));
        assert!(group[0].distance_to(&Point::new(left, 0.0)) < 1e-9);
    }
}

#[test]
fn test_text_outline_follows_vertex_rule() {
    let outline = PathContours::from_polylines(vec![unit_square_at(0.0), unit_square_at(2.0)], true);
    let shape = Shape::Text(TextShape::new(Point::new(1.5, 0.5), 3.0, 1.0, outline));
    assert_eq!(run(shape).len(), 8);
}

#[test]
fn test_single_list_path_is_one_sequence() {
    let contours = PathContours::from_polylines(vec![unit_square_at(0.0)], true);
    let shape = Shape::Path(PathShape::new(Point::new(0.5, 0.5), 1.0, 1.0, contours));
    assert_eq!(run(shape).len(), 4);
}
