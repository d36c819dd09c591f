use holekit_designer::{
    build_models, find_single_chain, EllipseShape, GeometryOptions, LineShape, PathContours,
    PathShape, Point, PolygonShape, RectangleShape, Shape, TextShape,
};

fn opts() -> GeometryOptions {
    GeometryOptions::default()
}

fn unit_square_at(x: f64, y: f64) -> Vec<Point> {
    vec![
        Point::new(x, y),
        Point::new(x + 1.0, y),
        Point::new(x + 1.0, y + 1.0),
        Point::new(x, y + 1.0),
    ]
}

#[test]
fn test_rectangle_builds_one_placed_model() {
    let shape = Shape::Rectangle(RectangleShape::new(Point::new(5.0, 3.0), 4.0, 2.0));
    let models = build_models(&shape, &opts()).unwrap();
    assert_eq!(models.len(), 1);

    let model = &models[0];
    let ext = model.measure_extents().unwrap();
    assert_eq!(ext.center(), Point::new(5.0, 3.0));
    assert_eq!(ext.width(), 4.0);
    assert_eq!(model.anchor(), Point::new(5.0, 3.0));
    assert!(model.primary_path().is_some());

    let chain = find_single_chain(model, opts().chain_tolerance).unwrap();
    assert_eq!(chain.length(), 12.0);
}

#[test]
fn test_small_outline_scales_up_to_declared_width() {
    // outline is 1 wide, declared 3 wide
    let shape = Shape::Polygon(PolygonShape::new(
        Point::new(0.0, 0.0),
        3.0,
        3.0,
        unit_square_at(0.0, 0.0),
    ));
    let models = build_models(&shape, &opts()).unwrap();
    let ext = models[0].measure_extents().unwrap();
    assert!((ext.width() - 3.0).abs() < 1e-9);
    assert!((ext.height() - 3.0).abs() < 1e-9);
    assert!(ext.center().distance_to(&Point::new(0.0, 0.0)) < 1e-9);
}

#[test]
fn test_large_outline_never_shrinks() {
    let mut points = unit_square_at(0.0, 0.0);
    for p in &mut points {
        p.x *= 10.0;
        p.y *= 10.0;
    }
    let shape = Shape::Polygon(PolygonShape::new(Point::new(1.0, 1.0), 2.0, 2.0, points));
    let models = build_models(&shape, &opts()).unwrap();
    let ext = models[0].measure_extents().unwrap();
    assert_eq!(ext.width(), 10.0);
    assert_eq!(ext.center(), Point::new(1.0, 1.0));
}

#[test]
fn test_ellipse_outline_is_closed() {
    let shape = Shape::Ellipse(EllipseShape::new(Point::new(0.0, 0.0), 2.0, 2.0));
    let models = build_models(&shape, &opts()).unwrap();
    let chain = find_single_chain(&models[0], opts().chain_tolerance).unwrap();
    // flattened circle of diameter 2
    assert!((chain.length() - std::f64::consts::PI * 2.0).abs() < 0.01);
}

#[test]
fn test_line_has_primary_path_but_no_chain() {
    let shape = Shape::Line(LineShape::new(
        Point::new(2.0, 2.0),
        Point::new(0.0, 0.0),
        Point::new(4.0, 0.0),
    ));
    let models = build_models(&shape, &opts()).unwrap();
    assert!(find_single_chain(&models[0], opts().chain_tolerance).is_none());
    let primary = models[0].primary_path().unwrap();
    assert!(!primary.is_closed());
    assert_eq!(primary.length(), 4.0);
}

#[test]
fn test_multi_vertex_path_builds_one_model_per_vertex() {
    let contours = PathContours::from_polylines(
        vec![
            unit_square_at(0.0, 0.0),
            unit_square_at(2.0, 0.0),
            unit_square_at(4.0, 0.0),
        ],
        true,
    );
    let shape = Shape::Path(PathShape::new(Point::new(2.5, 0.5), 5.0, 1.0, contours));
    let models = build_models(&shape, &opts()).unwrap();
    assert_eq!(models.len(), 3);

    for (i, model) in models.iter().enumerate() {
        // only the contour rooted at vertex i survives, in its own place
        assert_eq!(model.contours().len(), 1);
        let ext = model.measure_extents().unwrap();
        let expected_x = 2.0 * i as f64 + 0.5;
        assert!((ext.center().x - expected_x).abs() < 1e-9);
        assert!((ext.center().y - 0.5).abs() < 1e-9);
    }
}

#[test]
fn test_text_outline_uses_vertex_rule() {
    let outline = PathContours::from_polylines(
        vec![unit_square_at(0.0, 0.0), unit_square_at(3.0, 0.0)],
        true,
    );
    let shape = Shape::Text(TextShape::new(Point::new(0.0, 0.0), 4.0, 1.0, outline));
    let models = build_models(&shape, &opts()).unwrap();
    assert_eq!(models.len(), 2);
    assert!(models.iter().all(|m| m.contours().len() == 1));
}

#[test]
fn test_build_models_does_not_mutate_shape() {
    let shape = Shape::Polygon(PolygonShape::new(
        Point::new(0.0, 0.0),
        3.0,
        3.0,
        unit_square_at(0.0, 0.0),
    ));
    let before = shape.clone();
    build_models(&shape, &opts()).unwrap();
    assert_eq!(shape, before);
}

#[test]
fn test_invalid_shape_is_rejected() {
    let shape = Shape::Rectangle(RectangleShape::new(Point::new(0.0, f64::INFINITY), 1.0, 1.0));
    assert!(build_models(&shape, &opts()).is_err());
}
