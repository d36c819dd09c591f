use holekit_camtools::perimeter_holes::{
    DEPTH, HOLE_SIZE, MAX_HOLE_COUNT, NUMBER_OF_HOLES, REPEAT_TYPE, SPACING, USE_DRILL_POINTS,
};
use holekit_camtools::{
    CutShape, CutType, HoleToolError, PerimeterHoleTool, ProjectContext, SpacingPolicy,
};
use holekit_core::{Bit, BitParams, LengthUnit, Point};
use holekit_designer::{EllipseShape, LineShape, RectangleShape, Shape};
use proptest::prelude::*;

fn rectangle(width: f64, height: f64) -> Shape {
    Shape::Rectangle(RectangleShape::new(Point::new(0.0, 0.0), width, height))
}

fn context(shape: Shape) -> ProjectContext {
    let mut ctx = ProjectContext::new(BitParams {
        bit: Bit::new(0.25, LengthUnit::Inch),
    });
    ctx.select("shape-1", shape);
    ctx.set_param(HOLE_SIZE, 0.25);
    ctx.set_param(SPACING, 1.0);
    ctx.set_param(DEPTH, 0.0625);
    ctx
}

fn diameter(shape: &CutShape) -> f64 {
    match shape {
        CutShape::Ellipse { width, .. } | CutShape::Drill { width, .. } => *width,
    }
}

#[test]
fn test_twelve_inch_rectangle_spacing_one() {
    let records = PerimeterHoleTool::default()
        .execute(&context(rectangle(4.0, 2.0)))
        .unwrap();

    assert_eq!(records.len(), 12);
    for record in &records {
        assert!(matches!(record.shape, CutShape::Ellipse { rotation, .. } if rotation == 0.0));
        assert!((diameter(&record.shape) - 0.251).abs() < 1e-12);
        assert_eq!(record.cut.cut_type, CutType::Fill);
        assert_eq!(record.cut.depth, 0.0625);
        assert!(!record.cut.tab_preference);
    }
}

#[test]
fn test_five_holes_on_twelve_inch_rectangle() {
    let mut ctx = context(rectangle(4.0, 2.0));
    ctx.set_param(REPEAT_TYPE, NUMBER_OF_HOLES);
    ctx.set_param(NUMBER_OF_HOLES, "5");

    let records = PerimeterHoleTool::default().execute(&ctx).unwrap();
    assert_eq!(records.len(), 5);

    // first two holes share the bottom edge
    let a = records[0].shape.center();
    let b = records[1].shape.center();
    assert!((a.distance_to(&b) - 2.4).abs() < 1e-6);
}

#[test]
fn test_millimeter_form_values() {
    let mut ctx = context(rectangle(4.0, 2.0));
    ctx.bit_params.bit = Bit::new(1.0, LengthUnit::Inch);
    ctx.preferred_unit = LengthUnit::Millimeter;
    ctx.set_param(HOLE_SIZE, 25.4);
    ctx.set_param(SPACING, "50.8");
    ctx.set_param(DEPTH, 3.175);

    let records = PerimeterHoleTool::default().execute(&ctx).unwrap();
    assert_eq!(records.len(), 6);
    assert!((diameter(&records[0].shape) - 1.001).abs() < 1e-12);
    assert!((records[0].cut.depth - 0.125).abs() < 1e-12);
}

#[test]
fn test_decimal_sides_divide_evenly() {
    // 2 x 4.1 has a perimeter of 12.2, ten spacings of 1.22
    let mut ctx = context(rectangle(2.0, 4.1));
    ctx.set_param(SPACING, "1.22");
    let records = PerimeterHoleTool::default().execute(&ctx).unwrap();
    assert_eq!(records.len(), 10);

    let a = records[0].shape.center();
    let b = records[1].shape.center();
    assert!((a.distance_to(&b) - 1.22).abs() < 1e-9);
}

#[test]
fn test_rotated_decimal_rectangle_keeps_every_hole() {
    let mut shape = RectangleShape::new(Point::new(3.3, -1.7), 2.0, 4.1);
    shape.rotation = 30.0;
    let mut ctx = context(Shape::Rectangle(shape));
    ctx.set_param(SPACING, "1.22");
    assert_eq!(PerimeterHoleTool::default().execute(&ctx).unwrap().len(), 10);
}

#[test]
fn test_huge_hole_count_is_rejected() {
    let mut ctx = context(rectangle(4.0, 2.0));
    ctx.set_param(REPEAT_TYPE, NUMBER_OF_HOLES);
    ctx.set_param(NUMBER_OF_HOLES, "100000000000000");
    let err = PerimeterHoleTool::default().execute(&ctx).unwrap_err();
    assert_eq!(err, HoleToolError::InvalidHoleCount);
    assert_eq!(err.to_string(), "Number of holes is not valid");
}

#[test]
fn test_holes_closer_than_tolerance_are_not_placed() {
    let mut ctx = context(rectangle(0.002, 0.002));
    ctx.set_param(REPEAT_TYPE, NUMBER_OF_HOLES);
    ctx.set_param(NUMBER_OF_HOLES, MAX_HOLE_COUNT as f64);
    let err = PerimeterHoleTool::default().execute(&ctx).unwrap_err();
    assert_eq!(err, HoleToolError::NoPointsFound);
}

#[test]
fn test_hole_smaller_than_bit() {
    let mut ctx = context(rectangle(4.0, 2.0));
    ctx.set_param(HOLE_SIZE, 0.1);
    let err = PerimeterHoleTool::default().execute(&ctx).unwrap_err();
    assert_eq!(err.to_string(), "Hole Size is too small for current bit");
}

#[test]
fn test_spacing_below_bit() {
    let mut ctx = context(rectangle(4.0, 2.0));
    ctx.set_param(SPACING, "0.2");
    let err = PerimeterHoleTool::default().execute(&ctx).unwrap_err();
    assert_eq!(err, HoleToolError::SpacingTooSmall);
}

#[test]
fn test_zero_holes_finds_nothing() {
    let mut ctx = context(rectangle(4.0, 2.0));
    ctx.set_param(REPEAT_TYPE, NUMBER_OF_HOLES);
    ctx.set_param(NUMBER_OF_HOLES, 0.0);
    let err = PerimeterHoleTool::default().execute(&ctx).unwrap_err();
    assert_eq!(err, HoleToolError::NoPointsFound);
    assert_eq!(err.to_string(), "No hole positions found on the selected shapes");
}

#[test]
fn test_drill_points_use_bit_width() {
    let mut ctx = context(rectangle(4.0, 2.0));
    ctx.set_param(HOLE_SIZE, 0.5);
    ctx.set_param(USE_DRILL_POINTS, true);

    let records = PerimeterHoleTool::default().execute(&ctx).unwrap();
    assert_eq!(records.len(), 12);
    for record in &records {
        assert!(matches!(record.shape, CutShape::Drill { .. }));
        assert_eq!(diameter(&record.shape), 0.25);
        assert_eq!(record.cut.cut_type, CutType::Drill);
    }
}

#[test]
fn test_line_falls_back_to_primary_path() {
    let line = Shape::Line(LineShape::new(
        Point::new(2.0, 0.0),
        Point::new(0.0, 0.0),
        Point::new(4.0, 0.0),
    ));
    let records = PerimeterHoleTool::default().execute(&context(line)).unwrap();
    let xs: Vec<f64> = records.iter().map(|r| r.shape.center().x).collect();
    assert_eq!(xs, vec![0.0, 4.0 / 3.0, 8.0 / 3.0, 4.0]);
}

#[test]
fn test_unusable_shape_does_not_abort_others() {
    let mut ctx = context(rectangle(4.0, 2.0));
    ctx.select(
        "broken",
        Shape::Rectangle(RectangleShape::new(Point::new(f64::NAN, 0.0), 1.0, 1.0)),
    );
    let records = PerimeterHoleTool::default().execute(&ctx).unwrap();
    assert_eq!(records.len(), 12);
}

#[test]
fn test_records_match_sampled_points_across_shapes() {
    let mut ctx = context(rectangle(4.0, 2.0));
    ctx.select("small", rectangle(1.0, 0.5));
    ctx.select(
        "round",
        Shape::Ellipse(EllipseShape::new(Point::new(5.0, 5.0), 2.0, 2.0)),
    );

    let tool = PerimeterHoleTool::default();
    let expected: usize = ctx
        .selected_volumes()
        .map(|v| {
            tool.shape_points(&v.shape, SpacingPolicy::MinimumSpacing(1.0))
                .len()
        })
        .sum();
    assert_eq!(tool.execute(&ctx).unwrap().len(), expected);
}

proptest! {
    #[test]
    fn prop_execute_is_idempotent(width in 1.0f64..30.0, height in 1.0f64..30.0, spacing in 0.25f64..5.0) {
        let mut ctx = context(rectangle(width, height));
        ctx.set_param(SPACING, spacing);
        let tool = PerimeterHoleTool::default();
        prop_assert_eq!(tool.execute(&ctx), tool.execute(&ctx));
    }

    #[test]
    fn prop_hole_count_is_exact(width in 1.0f64..30.0, height in 1.0f64..30.0, n in 1usize..60) {
        let mut ctx = context(rectangle(width, height));
        ctx.set_param(REPEAT_TYPE, NUMBER_OF_HOLES);
        ctx.set_param(NUMBER_OF_HOLES, n as f64);
        let records = PerimeterHoleTool::default().execute(&ctx).unwrap();
        prop_assert_eq!(records.len(), n);
    }

    #[test]
    fn prop_spacing_divides_perimeter(w in 100u32..3000, h in 100u32..3000, s in 25u32..500) {
        // sides and spacing in hundredths of an inch, like typed form values
        let (width, height, spacing) = (f64::from(w) / 100.0, f64::from(h) / 100.0, f64::from(s) / 100.0);
        let mut ctx = context(rectangle(width, height));
        ctx.set_param(SPACING, spacing);
        let perimeter = width + height + width + height;
        let expected = (perimeter / spacing + 1e-9).floor() as usize;
        match PerimeterHoleTool::default().execute(&ctx) {
            Ok(records) => prop_assert_eq!(records.len(), expected),
            Err(e) => {
                prop_assert_eq!(e, HoleToolError::NoPointsFound);
                prop_assert_eq!(expected, 0);
            }
        }
    }

    #[test]
    fn prop_exact_multiple_keeps_last_hole(w in 100u32..3000, h in 100u32..3000, k in 1usize..60) {
        let (width, height) = (f64::from(w) / 100.0, f64::from(h) / 100.0);
        let spacing = (width + height + width + height) / k as f64;
        prop_assume!(spacing >= 0.25);
        let mut ctx = context(rectangle(width, height));
        ctx.set_param(SPACING, spacing);
        let records = PerimeterHoleTool::default().execute(&ctx).unwrap();
        prop_assert_eq!(records.len(), k);
    }
}
