//! # Bezier Tests

use super::*;
use approx::assert_abs_diff_eq;

fn straight_segment() -> Bezier<DVec2> {
    // Handles bunched towards the start: raw t is far from uniform in distance
    Bezier::new(
        DVec2::ZERO,
        DVec2::new(1.0, 0.0),
        DVec2::new(2.0, 0.0),
        DVec2::new(30.0, 0.0),
    )
}

#[test]
fn test_evaluate_endpoints_exact() {
    let bezier = Bezier::new(
        DVec2::new(1.5, -2.0),
        DVec2::new(7.0, 3.0),
        DVec2::new(-4.0, 8.0),
        DVec2::new(9.25, 0.5),
    );
    assert_eq!(bezier.evaluate(0.0), bezier.a);
    assert_eq!(bezier.evaluate(1.0), bezier.d);
}

#[test]
fn test_evaluate_midpoint_of_symmetric_curve() {
    let bezier = Bezier::new(
        DVec2::ZERO,
        DVec2::new(0.0, 1.0),
        DVec2::new(1.0, 1.0),
        DVec2::new(1.0, 0.0),
    );
    let mid = bezier.evaluate(0.5);
    assert_abs_diff_eq!(mid.x, 0.5, epsilon = 1e-12);
    assert_abs_diff_eq!(mid.y, 0.75, epsilon = 1e-12);
}

#[test]
fn test_control_polygon_length() {
    let bezier = straight_segment();
    assert_abs_diff_eq!(bezier.control_polygon_length(), 30.0, epsilon = 1e-12);
}

#[test]
fn test_length_of_straight_segment() {
    let mut bezier = straight_segment();
    assert!(!bezier.has_checkpoints());
    bezier.calculate_checkpoints(200);
    assert!(bezier.has_checkpoints());
    // The curve stays on the segment and is monotonic, so length is the chord.
    assert_abs_diff_eq!(bezier.length(), 30.0, epsilon = 1e-9);
}

#[test]
fn test_length_without_table_samples_on_demand() {
    let bezier = straight_segment();
    assert_abs_diff_eq!(bezier.length(), 30.0, epsilon = 1e-9);
}

#[test]
fn test_evaluate_at_distance_is_uniform() {
    let bezier = Bezier::with_checkpoints(
        DVec2::ZERO,
        DVec2::new(1.0, 0.0),
        DVec2::new(2.0, 0.0),
        DVec2::new(30.0, 0.0),
        400,
    );
    let halfway = bezier.evaluate_at_distance(15.0);
    assert_abs_diff_eq!(halfway.x, 15.0, epsilon = 0.05);
    // Raw parameter 0.5 lands well short of the middle
    assert!(bezier.evaluate(0.5).x < 10.0);
}

#[test]
fn test_evaluate_at_distance_clamps() {
    let bezier = straight_segment();
    assert_eq!(bezier.evaluate_at_distance(-5.0), bezier.a);
    assert_eq!(bezier.evaluate_at_distance(1000.0), bezier.d);
}

#[test]
fn test_parameter_for_distance_degenerate_table() {
    assert_eq!(parameter_for_distance(&[], 1.0), 0.0);
    assert_eq!(parameter_for_distance(&[0.0, 0.0, 0.0], 1.0), 0.0);
}

#[test]
fn test_curve_endpoints_exact() {
    let curve = BezierCurve::new(vec![
        Bezier::new(
            DVec2::new(3.0, 4.0),
            DVec2::new(10.0, 4.0),
            DVec2::new(10.0, 10.0),
            DVec2::new(20.0, 10.0),
        ),
        Bezier::new(
            DVec2::new(20.0, 10.0),
            DVec2::new(30.0, 10.0),
            DVec2::new(40.0, 0.0),
            DVec2::new(50.0, -7.5),
        ),
    ]);
    assert_eq!(curve.get_point(0.0), Some(DVec2::new(3.0, 4.0)));
    assert_eq!(curve.get_point(1.0), Some(DVec2::new(50.0, -7.5)));
    assert_eq!(curve.get_point(-1.0), Some(DVec2::new(3.0, 4.0)));
    assert_eq!(curve.get_point(2.0), Some(DVec2::new(50.0, -7.5)));
}

#[test]
fn test_empty_curve_has_no_points() {
    let curve: BezierCurve<DVec2> = BezierCurve::new(Vec::new());
    assert!(curve.is_empty());
    assert_eq!(curve.get_point(0.5), None);
    assert_eq!(curve.length(), 0.0);
}

#[test]
fn test_curve_length_sums_parts() {
    let part = Bezier::new(
        DVec2::ZERO,
        DVec2::new(1.0, 0.0),
        DVec2::new(2.0, 0.0),
        DVec2::new(3.0, 0.0),
    );
    let mut second = part.clone();
    second.a += DVec2::new(3.0, 0.0);
    second.b += DVec2::new(3.0, 0.0);
    second.c += DVec2::new(3.0, 0.0);
    second.d += DVec2::new(3.0, 0.0);

    let curve = BezierCurve::new(vec![part, second]);
    assert_abs_diff_eq!(curve.length(), 6.0, epsilon = 1e-9);

    // Uniform parameterization across parts
    let point = curve.get_point(0.75).unwrap_or_default();
    assert_abs_diff_eq!(point.x, 4.5, epsilon = 1e-6);
}

#[test]
fn test_through_points_collinear_is_straight() {
    let curve = BezierCurve::through_points(&[
        DVec3::ZERO,
        DVec3::new(1.0, 0.0, 0.0),
        DVec3::new(2.0, 0.0, 0.0),
    ]);
    assert_eq!(curve.parts().len(), 2);

    let first = &curve.parts()[0];
    assert!(first.b.abs_diff_eq(DVec3::new(1.0 / 3.0, 0.0, 0.0), 1e-12));
    assert!(first.c.abs_diff_eq(DVec3::new(2.0 / 3.0, 0.0, 0.0), 1e-12));

    let mid = first.evaluate(0.5);
    assert!(mid.abs_diff_eq(DVec3::new(0.5, 0.0, 0.0), 1e-12));
}

#[test]
fn test_through_points_passes_through_anchors() {
    let points = [
        DVec3::ZERO,
        DVec3::new(4.0, 1.0, 0.0),
        DVec3::new(5.0, 6.0, 2.0),
        DVec3::new(-1.0, 3.0, 1.0),
    ];
    let curve = BezierCurve::through_points(&points);
    for (i, part) in curve.parts().iter().enumerate() {
        assert_eq!(part.a, points[i]);
        assert_eq!(part.d, points[i + 1]);
    }
}

#[test]
fn test_through_single_point_is_empty() {
    let curve = BezierCurve::through_points(&[DVec3::ONE]);
    assert!(curve.is_empty());
}
