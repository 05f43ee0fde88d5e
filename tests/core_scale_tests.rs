use plotframe::core::{LinearScale, Point, Series, extent, project_points};
use plotframe::render::Color;
use plotframe::PlotError;

#[test]
fn map_and_invert_are_inverse() {
    let scale = LinearScale::new(0.0, 10.0, 0.0, 100.0).expect("scale");

    assert_eq!(scale.map(5.0).expect("map"), 50.0);
    assert_eq!(scale.invert(25.0).expect("invert"), 2.5);
    let recovered = scale.invert(scale.map(7.3).expect("map")).expect("invert");
    assert!((recovered - 7.3).abs() <= 1e-12);
}

#[test]
fn reversed_range_maps_downward() {
    let scale = LinearScale::new(0.0, 4.0, 400.0, 0.0).expect("scale");
    assert_eq!(scale.map(1.0).expect("map"), 300.0);
}

#[test]
fn flat_extent_is_widened() {
    let scale = LinearScale::fit([5.0, 5.0, 5.0], 0.0, 100.0).expect("fit");
    assert_eq!(scale.domain(), (4.0, 6.0));
    assert_eq!(scale.map(5.0).expect("map"), 50.0);
}

#[test]
fn degenerate_scales_are_rejected() {
    assert!(matches!(
        LinearScale::new(1.0, 1.0, 0.0, 10.0),
        Err(PlotError::InvalidData(_))
    ));
    assert!(LinearScale::new(f64::NAN, 1.0, 0.0, 10.0).is_err());
    assert!(LinearScale::fit(std::iter::empty(), 0.0, 10.0).is_err());

    let scale = LinearScale::new(0.0, 1.0, 0.0, 10.0).expect("scale");
    assert!(scale.map(f64::INFINITY).is_err());
}

#[test]
fn nice_ticks_use_round_steps() {
    let scale = LinearScale::new(0.0, 10.0, 0.0, 800.0).expect("scale");
    assert_eq!(scale.nice_ticks(6), vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);

    let scale = LinearScale::new(-1.0, 1.0, 0.0, 800.0).expect("scale");
    assert_eq!(scale.nice_ticks(5), vec![-1.0, -0.5, 0.0, 0.5, 1.0]);
}

#[test]
fn extent_skips_non_finite_values() {
    assert_eq!(extent([2.0, f64::NAN, -3.0]), Some((-3.0, 2.0)));
}

#[test]
fn series_from_mismatched_slices_is_invalid() {
    let err = Series::from_xy("s", &[1.0, 2.0], &[1.0], Color::RED).expect_err("mismatch");
    assert!(matches!(err, PlotError::InvalidData(_)));
}

#[test]
fn projection_keeps_count_and_order() {
    let points = vec![
        Point::new(3.0, 0.0),
        Point::new(1.0, 5.0),
        Point::new(2.0, 10.0),
    ];
    let x = LinearScale::new(0.0, 4.0, 0.0, 400.0).expect("x");
    let y = LinearScale::new(0.0, 10.0, 0.0, 100.0).expect("y");

    let projected = project_points(&points, x, y).expect("project");
    assert_eq!(
        projected,
        vec![
            Point::new(300.0, 0.0),
            Point::new(100.0, 50.0),
            Point::new(200.0, 100.0),
        ]
    );
}

#[test]
fn set_points_replaces_stale_projection() {
    let mut series = Series::new("s", vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)], Color::RED);
    let scale = LinearScale::new(0.0, 1.0, 0.0, 10.0).expect("scale");
    series.scale_points(scale, scale).expect("scale points");
    assert_eq!(series.scaled_points()[1], Point::new(10.0, 10.0));

    series.set_points(vec![Point::new(0.5, 0.5)]);
    assert_eq!(series.scaled_points(), &[Point::new(0.5, 0.5)]);
    assert_eq!(series.x_extent(), Some((0.5, 0.5)));
}
