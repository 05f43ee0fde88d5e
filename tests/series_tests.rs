use plotframe::core::{GradientMode, LinearScale, Point, Series};
use plotframe::render::{Color, ColorGradient};

fn assert_aligned(series: &Series) {
    assert_eq!(series.points().len(), series.scaled_points().len());
}

fn triangle() -> Vec<Point> {
    vec![
        Point::new(0.0, 0.0),
        Point::new(2.0, 4.0),
        Point::new(4.0, 0.0),
    ]
}

#[test]
fn new_series_starts_with_aligned_scaled_points() {
    let series = Series::new("s", triangle(), Color::RED);
    assert_aligned(&series);
    assert_eq!(series.scaled_points(), series.points());

    let from_xy = Series::from_xy("xy", &[1.0, 2.0], &[3.0, 4.0], Color::RED).expect("series");
    assert_aligned(&from_xy);
}

#[test]
fn set_points_keeps_lengths_aligned() {
    let mut series = Series::new("s", triangle(), Color::RED);
    let scale = LinearScale::new(0.0, 4.0, 0.0, 400.0).expect("scale");
    series.scale_points(scale, scale).expect("scale points");

    let five: Vec<Point> = (0..5).map(|i| Point::new(f64::from(i), 1.0)).collect();
    series.set_points(five);
    assert_eq!(series.len(), 5);
    assert_aligned(&series);

    series.set_points(Vec::new());
    assert!(series.is_empty());
    assert_aligned(&series);
}

#[test]
fn deserialized_series_rebuilds_scaled_points() {
    let series = Series::new("s", triangle(), Color::BLUE)
        .with_gradient(ColorGradient::new(Color::BLUE, Color::RED));
    let json = serde_json::to_string(&series).expect("serialize");
    assert!(!json.contains("scaled_points"));

    let restored: Series = serde_json::from_str(&json).expect("deserialize");
    assert_aligned(&restored);
    assert_eq!(restored, series);
}

#[test]
fn series_without_gradient_field_deserializes() {
    let json = r#"{"label":"s","points":[{"x":1.0,"y":2.0}],"color":{"red":0.0,"green":0.0,"blue":0.0,"alpha":1.0}}"#;
    let restored: Series = serde_json::from_str(json).expect("deserialize");
    assert_eq!(restored.gradient, None);
    assert_eq!(restored.scaled_points(), &[Point::new(1.0, 2.0)]);
}

fn distance_from_origin(point: Point) -> f64 {
    point.x.hypot(point.y)
}

#[test]
fn projection_gradient_spans_the_projected_range() {
    let gradient = ColorGradient::new(Color::BLACK, Color::WHITE);
    let points = vec![Point::new(3.0, 4.0), Point::new(0.0, 0.0), Point::new(6.0, 8.0)];
    let series =
        Series::new("s", points, Color::RED).with_gradient_projection(gradient, distance_from_origin);

    assert!(matches!(series.gradient_mode(), GradientMode::Projection(_)));
    assert_eq!(series.color_at(1), Color::BLACK);
    assert_eq!(series.color_at(2), gradient.at_value(10.0, 0.0, 10.0));
    assert_eq!(series.color_at(0), gradient.at_value(5.0, 0.0, 10.0));
    assert_eq!(
        series.point_colors(),
        vec![series.color_at(0), series.color_at(1), series.color_at(2)]
    );
}

#[test]
fn index_gradient_and_plain_color() {
    let gradient = ColorGradient::new(Color::BLACK, Color::WHITE);
    let plain = Series::new("s", triangle(), Color::RED);
    assert_eq!(plain.gradient_mode(), GradientMode::Index);
    assert_eq!(plain.point_colors(), vec![Color::RED; 3]);

    let indexed = plain.with_gradient(gradient);
    assert_eq!(indexed.color_at(0), Color::BLACK);
    assert_eq!(indexed.color_at(1), gradient.at_index(1, 3));
}
