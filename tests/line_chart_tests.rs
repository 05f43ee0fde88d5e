use plotframe::core::{Point, Series, Size};
use plotframe::layout::{Arrow, TextAnnotation};
use plotframe::plot::{ChartStyle, LineChart, Plot, StackPattern, SubPlot};
use plotframe::render::{Color, ColorGradient, DrawCommand, RecordingRenderer, Stroke, TextStyle};
use plotframe::PlotError;

fn diagonal(label: &str) -> Series {
    Series::from_xy(label, &[0.0, 10.0], &[0.0, 10.0], Color::BLUE).expect("series")
}

fn draw(chart: &mut LineChart) -> RecordingRenderer {
    let mut recorder = RecordingRenderer::new(1000.0, 660.0);
    chart
        .draw_graph_and_output(&mut recorder, Size::new(1000.0, 660.0), "line")
        .expect("draw");
    recorder
}

fn polylines(recorder: &RecordingRenderer) -> Vec<&DrawCommand> {
    recorder
        .commands()
        .iter()
        .filter(|command| matches!(command, DrawCommand::Polyline { .. }))
        .collect()
}

#[test]
fn data_extrema_map_onto_the_graph_area() {
    let mut chart = LineChart::new().with_series(diagonal("d"));
    let recorder = draw(&mut chart);

    let lines = polylines(&recorder);
    assert_eq!(lines.len(), 1);
    let DrawCommand::Polyline { points, stroke } = lines[0] else {
        panic!("expected a polyline");
    };
    assert_eq!(
        points,
        &vec![Point::new(100.0, 594.0), Point::new(900.0, 66.0)]
    );
    assert_eq!(stroke.width, 1.5);
    assert!(!stroke.dashed);
    assert_eq!(recorder.flush_count(), 1);
}

#[test]
fn scaled_points_keep_length_and_order() {
    let x = [3.0, 1.0, 2.0, 5.0];
    let y = [10.0, 20.0, 15.0, 30.0];
    let mut chart =
        LineChart::new().with_series(Series::from_xy("s", &x, &y, Color::RED).expect("series"));
    draw(&mut chart);

    let series = chart.series().next().expect("one series");
    let scaled = series.scaled_points();
    assert_eq!(scaled.len(), x.len());
    // x = 3 sits halfway between 1 and 5.
    assert_eq!(scaled[0], Point::new(400.0, 0.0));
    assert_eq!(scaled[1], Point::new(0.0, 264.0));
    assert_eq!(scaled[3], Point::new(800.0, 528.0));
}

#[test]
fn empty_chart_is_invalid_data() {
    let mut chart = LineChart::new();
    let mut recorder = RecordingRenderer::new(1000.0, 660.0);
    let err = chart
        .draw_graph_and_output(&mut recorder, Size::new(1000.0, 660.0), "empty")
        .expect_err("nothing to draw");
    assert!(matches!(err, PlotError::InvalidData(_)));
    assert_eq!(recorder.flush_count(), 0);
}

#[test]
fn non_finite_points_are_invalid_data() {
    let series = Series::new(
        "bad",
        vec![Point::new(0.0, 1.0), Point::new(f64::NAN, 2.0)],
        Color::RED,
    );
    let mut chart = LineChart::new().with_series(series);
    let mut recorder = RecordingRenderer::new(1000.0, 660.0);
    let err = chart
        .draw_graph_and_output(&mut recorder, Size::new(1000.0, 660.0), "bad")
        .expect_err("NaN point");
    assert!(matches!(err, PlotError::InvalidData(_)));
}

#[test]
fn dashed_series_draw_dashed_polylines() {
    let mut chart = LineChart::new();
    chart.add_series(diagonal("solid"));
    chart.add_dashed_series(
        Series::from_xy("dashed", &[0.0, 5.0, 10.0], &[10.0, 5.0, 0.0], Color::RED)
            .expect("series"),
    );
    let recorder = draw(&mut chart);

    let dashed: Vec<bool> = polylines(&recorder)
        .into_iter()
        .map(|command| match command {
            DrawCommand::Polyline { stroke, .. } => stroke.dashed,
            _ => unreachable!(),
        })
        .collect();
    assert_eq!(dashed, vec![false, true]);
}

#[test]
fn gradient_series_draw_one_segment_per_point_pair() {
    let series = Series::from_xy(
        "g",
        &[0.0, 1.0, 2.0, 3.0, 4.0],
        &[1.0, 3.0, 2.0, 5.0, 4.0],
        Color::BLACK,
    )
    .expect("series")
    .with_gradient(ColorGradient::new(Color::BLUE, Color::RED));
    let mut chart = LineChart::new().with_series(series);
    let recorder = draw(&mut chart);

    let segments: Vec<Color> = recorder
        .commands()
        .iter()
        .filter_map(|command| match command {
            DrawCommand::Line { stroke, .. } if stroke.width == 1.5 => Some(stroke.color),
            _ => None,
        })
        .collect();
    assert_eq!(segments.len(), 4);
    assert_eq!(segments[0], Color::BLUE);
    assert!(polylines(&recorder).is_empty());
}

fn height(point: Point) -> f64 {
    point.y
}

#[test]
fn gradient_projection_colors_segments_by_value() {
    let gradient = ColorGradient::new(Color::BLUE, Color::RED);
    let series = Series::from_xy(
        "g",
        &[0.0, 1.0, 2.0, 3.0, 4.0],
        &[1.0, 3.0, 2.0, 5.0, 4.0],
        Color::BLACK,
    )
    .expect("series")
    .with_gradient_projection(gradient, height);
    let mut chart = LineChart::new().with_series(series);
    let recorder = draw(&mut chart);

    let segments: Vec<Color> = recorder
        .commands()
        .iter()
        .filter_map(|command| match command {
            DrawCommand::Line { stroke, .. } if stroke.width == 1.5 => Some(stroke.color),
            _ => None,
        })
        .collect();
    let expected: Vec<Color> = [1.0, 3.0, 2.0, 5.0]
        .into_iter()
        .map(|y| gradient.at_value(y, 1.0, 5.0))
        .collect();
    assert_eq!(segments, expected);
    // y = 3 sits halfway through [1, 5], not a quarter of the way like index 1.
    assert_ne!(segments[1], gradient.at_index(1, 5));
}

#[test]
fn secondary_series_share_x_and_get_their_own_y_axis() {
    let secondary =
        Series::from_xy("cost", &[0.0, 20.0], &[100.0, 200.0], Color::GREEN).expect("series");
    let mut chart = LineChart::new()
        .with_style(ChartStyle::default().with_y2_label("cost"))
        .with_series(diagonal("load"))
        .with_secondary_series(secondary);
    let recorder = draw(&mut chart);
    let commands = recorder.commands();

    let lines: Vec<(Vec<Point>, bool)> = polylines(&recorder)
        .into_iter()
        .map(|command| match command {
            DrawCommand::Polyline { points, stroke } => (points.clone(), stroke.dashed),
            _ => unreachable!(),
        })
        .collect();
    assert_eq!(
        lines,
        vec![
            (vec![Point::new(100.0, 594.0), Point::new(500.0, 66.0)], false),
            (vec![Point::new(100.0, 594.0), Point::new(900.0, 66.0)], true),
        ]
    );

    // Secondary stems leave the right border outward.
    assert!(commands.iter().any(|command| matches!(
        command,
        DrawCommand::Line { from, to, .. }
            if *from == Point::new(902.0, 594.0) && *to == Point::new(908.0, 594.0)
    )));
    assert!(commands.iter().any(|command| matches!(
        command,
        DrawCommand::Text { text, location, .. } if text == "200" && location.x == 912.0
    )));
    assert_eq!(chart.secondary_series().count(), 1);
}

#[test]
fn annotations_are_drawn_last_in_graph_coordinates() {
    let mut chart = LineChart::new()
        .with_series(diagonal("d"))
        .with_annotation(TextAnnotation::new("peak", Point::new(10.0, 20.0)))
        .with_annotation(
            Arrow::new(Point::ZERO, Point::new(100.0, 0.0))
                .with_head(10.0, 90.0)
                .filled(),
        );
    let recorder = draw(&mut chart);
    let commands = recorder.commands();
    let tail = &commands[commands.len() - 3..];

    assert_eq!(
        tail[0],
        DrawCommand::Text {
            text: "peak".to_owned(),
            location: Point::new(110.0, 574.0),
            style: TextStyle::new(15.0, Color::BLACK),
            angle: 0.0,
        }
    );
    assert_eq!(
        tail[1],
        DrawCommand::Line {
            from: Point::new(100.0, 594.0),
            to: Point::new(200.0, 594.0),
            stroke: Stroke::solid(5.0, Color::BLACK),
        }
    );
    let DrawCommand::FillTriangle { points, fill } = &tail[2] else {
        panic!("expected a filled arrow head");
    };
    assert_eq!(*fill, Color::BLACK);
    assert_eq!(points[1], Point::new(200.0, 594.0));
    for (corner, y) in [(points[0], 604.0), (points[2], 584.0)] {
        assert!((corner.x - 200.0).abs() < 1e-9);
        assert!((corner.y - y).abs() < 1e-9);
    }
}

#[test]
fn labelled_series_get_a_legend_and_title_is_drawn() {
    let mut chart = LineChart::new()
        .with_style(ChartStyle::default().with_title("Throughput"))
        .with_series(diagonal("requests"));
    let recorder = draw(&mut chart);
    let commands = recorder.commands();

    assert!(commands.iter().any(|command| matches!(
        command,
        DrawCommand::FillStrokeRect { fill, .. } if *fill == Color::TRANSLUCENT_WHITE
    )));
    let texts: Vec<&str> = commands
        .iter()
        .filter_map(|command| match command {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
        .collect();
    assert!(texts.contains(&"Throughput"));
    assert!(texts.contains(&"requests"));
    assert!(texts.contains(&"10"));
}

#[test]
fn unlabelled_series_draw_no_legend() {
    let mut chart = LineChart::new().with_series(diagonal(""));
    let recorder = draw(&mut chart);

    assert!(
        !recorder
            .commands()
            .iter()
            .any(|command| matches!(command, DrawCommand::FillStrokeRect { .. }))
    );
}

#[test]
fn chart_in_a_stack_slot_maps_into_that_slot() {
    let mut subplot = SubPlot::new(StackPattern::Vertical)
        .with_plot(LineChart::new().with_series(diagonal("bottom")))
        .with_plot(LineChart::new().with_series(diagonal("top")));
    let mut recorder = RecordingRenderer::new(1000.0, 660.0);

    subplot
        .draw_and_output(&mut recorder, "stacked")
        .expect("draw");

    let points: Vec<Vec<Point>> = polylines(&recorder)
        .into_iter()
        .map(|command| match command {
            DrawCommand::Polyline { points, .. } => points.clone(),
            _ => unreachable!(),
        })
        .collect();
    assert_eq!(
        points,
        vec![
            vec![Point::new(100.0, 627.0), Point::new(900.0, 363.0)],
            vec![Point::new(100.0, 297.0), Point::new(900.0, 33.0)],
        ]
    );
    assert_eq!(recorder.flush_count(), 1);
}
