#![cfg(feature = "cairo-backend")]

use cairo::{Context, Format, ImageSurface};
use plotframe::core::{Series, Size};
use plotframe::plot::{Bar, BarChart, ChartStyle, LineChart, Plot};
use plotframe::render::{
    CairoContextRenderer, CairoRenderer, Color, HatchPattern, Renderer, base64_image,
};
use plotframe::PlotError;

fn chart() -> LineChart {
    let series = Series::from_xy("cpu", &[0.0, 1.0, 2.0, 3.0], &[10.0, 40.0, 25.0, 30.0], Color::RED)
        .expect("series");
    LineChart::new()
        .with_style(ChartStyle::default().with_title("CPU").with_labels("t", "%"))
        .with_series(series)
}

#[test]
fn cairo_renderer_rejects_invalid_surface_size() {
    let err = CairoRenderer::new(0.0, 480.0).expect_err("invalid width must fail");
    assert!(matches!(err, PlotError::InvalidFrame { .. }));
}

#[test]
fn chart_draw_produces_shapes_lines_and_text() {
    let mut renderer = CairoRenderer::new(1000.0, 660.0).expect("renderer");
    let mut ctx = plotframe::render::DrawContext::new(
        &mut renderer,
        plotframe::core::PlotDimensions::default(),
    )
    .expect("context");
    let mut chart = chart();
    chart.draw_graph(&mut ctx).expect("draw");
    drop(ctx);

    let stats = renderer.stats();
    assert!(stats.shapes_drawn > 0);
    assert!(stats.lines_drawn > 0);
    assert!(stats.texts_drawn >= 3);
}

#[test]
fn encoded_image_is_png() {
    let mut renderer = CairoRenderer::new(320.0, 200.0).expect("renderer");
    let mut bars = BarChart::new(vec![Bar::new("a", 1.0), Bar::new("b", 2.0)])
        .with_hatch(HatchPattern::HollowCircle);
    let mut ctx = plotframe::render::DrawContext::new(
        &mut renderer,
        plotframe::core::PlotDimensions::new(320.0, 200.0),
    )
    .expect("context");
    bars.draw_graph(&mut ctx).expect("draw");
    drop(ctx);

    let png = renderer.encode_image().expect("png");
    assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
    assert!(!base64_image(&mut renderer).expect("base64").is_empty());
}

#[test]
fn context_resizes_the_surface_to_the_frame() {
    let mut renderer = CairoRenderer::new(100.0, 100.0).expect("renderer");
    let mut chart = chart();
    let output = std::env::temp_dir().join(format!("plotframe-cairo-{}", std::process::id()));
    let output = output.to_string_lossy().into_owned();

    chart
        .draw_graph_and_output(&mut renderer, Size::new(640.0, 480.0), &output)
        .expect("draw and flush");

    assert_eq!(renderer.surface_size(), Size::new(640.0, 480.0));
    let path = format!("{output}.png");
    assert!(std::path::Path::new(&path).exists());
    std::fs::remove_file(path).expect("cleanup");
}

#[test]
fn image_can_be_painted_on_an_external_context() {
    let mut renderer = CairoRenderer::new(200.0, 100.0).expect("renderer");
    renderer.set_clear_color(Color::LIGHT_BLUE).expect("clear color");

    let surface = ImageSurface::create(Format::ARgb32, 200, 100).expect("surface");
    let context = Context::new(&surface).expect("context");
    renderer
        .paint_on_cairo_context(&context)
        .expect("paint on context");
    assert_eq!(renderer.clear_color(), Color::LIGHT_BLUE);
}
