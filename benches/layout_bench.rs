use criterion::{Criterion, criterion_group, criterion_main};
use plotframe::core::{PlotDimensions, Point, Series, Size};
use plotframe::plot::{ChartStyle, LineChart, Plot, StackPattern, SubPlot};
use plotframe::render::{Color, DrawContext, NullRenderer};
use std::hint::black_box;

fn sine_series(len: usize) -> Series {
    let points = (0..len)
        .map(|i| {
            let x = i as f64 * 0.01;
            Point::new(x, x.sin())
        })
        .collect();
    Series::new("sine", points, Color::BLUE)
}

fn bench_grid_slot_planning(c: &mut Criterion) {
    let mut subplot = SubPlot::new(StackPattern::Grid {
        rows: 8,
        columns: 8,
    });
    for _ in 0..64 {
        subplot.push(LineChart::new().with_series(sine_series(4)));
    }

    c.bench_function("grid_slot_planning_8x8", |b| {
        b.iter(|| {
            let _ = subplot
                .plan_slots(black_box(Size::new(1920.0, 1080.0)))
                .expect("grid fits");
        })
    });
}

fn bench_graph_layout_plan(c: &mut Criterion) {
    let layout = ChartStyle::default()
        .with_title("Throughput")
        .with_labels("time", "requests")
        .graph_layout();
    let mut renderer = NullRenderer::new(1000.0, 660.0);
    let ctx = DrawContext::new(&mut renderer, PlotDimensions::default()).expect("context");

    c.bench_function("graph_layout_plan", |b| {
        b.iter(|| {
            let _ = layout.plan(black_box(&ctx));
        })
    });
}

fn bench_line_chart_10k_draw(c: &mut Criterion) {
    let mut chart = LineChart::new()
        .with_style(ChartStyle::default().with_title("sine"))
        .with_series(sine_series(10_000));
    let mut renderer = NullRenderer::new(1000.0, 660.0);

    c.bench_function("line_chart_10k_draw", |b| {
        b.iter(|| {
            let mut ctx =
                DrawContext::new(&mut renderer, PlotDimensions::default()).expect("context");
            chart.draw_graph(&mut ctx).expect("draw");
        })
    });
}

fn bench_nested_subplot_draw(c: &mut Criterion) {
    let inner = SubPlot::new(StackPattern::Vertical)
        .with_plot(LineChart::new().with_series(sine_series(500)))
        .with_plot(LineChart::new().with_series(sine_series(500)));
    let mut outer = SubPlot::new(StackPattern::Horizontal)
        .with_plot(LineChart::new().with_series(sine_series(500)))
        .with_plot(inner);
    let mut renderer = NullRenderer::new(1000.0, 660.0);

    c.bench_function("nested_subplot_draw", |b| {
        b.iter(|| {
            outer
                .draw_and_output(&mut renderer, black_box("bench"))
                .expect("draw");
        })
    });
}

criterion_group!(
    benches,
    bench_grid_slot_planning,
    bench_graph_layout_plan,
    bench_line_chart_10k_draw,
    bench_nested_subplot_draw
);
criterion_main!(benches);
