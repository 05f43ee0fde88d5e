use crate::core::{LegendEntry, LinearScale, PlotMarkers, Point, Series};
use crate::error::{PlotError, PlotResult};
use crate::layout::Annotation;
use crate::plot::{ChartStyle, Plot};
use crate::render::{DrawContext, Stroke};

#[derive(Debug, Clone, PartialEq)]
struct LineEntry {
    series: Series,
    dashed: bool,
}

/// Line chart over one or more series.
///
/// Primary series share the left y axis. Secondary series get their own y
/// scale with markers on the right edge and are drawn dashed. Both sets share
/// one x scale fitted over all points. Data extrema map linearly onto the
/// graph area on every draw.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LineChart {
    entries: Vec<LineEntry>,
    secondary: Vec<Series>,
    annotations: Vec<Annotation>,
    style: ChartStyle,
}

impl LineChart {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_style(mut self, style: ChartStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_series(mut self, series: Series) -> Self {
        self.add_series(series);
        self
    }

    pub fn add_series(&mut self, series: Series) {
        self.entries.push(LineEntry {
            series,
            dashed: false,
        });
    }

    pub fn add_dashed_series(&mut self, series: Series) {
        self.entries.push(LineEntry {
            series,
            dashed: true,
        });
    }

    /// Adds a series plotted against the secondary y axis.
    pub fn add_secondary_series(&mut self, series: Series) {
        self.secondary.push(series);
    }

    #[must_use]
    pub fn with_secondary_series(mut self, series: Series) -> Self {
        self.add_secondary_series(series);
        self
    }

    pub fn add_annotation(&mut self, annotation: impl Into<Annotation>) {
        self.annotations.push(annotation.into());
    }

    #[must_use]
    pub fn with_annotation(mut self, annotation: impl Into<Annotation>) -> Self {
        self.add_annotation(annotation);
        self
    }

    #[must_use]
    pub fn style(&self) -> &ChartStyle {
        &self.style
    }

    pub fn style_mut(&mut self) -> &mut ChartStyle {
        &mut self.style
    }

    pub fn series(&self) -> impl Iterator<Item = &Series> {
        self.entries.iter().map(|entry| &entry.series)
    }

    pub fn secondary_series(&self) -> impl Iterator<Item = &Series> {
        self.secondary.iter()
    }

    fn primary_points(&self) -> impl Iterator<Item = &Point> {
        self.entries
            .iter()
            .flat_map(|entry| entry.series.points().iter())
    }

    fn secondary_points(&self) -> impl Iterator<Item = &Point> {
        self.secondary.iter().flat_map(|series| series.points().iter())
    }

    fn validate(&self) -> PlotResult<()> {
        if self.entries.iter().all(|entry| entry.series.is_empty()) {
            return Err(PlotError::InvalidData(
                "line chart has no data points".to_owned(),
            ));
        }
        for series in self.series().chain(&self.secondary) {
            series.validate()?;
        }
        self.style.validate()
    }
}

impl Plot for LineChart {
    fn draw_graph(&mut self, ctx: &mut DrawContext<'_>) -> PlotResult<()> {
        self.validate()?;
        let dimensions = ctx.plot_dimensions();
        let x_scale = LinearScale::fit(
            self.primary_points()
                .chain(self.secondary_points())
                .map(|point| point.x),
            0.0,
            dimensions.graph_width(),
        )?;
        let y_scale = LinearScale::fit(
            self.primary_points().map(|point| point.y),
            0.0,
            dimensions.graph_height(),
        )?;
        let y2_scale = if self.secondary_points().next().is_some() {
            Some(LinearScale::fit(
                self.secondary_points().map(|point| point.y),
                0.0,
                dimensions.graph_height(),
            )?)
        } else {
            None
        };
        for entry in &mut self.entries {
            entry.series.scale_points(x_scale, y_scale)?;
        }
        if let Some(y2_scale) = y2_scale {
            for series in &mut self.secondary {
                series.scale_points(x_scale, y2_scale)?;
            }
        }

        let mut layout = self.style.graph_layout();
        layout.markers = PlotMarkers::from_scales(x_scale, y_scale, self.style.marker_count);
        if let Some(y2_scale) = y2_scale {
            layout.markers.y2 = PlotMarkers::axis(y2_scale, self.style.marker_count);
        }
        layout.legend_entries = self
            .series()
            .chain(&self.secondary)
            .filter(|series| !series.label.is_empty())
            .map(|series| LegendEntry::new(series.label.clone(), series.color))
            .collect();
        layout.annotations.clone_from(&self.annotations);

        tracing::debug!(
            primary = self.entries.len(),
            secondary = self.secondary.len(),
            x_domain = ?x_scale.domain(),
            "line chart scales fitted"
        );

        let plan = layout.plan(ctx);
        layout.draw_background(&plan, ctx)?;
        let lines = self
            .entries
            .iter()
            .map(|entry| (&entry.series, entry.dashed))
            .chain(self.secondary.iter().map(|series| (series, true)));
        for (series, dashed) in lines {
            draw_series(series, dashed, self.style.line_thickness, ctx)?;
        }
        layout.draw_foreground(&plan, ctx)
    }
}

fn draw_series(
    series: &Series,
    dashed: bool,
    thickness: f64,
    ctx: &mut DrawContext<'_>,
) -> PlotResult<()> {
    let stroke = |color| {
        if dashed {
            Stroke::dashed(thickness, color)
        } else {
            Stroke::solid(thickness, color)
        }
    };
    if series.gradient.is_none() {
        return ctx.draw_plot_lines(series.scaled_points(), stroke(series.color), true);
    }
    let colors = series.point_colors();
    for (pair, color) in series.scaled_points().windows(2).zip(colors) {
        ctx.draw_line(pair[0], pair[1], stroke(color), true)?;
    }
    Ok(())
}
