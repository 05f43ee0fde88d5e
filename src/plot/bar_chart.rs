use serde::{Deserialize, Serialize};

use crate::core::{LegendEntry, LinearScale, Marker, PlotMarkers, Rect, extent};
use crate::error::{PlotError, PlotResult};
use crate::layout::Annotation;
use crate::plot::{ChartStyle, Plot};
use crate::render::{Color, DrawContext, HatchPattern};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BarOrientation {
    /// Bars grow along y from the zero line.
    #[default]
    Vertical,
    /// Bars grow along x from the zero line.
    Horizontal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub category: String,
    pub value: f64,
}

impl Bar {
    #[must_use]
    pub fn new(category: impl Into<String>, value: f64) -> Self {
        Self {
            category: category.into(),
            value,
        }
    }
}

/// Categorical bar chart.
///
/// Each category gets an equal band along the category axis; the bar fills
/// `1 - spacing` of its band, centered.
#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    bars: Vec<Bar>,
    pub label: String,
    pub color: Color,
    pub hatch: HatchPattern,
    pub orientation: BarOrientation,
    /// Fraction of each band left empty, in `[0, 1)`.
    pub spacing: f64,
    annotations: Vec<Annotation>,
    style: ChartStyle,
}

impl Default for BarChart {
    fn default() -> Self {
        Self {
            bars: Vec::new(),
            label: String::new(),
            color: Color::ORANGE,
            hatch: HatchPattern::None,
            orientation: BarOrientation::Vertical,
            spacing: 0.2,
            annotations: Vec::new(),
            style: ChartStyle::default(),
        }
    }
}

impl BarChart {
    #[must_use]
    pub fn new(bars: Vec<Bar>) -> Self {
        Self {
            bars,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub fn with_hatch(mut self, hatch: HatchPattern) -> Self {
        self.hatch = hatch;
        self
    }

    #[must_use]
    pub fn with_orientation(mut self, orientation: BarOrientation) -> Self {
        self.orientation = orientation;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: ChartStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_annotation(mut self, annotation: impl Into<Annotation>) -> Self {
        self.annotations.push(annotation.into());
        self
    }

    #[must_use]
    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    pub fn push(&mut self, bar: Bar) {
        self.bars.push(bar);
    }

    fn validate(&self) -> PlotResult<()> {
        if self.bars.is_empty() {
            return Err(PlotError::InvalidData("bar chart has no bars".to_owned()));
        }
        if let Some(bar) = self.bars.iter().find(|bar| !bar.value.is_finite()) {
            return Err(PlotError::InvalidData(format!(
                "bar `{}` has a non-finite value",
                bar.category
            )));
        }
        if !self.spacing.is_finite() || !(0.0..1.0).contains(&self.spacing) {
            return Err(PlotError::InvalidData(
                "bar spacing must be in [0, 1)".to_owned(),
            ));
        }
        self.color.validate()?;
        self.style.validate()
    }

    /// Rects of every bar in graph-relative coordinates for a graph of
    /// `category_length` along the category axis, plus the value scale.
    fn bar_rects(&self, category_length: f64, value_length: f64) -> PlotResult<(Vec<Rect>, LinearScale)> {
        // The zero line is always inside the value domain.
        let values = self.bars.iter().map(|bar| bar.value).chain([0.0]);
        let value_scale = LinearScale::fit(values, 0.0, value_length)?;
        let zero = value_scale.map(0.0)?;

        let band = category_length / self.bars.len() as f64;
        let thickness = band * (1.0 - self.spacing);
        let rects = self
            .bars
            .iter()
            .enumerate()
            .map(|(index, bar)| -> PlotResult<Rect> {
                let start = index as f64 * band + (band - thickness) / 2.0;
                let end = value_scale.map(bar.value)?;
                Ok(match self.orientation {
                    BarOrientation::Vertical => Rect::from_xywh(start, zero, thickness, end - zero),
                    BarOrientation::Horizontal => {
                        Rect::from_xywh(zero, start, end - zero, thickness)
                    }
                })
            })
            .collect::<PlotResult<Vec<_>>>()?;
        Ok((rects, value_scale))
    }

    fn category_markers(&self, category_length: f64) -> Vec<Marker> {
        let band = category_length / self.bars.len() as f64;
        self.bars
            .iter()
            .enumerate()
            .map(|(index, bar)| Marker::new((index as f64 + 0.5) * band, bar.category.clone()))
            .collect()
    }
}

impl Plot for BarChart {
    fn draw_graph(&mut self, ctx: &mut DrawContext<'_>) -> PlotResult<()> {
        self.validate()?;
        let dimensions = ctx.plot_dimensions();
        let (category_length, value_length) = match self.orientation {
            BarOrientation::Vertical => (dimensions.graph_width(), dimensions.graph_height()),
            BarOrientation::Horizontal => (dimensions.graph_height(), dimensions.graph_width()),
        };
        let (rects, value_scale) = self.bar_rects(category_length, value_length)?;

        let value_markers = PlotMarkers::axis(value_scale, self.style.marker_count);
        let category_markers = self.category_markers(category_length);
        let mut layout = self.style.graph_layout();
        layout.markers = match self.orientation {
            BarOrientation::Vertical => PlotMarkers {
                x: category_markers,
                y: value_markers,
                y2: Vec::new(),
            },
            BarOrientation::Horizontal => PlotMarkers {
                x: value_markers,
                y: category_markers,
                y2: Vec::new(),
            },
        };
        if !self.label.is_empty() {
            layout.legend_entries = vec![LegendEntry::new(self.label.clone(), self.color)];
        }
        layout.annotations.clone_from(&self.annotations);

        tracing::debug!(
            bars = rects.len(),
            value_extent = ?extent(self.bars.iter().map(|bar| bar.value)),
            "bar chart geometry computed"
        );

        let plan = layout.plan(ctx);
        layout.draw_background(&plan, ctx)?;
        for rect in rects {
            ctx.draw_solid_rect(rect, self.color, self.hatch, true)?;
        }
        layout.draw_foreground(&plan, ctx)
    }
}
