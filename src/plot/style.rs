use serde::{Deserialize, Serialize};

use crate::core::{Grid, PlotBorder, PlotLabel, PlotLegend, PlotTitle};
use crate::error::{PlotError, PlotResult};
use crate::layout::GraphLayout;
use crate::render::Color;

/// Appearance shared by the chart types.
///
/// Every field has a default, so partial JSON documents are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartStyle {
    pub title: PlotTitle,
    pub labels: PlotLabel,
    pub legend: PlotLegend,
    pub border: PlotBorder,
    pub grid: Grid,
    pub marker_text_size: f64,
    /// Upper bound on markers per axis.
    pub marker_count: usize,
    pub line_thickness: f64,
    pub background: Color,
    pub graph_background: Option<Color>,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            title: PlotTitle::default(),
            labels: PlotLabel::default(),
            legend: PlotLegend::default(),
            border: PlotBorder::default(),
            grid: Grid::default(),
            marker_text_size: 12.0,
            marker_count: 10,
            line_thickness: 1.5,
            background: Color::WHITE,
            graph_background: None,
        }
    }
}

impl ChartStyle {
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title.title = title.into();
        self
    }

    #[must_use]
    pub fn with_labels(mut self, x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        self.labels.x_label = x_label.into();
        self.labels.y_label = y_label.into();
        self
    }

    /// Label of the secondary y axis, drawn on the right edge.
    #[must_use]
    pub fn with_y2_label(mut self, y2_label: impl Into<String>) -> Self {
        self.labels.y2_label = y2_label.into();
        self
    }

    #[must_use]
    pub fn with_legend(mut self, legend: PlotLegend) -> Self {
        self.legend = legend;
        self
    }

    #[must_use]
    pub fn with_border(mut self, border: PlotBorder) -> Self {
        self.border = border;
        self
    }

    #[must_use]
    pub fn with_grid(mut self, grid: Grid) -> Self {
        self.grid = grid;
        self
    }

    #[must_use]
    pub fn with_marker_text_size(mut self, size: f64) -> Self {
        self.marker_text_size = size;
        self
    }

    #[must_use]
    pub fn with_marker_count(mut self, count: usize) -> Self {
        self.marker_count = count;
        self
    }

    #[must_use]
    pub fn with_line_thickness(mut self, thickness: f64) -> Self {
        self.line_thickness = thickness;
        self
    }

    #[must_use]
    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    pub fn validate(&self) -> PlotResult<()> {
        for (name, value) in [
            ("title size", self.title.size),
            ("label size", self.labels.size),
            ("legend text size", self.legend.text_size),
            ("marker text size", self.marker_text_size),
            ("line thickness", self.line_thickness),
            ("border thickness", self.border.thickness),
            ("grid thickness", self.grid.thickness),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(PlotError::InvalidData(format!(
                    "{name} must be finite and >= 0"
                )));
            }
        }
        if self.marker_count < 2 {
            return Err(PlotError::InvalidData(
                "marker count must be >= 2".to_owned(),
            ));
        }
        self.background.validate()?;
        self.border.color.validate()?;
        self.grid.color.validate()
    }

    pub fn from_json_str(json: &str) -> PlotResult<Self> {
        let style: Self = serde_json::from_str(json)
            .map_err(|err| PlotError::InvalidData(format!("invalid chart style json: {err}")))?;
        style.validate()?;
        Ok(style)
    }

    pub fn to_json_string(&self) -> PlotResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|err| PlotError::InvalidData(format!("failed to serialize chart style: {err}")))
    }

    /// Graph layout carrying this style's titles and chrome. Markers and
    /// legend entries are filled in by the chart.
    #[must_use]
    pub fn graph_layout(&self) -> GraphLayout {
        let mut layout = GraphLayout::with_titles(&self.title, &self.labels);
        layout.background = self.background;
        layout.graph_background = self.graph_background;
        layout.marker_text_size = self.marker_text_size;
        layout.border = self.border;
        layout.grid = self.grid;
        layout.legend = self.legend;
        layout
    }
}
