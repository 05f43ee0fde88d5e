//! Plain geometry and text produced by chart types and consumed by the
//! graph layout: markers, legend, border, title, axis labels and grid.

use serde::{Deserialize, Serialize};

use crate::core::geometry::{Point, Rect, Size};
use crate::core::scale::LinearScale;
use crate::render::{Color, Stroke};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotTitle {
    pub title: String,
    pub color: Color,
    pub size: f64,
}

impl Default for PlotTitle {
    fn default() -> Self {
        Self {
            title: String::new(),
            color: Color::BLACK,
            size: 20.0,
        }
    }
}

impl PlotTitle {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotLabel {
    pub x_label: String,
    pub y_label: String,
    /// Label of the secondary y axis, placed on the right edge.
    pub y2_label: String,
    pub color: Color,
    pub size: f64,
}

impl Default for PlotLabel {
    fn default() -> Self {
        Self {
            x_label: String::new(),
            y_label: String::new(),
            y2_label: String::new(),
            color: Color::BLACK,
            size: 15.0,
        }
    }
}

impl PlotLabel {
    #[must_use]
    pub fn new(x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        Self {
            x_label: x_label.into(),
            y_label: y_label.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_y2_label(mut self, y2_label: impl Into<String>) -> Self {
        self.y2_label = y2_label.into();
        self
    }
}

/// Appearance of the legend box drawn in the top-left of the graph area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotLegend {
    pub visible: bool,
    pub text_size: f64,
    pub text_color: Color,
    pub background: Color,
    pub border: Stroke,
}

impl Default for PlotLegend {
    fn default() -> Self {
        Self {
            visible: true,
            text_size: 10.0,
            text_color: Color::BLACK,
            background: Color::TRANSLUCENT_WHITE,
            border: Stroke::solid(1.0, Color::BLACK),
        }
    }
}

impl PlotLegend {
    /// Inset of the legend box from the graph's top-left corner.
    pub const INSET: f64 = 20.0;

    /// Box size for labels whose widest text measures `max_text_width`.
    #[must_use]
    pub fn box_size(&self, max_text_width: f64, entry_count: usize) -> Size {
        Size::new(
            max_text_width + 3.5 * self.text_size,
            (entry_count as f64 * 2.0 + 1.0) * self.text_size,
        )
    }

    /// Legend rect anchored below-right of the graph's top-left corner.
    #[must_use]
    pub fn rect_in(&self, graph: Rect, size: Size) -> Rect {
        let top_left = Point::new(graph.min_x() + Self::INSET, graph.max_y() - Self::INSET);
        Rect::from_xywh(top_left.x, top_left.y - size.height, size.width, size.height)
    }
}

/// One legend row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub label: String,
    pub color: Color,
}

impl LegendEntry {
    #[must_use]
    pub fn new(label: impl Into<String>, color: Color) -> Self {
        Self {
            label: label.into(),
            color,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotBorder {
    pub thickness: f64,
    pub color: Color,
}

impl Default for PlotBorder {
    fn default() -> Self {
        Self {
            thickness: 2.0,
            color: Color::BLACK,
        }
    }
}

impl PlotBorder {
    #[must_use]
    pub fn stroke(&self) -> Stroke {
        Stroke::solid(self.thickness, self.color)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Grid {
    pub visible: bool,
    /// Horizontal lines at the secondary y-axis markers.
    pub secondary: bool,
    pub color: Color,
    pub thickness: f64,
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            visible: true,
            secondary: false,
            color: Color::GRAY,
            thickness: 0.5,
        }
    }
}

impl Grid {
    #[must_use]
    pub fn stroke(&self) -> Stroke {
        Stroke::solid(self.thickness, self.color)
    }
}

/// A tick on one axis: its graph-relative pixel position and text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub position: f64,
    pub text: String,
}

impl Marker {
    #[must_use]
    pub fn new(position: f64, text: impl Into<String>) -> Self {
        Self {
            position,
            text: text.into(),
        }
    }
}

/// Axis ticks, positions relative to the graph origin. `y2` holds the
/// ticks of the secondary y axis and stays empty for single-axis charts.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PlotMarkers {
    pub x: Vec<Marker>,
    pub y: Vec<Marker>,
    #[serde(default)]
    pub y2: Vec<Marker>,
}

impl PlotMarkers {
    /// Nice-number ticks for both scales. Ticks whose mapped position fails
    /// are skipped.
    #[must_use]
    pub fn from_scales(x_scale: LinearScale, y_scale: LinearScale, max_count: usize) -> Self {
        Self {
            x: Self::axis(x_scale, max_count),
            y: Self::axis(y_scale, max_count),
            y2: Vec::new(),
        }
    }

    /// Nice-number ticks of a single scale.
    #[must_use]
    pub fn axis(scale: LinearScale, max_count: usize) -> Vec<Marker> {
        scale
            .nice_ticks(max_count)
            .into_iter()
            .filter_map(|value| {
                scale
                    .map(value)
                    .ok()
                    .map(|position| Marker::new(position, format_marker(value)))
            })
            .collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty() && self.y.is_empty() && self.y2.is_empty()
    }
}

/// Marker text with at most two decimals and no trailing zeros.
#[must_use]
pub fn format_marker(value: f64) -> String {
    let text = format!("{value:.2}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" {
        "0".to_owned()
    } else {
        text.to_owned()
    }
}
