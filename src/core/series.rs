use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

use crate::core::geometry::Point;
use crate::core::scale::{LinearScale, extent};
use crate::error::{PlotError, PlotResult};
use crate::render::{Color, ColorGradient};

/// How a series gradient picks the stop for each point.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GradientMode {
    /// Linear in the point index.
    #[default]
    Index,
    /// Linear in a numeric projection of the data point, between the
    /// smallest and largest projected value of the series.
    Projection(fn(Point) -> f64),
}

/// One named sequence of data points.
///
/// `points` are in data space. `scaled_points` holds the same points mapped
/// into graph-relative pixel space by the last [`Series::scale_points`]
/// call; both sequences always have the same length and order. Until the
/// first projection `scaled_points` is a copy of `points`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "SeriesRecord")]
pub struct Series {
    pub label: String,
    points: Vec<Point>,
    #[serde(skip_serializing)]
    scaled_points: Vec<Point>,
    pub color: Color,
    pub gradient: Option<ColorGradient>,
    #[serde(skip_serializing)]
    gradient_mode: GradientMode,
}

/// Serialized form of a [`Series`]; projections are rebuilt on load.
#[derive(Deserialize)]
struct SeriesRecord {
    label: String,
    points: Vec<Point>,
    color: Color,
    #[serde(default)]
    gradient: Option<ColorGradient>,
}

impl From<SeriesRecord> for Series {
    fn from(record: SeriesRecord) -> Self {
        let mut series = Self::new(record.label, record.points, record.color);
        series.gradient = record.gradient;
        series
    }
}

impl Series {
    #[must_use]
    pub fn new(label: impl Into<String>, points: Vec<Point>, color: Color) -> Self {
        Self {
            label: label.into(),
            scaled_points: points.clone(),
            points,
            color,
            gradient: None,
            gradient_mode: GradientMode::Index,
        }
    }

    /// Builds a series from parallel `x` / `y` slices.
    pub fn from_xy(label: impl Into<String>, x: &[f64], y: &[f64], color: Color) -> PlotResult<Self> {
        if x.len() != y.len() {
            return Err(PlotError::InvalidData(format!(
                "x and y must have the same length (got {} and {})",
                x.len(),
                y.len()
            )));
        }
        let points = x.iter().zip(y).map(|(x, y)| Point::new(*x, *y)).collect();
        Ok(Self::new(label, points, color))
    }

    /// Colors points along a gradient instead of the single series color.
    #[must_use]
    pub fn with_gradient(mut self, gradient: ColorGradient) -> Self {
        self.gradient = Some(gradient);
        self
    }

    /// Colors points along `gradient` by `projection` of each data point
    /// instead of by index.
    #[must_use]
    pub fn with_gradient_projection(
        mut self,
        gradient: ColorGradient,
        projection: fn(Point) -> f64,
    ) -> Self {
        self.gradient = Some(gradient);
        self.gradient_mode = GradientMode::Projection(projection);
        self
    }

    #[must_use]
    pub fn gradient_mode(&self) -> GradientMode {
        self.gradient_mode
    }

    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Replaces the data points. Scaled points are reset to a copy of the new
    /// points until the next [`Series::scale_points`].
    pub fn set_points(&mut self, points: Vec<Point>) {
        self.scaled_points.clone_from(&points);
        self.points = points;
    }

    #[must_use]
    pub fn scaled_points(&self) -> &[Point] {
        &self.scaled_points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn validate(&self) -> PlotResult<()> {
        if let Some(index) = self.points.iter().position(|point| !point.is_finite()) {
            return Err(PlotError::InvalidData(format!(
                "series `{}` has a non-finite point at index {index}",
                self.label
            )));
        }
        self.color.validate()
    }

    #[must_use]
    pub fn x_extent(&self) -> Option<(f64, f64)> {
        extent(self.points.iter().map(|point| point.x))
    }

    #[must_use]
    pub fn y_extent(&self) -> Option<(f64, f64)> {
        extent(self.points.iter().map(|point| point.y))
    }

    /// Recomputes `scaled_points` from `points` with the given scales.
    pub fn scale_points(&mut self, x_scale: LinearScale, y_scale: LinearScale) -> PlotResult<()> {
        self.scaled_points = project_points(&self.points, x_scale, y_scale)?;
        Ok(())
    }

    /// Color of point `index`: the gradient stop for that point when a
    /// gradient is set, the series color otherwise.
    #[must_use]
    pub fn color_at(&self, index: usize) -> Color {
        match (self.gradient, self.gradient_mode) {
            (None, _) => self.color,
            (Some(gradient), GradientMode::Index) => gradient.at_index(index, self.points.len()),
            (Some(gradient), GradientMode::Projection(projection)) => {
                let (min, max) = self.projected_range(projection);
                self.points.get(index).map_or(gradient.start, |point| {
                    gradient.at_value(projection(*point), min, max)
                })
            }
        }
    }

    /// Colors of every point, resolving the projection range once.
    #[must_use]
    pub fn point_colors(&self) -> Vec<Color> {
        match (self.gradient, self.gradient_mode) {
            (None, _) => vec![self.color; self.points.len()],
            (Some(gradient), GradientMode::Index) => (0..self.points.len())
                .map(|index| gradient.at_index(index, self.points.len()))
                .collect(),
            (Some(gradient), GradientMode::Projection(projection)) => {
                let (min, max) = self.projected_range(projection);
                self.points
                    .iter()
                    .map(|point| gradient.at_value(projection(*point), min, max))
                    .collect()
            }
        }
    }

    fn projected_range(&self, projection: fn(Point) -> f64) -> (f64, f64) {
        extent(self.points.iter().map(|point| projection(*point))).unwrap_or((0.0, 0.0))
    }
}

/// Maps data points into pixel space, preserving count and order.
pub fn project_points(
    points: &[Point],
    x_scale: LinearScale,
    y_scale: LinearScale,
) -> PlotResult<Vec<Point>> {
    let project = |point: &Point| -> PlotResult<Point> {
        Ok(Point::new(x_scale.map(point.x)?, y_scale.map(point.y)?))
    };

    #[cfg(feature = "parallel-projection")]
    {
        points.par_iter().map(project).collect()
    }

    #[cfg(not(feature = "parallel-projection"))]
    {
        points.iter().map(project).collect()
    }
}
