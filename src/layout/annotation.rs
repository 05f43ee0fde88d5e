use serde::{Deserialize, Serialize};

use crate::core::Point;
use crate::error::PlotResult;
use crate::render::{Color, DrawContext, Stroke, TextStyle};

/// Free-standing decoration drawn over a finished graph.
///
/// Annotations take no layout space. Their coordinates are graph-relative
/// pixels (origin at the graph area's bottom-left corner, y up).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Annotation {
    Text(TextAnnotation),
    Arrow(Arrow),
}

impl Annotation {
    pub fn draw(&self, ctx: &mut DrawContext<'_>) -> PlotResult<()> {
        match self {
            Self::Text(text) => text.draw(ctx),
            Self::Arrow(arrow) => arrow.draw(ctx),
        }
    }
}

impl From<TextAnnotation> for Annotation {
    fn from(text: TextAnnotation) -> Self {
        Self::Text(text)
    }
}

impl From<Arrow> for Annotation {
    fn from(arrow: Arrow) -> Self {
        Self::Arrow(arrow)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextAnnotation {
    pub text: String,
    /// Left end of the text baseline.
    pub location: Point,
    pub color: Color,
    pub size: f64,
}

impl TextAnnotation {
    #[must_use]
    pub fn new(text: impl Into<String>, location: Point) -> Self {
        Self {
            text: text.into(),
            location,
            color: Color::BLACK,
            size: 15.0,
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    fn draw(&self, ctx: &mut DrawContext<'_>) -> PlotResult<()> {
        ctx.draw_text(
            &self.text,
            self.location,
            TextStyle::new(self.size, self.color),
            0.0,
            true,
        )
    }
}

/// Straight arrow from `start` to a head at `end`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arrow {
    pub start: Point,
    pub end: Point,
    pub color: Color,
    pub stroke_width: f64,
    pub head_length: f64,
    /// Half-angle of the head in degrees.
    pub head_angle: f64,
    pub dashed: bool,
    pub filled: bool,
}

impl Arrow {
    #[must_use]
    pub fn new(start: Point, end: Point) -> Self {
        Self {
            start,
            end,
            color: Color::BLACK,
            stroke_width: 5.0,
            head_length: 10.0,
            head_angle: 20.0,
            dashed: false,
            filled: false,
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub fn with_head(mut self, length: f64, angle: f64) -> Self {
        self.head_length = length;
        self.head_angle = angle;
        self
    }

    #[must_use]
    pub fn dashed(mut self) -> Self {
        self.dashed = true;
        self
    }

    #[must_use]
    pub fn filled(mut self) -> Self {
        self.filled = true;
        self
    }

    /// The two outer corners of the head. Each lies `head_length` from `end`,
    /// turned `head_angle` to either side of the shaft.
    #[must_use]
    pub fn head_points(&self) -> [Point; 2] {
        let back = (self.start.y - self.end.y).atan2(self.start.x - self.end.x);
        let spread = self.head_angle.to_radians();
        [back + spread, back - spread].map(|angle| {
            self.end + Point::new(self.head_length * angle.cos(), self.head_length * angle.sin())
        })
    }

    fn draw(&self, ctx: &mut DrawContext<'_>) -> PlotResult<()> {
        let shaft = if self.dashed {
            Stroke::dashed(self.stroke_width, self.color)
        } else {
            Stroke::solid(self.stroke_width, self.color)
        };
        ctx.draw_line(self.start, self.end, shaft, true)?;

        let [left, right] = self.head_points();
        if self.filled {
            ctx.draw_solid_triangle([left, self.end, right], self.color, true)
        } else {
            ctx.draw_plot_lines(
                &[left, self.end, right],
                Stroke::solid(self.stroke_width, self.color),
                true,
            )
        }
    }
}
