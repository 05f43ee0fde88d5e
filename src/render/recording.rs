use serde::{Deserialize, Serialize};

use crate::core::{Point, Rect, Size};
use crate::error::PlotResult;
use crate::render::{
    Color, HatchPattern, Renderer, Stroke, TextStyle, estimate_text_extent, validate_surface_size,
};

/// One backend call captured by [`RecordingRenderer`], in pixel space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    Resize {
        width: f64,
        height: f64,
    },
    StrokeRect {
        rect: Rect,
        stroke: Stroke,
    },
    FillRect {
        rect: Rect,
        fill: Color,
        hatch: HatchPattern,
    },
    FillStrokeRect {
        rect: Rect,
        fill: Color,
        stroke: Stroke,
    },
    FillCircle {
        center: Point,
        radius: f64,
        fill: Color,
    },
    FillEllipse {
        center: Point,
        radius_x: f64,
        radius_y: f64,
        fill: Color,
    },
    FillTriangle {
        points: [Point; 3],
        fill: Color,
    },
    FillPolygon {
        points: Vec<Point>,
        fill: Color,
    },
    Line {
        from: Point,
        to: Point,
        stroke: Stroke,
    },
    Polyline {
        points: Vec<Point>,
        stroke: Stroke,
    },
    Text {
        text: String,
        location: Point,
        style: TextStyle,
        angle: f64,
    },
}

impl DrawCommand {
    /// Issues this command against `renderer`.
    pub fn apply(&self, renderer: &mut dyn Renderer) -> PlotResult<()> {
        match self {
            Self::Resize { width, height } => renderer.resize(*width, *height),
            Self::StrokeRect { rect, stroke } => renderer.stroke_rect(*rect, *stroke),
            Self::FillRect { rect, fill, hatch } => renderer.fill_rect(*rect, *fill, *hatch),
            Self::FillStrokeRect { rect, fill, stroke } => {
                renderer.fill_stroke_rect(*rect, *fill, *stroke)
            }
            Self::FillCircle {
                center,
                radius,
                fill,
            } => renderer.fill_circle(*center, *radius, *fill),
            Self::FillEllipse {
                center,
                radius_x,
                radius_y,
                fill,
            } => renderer.fill_ellipse(*center, *radius_x, *radius_y, *fill),
            Self::FillTriangle { points, fill } => renderer.fill_triangle(*points, *fill),
            Self::FillPolygon { points, fill } => renderer.fill_polygon(points, *fill),
            Self::Line { from, to, stroke } => renderer.line(*from, *to, *stroke),
            Self::Polyline { points, stroke } => renderer.polyline(points, *stroke),
            Self::Text {
                text,
                location,
                style,
                angle,
            } => renderer.text(text, *location, *style, *angle),
        }
    }
}

/// Backend that records every call as a [`DrawCommand`].
///
/// The log can be serialized with serde or replayed into a real backend
/// later.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    size: Size,
    commands: Vec<DrawCommand>,
    outputs: Vec<String>,
}

impl RecordingRenderer {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            size: Size::new(width, height),
            commands: Vec::new(),
            outputs: Vec::new(),
        }
    }

    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Output identifiers passed to `flush`, in call order.
    #[must_use]
    pub fn outputs(&self) -> &[String] {
        &self.outputs
    }

    #[must_use]
    pub fn flush_count(&self) -> usize {
        self.outputs.len()
    }

    /// Drops recorded commands and outputs, keeping the surface size.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.outputs.clear();
    }

    /// Re-issues the recorded commands, in order, against `target`.
    ///
    /// `target` is resized to this recorder's surface first. Flushes are not
    /// replayed; the caller flushes `target` when it is ready.
    pub fn replay(&self, target: &mut dyn Renderer) -> PlotResult<()> {
        if target.surface_size() != self.size {
            target.resize(self.size.width, self.size.height)?;
        }
        for command in &self.commands {
            command.apply(target)?;
        }
        tracing::debug!(
            commands = self.commands.len(),
            target = target.backend_name(),
            "replayed recording"
        );
        Ok(())
    }

    fn record(&mut self, command: DrawCommand) -> PlotResult<()> {
        tracing::trace!(?command, "record");
        self.commands.push(command);
        Ok(())
    }
}

impl Renderer for RecordingRenderer {
    fn backend_name(&self) -> &'static str {
        "recording"
    }

    fn surface_size(&self) -> Size {
        self.size
    }

    fn resize(&mut self, width: f64, height: f64) -> PlotResult<()> {
        validate_surface_size(width, height)?;
        self.size = Size::new(width, height);
        self.record(DrawCommand::Resize { width, height })
    }

    fn stroke_rect(&mut self, rect: Rect, stroke: Stroke) -> PlotResult<()> {
        self.record(DrawCommand::StrokeRect { rect, stroke })
    }

    fn fill_rect(&mut self, rect: Rect, fill: Color, hatch: HatchPattern) -> PlotResult<()> {
        self.record(DrawCommand::FillRect { rect, fill, hatch })
    }

    fn fill_stroke_rect(&mut self, rect: Rect, fill: Color, stroke: Stroke) -> PlotResult<()> {
        self.record(DrawCommand::FillStrokeRect { rect, fill, stroke })
    }

    fn fill_circle(&mut self, center: Point, radius: f64, fill: Color) -> PlotResult<()> {
        self.record(DrawCommand::FillCircle {
            center,
            radius,
            fill,
        })
    }

    fn fill_ellipse(
        &mut self,
        center: Point,
        radius_x: f64,
        radius_y: f64,
        fill: Color,
    ) -> PlotResult<()> {
        self.record(DrawCommand::FillEllipse {
            center,
            radius_x,
            radius_y,
            fill,
        })
    }

    fn fill_triangle(&mut self, points: [Point; 3], fill: Color) -> PlotResult<()> {
        self.record(DrawCommand::FillTriangle { points, fill })
    }

    fn fill_polygon(&mut self, points: &[Point], fill: Color) -> PlotResult<()> {
        self.record(DrawCommand::FillPolygon {
            points: points.to_vec(),
            fill,
        })
    }

    fn line(&mut self, from: Point, to: Point, stroke: Stroke) -> PlotResult<()> {
        self.record(DrawCommand::Line { from, to, stroke })
    }

    fn polyline(&mut self, points: &[Point], stroke: Stroke) -> PlotResult<()> {
        self.record(DrawCommand::Polyline {
            points: points.to_vec(),
            stroke,
        })
    }

    fn text(&mut self, text: &str, location: Point, style: TextStyle, angle: f64) -> PlotResult<()> {
        self.record(DrawCommand::Text {
            text: text.to_owned(),
            location,
            style,
            angle,
        })
    }

    fn text_extent(&self, text: &str, size: f64) -> Size {
        estimate_text_extent(text, size)
    }

    /// The command log as JSON.
    fn encode_image(&mut self) -> PlotResult<Vec<u8>> {
        serde_json::to_vec(&self.commands)
            .map_err(|err| crate::error::PlotError::Export(format!("failed to encode commands: {err}")))
    }

    fn flush(&mut self, output: &str) -> PlotResult<()> {
        self.outputs.push(output.to_owned());
        Ok(())
    }
}
