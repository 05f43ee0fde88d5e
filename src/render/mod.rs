mod context;
mod export;
mod null_renderer;
mod primitives;
mod recording;
mod svg_backend;

pub use context::DrawContext;
pub use export::base64_image;
pub use null_renderer::{NullRenderStats, NullRenderer};
pub use primitives::{Color, ColorGradient, HatchPattern, Stroke, TextStyle};
pub use recording::{DrawCommand, RecordingRenderer};
pub use svg_backend::SvgRenderer;

use serde::{Deserialize, Serialize};

use crate::core::{Point, Rect, Size};
use crate::error::{PlotError, PlotResult};

/// Operation set every drawing backend implements.
///
/// Backends work in absolute pixel space: the origin is the top-left corner
/// of the surface, y grows downward and a `Rect` origin is its top-left
/// corner with a non-negative size. Offsets, the graph-origin shift and the
/// y-axis flip are applied by [`DrawContext`] before a backend is called, so
/// every backend receives identical coordinates for the same chart.
///
/// Angles are in degrees, counter-clockwise as seen on the image. Text
/// `location` is the left end of the baseline.
pub trait Renderer {
    fn backend_name(&self) -> &'static str;

    /// Current drawing surface size in pixels.
    fn surface_size(&self) -> Size;

    /// Reallocates the drawing surface. Called before any primitive whenever
    /// the frame size changes.
    fn resize(&mut self, width: f64, height: f64) -> PlotResult<()>;

    /// Outline only; the interior is left untouched.
    fn stroke_rect(&mut self, rect: Rect, stroke: Stroke) -> PlotResult<()>;

    /// Solid fill, then `hatch` drawn over it.
    fn fill_rect(&mut self, rect: Rect, fill: Color, hatch: HatchPattern) -> PlotResult<()>;

    fn fill_stroke_rect(&mut self, rect: Rect, fill: Color, stroke: Stroke) -> PlotResult<()>;

    fn fill_circle(&mut self, center: Point, radius: f64, fill: Color) -> PlotResult<()>;

    fn fill_ellipse(
        &mut self,
        center: Point,
        radius_x: f64,
        radius_y: f64,
        fill: Color,
    ) -> PlotResult<()>;

    fn fill_triangle(&mut self, points: [Point; 3], fill: Color) -> PlotResult<()> {
        self.fill_polygon(&points, fill)
    }

    /// Fills the closed polygon through `points`. Fewer than three points
    /// are a no-op.
    fn fill_polygon(&mut self, points: &[Point], fill: Color) -> PlotResult<()>;

    fn line(&mut self, from: Point, to: Point, stroke: Stroke) -> PlotResult<()>;

    /// Connected segments through `points` in order.
    fn polyline(&mut self, points: &[Point], stroke: Stroke) -> PlotResult<()>;

    fn text(&mut self, text: &str, location: Point, style: TextStyle, angle: f64)
    -> PlotResult<()>;

    /// Extent of `text` laid out horizontally at `size`.
    fn text_extent(&self, text: &str, size: f64) -> Size;

    /// Encodes the current surface into the backend's image format.
    fn encode_image(&mut self) -> PlotResult<Vec<u8>>;

    /// Writes the image to `output`. The identifier is backend-defined and
    /// is not interpreted by the engine.
    fn flush(&mut self, output: &str) -> PlotResult<()>;
}

/// Backend choices available to [`create_renderer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BackendKind {
    Null,
    Recording,
    Svg,
    Cairo,
}

impl BackendKind {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Recording => "recording",
            Self::Svg => "svg",
            Self::Cairo => "cairo",
        }
    }

    /// Whether this build can construct the backend.
    #[must_use]
    pub const fn is_available(self) -> bool {
        match self {
            Self::Null | Self::Recording | Self::Svg => true,
            Self::Cairo => cfg!(feature = "cairo-backend"),
        }
    }
}

/// Constructs a backend with a `width × height` surface.
///
/// Fails with `BackendUnsupported` before allocating anything when the
/// backend is not compiled into this build.
pub fn create_renderer(kind: BackendKind, width: f64, height: f64) -> PlotResult<Box<dyn Renderer>> {
    if !kind.is_available() {
        return Err(PlotError::BackendUnsupported(kind.name()));
    }
    validate_surface_size(width, height)?;

    let renderer: Box<dyn Renderer> = match kind {
        BackendKind::Null => Box::new(NullRenderer::new(width, height)),
        BackendKind::Recording => Box::new(RecordingRenderer::new(width, height)),
        BackendKind::Svg => Box::new(SvgRenderer::new(width, height)),
        #[cfg(feature = "cairo-backend")]
        BackendKind::Cairo => Box::new(CairoRenderer::new(width, height)?),
        #[cfg(not(feature = "cairo-backend"))]
        BackendKind::Cairo => return Err(PlotError::BackendUnsupported(kind.name())),
    };
    tracing::debug!(backend = kind.name(), width, height, "renderer created");
    Ok(renderer)
}

/// Average glyph advance as a fraction of the font size, used by backends
/// without real font metrics.
const ESTIMATED_ADVANCE_RATIO: f64 = 0.55;

/// Font-independent text extent estimate shared by the metric-less backends.
#[must_use]
pub fn estimate_text_extent(text: &str, size: f64) -> Size {
    let advance: f64 = text
        .chars()
        .map(|ch| match ch {
            'i' | 'j' | 'l' | '.' | ',' | ':' | ';' | '\'' | '|' | '!' => 0.5,
            'm' | 'w' | 'M' | 'W' | '@' => 1.5,
            ch if ch.is_whitespace() => 0.6,
            _ => 1.0,
        })
        .sum();
    Size::new(advance * size * ESTIMATED_ADVANCE_RATIO, size)
}

pub(crate) fn validate_surface_size(width: f64, height: f64) -> PlotResult<()> {
    if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
        return Err(PlotError::InvalidFrame { width, height });
    }
    Ok(())
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};
