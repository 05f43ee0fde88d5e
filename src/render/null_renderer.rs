use crate::core::{Point, Rect, Size};
use crate::error::PlotResult;
use crate::render::{
    Color, HatchPattern, Renderer, Stroke, TextStyle, estimate_text_extent, validate_surface_size,
};

/// Primitive counters collected by [`NullRenderer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NullRenderStats {
    pub rects: usize,
    pub circles: usize,
    pub polygons: usize,
    pub lines: usize,
    pub texts: usize,
    pub resizes: usize,
    pub flushes: usize,
}

impl NullRenderStats {
    /// Every drawn primitive, flushes and resizes excluded.
    #[must_use]
    pub fn primitives(&self) -> usize {
        self.rects + self.circles + self.polygons + self.lines + self.texts
    }
}

/// No-op renderer used by tests and headless layout runs.
///
/// It still validates geometry so tests can catch non-finite coordinates
/// without a real backend.
#[derive(Debug)]
pub struct NullRenderer {
    size: Size,
    text_extent: Option<Size>,
    stats: NullRenderStats,
    last_output: Option<String>,
}

impl Default for NullRenderer {
    fn default() -> Self {
        Self::new(
            crate::core::DEFAULT_FRAME_WIDTH,
            crate::core::DEFAULT_FRAME_HEIGHT,
        )
    }
}

impl NullRenderer {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            size: Size::new(width, height),
            text_extent: None,
            stats: NullRenderStats::default(),
            last_output: None,
        }
    }

    /// Reports `extent` for every text regardless of content or size.
    #[must_use]
    pub fn with_text_extent(mut self, extent: Size) -> Self {
        self.text_extent = Some(extent);
        self
    }

    #[must_use]
    pub fn stats(&self) -> NullRenderStats {
        self.stats
    }

    #[must_use]
    pub fn last_output(&self) -> Option<&str> {
        self.last_output.as_deref()
    }
}

fn check_points(points: &[Point]) -> PlotResult<()> {
    if points.iter().all(|point| point.is_finite()) {
        Ok(())
    } else {
        Err(crate::error::PlotError::InvalidData(
            "primitive coordinates must be finite".to_owned(),
        ))
    }
}

fn check_rect(rect: Rect) -> PlotResult<()> {
    check_points(&[rect.origin, Point::new(rect.size.width, rect.size.height)])
}

impl Renderer for NullRenderer {
    fn backend_name(&self) -> &'static str {
        "null"
    }

    fn surface_size(&self) -> Size {
        self.size
    }

    fn resize(&mut self, width: f64, height: f64) -> PlotResult<()> {
        validate_surface_size(width, height)?;
        self.size = Size::new(width, height);
        self.stats.resizes += 1;
        Ok(())
    }

    fn stroke_rect(&mut self, rect: Rect, _stroke: Stroke) -> PlotResult<()> {
        check_rect(rect)?;
        self.stats.rects += 1;
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, _fill: Color, _hatch: HatchPattern) -> PlotResult<()> {
        check_rect(rect)?;
        self.stats.rects += 1;
        Ok(())
    }

    fn fill_stroke_rect(&mut self, rect: Rect, _fill: Color, _stroke: Stroke) -> PlotResult<()> {
        check_rect(rect)?;
        self.stats.rects += 1;
        Ok(())
    }

    fn fill_circle(&mut self, center: Point, _radius: f64, _fill: Color) -> PlotResult<()> {
        check_points(&[center])?;
        self.stats.circles += 1;
        Ok(())
    }

    fn fill_ellipse(
        &mut self,
        center: Point,
        _radius_x: f64,
        _radius_y: f64,
        _fill: Color,
    ) -> PlotResult<()> {
        check_points(&[center])?;
        self.stats.circles += 1;
        Ok(())
    }

    fn fill_polygon(&mut self, points: &[Point], _fill: Color) -> PlotResult<()> {
        check_points(points)?;
        if points.len() >= 3 {
            self.stats.polygons += 1;
        }
        Ok(())
    }

    fn line(&mut self, from: Point, to: Point, _stroke: Stroke) -> PlotResult<()> {
        check_points(&[from, to])?;
        self.stats.lines += 1;
        Ok(())
    }

    fn polyline(&mut self, points: &[Point], _stroke: Stroke) -> PlotResult<()> {
        check_points(points)?;
        self.stats.lines += points.len().saturating_sub(1);
        Ok(())
    }

    fn text(
        &mut self,
        _text: &str,
        location: Point,
        _style: TextStyle,
        _angle: f64,
    ) -> PlotResult<()> {
        check_points(&[location])?;
        self.stats.texts += 1;
        Ok(())
    }

    fn text_extent(&self, text: &str, size: f64) -> Size {
        self.text_extent
            .unwrap_or_else(|| estimate_text_extent(text, size))
    }

    fn encode_image(&mut self) -> PlotResult<Vec<u8>> {
        Ok(Vec::new())
    }

    fn flush(&mut self, output: &str) -> PlotResult<()> {
        self.stats.flushes += 1;
        self.last_output = Some(output.to_owned());
        Ok(())
    }
}
