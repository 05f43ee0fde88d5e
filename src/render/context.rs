use smallvec::SmallVec;

use crate::core::{PlotDimensions, Point, Rect, Size};
use crate::error::PlotResult;
use crate::render::{Color, HatchPattern, Renderer, Stroke, TextStyle};

/// Mutable draw state shared by everything composed into one image.
///
/// The context is the single writer of a renderer for the duration of one
/// composition. It owns the current offset and `PlotDimensions` and converts
/// engine coordinates into backend pixel space:
///
/// - engine coordinates are y-up and relative to the bottom-left corner of
///   the current slot;
/// - `origin_shifted = true` additionally places the origin at the graph
///   area's bottom-left corner (the slot margin is added);
/// - the offset is added, then y is flipped against the frame height.
pub struct DrawContext<'r> {
    renderer: &'r mut dyn Renderer,
    offset: Point,
    dimensions: PlotDimensions,
}

impl std::fmt::Debug for DrawContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DrawContext")
            .field("backend", &self.renderer.backend_name())
            .field("offset", &self.offset)
            .field("dimensions", &self.dimensions)
            .finish()
    }
}

impl<'r> DrawContext<'r> {
    /// Binds `renderer` for one composition, resizing its surface to the
    /// frame when needed.
    pub fn new(renderer: &'r mut dyn Renderer, dimensions: PlotDimensions) -> PlotResult<Self> {
        dimensions.validate()?;
        let surface = renderer.surface_size();
        if surface != dimensions.frame_size() {
            renderer.resize(dimensions.frame_width(), dimensions.frame_height())?;
        }
        Ok(Self {
            renderer,
            offset: Point::ZERO,
            dimensions,
        })
    }

    #[must_use]
    pub fn renderer(&self) -> &dyn Renderer {
        &*self.renderer
    }

    #[must_use]
    pub fn offset(&self) -> Point {
        self.offset
    }

    pub fn set_offset(&mut self, offset: Point) {
        self.offset = offset;
    }

    #[must_use]
    pub fn x_offset(&self) -> f64 {
        self.offset.x
    }

    #[must_use]
    pub fn y_offset(&self) -> f64 {
        self.offset.y
    }

    #[must_use]
    pub fn plot_dimensions(&self) -> PlotDimensions {
        self.dimensions
    }

    /// Replaces the current dimensions. A frame size change reallocates the
    /// backend surface before this returns.
    pub fn set_plot_dimensions(&mut self, dimensions: PlotDimensions) -> PlotResult<()> {
        dimensions.validate()?;
        if dimensions.frame_size() != self.dimensions.frame_size() {
            tracing::debug!(
                width = dimensions.frame_width(),
                height = dimensions.frame_height(),
                "frame size changed; resizing surface"
            );
            self.renderer
                .resize(dimensions.frame_width(), dimensions.frame_height())?;
        }
        self.dimensions = dimensions;
        Ok(())
    }

    /// Runs `perform` with `delta` added to the offset and restores the
    /// previous offset afterwards, also when `perform` fails.
    pub fn with_additional_offset<T>(
        &mut self,
        delta: Point,
        perform: impl FnOnce(&mut Self) -> PlotResult<T>,
    ) -> PlotResult<T> {
        let previous = self.offset;
        self.offset += delta;
        let result = perform(self);
        self.offset = previous;
        result
    }

    /// Runs `perform` inside a slot of `slot_size` at `delta` from the
    /// current offset, restoring offset and dimensions afterwards.
    pub fn with_slot<T>(
        &mut self,
        delta: Point,
        slot_size: Size,
        perform: impl FnOnce(&mut Self) -> PlotResult<T>,
    ) -> PlotResult<T> {
        let previous = self.dimensions;
        let mut slot = previous;
        slot.set_sub_size(slot_size.width, slot_size.height);
        slot.validate()?;
        self.dimensions = slot;
        let result = self.with_additional_offset(delta, perform);
        self.dimensions = previous;
        result
    }

    /// Converts an engine point into backend pixel space.
    #[must_use]
    pub fn to_pixel(&self, point: Point, origin_shifted: bool) -> Point {
        let mut absolute = point + self.offset;
        if origin_shifted {
            absolute += self.dimensions.margin();
        }
        Point::new(absolute.x, self.dimensions.frame_height() - absolute.y)
    }

    /// Converts an engine rect (bottom-left origin) into a pixel rect
    /// (top-left origin, non-negative size).
    #[must_use]
    pub fn to_pixel_rect(&self, rect: Rect, origin_shifted: bool) -> Rect {
        let rect = rect.normalized();
        let top_left = self.to_pixel(
            Point::new(rect.origin.x, rect.origin.y + rect.size.height),
            origin_shifted,
        );
        Rect::new(top_left, rect.size)
    }

    fn to_pixels(&self, points: &[Point], origin_shifted: bool) -> SmallVec<[Point; 16]> {
        points
            .iter()
            .map(|point| self.to_pixel(*point, origin_shifted))
            .collect()
    }

    pub fn draw_rect(&mut self, rect: Rect, stroke: Stroke, origin_shifted: bool) -> PlotResult<()> {
        let rect = self.to_pixel_rect(rect, origin_shifted);
        self.renderer.stroke_rect(rect, stroke)
    }

    pub fn draw_solid_rect(
        &mut self,
        rect: Rect,
        fill: Color,
        hatch: HatchPattern,
        origin_shifted: bool,
    ) -> PlotResult<()> {
        let rect = self.to_pixel_rect(rect, origin_shifted);
        self.renderer.fill_rect(rect, fill, hatch)
    }

    pub fn draw_solid_rect_with_border(
        &mut self,
        rect: Rect,
        fill: Color,
        border: Stroke,
        origin_shifted: bool,
    ) -> PlotResult<()> {
        let rect = self.to_pixel_rect(rect, origin_shifted);
        self.renderer.fill_stroke_rect(rect, fill, border)
    }

    pub fn draw_solid_circle(
        &mut self,
        center: Point,
        radius: f64,
        fill: Color,
        origin_shifted: bool,
    ) -> PlotResult<()> {
        let center = self.to_pixel(center, origin_shifted);
        self.renderer.fill_circle(center, radius, fill)
    }

    pub fn draw_solid_ellipse(
        &mut self,
        center: Point,
        radius_x: f64,
        radius_y: f64,
        fill: Color,
        origin_shifted: bool,
    ) -> PlotResult<()> {
        let center = self.to_pixel(center, origin_shifted);
        self.renderer.fill_ellipse(center, radius_x, radius_y, fill)
    }

    pub fn draw_solid_triangle(
        &mut self,
        points: [Point; 3],
        fill: Color,
        origin_shifted: bool,
    ) -> PlotResult<()> {
        let points = points.map(|point| self.to_pixel(point, origin_shifted));
        self.renderer.fill_triangle(points, fill)
    }

    /// Fills the polygon through `points`. Fewer than three points enclose
    /// no area and draw nothing.
    pub fn draw_solid_polygon(
        &mut self,
        points: &[Point],
        fill: Color,
        origin_shifted: bool,
    ) -> PlotResult<()> {
        if points.len() < 3 {
            return Ok(());
        }
        let points = self.to_pixels(points, origin_shifted);
        self.renderer.fill_polygon(&points, fill)
    }

    pub fn draw_line(
        &mut self,
        from: Point,
        to: Point,
        stroke: Stroke,
        origin_shifted: bool,
    ) -> PlotResult<()> {
        let from = self.to_pixel(from, origin_shifted);
        let to = self.to_pixel(to, origin_shifted);
        self.renderer.line(from, to, stroke)
    }

    /// Draws the connected segments of one series.
    pub fn draw_plot_lines(
        &mut self,
        points: &[Point],
        stroke: Stroke,
        origin_shifted: bool,
    ) -> PlotResult<()> {
        if points.len() < 2 {
            return Ok(());
        }
        let points = self.to_pixels(points, origin_shifted);
        self.renderer.polyline(&points, stroke)
    }

    pub fn draw_text(
        &mut self,
        text: &str,
        location: Point,
        style: TextStyle,
        angle: f64,
        origin_shifted: bool,
    ) -> PlotResult<()> {
        if text.is_empty() {
            return Ok(());
        }
        let location = self.to_pixel(location, origin_shifted);
        self.renderer.text(text, location, style, angle)
    }

    #[must_use]
    pub fn text_extent(&self, text: &str, size: f64) -> Size {
        self.renderer.text_extent(text, size)
    }

    pub fn encode_image(&mut self) -> PlotResult<Vec<u8>> {
        self.renderer.encode_image()
    }

    /// Terminal export of the composed image.
    pub fn flush(&mut self, output: &str) -> PlotResult<()> {
        tracing::info!(backend = self.renderer.backend_name(), output, "flushing image");
        self.renderer.flush(output)
    }
}
