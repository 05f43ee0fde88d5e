use crate::core::geometry::{Point, Rect, Size};
use crate::error::{PlotError, PlotResult};

pub const DEFAULT_FRAME_WIDTH: f64 = 1000.0;
pub const DEFAULT_FRAME_HEIGHT: f64 = 660.0;

/// Share of the slot occupied by the graph area along each axis.
pub const GRAPH_FRACTION: f64 = 0.8;
/// Margin kept on each side of the graph area.
pub const MARGIN_FRACTION: f64 = 0.1;

/// Frame, slot and graph-area sizes for one draw pass.
///
/// `frame` is the full canvas of the image. `sub` is the slot a containing
/// sub-plot assigned to the element being drawn and equals `frame` for
/// top-level charts. The graph area is always `GRAPH_FRACTION` of the slot;
/// every setter recomputes it eagerly so it can never go stale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotDimensions {
    frame_width: f64,
    frame_height: f64,
    sub_width: f64,
    sub_height: f64,
    graph_width: f64,
    graph_height: f64,
}

impl Default for PlotDimensions {
    fn default() -> Self {
        Self::new(DEFAULT_FRAME_WIDTH, DEFAULT_FRAME_HEIGHT)
    }
}

impl PlotDimensions {
    /// Dimensions of a top-level (non-nested) element.
    #[must_use]
    pub fn new(frame_width: f64, frame_height: f64) -> Self {
        Self::nested(frame_width, frame_height, frame_width, frame_height)
    }

    /// Dimensions of an element occupying a `sub_width × sub_height` slot of
    /// a larger frame.
    #[must_use]
    pub fn nested(frame_width: f64, frame_height: f64, sub_width: f64, sub_height: f64) -> Self {
        let mut dimensions = Self {
            frame_width,
            frame_height,
            sub_width,
            sub_height,
            graph_width: 0.0,
            graph_height: 0.0,
        };
        dimensions.recompute_graph();
        dimensions
    }

    #[must_use]
    pub fn frame_width(&self) -> f64 {
        self.frame_width
    }

    #[must_use]
    pub fn frame_height(&self) -> f64 {
        self.frame_height
    }

    #[must_use]
    pub fn sub_width(&self) -> f64 {
        self.sub_width
    }

    #[must_use]
    pub fn sub_height(&self) -> f64 {
        self.sub_height
    }

    #[must_use]
    pub fn graph_width(&self) -> f64 {
        self.graph_width
    }

    #[must_use]
    pub fn graph_height(&self) -> f64 {
        self.graph_height
    }

    #[must_use]
    pub fn frame_size(&self) -> Size {
        Size::new(self.frame_width, self.frame_height)
    }

    #[must_use]
    pub fn sub_size(&self) -> Size {
        Size::new(self.sub_width, self.sub_height)
    }

    /// Sets the frame size. Any slot assignment is discarded: the element is
    /// treated as top-level until a container assigns a new slot.
    pub fn set_frame_size(&mut self, width: f64, height: f64) {
        self.frame_width = width;
        self.frame_height = height;
        self.sub_width = width;
        self.sub_height = height;
        self.recompute_graph();
    }

    pub fn set_frame_width(&mut self, width: f64) {
        self.set_frame_size(width, self.frame_height);
    }

    pub fn set_frame_height(&mut self, height: f64) {
        self.set_frame_size(self.frame_width, height);
    }

    /// Assigns the slot size given by a containing sub-plot.
    pub fn set_sub_size(&mut self, width: f64, height: f64) {
        self.sub_width = width;
        self.sub_height = height;
        self.recompute_graph();
    }

    #[must_use]
    pub fn is_nested(&self) -> bool {
        self.sub_width != self.frame_width || self.sub_height != self.frame_height
    }

    /// Distance from the slot's left/bottom edges to the graph area.
    #[must_use]
    pub fn margin(&self) -> Point {
        Point::new(
            self.sub_width * MARGIN_FRACTION,
            self.sub_height * MARGIN_FRACTION,
        )
    }

    /// The graph area in slot-local coordinates.
    #[must_use]
    pub fn graph_rect(&self) -> Rect {
        Rect::new(
            self.margin(),
            Size::new(self.graph_width, self.graph_height),
        )
    }

    /// The whole slot in slot-local coordinates.
    #[must_use]
    pub fn slot_rect(&self) -> Rect {
        Rect::new(Point::ZERO, self.sub_size())
    }

    pub fn validate(&self) -> PlotResult<()> {
        for (width, height) in [
            (self.frame_width, self.frame_height),
            (self.sub_width, self.sub_height),
        ] {
            if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
                return Err(PlotError::InvalidFrame { width, height });
            }
        }
        Ok(())
    }

    fn recompute_graph(&mut self) {
        self.graph_width = self.sub_width * GRAPH_FRACTION;
        self.graph_height = self.sub_height * GRAPH_FRACTION;
    }
}
