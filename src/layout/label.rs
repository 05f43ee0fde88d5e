use crate::core::{Point, Rect, RectEdge, Size};
use crate::error::PlotResult;
use crate::layout::LayoutComponent;
use crate::render::{Color, DrawContext, TextStyle};

/// Single line of text that reads along any edge.
///
/// On vertical edges the text is rotated 90° counter-clockwise and its
/// measured extents are swapped.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub size: f64,
    pub color: Color,
}

impl Label {
    pub const DEFAULT_SIZE: f64 = 12.0;

    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            size: Self::DEFAULT_SIZE,
            color: Color::BLACK,
        }
    }

    #[must_use]
    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

impl LayoutComponent for Label {
    fn measure(&self, edge: RectEdge, ctx: &DrawContext<'_>) -> Size {
        let extent = ctx.text_extent(&self.text, self.size);
        if edge.is_horizontal() {
            extent
        } else {
            extent.swapping_components()
        }
    }

    fn draw(
        &self,
        rect: Rect,
        measured: Size,
        edge: RectEdge,
        ctx: &mut DrawContext<'_>,
    ) -> PlotResult<()> {
        let mut origin = rect.center() + Point::new(-measured.width / 2.0, -measured.height / 2.0);
        let angle = if edge.is_horizontal() {
            0.0
        } else {
            origin.x += rect.width();
            90.0
        };
        ctx.draw_text(
            &self.text,
            origin,
            TextStyle::new(self.size, self.color),
            angle,
            false,
        )
    }
}
