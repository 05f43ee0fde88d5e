use crate::core::{Rect, RectEdge, Size};
use crate::error::PlotResult;
use crate::layout::LayoutComponent;
use crate::render::DrawContext;

/// Blank space of a fixed thickness across the edge it sits on.
///
/// The extent along the edge is reported as 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedSpace {
    pub size: f64,
}

impl FixedSpace {
    #[must_use]
    pub const fn new(size: f64) -> Self {
        Self { size }
    }
}

impl LayoutComponent for FixedSpace {
    fn measure(&self, edge: RectEdge, _ctx: &DrawContext<'_>) -> Size {
        if edge.is_horizontal() {
            Size::new(1.0, self.size)
        } else {
            Size::new(self.size, 1.0)
        }
    }

    fn draw(
        &self,
        _rect: Rect,
        _measured: Size,
        _edge: RectEdge,
        _ctx: &mut DrawContext<'_>,
    ) -> PlotResult<()> {
        Ok(())
    }
}
