use crate::core::{EdgeComponents, Rect, RectEdge, Size};
use crate::error::PlotResult;
use crate::layout::LayoutComponent;
use crate::render::DrawContext;

/// Adds a fixed padding around a wrapped component.
///
/// The wrapped component never sees the padding: its measured size and its
/// draw rect both have the padding removed.
#[derive(Debug, Clone, PartialEq)]
pub struct Padded<T> {
    base: T,
    padding: EdgeComponents<f64>,
}

impl<T> Padded<T> {
    #[must_use]
    pub fn new(base: T, padding: EdgeComponents<f64>) -> Self {
        Self { base, padding }
    }

    #[must_use]
    pub fn base(&self) -> &T {
        &self.base
    }

    #[must_use]
    pub fn padding(&self) -> EdgeComponents<f64> {
        self.padding
    }
}

impl<T: LayoutComponent> LayoutComponent for Padded<T> {
    fn measure(&self, edge: RectEdge, ctx: &DrawContext<'_>) -> Size {
        let size = self.base.measure(edge, ctx);
        Size::new(
            size.width + self.padding.horizontal_sum(),
            size.height + self.padding.vertical_sum(),
        )
    }

    fn draw(
        &self,
        rect: Rect,
        measured: Size,
        edge: RectEdge,
        ctx: &mut DrawContext<'_>,
    ) -> PlotResult<()> {
        let inner_measured = Size::new(
            measured.width - self.padding.horizontal_sum(),
            measured.height - self.padding.vertical_sum(),
        );
        let inner_rect = rect.checked_inset(&self.padding)?;
        self.base.draw(inner_rect, inner_measured, edge, ctx)
    }
}
