//! Measure/draw contract shared by everything that occupies space around a
//! graph, plus the built-in components, the graph layout that stacks them
//! and the annotations drawn over it.

mod annotation;
mod graph_layout;
mod label;
mod padding;
mod spacing;

pub use annotation::{Annotation, Arrow, TextAnnotation};
pub use graph_layout::{GraphLayout, LayoutPlan};
pub use label::Label;
pub use padding::Padded;
pub use spacing::FixedSpace;

use crate::core::{EdgeComponents, Rect, RectEdge, Size};
use crate::error::PlotResult;
use crate::render::DrawContext;

/// A visual element that occupies space in a layout.
///
/// Components are stateless between calls: `measure` and `draw` depend only
/// on their arguments.
pub trait LayoutComponent: std::fmt::Debug {
    /// Minimum footprint when placed on `edge`.
    ///
    /// `width` is always the extent along x and `height` the extent along y.
    /// Components with a natural horizontal orientation swap their extents
    /// for vertical edges themselves.
    fn measure(&self, edge: RectEdge, ctx: &DrawContext<'_>) -> Size;

    /// Draws into `rect` (engine coordinates of the current slot).
    /// `measured` is the result of the last `measure` for the same edge.
    fn draw(
        &self,
        rect: Rect,
        measured: Size,
        edge: RectEdge,
        ctx: &mut DrawContext<'_>,
    ) -> PlotResult<()>;
}

impl<T: LayoutComponent + ?Sized> LayoutComponent for Box<T> {
    fn measure(&self, edge: RectEdge, ctx: &DrawContext<'_>) -> Size {
        (**self).measure(edge, ctx)
    }

    fn draw(
        &self,
        rect: Rect,
        measured: Size,
        edge: RectEdge,
        ctx: &mut DrawContext<'_>,
    ) -> PlotResult<()> {
        (**self).draw(rect, measured, edge, ctx)
    }
}

/// Combinators available on every sized component.
pub trait LayoutComponentExt: LayoutComponent + Sized {
    /// Wraps this component so it reserves `padding` around itself.
    #[must_use]
    fn padded(self, padding: EdgeComponents<f64>) -> Padded<Self> {
        Padded::new(self, padding)
    }

    #[must_use]
    fn boxed(self) -> Box<dyn LayoutComponent>
    where
        Self: 'static,
    {
        Box::new(self)
    }
}

impl<T: LayoutComponent> LayoutComponentExt for T {}
