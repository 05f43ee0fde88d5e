//! Drawable charts and their composition.

mod bar_chart;
mod line_chart;
mod style;
mod subplot;

pub use bar_chart::{Bar, BarChart, BarOrientation};
pub use line_chart::LineChart;
pub use style::ChartStyle;
pub use subplot::{SlotPlan, StackPattern, SubPlot};

use crate::core::{PlotDimensions, Size};
use crate::error::PlotResult;
use crate::render::{DrawContext, Renderer};

/// Anything that can draw itself into the current slot of a draw context.
///
/// Implementations read the slot size from `ctx.plot_dimensions()` and draw
/// in slot-local coordinates; they never look at the context offset, so a
/// plot draws identically whether it is top-level or nested in a
/// [`SubPlot`].
pub trait Plot: std::fmt::Debug {
    fn draw_graph(&mut self, ctx: &mut DrawContext<'_>) -> PlotResult<()>;

    /// Draws into a fresh `size` frame on `renderer`, then flushes once to
    /// `output`.
    fn draw_graph_and_output(
        &mut self,
        renderer: &mut dyn Renderer,
        size: Size,
        output: &str,
    ) -> PlotResult<()> {
        let mut ctx = DrawContext::new(renderer, PlotDimensions::new(size.width, size.height))?;
        self.draw_graph(&mut ctx)?;
        ctx.flush(output)
    }
}

impl<T: Plot + ?Sized> Plot for Box<T> {
    fn draw_graph(&mut self, ctx: &mut DrawContext<'_>) -> PlotResult<()> {
        (**self).draw_graph(ctx)
    }
}
