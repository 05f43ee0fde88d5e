use serde::{Deserialize, Serialize};

use crate::core::{DEFAULT_FRAME_HEIGHT, DEFAULT_FRAME_WIDTH, PlotDimensions, Point, Size};
use crate::error::{PlotError, PlotResult};
use crate::plot::Plot;
use crate::render::{DrawContext, Renderer};

/// How a [`SubPlot`] partitions its frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StackPattern {
    /// One column; children stacked along y.
    Vertical,
    /// One row; children side by side along x.
    Horizontal,
    Grid { rows: usize, columns: usize },
}

impl StackPattern {
    /// `(rows, columns)` used to lay out `count` children.
    pub fn shape(self, count: usize) -> PlotResult<(usize, usize)> {
        if count == 0 {
            return Err(PlotError::InvalidLayout(
                "a sub-plot needs at least one child".to_owned(),
            ));
        }
        match self {
            Self::Vertical => Ok((count, 1)),
            Self::Horizontal => Ok((1, count)),
            Self::Grid { rows, columns } => {
                if rows == 0 || columns == 0 {
                    return Err(PlotError::InvalidLayout(format!(
                        "grid must have at least one row and one column (got {rows}x{columns})"
                    )));
                }
                if rows.saturating_mul(columns) < count {
                    return Err(PlotError::InvalidLayout(format!(
                        "{count} plots do not fit into a {rows}x{columns} grid"
                    )));
                }
                Ok((rows, columns))
            }
        }
    }
}

/// Slot assigned to one child of a [`SubPlot`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlotPlan {
    pub index: usize,
    pub row: usize,
    pub column: usize,
    /// Offset of the slot's bottom-left corner from the sub-plot's own.
    pub offset: Point,
    pub size: Size,
}

/// Composite plot that partitions its frame among child plots.
///
/// Slot `i` lies at row `i / columns` and column `i % columns`; row 0 is at
/// the bottom of the frame. Children are drawn in insertion order, each
/// through the shared context with its slot offset added, so nested
/// sub-plots compose their offsets additively.
#[derive(Debug)]
pub struct SubPlot {
    size: Size,
    pattern: StackPattern,
    plots: Vec<Box<dyn Plot>>,
}

impl Default for SubPlot {
    fn default() -> Self {
        Self::new(StackPattern::Vertical)
    }
}

impl SubPlot {
    #[must_use]
    pub fn new(pattern: StackPattern) -> Self {
        Self {
            size: Size::new(DEFAULT_FRAME_WIDTH, DEFAULT_FRAME_HEIGHT),
            pattern,
            plots: Vec::new(),
        }
    }

    /// Frame size used when this sub-plot is drawn at the top level.
    #[must_use]
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.size = Size::new(width, height);
        self
    }

    #[must_use]
    pub fn with_plot(mut self, plot: impl Plot + 'static) -> Self {
        self.push(plot);
        self
    }

    pub fn push(&mut self, plot: impl Plot + 'static) {
        self.plots.push(Box::new(plot));
    }

    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    #[must_use]
    pub fn pattern(&self) -> StackPattern {
        self.pattern
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.plots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.plots.is_empty()
    }

    /// Computes every child's slot within an `area`-sized region.
    pub fn plan_slots(&self, area: Size) -> PlotResult<Vec<SlotPlan>> {
        let (rows, columns) = self.pattern.shape(self.plots.len())?;
        let slot = Size::new(area.width / columns as f64, area.height / rows as f64);
        let slots = (0..self.plots.len())
            .map(|index| {
                let row = index / columns;
                let column = index % columns;
                SlotPlan {
                    index,
                    row,
                    column,
                    offset: Point::new(column as f64 * slot.width, row as f64 * slot.height),
                    size: slot,
                }
            })
            .collect();
        Ok(slots)
    }

    /// Draws every child into a `size` frame, then flushes `output` once.
    pub fn draw_and_output(&mut self, renderer: &mut dyn Renderer, output: &str) -> PlotResult<()> {
        let dimensions = PlotDimensions::new(self.size.width, self.size.height);
        let mut ctx = DrawContext::new(renderer, dimensions)?;
        self.draw_graph(&mut ctx)?;
        ctx.flush(output)
    }
}

impl Plot for SubPlot {
    fn draw_graph(&mut self, ctx: &mut DrawContext<'_>) -> PlotResult<()> {
        let area = ctx.plot_dimensions().sub_size();
        let slots = self.plan_slots(area)?;
        tracing::debug!(
            pattern = ?self.pattern,
            children = slots.len(),
            width = area.width,
            height = area.height,
            "sub-plot slots planned"
        );

        for (slot, plot) in slots.iter().zip(self.plots.iter_mut()) {
            tracing::debug!(
                index = slot.index,
                x_offset = ctx.x_offset() + slot.offset.x,
                y_offset = ctx.y_offset() + slot.offset.y,
                width = slot.size.width,
                height = slot.size.height,
                "drawing sub-plot child"
            );
            ctx.with_slot(slot.offset, slot.size, |ctx| plot.draw_graph(ctx))?;
        }
        Ok(())
    }
}
