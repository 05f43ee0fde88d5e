use ordered_float::OrderedFloat;

use crate::core::{
    EdgeComponents, Grid, LegendEntry, PlotBorder, PlotLabel, PlotLegend, PlotMarkers, PlotTitle,
    Point, Rect, RectEdge, Size,
};
use crate::error::PlotResult;
use crate::layout::{Annotation, FixedSpace, Label, LayoutComponent, LayoutComponentExt};
use crate::render::{Color, DrawContext, HatchPattern, Stroke, TextStyle};

/// Layout of one rectangular graph: the graph area, the components stacked
/// around it, the marker, border, grid and legend chrome and the annotations
/// drawn over everything.
///
/// All rects are in engine coordinates of the current slot (y-up, bottom-left
/// origin). The graph area is `PlotDimensions::graph_rect`; components are
/// stacked outward from it with index 0 nearest the graph.
#[derive(Debug)]
pub struct GraphLayout {
    components: EdgeComponents<Vec<Box<dyn LayoutComponent>>>,
    pub background: Color,
    pub graph_background: Option<Color>,
    pub markers: PlotMarkers,
    pub marker_text_size: f64,
    pub marker_color: Color,
    /// Horizontal space reserved for y-axis marker text.
    pub y_marker_max_width: f64,
    pub border: PlotBorder,
    pub grid: Grid,
    pub legend: PlotLegend,
    pub legend_entries: Vec<LegendEntry>,
    pub annotations: Vec<Annotation>,
}

/// Result of [`GraphLayout::plan`].
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutPlan {
    pub slot: Rect,
    pub graph: Rect,
    pub sizes: EdgeComponents<Vec<Size>>,
    pub rects: EdgeComponents<Vec<Rect>>,
    /// Left end of each x marker's text baseline.
    pub x_marker_text: Vec<Point>,
    pub y_marker_text: Vec<Point>,
    /// Left end of each secondary y marker's text baseline.
    pub y2_marker_text: Vec<Point>,
    pub legend_rect: Option<Rect>,
}

impl LayoutPlan {
    /// Edges whose component stack extends past the slot.
    #[must_use]
    pub fn overflowing_edges(&self) -> Vec<RectEdge> {
        RectEdge::ALL
            .into_iter()
            .filter(|edge| overflow(self.slot, &self.rects[*edge], *edge) > 0.0)
            .collect()
    }
}

impl Default for GraphLayout {
    fn default() -> Self {
        Self {
            components: EdgeComponents::empty(),
            background: Color::WHITE,
            graph_background: None,
            markers: PlotMarkers::default(),
            marker_text_size: 12.0,
            marker_color: Color::BLACK,
            y_marker_max_width: 40.0,
            border: PlotBorder::default(),
            grid: Grid::default(),
            legend: PlotLegend::default(),
            legend_entries: Vec::new(),
            annotations: Vec::new(),
        }
    }
}

impl GraphLayout {
    pub const X_LABEL_PADDING: f64 = 12.0;
    pub const Y_LABEL_PADDING: f64 = 12.0;
    pub const TITLE_PADDING: f64 = 16.0;
    pub const MARKER_STEM_LENGTH: f64 = 6.0;
    /// Space on each side of y marker text.
    pub const Y_MARKER_SPACE: f64 = 4.0;
    /// Space on each side of x marker text.
    pub const X_MARKER_SPACE: f64 = 6.0;

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Layout with the standard title and axis-label components.
    ///
    /// An empty x label still reserves `X_LABEL_PADDING` below the markers
    /// and an empty title reserves `TITLE_PADDING` above the graph.
    #[must_use]
    pub fn with_titles(title: &PlotTitle, labels: &PlotLabel) -> Self {
        let mut layout = Self::default();
        if labels.x_label.is_empty() {
            layout.push_component(RectEdge::Bottom, FixedSpace::new(Self::X_LABEL_PADDING));
        } else {
            layout.push_component(
                RectEdge::Bottom,
                Label::new(labels.x_label.clone())
                    .with_size(labels.size)
                    .with_color(labels.color)
                    .padded(EdgeComponents::all(Self::X_LABEL_PADDING)),
            );
            layout.push_component(
                RectEdge::Bottom,
                FixedSpace::new(Self::X_LABEL_PADDING / 2.0),
            );
        }
        if !labels.y_label.is_empty() {
            layout.push_component(
                RectEdge::Left,
                Label::new(labels.y_label.clone())
                    .with_size(labels.size)
                    .with_color(labels.color)
                    .padded(EdgeComponents::all(Self::Y_LABEL_PADDING)),
            );
        }
        if !labels.y2_label.is_empty() {
            layout.push_component(
                RectEdge::Right,
                Label::new(labels.y2_label.clone())
                    .with_size(labels.size)
                    .with_color(labels.color)
                    .padded(EdgeComponents::all(Self::Y_LABEL_PADDING)),
            );
        }
        if title.title.is_empty() {
            layout.push_component(RectEdge::Top, FixedSpace::new(Self::TITLE_PADDING));
        } else {
            layout.push_component(
                RectEdge::Top,
                Label::new(title.title.clone())
                    .with_size(title.size)
                    .with_color(title.color)
                    .padded(EdgeComponents::all(Self::TITLE_PADDING)),
            );
        }
        layout
    }

    /// Appends `component` to `edge`, farther from the graph than the
    /// components already there.
    pub fn push_component(&mut self, edge: RectEdge, component: impl LayoutComponent + 'static) {
        self.components[edge].push(component.boxed());
    }

    #[must_use]
    pub fn components(&self) -> &EdgeComponents<Vec<Box<dyn LayoutComponent>>> {
        &self.components
    }

    /// Height reserved below the graph border for x markers.
    #[must_use]
    pub fn x_marker_height(&self) -> f64 {
        Self::MARKER_STEM_LENGTH + 2.0 * Self::X_MARKER_SPACE + self.marker_text_size
    }

    /// Width reserved left of the graph border for y markers.
    #[must_use]
    pub fn y_marker_width(&self) -> f64 {
        Self::MARKER_STEM_LENGTH + 2.0 * Self::Y_MARKER_SPACE + self.y_marker_max_width
    }

    /// Width reserved right of the graph border for secondary y markers;
    /// zero without a secondary axis.
    #[must_use]
    pub fn y2_marker_width(&self) -> f64 {
        if self.markers.y2.is_empty() {
            0.0
        } else {
            self.y_marker_width()
        }
    }

    /// Measures every component and assigns its rect.
    ///
    /// A stack that does not fit into the slot margin is reported with a
    /// warning; the plan is produced regardless.
    pub fn plan(&self, ctx: &DrawContext<'_>) -> LayoutPlan {
        let dimensions = ctx.plot_dimensions();
        let slot = dimensions.slot_rect();
        let graph = dimensions.graph_rect();
        let outer = graph.outset(self.border.thickness);

        let sizes = self.components.as_ref().map_by_edge(|edge, components| {
            components
                .iter()
                .map(|component| component.measure(edge, ctx))
                .collect::<Vec<_>>()
        });

        let x_marker_height = self.x_marker_height();
        let y_marker_width = self.y_marker_width();
        let y2_marker_width = self.y2_marker_width();
        let rects = sizes.as_ref().map_by_edge(|edge, sizes| {
            let mut rects = Vec::with_capacity(sizes.len());
            let mut cursor = match edge {
                RectEdge::Left => outer.min_x() - y_marker_width,
                RectEdge::Top => outer.max_y(),
                RectEdge::Right => outer.max_x() + y2_marker_width,
                RectEdge::Bottom => outer.min_y() - x_marker_height,
            };
            for size in sizes {
                let rect = match edge {
                    RectEdge::Left => {
                        cursor -= size.width;
                        Rect::from_xywh(cursor, outer.min_y(), size.width, outer.height())
                    }
                    RectEdge::Top => {
                        let rect = Rect::from_xywh(outer.min_x(), cursor, outer.width(), size.height);
                        cursor += size.height;
                        rect
                    }
                    RectEdge::Right => {
                        let rect = Rect::from_xywh(cursor, outer.min_y(), size.width, outer.height());
                        cursor += size.width;
                        rect
                    }
                    RectEdge::Bottom => {
                        cursor -= size.height;
                        Rect::from_xywh(outer.min_x(), cursor, outer.width(), size.height)
                    }
                };
                rects.push(rect);
            }
            rects
        });

        for edge in RectEdge::ALL {
            let amount = overflow(slot, &rects[edge], edge);
            if amount > 0.0 {
                tracing::warn!(
                    ?edge,
                    overflow = amount,
                    "layout components exceed the slot margin"
                );
            }
        }

        let plan = LayoutPlan {
            slot,
            graph,
            x_marker_text: self.x_marker_text_locations(graph, ctx),
            y_marker_text: self.y_marker_text_locations(graph, ctx),
            y2_marker_text: self.y2_marker_text_locations(graph, ctx),
            legend_rect: self.legend_rect(graph, ctx),
            sizes,
            rects,
        };
        tracing::debug!(
            graph = ?plan.graph,
            left = plan.rects.left.len(),
            top = plan.rects.top.len(),
            right = plan.rects.right.len(),
            bottom = plan.rects.bottom.len(),
            "graph layout planned"
        );
        plan
    }

    fn x_marker_text_locations(&self, graph: Rect, ctx: &DrawContext<'_>) -> Vec<Point> {
        let offset = self.border.thickness + Self::MARKER_STEM_LENGTH + Self::X_MARKER_SPACE;
        self.markers
            .x
            .iter()
            .map(|marker| {
                let extent = ctx.text_extent(&marker.text, self.marker_text_size);
                Point::new(
                    graph.min_x() + marker.position - extent.width / 2.0,
                    graph.min_y() - offset - extent.height,
                )
            })
            .collect()
    }

    fn y_marker_text_locations(&self, graph: Rect, ctx: &DrawContext<'_>) -> Vec<Point> {
        let offset = self.border.thickness + Self::MARKER_STEM_LENGTH + Self::Y_MARKER_SPACE;
        self.markers
            .y
            .iter()
            .map(|marker| {
                let extent = ctx.text_extent(&marker.text, self.marker_text_size);
                let width = extent.width.min(self.y_marker_max_width);
                Point::new(
                    graph.min_x() - offset - width,
                    graph.min_y() + marker.position - extent.height / 2.0,
                )
            })
            .collect()
    }

    fn y2_marker_text_locations(&self, graph: Rect, ctx: &DrawContext<'_>) -> Vec<Point> {
        let offset = self.border.thickness + Self::MARKER_STEM_LENGTH + Self::Y_MARKER_SPACE;
        self.markers
            .y2
            .iter()
            .map(|marker| {
                let extent = ctx.text_extent(&marker.text, self.marker_text_size);
                Point::new(
                    graph.max_x() + offset,
                    graph.min_y() + marker.position - extent.height / 2.0,
                )
            })
            .collect()
    }

    fn legend_rect(&self, graph: Rect, ctx: &DrawContext<'_>) -> Option<Rect> {
        if !self.legend.visible || self.legend_entries.is_empty() {
            return None;
        }
        let max_width = self
            .legend_entries
            .iter()
            .map(|entry| OrderedFloat(ctx.text_extent(&entry.label, self.legend.text_size).width))
            .max()
            .map_or(0.0, |width| width.0);
        let size = self.legend.box_size(max_width, self.legend_entries.len());
        Some(self.legend.rect_in(graph, size))
    }

    /// Background, grid, border and axis markers. Drawn before the data.
    pub fn draw_background(&self, plan: &LayoutPlan, ctx: &mut DrawContext<'_>) -> PlotResult<()> {
        ctx.draw_solid_rect(plan.slot, self.background, HatchPattern::None, false)?;
        if let Some(fill) = self.graph_background {
            ctx.draw_solid_rect(plan.graph, fill, HatchPattern::None, false)?;
        }
        if self.grid.visible {
            self.draw_grid(plan, ctx)?;
        }
        // Border sits outside the graph area.
        ctx.draw_rect(
            plan.graph.outset(self.border.thickness / 2.0),
            self.border.stroke(),
            false,
        )?;
        self.draw_markers(plan, ctx)
    }

    /// Draws every component into its planned rect.
    pub fn draw(&self, plan: &LayoutPlan, ctx: &mut DrawContext<'_>) -> PlotResult<()> {
        for edge in RectEdge::ALL {
            let components = &self.components[edge];
            for ((component, rect), size) in components
                .iter()
                .zip(&plan.rects[edge])
                .zip(&plan.sizes[edge])
            {
                component.draw(*rect, *size, edge, ctx)?;
            }
        }
        Ok(())
    }

    /// Components, legend and annotations. Drawn after the data.
    pub fn draw_foreground(&self, plan: &LayoutPlan, ctx: &mut DrawContext<'_>) -> PlotResult<()> {
        self.draw(plan, ctx)?;
        if let Some(rect) = plan.legend_rect {
            self.draw_legend(rect, ctx)?;
        }
        for annotation in &self.annotations {
            annotation.draw(ctx)?;
        }
        Ok(())
    }

    fn draw_grid(&self, plan: &LayoutPlan, ctx: &mut DrawContext<'_>) -> PlotResult<()> {
        let graph = plan.graph;
        let stroke = self.grid.stroke();
        for marker in &self.markers.x {
            if !(0.0..=graph.width()).contains(&marker.position) {
                continue;
            }
            let x = graph.min_x() + marker.position;
            ctx.draw_line(
                Point::new(x, graph.min_y()),
                Point::new(x, graph.max_y()),
                stroke,
                false,
            )?;
        }
        let secondary = if self.grid.secondary {
            self.markers.y2.as_slice()
        } else {
            &[]
        };
        for marker in self.markers.y.iter().chain(secondary) {
            if !(0.0..=graph.height()).contains(&marker.position) {
                continue;
            }
            let y = graph.min_y() + marker.position;
            ctx.draw_line(
                Point::new(graph.min_x(), y),
                Point::new(graph.max_x(), y),
                stroke,
                false,
            )?;
        }
        Ok(())
    }

    fn draw_markers(&self, plan: &LayoutPlan, ctx: &mut DrawContext<'_>) -> PlotResult<()> {
        let graph = plan.graph;
        let thickness = self.border.thickness;
        let stem = Stroke::solid(thickness / 2.0, self.marker_color);
        let style = TextStyle::new(self.marker_text_size, self.marker_color).with_stroke_width(0.7);

        for (marker, location) in self.markers.x.iter().zip(&plan.x_marker_text) {
            let x = graph.min_x() + marker.position;
            let top = graph.min_y() - thickness;
            ctx.draw_line(
                Point::new(x, top),
                Point::new(x, top - Self::MARKER_STEM_LENGTH),
                stem,
                false,
            )?;
            ctx.draw_text(&marker.text, *location, style, 0.0, false)?;
        }
        for (marker, location) in self.markers.y.iter().zip(&plan.y_marker_text) {
            let y = graph.min_y() + marker.position;
            let right = graph.min_x() - thickness;
            ctx.draw_line(
                Point::new(right, y),
                Point::new(right - Self::MARKER_STEM_LENGTH, y),
                stem,
                false,
            )?;
            ctx.draw_text(&marker.text, *location, style, 0.0, false)?;
        }
        for (marker, location) in self.markers.y2.iter().zip(&plan.y2_marker_text) {
            let y = graph.min_y() + marker.position;
            let left = graph.max_x() + thickness;
            ctx.draw_line(
                Point::new(left, y),
                Point::new(left + Self::MARKER_STEM_LENGTH, y),
                stem,
                false,
            )?;
            ctx.draw_text(&marker.text, *location, style, 0.0, false)?;
        }
        Ok(())
    }

    fn draw_legend(&self, rect: Rect, ctx: &mut DrawContext<'_>) -> PlotResult<()> {
        ctx.draw_solid_rect_with_border(rect, self.legend.background, self.legend.border, false)?;
        let text_size = self.legend.text_size;
        let style = TextStyle::new(text_size, self.legend.text_color);
        for (index, entry) in self.legend_entries.iter().enumerate() {
            let icon_top = rect.max_y() - (2.0 * index as f64 + 1.0) * text_size;
            let icon = Rect::from_xywh(
                rect.min_x() + text_size,
                icon_top - text_size,
                text_size,
                text_size,
            );
            ctx.draw_solid_rect(icon, entry.color, HatchPattern::None, false)?;
            ctx.draw_text(
                &entry.label,
                Point::new(icon.max_x() + text_size, icon.min_y()),
                style,
                0.0,
                false,
            )?;
        }
        Ok(())
    }
}

/// How far the outermost rect of an edge stack reaches past `slot`.
fn overflow(slot: Rect, rects: &[Rect], edge: RectEdge) -> f64 {
    let Some(outermost) = rects.last() else {
        return 0.0;
    };
    match edge {
        RectEdge::Left => slot.min_x() - outermost.min_x(),
        RectEdge::Top => outermost.max_y() - slot.max_y(),
        RectEdge::Right => outermost.max_x() - slot.max_x(),
        RectEdge::Bottom => slot.min_y() - outermost.min_y(),
    }
}
