pub mod decorations;
pub mod dimensions;
pub mod geometry;
pub mod scale;
pub mod series;

pub use decorations::{
    Grid, LegendEntry, Marker, PlotBorder, PlotLabel, PlotLegend, PlotMarkers, PlotTitle,
    format_marker,
};
pub use dimensions::{
    DEFAULT_FRAME_HEIGHT, DEFAULT_FRAME_WIDTH, GRAPH_FRACTION, MARGIN_FRACTION, PlotDimensions,
};
pub use geometry::{EdgeComponents, Point, Rect, RectEdge, Size};
pub use scale::{LinearScale, MAX_MARKER_COUNT, extent};
pub use series::{GradientMode, Series, project_points};
