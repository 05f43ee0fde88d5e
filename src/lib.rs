//! plotframe: layout composition and coordinate transforms for static charts.
//!
//! Charts describe themselves through [`layout::LayoutComponent`]s and draw
//! through a [`render::DrawContext`], which applies slot offsets and the
//! y-axis flip before any [`render::Renderer`] backend sees a coordinate.
//! [`plot::SubPlot`] partitions a frame among child plots and nests freely.

pub mod core;
pub mod error;
pub mod layout;
pub mod plot;
pub mod render;
pub mod telemetry;

pub use error::{PlotError, PlotResult};
pub use plot::{Plot, SubPlot};
