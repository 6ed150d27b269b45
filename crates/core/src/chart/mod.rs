//! Chart module - scales, burndown paths and SVG output.

mod chart_model;
mod chart_renderer;
mod scales;
mod svg;

pub use chart_model::{AxisTick, ChartLayout, CurvePath, LegendEntry, Margin};
pub use chart_renderer::ChartRenderer;
pub use scales::{LinearScale, TimeScale};
