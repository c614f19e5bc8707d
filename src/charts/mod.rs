//! Charts module - Chart descriptions and rendering

mod builder;
mod plotter;

pub use builder::{payload_scatter_chart, success_share_chart, ScatterChart, ScatterPoint, ShareChart, ShareSlice};
pub use plotter::ChartPlotter;
