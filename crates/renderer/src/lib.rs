//! Two-panel time-series chart of a recorded history.
//!
//! The upper panel plots FPS and the lower panel memory usage, both against
//! seconds elapsed since the first sample.

pub mod chart;
pub mod style;

pub use chart::{plot, ChartFormat, RecorderPlot, Rendered};
pub use style::{ChartStyle, Rgb};
