//! Research figures and their terminal charts.

pub mod datasets;
pub mod visualization;

pub use datasets::{find, ChartKind, Dataset, ALL};
pub use visualization::{render_bar_chart, render_dataset, render_sparkline};
