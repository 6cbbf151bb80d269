//! Jobs-per-year line chart model.

mod layout;
mod series;

pub use layout::{
    AxisTick, CartesianLayout, ChartGeometry, ChartLayout, LegendEntry, PlotArea, PlotPoint,
    Tooltip,
};
pub use series::{jobs_per_year, LineSeries, SeriesPoint, TOTAL_JOBS_SERIES};
