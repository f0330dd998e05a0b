mod area_chart;
mod common;
mod components;
mod config;
mod tooltip;

pub use self::area_chart::{
	compute_area_chart_layout, AreaChartError, AreaChartLayout, AreaChartOptions, AreaChartSeries,
	PlottedPoint, TimeSeriesPoint,
};
pub use self::common::{format_number, LinearScale, Point, Rect};
pub use self::components::AreaChart;

/// Styles the chart markup needs, including the css that shows tooltips on hover.
pub const STYLES: &str = include_str!("styles.css");
