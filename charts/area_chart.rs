use crate::common::{compute_grid_line_info, GridLineInfo, LinearScale, Point, Rect};
use crate::config::CHART_CONFIG;
use itertools::Itertools;
use std::fmt::Write;
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AreaChartOptions {
	/// Namespaces the gradient definition so several charts can share a page.
	pub id: String,
	pub series: AreaChartSeries,
	pub width: Option<f64>,
	pub height: Option<f64>,
	pub y_min: Option<f64>,
	pub y_max: Option<f64>,
	pub y_axis_tick_count: Option<usize>,
}

#[derive(Clone, Debug)]
pub struct AreaChartSeries {
	pub color: String,
	pub data: Vec<TimeSeriesPoint>,
	pub stroke_width: Option<f64>,
	pub title: Option<String>,
}

/// One period of a time series. Series are in chronological order and are plotted left to right.
#[derive(Clone, Debug, PartialEq)]
pub struct TimeSeriesPoint {
	pub label: String,
	pub value: f64,
}

impl TimeSeriesPoint {
	pub fn new(label: impl Into<String>, value: f64) -> TimeSeriesPoint {
		TimeSeriesPoint {
			label: label.into(),
			value,
		}
	}
}

#[derive(Debug, Error, PartialEq)]
pub enum AreaChartError {
	#[error("the series has no points")]
	EmptySeries,
	#[error("the value for {label:?} is not finite")]
	NonFiniteValue { label: String },
}

#[derive(Clone, Debug)]
pub struct AreaChartLayout {
	pub width: f64,
	pub height: f64,
	pub chart_box: Rect,
	pub y_axis_grid_line_info: GridLineInfo,
	pub y_scale: LinearScale,
	pub points: Vec<PlottedPoint>,
}

#[derive(Clone, Debug)]
pub struct PlottedPoint {
	pub label: String,
	pub value: f64,
	pub pixel: Point,
	/// The horizontal band that activates this point's tooltip.
	pub hover_region: Rect,
}

impl AreaChartLayout {
	pub fn baseline(&self) -> f64 {
		self.y_scale.map(self.y_axis_grid_line_info.start)
	}

	pub fn pixels(&self) -> Vec<Point> {
		self.points.iter().map(|point| point.pixel).collect()
	}
}

pub fn compute_area_chart_layout(
	options: &AreaChartOptions,
) -> Result<AreaChartLayout, AreaChartError> {
	let data = &options.series.data;
	if data.is_empty() {
		return Err(AreaChartError::EmptySeries);
	}
	if let Some(point) = data.iter().find(|point| !point.value.is_finite()) {
		return Err(AreaChartError::NonFiniteValue {
			label: point.label.clone(),
		});
	}
	let width = options.width.unwrap_or(CHART_CONFIG.width);
	let height = options.height.unwrap_or(CHART_CONFIG.height);

	// Compute the bounds. The y axis starts at zero unless a value is negative.
	let data_min = data
		.iter()
		.map(|point| point.value)
		.fold(f64::INFINITY, f64::min);
	let data_max = data
		.iter()
		.map(|point| point.value)
		.fold(f64::NEG_INFINITY, f64::max);
	let y_min = options.y_min.unwrap_or_else(|| data_min.min(0.0));
	let y_max = options.y_max.unwrap_or(data_max);
	let y_axis_grid_line_info = compute_grid_line_info(
		y_min,
		y_max,
		options
			.y_axis_tick_count
			.unwrap_or(CHART_CONFIG.y_axis_tick_count),
	);

	// Compute the chart box. It collapses to zero size when the padding does not fit.
	let chart_box = Rect {
		x: CHART_CONFIG.left_padding + CHART_CONFIG.y_axis_labels_width,
		y: CHART_CONFIG.top_padding,
		w: (width
			- CHART_CONFIG.left_padding
			- CHART_CONFIG.y_axis_labels_width
			- CHART_CONFIG.right_padding)
			.max(0.0),
		h: (height
			- CHART_CONFIG.top_padding
			- CHART_CONFIG.x_axis_labels_height
			- CHART_CONFIG.bottom_padding)
			.max(0.0),
	};
	let y_scale = LinearScale {
		domain_min: y_axis_grid_line_info.start,
		domain_max: y_axis_grid_line_info.end(),
		range_min: chart_box.bottom(),
		range_max: chart_box.y,
	};

	// Labels are categories, so points are spread evenly with the first and last on the edges of the chart box.
	let step = if data.len() > 1 {
		chart_box.w / (data.len() - 1) as f64
	} else {
		0.0
	};
	let xs: Vec<f64> = if data.len() > 1 {
		(0..data.len())
			.map(|index| chart_box.x + step * index as f64)
			.collect()
	} else {
		vec![chart_box.x + chart_box.w / 2.0]
	};
	let points = data
		.iter()
		.zip(xs.iter())
		.enumerate()
		.map(|(index, (point, x))| {
			let left = if index == 0 {
				chart_box.x
			} else {
				x - step / 2.0
			};
			let right = if index == data.len() - 1 {
				chart_box.right()
			} else {
				x + step / 2.0
			};
			PlottedPoint {
				label: point.label.clone(),
				value: point.value,
				pixel: Point {
					x: *x,
					y: y_scale.map(point.value),
				},
				hover_region: Rect {
					x: left,
					y: chart_box.y,
					w: right - left,
					h: chart_box.h,
				},
			}
		})
		.collect();

	Ok(AreaChartLayout {
		width,
		height,
		chart_box,
		y_axis_grid_line_info,
		y_scale,
		points,
	})
}

/// The cubic segments of a monotone curve through `points`, which must be sorted by x, as `[start, control, control, end]`. Tangents follow Fritsch-Carlson, so each segment stays between the y values of its ends.
pub fn monotone_segments(points: &[Point]) -> Vec<[Point; 4]> {
	let tangents = monotone_tangents(points);
	points
		.iter()
		.zip(tangents.iter())
		.tuple_windows()
		.map(|((p0, t0), (p1, t1))| {
			let dx = (p1.x - p0.x) / 3.0;
			[
				*p0,
				Point {
					x: p0.x + dx,
					y: p0.y + dx * t0,
				},
				Point {
					x: p1.x - dx,
					y: p1.y - dx * t1,
				},
				*p1,
			]
		})
		.collect()
}

/// The svg path of the monotone curve through `points`. Two points are joined with a straight line.
pub fn monotone_path(points: &[Point]) -> String {
	let mut path = String::new();
	let first = match points.first() {
		Some(first) => first,
		None => return path,
	};
	write!(path, "M{},{}", fmt(first.x), fmt(first.y)).ok();
	if points.len() == 2 {
		write!(path, "L{},{}", fmt(points[1].x), fmt(points[1].y)).ok();
		return path;
	}
	for [_, c0, c1, end] in monotone_segments(points) {
		write!(
			path,
			"C{},{},{},{},{},{}",
			fmt(c0.x),
			fmt(c0.y),
			fmt(c1.x),
			fmt(c1.y),
			fmt(end.x),
			fmt(end.y),
		)
		.ok();
	}
	path
}

/// The closed region between the monotone curve and the horizontal line at `baseline`.
pub fn area_path(points: &[Point], baseline: f64) -> String {
	let (first, last) = match (points.first(), points.last()) {
		(Some(first), Some(last)) => (first, last),
		_ => return String::new(),
	};
	let mut path = monotone_path(points);
	write!(
		path,
		"L{},{}L{},{}Z",
		fmt(last.x),
		fmt(baseline),
		fmt(first.x),
		fmt(baseline)
	)
	.ok();
	path
}

fn monotone_tangents(points: &[Point]) -> Vec<f64> {
	let n = points.len();
	let mut tangents = vec![0.0; n];
	if n < 3 {
		return tangents;
	}
	for i in 1..n - 1 {
		tangents[i] = interior_tangent(points[i - 1], points[i], points[i + 1]);
	}
	tangents[0] = endpoint_tangent(points[0], points[1], tangents[1]);
	tangents[n - 1] = endpoint_tangent(points[n - 2], points[n - 1], tangents[n - 2]);
	tangents
}

fn interior_tangent(previous_point: Point, point: Point, next_point: Point) -> f64 {
	let h0 = point.x - previous_point.x;
	let h1 = next_point.x - point.x;
	let s0 = if h0 != 0.0 {
		(point.y - previous_point.y) / h0
	} else {
		0.0
	};
	let s1 = if h1 != 0.0 {
		(next_point.y - point.y) / h1
	} else {
		0.0
	};
	let p = if h0 + h1 != 0.0 {
		(s0 * h1 + s1 * h0) / (h0 + h1)
	} else {
		0.0
	};
	(signum(s0) + signum(s1)) * s0.abs().min(s1.abs()).min(0.5 * p.abs())
}

fn endpoint_tangent(p0: Point, p1: Point, neighbor_tangent: f64) -> f64 {
	let h = p1.x - p0.x;
	if h != 0.0 {
		(3.0 * (p1.y - p0.y) / h - neighbor_tangent) / 2.0
	} else {
		neighbor_tangent
	}
}

fn signum(value: f64) -> f64 {
	if value > 0.0 {
		1.0
	} else if value < 0.0 {
		-1.0
	} else {
		0.0
	}
}

pub(crate) fn fmt(value: f64) -> String {
	crate::common::format_number(value)
}

#[cfg(test)]
mod test {
	use super::*;

	fn market_options() -> AreaChartOptions {
		AreaChartOptions {
			id: "market".to_owned(),
			series: AreaChartSeries {
				color: "#ef4444".to_owned(),
				data: vec![
					TimeSeriesPoint::new("2024", 112.0),
					TimeSeriesPoint::new("2025", 210.0),
					TimeSeriesPoint::new("2026", 386.0),
					TimeSeriesPoint::new("2027", 555.0),
					TimeSeriesPoint::new("2028", 766.0),
					TimeSeriesPoint::new("2029", 1097.0),
				],
				stroke_width: Some(4.0),
				title: None,
			},
			width: None,
			height: None,
			y_min: None,
			y_max: None,
			y_axis_tick_count: None,
		}
	}

	#[test]
	fn test_layout_preserves_label_order() {
		let layout = compute_area_chart_layout(&market_options()).unwrap();
		let labels: Vec<&str> = layout.points.iter().map(|p| p.label.as_str()).collect();
		assert_eq!(labels, vec!["2024", "2025", "2026", "2027", "2028", "2029"]);
		for (a, b) in layout.points.iter().tuple_windows() {
			assert!(a.pixel.x < b.pixel.x);
		}
		assert_eq!(layout.points[0].pixel.x, layout.chart_box.x);
		assert_eq!(layout.points[5].pixel.x, layout.chart_box.right());
	}

	#[test]
	fn test_layout_round_trips_values() {
		let layout = compute_area_chart_layout(&market_options()).unwrap();
		for (a, b) in layout.points.iter().tuple_windows() {
			assert!(b.value > a.value);
			assert!(b.pixel.y < a.pixel.y);
		}
		for point in layout.points.iter() {
			let value = layout.y_scale.invert(point.pixel.y);
			assert!((value - point.value).abs() < 1e-9);
		}
		assert_eq!(layout.y_axis_grid_line_info.values(), vec![0.0, 300.0, 600.0, 900.0, 1200.0]);
		assert_eq!(layout.baseline(), layout.chart_box.bottom());
	}

	#[test]
	fn test_hover_regions_tile_the_chart_box() {
		let layout = compute_area_chart_layout(&market_options()).unwrap();
		let total: f64 = layout.points.iter().map(|p| p.hover_region.w).sum();
		assert!((total - layout.chart_box.w).abs() < 1e-9);
		for (a, b) in layout.points.iter().tuple_windows() {
			assert!((a.hover_region.right() - b.hover_region.x).abs() < 1e-9);
		}
	}

	#[test]
	fn test_invalid_series() {
		let mut options = market_options();
		options.series.data.clear();
		assert_eq!(
			compute_area_chart_layout(&options).unwrap_err(),
			AreaChartError::EmptySeries
		);
		let mut options = market_options();
		options.series.data[2].value = f64::NAN;
		assert_eq!(
			compute_area_chart_layout(&options).unwrap_err(),
			AreaChartError::NonFiniteValue {
				label: "2026".to_owned()
			}
		);
	}

	#[test]
	fn test_single_point_is_centered() {
		let mut options = market_options();
		options.series.data.truncate(1);
		let layout = compute_area_chart_layout(&options).unwrap();
		let point = &layout.points[0];
		assert_eq!(point.pixel.x, layout.chart_box.x + layout.chart_box.w / 2.0);
		assert_eq!(point.hover_region, layout.chart_box);
	}

	#[test]
	fn test_monotone_path_does_not_overshoot() {
		let points = vec![
			Point { x: 0.0, y: 100.0 },
			Point { x: 10.0, y: 100.0 },
			Point { x: 20.0, y: 0.0 },
			Point { x: 30.0, y: 0.0 },
		];
		let tangents = monotone_tangents(&points);
		// Flat runs keep a flat tangent at their inner ends.
		assert_eq!(tangents[1], 0.0);
		assert_eq!(tangents[2], 0.0);
		let path = monotone_path(&points);
		assert!(path.starts_with("M0,100C"));
		assert!(path.ends_with(",30,0"));
	}

	fn assert_segments_stay_between_their_ends(points: &[Point]) {
		let segments = monotone_segments(points);
		assert_eq!(segments.len(), points.len() - 1);
		for [start, c0, c1, end] in segments {
			let low = start.y.min(end.y) - 1e-9;
			let high = start.y.max(end.y) + 1e-9;
			for control in [c0, c1].iter() {
				assert!(
					control.y >= low && control.y <= high,
					"control y {} is outside [{}, {}]",
					control.y,
					low,
					high
				);
			}
		}
	}

	#[test]
	fn test_market_curve_does_not_overshoot() {
		let layout = compute_area_chart_layout(&market_options()).unwrap();
		assert_segments_stay_between_their_ends(&layout.pixels());
	}

	#[test]
	fn test_steep_step_does_not_overshoot() {
		let points = vec![
			Point { x: 0.0, y: 300.0 },
			Point { x: 10.0, y: 299.0 },
			Point { x: 20.0, y: 10.0 },
			Point { x: 30.0, y: 9.0 },
			Point { x: 40.0, y: 9.0 },
			Point { x: 50.0, y: 200.0 },
		];
		assert_segments_stay_between_their_ends(&points);
	}

	#[test]
	fn test_chart_box_collapses_when_too_small() {
		let mut options = market_options();
		options.width = Some(50.0);
		options.height = Some(20.0);
		let layout = compute_area_chart_layout(&options).unwrap();
		assert_eq!(layout.chart_box.w, 0.0);
		assert_eq!(layout.chart_box.h, 0.0);
		for point in layout.points.iter() {
			assert!(point.hover_region.w >= 0.0);
			assert!(point.hover_region.h >= 0.0);
			assert_eq!(point.pixel.x, layout.chart_box.x);
		}
	}

	#[test]
	fn test_paths_for_short_series() {
		assert_eq!(monotone_path(&[]), "");
		let points = [Point { x: 0.0, y: 10.0 }, Point { x: 5.5, y: 2.0 }];
		assert_eq!(monotone_path(&points), "M0,10L5.5,2");
		assert_eq!(area_path(&points, 20.0), "M0,10L5.5,2L5.5,20L0,20Z");
	}
}
