#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
	pub x: f64,
	pub y: f64,
	pub w: f64,
	pub h: f64,
}

impl Rect {
	pub fn right(&self) -> f64 {
		self.x + self.w
	}

	pub fn bottom(&self) -> f64 {
		self.y + self.h
	}
}

/// Evenly spaced grid lines starting at `start`. The first and last grid lines enclose the range they were computed for.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLineInfo {
	pub interval: f64,
	pub num_grid_lines: usize,
	pub start: f64,
}

impl GridLineInfo {
	pub fn end(&self) -> f64 {
		self.start + self.interval * (self.num_grid_lines - 1) as f64
	}

	pub fn values(&self) -> Vec<f64> {
		(0..self.num_grid_lines)
			.map(|grid_line_index| self.start + self.interval * grid_line_index as f64)
			.collect()
	}
}

pub fn compute_grid_line_info(min: f64, max: f64, tick_count: usize) -> GridLineInfo {
	let tick_count = tick_count.max(2);
	let max = if max > min { max } else { min + 1.0 };
	let interval = compute_grid_line_interval((max - min) / (tick_count - 1) as f64);
	let start = (min / interval).floor() * interval;
	let num_grid_lines = ((max - start) / interval).ceil() as usize + 1;
	GridLineInfo {
		interval,
		num_grid_lines: num_grid_lines.max(2),
		start,
	}
}

// Round the step up to a multiple of 1/20 of its decade, or 1/10 for steps in [1, 10).
pub fn compute_grid_line_interval(rough_interval: f64) -> f64 {
	let digit_count = rough_interval.log10().floor() as i32 + 1;
	let scale = 10f64.powi(digit_count);
	let unit = if digit_count == 1 {
		scale / 10.0
	} else {
		scale / 20.0
	};
	(rough_interval / unit).ceil() * unit
}

/// Maps values in `domain_min..domain_max` linearly onto pixels. The range may be inverted, as it is for y axes where larger values sit higher on the screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
	pub domain_min: f64,
	pub domain_max: f64,
	pub range_min: f64,
	pub range_max: f64,
}

impl LinearScale {
	pub fn map(&self, value: f64) -> f64 {
		self.range_min
			+ (value - self.domain_min) / (self.domain_max - self.domain_min)
				* (self.range_max - self.range_min)
	}

	pub fn invert(&self, pixel: f64) -> f64 {
		self.domain_min
			+ (pixel - self.range_min) / (self.range_max - self.range_min)
				* (self.domain_max - self.domain_min)
	}
}

/// Format a number with at most two decimals, dropping trailing zeros.
pub fn format_number(value: f64) -> String {
	let formatted = format!("{:.2}", value);
	let formatted = formatted.trim_end_matches('0').trim_end_matches('.');
	if formatted == "-0" {
		"0".to_owned()
	} else {
		formatted.to_owned()
	}
}

#[test]
fn test_compute_grid_line_interval() {
	assert_eq!(compute_grid_line_interval(274.25), 300.0);
	assert_eq!(compute_grid_line_interval(300.0), 300.0);
	assert_eq!(compute_grid_line_interval(4.2), 5.0);
	assert_eq!(compute_grid_line_interval(12.0), 15.0);
}

#[test]
fn test_compute_grid_line_info() {
	let grid_line_info = compute_grid_line_info(0.0, 1097.0, 5);
	insta::assert_debug_snapshot!(grid_line_info.values(), @r###"
 [
     0.0,
     300.0,
     600.0,
     900.0,
     1200.0,
 ]
 "###);
	assert_eq!(grid_line_info.end(), 1200.0);
}

#[test]
fn test_compute_grid_line_info_flat_range() {
	let grid_line_info = compute_grid_line_info(0.0, 0.0, 5);
	assert!(grid_line_info.end() > 0.0);
	assert_eq!(grid_line_info.start, 0.0);
}

#[test]
fn test_linear_scale_invert() {
	let scale = LinearScale {
		domain_min: 0.0,
		domain_max: 1200.0,
		range_min: 305.0,
		range_max: 10.0,
	};
	assert_eq!(scale.map(0.0), 305.0);
	assert_eq!(scale.map(1200.0), 10.0);
	for value in [112.0, 210.0, 386.0, 555.0, 766.0, 1097.0].iter() {
		assert!((scale.invert(scale.map(*value)) - value).abs() < 1e-9);
	}
}

#[test]
fn test_format_number() {
	assert_eq!(format_number(1200.0), "1200");
	assert_eq!(format_number(0.0), "0");
	assert_eq!(format_number(-0.001), "0");
	assert_eq!(format_number(12.5), "12.5");
	assert_eq!(format_number(3.14159), "3.14");
}
