pub struct ChartConfig {
	pub bottom_padding: f64,
	pub font_size: f64,
	pub height: f64,
	pub label_padding: f64,
	pub left_padding: f64,
	pub point_radius: f64,
	pub right_padding: f64,
	pub stroke_width: f64,
	pub tooltip_border_radius: f64,
	pub tooltip_height: f64,
	pub tooltip_offset: f64,
	pub tooltip_padding: f64,
	pub tooltip_width: f64,
	pub top_padding: f64,
	pub width: f64,
	pub x_axis_labels_height: f64,
	pub y_axis_labels_width: f64,
	pub y_axis_tick_count: usize,
}

pub const CHART_CONFIG: ChartConfig = ChartConfig {
	bottom_padding: 5.0,
	font_size: 12.0,
	height: 340.0,
	label_padding: 8.0,
	left_padding: 5.0,
	point_radius: 4.0,
	right_padding: 10.0,
	stroke_width: 2.0,
	tooltip_border_radius: 12.0,
	tooltip_height: 64.0,
	tooltip_offset: 12.0,
	tooltip_padding: 10.0,
	tooltip_width: 120.0,
	top_padding: 10.0,
	width: 600.0,
	x_axis_labels_height: 30.0,
	y_axis_labels_width: 50.0,
	y_axis_tick_count: 5,
};

pub struct ChartColors {
	pub crosshairs_color: &'static str,
	pub grid_line_color: &'static str,
	pub label_color: &'static str,
	pub point_stroke_color: &'static str,
	pub tooltip_background_color: &'static str,
	pub tooltip_shadow: &'static str,
}

pub const LIGHT_CHART_COLORS: ChartColors = ChartColors {
	crosshairs_color: "#cccccc",
	grid_line_color: "#f3f4f6",
	label_color: "#9ca3af",
	point_stroke_color: "#ffffff",
	tooltip_background_color: "#ffffff",
	tooltip_shadow: "0 10px 15px -3px rgba(0, 0, 0, 0.1)",
};
