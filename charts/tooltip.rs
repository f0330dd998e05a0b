use crate::area_chart::{fmt, PlottedPoint};
use crate::common::{format_number, Point, Rect};
use crate::config::{CHART_CONFIG, LIGHT_CHART_COLORS};
use html::{component, html, style};

/// Place the tooltip to the right of `origin`, or to its left when it would overflow the chart box. It is centered vertically on the point and kept inside the chart.
pub fn compute_tooltip_position(origin: Point, chart_box: Rect, chart_height: f64) -> Point {
	let right = origin.x + CHART_CONFIG.tooltip_offset;
	let x = if right + CHART_CONFIG.tooltip_width > chart_box.right() {
		origin.x - CHART_CONFIG.tooltip_offset - CHART_CONFIG.tooltip_width
	} else {
		right
	};
	let y = (origin.y - CHART_CONFIG.tooltip_height / 2.0)
		.min(chart_height - CHART_CONFIG.tooltip_height)
		.max(0.0);
	Point { x, y }
}

#[component]
pub fn AreaChartHoverRegion(
	chart_box: Rect,
	chart_height: f64,
	color: String,
	point: PlottedPoint,
	series_title: String,
) {
	let hover_region = point.hover_region;
	let position = compute_tooltip_position(point.pixel, chart_box, chart_height);
	let tooltip_style = style! {
		"background-color" => LIGHT_CHART_COLORS.tooltip_background_color,
		"border-radius" => format!("{}px", CHART_CONFIG.tooltip_border_radius),
		"box-shadow" => LIGHT_CHART_COLORS.tooltip_shadow,
		"font-size" => format!("{}px", CHART_CONFIG.font_size),
		"padding" => format!("{}px", CHART_CONFIG.tooltip_padding),
	};
	let value_style = style! {
		"color" => color.clone(),
	};
	html! {
		<g class="area-chart-hover-region">
			<rect
				class="area-chart-hover-target"
				fill="transparent"
				height={fmt(hover_region.h)}
				width={fmt(hover_region.w)}
				x={fmt(hover_region.x)}
				y={fmt(hover_region.y)}
			/>
			<g class="area-chart-tooltip">
				<line
					class="area-chart-cursor"
					stroke={LIGHT_CHART_COLORS.crosshairs_color}
					x1={fmt(point.pixel.x)}
					x2={fmt(point.pixel.x)}
					y1={fmt(chart_box.y)}
					y2={fmt(chart_box.bottom())}
				/>
				<circle
					class="area-chart-active-dot"
					cx={fmt(point.pixel.x)}
					cy={fmt(point.pixel.y)}
					fill={color}
					r={fmt(CHART_CONFIG.point_radius)}
					stroke={LIGHT_CHART_COLORS.point_stroke_color}
					stroke-width="2"
				/>
				<foreignObject
					height={fmt(CHART_CONFIG.tooltip_height)}
					width={fmt(CHART_CONFIG.tooltip_width)}
					x={fmt(position.x)}
					y={fmt(position.y)}
				>
					<div
						class="area-chart-tooltip-content"
						style={tooltip_style}
						xmlns="http://www.w3.org/1999/xhtml"
					>
						<div class="area-chart-tooltip-label">{point.label}</div>
						<div class="area-chart-tooltip-value" style={value_style}>
							{format!("{} : {}", series_title, format_number(point.value))}
						</div>
					</div>
				</foreignObject>
			</g>
		</g>
	}
}

#[test]
fn test_tooltip_flips_near_the_right_edge() {
	let chart_box = Rect {
		x: 55.0,
		y: 10.0,
		w: 535.0,
		h: 295.0,
	};
	let left = compute_tooltip_position(Point { x: 55.0, y: 200.0 }, chart_box, 340.0);
	assert_eq!(left.x, 55.0 + CHART_CONFIG.tooltip_offset);
	assert_eq!(left.y, 200.0 - CHART_CONFIG.tooltip_height / 2.0);
	let right = compute_tooltip_position(Point { x: 590.0, y: 10.0 }, chart_box, 340.0);
	assert_eq!(
		right.x,
		590.0 - CHART_CONFIG.tooltip_offset - CHART_CONFIG.tooltip_width
	);
	assert_eq!(right.y, 0.0);
}

#[test]
fn test_hover_region_renders_tooltip() {
	let point = PlottedPoint {
		label: "2025".to_owned(),
		value: 210.0,
		pixel: Point { x: 162.0, y: 253.375 },
		hover_region: Rect {
			x: 108.5,
			y: 10.0,
			w: 107.0,
			h: 295.0,
		},
	};
	let html = html! {
		<AreaChartHoverRegion
			chart_box={Rect { x: 55.0, y: 10.0, w: 535.0, h: 295.0 }}
			chart_height={340.0}
			color={"#ef4444".to_owned()}
			point={point}
			series_title={"value".to_owned()}
		/>
	}
	.render_to_string();
	assert!(html.contains(r#"<rect class="area-chart-hover-target" fill="transparent" height="295" width="107" x="108.5" y="10" />"#));
	assert!(html.contains(r#"<div class="area-chart-tooltip-label">2025</div>"#));
	assert!(html.contains("value : 210"));
	assert!(html.contains("border-radius: 12px;"));
	assert!(html.contains("box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);"));
}
