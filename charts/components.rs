use crate::area_chart::{
	area_path, compute_area_chart_layout, fmt, monotone_path, AreaChartOptions, AreaChartSeries,
};
use crate::common::format_number;
use crate::config::{CHART_CONFIG, LIGHT_CHART_COLORS};
use crate::tooltip::AreaChartHoverRegion;
use html::{classes, component, html};

/// A smoothed area chart drawn as svg. The svg scales with its container. Hovering a point shows its tooltip.
#[component]
pub fn AreaChart(class: Option<String>, options: AreaChartOptions) {
	let layout = match compute_area_chart_layout(&options) {
		Ok(layout) => layout,
		Err(error) => {
			log::warn!("not drawing area chart {}: {}", options.id, error);
			return html! {
				<div class={classes!("chart-wrapper", class)}>
					<div class="chart-placeholder">{"No data to display."}</div>
				</div>
			};
		}
	};
	let AreaChartOptions {
		id,
		series:
			AreaChartSeries {
				color,
				stroke_width,
				title,
				..
			},
		..
	} = options;
	let gradient_id = format!("{}-gradient", id);
	let pixels = layout.pixels();
	let chart_box = layout.chart_box;
	let series_title = title.unwrap_or_else(|| "value".to_owned());
	let stroke_width = stroke_width.unwrap_or(CHART_CONFIG.stroke_width);

	// Only horizontal grid lines are drawn.
	let grid_lines = layout
		.y_axis_grid_line_info
		.values()
		.into_iter()
		.map(|value| {
			let y = fmt(layout.y_scale.map(value));
			html! {
				<line
					class="area-chart-grid-line"
					stroke={LIGHT_CHART_COLORS.grid_line_color}
					stroke-dasharray="3 3"
					x1={fmt(chart_box.x)}
					x2={fmt(chart_box.right())}
					y1={y.clone()}
					y2={y}
				/>
			}
		})
		.collect::<Vec<_>>();
	let y_axis_labels = layout
		.y_axis_grid_line_info
		.values()
		.into_iter()
		.map(|value| {
			html! {
				<text
					class="area-chart-y-axis-label"
					dy="0.355em"
					fill={LIGHT_CHART_COLORS.label_color}
					font-size={fmt(CHART_CONFIG.font_size)}
					text-anchor="end"
					x={fmt(chart_box.x - CHART_CONFIG.label_padding)}
					y={fmt(layout.y_scale.map(value))}
				>
					{format_number(value)}
				</text>
			}
		})
		.collect::<Vec<_>>();
	let x_axis_labels = layout
		.points
		.iter()
		.map(|point| {
			html! {
				<text
					class="area-chart-x-axis-label"
					dy="0.71em"
					fill={LIGHT_CHART_COLORS.label_color}
					font-size={fmt(CHART_CONFIG.font_size)}
					text-anchor="middle"
					x={fmt(point.pixel.x)}
					y={fmt(chart_box.bottom() + CHART_CONFIG.label_padding)}
				>
					{point.label.clone()}
				</text>
			}
		})
		.collect::<Vec<_>>();
	let hover_regions = layout
		.points
		.iter()
		.map(|point| {
			html! {
				<AreaChartHoverRegion
					chart_box={chart_box}
					chart_height={layout.height}
					color={color.clone()}
					point={point.clone()}
					series_title={series_title.clone()}
				/>
			}
		})
		.collect::<Vec<_>>();
	html! {
		<div class={classes!("chart-wrapper", class)}>
			<svg
				aria-label={series_title.clone()}
				class="area-chart"
				height="100%"
				role="img"
				viewBox={format!("0 0 {} {}", fmt(layout.width), fmt(layout.height))}
				width="100%"
				xmlns="http://www.w3.org/2000/svg"
			>
				<defs>
					<linearGradient id={gradient_id.clone()} x1="0" x2="0" y1="0" y2="1">
						<stop offset="5%" stop-color={color.clone()} stop-opacity="0.3" />
						<stop offset="95%" stop-color={color.clone()} stop-opacity="0" />
					</linearGradient>
				</defs>
				<g class="area-chart-grid">{grid_lines}</g>
				<g class="area-chart-y-axis">{y_axis_labels}</g>
				<g class="area-chart-x-axis">{x_axis_labels}</g>
				<path
					class="area-chart-area"
					d={area_path(&pixels, layout.baseline())}
					fill={format!("url(#{})", gradient_id)}
					stroke="none"
				/>
				<path
					class="area-chart-line"
					d={monotone_path(&pixels)}
					fill="none"
					stroke={color.clone()}
					stroke-width={fmt(stroke_width)}
				/>
				<g class="area-chart-hover-regions">{hover_regions}</g>
			</svg>
		</div>
	}
}
