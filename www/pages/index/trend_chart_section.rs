use geo_charts::{AreaChart, AreaChartOptions, AreaChartSeries, TimeSeriesPoint};
use html::{classes, component, html};

#[derive(Clone, Copy)]
pub enum CalloutTone {
	Highlight,
	Neutral,
}

#[derive(Clone)]
pub struct StatCallout {
	pub value: &'static str,
	pub label: &'static str,
	pub tone: CalloutTone,
}

const STAT_CALLOUTS: [StatCallout; 2] = [
	StatCallout {
		value: "215%",
		label: "Projected year-over-year growth in 2025",
		tone: CalloutTone::Highlight,
	},
	StatCallout {
		value: "$50B",
		label: "Global market size in 2026",
		tone: CalloutTone::Neutral,
	},
];

// Global GEO market size in units of USD 100M.
const MARKET_SIZE: [(&str, f64); 6] = [
	("2024", 112.0),
	("2025", 210.0),
	("2026", 386.0),
	("2027", 555.0),
	("2028", 766.0),
	("2029", 1097.0),
];

const SERIES_COLOR: &str = "#ef4444";

pub fn market_size_series() -> Vec<TimeSeriesPoint> {
	MARKET_SIZE
		.iter()
		.map(|(label, value)| TimeSeriesPoint::new(*label, *value))
		.collect()
}

#[component]
pub fn TrendChartSection() {
	let options = AreaChartOptions {
		id: "market-size".to_owned(),
		series: AreaChartSeries {
			color: SERIES_COLOR.to_owned(),
			data: market_size_series(),
			stroke_width: Some(4.0),
			title: None,
		},
		width: None,
		height: None,
		y_min: None,
		y_max: None,
		y_axis_tick_count: None,
	};
	let callouts = STAT_CALLOUTS
		.iter()
		.cloned()
		.map(|callout| html! { <StatCalloutCard callout={callout} /> })
		.collect::<Vec<_>>();
	html! {
		<section class="py-24 bg-white" id="market">
			<div class="container mx-auto px-6">
				<div class="flex flex-col md:flex-row gap-16 items-center">
					<div class="md:w-1/2">
						<h2 class="text-4xl font-bold text-gray-900 mb-6">
							{"GEO Market Growth Is Exploding"}
							<br />
							<span class="text-red-600">{"The Ground Every Brand Must Win"}</span>
						</h2>
						<p class="text-lg text-gray-600 mb-8 leading-relaxed">
							{"iResearch and Gartner project the GEO market to grow 215% year over year in 2025. As AI search keeps taking traffic from traditional search engines, AI is becoming the most important entry point for brands."}
						</p>
						<div class="grid grid-cols-2 gap-8">{callouts}</div>
					</div>
					<div class="md:w-1/2 w-full h-[400px] bg-white rounded-3xl shadow-xl p-8 border border-gray-100 relative overflow-hidden">
						<div class="absolute top-0 left-0 w-full h-2 bg-red-600"></div>
						<h3 class="text-xl font-bold text-gray-800 mb-6">
							{"Global GEO Market Size Forecast (USD 100M)"}
						</h3>
						<div class="trend-chart-container">
							<AreaChart class={None} options={options} />
						</div>
					</div>
				</div>
			</div>
		</section>
	}
}

#[component]
fn StatCalloutCard(callout: StatCallout) {
	let (wrapper_tone, value_tone) = match callout.tone {
		CalloutTone::Highlight => ("bg-red-50 border-red-100", "text-red-600"),
		CalloutTone::Neutral => ("bg-gray-50 border-gray-100", "text-gray-800"),
	};
	html! {
		<div class={classes!("p-6 rounded-2xl border", wrapper_tone)}>
			<div class={classes!("text-4xl font-bold mb-2", value_tone)}>{callout.value}</div>
			<div class="text-gray-600 font-medium">{callout.label}</div>
		</div>
	}
}
