use crate::layouts::{document::PageInfo, page_layout::PageLayout};
use geo_ui::{HeaderedCard, TrendingUp};
use html::html;

mod trend_chart_section;

use self::trend_chart_section::TrendChartSection;

pub fn render() -> String {
	let page_info = PageInfo {
		title: "GEO Market Insights".to_owned(),
		description: "How generative engine optimization is reshaping brand discovery.".to_owned(),
	};
	let source = html! {
		<span class="text-xs text-gray-400">{"Source: iResearch, Gartner"}</span>
	};
	html! {
		<PageLayout page_info={page_info}>
			<HeaderedCard
				title={"Market Outlook".to_owned()}
				icon={TrendingUp}
				color_class={"text-red-600".to_owned()}
				right_element={Some(source)}
				class={None}
			>
				<TrendChartSection />
			</HeaderedCard>
		</PageLayout>
	}
	.render_to_string()
}

#[test]
fn test_render_index() {
	let html = render();
	assert!(html.starts_with("<!doctype html><html lang=\"en\"><head>"));
	assert!(html.contains("<title>GEO Market Insights</title>"));
	assert!(html.contains(r#"<div class="p-2 rounded-lg bg-opacity-10 bg-red-600"><svg class="w-5 h-5 text-red-600""#));
	assert!(html.contains(r#"<h2 class="text-lg font-bold text-gray-800 tracking-tight">Market Outlook</h2></div><span class="text-xs text-gray-400">Source: iResearch, Gartner</span></div>"#));
	assert!(html.contains(r#"<div class="p-6"><section class="py-24 bg-white" id="market">"#));
	assert!(html.contains(r#"</section></div></div></main>"#));
	assert!(html.ends_with("</main></body></html>"));
}
