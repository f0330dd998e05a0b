use maplit::btreemap;
use std::collections::BTreeMap;

pub struct Route {
	pub content_type: &'static str,
	/// The file the route is written to by `export`.
	pub file_name: &'static str,
	pub render: Box<dyn Fn() -> String + Send + Sync>,
}

pub type RouteMap = BTreeMap<&'static str, Route>;

pub fn build_route_map() -> RouteMap {
	btreemap! {
		"/" => Route {
			content_type: "text/html; charset=utf-8",
			file_name: "index.html",
			render: Box::new(crate::pages::index::render),
		},
		"/styles.css" => Route {
			content_type: "text/css; charset=utf-8",
			file_name: "styles.css",
			render: Box::new(render_styles),
		},
	}
}

fn render_styles() -> String {
	[geo_charts::STYLES, include_str!("styles.css")].join("\n")
}

#[test]
fn test_route_map() {
	let routes = build_route_map();
	assert_eq!(routes.keys().copied().collect::<Vec<_>>(), vec!["/", "/styles.css"]);
	let styles = (routes["/styles.css"].render)();
	assert!(styles.contains(".area-chart-hover-region:hover .area-chart-tooltip"));
	assert!(styles.contains(".trend-chart-container"));
}
