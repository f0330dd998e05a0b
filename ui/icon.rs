use html::{html, Node};

/// Anything that can draw itself as an icon given the class list to apply to its root element. Closures taking the class list work too, so callers can pass any renderable.
pub trait Icon {
	fn render(&self, class: String) -> Node;
}

impl<F> Icon for F
where
	F: Fn(String) -> Node,
{
	fn render(&self, class: String) -> Node {
		self(class)
	}
}

#[derive(Clone)]
pub struct TrendingUp;

impl Icon for TrendingUp {
	fn render(&self, class: String) -> Node {
		html! {
			<svg
				class={class}
				fill="none"
				stroke="currentColor"
				stroke-linecap="round"
				stroke-linejoin="round"
				stroke-width="2"
				viewBox="0 0 24 24"
				xmlns="http://www.w3.org/2000/svg"
			>
				<polyline points="22 7 13.5 15.5 8.5 10.5 2 17" />
				<polyline points="16 7 22 7 22 13" />
			</svg>
		}
	}
}

#[derive(Clone)]
pub struct BarChart3;

impl Icon for BarChart3 {
	fn render(&self, class: String) -> Node {
		html! {
			<svg
				class={class}
				fill="none"
				stroke="currentColor"
				stroke-linecap="round"
				stroke-linejoin="round"
				stroke-width="2"
				viewBox="0 0 24 24"
				xmlns="http://www.w3.org/2000/svg"
			>
				<path d="M3 3v18h18" />
				<path d="M18 17V9" />
				<path d="M13 17V5" />
				<path d="M8 17v-3" />
			</svg>
		}
	}
}

#[derive(Clone)]
pub struct Globe;

impl Icon for Globe {
	fn render(&self, class: String) -> Node {
		html! {
			<svg
				class={class}
				fill="none"
				stroke="currentColor"
				stroke-linecap="round"
				stroke-linejoin="round"
				stroke-width="2"
				viewBox="0 0 24 24"
				xmlns="http://www.w3.org/2000/svg"
			>
				<circle cx="12" cy="12" r="10" />
				<path d="M12 2a14.5 14.5 0 0 0 0 20 14.5 14.5 0 0 0 0-20" />
				<path d="M2 12h20" />
			</svg>
		}
	}
}

#[derive(Clone)]
pub struct Target;

impl Icon for Target {
	fn render(&self, class: String) -> Node {
		html! {
			<svg
				class={class}
				fill="none"
				stroke="currentColor"
				stroke-linecap="round"
				stroke-linejoin="round"
				stroke-width="2"
				viewBox="0 0 24 24"
				xmlns="http://www.w3.org/2000/svg"
			>
				<circle cx="12" cy="12" r="10" />
				<circle cx="12" cy="12" r="6" />
				<circle cx="12" cy="12" r="2" />
			</svg>
		}
	}
}

#[cfg(test)]
mod test {
	use super::*;

	fn render(icon: impl Icon) -> String {
		icon.render("w-5 h-5".to_owned()).render_to_string()
	}

	#[test]
	fn test_bundled_icons() {
		let icons = vec![
			(render(TrendingUp), r#"<polyline points="22 7 13.5 15.5 8.5 10.5 2 17" />"#),
			(render(BarChart3), r#"<path d="M3 3v18h18" />"#),
			(render(Globe), r#"<path d="M2 12h20" />"#),
			(render(Target), r#"<circle cx="12" cy="12" r="6" />"#),
		];
		for (html, shape) in icons {
			assert!(html.starts_with(r#"<svg class="w-5 h-5" fill="none" stroke="currentColor""#));
			assert!(html.contains(shape));
			assert!(html.ends_with("</svg>"));
		}
	}

	#[test]
	fn test_closure_icon() {
		let icon = |class: String| html! { <i class={class}></i> };
		assert_eq!(render(icon), r#"<i class="w-5 h-5"></i>"#);
	}
}
