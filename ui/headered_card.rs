use crate::icon::Icon;
use html::{classes, component, html, Node};

/// A bordered card with a header band holding a tinted icon badge, a title, and an optional element on the right. Children form the body.
///
/// `color_class` is a text color token such as `text-blue-500`. The badge background uses the matching `bg-` token, so callers must pass a token whose `bg-` counterpart exists in the stylesheet or the badge renders untinted.
#[component]
pub fn HeaderedCard<I: Icon + Clone + 'static>(
	title: String,
	icon: I,
	color_class: String,
	right_element: Option<Node>,
	class: Option<String>,
) {
	let wrapper_class = classes!(
		"bg-white rounded-xl shadow-sm border border-gray-200 overflow-hidden mb-8",
		class,
	);
	let badge_class = classes!(
		"p-2 rounded-lg bg-opacity-10",
		background_token(&color_class),
	);
	let icon_class = classes!("w-5 h-5", color_class);
	html! {
		<div class={wrapper_class}>
			<div class="px-6 py-4 border-b border-gray-100 flex items-center justify-between bg-gray-50/30">
				<div class="flex items-center gap-3">
					<div class={badge_class}>{icon.render(icon_class)}</div>
					<h2 class="text-lg font-bold text-gray-800 tracking-tight">{title}</h2>
				</div>
				{right_element}
			</div>
			<div class="p-6">{children}</div>
		</div>
	}
}

/// Derive the background token paired with a text color token by replacing its first `text-` with `bg-`.
pub fn background_token(color_class: &str) -> String {
	color_class.replacen("text-", "bg-", 1)
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::icon::TrendingUp;

	fn square(class: String) -> Node {
		html! { <i class={class}></i> }
	}

	#[test]
	fn test_background_token() {
		assert_eq!(background_token("text-blue-500"), "bg-blue-500");
		assert_eq!(background_token("text-orange-500"), "bg-orange-500");
		assert_eq!(background_token("hover:text-red-600"), "hover:bg-red-600");
		// Only the first occurrence is replaced, and tokens without a text prefix pass through.
		assert_eq!(background_token("text-text-500"), "bg-text-500");
		assert_eq!(background_token("fill-blue-500"), "fill-blue-500");
	}

	#[test]
	fn test_headered_card() {
		let html = html! {
			<HeaderedCard
				title={"Test".to_owned()}
				icon={square}
				color_class={"text-blue-500".to_owned()}
				right_element={None}
				class={None}
			>
				<p>{"Hello"}</p>
			</HeaderedCard>
		}
		.render_to_string();
		insta::assert_snapshot!(html, @r###"<div class="bg-white rounded-xl shadow-sm border border-gray-200 overflow-hidden mb-8"><div class="px-6 py-4 border-b border-gray-100 flex items-center justify-between bg-gray-50/30"><div class="flex items-center gap-3"><div class="p-2 rounded-lg bg-opacity-10 bg-blue-500"><i class="w-5 h-5 text-blue-500"></i></div><h2 class="text-lg font-bold text-gray-800 tracking-tight">Test</h2></div></div><div class="p-6"><p>Hello</p></div></div>"###);
	}

	#[test]
	fn test_headered_card_right_element_and_class() {
		let html = html! {
			<HeaderedCard
				title={"Sources".to_owned()}
				icon={TrendingUp}
				color_class={"text-orange-500".to_owned()}
				right_element={Some(html! { <span class="badge">{"Live"}</span> })}
				class={Some("col-span-2".to_owned())}
			>
				{"body"}
			</HeaderedCard>
		}
		.render_to_string();
		assert!(html.starts_with(
			r#"<div class="bg-white rounded-xl shadow-sm border border-gray-200 overflow-hidden mb-8 col-span-2">"#
		));
		assert!(html.contains(r#"<svg class="w-5 h-5 text-orange-500""#));
		assert!(html.contains(
			r#"</h2></div><span class="badge">Live</span></div><div class="p-6">body</div>"#
		));
	}

	#[test]
	fn test_headered_card_empty_class() {
		let html = html! {
			<HeaderedCard
				title={"Empty".to_owned()}
				icon={square}
				color_class={"text-gray-500".to_owned()}
				right_element={None}
				class={Some(String::new())}
			>
			</HeaderedCard>
		}
		.render_to_string();
		assert!(html.starts_with(
			r#"<div class="bg-white rounded-xl shadow-sm border border-gray-200 overflow-hidden mb-8"><div"#
		));
		assert!(html.ends_with(r#"<div class="p-6"></div></div>"#));
	}
}
