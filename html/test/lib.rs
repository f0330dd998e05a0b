use html::{classes, component, html};

#[component]
fn Greeting(name: String) {
	html! {
		<div class="greeting">{format!("Hello {}", name)}</div>
	}
}

#[component]
fn Wrapper(class: Option<String>) {
	html! {
		<section class={classes!("wrapper", class)}>{children}</section>
	}
}

pub trait Label: Clone + 'static {
	fn label(&self) -> String;
}

#[derive(Clone)]
struct Year(u32);

impl Label for Year {
	fn label(&self) -> String {
		self.0.to_string()
	}
}

#[component]
fn Labeled<L: Label>(label: L) {
	html! {
		<span>{label.label()}</span>
	}
}

#[test]
fn test_host_element() {
	let html = html!(<div>{"Hello World"}</div>).render_to_string();
	assert_eq!(html, "<div>Hello World</div>");
}

#[test]
fn test_component() {
	let html = html!(<Greeting name={"World".to_owned()} />).render_to_string();
	assert_eq!(html, r#"<div class="greeting">Hello World</div>"#);
}

#[test]
fn test_children_are_passed_through() {
	let html = html! {
		<Wrapper class={None}>
			<p>{"Hello"}</p>
		</Wrapper>
	}
	.render_to_string();
	assert_eq!(html, r#"<section class="wrapper"><p>Hello</p></section>"#);
	let html = html! {
		<Wrapper class={Some("wide".to_owned())}>{"text"}</Wrapper>
	}
	.render_to_string();
	assert_eq!(html, r#"<section class="wrapper wide">text</section>"#);
}

#[test]
fn test_generic_component() {
	let html = html!(<Labeled label={Year(2026)} />).render_to_string();
	assert_eq!(html, "<span>2026</span>");
}

#[test]
fn test_hyphenated_attributes() {
	let html = html! {
		<path d="M0 0L1 1" stroke-width="4" stroke-dasharray="3 3" />
	}
	.render_to_string();
	assert_eq!(
		html,
		r#"<path d="M0 0L1 1" stroke-width="4" stroke-dasharray="3 3" />"#
	);
}

#[test]
fn test_escaping() {
	let title = "<script>\"x\" & 'y'</script>".to_owned();
	let html = html!(<div title={title.clone()}>{title}</div>).render_to_string();
	assert_eq!(
		html,
		"<div title=\"&lt;script&gt;&quot;x&quot; &amp; &apos;y&apos;&lt;/script&gt;\">&lt;script&gt;&quot;x&quot; &amp; &apos;y&apos;&lt;/script&gt;</div>"
	);
}

#[test]
fn test_optional_nodes_and_attributes() {
	use html::Node;
	let missing: Option<Node> = None;
	let html = html! {
		<div id={None::<String>} hidden={Some(true)}>{missing}</div>
	}
	.render_to_string();
	assert_eq!(html, "<div hidden></div>");
}

#[test]
fn test_style() {
	use html::style;
	let color: Option<String> = None;
	let style = style! {
		"background-color" => color,
		"border-radius" => "12px",
		"color" => "#ef4444".to_owned(),
	};
	assert_eq!(style, "border-radius: 12px; color: #ef4444;");
}

#[test]
fn test_render_is_repeatable() {
	let node = html!(<Greeting name={"again".to_owned()} />);
	let first = node.clone().render_to_string();
	let second = node.render_to_string();
	assert_eq!(first, second);
}
