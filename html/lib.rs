use derive_more::From;
use std::borrow::Cow;
use std::fmt::Write;

pub use html_macro::{component, html};

#[derive(Clone, From)]
pub enum Node {
	RawText(RawTextNode),
	EscapedText(EscapedTextNode),
	Fragment(FragmentNode),
	Host(HostNode),
	Component(ComponentNode),
	#[from(ignore)]
	Option(Option<Box<Node>>),
	Vec(Vec<Node>),
}

#[derive(Clone)]
pub struct RawTextNode(pub Cow<'static, str>);

#[derive(Clone)]
pub struct EscapedTextNode(pub Cow<'static, str>);

#[derive(Clone)]
pub struct FragmentNode {
	pub children: Vec<Node>,
}

#[derive(Clone)]
pub struct HostNode {
	pub name: &'static str,
	pub attributes: Vec<(AttributeKey, AttributeValue)>,
	pub children: Vec<Node>,
	pub self_closing: bool,
}

pub type AttributeKey = &'static str;

#[derive(Clone, From)]
pub enum AttributeValue {
	Bool(Option<bool>),
	String(Option<Cow<'static, str>>),
}

#[derive(Clone)]
pub enum ComponentNode {
	Unrendered {
		component: Option<Box<dyn Component>>,
		children: Option<Vec<Node>>,
	},
	Rendered(Box<Node>),
}

/// A component consumes its props and children and produces the node it renders to. Implementations are generated by `#[component]`.
pub trait Component: ComponentClone {
	fn render(self: Box<Self>, children: Vec<Node>) -> Node;
}

pub trait ComponentClone {
	fn clone_box(&self) -> Box<dyn Component>;
}

impl<T> ComponentClone for T
where
	T: Component + Clone + 'static,
{
	fn clone_box(&self) -> Box<dyn Component> {
		Box::new(self.clone())
	}
}

impl Clone for Box<dyn Component> {
	fn clone(&self) -> Box<dyn Component> {
		self.clone_box()
	}
}

impl Node {
	/// Render every component in the tree and write the result as a string. Rendering a clone leaves `self` untouched, so the same tree may be rendered any number of times.
	pub fn render_to_string(mut self) -> String {
		self.render();
		self.to_string()
	}

	fn render(&mut self) {
		match self {
			Node::Fragment(node) => {
				for child in node.children.iter_mut() {
					child.render();
				}
			}
			Node::Host(node) => {
				for child in node.children.iter_mut() {
					child.render();
				}
			}
			Node::Component(node) => {
				if let ComponentNode::Unrendered {
					component,
					children,
				} = node
				{
					if let Some(component) = component.take() {
						let children = children.take().unwrap_or_default();
						let mut rendered = component.render(children);
						rendered.render();
						*node = ComponentNode::Rendered(Box::new(rendered));
					}
				}
			}
			Node::Vec(node) => {
				for child in node.iter_mut() {
					child.render();
				}
			}
			Node::Option(node) => {
				if let Some(node) = node {
					node.render();
				}
			}
			Node::RawText(_) | Node::EscapedText(_) => {}
		};
	}
}

impl std::fmt::Display for Node {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Node::RawText(node) => write!(f, "{}", node),
			Node::EscapedText(node) => write!(f, "{}", node),
			Node::Fragment(node) => write!(f, "{}", node),
			Node::Host(node) => write!(f, "{}", node),
			Node::Component(node) => write!(f, "{}", node),
			Node::Option(node) => match node {
				Some(node) => write!(f, "{}", node),
				None => Ok(()),
			},
			Node::Vec(node) => {
				for node in node {
					write!(f, "{}", node)?;
				}
				Ok(())
			}
		}
	}
}

impl std::fmt::Display for FragmentNode {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		for child in self.children.iter() {
			write!(f, "{}", child)?;
		}
		Ok(())
	}
}

impl std::fmt::Display for HostNode {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "<{}", self.name)?;
		for (key, value) in self.attributes.iter() {
			match value {
				AttributeValue::Bool(value) => {
					if let Some(true) = value {
						write!(f, " {}", key)?;
					}
				}
				AttributeValue::String(value) => {
					if let Some(value) = value {
						write!(f, r#" {}=""#, key)?;
						write_escaped(f, value)?;
						f.write_char('"')?;
					}
				}
			}
		}
		if self.self_closing {
			write!(f, " />")?;
			return Ok(());
		}
		write!(f, ">")?;
		for child in self.children.iter() {
			write!(f, "{}", child)?;
		}
		write!(f, "</{}>", self.name)
	}
}

impl std::fmt::Display for ComponentNode {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			ComponentNode::Rendered(rendered) => write!(f, "{}", rendered),
			// Render a copy so that displaying a tree that was never passed to `render_to_string` still produces its output.
			ComponentNode::Unrendered {
				component,
				children,
			} => match component {
				Some(component) => {
					let children = children.clone().unwrap_or_default();
					let mut rendered = component.clone().render(children);
					rendered.render();
					write!(f, "{}", rendered)
				}
				None => Ok(()),
			},
		}
	}
}

impl std::fmt::Display for RawTextNode {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl std::fmt::Display for EscapedTextNode {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write_escaped(f, &self.0)
	}
}

fn write_escaped(f: &mut std::fmt::Formatter<'_>, value: &str) -> std::fmt::Result {
	for c in value.chars() {
		match c {
			'>' => write!(f, "&gt;")?,
			'<' => write!(f, "&lt;")?,
			'"' => write!(f, "&quot;")?,
			'&' => write!(f, "&amp;")?,
			'\'' => write!(f, "&apos;")?,
			c => f.write_char(c)?,
		};
	}
	Ok(())
}

impl From<Option<String>> for AttributeValue {
	fn from(value: Option<String>) -> AttributeValue {
		AttributeValue::String(value.map(|value| value.into()))
	}
}

impl From<Option<&'static str>> for AttributeValue {
	fn from(value: Option<&'static str>) -> AttributeValue {
		AttributeValue::String(value.map(|value| value.into()))
	}
}

impl From<String> for AttributeValue {
	fn from(value: String) -> AttributeValue {
		AttributeValue::String(Some(value.into()))
	}
}

impl From<&'static str> for AttributeValue {
	fn from(value: &'static str) -> AttributeValue {
		AttributeValue::String(Some(value.into()))
	}
}

impl From<bool> for AttributeValue {
	fn from(value: bool) -> AttributeValue {
		AttributeValue::Bool(Some(value))
	}
}

impl From<String> for Node {
	fn from(value: String) -> Node {
		Node::EscapedText(EscapedTextNode(value.into()))
	}
}

impl From<&'static str> for Node {
	fn from(value: &'static str) -> Node {
		Node::EscapedText(EscapedTextNode(value.into()))
	}
}

impl<T> From<Option<T>> for Node
where
	T: Into<Node>,
{
	fn from(value: Option<T>) -> Node {
		Node::Option(value.map(|value| Box::new(value.into())))
	}
}

/// A value that may contribute a class name to `classes!`. Empty strings and `None` contribute nothing.
pub trait ClassName {
	fn class_name(self) -> Option<Cow<'static, str>>;
}

impl ClassName for &'static str {
	fn class_name(self) -> Option<Cow<'static, str>> {
		if self.is_empty() {
			None
		} else {
			Some(self.into())
		}
	}
}

impl ClassName for String {
	fn class_name(self) -> Option<Cow<'static, str>> {
		if self.is_empty() {
			None
		} else {
			Some(self.into())
		}
	}
}

impl<T> ClassName for Option<T>
where
	T: ClassName,
{
	fn class_name(self) -> Option<Cow<'static, str>> {
		self.and_then(ClassName::class_name)
	}
}

/// A value that may be written as a css declaration by `style!`. `None` skips the declaration.
pub trait StyleValue {
	fn style_value(self) -> Option<Cow<'static, str>>;
}

impl StyleValue for &'static str {
	fn style_value(self) -> Option<Cow<'static, str>> {
		Some(self.into())
	}
}

impl StyleValue for String {
	fn style_value(self) -> Option<Cow<'static, str>> {
		Some(self.into())
	}
}

impl<T> StyleValue for Option<T>
where
	T: StyleValue,
{
	fn style_value(self) -> Option<Cow<'static, str>> {
		self.and_then(StyleValue::style_value)
	}
}

#[macro_export]
macro_rules! raw {
	($t:expr) => {
		::html::RawTextNode($t.into())
	};
}

#[macro_export]
macro_rules! text {
	($t:expr) => {
		::html::EscapedTextNode($t.into())
	};
}

#[macro_export]
macro_rules! classes {
	($($class:expr),* $(,)?) => {{
		let mut classes: Vec<::std::borrow::Cow<'static, str>> = Vec::new();
		$(
			if let Some(class) = ::html::ClassName::class_name($class) {
				classes.push(class);
			}
		)*
		classes.join(" ")
	}};
}

#[macro_export]
macro_rules! style {
	($($key:expr => $value:expr),* $(,)?) => {{
		let mut style = String::new();
		$(
			if let Some(value) = ::html::StyleValue::style_value($value) {
				style.push_str($key);
				style.push_str(": ");
				style.push_str(&value);
				style.push_str("; ");
			}
		)*
		style.truncate(style.trim_end().len());
		style
	}};
}
