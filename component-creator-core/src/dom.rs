//! Read-only snapshot of an inspected DOM subtree.
//!
//! A host (browser extension content script, wasm bridge, test) captures the
//! selected element once, together with each element's computed style, and
//! hands the snapshot to the converter. The converter never talks to a live
//! page.

use serde::{Deserialize, Serialize};

use crate::error::{ConvertError, ConvertResult};
use crate::style::ComputedStyle;

/// Elements that never have children and are emitted self-closed.
pub const VOID_ELEMENTS: &[&str] = &[
    "img", "input", "br", "hr", "meta", "link", "area", "base", "col", "embed", "source",
    "track", "wbr",
];

/// Elements whose subtree is dropped from converted output.
pub const EXCLUDED_ELEMENTS: &[&str] =
    &["style", "script", "noscript", "iframe", "object", "embed"];

const SVG_ELEMENTS: &[&str] = &[
    "svg", "g", "path", "circle", "ellipse", "line", "polyline", "polygon", "rect", "text",
    "tspan", "use", "defs", "symbol", "clippath", "mask", "lineargradient", "radialgradient",
    "stop", "pattern", "marker", "foreignobject",
];

/// A captured page: the URL it was captured from and the selected element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub root: ElementNode,
}

impl Document {
    /// Load a snapshot from JSON, as produced by a browser-side capture script.
    pub fn from_json(json: &str) -> ConvertResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a snapshot from YAML (hand-written fixtures).
    pub fn from_yaml(yaml: &str) -> ConvertResult<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Detects the format from the first non-blank character.
    pub fn from_str_auto(content: &str) -> ConvertResult<Self> {
        match content.trim_start().chars().next() {
            Some('{') => Self::from_json(content),
            Some(_) => Self::from_yaml(content),
            None => Err(ConvertError::InvalidSnapshot("empty snapshot".to_string())),
        }
    }
}

/// A child of an element: literal text or a nested element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    Text(String),
    Element(ElementNode),
}

impl Node {
    pub fn as_element(&self) -> Option<&ElementNode> {
        match self {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Node::Text(text) => Some(text),
            Node::Element(_) => None,
        }
    }
}

impl From<ElementNode> for Node {
    fn from(el: ElementNode) -> Self {
        Node::Element(el)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ElementNode {
    pub tag: String,
    #[serde(default, with = "crate::style::ordered_map")]
    pub attributes: Vec<(String, String)>,
    #[serde(default)]
    pub style: ComputedStyle,
    #[serde(default)]
    pub children: Vec<Node>,
}

impl ElementNode {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    pub fn css(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.style.set(property, value);
        self
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn text(self, text: &str) -> Self {
        self.child(text)
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn tag_lower(&self) -> String {
        self.tag.to_ascii_lowercase()
    }

    pub fn is_void(&self) -> bool {
        VOID_ELEMENTS.contains(&self.tag_lower().as_str())
    }

    pub fn is_excluded(&self) -> bool {
        EXCLUDED_ELEMENTS.contains(&self.tag_lower().as_str())
    }

    pub fn is_svg(&self) -> bool {
        SVG_ELEMENTS.contains(&self.tag_lower().as_str())
    }

    /// `Some(text)` when this is a `span` whose only child is a text node.
    pub fn simple_text(&self) -> Option<&str> {
        if !self.tag.eq_ignore_ascii_case("span") {
            return None;
        }
        match self.children.as_slice() {
            [Node::Text(text)] => Some(text),
            _ => None,
        }
    }

    /// Serialises the element back to HTML, as `outerHTML` would.
    pub fn outer_html(&self) -> String {
        let mut out = String::new();
        write_html(self, &mut out);
        out
    }
}

fn write_html(el: &ElementNode, out: &mut String) {
    out.push('<');
    out.push_str(&el.tag);
    for (name, value) in &el.attributes {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&escape_attribute(value));
        out.push('"');
    }
    out.push('>');
    if el.is_void() {
        return;
    }
    for child in &el.children {
        match child {
            Node::Text(text) => out.push_str(&escape_text(text)),
            Node::Element(child_el) => write_html(child_el, out),
        }
    }
    out.push_str("</");
    out.push_str(&el.tag);
    out.push('>');
}

pub(crate) fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

pub(crate) fn escape_attribute(s: &str) -> String {
    s.replace('&', "&amp;").replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outer_html_round_trips_structure() {
        let el = ElementNode::new("div")
            .attr("class", "card")
            .attr("data-x", "a\"b")
            .child(ElementNode::new("img").attr("src", "/a.png"))
            .text("1 < 2 & 3");
        assert_eq!(
            el.outer_html(),
            r#"<div class="card" data-x="a&quot;b"><img src="/a.png">1 &lt; 2 &amp; 3</div>"#
        );
    }

    #[test]
    fn simple_text_requires_single_text_child() {
        assert_eq!(ElementNode::new("span").text("a").simple_text(), Some("a"));
        assert_eq!(ElementNode::new("SPAN").text("a").simple_text(), Some("a"));
        assert_eq!(ElementNode::new("b").text("a").simple_text(), None);
        assert_eq!(ElementNode::new("span").text("a").text("b").simple_text(), None);
        assert_eq!(
            ElementNode::new("span").child(ElementNode::new("i")).simple_text(),
            None
        );
    }

    #[test]
    fn snapshot_from_json() {
        let json = r#"{
            "url": "https://example.com/page",
            "root": {
                "tag": "div",
                "attributes": {"id": "main", "class": "x"},
                "style": {"display": "flex"},
                "children": ["hello", {"tag": "br"}]
            }
        }"#;
        let doc = Document::from_str_auto(json).unwrap();
        assert_eq!(doc.url.as_deref(), Some("https://example.com/page"));
        assert_eq!(doc.root.attribute("id"), Some("main"));
        assert_eq!(doc.root.style.get("display"), Some("flex"));
        assert_eq!(doc.root.children[0].as_text(), Some("hello"));
        assert!(doc.root.children[1].as_element().unwrap().is_void());
    }

    #[test]
    fn snapshot_from_yaml() {
        let yaml = "root:\n  tag: p\n  children:\n    - hi\n";
        let doc = Document::from_str_auto(yaml).unwrap();
        assert!(doc.url.is_none());
        assert_eq!(doc.root.tag, "p");
    }

    #[test]
    fn empty_snapshot_is_rejected() {
        assert!(matches!(
            Document::from_str_auto("   "),
            Err(ConvertError::InvalidSnapshot(_))
        ));
    }
}
