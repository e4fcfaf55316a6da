//! Output node tree and its JSX serialisation.

use std::fmt::Write;

use crate::attributes::{capitalize, Attribute};
use crate::dom::escape_attribute;

/// A child of an output element.
#[derive(Debug, Clone, PartialEq)]
pub enum OutputChild {
    Text(String),
    Element(OutputNode),
}

/// One converted element. Class tokens and literal styles are kept apart from
/// the other attributes and rendered as `className` and `style={{…}}`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OutputNode {
    pub tag: String,
    pub attributes: Vec<Attribute>,
    pub tokens: Vec<String>,
    pub styles: Vec<(String, String)>,
    pub children: Vec<OutputChild>,
    pub void: bool,
}

impl OutputNode {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Space-separated class list, or `None` when no token is set.
    pub fn class_name(&self) -> Option<String> {
        let tokens: Vec<&str> = self
            .tokens
            .iter()
            .map(String::as_str)
            .filter(|t| !t.is_empty())
            .collect();
        if tokens.is_empty() {
            None
        } else {
            Some(tokens.join(" "))
        }
    }

    /// Element children, skipping text segments.
    pub fn elements(&self) -> impl Iterator<Item = &OutputNode> {
        self.children.iter().filter_map(|c| match c {
            OutputChild::Element(el) => Some(el),
            OutputChild::Text(_) => None,
        })
    }

    /// Renders the tree as JSX, `indent` spaces per nesting level.
    pub fn to_jsx(&self, indent: usize) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = write_node(self, &mut out, 0, indent);
        out
    }
}

fn write_node(node: &OutputNode, out: &mut String, depth: usize, indent: usize) -> std::fmt::Result {
    let pad = " ".repeat(depth * indent);
    write!(out, "{}<{}", pad, node.tag)?;

    if let Some(class_name) = node.class_name() {
        write!(out, " className=\"{}\"", escape_attribute(&class_name))?;
    }
    for attr in &node.attributes {
        match &attr.value {
            Some(value) => write!(out, " {}=\"{}\"", attr.name, escape_attribute(value))?,
            None => write!(out, " {}", attr.name)?,
        }
    }
    if !node.styles.is_empty() {
        write!(out, " style={{{}}}", style_object(&node.styles))?;
    }

    if node.void {
        return write!(out, " />");
    }

    match node.children.as_slice() {
        [] => write!(out, "></{}>", node.tag),
        [OutputChild::Text(text)] => write!(out, ">{}</{}>", escape_jsx_text(text), node.tag),
        children => {
            out.push('>');
            let child_pad = " ".repeat((depth + 1) * indent);
            for child in children {
                out.push('\n');
                match child {
                    OutputChild::Text(text) => write!(out, "{}{}", child_pad, escape_jsx_text(text))?,
                    OutputChild::Element(el) => write_node(el, out, depth + 1, indent)?,
                }
            }
            write!(out, "\n{}</{}>", pad, node.tag)
        }
    }
}

/// `{ backgroundImage: "url(\"a.png\")", boxShadow: "…" }`
fn style_object(styles: &[(String, String)]) -> String {
    let entries: Vec<String> = styles
        .iter()
        .map(|(property, value)| format!("{}: \"{}\"", style_key(property), escape_js_string(value)))
        .collect();
    format!("{{ {} }}", entries.join(", "))
}

/// camelCase key for a CSS property. Custom properties stay quoted;
/// vendor prefixes keep a leading capital (`-webkit-x` → `WebkitX`).
pub fn style_key(property: &str) -> String {
    if property.starts_with("--") {
        return format!("\"{}\"", escape_js_string(property));
    }
    let vendor = property.starts_with('-');
    property
        .split('-')
        .filter(|part| !part.is_empty())
        .enumerate()
        .map(|(i, part)| {
            if i == 0 && !vendor {
                part.to_string()
            } else {
                capitalize(part)
            }
        })
        .collect()
}

fn escape_js_string(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

/// Escapes text so JSX reads it literally.
pub fn escape_jsx_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '{' => out.push_str("{'{'}"),
            '}' => out.push_str("{'}'}"),
            _ => out.push(c),
        }
    }
    out
}
