//! DOM snapshot → [`OutputNode`] tree.
//!
//! One recursive pass. For every element:
//!
//! 1. Excluded tags (`script`, `style`, `iframe`, …) produce nothing and are
//!    not descended into.
//! 2. SVG paint properties are collected as literal styles.
//! 3. The computed style runs through [`tailwind::classify_style`].
//! 4. Attributes are renamed for JSX and relative URLs resolved.
//! 5. Children are converted left to right; runs of two or more simple text
//!    spans are merged into one text segment.
//!
//! The transducer reads the snapshot only and returns fresh values, so
//! converting the same snapshot twice gives identical output.

use url::Url;

use crate::attributes::{convert_attributes, rewrite_css_urls};
use crate::dom::{ElementNode, Node};
use crate::output::{OutputChild, OutputNode};
use crate::tailwind;

/// SVG presentation properties and the computed value that means "unset".
const SVG_PAINT: &[(&str, &str)] = &[
    ("stroke", "none"),
    ("fill", "rgb(0, 0, 0)"),
    ("stroke-width", "1px"),
    ("stroke-linecap", "butt"),
    ("stroke-linejoin", "miter"),
];

/// Minimum number of adjacent simple text spans that are merged.
const MIN_RUN_LENGTH: usize = 2;

#[derive(Debug, Clone)]
pub struct Transducer {
    base: Option<Url>,
    consolidate_text_runs: bool,
}

impl Default for Transducer {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Transducer {
    pub fn new(base: Option<Url>) -> Self {
        Self {
            base,
            consolidate_text_runs: true,
        }
    }

    pub fn consolidate_text_runs(mut self, enabled: bool) -> Self {
        self.consolidate_text_runs = enabled;
        self
    }

    pub fn base(&self) -> Option<&Url> {
        self.base.as_ref()
    }

    /// Converts one element and its subtree. `None` for excluded tags.
    pub fn transduce(&self, el: &ElementNode) -> Option<OutputNode> {
        if el.is_excluded() {
            log::debug!("skipping excluded <{}> subtree", el.tag);
            return None;
        }
        log::trace!("converting <{}>", el.tag);

        let tag = if el.is_svg() { el.tag.clone() } else { el.tag_lower() };
        let mut node = OutputNode::new(tag);

        if el.is_svg() {
            node.styles.extend(svg_paint(el));
        }

        let classes = tailwind::classify_style(&el.style);
        node.tokens = classes.tokens;
        for (property, value) in classes.literals {
            let value = if property == "background-image" {
                rewrite_css_urls(&value, self.base())
            } else {
                value
            };
            node.styles.push((property, value));
        }

        node.attributes = convert_attributes(&el.attributes, self.base());

        if el.is_void() {
            node.void = true;
            return Some(node);
        }
        node.children = self.children(&el.children);
        Some(node)
    }

    fn children(&self, children: &[Node]) -> Vec<OutputChild> {
        let mut out = Vec::with_capacity(children.len());
        let mut i = 0;

        while i < children.len() {
            if self.consolidate_text_runs {
                if let Some((merged, next)) = text_run(children, i) {
                    out.extend(merged);
                    i = next;
                    continue;
                }
            }

            match &children[i] {
                Node::Text(text) => {
                    let trimmed = text.trim();
                    if !trimmed.is_empty() {
                        out.push(OutputChild::Text(trimmed.to_string()));
                    }
                }
                Node::Element(child) => {
                    if let Some(converted) = self.transduce(child) {
                        out.push(OutputChild::Element(converted));
                    }
                }
            }
            i += 1;
        }

        out
    }
}

fn svg_paint(el: &ElementNode) -> Vec<(String, String)> {
    SVG_PAINT
        .iter()
        .filter_map(|(property, default)| {
            let value = el.style.get(property)?.trim();
            if value.is_empty() || value == *default {
                None
            } else {
                Some((property.to_string(), value.to_string()))
            }
        })
        .collect()
}

/// Finds a run of simple text spans starting at `start`.
///
/// Whitespace-only text between spans belongs to the run and contributes one
/// space. Returns the merged child (if any text remains) and the index after
/// the last span.
fn text_run(children: &[Node], start: usize) -> Option<(Option<OutputChild>, usize)> {
    let first = children.get(start)?.as_element()?;
    first.simple_text()?;

    let mut text = String::new();
    let mut spans = 0;
    let mut pending_space = false;
    let mut end = start;

    for (offset, child) in children[start..].iter().enumerate() {
        match child {
            Node::Element(el) => match el.simple_text() {
                Some(span_text) => {
                    if pending_space {
                        text.push(' ');
                        pending_space = false;
                    }
                    text.push_str(span_text);
                    spans += 1;
                    end = start + offset + 1;
                }
                None => break,
            },
            Node::Text(t) if t.trim().is_empty() => pending_space = true,
            Node::Text(_) => break,
        }
    }

    if spans < MIN_RUN_LENGTH {
        return None;
    }
    log::debug!("merged {} text spans into one segment", spans);

    let text = text.trim();
    if text.is_empty() {
        return Some((None, end));
    }
    let segment = OutputChild::Text(text.to_string());

    let color_token = first
        .style
        .get("color")
        .and_then(tailwind::text_color_token);
    let merged = match color_token {
        Some(token) => {
            let mut span = OutputNode::new("span");
            span.tokens.push(token);
            span.children.push(segment);
            OutputChild::Element(span)
        }
        None => segment,
    };
    Some((Some(merged), end))
}
