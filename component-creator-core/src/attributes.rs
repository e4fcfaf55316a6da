//! HTML attribute → JSX attribute conversion.

use regex::Regex;
use std::sync::OnceLock;
use url::Url;

/// Attributes that are rendered bare (`disabled`, not `disabled=""`).
const BOOLEAN_ATTRIBUTES: &[&str] = &[
    "allowfullscreen", "async", "autofocus", "autoplay", "checked", "controls", "default",
    "defer", "disabled", "formnovalidate", "hidden", "inert", "ismap", "itemscope", "loop",
    "multiple", "muted", "nomodule", "novalidate", "open", "playsinline", "readonly", "required",
    "reversed", "selected",
];

/// Lowercase HTML/SVG attribute names whose React spelling is not derivable
/// from the kebab-case rule.
const REACT_NAMES: &[(&str, &str)] = &[
    ("for", "htmlFor"),
    ("tabindex", "tabIndex"),
    ("readonly", "readOnly"),
    ("maxlength", "maxLength"),
    ("minlength", "minLength"),
    ("colspan", "colSpan"),
    ("rowspan", "rowSpan"),
    ("srcset", "srcSet"),
    ("crossorigin", "crossOrigin"),
    ("autocomplete", "autoComplete"),
    ("autofocus", "autoFocus"),
    ("autoplay", "autoPlay"),
    ("contenteditable", "contentEditable"),
    ("enctype", "encType"),
    ("formaction", "formAction"),
    ("formnovalidate", "formNoValidate"),
    ("novalidate", "noValidate"),
    ("playsinline", "playsInline"),
    ("spellcheck", "spellCheck"),
    ("usemap", "useMap"),
    ("datetime", "dateTime"),
    ("accesskey", "accessKey"),
    ("cellpadding", "cellPadding"),
    ("cellspacing", "cellSpacing"),
    ("frameborder", "frameBorder"),
    ("inputmode", "inputMode"),
    ("referrerpolicy", "referrerPolicy"),
    ("allowfullscreen", "allowFullScreen"),
    ("ismap", "isMap"),
    ("itemscope", "itemScope"),
    ("nomodule", "noModule"),
    ("viewbox", "viewBox"),
    ("preserveaspectratio", "preserveAspectRatio"),
];

/// Multi-word DOM events, lowercase → React suffix.
const EVENT_NAMES: &[(&str, &str)] = &[
    ("dblclick", "DoubleClick"),
    ("contextmenu", "ContextMenu"),
    ("mousedown", "MouseDown"),
    ("mouseup", "MouseUp"),
    ("mouseenter", "MouseEnter"),
    ("mouseleave", "MouseLeave"),
    ("mouseover", "MouseOver"),
    ("mouseout", "MouseOut"),
    ("mousemove", "MouseMove"),
    ("keydown", "KeyDown"),
    ("keyup", "KeyUp"),
    ("keypress", "KeyPress"),
    ("touchstart", "TouchStart"),
    ("touchend", "TouchEnd"),
    ("touchmove", "TouchMove"),
    ("pointerdown", "PointerDown"),
    ("pointerup", "PointerUp"),
    ("dragstart", "DragStart"),
    ("dragend", "DragEnd"),
];

/// Attributes whose value is a URL (or a list of them) relative to the page.
const URL_ATTRIBUTES: &[&str] = &["src", "href"];

/// One attribute of an output element. `value == None` renders bare.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: Option<String>,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
        }
    }

    pub fn bare(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }
}

/// React spelling of an HTML or SVG attribute name.
///
/// `data-*` and `aria-*` keep their dashes; other kebab and namespaced names
/// (`stroke-width`, `xlink:href`) become camelCase; event handlers
/// (`onclick`) become `onClick`.
pub fn jsx_attribute_name(name: &str) -> String {
    let lower = name.to_ascii_lowercase();

    if lower.starts_with("data-") || lower.starts_with("aria-") {
        return lower;
    }
    if let Some((_, react)) = REACT_NAMES.iter().find(|(html, _)| *html == lower) {
        return react.to_string();
    }
    if let Some(event) = lower.strip_prefix("on") {
        if !event.is_empty() && event.chars().all(|c| c.is_ascii_alphabetic()) {
            return match EVENT_NAMES.iter().find(|(dom, _)| *dom == event) {
                Some((_, react)) => format!("on{}", react),
                None => format!("on{}", capitalize(event)),
            };
        }
    }
    if lower.contains(['-', ':']) {
        return camel_case(name);
    }
    // Mixed-case SVG names (viewBox, gradientUnits) are already correct.
    let mixed = name.chars().any(|c| c.is_ascii_uppercase())
        && name.chars().any(|c| c.is_ascii_lowercase());
    if mixed {
        name.to_string()
    } else {
        lower
    }
}

/// `stroke-width` → `strokeWidth`, `xlink:href` → `xlinkHref`.
pub fn camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for (i, part) in name
        .split(|c| c == '-' || c == ':')
        .filter(|p| !p.is_empty())
        .enumerate()
    {
        if i == 0 {
            out.push_str(&part.to_ascii_lowercase());
        } else {
            out.push_str(&capitalize(&part.to_ascii_lowercase()));
        }
    }
    out
}

pub(crate) fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

pub fn is_boolean_attribute(name: &str) -> bool {
    BOOLEAN_ATTRIBUTES.contains(&name.to_ascii_lowercase().as_str())
}

// ─── URL rewriting ───────────────────────────────────────────────────────────

/// Resolves a relative URL against the page URL.
///
/// Absolute URLs (including `data:` and `javascript:`), fragment-only links,
/// empty values and anything that fails to join are returned unchanged.
pub fn resolve_url(value: &str, base: Option<&Url>) -> String {
    let trimmed = value.trim();
    let Some(base) = base else {
        return value.to_string();
    };
    if trimmed.is_empty() || trimmed.starts_with('#') || Url::parse(trimmed).is_ok() {
        return value.to_string();
    }
    match base.join(trimmed) {
        Ok(url) => url.to_string(),
        Err(err) => {
            log::debug!("leaving url {:?} untouched: {}", trimmed, err);
            value.to_string()
        }
    }
}

/// Splits a `srcset` list into `(url, descriptor)` candidates.
///
/// A candidate's URL runs up to the next whitespace, so commas inside it
/// (`data:image/png;base64,…`) do not split the list. Trailing commas on the
/// URL end a candidate that has no descriptor.
pub fn srcset_candidates(value: &str) -> Vec<(&str, &str)> {
    let mut candidates = Vec::new();
    let mut rest = value;

    loop {
        rest = rest.trim_start_matches(|c: char| c.is_whitespace() || c == ',');
        if rest.is_empty() {
            break;
        }
        let url_end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        let (url, tail) = rest.split_at(url_end);

        if url.ends_with(',') {
            candidates.push((url.trim_end_matches(','), ""));
            rest = tail;
            continue;
        }
        let descriptor_end = tail.find(',').unwrap_or(tail.len());
        candidates.push((url, tail[..descriptor_end].trim()));
        rest = &tail[descriptor_end..];
    }

    candidates
}

/// Resolves every candidate of a `srcset` list, keeping descriptors.
pub fn resolve_srcset(value: &str, base: Option<&Url>) -> String {
    if base.is_none() {
        return value.to_string();
    }
    srcset_candidates(value)
        .into_iter()
        .map(|(url, descriptor)| {
            let url = resolve_url(url, base);
            if descriptor.is_empty() {
                url
            } else {
                format!("{} {}", url, descriptor)
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn css_url_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"url\(\s*["']?([^"')]*?)["']?\s*\)"#).unwrap())
}

/// Rewrites each `url(...)` inside a CSS value (e.g. `background-image`).
pub fn rewrite_css_urls(value: &str, base: Option<&Url>) -> String {
    if base.is_none() {
        return value.to_string();
    }
    css_url_regex()
        .replace_all(value, |caps: &regex::Captures| {
            format!("url(\"{}\")", resolve_url(&caps[1], base))
        })
        .into_owned()
}

// ─── Element attributes ──────────────────────────────────────────────────────

/// Converts an element's attributes to JSX, in document order.
///
/// `class` and `style` are dropped (they are rebuilt from the computed
/// style). Later duplicates of an already emitted name are ignored.
pub fn convert_attributes(attributes: &[(String, String)], base: Option<&Url>) -> Vec<Attribute> {
    let mut out: Vec<Attribute> = Vec::with_capacity(attributes.len());

    for (name, value) in attributes {
        let lower = name.to_ascii_lowercase();
        if lower == "class" || lower == "style" || lower.is_empty() {
            continue;
        }

        let jsx_name = jsx_attribute_name(name);
        if out.iter().any(|a| a.name == jsx_name) {
            continue;
        }

        let attribute = if is_boolean_attribute(&lower) {
            Attribute::bare(jsx_name)
        } else if URL_ATTRIBUTES.contains(&lower.as_str()) {
            Attribute::new(jsx_name, resolve_url(value, base))
        } else if lower == "srcset" {
            Attribute::new(jsx_name, resolve_srcset(value, base))
        } else {
            Attribute::new(jsx_name, value.as_str())
        };
        out.push(attribute);
    }

    out
}
