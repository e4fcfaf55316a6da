//! # Computed style → Tailwind utility classes
//!
//! The reverse of a Tailwind engine: starting from an element's resolved CSS,
//! pick the utility tokens that reproduce it. Each tracked property is
//! classified through the table in [`rules`] by one dispatch function:
//!
//! - **Keyword** properties (display, font-weight, cursor, …) map through a
//!   fixed table.
//! - **Scalar** properties (font-size, line-height, border-radius) match exact
//!   pixel strings, otherwise `prefix-[value]`.
//! - **Colors** snap to the named palette ([`colors`]), otherwise `prefix-[#hex]`.
//! - **Spacing**, sizes and insets snap to the spacing scale ([`spacing`]).
//! - Anything without a utility (shadows, transforms, font stacks) is kept as a
//!   literal style declaration.
//!
//! ## Usage
//! ```ignore
//! let classes = component_creator_core::tailwind::classify_style(&element.style);
//! // classes.tokens   -> ["flex", "p-4", "bg-blue-500"]
//! // classes.literals -> [("box-shadow", "rgba(0, 0, 0, 0.1) 0px 1px 2px 0px")]
//! ```

pub mod colors;
pub mod rules;
pub mod spacing;

use crate::style::ComputedStyle;
use rules::{ColorDefault, Rule, Unknown};

/// What a single property contributes to an element.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Tokens(Vec<String>),
    /// No utility exists; keep `property: value` as an inline style.
    Literal(String),
    /// Default value, nothing to emit.
    Skip,
}

impl Outcome {
    fn token(token: impl Into<String>) -> Self {
        Outcome::Tokens(vec![token.into()])
    }
}

/// Tokens and literal declarations collected for one element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleClasses {
    pub tokens: Vec<String>,
    pub literals: Vec<(String, String)>,
}

impl StyleClasses {
    fn push(&mut self, property: &str, outcome: Outcome) {
        match outcome {
            Outcome::Tokens(tokens) => self
                .tokens
                .extend(tokens.into_iter().filter(|t| !t.is_empty())),
            Outcome::Literal(value) => self.literals.push((property.to_string(), value)),
            Outcome::Skip => {}
        }
    }
}

/// `prefix-[value]`, with spaces turned into underscores as Tailwind expects.
pub fn arbitrary(prefix: &str, value: &str) -> String {
    format!("{}-[{}]", prefix, value.trim().replace(' ', "_"))
}

/// Utility tokens for one `(property, value)` pair. Literal and default values
/// yield an empty list.
///
/// Shorthand groups accept their shorthand name: `("padding", "8px 16px")`.
pub fn classify(property: &str, value: &str) -> Vec<String> {
    match classify_property(property, value) {
        Outcome::Tokens(tokens) => tokens,
        Outcome::Literal(_) | Outcome::Skip => Vec::new(),
    }
}

/// Full outcome for one `(property, value)` pair, including literal fallbacks.
/// Properties without a rule are skipped.
pub fn classify_property(property: &str, value: &str) -> Outcome {
    let Some(rule) = rules::rule_for(property) else {
        return Outcome::Skip;
    };
    let value = value.trim();
    match rule {
        Rule::Sides { prefix } => match expand_sides(value) {
            Some(sides) => Outcome::Tokens(sides_tokens(prefix, sides)),
            None => Outcome::Skip,
        },
        Rule::BorderWidth => match expand_sides(value) {
            Some(widths) => Outcome::Tokens(border_width_tokens(widths)),
            None => Outcome::Skip,
        },
        _ => apply_rule(rule, value),
    }
}

/// Classifies every tracked property of `style`, in category order.
pub fn classify_style(style: &ComputedStyle) -> StyleClasses {
    let mut out = StyleClasses::default();
    let positioned = !matches!(style.get("position"), None | Some("static"));

    for tracked in rules::TRACKED {
        let property = tracked.property;
        match tracked.rule {
            Rule::Sides { prefix } => {
                if let Some(sides) = read_sides(style, property, "", property) {
                    out.push(property, Outcome::Tokens(sides_tokens(prefix, sides)));
                }
            }
            Rule::BorderWidth => classify_border(style, &mut out),
            rule => {
                if rules::INSETS.contains(&property) && !positioned {
                    continue;
                }
                if let Some(value) = style.get(property) {
                    out.push(property, apply_rule(rule, value.trim()));
                }
            }
        }
    }

    out
}

fn apply_rule(rule: Rule, value: &str) -> Outcome {
    if value.is_empty() {
        return Outcome::Skip;
    }
    match rule {
        Rule::Keyword { table, unknown } => match rules::lookup(table, value) {
            Some("") => Outcome::Skip,
            Some(token) => Outcome::token(token),
            None => match unknown {
                Unknown::Arbitrary(prefix) => Outcome::token(arbitrary(prefix, value)),
                Unknown::Drop => Outcome::Skip,
            },
        },
        Rule::Scalar { prefix, table } => match rules::lookup(table, value) {
            Some("") => Outcome::Skip,
            Some(token) => Outcome::token(token),
            None => Outcome::token(arbitrary(prefix, value)),
        },
        Rule::Color { prefix, default } => color_outcome(prefix, value, default),
        Rule::Length { prefix, keywords } => match rules::lookup(keywords, value) {
            Some("") => Outcome::Skip,
            Some(keyword) => Outcome::token(format!("{}-{}", prefix, keyword)),
            None => Outcome::token(spacing::spacing_token(prefix, value)),
        },
        Rule::Gap => gap_outcome(value),
        Rule::ZIndex => match rules::lookup(rules::Z_INDEX, value) {
            Some("") => Outcome::Skip,
            Some(token) => Outcome::token(token),
            None => match value.parse::<i64>() {
                Ok(n) => Outcome::token(arbitrary("z", &n.to_string())),
                Err(_) => Outcome::Skip,
            },
        },
        Rule::Opacity => opacity_outcome(value),
        Rule::FontFamily => {
            if is_generic_family(value) {
                Outcome::Skip
            } else {
                Outcome::Literal(value.to_string())
            }
        }
        Rule::Literal { skip } => {
            if skip.contains(&value) {
                Outcome::Skip
            } else {
                Outcome::Literal(value.to_string())
            }
        }
        // Groups are expanded by the callers.
        Rule::Sides { .. } | Rule::BorderWidth => Outcome::Skip,
    }
}

// ─── Colors ──────────────────────────────────────────────────────────────────

/// Palette token (`text-red-500`, `bg-black/50`) or arbitrary color token.
/// Unparsable colors fall back to a literal declaration.
pub fn color_outcome(prefix: &str, value: &str, default: ColorDefault) -> Outcome {
    let Some(rgba) = colors::parse_rgb(value) else {
        return match value {
            "transparent" | "currentcolor" | "currentColor" | "inherit" => Outcome::Skip,
            _ => Outcome::Literal(value.to_string()),
        };
    };

    match default {
        ColorDefault::Black if rgba.is_opaque() && (rgba.r, rgba.g, rgba.b) == (0, 0, 0) => {
            return Outcome::Skip;
        }
        ColorDefault::Transparent if rgba.is_transparent() => return Outcome::Skip,
        _ => {}
    }
    if rgba.is_transparent() {
        return Outcome::token(format!("{}-transparent", prefix));
    }

    let token = match colors::closest((rgba.r, rgba.g, rgba.b)) {
        Some(m) if rgba.is_opaque() => format!("{}-{}", prefix, m.name),
        Some(m) => format!("{}-{}/{}", prefix, m.name, (rgba.a * 100.0).round()),
        None if rgba.is_opaque() => arbitrary(prefix, &rgba.to_hex()),
        None => arbitrary(
            prefix,
            &format!("rgba({},{},{},{})", rgba.r, rgba.g, rgba.b, rgba.a),
        ),
    };
    Outcome::token(token)
}

/// Token for the text color of a consolidated text run, if it is not the
/// default black.
pub fn text_color_token(value: &str) -> Option<String> {
    match color_outcome("text", value, ColorDefault::Black) {
        Outcome::Tokens(mut tokens) => tokens.pop(),
        Outcome::Literal(_) | Outcome::Skip => None,
    }
}

// ─── Spacing groups ──────────────────────────────────────────────────────────

/// Splits a 1–4 value box shorthand into top, right, bottom, left.
pub fn expand_sides(value: &str) -> Option<[&str; 4]> {
    let parts: Vec<&str> = value.split_whitespace().collect();
    match *parts.as_slice() {
        [a] => Some([a, a, a, a]),
        [a, b] => Some([a, b, a, b]),
        [a, b, c] => Some([a, b, c, b]),
        [a, b, c, d] => Some([a, b, c, d]),
        _ => None,
    }
}

/// One shorthand token when all four sides are equal, otherwise one
/// directional token per nonzero side.
pub fn sides_tokens(prefix: &str, [top, right, bottom, left]: [&str; 4]) -> Vec<String> {
    if top == right && top == bottom && top == left {
        if spacing::is_zero(top) {
            return Vec::new();
        }
        return vec![side_token(prefix, top)];
    }

    [("t", top), ("r", right), ("b", bottom), ("l", left)]
        .iter()
        .filter(|(_, v)| !spacing::is_zero(v))
        .map(|(side, v)| side_token(&format!("{}{}", prefix, side), v))
        .collect()
}

fn side_token(prefix: &str, value: &str) -> String {
    if value == "auto" {
        format!("{}-auto", prefix)
    } else {
        spacing::spacing_token(prefix, value)
    }
}

/// Reads `{base}-top{suffix}` … `{base}-left{suffix}`, falling back to
/// `shorthand` when no longhand is present.
fn read_sides<'a>(
    style: &'a ComputedStyle,
    base: &str,
    suffix: &str,
    shorthand: &str,
) -> Option<[&'a str; 4]> {
    let side = |name: &str| style.get(&format!("{}-{}{}", base, name, suffix));
    let longhands = [side("top"), side("right"), side("bottom"), side("left")];
    if longhands.iter().all(Option::is_none) {
        return style.get(shorthand).and_then(expand_sides);
    }
    Some(longhands.map(|v| v.unwrap_or("0px")))
}

fn gap_outcome(value: &str) -> Outcome {
    let parts: Vec<&str> = value.split_whitespace().collect();
    let gap_token = |prefix: &str, v: &str| -> Option<String> {
        if v == "normal" || spacing::is_zero(v) {
            None
        } else {
            Some(spacing::spacing_token(prefix, v))
        }
    };
    let tokens: Vec<String> = match *parts.as_slice() {
        [v] => gap_token("gap", v).into_iter().collect(),
        [row, col] if row == col => gap_token("gap", row).into_iter().collect(),
        [row, col] => gap_token("gap-y", row)
            .into_iter()
            .chain(gap_token("gap-x", col))
            .collect(),
        _ => Vec::new(),
    };
    if tokens.is_empty() {
        Outcome::Skip
    } else {
        Outcome::Tokens(tokens)
    }
}

// ─── Borders ─────────────────────────────────────────────────────────────────

const SIDES: [(&str, &str); 4] = [("top", "t"), ("right", "r"), ("bottom", "b"), ("left", "l")];

/// Width tokens for four border widths: none when every side is zero, one
/// shorthand when the nonzero sides agree, else one arbitrary token per side.
pub fn border_width_tokens(widths: [&str; 4]) -> Vec<String> {
    let nonzero: Vec<(&str, &str)> = SIDES
        .iter()
        .zip(widths.iter())
        .filter(|(_, w)| !spacing::is_zero(w))
        .map(|((_, short), w)| (*short, *w))
        .collect();

    let Some((_, first)) = nonzero.first() else {
        return Vec::new();
    };

    if nonzero.iter().all(|(_, w)| w == first) {
        let token = rules::lookup(rules::BORDER_WIDTH, first)
            .map(str::to_string)
            .unwrap_or_else(|| arbitrary("border", first));
        return vec![token];
    }

    nonzero
        .iter()
        .map(|(short, w)| arbitrary(&format!("border-{}", short), w))
        .collect()
}

fn classify_border(style: &ComputedStyle, out: &mut StyleClasses) {
    let Some(widths) = read_sides(style, "border", "-width", "border-width") else {
        return;
    };
    let tokens = border_width_tokens(widths);
    if tokens.is_empty() {
        return;
    }
    out.push("border-width", Outcome::Tokens(tokens));

    // Style and color follow the first side that actually draws a border.
    let first_side = SIDES
        .iter()
        .zip(widths.iter())
        .find(|(_, w)| !spacing::is_zero(w))
        .map(|((side, _), _)| *side)
        .unwrap_or("top");
    let side_value = |kind: &str| {
        style
            .get(&format!("border-{}-{}", first_side, kind))
            .or_else(|| style.get(&format!("border-{}", kind)))
            .map(str::trim)
    };

    if let Some(border_style) = side_value("style") {
        let rule = Rule::Keyword {
            table: rules::BORDER_STYLE,
            unknown: Unknown::Drop,
        };
        out.push("border-style", apply_rule(rule, border_style));
    }
    if let Some(color) = side_value("color") {
        out.push(
            "border-color",
            color_outcome("border", color, ColorDefault::Transparent),
        );
    }
}

// ─── Misc ────────────────────────────────────────────────────────────────────

/// Opacity rounded to the nearest multiple of 5 percent.
fn opacity_outcome(value: &str) -> Outcome {
    let Some(opacity) = value.parse::<f64>().ok().filter(|o| o.is_finite()) else {
        return Outcome::Skip;
    };
    let step = ((opacity.clamp(0.0, 1.0) * 100.0 / 5.0).round() * 5.0) as u32;
    if step >= 100 {
        Outcome::Skip
    } else {
        Outcome::token(format!("opacity-{}", step))
    }
}

/// `sans-serif`, `serif` and `monospace` are supplied by the utility classes'
/// own font stacks and are dropped.
fn is_generic_family(value: &str) -> bool {
    let unquoted = value.trim().trim_matches(|c| c == '"' || c == '\'');
    matches!(unquoted, "sans-serif" | "serif" | "monospace")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(property: &str, value: &str) -> Vec<String> {
        classify(property, value)
    }

    #[test]
    fn keyword_properties() {
        assert_eq!(tokens("display", "flex"), vec!["flex"]);
        assert_eq!(tokens("display", "none"), vec!["hidden"]);
        assert!(tokens("display", "block").is_empty());
        assert!(tokens("display", "ruby").is_empty());
        assert_eq!(tokens("flex-direction", "column"), vec!["flex-col"]);
        assert_eq!(tokens("align-items", "center"), vec!["items-center"]);
        assert_eq!(tokens("justify-content", "space-between"), vec!["justify-between"]);
        assert_eq!(tokens("text-align", "center"), vec!["text-center"]);
        assert_eq!(tokens("position", "absolute"), vec!["absolute"]);
        assert_eq!(tokens("overflow", "hidden"), vec!["overflow-hidden"]);
        assert_eq!(tokens("cursor", "pointer"), vec!["cursor-pointer"]);
        assert_eq!(tokens("text-decoration-line", "underline"), vec!["underline"]);
    }

    #[test]
    fn font_weight_unknown_is_arbitrary() {
        assert_eq!(tokens("font-weight", "700"), vec!["font-bold"]);
        assert!(tokens("font-weight", "400").is_empty());
        assert_eq!(tokens("font-weight", "450"), vec!["font-[450]"]);
    }

    #[test]
    fn scalar_properties() {
        assert_eq!(tokens("font-size", "14px"), vec!["text-sm"]);
        assert!(tokens("font-size", "16px").is_empty());
        assert_eq!(tokens("font-size", "15px"), vec!["text-[15px]"]);
        assert_eq!(tokens("line-height", "24px"), vec!["leading-6"]);
        assert_eq!(tokens("line-height", "21.5px"), vec!["leading-[21.5px]"]);
        assert_eq!(tokens("border-radius", "8px"), vec!["rounded-lg"]);
        assert_eq!(tokens("border-radius", "50%"), vec!["rounded-full"]);
        assert_eq!(tokens("border-radius", "4px 8px"), vec!["rounded-[4px_8px]"]);
        assert!(tokens("border-radius", "0px").is_empty());
    }

    #[test]
    fn color_properties() {
        assert_eq!(tokens("color", "rgb(239, 68, 68)"), vec!["text-red-500"]);
        assert!(tokens("color", "rgb(0, 0, 0)").is_empty());
        assert_eq!(tokens("background-color", "rgb(10, 20, 30)"), vec!["bg-[#0a141e]"]);
        assert!(tokens("background-color", "rgba(0, 0, 0, 0)").is_empty());
        assert!(tokens("background-color", "transparent").is_empty());
        assert_eq!(tokens("background-color", "rgba(0, 0, 0, 0.5)"), vec!["bg-black/50"]);
        assert_eq!(
            tokens("background-color", "rgba(10, 20, 30, 0.25)"),
            vec!["bg-[rgba(10,20,30,0.25)]"]
        );
        assert_eq!(tokens("color", "rgba(1, 2, 3, 0)"), vec!["text-transparent"]);
    }

    #[test]
    fn unparsable_color_becomes_literal() {
        assert_eq!(
            classify_property("color", "color(srgb 1 0 0)"),
            Outcome::Literal("color(srgb 1 0 0)".to_string())
        );
    }

    #[test]
    fn padding_shorthand_collapse() {
        assert_eq!(tokens("padding", "8px"), vec!["p-2"]);
        assert_eq!(tokens("padding", "16px 16px 16px 16px"), vec!["p-4"]);
        assert!(tokens("padding", "0px").is_empty());
    }

    #[test]
    fn padding_with_one_differing_side_is_fully_directional() {
        assert_eq!(
            tokens("padding", "8px 8px 8px 16px"),
            vec!["pt-2", "pr-2", "pb-2", "pl-4"]
        );
    }

    #[test]
    fn zero_sides_are_omitted() {
        assert_eq!(tokens("margin", "0px 0px 24px"), vec!["mb-6"]);
        assert_eq!(tokens("margin", "0px auto"), vec!["mr-auto", "ml-auto"]);
        assert_eq!(tokens("margin", "-8px 0px 0px"), vec!["-mt-2"]);
        assert_eq!(tokens("padding", "0px 13.5rem"), vec!["pr-[13.5rem]", "pl-[13.5rem]"]);
    }

    #[test]
    fn border_widths() {
        assert!(tokens("border-width", "0px").is_empty());
        assert_eq!(tokens("border-width", "1px"), vec!["border"]);
        assert_eq!(tokens("border-width", "2px"), vec!["border-2"]);
        assert_eq!(tokens("border-width", "3px"), vec!["border-[3px]"]);
        assert_eq!(tokens("border-width", "0px 0px 1px"), vec!["border"]);
        assert_eq!(
            tokens("border-width", "1px 2px 0px 0px"),
            vec!["border-t-[1px]", "border-r-[2px]"]
        );
    }

    #[test]
    fn opacity_steps() {
        assert_eq!(tokens("opacity", "0.5"), vec!["opacity-50"]);
        assert_eq!(tokens("opacity", "0.33"), vec!["opacity-35"]);
        assert_eq!(tokens("opacity", "0"), vec!["opacity-0"]);
        assert!(tokens("opacity", "1").is_empty());
        assert!(tokens("opacity", "0.99").is_empty());
        assert!(tokens("opacity", "half").is_empty());
        assert!(tokens("opacity", "NaN").is_empty());
        assert!(tokens("opacity", "inf").is_empty());
    }

    #[test]
    fn z_index() {
        assert_eq!(tokens("z-index", "10"), vec!["z-10"]);
        assert_eq!(tokens("z-index", "999"), vec!["z-[999]"]);
        assert_eq!(tokens("z-index", "-1"), vec!["z-[-1]"]);
        assert!(tokens("z-index", "auto").is_empty());
    }

    #[test]
    fn lengths() {
        assert_eq!(tokens("width", "100%"), vec!["w-full"]);
        assert_eq!(tokens("width", "64px"), vec!["w-16"]);
        assert_eq!(tokens("width", "1234.5px"), vec!["w-[1234.5px]"]);
        assert!(tokens("width", "auto").is_empty());
        assert!(tokens("max-width", "none").is_empty());
        assert!(tokens("min-height", "0px").is_empty());
        assert_eq!(tokens("top", "-4px"), vec!["-top-1"]);
    }

    #[test]
    fn gap_values() {
        assert_eq!(tokens("gap", "16px"), vec!["gap-4"]);
        assert_eq!(tokens("gap", "8px 16px"), vec!["gap-y-2", "gap-x-4"]);
        assert!(tokens("gap", "normal").is_empty());
        assert!(tokens("gap", "normal normal").is_empty());
    }

    #[test]
    fn literal_passthrough() {
        let shadow = "rgba(0, 0, 0, 0.1) 0px 1px 2px 0px";
        assert_eq!(
            classify_property("box-shadow", shadow),
            Outcome::Literal(shadow.to_string())
        );
        assert_eq!(classify_property("transform", "none"), Outcome::Skip);
        assert!(tokens("box-shadow", shadow).is_empty());
    }

    #[test]
    fn generic_font_families_are_dropped() {
        assert_eq!(classify_property("font-family", "sans-serif"), Outcome::Skip);
        assert_eq!(classify_property("font-family", "\"serif\""), Outcome::Skip);
        assert_eq!(
            classify_property("font-family", "Inter, sans-serif"),
            Outcome::Literal("Inter, sans-serif".to_string())
        );
    }

    #[test]
    fn untracked_property_is_skipped() {
        assert_eq!(classify_property("unicode-bidi", "isolate"), Outcome::Skip);
    }

    #[test]
    fn classify_is_deterministic() {
        for _ in 0..3 {
            assert_eq!(tokens("padding", "8px 8px 8px 16px"), tokens("padding", "8px 8px 8px 16px"));
        }
    }

    #[test]
    fn style_in_category_order() {
        let style = ComputedStyle::new()
            .with("background-color", "rgb(59, 130, 246)")
            .with("padding-top", "16px")
            .with("padding-right", "16px")
            .with("padding-bottom", "16px")
            .with("padding-left", "16px")
            .with("display", "flex")
            .with("font-weight", "600")
            .with("box-shadow", "rgba(0, 0, 0, 0.1) 0px 1px 2px 0px");
        let classes = classify_style(&style);
        assert_eq!(classes.tokens, vec!["font-semibold", "flex", "p-4", "bg-blue-500"]);
        assert_eq!(
            classes.literals,
            vec![(
                "box-shadow".to_string(),
                "rgba(0, 0, 0, 0.1) 0px 1px 2px 0px".to_string()
            )]
        );
    }

    #[test]
    fn insets_require_positioning() {
        let style = ComputedStyle::new().with("top", "8px").with("left", "0px");
        assert!(classify_style(&style).tokens.is_empty());

        let style = style.with("position", "absolute");
        assert_eq!(classify_style(&style).tokens, vec!["absolute", "top-2", "left-0"]);
    }

    #[test]
    fn border_group_reads_side_style_and_color() {
        let style = ComputedStyle::new()
            .with("border-top-width", "0px")
            .with("border-right-width", "0px")
            .with("border-bottom-width", "2px")
            .with("border-left-width", "0px")
            .with("border-top-style", "none")
            .with("border-bottom-style", "dashed")
            .with("border-top-color", "rgb(0, 0, 0)")
            .with("border-bottom-color", "rgb(229, 231, 235)")
            .with("border-radius", "4px");
        assert_eq!(
            classify_style(&style).tokens,
            vec!["border-2", "border-dashed", "border-gray-200", "rounded"]
        );
    }

    #[test]
    fn border_color_ignored_without_width() {
        let style = ComputedStyle::new()
            .with("border-top-width", "0px")
            .with("border-color", "rgb(239, 68, 68)");
        assert!(classify_style(&style).tokens.is_empty());
    }

    #[test]
    fn border_width_shorthand_is_the_fallback() {
        let style = ComputedStyle::new()
            .with("border-width", "2px")
            .with("border-style", "dashed")
            .with("border-color", "rgb(239, 68, 68)");
        assert_eq!(
            classify_style(&style).tokens,
            vec!["border-2", "border-dashed", "border-red-500"]
        );

        let style = ComputedStyle::new().with("border", "2px solid red");
        assert!(classify_style(&style).tokens.is_empty());
    }
}
