//! Declarative per-property conversion table.
//!
//! [`TRACKED`] lists every CSS property the converter looks at, in the order
//! tokens are emitted: typography, layout, spacing, borders, color, dimension,
//! position, misc. An empty token in a keyword table marks the property's
//! default value, which produces nothing.

/// How a property's resolved value becomes tokens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rule {
    /// Fixed keyword → token table.
    Keyword {
        table: &'static [(&'static str, &'static str)],
        unknown: Unknown,
    },
    /// Exact canonical pixel strings → token; anything else becomes
    /// `prefix-[value]`.
    Scalar {
        prefix: &'static str,
        table: &'static [(&'static str, &'static str)],
    },
    /// Palette color with the given prefix (`text`, `bg`, `border`).
    Color { prefix: &'static str, default: ColorDefault },
    /// Length on the spacing scale (`w-4`, `top-[13px]`), with keyword
    /// overrides applied first.
    Length {
        prefix: &'static str,
        keywords: &'static [(&'static str, &'static str)],
    },
    /// `gap`, possibly with distinct row and column values.
    Gap,
    /// Four sides of padding or margin, collapsed to a shorthand when equal.
    Sides { prefix: &'static str },
    /// Four border widths plus the matching border style and color.
    BorderWidth,
    ZIndex,
    Opacity,
    FontFamily,
    /// Kept verbatim as a style declaration; `skip` values are dropped.
    Literal { skip: &'static [&'static str] },
}

/// Policy for keyword values missing from a table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Unknown {
    /// Emit `prefix-[value]`.
    Arbitrary(&'static str),
    Drop,
}

/// Which color counts as "nothing to say" for a color property.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorDefault {
    /// Opaque black text.
    Black,
    /// Any fully transparent color.
    Transparent,
}

#[derive(Debug, Clone, Copy)]
pub struct PropertyRule {
    pub property: &'static str,
    pub rule: Rule,
}

const fn rule(property: &'static str, rule: Rule) -> PropertyRule {
    PropertyRule { property, rule }
}

// ─── Keyword tables ──────────────────────────────────────────────────────────

pub const FONT_WEIGHT: &[(&str, &str)] = &[
    ("100", "font-thin"),
    ("200", "font-extralight"),
    ("300", "font-light"),
    ("400", ""),
    ("500", "font-medium"),
    ("600", "font-semibold"),
    ("700", "font-bold"),
    ("800", "font-extrabold"),
    ("900", "font-black"),
];

pub const FONT_STYLE: &[(&str, &str)] = &[("normal", ""), ("italic", "italic"), ("oblique", "italic")];

pub const TEXT_ALIGN: &[(&str, &str)] = &[
    ("start", ""),
    ("left", "text-left"),
    ("center", "text-center"),
    ("right", "text-right"),
    ("justify", "text-justify"),
    ("end", "text-end"),
];

pub const TEXT_TRANSFORM: &[(&str, &str)] = &[
    ("none", ""),
    ("uppercase", "uppercase"),
    ("lowercase", "lowercase"),
    ("capitalize", "capitalize"),
];

pub const DISPLAY: &[(&str, &str)] = &[
    ("block", ""),
    ("inline", ""),
    ("inline-block", "inline-block"),
    ("flex", "flex"),
    ("inline-flex", "inline-flex"),
    ("grid", "grid"),
    ("inline-grid", "inline-grid"),
    ("none", "hidden"),
    ("table", "table"),
    ("table-row", "table-row"),
    ("table-cell", "table-cell"),
    ("contents", "contents"),
    ("list-item", "list-item"),
    ("flow-root", "flow-root"),
];

pub const FLEX_DIRECTION: &[(&str, &str)] = &[
    ("row", ""),
    ("row-reverse", "flex-row-reverse"),
    ("column", "flex-col"),
    ("column-reverse", "flex-col-reverse"),
];

pub const FLEX_WRAP: &[(&str, &str)] = &[
    ("nowrap", ""),
    ("wrap", "flex-wrap"),
    ("wrap-reverse", "flex-wrap-reverse"),
];

pub const ALIGN_ITEMS: &[(&str, &str)] = &[
    ("normal", ""),
    ("stretch", ""),
    ("start", "items-start"),
    ("flex-start", "items-start"),
    ("center", "items-center"),
    ("end", "items-end"),
    ("flex-end", "items-end"),
    ("baseline", "items-baseline"),
];

pub const JUSTIFY_CONTENT: &[(&str, &str)] = &[
    ("normal", ""),
    ("start", "justify-start"),
    ("flex-start", "justify-start"),
    ("center", "justify-center"),
    ("end", "justify-end"),
    ("flex-end", "justify-end"),
    ("space-between", "justify-between"),
    ("space-around", "justify-around"),
    ("space-evenly", "justify-evenly"),
    ("stretch", "justify-stretch"),
];

pub const OVERFLOW: &[(&str, &str)] = &[
    ("visible", ""),
    ("hidden", "overflow-hidden"),
    ("clip", "overflow-clip"),
    ("auto", "overflow-auto"),
    ("scroll", "overflow-scroll"),
];

pub const BORDER_STYLE: &[(&str, &str)] = &[
    ("none", ""),
    ("solid", ""),
    ("dashed", "border-dashed"),
    ("dotted", "border-dotted"),
    ("double", "border-double"),
    ("hidden", "border-hidden"),
];

pub const POSITION: &[(&str, &str)] = &[
    ("static", ""),
    ("relative", "relative"),
    ("absolute", "absolute"),
    ("fixed", "fixed"),
    ("sticky", "sticky"),
];

pub const CURSOR: &[(&str, &str)] = &[
    ("auto", ""),
    ("default", "cursor-default"),
    ("pointer", "cursor-pointer"),
    ("text", "cursor-text"),
    ("move", "cursor-move"),
    ("wait", "cursor-wait"),
    ("help", "cursor-help"),
    ("progress", "cursor-progress"),
    ("crosshair", "cursor-crosshair"),
    ("not-allowed", "cursor-not-allowed"),
    ("grab", "cursor-grab"),
    ("grabbing", "cursor-grabbing"),
    ("zoom-in", "cursor-zoom-in"),
    ("zoom-out", "cursor-zoom-out"),
];

pub const TEXT_DECORATION_LINE: &[(&str, &str)] = &[
    ("none", ""),
    ("underline", "underline"),
    ("overline", "overline"),
    ("line-through", "line-through"),
];

pub const WHITE_SPACE: &[(&str, &str)] = &[
    ("normal", ""),
    ("nowrap", "whitespace-nowrap"),
    ("pre", "whitespace-pre"),
    ("pre-line", "whitespace-pre-line"),
    ("pre-wrap", "whitespace-pre-wrap"),
    ("break-spaces", "whitespace-break-spaces"),
];

pub const VISIBILITY: &[(&str, &str)] = &[
    ("visible", ""),
    ("hidden", "invisible"),
    ("collapse", "collapse"),
];

// ─── Scalar tables ───────────────────────────────────────────────────────────

pub const FONT_SIZE: &[(&str, &str)] = &[
    ("12px", "text-xs"),
    ("14px", "text-sm"),
    ("16px", ""),
    ("18px", "text-lg"),
    ("20px", "text-xl"),
    ("24px", "text-2xl"),
    ("30px", "text-3xl"),
    ("36px", "text-4xl"),
    ("48px", "text-5xl"),
    ("60px", "text-6xl"),
    ("72px", "text-7xl"),
    ("96px", "text-8xl"),
    ("128px", "text-9xl"),
];

pub const LINE_HEIGHT: &[(&str, &str)] = &[
    ("normal", ""),
    ("12px", "leading-3"),
    ("16px", "leading-4"),
    ("20px", "leading-5"),
    ("24px", "leading-6"),
    ("28px", "leading-7"),
    ("32px", "leading-8"),
    ("36px", "leading-9"),
    ("40px", "leading-10"),
];

pub const BORDER_RADIUS: &[(&str, &str)] = &[
    ("0px", ""),
    ("2px", "rounded-sm"),
    ("4px", "rounded"),
    ("6px", "rounded-md"),
    ("8px", "rounded-lg"),
    ("12px", "rounded-xl"),
    ("16px", "rounded-2xl"),
    ("24px", "rounded-3xl"),
    ("9999px", "rounded-full"),
    ("50%", "rounded-full"),
];

/// Uniform border widths with a dedicated utility.
pub const BORDER_WIDTH: &[(&str, &str)] = &[
    ("1px", "border"),
    ("2px", "border-2"),
    ("4px", "border-4"),
    ("8px", "border-8"),
];

pub const Z_INDEX: &[(&str, &str)] = &[
    ("auto", ""),
    ("0", "z-0"),
    ("10", "z-10"),
    ("20", "z-20"),
    ("30", "z-30"),
    ("40", "z-40"),
    ("50", "z-50"),
];

// ─── Length keywords ─────────────────────────────────────────────────────────

const SIZE_KEYWORDS: &[(&str, &str)] = &[("auto", ""), ("100%", "full"), ("fit-content", "fit")];
const MIN_SIZE_KEYWORDS: &[(&str, &str)] = &[("auto", ""), ("0px", ""), ("100%", "full")];
const MAX_SIZE_KEYWORDS: &[(&str, &str)] = &[("none", ""), ("100%", "full")];
const INSET_KEYWORDS: &[(&str, &str)] = &[("auto", ""), ("100%", "full")];

// ─── Tracked properties ──────────────────────────────────────────────────────

pub const TRACKED: &[PropertyRule] = &[
    // typography
    rule("font-size", Rule::Scalar { prefix: "text", table: FONT_SIZE }),
    rule("font-weight", Rule::Keyword { table: FONT_WEIGHT, unknown: Unknown::Arbitrary("font") }),
    rule("font-style", Rule::Keyword { table: FONT_STYLE, unknown: Unknown::Drop }),
    rule("line-height", Rule::Scalar { prefix: "leading", table: LINE_HEIGHT }),
    rule("text-align", Rule::Keyword { table: TEXT_ALIGN, unknown: Unknown::Drop }),
    rule("text-transform", Rule::Keyword { table: TEXT_TRANSFORM, unknown: Unknown::Drop }),
    rule("font-family", Rule::FontFamily),
    rule("letter-spacing", Rule::Literal { skip: &["normal", "0px"] }),
    // layout
    rule("display", Rule::Keyword { table: DISPLAY, unknown: Unknown::Drop }),
    rule("flex-direction", Rule::Keyword { table: FLEX_DIRECTION, unknown: Unknown::Drop }),
    rule("flex-wrap", Rule::Keyword { table: FLEX_WRAP, unknown: Unknown::Drop }),
    rule("align-items", Rule::Keyword { table: ALIGN_ITEMS, unknown: Unknown::Drop }),
    rule("justify-content", Rule::Keyword { table: JUSTIFY_CONTENT, unknown: Unknown::Drop }),
    rule("gap", Rule::Gap),
    rule("overflow", Rule::Keyword { table: OVERFLOW, unknown: Unknown::Drop }),
    // spacing
    rule("padding", Rule::Sides { prefix: "p" }),
    rule("margin", Rule::Sides { prefix: "m" }),
    // borders
    rule("border-width", Rule::BorderWidth),
    rule("border-radius", Rule::Scalar { prefix: "rounded", table: BORDER_RADIUS }),
    // color
    rule("color", Rule::Color { prefix: "text", default: ColorDefault::Black }),
    rule("background-color", Rule::Color { prefix: "bg", default: ColorDefault::Transparent }),
    // dimension
    rule("width", Rule::Length { prefix: "w", keywords: SIZE_KEYWORDS }),
    rule("height", Rule::Length { prefix: "h", keywords: SIZE_KEYWORDS }),
    rule("min-width", Rule::Length { prefix: "min-w", keywords: MIN_SIZE_KEYWORDS }),
    rule("min-height", Rule::Length { prefix: "min-h", keywords: MIN_SIZE_KEYWORDS }),
    rule("max-width", Rule::Length { prefix: "max-w", keywords: MAX_SIZE_KEYWORDS }),
    rule("max-height", Rule::Length { prefix: "max-h", keywords: MAX_SIZE_KEYWORDS }),
    // position
    rule("position", Rule::Keyword { table: POSITION, unknown: Unknown::Drop }),
    rule("top", Rule::Length { prefix: "top", keywords: INSET_KEYWORDS }),
    rule("right", Rule::Length { prefix: "right", keywords: INSET_KEYWORDS }),
    rule("bottom", Rule::Length { prefix: "bottom", keywords: INSET_KEYWORDS }),
    rule("left", Rule::Length { prefix: "left", keywords: INSET_KEYWORDS }),
    rule("z-index", Rule::ZIndex),
    // misc
    rule("cursor", Rule::Keyword { table: CURSOR, unknown: Unknown::Drop }),
    rule("opacity", Rule::Opacity),
    rule("text-decoration-line", Rule::Keyword { table: TEXT_DECORATION_LINE, unknown: Unknown::Drop }),
    rule("white-space", Rule::Keyword { table: WHITE_SPACE, unknown: Unknown::Drop }),
    rule("visibility", Rule::Keyword { table: VISIBILITY, unknown: Unknown::Drop }),
    rule("box-shadow", Rule::Literal { skip: &["none"] }),
    rule("transform", Rule::Literal { skip: &["none"] }),
    rule("background-image", Rule::Literal { skip: &["none"] }),
];

/// Looks up the rule for a tracked property.
pub fn rule_for(property: &str) -> Option<Rule> {
    TRACKED
        .iter()
        .find(|r| r.property == property)
        .map(|r| r.rule)
}

/// Properties that only apply to positioned elements.
pub const INSETS: &[&str] = &["top", "right", "bottom", "left"];

pub fn lookup(table: &[(&str, &'static str)], value: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == value).map(|(_, v)| *v)
}
