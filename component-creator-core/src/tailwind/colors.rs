//! Named color palette and nearest-color matching.
//!
//! The palette is the Tailwind family table trimmed to shades 50 through 800,
//! plus `black` and `white`. Deeper shades are left out so near-black brand
//! colors keep their exact value as an arbitrary token instead of snapping to
//! a 900/950 step.

use regex::Regex;
use std::sync::OnceLock;

/// Matches closer than this (Euclidean RGB distance) are accepted.
pub const COLOR_MATCH_THRESHOLD: f64 = 30.0;

/// Shade labels for the nine entries of [`ColorFamily::shades`].
pub const SHADE_LABELS: [u16; 9] = [50, 100, 200, 300, 400, 500, 600, 700, 800];

/// One hue with its shade ramp.
#[derive(Debug, Clone, Copy)]
pub struct ColorFamily {
    pub name: &'static str,
    pub shades: [(u8, u8, u8); 9],
}

/// A color parsed from `rgb()` / `rgba()` notation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub fn is_transparent(&self) -> bool {
        self.a <= 0.0
    }

    pub fn is_opaque(&self) -> bool {
        self.a >= 1.0
    }

    /// `#rrggbb`, alpha ignored.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Result of a successful palette lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorMatch {
    /// Palette name, e.g. `red-500` or `white`.
    pub name: String,
    pub distance: f64,
}

const NAMED: &[(&str, (u8, u8, u8))] = &[("black", (0, 0, 0)), ("white", (255, 255, 255))];

pub const FAMILIES: &[ColorFamily] = &[
    ColorFamily {
        name: "red",
        shades: [
            (254, 242, 242), (254, 226, 226), (254, 202, 202),
            (252, 165, 165), (248, 113, 113), (239, 68, 68),
            (220, 38, 38), (185, 28, 28), (153, 27, 27),
        ],
    },
    ColorFamily {
        name: "orange",
        shades: [
            (255, 247, 237), (255, 237, 213), (254, 215, 170),
            (253, 186, 116), (251, 146, 60), (249, 115, 22),
            (234, 88, 12), (194, 65, 12), (154, 52, 18),
        ],
    },
    ColorFamily {
        name: "amber",
        shades: [
            (255, 251, 235), (254, 243, 199), (253, 230, 138),
            (252, 211, 77), (251, 191, 36), (245, 158, 11),
            (217, 119, 6), (180, 83, 9), (146, 64, 14),
        ],
    },
    ColorFamily {
        name: "yellow",
        shades: [
            (254, 252, 232), (254, 249, 195), (254, 240, 138),
            (253, 224, 71), (250, 204, 21), (234, 179, 8),
            (202, 138, 4), (161, 98, 7), (133, 77, 14),
        ],
    },
    ColorFamily {
        name: "lime",
        shades: [
            (247, 254, 231), (236, 252, 203), (217, 249, 157),
            (190, 242, 100), (163, 230, 53), (132, 204, 22),
            (101, 163, 13), (77, 124, 15), (63, 98, 18),
        ],
    },
    ColorFamily {
        name: "green",
        shades: [
            (240, 253, 244), (220, 252, 231), (187, 247, 208),
            (134, 239, 172), (74, 222, 128), (34, 197, 94),
            (22, 163, 74), (21, 128, 61), (22, 101, 52),
        ],
    },
    ColorFamily {
        name: "emerald",
        shades: [
            (236, 253, 245), (209, 250, 229), (167, 243, 208),
            (110, 231, 183), (52, 211, 153), (16, 185, 129),
            (5, 150, 105), (4, 120, 87), (6, 95, 70),
        ],
    },
    ColorFamily {
        name: "teal",
        shades: [
            (240, 253, 250), (204, 251, 241), (153, 246, 228),
            (94, 234, 212), (45, 212, 191), (20, 184, 166),
            (13, 148, 136), (15, 118, 110), (17, 94, 89),
        ],
    },
    ColorFamily {
        name: "cyan",
        shades: [
            (236, 254, 255), (207, 250, 254), (165, 243, 252),
            (103, 232, 249), (34, 211, 238), (6, 182, 212),
            (8, 145, 178), (14, 116, 144), (21, 94, 117),
        ],
    },
    ColorFamily {
        name: "sky",
        shades: [
            (240, 249, 255), (224, 242, 254), (186, 230, 253),
            (125, 211, 252), (56, 189, 248), (14, 165, 233),
            (2, 132, 199), (3, 105, 161), (7, 89, 133),
        ],
    },
    ColorFamily {
        name: "blue",
        shades: [
            (239, 246, 255), (219, 234, 254), (191, 219, 254),
            (147, 197, 253), (96, 165, 250), (59, 130, 246),
            (37, 99, 235), (29, 78, 216), (30, 64, 175),
        ],
    },
    ColorFamily {
        name: "indigo",
        shades: [
            (238, 242, 255), (224, 231, 255), (199, 210, 254),
            (165, 180, 252), (129, 140, 248), (99, 102, 241),
            (79, 70, 229), (67, 56, 202), (55, 48, 163),
        ],
    },
    ColorFamily {
        name: "violet",
        shades: [
            (245, 243, 255), (237, 233, 254), (221, 214, 254),
            (196, 181, 253), (167, 139, 250), (139, 92, 246),
            (124, 58, 237), (109, 40, 217), (91, 33, 182),
        ],
    },
    ColorFamily {
        name: "purple",
        shades: [
            (250, 245, 255), (243, 232, 255), (233, 213, 255),
            (216, 180, 254), (192, 132, 252), (168, 85, 247),
            (147, 51, 234), (126, 34, 206), (107, 33, 168),
        ],
    },
    ColorFamily {
        name: "fuchsia",
        shades: [
            (253, 244, 255), (250, 232, 255), (245, 208, 254),
            (240, 171, 252), (232, 121, 249), (217, 70, 239),
            (192, 38, 211), (162, 28, 175), (134, 25, 143),
        ],
    },
    ColorFamily {
        name: "pink",
        shades: [
            (253, 242, 248), (252, 231, 243), (251, 207, 232),
            (249, 168, 212), (244, 114, 182), (236, 72, 153),
            (219, 39, 119), (190, 24, 93), (157, 23, 77),
        ],
    },
    ColorFamily {
        name: "rose",
        shades: [
            (255, 241, 242), (255, 228, 230), (254, 205, 211),
            (253, 164, 175), (251, 113, 133), (244, 63, 94),
            (225, 29, 72), (190, 18, 60), (159, 18, 57),
        ],
    },
    ColorFamily {
        name: "slate",
        shades: [
            (248, 250, 252), (241, 245, 249), (226, 232, 240),
            (203, 213, 225), (148, 163, 184), (100, 116, 139),
            (71, 85, 105), (51, 65, 85), (30, 41, 59),
        ],
    },
    ColorFamily {
        name: "gray",
        shades: [
            (249, 250, 251), (243, 244, 246), (229, 231, 235),
            (209, 213, 219), (156, 163, 175), (107, 114, 128),
            (75, 85, 99), (55, 65, 81), (31, 41, 55),
        ],
    },
    ColorFamily {
        name: "zinc",
        shades: [
            (250, 250, 250), (244, 244, 245), (228, 228, 231),
            (212, 212, 216), (161, 161, 170), (113, 113, 122),
            (82, 82, 91), (63, 63, 70), (39, 39, 42),
        ],
    },
    ColorFamily {
        name: "neutral",
        shades: [
            (250, 250, 250), (245, 245, 245), (229, 229, 229),
            (212, 212, 212), (163, 163, 163), (115, 115, 115),
            (82, 82, 82), (64, 64, 64), (38, 38, 38),
        ],
    },
    ColorFamily {
        name: "stone",
        shades: [
            (250, 250, 249), (245, 245, 244), (231, 229, 228),
            (214, 211, 209), (168, 162, 158), (120, 113, 108),
            (87, 83, 78), (68, 64, 60), (41, 37, 36),
        ],
    },
];

/// Every palette entry in lookup order: `black`, `white`, then each family from
/// its lightest to its darkest shade.
pub fn palette() -> impl Iterator<Item = (String, (u8, u8, u8))> {
    let named = NAMED.iter().map(|(name, rgb)| (name.to_string(), *rgb));
    let shades = FAMILIES.iter().flat_map(|family| {
        SHADE_LABELS
            .iter()
            .zip(family.shades.iter())
            .map(move |(label, rgb)| (format!("{}-{}", family.name, label), *rgb))
    });
    named.chain(shades)
}

/// Look up a palette entry by name.
pub fn lookup(name: &str) -> Option<(u8, u8, u8)> {
    palette().find(|(n, _)| n == name).map(|(_, rgb)| rgb)
}

/// Parses `rgb(r, g, b)` or `rgba(r, g, b, a)`. Channels above 255 fail.
pub fn parse_rgb(value: &str) -> Option<Rgba> {
    static RGB_REGEX: OnceLock<Regex> = OnceLock::new();
    let re = RGB_REGEX.get_or_init(|| {
        Regex::new(
            r"^rgba?\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*(?:,\s*([0-9]*\.?[0-9]+)\s*)?\)$",
        )
        .unwrap()
    });

    let caps = re.captures(value.trim())?;
    let channel = |i: usize| caps.get(i)?.as_str().parse::<u8>().ok();
    let a = match caps.get(4) {
        Some(m) => m.as_str().parse::<f64>().ok()?.clamp(0.0, 1.0),
        None => 1.0,
    };
    Some(Rgba {
        r: channel(1)?,
        g: channel(2)?,
        b: channel(3)?,
        a,
    })
}

/// Closest palette entry to `rgb`, if it lies strictly within
/// [`COLOR_MATCH_THRESHOLD`]. On equal distances the earlier entry wins.
pub fn closest(rgb: (u8, u8, u8)) -> Option<ColorMatch> {
    let mut best: Option<ColorMatch> = None;
    for (name, entry) in palette() {
        let distance = distance(rgb, entry);
        if best.as_ref().map_or(true, |b| distance < b.distance) {
            best = Some(ColorMatch { name, distance });
        }
    }
    best.filter(|m| m.distance < COLOR_MATCH_THRESHOLD)
}

/// Parses a color string and returns the matching palette name.
pub fn match_color(value: &str) -> Option<String> {
    let rgba = parse_rgb(value)?;
    closest((rgba.r, rgba.g, rgba.b)).map(|m| m.name)
}

fn distance(a: (u8, u8, u8), b: (u8, u8, u8)) -> f64 {
    let dr = f64::from(a.0) - f64::from(b.0);
    let dg = f64::from(a.1) - f64::from(b.1);
    let db = f64::from(a.2) - f64::from(b.2);
    (dr * dr + dg * dg + db * db).sqrt()
}
