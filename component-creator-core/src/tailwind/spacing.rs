//! Pixel lengths to spacing-scale steps.

/// How far (in whole pixels) a length may sit from a scale step and still
/// snap to it.
pub const SCALE_TOLERANCE_PX: i64 = 2;

/// Pixel value → scale label, ascending.
pub const SCALE: &[(i64, &str)] = &[
    (0, "0"),
    (1, "px"),
    (2, "0.5"),
    (4, "1"),
    (6, "1.5"),
    (8, "2"),
    (10, "2.5"),
    (12, "3"),
    (14, "3.5"),
    (16, "4"),
    (20, "5"),
    (24, "6"),
    (28, "7"),
    (32, "8"),
    (36, "9"),
    (40, "10"),
    (44, "11"),
    (48, "12"),
    (56, "14"),
    (64, "16"),
    (80, "20"),
    (96, "24"),
    (112, "28"),
    (128, "32"),
    (144, "36"),
    (160, "40"),
    (176, "44"),
    (192, "48"),
    (208, "52"),
    (224, "56"),
    (240, "60"),
    (256, "64"),
    (288, "72"),
    (320, "80"),
    (384, "96"),
];

/// Parses `"12px"` / `"12.5px"` / `"-4px"` into a float. Other units fail.
pub fn parse_px(value: &str) -> Option<f64> {
    let number = value.trim().strip_suffix("px")?;
    let parsed: f64 = number.trim().parse().ok()?;
    parsed.is_finite().then_some(parsed)
}

/// Maps a non-negative pixel count onto the scale: exact hit first, then the
/// nearest step within [`SCALE_TOLERANCE_PX`] (earlier step on ties).
pub fn scale_step(px: i64) -> Option<&'static str> {
    if let Some((_, label)) = SCALE.iter().find(|(v, _)| *v == px) {
        return Some(label);
    }

    let mut best: Option<(i64, &'static str)> = None;
    for &(value, label) in SCALE {
        let diff = (value - px).abs();
        if diff <= SCALE_TOLERANCE_PX && best.map_or(true, |(d, _)| diff < d) {
            best = Some((diff, label));
        }
    }
    best.map(|(_, label)| label)
}

/// A length resolved against the scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaleMatch {
    pub label: &'static str,
    pub negative: bool,
}

/// Parses a pixel length and maps its rounded magnitude onto the scale.
///
/// Returns `None` for non-pixel units and for lengths too far from any step;
/// callers fall back to an arbitrary `[value]` token.
pub fn spacing_value(value: &str) -> Option<ScaleMatch> {
    let px = parse_px(value)?.round();
    let (largest, _) = SCALE[SCALE.len() - 1];
    if px.abs() > (largest + SCALE_TOLERANCE_PX) as f64 {
        return None;
    }
    let rounded = px as i64;
    let label = scale_step(rounded.abs())?;
    Some(ScaleMatch {
        label,
        negative: rounded < 0 && label != "0",
    })
}

/// Prefixed scale token (`p-4`, `-mt-2`) or arbitrary token (`p-[13.5rem]`).
pub fn spacing_token(prefix: &str, value: &str) -> String {
    match spacing_value(value) {
        Some(m) if m.negative => format!("-{}-{}", prefix, m.label),
        Some(m) => format!("{}-{}", prefix, m.label),
        None => super::arbitrary(prefix, value),
    }
}

/// True for lengths that resolve to zero pixels.
pub fn is_zero(value: &str) -> bool {
    parse_px(value).is_some_and(|px| px == 0.0) || value.trim() == "0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_step_maps_to_its_own_label() {
        for &(px, label) in SCALE {
            assert_eq!(scale_step(px), Some(label));
            assert_eq!(
                spacing_value(&format!("{}px", px)).map(|m| m.label),
                Some(label)
            );
        }
    }

    #[test]
    fn rounds_before_lookup() {
        assert_eq!(spacing_value("15.6px").map(|m| m.label), Some("4"));
        assert_eq!(spacing_value("7.5px").map(|m| m.label), Some("2"));
    }

    #[test]
    fn snaps_within_tolerance() {
        assert_eq!(scale_step(17), Some("4"));
        assert_eq!(scale_step(50), Some("12"));
        // 18 is two away from both 16 and 20: the earlier step wins.
        assert_eq!(scale_step(18), Some("4"));
    }

    #[test]
    fn far_values_do_not_match() {
        assert_eq!(scale_step(52), None);
        assert_eq!(scale_step(72), None);
        assert_eq!(scale_step(1000), None);
        assert_eq!(spacing_value("300px"), None);
        assert_eq!(spacing_value("-1e19px"), None);
        assert_eq!(spacing_value("1e300px"), None);
        assert_eq!(spacing_token("mt", "-1e19px"), "mt-[-1e19px]");
    }

    #[test]
    fn non_pixel_units_do_not_match() {
        assert_eq!(spacing_value("1rem"), None);
        assert_eq!(spacing_value("50%"), None);
        assert_eq!(spacing_value("auto"), None);
    }

    #[test]
    fn negative_lengths() {
        assert_eq!(
            spacing_value("-8px"),
            Some(ScaleMatch { label: "2", negative: true })
        );
        assert_eq!(spacing_token("mt", "-8px"), "-mt-2");
        assert_eq!(spacing_token("mt", "-0.2px"), "mt-0");
    }

    #[test]
    fn tokens() {
        assert_eq!(spacing_token("p", "16px"), "p-4");
        assert_eq!(spacing_token("p", "1px"), "p-px");
        assert_eq!(spacing_token("p", "300px"), "p-[300px]");
        assert_eq!(spacing_token("p", "2rem"), "p-[2rem]");
    }

    #[test]
    fn zero_detection() {
        assert!(is_zero("0px"));
        assert!(is_zero("0"));
        assert!(!is_zero("0.5px"));
        assert!(!is_zero("auto"));
    }
}
