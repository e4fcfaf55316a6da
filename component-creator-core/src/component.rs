//! Wraps converted markup in a React function component.

/// Name used when none is given or the given one has no usable characters.
pub const DEFAULT_COMPONENT_NAME: &str = "GeneratedComponent";

/// Turns arbitrary text into a PascalCase identifier:
/// `"pricing card"` → `PricingCard`, `"hero-section"` → `HeroSection`.
pub fn component_name(raw: &str) -> String {
    let name: String = raw
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect();

    match name.chars().next() {
        None => DEFAULT_COMPONENT_NAME.to_string(),
        Some(c) if c.is_ascii_digit() => format!("Component{}", name),
        Some(_) => name,
    }
}

/// Emits the component module: a React import, a props interface with an
/// optional `className`, and a default-exported function returning `markup`
/// inside `<div className={className}>`.
pub fn assemble(name: &str, markup: &str, indent: usize) -> String {
    let name = component_name(name);
    let unit = " ".repeat(indent);
    let body_pad = unit.repeat(3);

    let mut out = String::new();
    out.push_str("import React from 'react';\n\n");
    out.push_str(&format!("interface {}Props {{\n", name));
    out.push_str(&format!("{}className?: string;\n", unit));
    out.push_str("}\n\n");
    out.push_str(&format!(
        "export default function {name}({{ className }}: {name}Props) {{\n"
    ));
    out.push_str(&format!("{}return (\n", unit));
    out.push_str(&format!("{}<div className={{className}}>\n", unit.repeat(2)));
    for line in markup.lines().filter(|l| !l.trim().is_empty()) {
        out.push_str(&body_pad);
        out.push_str(line);
        out.push('\n');
    }
    out.push_str(&format!("{}</div>\n", unit.repeat(2)));
    out.push_str(&format!("{});\n", unit));
    out.push_str("}\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_pascal_cased() {
        assert_eq!(component_name("pricing card"), "PricingCard");
        assert_eq!(component_name("hero-section"), "HeroSection");
        assert_eq!(component_name("navBar"), "NavBar");
        assert_eq!(component_name("Button"), "Button");
        assert_eq!(component_name("3d view"), "Component3dView");
    }

    #[test]
    fn empty_names_fall_back() {
        assert_eq!(component_name(""), DEFAULT_COMPONENT_NAME);
        assert_eq!(component_name(" -_ "), DEFAULT_COMPONENT_NAME);
    }

    #[test]
    fn template() {
        let out = assemble("card", "<p>\n  hi\n</p>", 2);
        assert_eq!(
            out,
            "import React from 'react';\n\
             \n\
             interface CardProps {\n  className?: string;\n}\n\
             \n\
             export default function Card({ className }: CardProps) {\n  return (\n    <div className={className}>\n      <p>\n        hi\n      </p>\n    </div>\n  );\n}\n"
        );
    }
}
