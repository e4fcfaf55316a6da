use component_creator_core::{
    assemble_document, convert_document, convert_element, extract_code_block, inspect,
    run_generation, tailwind, CodeGenerator, ConvertError, ConvertOptions, Document, ElementNode,
    GenerationError, GenerationOutcome, GenerationRequest, ModelSelector, OutputChild, Tab,
};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::PathBuf;

fn get_fixture_path(filename: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("fixtures");
    path.push(filename);
    path
}

fn load_fixture(filename: &str) -> Document {
    let content = fs::read_to_string(get_fixture_path(filename)).unwrap();
    Document::from_str_auto(&content).unwrap()
}

fn jsx(el: &ElementNode) -> String {
    convert_element(el, &ConvertOptions::default(), None)
        .unwrap()
        .to_jsx(2)
}

// ─── End-to-end scenarios ────────────────────────────────────────────────────

#[test]
fn test_exact_palette_color_and_text() {
    let el = ElementNode::new("div")
        .attr("style", "color:rgb(239,68,68)")
        .css("color", "rgb(239, 68, 68)")
        .text("hi");
    assert_eq!(jsx(&el), r#"<div className="text-red-500">hi</div>"#);
}

#[test]
fn test_equal_padding_collapses_to_shorthand() {
    let el = ElementNode::new("section")
        .css("padding-top", "16px")
        .css("padding-right", "16px")
        .css("padding-bottom", "16px")
        .css("padding-left", "16px");
    let node = convert_element(&el, &ConvertOptions::default(), None).unwrap();
    assert_eq!(node.tokens, vec!["p-4"]);
}

#[test]
fn test_far_color_becomes_arbitrary_hex() {
    let el = ElementNode::new("div").css("background-color", "rgb(10, 20, 30)");
    assert_eq!(jsx(&el), r#"<div className="bg-[#0a141e]"></div>"#);
}

#[test]
fn test_span_run_is_consolidated() {
    let doc = load_fixture("gradient-text.json");
    let out = convert_document(&doc, &ConvertOptions::default()).unwrap();
    assert_eq!(
        out,
        "<h1 className=\"text-4xl font-bold\">\n  <span className=\"text-indigo-500\">ABC</span>\n</h1>"
    );
}

#[test]
fn test_relative_src_resolved_and_self_closed() {
    let doc = load_fixture("logo.yaml");
    let out = convert_document(&doc, &ConvertOptions::default()).unwrap();
    assert_eq!(
        out,
        r#"<img className="w-16 h-16" src="https://example.com/logo.png" alt="Example logo" />"#
    );
}

struct PlainText;

impl CodeGenerator for PlainText {
    fn generate(&self, _request: &GenerationRequest) -> Result<String, GenerationError> {
        Ok("I could not produce code for this element.\nTry again.".to_string())
    }
}

#[test]
fn test_response_without_fence_is_returned_verbatim() {
    let doc = load_fixture("logo.yaml");
    let request = GenerationRequest::from_element(&doc.root, ModelSelector::Fast);
    let outcome = run_generation(&PlainText, &request);
    assert_eq!(
        outcome,
        GenerationOutcome::Artifact("I could not produce code for this element.\nTry again.".to_string())
    );
    assert_eq!(extract_code_block("no fence"), "no fence");
}

// ─── Whole documents ─────────────────────────────────────────────────────────

#[test]
fn test_pricing_card_jsx() {
    let doc = load_fixture("pricing-card.json");
    let out = convert_document(&doc, &ConvertOptions::default()).unwrap();
    let expected = [
        r#"<div className="flex flex-col gap-4 p-6 border border-gray-200 rounded-xl bg-white" data-plan="pro" style={{ boxShadow: "rgba(0, 0, 0, 0.1) 0px 4px 6px -1px" }}>"#,
        r#"  <h3 className="text-xl font-semibold text-gray-800">Pro</h3>"#,
        r#"  <p className="text-gray-500">For growing teams</p>"#,
        r#"  <a className="text-center pt-2 pr-4 pb-2 pl-4 rounded-md text-white bg-indigo-600" href="https://shop.example.com/checkout?plan=pro">Buy now</a>"#,
        r#"</div>"#,
    ]
    .join("\n");
    assert_eq!(out, expected);
}

#[test]
fn test_pricing_card_component_with_options_file() {
    let doc = load_fixture("pricing-card.json");
    let options =
        ConvertOptions::from_yaml(&fs::read_to_string(get_fixture_path("options.yaml")).unwrap())
            .unwrap();
    let component = assemble_document(&doc, &options).unwrap();

    assert!(component.starts_with("import React from 'react';\n\ninterface PricingCardProps {\n    className?: string;\n}\n"));
    assert!(component.contains("export default function PricingCard({ className }: PricingCardProps) {"));
    assert!(component.contains("        <div className={className}>\n            <div className=\"flex flex-col"));
    assert!(component.contains("                <h3 className=\"text-xl font-semibold text-gray-800\">Pro</h3>"));
    assert!(component.ends_with("        </div>\n    );\n}\n"));
}

#[test]
fn test_inspection_tabs() {
    let doc = load_fixture("logo.yaml");
    let inspection = inspect(&doc, &ConvertOptions::default()).unwrap();
    assert_eq!(inspection.render(Tab::Styling), "width: 64px;\nheight: 64px;\n");
    assert_eq!(
        inspection.render(Tab::Html),
        r#"<img src="/logo.png" alt="Example logo">"#
    );
    assert_eq!(inspection.render(Tab::Jsx), convert_document(&doc, &ConvertOptions::default()).unwrap());
}

// ─── Properties ──────────────────────────────────────────────────────────────

#[test]
fn test_conversion_is_idempotent() {
    let doc = load_fixture("pricing-card.json");
    let options = ConvertOptions::default();
    let first = convert_document(&doc, &options).unwrap();
    let second = convert_document(&doc, &options).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_void_elements_never_have_children() {
    for tag in ["br", "hr", "input", "img", "meta", "wbr"] {
        let el = ElementNode::new(tag).text("x").child(ElementNode::new("b"));
        let node = convert_element(&el, &ConvertOptions::default(), None).unwrap();
        assert!(node.void, "{} should be void", tag);
        assert!(node.children.is_empty());
        assert!(node.to_jsx(2).ends_with(" />"));
    }
}

#[test]
fn test_excluded_root_is_an_error() {
    for tag in ["style", "script", "noscript", "iframe", "object", "embed"] {
        let result = convert_element(&ElementNode::new(tag), &ConvertOptions::default(), None);
        assert!(
            matches!(result, Err(ConvertError::ExcludedRoot { .. })),
            "<{}> should be excluded",
            tag
        );
    }
}

#[test]
fn test_excluded_children_contribute_nothing() {
    let el = ElementNode::new("div")
        .child(ElementNode::new("noscript").child(ElementNode::new("img")))
        .text("visible");
    let node = convert_element(&el, &ConvertOptions::default(), None).unwrap();
    assert_eq!(node.children, vec![OutputChild::Text("visible".to_string())]);
}

#[test]
fn test_shorthand_never_mixed_with_directional_tokens() {
    let tokens = tailwind::classify("margin", "8px 8px 8px 12px");
    assert_eq!(tokens, vec!["mt-2", "mr-2", "mb-2", "ml-3"]);
    assert!(!tokens.iter().any(|t| t == "m-2"));
}

#[test]
fn test_color_threshold_is_monotonic() {
    // red-500 is (239, 68, 68); moving further away never turns a miss into a hit.
    let mut matched = true;
    for offset in 0..60u8 {
        let value = format!("rgb({}, 68, 68)", 239 - offset);
        let hit = tailwind::colors::match_color(&value).is_some();
        assert!(matched || !hit, "offset {} matched after a miss", offset);
        matched = hit;
    }
    assert_eq!(
        tailwind::colors::closest((239, 68, 68)).map(|m| m.distance),
        Some(0.0)
    );
}

#[test]
fn test_page_url_override_from_options() {
    let doc = load_fixture("logo.yaml");
    let options = ConvertOptions::default().with_base_url("https://cdn.example.net/assets/");
    let out = convert_document(&doc, &options).unwrap();
    assert!(out.contains(r#"src="https://cdn.example.net/logo.png""#));
}

#[test]
fn test_consolidation_disabled_by_options() {
    let doc = load_fixture("gradient-text.json");
    let options = ConvertOptions {
        consolidate_text_runs: false,
        ..ConvertOptions::default()
    };
    let node = convert_element(&doc.root, &options, None).unwrap();
    assert_eq!(node.elements().count(), 3);
}
