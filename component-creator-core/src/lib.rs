//! # Component Creator
//!
//! Turns a captured DOM element into a React component styled with Tailwind
//! utility classes.
//!
//! ## Features
//! - Computed style → utility classes, with palette and spacing-scale snapping
//! - Literal `style={{…}}` fallback for CSS without a utility
//! - JSX attribute renaming and relative URL resolution
//! - Merging of fragmented text spans into one text segment
//! - Component wrapper, inspector view model and selection state machine
//! - Request/response handling for a remote code-generation service
//!
//! ## Example
//! ```ignore
//! use component_creator_core::{convert_document, ConvertOptions, Document};
//!
//! let doc = Document::from_json(r#"{
//!   "url": "https://example.com/",
//!   "root": { "tag": "img", "attributes": { "src": "/logo.png" } }
//! }"#)?;
//!
//! let jsx = convert_document(&doc, &ConvertOptions::default())?;
//! assert_eq!(jsx, r#"<img src="https://example.com/logo.png" />"#);
//! ```

pub mod attributes;
pub mod component;
pub mod config;
pub mod dom;
pub mod error;
pub mod generate;
pub mod inspector;
pub mod output;
pub mod selection;
pub mod style;
pub mod tailwind;
pub mod transducer;

// --- Core types ---
pub use config::ConvertOptions;
pub use dom::{Document, ElementNode, Node};
pub use error::{ConvertError, ConvertResult};
pub use output::{OutputChild, OutputNode};
pub use style::{sample_styles, ComputedStyle};
pub use transducer::Transducer;

// --- Glue ---
pub use generate::{
    extract_code_block, run_generation, CodeGenerator, GenerationError, GenerationOutcome,
    GenerationRequest, ModelSelector,
};
pub use inspector::{Inspection, Tab};
pub use selection::{ElementHandle, KeyInput, Pointer, SelectionController, SelectionEffect};

/// Convert an element to an output tree.
///
/// `page_url` is the page the element was captured from; relative links are
/// resolved against it unless `options.base_url` is set.
pub fn convert_element(
    el: &ElementNode,
    options: &ConvertOptions,
    page_url: Option<&str>,
) -> ConvertResult<OutputNode> {
    let transducer = Transducer::new(options.resolve_base(page_url)?)
        .consolidate_text_runs(options.consolidate_text_runs);
    transducer
        .transduce(el)
        .ok_or_else(|| ConvertError::ExcludedRoot { tag: el.tag_lower() })
}

/// Convert a captured document's root to JSX text.
pub fn convert_document(doc: &Document, options: &ConvertOptions) -> ConvertResult<String> {
    let node = convert_element(&doc.root, options, doc.url.as_deref())?;
    Ok(node.to_jsx(options.indent))
}

/// Convert a captured document's root and wrap it in a component module.
pub fn assemble_document(doc: &Document, options: &ConvertOptions) -> ConvertResult<String> {
    let jsx = convert_document(doc, options)?;
    Ok(component::assemble(&options.component_name, &jsx, options.indent))
}

/// Build the inspector view for a captured document's root.
pub fn inspect(doc: &Document, options: &ConvertOptions) -> ConvertResult<Inspection> {
    Inspection::new(&doc.root, options, doc.url.as_deref())
}
