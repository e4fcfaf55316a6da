//! Boundary to the hosted code-generation service.
//!
//! The service itself lives outside this crate: a host implements
//! [`CodeGenerator`] over whatever transport it has. This module owns the
//! request shape and the handling of the text that comes back.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use thiserror::Error;

use crate::dom::ElementNode;
use crate::style::sample_styles;

/// Which hosted model handles a request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModelSelector {
    #[default]
    Fast,
    Accurate,
}

/// Payload sent to the service. Serialises with camelCase keys:
/// `{ "html": …, "styleMap": { … }, "model": "fast" }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub html: String,
    #[serde(with = "crate::style::ordered_map")]
    pub style_map: Vec<(String, String)>,
    pub model: ModelSelector,
}

impl GenerationRequest {
    /// Builds a request from the selected element's markup and sampled style.
    pub fn from_element(el: &ElementNode, model: ModelSelector) -> Self {
        Self {
            html: el.outer_html(),
            style_map: sample_styles(&el.style),
            model,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GenerationError {
    #[error("Generation service unreachable: {0}")]
    Transport(String),

    #[error("Generation service returned {status}: {message}")]
    Service { status: u16, message: String },
}

/// Text-in, text-out code generator. Implementations perform one attempt per
/// call.
pub trait CodeGenerator {
    fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError>;
}

/// What the inspector shows for a generation attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerationOutcome {
    Artifact(String),
    Failed(String),
}

impl GenerationOutcome {
    pub fn text(&self) -> &str {
        match self {
            GenerationOutcome::Artifact(code) => code,
            GenerationOutcome::Failed(message) => message,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, GenerationOutcome::Failed(_))
    }
}

/// Calls the generator once and extracts the artifact from its response.
pub fn run_generation(
    generator: &dyn CodeGenerator,
    request: &GenerationRequest,
) -> GenerationOutcome {
    match generator.generate(request) {
        Ok(response) => GenerationOutcome::Artifact(extract_code_block(&response).to_string()),
        Err(err) => {
            log::warn!("code generation failed: {}", err);
            GenerationOutcome::Failed(err.to_string())
        }
    }
}

fn fence_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)```[\w+#.-]*[ \t]*\r?\n(.*?)```").unwrap())
}

/// Body of the first fenced code block (language tag optional), or the whole
/// response when it has none.
pub fn extract_code_block(response: &str) -> &str {
    match fence_regex().captures(response).and_then(|caps| caps.get(1)) {
        Some(body) => body.as_str().trim_end_matches(['\n', '\r']),
        None => response,
    }
}
