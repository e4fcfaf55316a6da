use serde::{Deserialize, Serialize};
use url::Url;

use crate::component::DEFAULT_COMPONENT_NAME;
use crate::error::{ConvertError, ConvertResult};

/// Converter settings, loadable from a YAML file:
///
/// ```yaml
/// componentName: PricingCard
/// baseUrl: https://example.com/pricing
/// consolidateTextRuns: true
/// indent: 2
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConvertOptions {
    pub component_name: String,
    /// Overrides the snapshot's page URL for resolving relative links.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    pub consolidate_text_runs: bool,
    pub indent: usize,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            component_name: DEFAULT_COMPONENT_NAME.to_string(),
            base_url: None,
            consolidate_text_runs: true,
            indent: 2,
        }
    }
}

impl ConvertOptions {
    pub fn from_yaml(yaml: &str) -> ConvertResult<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn with_component_name(mut self, name: impl Into<String>) -> Self {
        self.component_name = name.into();
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Picks the URL relative links are resolved against.
    ///
    /// A configured `baseUrl` must parse; a page URL that does not parse is
    /// ignored and links are left as they are.
    pub fn resolve_base(&self, page_url: Option<&str>) -> ConvertResult<Option<Url>> {
        if let Some(configured) = &self.base_url {
            return Url::parse(configured)
                .map(Some)
                .map_err(|err| ConvertError::InvalidBaseUrl {
                    url: configured.clone(),
                    reason: err.to_string(),
                });
        }
        Ok(page_url.and_then(|url| match Url::parse(url) {
            Ok(parsed) => Some(parsed),
            Err(err) => {
                log::debug!("ignoring page url {:?}: {}", url, err);
                None
            }
        }))
    }
}
