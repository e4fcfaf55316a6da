//! View model behind the inspector panel.

use std::fmt;
use std::str::FromStr;

use crate::component::assemble;
use crate::convert_element;
use crate::config::ConvertOptions;
use crate::dom::ElementNode;
use crate::error::{ConvertError, ConvertResult};
use crate::generate::GenerationOutcome;
use crate::style::sample_styles;

/// One panel of the inspector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Styling,
    Html,
    Jsx,
    Component,
    Generated,
}

impl Tab {
    pub const ALL: [Tab; 5] = [Tab::Styling, Tab::Html, Tab::Jsx, Tab::Component, Tab::Generated];

    pub fn as_str(self) -> &'static str {
        match self {
            Tab::Styling   => "styling",
            Tab::Html      => "html",
            Tab::Jsx       => "jsx",
            Tab::Component => "component",
            Tab::Generated => "generated",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Tab::Styling   => "Computed Styles",
            Tab::Html      => "HTML",
            Tab::Jsx       => "JSX + Tailwind",
            Tab::Component => "React + Tailwind Code",
            Tab::Generated => "Generated Code",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tab {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tab::ALL
            .into_iter()
            .find(|tab| tab.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConvertError::UnknownTab(s.to_string()))
    }
}

/// Everything the inspector shows for one selected element.
#[derive(Debug, Clone, PartialEq)]
pub struct Inspection {
    pub styles: Vec<(String, String)>,
    pub html: String,
    pub jsx: String,
    pub component: String,
    pub generated: Option<GenerationOutcome>,
}

impl Inspection {
    /// Samples, converts and assembles `el`. Fails when the element itself is
    /// excluded from conversion.
    pub fn new(el: &ElementNode, options: &ConvertOptions, page_url: Option<&str>) -> ConvertResult<Self> {
        let node = convert_element(el, options, page_url)?;
        let jsx = node.to_jsx(options.indent);
        let component = assemble(&options.component_name, &jsx, options.indent);

        Ok(Self {
            styles: sample_styles(&el.style),
            html: el.outer_html(),
            jsx,
            component,
            generated: None,
        })
    }

    /// Stores a generation result, replacing the previous one.
    pub fn set_generated(&mut self, outcome: GenerationOutcome) {
        self.generated = Some(outcome);
    }

    /// Text content of `tab`. The generated tab is empty until a result
    /// arrives.
    pub fn render(&self, tab: Tab) -> String {
        match tab {
            Tab::Styling => self
                .styles
                .iter()
                .map(|(property, value)| format!("{}: {};\n", property, value))
                .collect(),
            Tab::Html => self.html.clone(),
            Tab::Jsx => self.jsx.clone(),
            Tab::Component => self.component.clone(),
            Tab::Generated => self
                .generated
                .as_ref()
                .map(|outcome| outcome.text().to_string())
                .unwrap_or_default(),
        }
    }
}
