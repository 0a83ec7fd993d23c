//! Provider payload rendering from a template and positional values

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

use super::types::{Button, Template};

lazy_static! {
    /// Numbered body placeholder, e.g. {{2}}
    static ref PLACEHOLDER_RE: Regex = Regex::new(r"\{\{(\d+)\}\}").unwrap();
}

/// Provider-ready template send payload
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedPayload {
    pub name: String,
    pub language: LanguageCode,
    pub components: Vec<PayloadComponent>,
}

/// Language wrapper matching the provider wire shape
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanguageCode {
    pub code: String,
}

/// One entry of the payload components array
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PayloadComponent {
    Body {
        parameters: Vec<Parameter>,
    },
    Button {
        sub_type: String,
        index: String,
        parameters: Vec<Parameter>,
    },
}

/// A typed component parameter
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Parameter {
    Text { text: String },
}

impl Parameter {
    fn text(value: &str) -> Self {
        Parameter::Text {
            text: normalize_param(value),
        }
    }
}

/// Parameter text uses bare LF line breaks on the wire
fn normalize_param(value: &str) -> String {
    value.replace("\r\n", "\n").replace('\r', "\n")
}

/// Highest placeholder index referenced in body text. Count is driven by
/// the maximum index, not occurrence count, so gaps like {{1}}/{{3}} still
/// reserve three positions.
fn max_placeholder_index(text: &str) -> usize {
    PLACEHOLDER_RE
        .captures_iter(text)
        .filter_map(|caps| caps.get(1).and_then(|m| m.as_str().parse::<usize>().ok()))
        .max()
        .unwrap_or(0)
}

/// Render a provider-ready payload from `template` and positional `values`.
///
/// Rendering is best-effort: positions without a value become empty strings,
/// and components that take no parameters (headers, non-URL buttons) emit
/// nothing. The body consumes the first N values, where N is the highest
/// {{n}} index in its text; each URL button then consumes the next
/// unconsumed value in declaration order.
pub fn render_template_payload(template: &Template, values: &[String]) -> RenderedPayload {
    let mut components = Vec::new();

    let body_text = template.body_text();
    let body_count = body_text.map(max_placeholder_index).unwrap_or(0);

    if body_text.is_some() {
        let parameters = (1..=body_count)
            .map(|i| Parameter::text(values.get(i - 1).map(String::as_str).unwrap_or("")))
            .collect();
        components.push(PayloadComponent::Body { parameters });
    }

    if let Some(buttons) = template.buttons() {
        let mut cursor = body_count;
        for (index, button) in buttons.iter().enumerate() {
            if let Button::Url { .. } = button {
                let value = values.get(cursor).map(String::as_str).unwrap_or("");
                cursor += 1;
                components.push(PayloadComponent::Button {
                    sub_type: "url".to_string(),
                    index: index.to_string(),
                    parameters: vec![Parameter::text(value)],
                });
            }
        }
    }

    RenderedPayload {
        name: template.meta_name.clone(),
        language: LanguageCode {
            code: template.language.clone(),
        },
        components,
    }
}
