//! Template types and error definitions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Template-specific error type
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Template not found: {0}")]
    NotFound(String),

    #[error("Template already exists: {0}")]
    AlreadyExists(String),

    #[error("Invalid template key: {0}")]
    InvalidKey(String),

    #[error("Invalid template: {0}")]
    InvalidTemplate(String),

    #[error("Catalog parse failed: {0}")]
    CatalogParse(#[from] serde_json::Error),

    #[error("Catalog read failed: {0}")]
    CatalogRead(#[from] std::io::Error),
}

/// Result type for template operations
pub type TemplateResult<T> = Result<T, TemplateError>;

/// An approved outbound message template definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Template {
    /// Stable internal identifier (alphanumeric, dash, underscore)
    pub key: String,

    /// Provider-facing template name
    pub meta_name: String,

    /// Locale code, e.g. "en" or "pt-BR"
    pub language: String,

    /// Ordered components; order mirrors what the provider expects
    #[serde(default)]
    pub components: Vec<Component>,

    /// Canonical variable-name ordering for this template. Key order is
    /// significant; values are per-name defaults used when the caller
    /// omits that name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_vars: Option<serde_json::Map<String, serde_json::Value>>,

    /// Creation timestamp
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

/// A structural part of a template definition.
///
/// Provider exports spell the tag in uppercase ("BODY"), internal catalog
/// files in lowercase; both are accepted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Component {
    /// Body text with numbered {{n}} placeholders
    #[serde(rename = "body", alias = "BODY")]
    Body {
        #[serde(default)]
        text: String,
    },

    /// Header; only the format tag is retained from the provider definition
    #[serde(rename = "header", alias = "HEADER")]
    Header {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        format: Option<String>,
    },

    /// Ordered button list
    #[serde(rename = "buttons", alias = "BUTTONS")]
    Buttons {
        #[serde(default)]
        buttons: Vec<Button>,
    },
}

/// A button descriptor inside a buttons component
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Button {
    /// Call-to-action URL button; one dynamic suffix value is supplied at
    /// send time
    #[serde(rename = "URL")]
    Url {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        text: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        url: Option<String>,
    },

    /// Quick-reply button; takes no send-time parameters
    #[serde(rename = "QUICK_REPLY")]
    QuickReply {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        text: Option<String>,
    },

    /// Any other button kind (phone number, copy code, ...)
    #[serde(other)]
    Other,
}

impl Template {
    /// Validate the template
    pub fn validate(&self) -> TemplateResult<()> {
        // Validate key
        if self.key.is_empty() || self.key.len() > 64 {
            return Err(TemplateError::InvalidKey(
                "key must be 1-64 characters".to_string(),
            ));
        }

        if !self
            .key
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
        {
            return Err(TemplateError::InvalidKey(
                "key must contain only alphanumeric, dash, or underscore".to_string(),
            ));
        }

        // Validate meta_name
        if self.meta_name.is_empty() || self.meta_name.len() > 512 {
            return Err(TemplateError::InvalidTemplate(
                "meta_name must be 1-512 characters".to_string(),
            ));
        }

        // Validate language
        if self.language.is_empty() || self.language.len() > 16 {
            return Err(TemplateError::InvalidTemplate(
                "language must be 1-16 characters".to_string(),
            ));
        }

        Ok(())
    }

    /// Text of the first body component, if any
    pub fn body_text(&self) -> Option<&str> {
        self.components.iter().find_map(|c| match c {
            Component::Body { text } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Buttons of the first buttons component, if any
    pub fn buttons(&self) -> Option<&[Button]> {
        self.components.iter().find_map(|c| match c {
            Component::Buttons { buttons } => Some(buttons.as_slice()),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn template(key: &str, meta_name: &str, language: &str) -> Template {
        Template {
            key: key.to_string(),
            meta_name: meta_name.to_string(),
            language: language.to_string(),
            components: vec![],
            default_vars: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_validate_ok() {
        assert!(template("payment_due", "payment_due_v2", "en")
            .validate()
            .is_ok());
    }

    #[test]
    fn test_validate_bad_key() {
        assert!(matches!(
            template("has spaces", "m", "en").validate(),
            Err(TemplateError::InvalidKey(_))
        ));
        assert!(matches!(
            template("", "m", "en").validate(),
            Err(TemplateError::InvalidKey(_))
        ));
    }

    #[test]
    fn test_validate_missing_fields() {
        assert!(matches!(
            template("k", "", "en").validate(),
            Err(TemplateError::InvalidTemplate(_))
        ));
        assert!(matches!(
            template("k", "m", "").validate(),
            Err(TemplateError::InvalidTemplate(_))
        ));
    }

    #[test]
    fn test_component_accepts_provider_casing() {
        let component: Component =
            serde_json::from_value(json!({ "type": "BODY", "text": "Hi {{1}}" })).unwrap();
        assert!(matches!(component, Component::Body { .. }));

        let component: Component =
            serde_json::from_value(json!({ "type": "body", "text": "Hi {{1}}" })).unwrap();
        assert!(matches!(component, Component::Body { .. }));
    }

    #[test]
    fn test_button_tag_is_case_sensitive() {
        let button: Button = serde_json::from_value(json!({ "type": "URL" })).unwrap();
        assert!(matches!(button, Button::Url { .. }));

        // Lowercase "url" is not the provider token and falls through
        let button: Button = serde_json::from_value(json!({ "type": "url" })).unwrap();
        assert!(matches!(button, Button::Other));

        let button: Button = serde_json::from_value(json!({ "type": "PHONE_NUMBER" })).unwrap();
        assert!(matches!(button, Button::Other));
    }

    #[test]
    fn test_component_finders() {
        let tpl = Template {
            components: vec![
                Component::Header { format: Some("TEXT".to_string()) },
                Component::Body { text: "Hello {{1}}".to_string() },
                Component::Buttons {
                    buttons: vec![Button::QuickReply { text: None }],
                },
            ],
            ..template("k", "m", "en")
        };

        assert_eq!(tpl.body_text(), Some("Hello {{1}}"));
        assert_eq!(tpl.buttons().map(|b| b.len()), Some(1));
    }

    #[test]
    fn test_default_vars_preserve_declaration_order() {
        let tpl: Template = serde_json::from_value(json!({
            "key": "payment_due",
            "meta_name": "payment_due_v2",
            "language": "en",
            "components": [],
            "default_vars": { "name": "", "period": "", "invoice_id": "", "amount": "" }
        }))
        .unwrap();

        let names: Vec<&String> = tpl.default_vars.as_ref().unwrap().keys().collect();
        assert_eq!(names, ["name", "period", "invoice_id", "amount"]);
    }
}
