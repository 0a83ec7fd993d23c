//! Template storage keyed by (key, language)

use std::sync::Arc;

use dashmap::DashMap;

use super::mapper::{base_language, map_named_vars, DefaultOrdering, OrderingTable};
use super::render::{render_template_payload, RenderedPayload};
use super::types::{Template, TemplateError, TemplateResult};

/// In-memory template storage
pub struct TemplateStore {
    templates: DashMap<(String, String), Template>,
}

impl Default for TemplateStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateStore {
    /// Create a new template store
    pub fn new() -> Self {
        Self {
            templates: DashMap::new(),
        }
    }

    /// Register a new template
    pub fn create(&self, template: Template) -> TemplateResult<Template> {
        template.validate()?;

        let id = (template.key.clone(), template.language.clone());
        if self.templates.contains_key(&id) {
            return Err(TemplateError::AlreadyExists(format!(
                "{}/{}",
                id.0, id.1
            )));
        }

        self.templates.insert(id.clone(), template);

        self.templates
            .get(&id)
            .map(|t| t.clone())
            .ok_or_else(|| TemplateError::NotFound(format!("{}/{}", id.0, id.1)))
    }

    /// Get a template, trying the exact language tag first and then its
    /// base subtag ("en-US" falls back to "en")
    pub fn get(&self, key: &str, language: &str) -> TemplateResult<Template> {
        if let Some(template) = self
            .templates
            .get(&(key.to_string(), language.to_string()))
        {
            return Ok(template.clone());
        }

        let base = base_language(language);
        if base != language {
            if let Some(template) = self.templates.get(&(key.to_string(), base.to_string())) {
                return Ok(template.clone());
            }
        }

        Err(TemplateError::NotFound(format!("{}/{}", key, language)))
    }

    /// List all templates
    pub fn list(&self) -> Vec<Template> {
        self.templates
            .iter()
            .map(|entry| entry.value().clone())
            .collect()
    }

    /// Check if a template exists for the exact (key, language) pair
    pub fn exists(&self, key: &str, language: &str) -> bool {
        self.templates
            .contains_key(&(key.to_string(), language.to_string()))
    }

    /// Get the number of templates
    pub fn count(&self) -> usize {
        self.templates.len()
    }

    /// Snapshot all registered default orderings into an immutable lookup
    /// table
    pub fn ordering_table(&self) -> OrderingTable {
        let mut table = OrderingTable::new();
        for entry in self.templates.iter() {
            let template = entry.value();
            if let Some(vars) = &template.default_vars {
                table.insert(
                    template.key.clone(),
                    template.language.clone(),
                    DefaultOrdering::new(vars.clone()),
                );
            }
        }
        table
    }

    /// Render a template with named variables
    pub fn render(
        &self,
        key: &str,
        language: &str,
        variables: &serde_json::Map<String, serde_json::Value>,
    ) -> TemplateResult<RenderedPayload> {
        let template = self.get(key, language)?;
        let values = map_named_vars(&self.ordering_table(), key, language, variables);
        Ok(render_template_payload(&template, &values))
    }
}

/// Create an Arc-wrapped template store
pub fn create_template_store() -> Arc<TemplateStore> {
    Arc::new(TemplateStore::new())
}
