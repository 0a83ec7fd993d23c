//! Template catalog loading

use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::store::TemplateStore;
use super::types::{Template, TemplateResult};

/// A deserialized template catalog file
#[derive(Debug, Default, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub templates: Vec<Template>,
}

impl Catalog {
    /// Parse a catalog from a JSON document
    pub fn from_json(json: &str) -> TemplateResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a catalog file
    pub fn from_file(path: impl AsRef<Path>) -> TemplateResult<Self> {
        let raw = fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    /// Populate a store with the catalog's templates.
    ///
    /// Individually invalid entries are skipped and logged so one bad row
    /// cannot take down the whole catalog.
    pub fn into_store(self) -> TemplateStore {
        let store = TemplateStore::new();

        for template in self.templates {
            let key = template.key.clone();
            let language = template.language.clone();
            if let Err(e) = store.create(template) {
                tracing::warn!(
                    key = %key,
                    language = %language,
                    error = %e,
                    "skipping invalid catalog template"
                );
            }
        }

        tracing::info!(count = store.count(), "template catalog loaded");
        store
    }
}
