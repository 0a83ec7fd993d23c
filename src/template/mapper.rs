//! Named-variable mapping into positional value order

use std::collections::HashMap;

use serde_json::Value;

/// Canonical variable-name sequence for one (template, language) pair.
///
/// Key order is significant; values are per-name defaults used when the
/// caller omits that name.
#[derive(Debug, Clone, Default)]
pub struct DefaultOrdering {
    vars: serde_json::Map<String, Value>,
}

impl DefaultOrdering {
    pub fn new(vars: serde_json::Map<String, Value>) -> Self {
        Self { vars }
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Variable names in canonical order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.vars.keys().map(String::as_str)
    }

    fn entries(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.vars.iter()
    }
}

/// Immutable lookup table of default orderings keyed by (key, language)
#[derive(Debug, Clone, Default)]
pub struct OrderingTable {
    orderings: HashMap<(String, String), DefaultOrdering>,
}

impl OrderingTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: String, language: String, ordering: DefaultOrdering) {
        self.orderings.insert((key, language), ordering);
    }

    /// Look up an ordering, trying the exact language tag first and then
    /// its base subtag ("en-US" falls back to "en").
    pub fn get(&self, key: &str, language: &str) -> Option<&DefaultOrdering> {
        if let Some(ordering) = self.orderings.get(&(key.to_string(), language.to_string())) {
            return Some(ordering);
        }

        let base = base_language(language);
        if base != language {
            return self.orderings.get(&(key.to_string(), base.to_string()));
        }

        None
    }

    pub fn len(&self) -> usize {
        self.orderings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orderings.is_empty()
    }
}

/// Base subtag of a locale code ("pt-BR" and "pt_BR" both yield "pt")
pub(crate) fn base_language(language: &str) -> &str {
    language.split(['-', '_']).next().unwrap_or(language)
}

/// Resolve named variables into the positional order `template_key` expects.
///
/// When a default ordering is registered for `(template_key, language)`, its
/// name sequence is authoritative: names missing from `variables` take the
/// ordering's default value, then the empty string. Without a registered
/// ordering the caller's key insertion order is used as-is, so unknown
/// templates still render best-effort instead of failing.
pub fn map_named_vars(
    orderings: &OrderingTable,
    template_key: &str,
    language: &str,
    variables: &serde_json::Map<String, Value>,
) -> Vec<String> {
    if let Some(ordering) = orderings.get(template_key, language) {
        if !ordering.is_empty() {
            return ordering
                .entries()
                .map(|(name, default)| {
                    let value = match variables.get(name) {
                        Some(Value::Null) | None => default,
                        Some(value) => value,
                    };
                    coerce_value(value)
                })
                .collect();
        }
    }

    tracing::debug!(
        template_key,
        language,
        "no default ordering registered, using caller key order"
    );

    variables.values().map(coerce_value).collect()
}

/// Coerce a JSON value to the string form sent to the provider
fn coerce_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        // Arrays and objects use their JSON representation
        other => other.to_string(),
    }
}
