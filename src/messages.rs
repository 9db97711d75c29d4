//! Message lookup
//!
//! User-facing strings are addressed by key. Built-in English defaults cover
//! every key the control uses; an optional YAML file can override or add
//! entries (a flat `key: text` mapping).

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::Path;

const DEFAULT_MESSAGES: &[(&str, &str)] = &[
    ("form.sourceType", "Source type"),
    ("form.destinationType", "Destination type"),
    ("form.selectConnector", "Type to search for a connector"),
    ("form.noMatches", "No matching connectors"),
    ("form.setupGuide", "Setup guide"),
    ("form.invalidDocumentationUrl", "not a valid link"),
    ("connector.requestConnectorBlock", "+ Request a new connector"),
    ("connector.releaseStage.alpha", "alpha"),
    ("connector.releaseStage.beta", "beta"),
    ("connector.releaseStage.generally_available", "generally available"),
    ("connector.releaseStage.custom", "custom"),
    (
        "connector.connectorsInDevelopment.alpha",
        "Alpha connectors are in development and support is not provided. Do not use them for production workloads.",
    ),
    (
        "connector.connectorsInDevelopment.beta",
        "Beta connectors are being tested and may still change. Contact support if you rely on one in production.",
    ),
];

/// Keyed message table
#[derive(Debug, Clone)]
pub struct Messages {
    entries: HashMap<String, String>,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            entries: DEFAULT_MESSAGES
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

impl Messages {
    /// Load defaults, then apply overrides from a YAML file
    pub fn load_with_overrides(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read messages file: {}", path.display()))?;
        let overrides: HashMap<String, String> = serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse messages file: {}", path.display()))?;

        let mut messages = Self::default();
        messages.entries.extend(overrides);
        Ok(messages)
    }

    /// Look up a message; unknown keys render as the key itself
    pub fn format(&self, key: &str) -> String {
        self.entries
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }

    /// Look up a message, falling back to `default` for unknown keys
    pub fn format_or(&self, key: &str, default: &str) -> String {
        self.entries
            .get(key)
            .cloned()
            .unwrap_or_else(|| default.to_string())
    }

    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.entries.insert(key.into(), text.into());
    }
}
