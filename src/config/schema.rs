//! Configuration schema definitions
//!
//! Defines the structure of configuration files using serde for serialization.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Connector ids hidden from new selections in cloud deployments
///
/// These connectors need an OAuth flow the cloud backend no longer exposes.
/// Existing configurations that use them keep working.
pub const CLOUD_EXCLUDED_CONNECTORS: &[&str] = &[
    "200330b2-ea62-4d11-ac6d-cfe3e3f8ab2b", // Snapchat
    "2470e835-feaf-4db6-96f3-70fd645acc77", // Salesforce Singer
];

/// Deployment mode the picker runs under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Deployment {
    #[default]
    Oss,
    Cloud,
}

impl FromStr for Deployment {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "oss" => Ok(Deployment::Oss),
            "cloud" => Ok(Deployment::Cloud),
            other => Err(anyhow::anyhow!(
                "Unknown deployment '{}' (expected 'oss' or 'cloud')",
                other
            )),
        }
    }
}

impl fmt::Display for Deployment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Deployment::Oss => write!(f, "oss"),
            Deployment::Cloud => write!(f, "cloud"),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Deployment mode; cloud hides OAuth-only connectors
    #[serde(default)]
    pub deployment: Deployment,

    /// Additional connector ids to hide from the dropdown
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub excluded_connectors: Vec<String>,

    /// Default catalog file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,

    /// Message override file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub messages_path: Option<PathBuf>,

    /// UI configuration
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Connector ids the dropdown must not offer
    ///
    /// Cloud-only exclusions come first, followed by configured ids; duplicates
    /// are dropped.
    pub fn excluded_connector_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = match self.deployment {
            Deployment::Cloud => CLOUD_EXCLUDED_CONNECTORS
                .iter()
                .map(|id| id.to_string())
                .collect(),
            Deployment::Oss => Vec::new(),
        };
        for id in &self.excluded_connectors {
            if !ids.contains(id) {
                ids.push(id.clone());
            }
        }
        ids
    }
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UiConfig {
    /// Disable connector icons for terminals without emoji support
    #[serde(default = "default_false")]
    pub no_icons: bool,

    /// Enable mouse support
    #[serde(default = "default_false")]
    pub enable_mouse: bool,

    /// Rows moved by PageUp/PageDown in the open dropdown
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_false() -> bool {
    false
}

fn default_page_size() -> usize {
    10
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            no_icons: default_false(),
            enable_mouse: default_false(),
            page_size: default_page_size(),
        }
    }
}
