//! Connector definition model

use super::ReleaseStage;
use serde::{Deserialize, Serialize};

/// A source or destination connector available in the catalog
///
/// Catalog exports name the identifier after the connector kind
/// (`sourceDefinitionId` / `destinationDefinitionId`); both are accepted
/// alongside a plain `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectorDefinition {
    #[serde(alias = "sourceDefinitionId", alias = "destinationDefinitionId")]
    pub id: String,

    pub name: String,

    /// Icon source; either a short glyph or markup such as an SVG document
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_stage: Option<ReleaseStage>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docker_repository: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docker_image_tag: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation_url: Option<String>,
}

impl ConnectorDefinition {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            icon: None,
            release_stage: None,
            docker_repository: None,
            docker_image_tag: None,
            documentation_url: None,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_release_stage(mut self, stage: ReleaseStage) -> Self {
        self.release_stage = Some(stage);
        self
    }

    pub fn with_documentation_url(mut self, url: impl Into<String>) -> Self {
        self.documentation_url = Some(url.into());
        self
    }

    /// Docker image reference (`repository:tag`) if both parts are known
    pub fn docker_image(&self) -> Option<String> {
        match (&self.docker_repository, &self.docker_image_tag) {
            (Some(repo), Some(tag)) => Some(format!("{}:{}", repo, tag)),
            _ => None,
        }
    }
}
