//! Catalog file loading
//!
//! Catalogs are read from YAML or JSON files. A file may hold a plain list of
//! definitions, or a mapping with `sourceDefinitions`, `destinationDefinitions`
//! and/or `definitions` lists (the shape returned by the connector registry
//! API). Mapped lists are concatenated in that order.

use super::{Catalog, ConnectorDefinition};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading a catalog file
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse YAML catalog {path}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Failed to parse JSON catalog {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unsupported catalog format: {0} (expected .yaml, .yml or .json)")]
    UnsupportedFormat(PathBuf),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    List(Vec<ConnectorDefinition>),
    Grouped(GroupedCatalog),
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GroupedCatalog {
    #[serde(default)]
    source_definitions: Vec<ConnectorDefinition>,
    #[serde(default)]
    destination_definitions: Vec<ConnectorDefinition>,
    #[serde(default)]
    definitions: Vec<ConnectorDefinition>,
}

impl CatalogFile {
    fn into_definitions(self) -> Vec<ConnectorDefinition> {
        match self {
            CatalogFile::List(definitions) => definitions,
            CatalogFile::Grouped(grouped) => {
                let mut definitions = grouped.source_definitions;
                definitions.extend(grouped.destination_definitions);
                definitions.extend(grouped.definitions);
                definitions
            }
        }
    }
}

/// Supported catalog encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Yaml,
    Json,
}

impl CatalogFormat {
    /// Detect the format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "yaml" | "yml" => Some(CatalogFormat::Yaml),
            "json" => Some(CatalogFormat::Json),
            _ => None,
        }
    }
}

/// Catalog loader
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load a catalog from a file, detecting the format by extension
    pub fn load_file(path: &Path) -> Result<Catalog, CatalogError> {
        let format = CatalogFormat::from_path(path)
            .ok_or_else(|| CatalogError::UnsupportedFormat(path.to_path_buf()))?;

        let contents = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let catalog = Self::parse(&contents, format, path)?;
        tracing::debug!(
            path = %path.display(),
            count = catalog.len(),
            "Loaded connector catalog"
        );
        Ok(catalog)
    }

    /// Parse catalog contents in the given format
    ///
    /// `origin` is only used for error messages.
    pub fn parse(
        contents: &str,
        format: CatalogFormat,
        origin: &Path,
    ) -> Result<Catalog, CatalogError> {
        let file: CatalogFile = match format {
            CatalogFormat::Yaml => {
                serde_yaml::from_str(contents).map_err(|source| CatalogError::Yaml {
                    path: origin.to_path_buf(),
                    source,
                })?
            }
            CatalogFormat::Json => {
                serde_json::from_str(contents).map_err(|source| CatalogError::Json {
                    path: origin.to_path_buf(),
                    source,
                })?
            }
        };
        Ok(Catalog::new(file.into_definitions()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_detection() {
        assert_eq!(
            CatalogFormat::from_path(Path::new("c.YAML")),
            Some(CatalogFormat::Yaml)
        );
        assert_eq!(
            CatalogFormat::from_path(Path::new("c.yml")),
            Some(CatalogFormat::Yaml)
        );
        assert_eq!(
            CatalogFormat::from_path(Path::new("c.json")),
            Some(CatalogFormat::Json)
        );
        assert_eq!(CatalogFormat::from_path(Path::new("c.toml")), None);
        assert_eq!(CatalogFormat::from_path(Path::new("catalog")), None);
    }

    #[test]
    fn test_parse_plain_list() {
        let yaml = r#"
- id: a
  name: Foo
  releaseStage: beta
- id: b
  name: Bar
"#;
        let catalog = CatalogLoader::parse(yaml, CatalogFormat::Yaml, Path::new("x.yaml")).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.definitions()[0].name, "Foo");
    }

    #[test]
    fn test_parse_grouped_json_keeps_group_order() {
        let json = r#"{
            "destinationDefinitions": [{"destinationDefinitionId": "d", "name": "Dest"}],
            "sourceDefinitions": [{"sourceDefinitionId": "s", "name": "Src"}]
        }"#;
        let catalog = CatalogLoader::parse(json, CatalogFormat::Json, Path::new("x.json")).unwrap();
        let ids: Vec<&str> = catalog.definitions().iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["s", "d"]);
    }

    #[test]
    fn test_parse_error_names_origin() {
        let err = CatalogLoader::parse("- id: [", CatalogFormat::Yaml, Path::new("bad.yaml"))
            .unwrap_err();
        assert!(matches!(err, CatalogError::Yaml { .. }));
        assert!(err.to_string().contains("bad.yaml"));
    }
}
