//! Tests for catalog file loading
//!
//! Covers the accepted file shapes and the error cases surfaced to the CLI.

use connpick::catalog::{CatalogError, CatalogLoader, ReleaseStage};
use connpick::config::{Config, Deployment};
use connpick::control::build_options;
use std::io::Write;

fn write_temp(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .prefix("catalog-")
        .suffix(suffix)
        .tempfile()
        .unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_yaml_list() {
    let file = write_temp(
        ".yaml",
        r#"
- sourceDefinitionId: 778daa7c-feaf-4db6-96f3-70fd645acc77
  name: File
  releaseStage: alpha
  icon: "📄"
- sourceDefinitionId: 435bb9a5-7887-4809-aa58-28c27df0d7ad
  name: MySQL
  releaseStage: generally_available
"#,
    );

    let catalog = CatalogLoader::load_file(file.path()).unwrap();
    assert_eq!(catalog.len(), 2);

    let file_def = catalog.find("778daa7c-feaf-4db6-96f3-70fd645acc77").unwrap();
    assert_eq!(file_def.name, "File");
    assert_eq!(file_def.icon.as_deref(), Some("📄"));
    assert_eq!(file_def.release_stage, Some(ReleaseStage::Alpha));
}

#[test]
fn test_load_grouped_json() {
    let file = write_temp(
        ".json",
        r#"{
  "sourceDefinitions": [
    {"sourceDefinitionId": "s-1", "name": "Stripe", "releaseStage": "beta"}
  ],
  "destinationDefinitions": [
    {"destinationDefinitionId": "d-1", "name": "BigQuery", "releaseStage": "generally_available",
     "documentationUrl": "https://docs.example.com/bigquery"}
  ]
}"#,
    );

    let catalog = CatalogLoader::load_file(file.path()).unwrap();
    let names: Vec<&str> = catalog.definitions().iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["Stripe", "BigQuery"]);
    assert_eq!(
        catalog.find("d-1").and_then(|d| d.documentation_url.as_deref()),
        Some("https://docs.example.com/bigquery")
    );
}

#[test]
fn test_unsupported_extension() {
    let file = write_temp(".toml", "name = 'x'");
    let err = CatalogLoader::load_file(file.path()).unwrap_err();
    assert!(matches!(err, CatalogError::UnsupportedFormat(_)));
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = CatalogLoader::load_file(&dir.path().join("missing.yaml")).unwrap_err();
    assert!(matches!(err, CatalogError::Read { .. }));
    assert!(err.to_string().contains("missing.yaml"));
}

#[test]
fn test_invalid_json() {
    let file = write_temp(".json", "{\"sourceDefinitions\": [");
    let err = CatalogLoader::load_file(file.path()).unwrap_err();
    assert!(matches!(err, CatalogError::Json { .. }));
}

#[test]
fn test_loaded_catalog_respects_cloud_exclusions() {
    let file = write_temp(
        ".yaml",
        r#"
- id: 200330b2-ea62-4d11-ac6d-cfe3e3f8ab2b
  name: Snapchat Marketing
- id: 2470e835-feaf-4db6-96f3-70fd645acc77
  name: Salesforce (Singer)
- id: b117307c-14b6-41aa-9422-947e34922962
  name: Salesforce
"#,
    );
    let catalog = CatalogLoader::load_file(file.path()).unwrap();

    let oss = Config::default();
    assert_eq!(build_options(&catalog, &oss.excluded_connector_ids()).len(), 3);

    let cloud = Config {
        deployment: Deployment::Cloud,
        ..Default::default()
    };
    let options = build_options(&catalog, &cloud.excluded_connector_ids());
    let values: Vec<&str> = options.iter().map(|o| o.value.as_str()).collect();
    assert_eq!(values, vec!["b117307c-14b6-41aa-9422-947e34922962"]);
}
