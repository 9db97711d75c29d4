//! Tests for the connector control's derived state and selection handling
//!
//! These exercise the headless core through the public API: option lists,
//! selection resolution, change handling and the render model.

use connpick::catalog::{Catalog, ConnectorDefinition, ReleaseStage};
use connpick::config::{CLOUD_EXCLUDED_CONNECTORS, Config, Deployment};
use connpick::control::{ControlProps, DropDownOption, FormType, ServiceTypeControl, search_options};
use connpick::form::{FieldPath, FieldStore, FormState};
use connpick::messages::Messages;
use connpick::report;
use std::cell::RefCell;
use std::rc::Rc;

const SNAPCHAT: &str = "200330b2-ea62-4d11-ac6d-cfe3e3f8ab2b";

fn props() -> ControlProps {
    ControlProps::new("serviceType", FormType::Source)
}

fn form_with_value(value: &str) -> FormState {
    let mut form = FormState::new();
    form.set_value(&FieldPath::new("serviceType"), value.to_string());
    form
}

fn mixed_catalog() -> Catalog {
    Catalog::new(vec![
        ConnectorDefinition::new("4", "Zendesk Support")
            .with_release_stage(ReleaseStage::GenerallyAvailable),
        ConnectorDefinition::new("2", "amplitude").with_release_stage(ReleaseStage::Alpha),
        ConnectorDefinition::new("5", "S3").with_release_stage(ReleaseStage::Beta),
        ConnectorDefinition::new("6", "S10 Archive").with_release_stage(ReleaseStage::Custom),
        ConnectorDefinition::new("1", "Braintree"),
        ConnectorDefinition::new(SNAPCHAT, "Snapchat Marketing")
            .with_release_stage(ReleaseStage::Other("deprecated".to_string())),
    ])
}

#[test]
fn test_single_beta_connector_example() {
    let catalog = Catalog::new(vec![
        ConnectorDefinition::new("a", "Foo").with_release_stage(ReleaseStage::Beta),
    ]);
    let messages = Messages::default();
    let form = form_with_value("a");

    // Without a documentation URL
    let mut control = ServiceTypeControl::new(props(), || {});
    let view = control.view(&catalog, &form, &messages);
    assert_eq!(view.options.len(), 1);
    assert_eq!(view.options[0].label, "Foo");
    assert_eq!(view.options[0].badge_label(&messages).as_deref(), Some("BETA"));
    assert_eq!(view.value_label.as_deref(), Some("Foo"));
    assert!(view.instruction.is_none());
    let warning = view.warning.expect("beta connectors warn");
    assert_eq!(warning.stage, ReleaseStage::Beta);

    // With a documentation URL
    let mut with_docs = props();
    with_docs.documentation_url = Some("https://docs.example.com/foo".to_string());
    let mut control = ServiceTypeControl::new(with_docs, || {});
    let view = control.view(&catalog, &form, &messages);
    let instruction = view.instruction.expect("instructions shown with URL");
    assert_eq!(instruction.service_name, "Foo");
    assert!(instruction.is_valid_url);
}

#[test]
fn test_options_listing() {
    let catalog = mixed_catalog();
    let mut control = ServiceTypeControl::new(props(), || {});
    let options = control.options(&catalog);
    let rows = report::option_rows(&search_options(options, ""), &Messages::default());

    insta::assert_snapshot!(rows.join("\n"), @r"
amplitude [ALPHA] (2)
Braintree (1)
S3 [BETA] (5)
S10 Archive [CUSTOM] (6)
Snapchat Marketing [DEPRECATED] (200330b2-ea62-4d11-ac6d-cfe3e3f8ab2b)
Zendesk Support (4)
");
}

#[test]
fn test_cloud_deployment_hides_oauth_connectors() {
    let catalog = mixed_catalog();
    let config = Config {
        deployment: Deployment::Cloud,
        ..Default::default()
    };
    let mut cloud_props = props();
    cloud_props.excluded_connector_ids = config.excluded_connector_ids();

    let mut control = ServiceTypeControl::new(cloud_props, || {});
    let options = control.options(&catalog);
    assert_eq!(options.len(), 5);
    for id in CLOUD_EXCLUDED_CONNECTORS {
        assert!(options.iter().all(|o| o.value != *id));
    }
}

#[test]
fn test_excluded_connector_still_resolves_as_selected() {
    let catalog = mixed_catalog();
    let mut cloud_props = props();
    cloud_props.excluded_connector_ids = vec![SNAPCHAT.to_string()];
    let form = form_with_value(SNAPCHAT);

    let mut control = ServiceTypeControl::new(cloud_props, || {});
    let view = control.view(&catalog, &form, &Messages::default());
    assert!(view.options.iter().all(|o| o.value != SNAPCHAT));
    assert_eq!(view.value_label.as_deref(), Some("Snapchat Marketing"));
    // "deprecated" is neither alpha nor beta
    assert!(view.warning.is_none());
}

#[test]
fn test_options_are_filtered_projection_in_sorted_order() {
    let catalog = mixed_catalog();
    let excluded = vec!["5".to_string(), "missing".to_string()];
    let mut excluded_props = props();
    excluded_props.excluded_connector_ids = excluded.clone();

    let mut control = ServiceTypeControl::new(excluded_props, || {});
    let options = control.options(&catalog).to_vec();

    let mut expected: Vec<DropDownOption> = catalog
        .definitions()
        .iter()
        .filter(|d| !excluded.contains(&d.id))
        .map(|d| DropDownOption {
            label: d.name.clone(),
            value: d.id.clone(),
            icon: d.icon.clone(),
            release_stage: d.release_stage.clone(),
        })
        .collect();
    expected.sort_by(connpick::control::default_option_sort);

    assert_eq!(options, expected);
}

#[test]
fn test_unknown_value_means_no_selection() {
    let catalog = mixed_catalog();
    let mut docs = props();
    docs.documentation_url = Some("https://docs.example.com".to_string());
    let mut control = ServiceTypeControl::new(docs, || {});

    let view = control.view(&catalog, &form_with_value("nope"), &Messages::default());
    assert!(view.value_label.is_none());
    assert!(view.instruction.is_none());
    assert!(view.warning.is_none());
}

#[test]
fn test_duplicate_ids_resolve_to_first_entry() {
    let catalog = Catalog::new(vec![
        ConnectorDefinition::new("dup", "First").with_release_stage(ReleaseStage::Alpha),
        ConnectorDefinition::new("dup", "Second"),
    ]);
    let mut control = ServiceTypeControl::new(props(), || {});
    let form = form_with_value("dup");
    let field = form.field(&FieldPath::new("serviceType"));
    let selected = control.selected_service(&catalog, &field).unwrap();
    assert_eq!(selected.name, "First");
}

#[test]
fn test_warning_only_for_alpha_and_beta() {
    let stages = [
        (ReleaseStage::Alpha, true),
        (ReleaseStage::Beta, true),
        (ReleaseStage::GenerallyAvailable, false),
        (ReleaseStage::Custom, false),
        (ReleaseStage::Other("preview".to_string()), false),
    ];
    for (stage, warns) in stages {
        let catalog = Catalog::new(vec![
            ConnectorDefinition::new("x", "X").with_release_stage(stage.clone()),
        ]);
        let mut control = ServiceTypeControl::new(props(), || {});
        let view = control.view(&catalog, &form_with_value("x"), &Messages::default());
        assert_eq!(view.warning.is_some(), warns, "stage {}", stage);
    }
}

#[test]
fn test_selection_updates_form_and_notifies_once() {
    let catalog = mixed_catalog();
    let changes = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&changes);
    let mut control = ServiceTypeControl::new(props(), || {})
        .with_change_callback(move |id| sink.borrow_mut().push(id.to_string()));
    let mut form = FormState::new();

    let braintree = control
        .options(&catalog)
        .iter()
        .find(|o| o.label == "Braintree")
        .cloned()
        .unwrap();
    control.handle_select(Some(&braintree), &mut form);
    control.handle_select(None, &mut form);

    assert_eq!(*changes.borrow(), vec!["1".to_string()]);
    assert_eq!(
        form.field(&FieldPath::new("serviceType")).value.as_deref(),
        Some("1")
    );
}

#[test]
fn test_error_shown_only_after_touch() {
    let catalog = mixed_catalog();
    let path = FieldPath::new("serviceType");
    let mut form = FormState::new();
    form.set_error(&path, Some("Required".to_string()));

    let mut control = ServiceTypeControl::new(props(), || {});
    assert!(control.view(&catalog, &form, &Messages::default()).error.is_none());

    form.set_touched(&path, true);
    let view = control.view(&catalog, &form, &Messages::default());
    assert_eq!(view.error.as_deref(), Some("Required"));
}

#[test]
fn test_labels_follow_form_type() {
    let catalog = Catalog::default();
    let messages = Messages::default();
    let form = FormState::new();

    let mut source = ServiceTypeControl::new(props(), || {});
    assert_eq!(source.view(&catalog, &form, &messages).label, "Source type");

    let mut destination =
        ServiceTypeControl::new(ControlProps::new("serviceType", FormType::Destination), || {});
    let view = destination.view(&catalog, &form, &messages);
    assert_eq!(view.label, "Destination type");
    assert_eq!(view.placeholder, "Type to search for a connector");
    assert!(view.is_searchable);
}

#[test]
fn test_invalid_documentation_url_is_flagged() {
    let catalog = mixed_catalog();
    let mut docs = props();
    docs.documentation_url = Some("docs/braintree".to_string());
    let mut control = ServiceTypeControl::new(docs, || {});
    let messages = Messages::default();
    let view = control.view(&catalog, &form_with_value("1"), &messages);

    let instruction = view.instruction.clone().unwrap();
    assert!(!instruction.is_valid_url);
    let report = report::selection_report(&view, &messages);
    assert_eq!(
        report,
        vec![
            "Source type: Braintree".to_string(),
            "Setup guide: Braintree docs/braintree (not a valid link)".to_string(),
        ]
    );
}
