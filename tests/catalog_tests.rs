#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::temp_files::write_temp;
use typegraph::facts::{load_catalog, TypeFacts, TypeKey, TypeShape};
use typegraph::validator::fail_if_issues;
use typegraph::{InspectError, InspectOptions, Inspector};

const SHOP_YAML: &str = r#"
types:
  - key: Shop.Order
    name: Order
    namespace: Shop
    module: Shop
    shape: { kind: struct }
    properties:
      - { name: Id, type: int32 }
      - { name: Lines, type: "List[Shop.OrderLine]" }
  - key: Shop.OrderLine
    name: OrderLine
    module: Shop
    shape: { kind: struct }
    properties:
      - { name: Sku, type: string }
  - key: "List[Shop.OrderLine]"
    name: List
    module: System
    shape: { kind: collection, element: Shop.OrderLine }
  - key: Shop.OrdersController
    name: OrdersController
    module: Shop
    shape: { kind: struct }
    controller: { route: "api/[controller]" }
    methods:
      - name: Get
        returns: Shop.Order
        verbs: [{ verb: get, template: "{id}" }]
        parameters:
          - { name: id, type: int32 }
      - name: Save
        returns: Shop.Order
        verbs: [{ verb: POST }]
        parameters:
          - { name: order, type: Shop.Order, source: body }
      - name: Dispose
        non_action: true
"#;

#[test]
fn test_load_yaml_catalog_and_inspect() {
    let file = write_temp(SHOP_YAML, "yaml");
    let catalog = load_catalog(file.path()).unwrap();
    assert!(catalog.validate().is_empty());

    let order = catalog.describe(&"Shop.Order".into()).unwrap();
    assert_eq!(order.namespace.as_deref(), Some("Shop"));
    let controller = catalog.describe(&"Shop.OrdersController".into()).unwrap();
    assert!(controller.is_controller());
    assert!(controller.methods[2].non_action);
    assert!(controller.methods[0].public);

    let doc = Inspector::new(&catalog, InspectOptions::new(["Shop"]))
        .inspect()
        .unwrap();
    assert_eq!(doc.definitions.len(), 2);
    assert_eq!(doc.apis.len(), 2);
    assert_eq!(doc.apis[0].route, "api/Orders/{id}");
    assert_eq!(doc.apis[1].route, "api/Orders/Save");
}

#[test]
fn test_load_json_catalog() {
    let json = serde_json::json!({
        "types": [
            {
                "key": "Billing.Invoice",
                "name": "Invoice",
                "module": "Billing",
                "shape": { "kind": "struct" },
                "properties": [{ "name": "Due", "type": "datetime" }]
            },
            {
                "key": "Task[Billing.Invoice]",
                "name": "Task",
                "module": "System",
                "shape": { "kind": "async", "result": "Billing.Invoice" }
            }
        ]
    });
    let file = write_temp(&json.to_string(), "json");
    let catalog = load_catalog(file.path()).unwrap();
    assert!(matches!(
        catalog.describe(&"Task[Billing.Invoice]".into()).unwrap().shape,
        TypeShape::Async { result: Some(_) }
    ));
    assert!(catalog.validate().is_empty());
}

#[test]
fn test_load_catalog_reports_path_on_parse_error() {
    let file = write_temp("types: [ { key: A } ]", "yml");
    let err = load_catalog(file.path()).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("invalid type catalog"));
    assert!(message.contains("YAML"));
}

#[test]
fn test_invalid_catalog_fails_validation() {
    let broken = SHOP_YAML.replace("type: string", "type: Shop.Sku");
    let file = write_temp(&broken, "yaml");
    let catalog = load_catalog(file.path()).unwrap();
    let issues = catalog.validate();
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].kind, "DanglingTypeKey");
    assert_eq!(issues[0].location, "type:Shop.OrderLine");

    match fail_if_issues(issues) {
        Err(InspectError::InvalidCatalog { count, .. }) => assert_eq!(count, 1),
        other => panic!("expected InvalidCatalog, got {other:?}"),
    }
}

#[test]
fn test_options_file_round_trip() {
    let file = write_temp(
        "searched_modules: [Shop]\ncontroller_suffix: Api\nextra_entry_points: [Shop.OrderLine]\n",
        "yaml",
    );
    let options = InspectOptions::load(file.path()).unwrap();
    assert_eq!(options.searched_modules, vec!["Shop"]);
    assert_eq!(options.controller_suffix, "Api");
    assert_eq!(options.extra_entry_points, vec![TypeKey::from("Shop.OrderLine")]);

    let json = write_temp(r#"{"searched_modules":["Billing"]}"#, "json");
    let options = InspectOptions::load(json.path()).unwrap();
    assert_eq!(options.controller_suffix, "Controller");
}
