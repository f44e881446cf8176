#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::temp_files::write_temp;
use std::process::Command;

const CATALOG: &str = r#"
types:
  - key: Shop.Order
    name: Order
    module: Shop
    shape: { kind: struct }
    properties:
      - { name: Id, type: int32 }
  - key: Shop.OrdersController
    name: OrdersController
    module: Shop
    shape: { kind: struct }
    controller: { route: "api/[controller]" }
    methods:
      - name: Get
        returns: Shop.Order
        verbs: [{ verb: GET, template: "{id}" }]
        parameters:
          - { name: id, type: int32 }
"#;

fn typegraph() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_typegraph"));
    cmd.env_remove("RUST_LOG")
        .env_remove("TYPEGRAPH_MODULES")
        .env("TYPEGRAPH_LOG_LEVEL", "error");
    cmd
}

#[test]
fn test_inspect_writes_document_to_stdout() {
    let catalog = write_temp(CATALOG, "yaml");
    let output = typegraph()
        .args(["inspect", "--module", "Shop", "--catalog"])
        .arg(catalog.path())
        .output()
        .expect("failed to run typegraph");
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let doc: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(doc["definitions"].as_array().unwrap().len(), 1);
    assert_eq!(doc["definitions"][0]["type"], "struct");
    assert_eq!(doc["apis"][0]["route"], "api/Orders/{id}");
    assert_eq!(doc["apis"][0]["parameters"][0]["position"], "route");
}

#[test]
fn test_inspect_reads_modules_from_env_and_writes_file() {
    let catalog = write_temp(CATALOG, "yaml");
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("doc.json");
    let output = typegraph()
        .env("TYPEGRAPH_MODULES", "Shop")
        .args(["inspect", "--pretty", "--catalog"])
        .arg(catalog.path())
        .arg("--output")
        .arg(&out)
        .output()
        .expect("failed to run typegraph");
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert!(output.stdout.is_empty());

    let written = std::fs::read_to_string(&out).unwrap();
    assert!(written.contains("\n  \"definitions\""));
    let doc: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(doc["apis"][0]["verb"], "GET");
}

#[test]
fn test_validate_reports_issues_and_fails() {
    let catalog = write_temp(&CATALOG.replace("type: int32 }\n  - key", "type: Shop.Id }\n  - key"), "yaml");
    let output = typegraph()
        .args(["validate", "--catalog"])
        .arg(catalog.path())
        .output()
        .expect("failed to run typegraph");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("[DanglingTypeKey] type:Shop.Order"));
}

#[test]
fn test_validate_clean_catalog() {
    let catalog = write_temp(CATALOG, "yaml");
    let output = typegraph()
        .args(["validate", "--catalog"])
        .arg(catalog.path())
        .output()
        .expect("failed to run typegraph");
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("no issues"));
}
