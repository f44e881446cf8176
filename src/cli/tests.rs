//! Unit tests for CLI commands

use crate::cli::{run_cli, Cli, Commands};
use clap::Parser;

#[test]
fn test_inspect_command_with_flags() {
    let cli = Cli::try_parse_from([
        "typegraph",
        "inspect",
        "--catalog",
        "shop.yaml",
        "--module",
        "Shop",
        "-m",
        "Billing",
        "--output",
        "out.json",
        "--pretty",
    ])
    .unwrap();

    match cli.command {
        Commands::Inspect {
            catalog,
            modules,
            options,
            output,
            pretty,
        } => {
            assert_eq!(catalog.to_string_lossy(), "shop.yaml");
            assert_eq!(modules, vec!["Shop", "Billing"]);
            assert!(options.is_none());
            assert_eq!(output.unwrap().to_string_lossy(), "out.json");
            assert!(pretty);
        }
        _ => panic!("Expected Inspect command"),
    }
}

#[test]
fn test_validate_command_exists() {
    let cli = Cli::try_parse_from(["typegraph", "validate", "--catalog", "shop.json"]).unwrap();
    match cli.command {
        Commands::Validate { catalog } => assert_eq!(catalog.to_string_lossy(), "shop.json"),
        _ => panic!("Expected Validate command"),
    }
}

#[test]
fn test_inspect_requires_catalog() {
    assert!(Cli::try_parse_from(["typegraph", "inspect", "--module", "Shop"]).is_err());
}

#[test]
fn test_validate_missing_file_fails() {
    let cli = Cli::try_parse_from([
        "typegraph",
        "validate",
        "--catalog",
        "/nonexistent/typegraph/catalog.yaml",
    ])
    .unwrap();
    let err = run_cli(cli).unwrap_err();
    assert!(format!("{err:#}").contains("failed to read type catalog"));
}
