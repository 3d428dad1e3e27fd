//! Tests for CLI dispatch logic.

use std::path::{Path, PathBuf};

use super::*;
use crate::commands::generate::GenerateArgs;
use crate::commands::list::ListFormat;

fn params(args: &[&str]) -> GenerateParams {
    let m = build_cli()
        .try_get_matches_from(std::iter::once("solgen").chain(args.iter().copied()))
        .unwrap();
    GenerateParams::from_matches(&m)
}

#[test]
fn bare_invocation_uses_defaults() {
    let p = params(&[]);

    assert_eq!(p.metadata, PathBuf::from("metadata/operations.json"));
    assert_eq!(p.library, None);
    assert!(!p.dry_run);
    assert!(!p.list);
    assert_eq!(p.format, ListFormat::Text);
    assert_eq!(p.verbose, 0);

    let args: GenerateArgs = p.into();
    assert_eq!(args.layout.library_path(), Path::new("FHE.sol"));
    assert_eq!(args.layout.abi_path(), Path::new("solidity/tests/abis.ts"));
    assert_eq!(args.list, None);
}

#[test]
fn output_paths_override_layout() {
    let p = params(&[
        "-m",
        "ops.json",
        "--library",
        "out/FHE.sol",
        "--contracts-dir",
        "out/tests",
        "--abi",
        "out/abis.ts",
    ]);
    assert_eq!(p.metadata, PathBuf::from("ops.json"));

    let args: GenerateArgs = p.into();
    assert_eq!(args.layout.library_path(), Path::new("out/FHE.sol"));
    assert_eq!(args.layout.contract_path("Add"), PathBuf::from("out/tests/Add.sol"));
    assert_eq!(args.layout.abi_path(), Path::new("out/abis.ts"));
}

#[test]
fn partial_override_keeps_other_defaults() {
    let args: GenerateArgs = params(&["--abi", "abis.ts"]).into();

    assert_eq!(args.layout.library_path(), Path::new("FHE.sol"));
    assert_eq!(
        args.layout.contract_path("Lt"),
        PathBuf::from("solidity/tests/contracts/Lt.sol")
    );
    assert_eq!(args.layout.abi_path(), Path::new("abis.ts"));
}

#[test]
fn list_carries_format() {
    let args: GenerateArgs = params(&["--list", "--format", "json"]).into();
    assert_eq!(args.list, Some(ListFormat::Json));

    let args: GenerateArgs = params(&["--list"]).into();
    assert_eq!(args.list, Some(ListFormat::Text));
}

#[test]
fn format_without_list_is_ignored() {
    let args: GenerateArgs = params(&["--format", "json"]).into();
    assert_eq!(args.list, None);
}

#[test]
fn unknown_format_is_rejected() {
    let result = build_cli().try_get_matches_from(["solgen", "--list", "--format", "yaml"]);
    assert!(result.is_err());
}

#[test]
fn list_conflicts_with_dry_run() {
    let result = build_cli().try_get_matches_from(["solgen", "--list", "--dry-run"]);
    assert!(result.is_err());
}

#[test]
fn verbosity_counts() {
    assert_eq!(params(&["-v"]).verbose, 1);
    assert_eq!(params(&["-vv"]).verbose, 2);
    assert!(params(&["--dry-run"]).dry_run);
}

#[test]
fn command_is_well_formed() {
    build_cli().debug_assert();
}
